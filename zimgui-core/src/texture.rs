//! Immutable RGBA8 images sampled by the textured-quad primitive.

use std::path::Path;

use crate::color::Rgba;
use crate::error::{HostError, Result};

#[derive(Clone, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    /// Row-major, 4 bytes per texel (R, G, B, A).
    data: Vec<u8>,
}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Texture {
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(HostError::Texture(format!(
                "{}x{} texture needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A single-color texture.
    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        let texel = color.to_srgb8();
        let data = texel
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Decode any format the `image` crate was built with.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| HostError::Texture(format!("{}: {}", path.display(), e)))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        tracing::debug!(path = %path.display(), width, height, "texture loaded");
        Self::from_rgba8(width, height, img.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texel at integer coordinates, `None` when out of bounds.
    pub fn texel(&self, x: i64, y: i64) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let t = &self.data[i..i + 4];
        Some(Rgba::from_rgba8(t[0], t[1], t[2], t[3]))
    }
}
