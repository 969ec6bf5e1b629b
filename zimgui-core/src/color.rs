//! Color values and the packed pixel format used by the off-screen canvas.
//!
//! Canvas pixels are `0xAARRGGBB` in a `u32`. On little-endian targets the
//! in-memory byte order is B, G, R, A, which is what both a 32-bit DIB and a
//! `Bgra8Unorm` texture expect, so a frame can be blitted without swizzling.

use serde::{Deserialize, Serialize};

/// A linear RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Decode a Win32 `COLORREF` (`0x00BBGGRR`). Always opaque.
    pub fn from_colorref(colorref: u32) -> Self {
        let r = (colorref & 0xFF) as u8;
        let g = ((colorref >> 8) & 0xFF) as u8;
        let b = ((colorref >> 16) & 0xFF) as u8;
        Self::from_rgba8(r, g, b, 255)
    }

    /// Clamp and truncate each channel to 8 bits.
    pub fn to_srgb8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0) as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Pack into a canvas pixel (`0xAARRGGBB`).
    pub fn to_pixel(&self) -> u32 {
        let [r, g, b, a] = self.to_srgb8();
        pack_pixel(r, g, b, a)
    }

    /// Multiply channel-wise (used for texture tinting).
    pub fn modulate(&self, other: Rgba) -> Rgba {
        Rgba::new(
            self.r * other.r,
            self.g * other.g,
            self.b * other.b,
            self.a * other.a,
        )
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

pub fn pack_pixel(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Split a canvas pixel into `[r, g, b, a]`.
pub fn unpack_pixel(px: u32) -> [u8; 4] {
    [
        ((px >> 16) & 0xFF) as u8,
        ((px >> 8) & 0xFF) as u8,
        (px & 0xFF) as u8,
        (px >> 24) as u8,
    ]
}

/// Source-over blend of `src` onto the destination pixel, with an extra
/// coverage factor in `0.0..=1.0`. Output is always opaque when the
/// destination was opaque.
pub fn blend_over(dst: u32, src: Rgba, coverage: f32) -> u32 {
    let alpha = (src.a * coverage).clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return dst;
    }
    if alpha >= 1.0 {
        return Rgba::new(src.r, src.g, src.b, 1.0).to_pixel();
    }

    let [dr, dg, db, da] = unpack_pixel(dst);
    let mix = |s: f32, d: u8| {
        let d = d as f32 / 255.0;
        ((s.clamp(0.0, 1.0) * alpha + d * (1.0 - alpha)) * 255.0 + 0.5) as u8
    };
    let out_a = ((alpha + (da as f32 / 255.0) * (1.0 - alpha)) * 255.0 + 0.5) as u8;
    pack_pixel(mix(src.r, dr), mix(src.g, dg), mix(src.b, db), out_a)
}
