// zimgui-core/src/canvas.rs
//! Off-screen frame buffer.
//!
//! A `Canvas` is allocated at the start of every paint, cleared to the
//! window background, handed to the UI core, then blitted to the visible
//! surface in one copy and dropped. All coverage tests sample pixel
//! centers, so a rect from (0,0) to (2,2) touches exactly four pixels.

use crate::color::{Rgba, blend_over};
use crate::geometry::{Point, Rect, Size};
use crate::texture::Texture;

pub struct Canvas {
    size: Size,
    pixels: Vec<u32>,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas").field("size", &self.size).finish()
    }
}

/// Corner geometry for [`Canvas::fill_rounded_polygon`], in the
/// game-library convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roundness {
    /// Fraction of the shorter side used as corner diameter, `0.0..=1.0`.
    pub roundness: f32,
    /// Line segments per corner arc. Anything below
    /// [`Roundness::MIN_SEGMENTS`] picks a smooth arc.
    pub segments: u32,
}

impl Roundness {
    /// Fewest segments drawn as a polygon; lower counts are automatic.
    pub const MIN_SEGMENTS: u32 = 4;

    /// Derive roundness from a pixel radius: `radius / min(w, h)`, with one
    /// segment per pixel of radius and automatic segmentation past 15.
    pub fn from_radius(rect: Rect, radius: f32) -> Self {
        let min_side = rect.min_side();
        let roundness = if min_side > 0.0 { radius / min_side } else { 0.0 };
        let mut segments = radius.max(0.0) as u32;
        if segments > 15 {
            segments = 0;
        }
        Self {
            roundness,
            segments,
        }
    }
}

impl Canvas {
    /// Allocate a canvas of `size` filled with `background`.
    pub fn new(size: Size, background: Rgba) -> Self {
        let px = Rgba::new(background.r, background.g, background.b, 1.0).to_pixel();
        Self {
            size,
            pixels: vec![px; size.area()],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Packed `0xAARRGGBB` pixels, row-major, no padding.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The pixel buffer as bytes (B, G, R, A per pixel on little-endian).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.size.width as usize + x as usize)
            .copied()
    }

    pub fn clear(&mut self, color: Rgba) {
        let px = Rgba::new(color.r, color.g, color.b, 1.0).to_pixel();
        self.pixels.fill(px);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.fill_with(rect, color, |_, _| true);
    }

    /// Filled rectangle with elliptical corners, no outline.
    ///
    /// `corner_w`/`corner_h` are the width and height of the ellipse used
    /// for the corners, as in GDI `RoundRect`.
    pub fn fill_rounded_rect(&mut self, rect: Rect, corner_w: f32, corner_h: f32, color: Rgba) {
        let rx = (corner_w / 2.0).clamp(0.0, rect.width / 2.0);
        let ry = (corner_h / 2.0).clamp(0.0, rect.height / 2.0);
        if rx <= 0.0 || ry <= 0.0 {
            self.fill_rect(rect, color);
            return;
        }

        self.fill_with(rect, color, |x, y| {
            let Some((dx, dy)) = corner_offset(rect, rx, ry, x, y) else {
                return true;
            };
            let (nx, ny) = (dx / rx, dy / ry);
            nx * nx + ny * ny <= 1.0
        });
    }

    /// Filled rectangle whose corner arcs are approximated with
    /// `shape.segments` straight edges each.
    pub fn fill_rounded_polygon(&mut self, rect: Rect, shape: Roundness, color: Rgba) {
        let roundness = shape.roundness.min(1.0);
        if roundness <= 0.0 || rect.is_empty() {
            self.fill_rect(rect, color);
            return;
        }

        let radius = rect.min_side() * roundness / 2.0;
        if radius <= 0.0 {
            self.fill_rect(rect, color);
            return;
        }
        if shape.segments < Roundness::MIN_SEGMENTS {
            self.fill_rounded_rect(rect, radius * 2.0, radius * 2.0, color);
            return;
        }

        let step = std::f32::consts::FRAC_PI_2 / shape.segments as f32;
        self.fill_with(rect, color, |x, y| {
            let Some((dx, dy)) = corner_offset(rect, radius, radius, x, y) else {
                return true;
            };
            let theta = dy.atan2(dx);
            let k = ((theta / step) as u32).min(shape.segments - 1) as f32;
            let (a0, a1) = (k * step, (k + 1.0) * step);
            let (ax, ay) = (radius * a0.cos(), radius * a0.sin());
            let (bx, by) = (radius * a1.cos(), radius * a1.sin());
            // Inside when the point lies on the origin side of chord a→b.
            (bx - ax) * (dy - ay) - (by - ay) * (dx - ax) >= -1e-4
        });
    }

    /// Draw part of `texture` into a rotated, tinted quad.
    ///
    /// `dest.x`/`dest.y` is where `origin` (relative to the quad's top-left)
    /// lands; the quad rotates `rotation` degrees clockwise around it. A
    /// negative `source.width`/`height` mirrors the sampled region.
    pub fn draw_texture(
        &mut self,
        texture: &Texture,
        source: Rect,
        dest: Rect,
        origin: Point,
        rotation: f32,
        tint: Rgba,
    ) {
        if dest.is_empty() || source.width == 0.0 || source.height == 0.0 {
            return;
        }

        let (flip_x, src_w) = (source.width < 0.0, source.width.abs());
        let (flip_y, src_h) = (source.height < 0.0, source.height.abs());
        let (sin, cos) = rotation.to_radians().sin_cos();

        let to_world = |lx: f32, ly: f32| {
            let (ox, oy) = (lx - origin.x, ly - origin.y);
            (dest.x + ox * cos - oy * sin, dest.y + ox * sin + oy * cos)
        };
        let corners = [
            to_world(0.0, 0.0),
            to_world(dest.width, 0.0),
            to_world(0.0, dest.height),
            to_world(dest.width, dest.height),
        ];
        let min_x = corners.iter().map(|c| c.0).fold(f32::INFINITY, f32::min);
        let max_x = corners.iter().map(|c| c.0).fold(f32::NEG_INFINITY, f32::max);
        let min_y = corners.iter().map(|c| c.1).fold(f32::INFINITY, f32::min);
        let max_y = corners.iter().map(|c| c.1).fold(f32::NEG_INFINITY, f32::max);

        let Some((x0, x1, y0, y1)) = self.clip_span(min_x, max_x, min_y, max_y) else {
            return;
        };
        let width = self.size.width as usize;

        for py in y0..y1 {
            for px in x0..x1 {
                let (wx, wy) = (px as f32 + 0.5 - dest.x, py as f32 + 0.5 - dest.y);
                // Inverse rotation back into quad-local space.
                let lx = wx * cos + wy * sin + origin.x;
                let ly = -wx * sin + wy * cos + origin.y;
                if lx < 0.0 || ly < 0.0 || lx >= dest.width || ly >= dest.height {
                    continue;
                }

                let mut fu = lx / dest.width;
                let mut fv = ly / dest.height;
                if flip_x {
                    fu = 1.0 - fu;
                }
                if flip_y {
                    fv = 1.0 - fv;
                }
                let u = (source.x + fu * src_w).floor() as i64;
                let v = (source.y + fv * src_h).floor() as i64;
                let Some(texel) = texture.texel(u, v) else {
                    continue;
                };

                let idx = py * width + px;
                self.pixels[idx] = blend_over(self.pixels[idx], texel.modulate(tint), 1.0);
            }
        }
    }

    /// Blend `color` into every pixel of `rect` whose center passes `inside`.
    /// `inside` receives pixel-center coordinates.
    fn fill_with(&mut self, rect: Rect, color: Rgba, inside: impl Fn(f32, f32) -> bool) {
        if rect.is_empty() {
            return;
        }
        let Some((x0, x1, y0, y1)) = self.clip_span(rect.x, rect.right(), rect.y, rect.bottom())
        else {
            return;
        };
        let width = self.size.width as usize;

        for py in y0..y1 {
            let cy = py as f32 + 0.5;
            for px in x0..x1 {
                let cx = px as f32 + 0.5;
                if !rect.contains(Point::new(cx, cy)) || !inside(cx, cy) {
                    continue;
                }
                let idx = py * width + px;
                self.pixels[idx] = blend_over(self.pixels[idx], color, 1.0);
            }
        }
    }

    /// Pixel index range covering `[min, max)` in both axes, clipped to the
    /// canvas. `None` when nothing is visible.
    fn clip_span(
        &self,
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
    ) -> Option<(usize, usize, usize, usize)> {
        let w = self.size.width as f32;
        let h = self.size.height as f32;
        let x0 = min_x.floor().clamp(0.0, w) as usize;
        let x1 = max_x.ceil().clamp(0.0, w) as usize;
        let y0 = min_y.floor().clamp(0.0, h) as usize;
        let y1 = max_y.ceil().clamp(0.0, h) as usize;
        (x0 < x1 && y0 < y1).then_some((x0, x1, y0, y1))
    }
}

/// Offset of `(x, y)` from the center of the corner it falls in, mirrored
/// into the first quadrant. `None` when the point is not in a corner box.
fn corner_offset(rect: Rect, rx: f32, ry: f32, x: f32, y: f32) -> Option<(f32, f32)> {
    let dx = if x < rect.x + rx {
        rect.x + rx - x
    } else if x > rect.right() - rx {
        x - (rect.right() - rx)
    } else {
        return None;
    };
    let dy = if y < rect.y + ry {
        rect.y + ry - y
    } else if y > rect.bottom() - ry {
        y - (rect.bottom() - ry)
    } else {
        return None;
    };
    Some((dx, dy))
}
