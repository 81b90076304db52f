use std::sync::Arc;

use image::{Rgba, RgbaImage};

use crate::bumps::BumpBuffer;
use crate::geometry::Rect;
use crate::surface::{line_pixels, Surface};
use crate::Color;

/// A [Surface] that rasterizes into an RGBA image.
///
/// Drawing outside the image is clipped. Translucent colors are blended source-over.
#[derive(Debug, Clone)]
pub struct Pixmap {
    image: RgbaImage,
}

impl Pixmap {
    /// A fully transparent pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// A pixmap filled with one color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let c = color.to_rgba8();
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([c.r, c.g, c.b, c.a])),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 {
            return None;
        }
        self.image.get_pixel_checked(x as u32, y as u32).map(|p| p.0)
    }

    /// Whether anything has been drawn at `(x, y)`.
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        self.pixel(x, y).is_some_and(|p| p[3] != 0)
    }

    /// Number of pixels with non-zero alpha.
    pub fn count_set(&self) -> usize {
        self.image.pixels().filter(|p| p.0[3] != 0).count()
    }

    /// The backing image.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the pixmap, returning the backing image.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn blend(&mut self, x: i32, y: i32, src: [u8; 4]) {
        if x < 0 || y < 0 || src[3] == 0 {
            return;
        }
        let Some(dst) = self.image.get_pixel_mut_checked(x as u32, y as u32) else {
            return;
        };
        if src[3] == 255 {
            dst.0 = src;
            return;
        }
        let sa = src[3] as u32;
        let da = dst.0[3] as u32;
        let out_a = sa * 255 + da * (255 - sa);
        for i in 0..3 {
            let s = src[i] as u32 * sa * 255;
            let d = dst.0[i] as u32 * da * (255 - sa);
            dst.0[i] = ((s + d) / out_a.max(1)) as u8;
        }
        dst.0[3] = (out_a / 255) as u8;
    }

    fn plot(&mut self, x: i32, y: i32, color: Color) {
        let c = color.to_rgba8();
        self.blend(x, y, [c.r, c.g, c.b, c.a]);
    }
}

impl Surface for Pixmap {
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        line_pixels(x1, y1, x2, y2, |x, y| self.plot(x, y, color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let bounds = Rect::from_size(self.width() as i32, self.height() as i32);
        let Some(rect) = rect.intersection(&bounds) else {
            return;
        };
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.plot(x, y, color);
            }
        }
    }

    fn draw_image(&mut self, buffer: &Arc<BumpBuffer>, x: i32, y: i32, width: u32, height: u32) {
        let width = width.min(buffer.width());
        let height = height.min(buffer.height());
        for sy in 0..height {
            for sx in 0..width {
                self.blend(x + sx as i32, y + sy as i32, buffer.pixel(sx, sy));
            }
        }
    }
}
