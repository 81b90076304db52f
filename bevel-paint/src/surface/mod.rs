//! # Drawing Surfaces
//!
//! [Surface] is the only way painters touch pixels. It offers the handful of
//! primitives bevelled borders are made of, with pixel-exact semantics:
//!
//! - lines include both end points,
//! - [Surface::draw_rect] outlines a `width + 1` by `height + 1` pixel box,
//! - images are blitted from their top-left corner, clipped to the requested size.
//!
//! Three implementations ship with the crate: [DisplayList] records primitives,
//! [Pixmap] rasterizes into an RGBA image and [SceneSurface] emits into a vello scene.
//! [ClippedSurface] wraps any of them to keep output inside a rectangle.

use std::sync::Arc;

use crate::bumps::BumpBuffer;
use crate::geometry::Rect;
use crate::Color;

mod clip;
mod display_list;
mod pixmap;
mod scene;

pub use clip::ClippedSurface;
pub use display_list::{DisplayList, Primitive};
pub use pixmap::Pixmap;
pub use scene::SceneSurface;

/// A target painters draw into.
pub trait Surface {
    /// Draw a one pixel wide line from `(x1, y1)` to `(x2, y2)`, both ends included.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color);

    /// Fill every pixel inside `rect`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Copy the top-left `width` by `height` pixels of `buffer` to `(x, y)`.
    ///
    /// Transparent buffer pixels leave the surface untouched.
    fn draw_image(&mut self, buffer: &Arc<BumpBuffer>, x: i32, y: i32, width: u32, height: u32);

    /// Outline the box from `(x, y)` to `(x + width, y + height)` inclusive.
    ///
    /// A negative width or height draws nothing.
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width < 0 || height < 0 {
            return;
        }
        if width == 0 || height == 0 {
            self.draw_line(x, y, x + width, y + height, color);
            return;
        }
        self.draw_line(x, y, x + width - 1, y, color);
        self.draw_line(x + width, y, x + width, y + height - 1, color);
        self.draw_line(x + width, y + height, x + 1, y + height, color);
        self.draw_line(x, y + height, x, y + 1, color);
    }
}

/// Visit every pixel of a line, end points included.
pub(crate) fn line_pixels(x1: i32, y1: i32, x2: i32, y2: i32, mut visit: impl FnMut(i32, i32)) {
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let (mut x, mut y) = (x1, y1);
    let mut err = dx + dy;
    loop {
        visit(x, y);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_pixels_include_both_ends() {
        let mut pixels = Vec::new();
        line_pixels(3, 1, 0, 1, |x, y| pixels.push((x, y)));
        assert_eq!(pixels, [(3, 1), (2, 1), (1, 1), (0, 1)]);
    }

    #[test]
    fn diagonal_line_steps_both_axes() {
        let mut pixels = Vec::new();
        line_pixels(0, 0, 2, 2, |x, y| pixels.push((x, y)));
        assert_eq!(pixels, [(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn draw_rect_covers_one_extra_pixel() {
        let mut pixmap = Pixmap::new(6, 6);
        pixmap.draw_rect(1, 1, 3, 2, Color::BLACK);
        assert!(pixmap.is_set(1, 1));
        assert!(pixmap.is_set(4, 1));
        assert!(pixmap.is_set(4, 3));
        assert!(pixmap.is_set(1, 3));
        assert!(!pixmap.is_set(2, 2));
        assert!(!pixmap.is_set(5, 1));
        assert_eq!(pixmap.count_set(), 10);
    }
}
