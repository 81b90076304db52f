use std::sync::Arc;

use super::{line_pixels, Surface};
use crate::bumps::BumpBuffer;
use crate::geometry::Rect;
use crate::Color;

/// A surface that drops every pixel outside a clip rectangle.
///
/// Primitives that fit inside the clip are forwarded unchanged; only the ones
/// crossing its edge are cut down.
pub struct ClippedSurface<'a> {
    inner: &'a mut dyn Surface,
    clip: Rect,
}

impl<'a> ClippedSurface<'a> {
    /// Clip `inner` to `clip`. An empty clip draws nothing.
    pub fn new(inner: &'a mut dyn Surface, clip: Rect) -> Self {
        Self { inner, clip }
    }

    /// The clip rectangle.
    pub fn clip(&self) -> Rect {
        self.clip
    }

    fn pixel(&mut self, x: i32, y: i32, color: Color) {
        self.inner.fill_rect(Rect::new(x, y, 1, 1), color);
    }
}

impl Surface for ClippedSurface<'_> {
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let clip = self.clip;
        if clip.is_empty() {
            return;
        }
        if clip.contains(x1, y1) && clip.contains(x2, y2) {
            self.inner.draw_line(x1, y1, x2, y2, color);
            return;
        }
        if y1 == y2 {
            if y1 < clip.y || y1 >= clip.bottom() {
                return;
            }
            let from = x1.min(x2).max(clip.x);
            let to = x1.max(x2).min(clip.right() - 1);
            if from <= to {
                self.inner.draw_line(from, y1, to, y1, color);
            }
        } else if x1 == x2 {
            if x1 < clip.x || x1 >= clip.right() {
                return;
            }
            let from = y1.min(y2).max(clip.y);
            let to = y1.max(y2).min(clip.bottom() - 1);
            if from <= to {
                self.inner.draw_line(x1, from, x1, to, color);
            }
        } else {
            let mut inside = Vec::new();
            line_pixels(x1, y1, x2, y2, |x, y| {
                if clip.contains(x, y) {
                    inside.push((x, y));
                }
            });
            for (x, y) in inside {
                self.pixel(x, y, color);
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(rect) = rect.intersection(&self.clip) {
            self.inner.fill_rect(rect, color);
        }
    }

    fn draw_image(&mut self, buffer: &Arc<BumpBuffer>, x: i32, y: i32, width: u32, height: u32) {
        let width = width.min(buffer.width()).min(i32::MAX as u32) as i32;
        let height = height.min(buffer.height()).min(i32::MAX as u32) as i32;
        let Some(visible) = Rect::new(x, y, width, height).intersection(&self.clip) else {
            return;
        };
        if visible.x == x && visible.y == y {
            self.inner
                .draw_image(buffer, x, y, visible.width as u32, visible.height as u32);
            return;
        }
        // Cut on the leading side: the blit cannot start mid-buffer, so copy pixel by pixel.
        for py in visible.y..visible.bottom() {
            for px in visible.x..visible.right() {
                let [r, g, b, a] = buffer.pixel((px - x) as u32, (py - y) as u32);
                if a > 0 {
                    self.pixel(px, py, Color::from_rgba8(r, g, b, a));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DisplayList, Pixmap, Primitive};

    fn clipped_pixels(clip: Rect, draw: impl FnOnce(&mut ClippedSurface<'_>)) -> Pixmap {
        let mut pixmap = Pixmap::new(12, 12);
        draw(&mut ClippedSurface::new(&mut pixmap, clip));
        pixmap
    }

    fn assert_inside(pixmap: &Pixmap, clip: Rect) {
        for y in 0..12 {
            for x in 0..12 {
                if !clip.contains(x, y) {
                    assert!(!pixmap.is_set(x, y), "pixel ({x}, {y}) outside {clip:?}");
                }
            }
        }
    }

    #[test]
    fn inverted_lines_stay_inside() {
        let clip = Rect::new(4, 4, 1, 1);
        let pixmap = clipped_pixels(clip, |s| {
            s.draw_line(4, 4, 2, 4, Color::BLACK);
            s.draw_line(4, 6, 4, 2, Color::BLACK);
            s.draw_rect(4, 4, -1, -1, Color::BLACK);
            s.draw_rect(3, 3, 2, 2, Color::BLACK);
        });
        assert_inside(&pixmap, clip);
        assert!(pixmap.is_set(4, 4));
    }

    #[test]
    fn diagonals_are_cut_at_the_edge() {
        let clip = Rect::new(2, 2, 4, 4);
        let pixmap = clipped_pixels(clip, |s| s.draw_line(0, 0, 9, 9, Color::BLACK));
        assert_inside(&pixmap, clip);
        assert_eq!(pixmap.count_set(), 4);
    }

    #[test]
    fn empty_clip_draws_nothing() {
        let pixmap = clipped_pixels(Rect::new(3, 3, 0, 5), |s| {
            s.draw_line(3, 3, 3, 7, Color::BLACK);
            s.fill_rect(Rect::new(0, 0, 12, 12), Color::BLACK);
        });
        assert_eq!(pixmap.count_set(), 0);
    }

    #[test]
    fn primitives_inside_are_forwarded_unchanged() {
        let mut list = DisplayList::new();
        {
            let mut clipped = ClippedSurface::new(&mut list, Rect::new(0, 0, 10, 10));
            clipped.draw_line(1, 1, 8, 1, Color::BLACK);
            clipped.draw_line(0, 0, 9, 12, Color::BLACK);
        }
        assert!(matches!(
            list.primitives()[0],
            Primitive::Line { from: (1, 1), to: (8, 1), .. }
        ));
        assert!(list.len() > 2);
    }

    #[test]
    fn image_blits_are_trimmed() {
        let buffer = Arc::new(BumpBuffer::new(None, Color::WHITE, Color::BLACK, Color::BLACK));
        let mut list = DisplayList::new();
        ClippedSurface::new(&mut list, Rect::new(0, 0, 10, 6)).draw_image(&buffer, 2, 2, 64, 64);
        assert_eq!(list.image_blits().collect::<Vec<_>>(), [Rect::new(2, 2, 8, 4)]);

        let clip = Rect::new(3, 3, 4, 4);
        let pixmap = clipped_pixels(clip, |s| s.draw_image(&buffer, 0, 0, 64, 64));
        assert_inside(&pixmap, clip);
        assert_eq!(pixmap.count_set(), 16);
    }
}
