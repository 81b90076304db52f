use std::sync::Arc;

use crate::bumps::BumpBuffer;
use crate::geometry::Rect;
use crate::surface::Surface;
use crate::Color;

/// One recorded drawing operation.
#[derive(Debug, Clone)]
pub enum Primitive {
    /// A line, both ends included.
    Line {
        /// Start point.
        from: (i32, i32),
        /// End point.
        to: (i32, i32),
        /// Line color.
        color: Color,
    },
    /// A filled rectangle.
    Fill {
        /// Covered area.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A clipped bump buffer blit.
    Image {
        /// Source buffer.
        buffer: Arc<BumpBuffer>,
        /// Destination left edge.
        x: i32,
        /// Destination top edge.
        y: i32,
        /// Copied width.
        width: u32,
        /// Copied height.
        height: u32,
    },
}

/// A [Surface] that records primitives for later replay or inspection.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    primitives: Vec<Primitive>,
}

impl DisplayList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded primitives in emission order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of recorded primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// Destination rectangles of recorded image blits.
    pub fn image_blits(&self) -> impl Iterator<Item = Rect> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Image {
                x, y, width, height, ..
            } => Some(Rect::new(*x, *y, *width as i32, *height as i32)),
            _ => None,
        })
    }

    /// Draw every recorded primitive into another surface.
    pub fn replay(&self, target: &mut dyn Surface) {
        for primitive in &self.primitives {
            match primitive {
                Primitive::Line { from, to, color } => {
                    target.draw_line(from.0, from.1, to.0, to.1, *color)
                },
                Primitive::Fill { rect, color } => target.fill_rect(*rect, *color),
                Primitive::Image {
                    buffer,
                    x,
                    y,
                    width,
                    height,
                } => target.draw_image(buffer, *x, *y, *width, *height),
            }
        }
    }
}

impl Surface for DisplayList {
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.primitives.push(Primitive::Line {
            from: (x1, y1),
            to: (x2, y2),
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if !rect.is_empty() {
            self.primitives.push(Primitive::Fill { rect, color });
        }
    }

    fn draw_image(&mut self, buffer: &Arc<BumpBuffer>, x: i32, y: i32, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.primitives.push(Primitive::Image {
            buffer: Arc::clone(buffer),
            x,
            y,
            width,
            height,
        });
    }
}
