use std::sync::Arc;

use vello::kurbo::{Affine, Line, Rect as KurboRect, Stroke};
use vello::peniko::{Brush, Fill};
use vello::Scene;

use crate::bumps::BumpBuffer;
use crate::geometry::Rect;
use crate::surface::Surface;
use crate::Color;

/// A [Surface] that emits into a vello [Scene].
///
/// Axis-aligned lines and blits become filled pixel rectangles so that edges land
/// exactly on the device pixel grid; diagonal lines are stroked through pixel centers.
pub struct SceneSurface<'a> {
    scene: &'a mut Scene,
    transform: Affine,
}

impl<'a> SceneSurface<'a> {
    /// Create a new surface drawing into `scene`.
    pub fn new(scene: &'a mut Scene) -> Self {
        Self {
            scene,
            transform: Affine::IDENTITY,
        }
    }

    /// Apply a transform to everything drawn afterwards.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Get a mutable reference to the underlying Scene.
    pub fn scene_mut(&mut self) -> &mut Scene {
        self.scene
    }

    fn fill_pixels(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let rect = KurboRect::new(x0 as f64, y0 as f64, (x1 + 1) as f64, (y1 + 1) as f64);
        self.scene
            .fill(Fill::NonZero, self.transform, &Brush::Solid(color), None, &rect);
    }
}

impl Surface for SceneSurface<'_> {
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        if x1 == x2 || y1 == y2 {
            self.fill_pixels(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2), color);
            return;
        }
        let line = Line::new(
            (x1 as f64 + 0.5, y1 as f64 + 0.5),
            (x2 as f64 + 0.5, y2 as f64 + 0.5),
        );
        self.scene.stroke(
            &Stroke::new(1.0),
            self.transform,
            &Brush::Solid(color),
            None,
            &line,
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.fill_pixels(rect.x, rect.y, rect.right() - 1, rect.bottom() - 1, color);
    }

    fn draw_image(&mut self, buffer: &Arc<BumpBuffer>, x: i32, y: i32, width: u32, height: u32) {
        let width = width.min(buffer.width());
        let height = height.min(buffer.height());
        // One rectangle per run of equal pixels in a row.
        for sy in 0..height {
            let mut sx = 0;
            while sx < width {
                let pixel = buffer.pixel(sx, sy);
                let mut end = sx + 1;
                while end < width && buffer.pixel(end, sy) == pixel {
                    end += 1;
                }
                if pixel[3] != 0 {
                    let color = Color::from_rgba8(pixel[0], pixel[1], pixel[2], pixel[3]);
                    let py = y + sy as i32;
                    self.fill_pixels(x + sx as i32, py, x + end as i32 - 1, py, color);
                }
                sx = end;
            }
        }
    }
}
