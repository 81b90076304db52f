//! Integer device-pixel geometry.
//!
//! All painter output is pixel-exact, so coordinates are whole pixels with the
//! origin at the top-left corner and y growing downwards.

/// An axis-aligned rectangle in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle at the origin.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Whether the rectangle covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the pixel at `(x, y)` lies inside.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.right() && y < self.bottom()
    }

    /// The overlap of two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let rect = Rect::new(x, y, right - x, bottom - y);
        (!rect.is_empty()).then_some(rect)
    }

    /// Shrink by the given insets.
    pub const fn inset(&self, insets: Insets) -> Rect {
        Rect::new(
            self.x + insets.left,
            self.y + insets.top,
            self.width - insets.left - insets.right,
            self.height - insets.top - insets.bottom,
        )
    }
}

/// Space a border reserves on each side of its widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Insets {
    /// Top inset.
    pub top: i32,
    /// Left inset.
    pub left: i32,
    /// Bottom inset.
    pub bottom: i32,
    /// Right inset.
    pub right: i32,
}

impl Insets {
    /// No insets.
    pub const ZERO: Insets = Insets::new(0, 0, 0, 0);

    /// Create insets in top, left, bottom, right order.
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on every side.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Total horizontal inset.
    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_clips_to_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 7, 10, 10);
        assert_eq!(a.intersection(&b), Some(Rect::new(5, 7, 5, 3)));
        assert_eq!(a.intersection(&Rect::new(10, 0, 4, 4)), None);
    }

    #[test]
    fn inset_shrinks_each_side() {
        let rect = Rect::new(10, 10, 40, 20).inset(Insets::new(2, 3, 2, 3));
        assert_eq!(rect, Rect::new(13, 12, 34, 16));
    }
}
