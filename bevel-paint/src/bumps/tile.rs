use std::sync::Arc;

use crate::bumps::BumpBuffer;
use crate::geometry::Rect;
use crate::surface::Surface;

/// One clipped blit of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBlit {
    /// Destination left edge.
    pub x: i32,
    /// Destination top edge.
    pub y: i32,
    /// Copied width, at most the tile size.
    pub width: u32,
    /// Copied height, at most the tile size.
    pub height: u32,
}

/// Row-major iterator over the blits that cover an area with a square tile.
///
/// The blits never overlap and never extend past the area. Areas reaching the
/// end of the coordinate space stop at `i32::MAX`.
#[derive(Debug, Clone)]
pub struct Tiles {
    left: i32,
    right: i32,
    bottom: i32,
    tile: i32,
    next: Option<(i32, i32)>,
}

impl Tiles {
    /// Cover `area` with tiles of edge `tile`.
    pub fn new(area: Rect, tile: u32) -> Self {
        let tile = tile.min(i32::MAX as u32) as i32;
        Self {
            left: area.x,
            right: area.x.saturating_add(area.width),
            bottom: area.y.saturating_add(area.height),
            tile,
            next: (!area.is_empty() && tile > 0).then_some((area.x, area.y)),
        }
    }

    fn span(&self, from: i32, to: i32) -> u32 {
        (i64::from(to) - i64::from(from)).min(i64::from(self.tile)) as u32
    }
}

impl Iterator for Tiles {
    type Item = TileBlit;

    fn next(&mut self) -> Option<TileBlit> {
        let (x, y) = self.next?;
        let blit = TileBlit {
            x,
            y,
            width: self.span(x, self.right),
            height: self.span(y, self.bottom),
        };
        self.next = match x.checked_add(self.tile).filter(|&next_x| next_x < self.right) {
            Some(next_x) => Some((next_x, y)),
            None => y
                .checked_add(self.tile)
                .filter(|&next_y| next_y < self.bottom)
                .map(|next_y| (self.left, next_y)),
        };
        Some(blit)
    }
}

/// Cover `area` with copies of `buffer`, clipping the last row and column.
pub fn paint_tiled(surface: &mut dyn Surface, buffer: &Arc<BumpBuffer>, area: Rect) {
    for blit in Tiles::new(area, buffer.width()) {
        surface.draw_image(buffer, blit.x, blit.y, blit.width, blit.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_has_no_partial_tiles() {
        let blits: Vec<_> = Tiles::new(Rect::new(0, 0, 128, 64), 64).collect();
        assert_eq!(
            blits,
            [
                TileBlit { x: 0, y: 0, width: 64, height: 64 },
                TileBlit { x: 64, y: 0, width: 64, height: 64 },
            ]
        );
    }

    #[test]
    fn last_column_and_row_are_clipped() {
        let blits: Vec<_> = Tiles::new(Rect::new(5, 5, 70, 65), 64).collect();
        assert_eq!(blits.len(), 4);
        assert_eq!(blits[1], TileBlit { x: 69, y: 5, width: 6, height: 64 });
        assert_eq!(blits[3], TileBlit { x: 69, y: 69, width: 6, height: 1 });
    }

    #[test]
    fn area_at_the_end_of_the_coordinate_space() {
        let area = Rect::new(i32::MAX - 100, i32::MAX - 70, 100, 70);
        let blits: Vec<_> = Tiles::new(area, 64).collect();
        assert_eq!(blits.len(), 4);
        assert_eq!(
            blits[3],
            TileBlit { x: i32::MAX - 36, y: i32::MAX - 6, width: 36, height: 6 }
        );
    }

    #[test]
    fn empty_area_yields_nothing() {
        assert_eq!(Tiles::new(Rect::new(0, 0, 0, 10), 64).count(), 0);
        assert_eq!(Tiles::new(Rect::new(0, 0, 10, 10), 0).count(), 0);
    }
}
