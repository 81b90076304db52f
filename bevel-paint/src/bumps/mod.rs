//! # Bump Textures
//!
//! Bumps are the diagonal dot grip drawn on title bars, tool bar handles and split
//! pane dividers. A [BumpBuffer] holds one 64x64 tile of the pattern for a color
//! triple; [BumpCache] shares tiles between every painter asking for the same colors
//! on the same device; [paint_tiled] covers an arbitrary area with clipped blits.
//!
//! ```rust
//! use bevel_paint::bumps::{paint_tiled, BumpCache};
//! use bevel_paint::geometry::Rect;
//! use bevel_paint::surface::DisplayList;
//! use bevel_paint::Color;
//!
//! let cache = BumpCache::new(8);
//! let buffer = cache.buffer(None, Color::WHITE, Color::BLACK, Color::from_rgb8(204, 204, 204));
//! let mut list = DisplayList::new();
//! paint_tiled(&mut list, &buffer, Rect::new(0, 0, 100, 10));
//! assert_eq!(list.len(), 2);
//! ```

mod buffer;
mod cache;
mod tile;

pub use buffer::{BumpBuffer, BumpKey, BUMP_BUFFER_SIZE, BUMP_SPACING};
pub use cache::{BumpCache, CacheStats};
pub use tile::{paint_tiled, TileBlit, Tiles};
