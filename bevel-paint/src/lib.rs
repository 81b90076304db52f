#![warn(missing_docs)]

//! # bevel Painting
//!
//! State-driven border and icon painters for classic bevelled desktop looks.
//!
//! ## Overview
//!
//! - **[Surface](surface::Surface)**: the drawing seam painters emit pixel-exact primitives into
//! - **[WidgetModel](widget::WidgetModel)**: the state a painter reads from the widget it decorates
//! - **[Border](painter::Border) / [Icon](painter::Icon)**: stateless painters selected by kind
//! - **[PainterFactory](painter::PainterFactory)**: lazily built, shared painter instances
//! - **[BumpCache](bumps::BumpCache)**: tileable dot-texture buffers shared across painters
//!
//! Painters never store the theme. Colors are read from the [ThemeScope](bevel_theme::registry::ThemeScope)
//! when a [PaintContext](painter::PaintContext) is opened, so a theme switch shows up on the next repaint.

/// Bump texture buffers and their cache.
pub mod bumps;
/// Rendering device descriptions.
pub mod device;
/// Error types.
pub mod error;
/// Integer rectangles and insets.
pub mod geometry;
/// Border and icon painters.
pub mod painter;
/// Drawing surfaces.
pub mod surface;
/// Widget state as seen by painters.
pub mod widget;

pub use bevel_theme::Color;
