#![warn(missing_docs)]

//! Classic bevelled desktop looks: themes, state-driven borders and icons, and bump textures.
//!
//! bevel decides *what* a border or icon looks like for a widget's current state and
//! emits pixel-exact primitives into a [Surface](paint::surface::Surface). Layout, event
//! handling and text are left to the host toolkit.

pub use vello::peniko as color;

pub use bevel_paint as paint;
pub use bevel_theme as theme;

/// The UI defaults table.
pub mod defaults;
/// Contains the [look_and_feel::LookAndFeel] struct.
pub mod look_and_feel;

/// A "prelude" for hosts of the bevel look.
///
/// ```rust
/// use bevel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::defaults::{DefaultValue, UiDefaults};
    pub use crate::look_and_feel::LookAndFeel;

    // Theme
    pub use bevel_theme::config::LookConfig;
    pub use bevel_theme::registry::{ThemeRegistry, ThemeScope};
    pub use bevel_theme::theme::{ColorRole, FontRole, Theme};

    // Painting
    pub use bevel_paint::geometry::{Insets, Rect};
    pub use bevel_paint::painter::{Border, BorderKind, Icon, IconKind, PaintContext};
    pub use bevel_paint::surface::{DisplayList, Pixmap, SceneSurface, Surface};
    pub use bevel_paint::widget::{Capabilities, StateFlags, WidgetModel, WidgetView};

    // Color
    pub use vello::peniko::Color;
}
