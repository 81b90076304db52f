//! # Painters
//!
//! A painter draws one kind of border or icon. Painters are stateless: every
//! paint call reads the widget's flags, picks a variant from [variant], and
//! draws it with the shared [edges] primitives or a bump texture, using colors
//! from the [PaintContext].
//!
//! ```rust
//! use std::sync::Arc;
//! use bevel_paint::bumps::BumpCache;
//! use bevel_paint::geometry::Rect;
//! use bevel_paint::painter::{BorderKind, PaintContext, PainterFactory};
//! use bevel_paint::surface::Pixmap;
//! use bevel_paint::widget::WidgetView;
//! use bevel_theme::registry::ThemeRegistry;
//!
//! let scope = Arc::new(ThemeRegistry::default()).scope();
//! let bumps = BumpCache::default();
//! let painters = PainterFactory::new();
//! let mut pixmap = Pixmap::new(80, 24);
//!
//! let border = painters.border(BorderKind::Button);
//! let mut cx = PaintContext::new(&mut pixmap, &scope, &bumps);
//! border.paint(&mut cx, &WidgetView::button(), Rect::new(0, 0, 80, 24)).unwrap();
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use bevel_theme::color::TRANSPARENT;
use bevel_theme::registry::ThemeScope;
use bevel_theme::theme::{ColorRole, Theme};

use crate::bumps::{paint_tiled, BumpCache};
use crate::device::DeviceConfig;
use crate::error::{PaintError, PaintResult};
use crate::geometry::{Insets, Rect};
use crate::surface::{ClippedSurface, Surface};
use crate::widget::{Capabilities, WidgetModel};
use crate::Color;

mod borders;
pub mod edges;
mod icons;
pub mod variant;

pub use borders::{
    button_margin, ButtonBorder, BUTTON_MARGIN, NARROW_BUTTON_MARGIN, ComboBoxArrowButtonBorder, ComboBoxEditorBorder, EmptyBorder,
    EtchedBorder, InternalFrameBorder, MenuBarBorder, MenuBorder, MenuItemBorder, PaletteBorder,
    PopupMenuBorder, RolloverButtonBorder, ScrollPaneBorder, SeparatorBorder, TextFieldBorder,
    ThinLoweredBorder, ThinRaisedBorder, ToggleButtonBorder, ToolBarBorder, TOOL_BAR_GRIP_WIDTH,
};
pub use icons::{
    CheckBoxIcon, CheckBoxMenuItemIcon, ComboBoxButtonIcon, DragHandleIcon, MenuArrowIcon,
    MenuItemArrowIcon, RadioButtonIcon, RadioButtonMenuItemIcon, TitleBumpsIcon, TreeIcon,
    MENU_ICON_SIZE, TOGGLE_ICON_SIZE, TREE_ICON_SIZE,
};

/// Everything a painter needs for one paint call.
///
/// The active theme is captured when the context is opened, so one context paints
/// consistently even if another thread switches themes meanwhile.
///
/// While a painter draws, output is clipped to the area it was given.
pub struct PaintContext<'a> {
    surface: &'a mut dyn Surface,
    clip: Option<Rect>,
    theme: Arc<Theme>,
    focus: Color,
    bumps: &'a BumpCache,
    device: Option<DeviceConfig>,
}

impl<'a> PaintContext<'a> {
    /// Open a context over `surface` using the scope's active theme.
    pub fn new(surface: &'a mut dyn Surface, scope: &ThemeScope, bumps: &'a BumpCache) -> Self {
        let theme = scope.active_theme();
        let focus = scope.color(ColorRole::Focus);
        Self {
            surface,
            clip: None,
            theme,
            focus,
            bumps,
            device: None,
        }
    }

    /// Paint for a specific device; bump tiles are then built in its pixel layout.
    pub fn with_device(mut self, device: DeviceConfig) -> Self {
        self.device = Some(device);
        self
    }

    /// The theme colors are read from.
    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    /// The target device, if known.
    pub fn device(&self) -> Option<&DeviceConfig> {
        self.device.as_ref()
    }

    /// A role color of the captured theme.
    pub fn color(&self, role: ColorRole) -> Color {
        if role == ColorRole::Focus {
            self.focus
        } else {
            self.theme.color(role)
        }
    }

    /// The rectangle output is currently clipped to.
    pub fn clip(&self) -> Option<Rect> {
        self.clip
    }

    /// Narrow the clip to `area` and return the previous clip for [PaintContext::restore_clip].
    pub fn clip_to(&mut self, area: Rect) -> Option<Rect> {
        let narrowed = match self.clip {
            Some(clip) => clip.intersection(&area).unwrap_or(Rect::new(area.x, area.y, 0, 0)),
            None => area,
        };
        self.clip.replace(narrowed)
    }

    /// Put back a clip returned by [PaintContext::clip_to].
    pub fn restore_clip(&mut self, saved: Option<Rect>) {
        self.clip = saved;
    }

    fn target(&mut self, draw: impl FnOnce(&mut dyn Surface)) {
        match self.clip {
            Some(clip) => draw(&mut ClippedSurface::new(&mut *self.surface, clip)),
            None => draw(&mut *self.surface),
        }
    }

    /// Draw a line in a role color, both ends included.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, role: ColorRole) {
        let color = self.color(role);
        self.target(|surface| surface.draw_line(x1, y1, x2, y2, color));
    }

    /// Outline a `width + 1` by `height + 1` box in a role color.
    pub fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, role: ColorRole) {
        let color = self.color(role);
        self.target(|surface| surface.draw_rect(x, y, width, height, color));
    }

    /// Fill a rectangle in a role color.
    pub fn fill(&mut self, rect: Rect, role: ColorRole) {
        let color = self.color(role);
        self.target(|surface| surface.fill_rect(rect, color));
    }

    /// Cover `area` with bumps; `back: None` leaves the background showing through.
    pub fn bumps(&mut self, area: Rect, top: ColorRole, shadow: ColorRole, back: Option<ColorRole>) {
        let back = back.map_or(TRANSPARENT, |role| self.color(role));
        let buffer = self
            .bumps
            .buffer(self.device.as_ref(), self.color(top), self.color(shadow), back);
        self.target(|surface| paint_tiled(surface, &buffer, area));
    }
}

/// Shrink `area` to whole two-pixel bumps so the pattern never ends mid-dot.
pub(crate) fn whole_bumps(area: Rect) -> Rect {
    Rect::new(area.x, area.y, area.width.max(0) / 2 * 2, area.height.max(0) / 2 * 2)
}

fn ensure_capabilities(painter: &'static str, required: Capabilities, widget: &dyn WidgetModel) -> PaintResult<()> {
    let found = widget.capabilities();
    if found.contains(required) {
        Ok(())
    } else {
        Err(PaintError::capability_mismatch(painter, widget.name(), required, found))
    }
}

/// A border painter.
pub trait Border: Send + Sync + fmt::Debug {
    /// The kind this painter draws.
    fn kind(&self) -> BorderKind;

    /// State concepts the widget must model.
    fn requires(&self) -> Capabilities {
        Capabilities::empty()
    }

    /// Space reserved on each side. Independent of state and theme.
    fn insets(&self, widget: &dyn WidgetModel) -> Insets;

    /// Draw the variant for the widget's current state into `area`.
    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect);

    /// Check capabilities, then draw clipped to `area`.
    fn paint(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) -> PaintResult<()> {
        ensure_capabilities(self.kind().name(), self.requires(), widget)?;
        let saved = cx.clip_to(area);
        self.draw(cx, widget, area);
        cx.restore_clip(saved);
        Ok(())
    }
}

/// An icon painter.
pub trait Icon: Send + Sync + fmt::Debug {
    /// The kind this painter draws.
    fn kind(&self) -> IconKind;

    /// State concepts the widget must model.
    fn requires(&self) -> Capabilities {
        Capabilities::empty()
    }

    /// Natural width.
    fn width(&self) -> i32;

    /// Natural height.
    fn height(&self) -> i32;

    /// Draw the variant for the widget's current state into `area`.
    ///
    /// Fixed-size icons draw at the area's origin; texture icons fill the area.
    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect);

    /// Check capabilities, then draw clipped to `area`.
    fn paint(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) -> PaintResult<()> {
        ensure_capabilities(self.kind().name(), self.requires(), widget)?;
        let saved = cx.clip_to(area);
        self.draw(cx, widget, area);
        cx.restore_clip(saved);
        Ok(())
    }

    /// Paint at `(x, y)` with the natural size.
    fn paint_at(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, x: i32, y: i32) -> PaintResult<()> {
        self.paint(cx, widget, Rect::new(x, y, self.width(), self.height()))
    }
}

macro_rules! painter_kinds {
    ($(#[$meta:meta])* $name:ident { $($(#[$doc:meta])* $variant:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$doc])* $variant,)*
        }

        impl $name {
            /// Every kind, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// The kind's name, as used in diagnostics and defaults keys.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

painter_kinds! {
    /// Border kinds.
    BorderKind {
        /// Push buttons.
        Button,
        /// Toggle buttons.
        ToggleButton,
        /// Tool bar buttons that only show a border under the pointer.
        RolloverButton,
        /// Text fields and other text components.
        TextField,
        /// Scroll panes.
        ScrollPane,
        /// The editor of an editable combo box.
        ComboBoxEditor,
        /// The arrow button of a combo box.
        ComboBoxArrowButton,
        /// A one pixel raised edge.
        ThinRaised,
        /// A one pixel sunken edge.
        ThinLowered,
        /// An etched groove.
        Etched,
        /// A horizontal separator line.
        Separator,
        /// Menu bars.
        MenuBar,
        /// Menus, both in the menu bar and nested.
        Menu,
        /// Menu items.
        MenuItem,
        /// Popup menus.
        PopupMenu,
        /// Tool bars.
        ToolBar,
        /// Internal frames.
        InternalFrame,
        /// Palette windows.
        Palette,
        /// Reserves nothing and draws nothing.
        Empty,
    }
}

painter_kinds! {
    /// Icon kinds.
    IconKind {
        /// Check box mark and box.
        CheckBox,
        /// Radio button dot and ring.
        RadioButton,
        /// Check mark in a menu item.
        CheckBoxMenuItem,
        /// Radio dot in a menu item.
        RadioButtonMenuItem,
        /// Submenu arrow.
        MenuArrow,
        /// Spacer aligned with submenu arrows.
        MenuItemArrow,
        /// Expanded tree node handle.
        ExpandedTree,
        /// Collapsed tree node handle.
        CollapsedTree,
        /// Combo box drop-down arrow.
        ComboBoxButton,
        /// Bump texture on window title bars.
        TitleBumps,
        /// Bump texture on tool bar and split pane grips.
        DragHandle,
    }
}

/// Builds each painter kind once and hands out shared instances.
pub struct PainterFactory {
    borders: RwLock<HashMap<BorderKind, Arc<dyn Border>>>,
    icons: RwLock<HashMap<IconKind, Arc<dyn Icon>>>,
    constructed: AtomicUsize,
}

impl PainterFactory {
    /// An empty factory; nothing is built until requested.
    pub fn new() -> Self {
        Self {
            borders: RwLock::new(HashMap::new()),
            icons: RwLock::new(HashMap::new()),
            constructed: AtomicUsize::new(0),
        }
    }

    /// The shared border painter of a kind.
    pub fn border(&self, kind: BorderKind) -> Arc<dyn Border> {
        if let Some(border) = read(&self.borders).get(&kind) {
            return Arc::clone(border);
        }
        let mut cache = write(&self.borders);
        let border = cache.entry(kind).or_insert_with(|| {
            self.constructed.fetch_add(1, Ordering::Relaxed);
            log::debug!("Building {} border", kind);
            borders::build(kind)
        });
        Arc::clone(border)
    }

    /// The shared icon painter of a kind.
    pub fn icon(&self, kind: IconKind) -> Arc<dyn Icon> {
        if let Some(icon) = read(&self.icons).get(&kind) {
            return Arc::clone(icon);
        }
        let mut cache = write(&self.icons);
        let icon = cache.entry(kind).or_insert_with(|| {
            self.constructed.fetch_add(1, Ordering::Relaxed);
            log::debug!("Building {} icon", kind);
            icons::build(kind)
        });
        Arc::clone(icon)
    }

    /// How many painters have been built over the factory's lifetime.
    pub fn constructed(&self) -> usize {
        self.constructed.load(Ordering::Relaxed)
    }

    /// Forget every cached painter; the next request builds a fresh one.
    pub fn invalidate(&self) {
        write(&self.borders).clear();
        write(&self.icons).clear();
    }
}

impl Default for PainterFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PainterFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PainterFactory")
            .field("borders", &read(&self.borders).len())
            .field("icons", &read(&self.icons).len())
            .field("constructed", &self.constructed())
            .finish()
    }
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Pixmap;
    use bevel_theme::registry::ThemeRegistry;

    #[test]
    fn nested_clips_narrow_and_restore() {
        let scope = Arc::new(ThemeRegistry::default()).scope();
        let bumps = BumpCache::default();
        let mut pixmap = Pixmap::new(10, 10);
        {
            let mut cx = PaintContext::new(&mut pixmap, &scope, &bumps);
            let outer = cx.clip_to(Rect::new(0, 0, 5, 5));
            assert_eq!(outer, None);
            let inner = cx.clip_to(Rect::new(3, 3, 5, 5));
            assert_eq!(cx.clip(), Some(Rect::new(3, 3, 2, 2)));
            cx.fill(Rect::new(0, 0, 10, 10), ColorRole::Control);
            cx.restore_clip(inner);
            assert_eq!(cx.clip(), Some(Rect::new(0, 0, 5, 5)));
            cx.restore_clip(outer);
            assert_eq!(cx.clip(), None);
        }
        assert_eq!(pixmap.count_set(), 4);
    }

    #[test]
    fn every_kind_builds_a_matching_painter() {
        let factory = PainterFactory::new();
        for &kind in BorderKind::ALL {
            assert_eq!(factory.border(kind).kind(), kind);
        }
        for &kind in IconKind::ALL {
            assert_eq!(factory.icon(kind).kind(), kind);
        }
        assert_eq!(factory.constructed(), BorderKind::ALL.len() + IconKind::ALL.len());
    }

    #[test]
    fn invalidate_rebuilds() {
        let factory = PainterFactory::new();
        let first = factory.border(BorderKind::Etched);
        factory.invalidate();
        let second = factory.border(BorderKind::Etched);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(factory.constructed(), 2);
    }

    #[test]
    fn kind_names() {
        assert_eq!(BorderKind::MenuItem.name(), "MenuItem");
        assert_eq!(IconKind::TitleBumps.to_string(), "TitleBumps");
        assert_eq!(BorderKind::ALL.len(), 19);
        assert_eq!(IconKind::ALL.len(), 11);
    }
}
