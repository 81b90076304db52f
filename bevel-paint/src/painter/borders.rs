use std::sync::Arc;

use bevel_theme::theme::ColorRole::*;

use crate::geometry::{Insets, Rect};
use crate::painter::variant::{
    self, Availability, ButtonVariant, FrameVariant, MenuItemVariant, MenuVariant, PressVariant,
    RolloverVariant, TextVariant, ToggleVariant,
};
use crate::painter::{edges, whole_bumps, Border, BorderKind, PaintContext};
use crate::widget::{hints, BorderStyle, Capabilities, StateFlags, WidgetModel};

const BUTTON_INSETS: Insets = Insets::new(2, 3, 2, 3);
const THIN_INSETS: Insets = Insets::uniform(2);

/// Width of the grip drawn at the leading edge of a floatable tool bar.
pub const TOOL_BAR_GRIP_WIDTH: i32 = 8;

pub(crate) fn build(kind: BorderKind) -> Arc<dyn Border> {
    match kind {
        BorderKind::Button => Arc::new(ButtonBorder),
        BorderKind::ToggleButton => Arc::new(ToggleButtonBorder),
        BorderKind::RolloverButton => Arc::new(RolloverButtonBorder),
        BorderKind::TextField => Arc::new(TextFieldBorder),
        BorderKind::ScrollPane => Arc::new(ScrollPaneBorder),
        BorderKind::ComboBoxEditor => Arc::new(ComboBoxEditorBorder),
        BorderKind::ComboBoxArrowButton => Arc::new(ComboBoxArrowButtonBorder),
        BorderKind::ThinRaised => Arc::new(ThinRaisedBorder),
        BorderKind::ThinLowered => Arc::new(ThinLoweredBorder),
        BorderKind::Etched => Arc::new(EtchedBorder),
        BorderKind::Separator => Arc::new(SeparatorBorder),
        BorderKind::MenuBar => Arc::new(MenuBarBorder),
        BorderKind::Menu => Arc::new(MenuBorder),
        BorderKind::MenuItem => Arc::new(MenuItemBorder),
        BorderKind::PopupMenu => Arc::new(PopupMenuBorder),
        BorderKind::ToolBar => Arc::new(ToolBarBorder),
        BorderKind::InternalFrame => Arc::new(InternalFrameBorder),
        BorderKind::Palette => Arc::new(PaletteBorder),
        BorderKind::Empty => Arc::new(EmptyBorder),
    }
}

fn is_3d(widget: &dyn WidgetModel) -> bool {
    widget.hint(hints::IS_3D, true)
}

/// Push button border.
#[derive(Debug, Default, Clone, Copy)]
pub struct ButtonBorder;

impl Border for ButtonBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::Button
    }

    fn requires(&self) -> Capabilities {
        Capabilities::PRESS
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        BUTTON_INSETS
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let Rect { x, y, width: w, height: h } = area;
        let state = widget.effective_state();
        let hovered = state.contains(StateFlags::ROLLOVER);
        match variant::button(state, widget.border_paints_focus()) {
            ButtonVariant::Disabled => edges::disabled(cx, x, y, w, h),
            ButtonVariant::DefaultPressed => edges::default_button_pressed(cx, x, y, w, h),
            ButtonVariant::Pressed => edges::pressed_3d(cx, x, y, w, h),
            ButtonVariant::Default => edges::default_button(cx, x, y, w, h, hovered, is_3d(widget)),
            ButtonVariant::Focused => {
                edges::raised(cx, x, y, w, h, hovered, is_3d(widget));
                edges::focus_ring(cx, x, y, w, h);
            },
            ButtonVariant::Plain => edges::raised(cx, x, y, w, h, hovered, is_3d(widget)),
        }
    }
}

/// Toggle button border; a toggled-on button stays sunk.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToggleButtonBorder;

impl Border for ToggleButtonBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::ToggleButton
    }

    fn requires(&self) -> Capabilities {
        Capabilities::PRESS | Capabilities::SELECTION
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        BUTTON_INSETS
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let Rect { x, y, width: w, height: h } = area;
        let state = widget.effective_state();
        match variant::toggle(state) {
            ToggleVariant::Disabled => edges::disabled(cx, x, y, w, h),
            ToggleVariant::Pressed => edges::pressed_3d(cx, x, y, w, h),
            ToggleVariant::Selected => edges::dark_3d(cx, x, y, w, h),
            ToggleVariant::Plain => {
                edges::raised(cx, x, y, w, h, state.contains(StateFlags::ROLLOVER), is_3d(widget))
            },
        }
    }
}

/// Tool bar button border, only visible under the pointer or while selected.
#[derive(Debug, Default, Clone, Copy)]
pub struct RolloverButtonBorder;

impl Border for RolloverButtonBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::RolloverButton
    }

    fn requires(&self) -> Capabilities {
        Capabilities::PRESS
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        THIN_INSETS
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let Rect { x, y, width: w, height: h } = area;
        match variant::rollover(widget.effective_state()) {
            RolloverVariant::Hidden => {},
            RolloverVariant::Pressed => edges::pressed_3d(cx, x, y, w, h),
            RolloverVariant::Raised => edges::flush_3d(cx, x, y, w, h),
            RolloverVariant::Selected => edges::dark_3d(cx, x, y, w, h),
        }
    }
}

/// Text field border; read-only fields look disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFieldBorder;

impl Border for TextFieldBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::TextField
    }

    fn requires(&self) -> Capabilities {
        Capabilities::TEXT
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        THIN_INSETS
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let Rect { x, y, width: w, height: h } = area;
        match variant::text(widget.effective_state()) {
            TextVariant::Disabled | TextVariant::ReadOnly => edges::disabled(cx, x, y, w, h),
            TextVariant::Editable => edges::flush_3d(cx, x, y, w, h),
        }
    }
}

/// Scroll pane border: a dark frame with a highlight along the right and bottom.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollPaneBorder;

impl Border for ScrollPaneBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::ScrollPane
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        Insets::new(1, 1, 2, 2)
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let Rect { x, y, width: w, height: h } = area;
        if variant::availability(widget.effective_state()) == Availability::Disabled {
            edges::disabled(cx, x, y, w, h);
            return;
        }
        cx.rect(x, y, w - 2, h - 2, ControlDarkShadow);
        cx.line(x + w - 1, y + 1, x + w - 1, y + h - 1, ControlHighlight);
        cx.line(x + 1, y + h - 1, x + w - 1, y + h - 1, ControlHighlight);
    }
}

/// Editable combo box editor border; open on the right where the arrow button sits.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComboBoxEditorBorder;

impl Border for ComboBoxEditorBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::ComboBoxEditor
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        Insets::new(2, 2, 2, 0)
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let Rect { x, y, width: w, height: h } = area;
        match variant::availability(widget.effective_state()) {
            Availability::Enabled => {
                cx.line(x, y, x + w - 1, y, ControlDarkShadow);
                cx.line(x, y, x, y + h - 2, ControlDarkShadow);
                cx.line(x, y + h - 2, x + w - 1, y + h - 2, ControlDarkShadow);
                cx.line(x + 1, y + 1, x + w - 1, y + 1, ControlHighlight);
                cx.line(x + 1, y + 1, x + 1, y + h - 1, ControlHighlight);
                cx.line(x + 1, y + h - 1, x + w - 1, y + h - 1, ControlHighlight);
                cx.line(x + 1, y + h - 2, x + 1, y + h - 2, Control);
            },
            Availability::Disabled => {
                cx.line(x, y, x + w - 1, y, ControlShadow);
                cx.line(x, y, x, y + h - 1, ControlShadow);
                cx.line(x, y + h - 1, x + w - 1, y + h - 1, ControlShadow);
            },
        }
    }
}

/// Border of the arrow button next to a combo box editor.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComboBoxArrowButtonBorder;

impl Border for ComboBoxArrowButtonBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::ComboBoxArrowButton
    }

    fn requires(&self) -> Capabilities {
        Capabilities::PRESS
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        THIN_INSETS
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let Rect { x, y, width: w, height: h } = area;
        match variant::press(widget.effective_state()) {
            PressVariant::Disabled => edges::disabled(cx, x, y, w, h),
            PressVariant::Pressed => edges::pressed_3d(cx, x, y, w, h),
            PressVariant::Plain => edges::flush_3d(cx, x, y, w, h),
        }
    }
}

/// One pixel raised edge.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThinRaisedBorder;

impl Border for ThinRaisedBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::ThinRaised
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        THIN_INSETS
    }

    fn draw(&self, cx: &mut PaintContext<'_>, _widget: &dyn WidgetModel, area: Rect) {
        edges::thin_raised(cx, area.x, area.y, area.width, area.height);
    }
}

/// One pixel sunken edge.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThinLoweredBorder;

impl Border for ThinLoweredBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::ThinLowered
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        THIN_INSETS
    }

    fn draw(&self, cx: &mut PaintContext<'_>, _widget: &dyn WidgetModel, area: Rect) {
        edges::thin_lowered(cx, area.x, area.y, area.width, area.height);
    }
}

/// Etched groove.
#[derive(Debug, Default, Clone, Copy)]
pub struct EtchedBorder;

impl Border for EtchedBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::Etched
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        THIN_INSETS
    }

    fn draw(&self, cx: &mut PaintContext<'_>, _widget: &dyn WidgetModel, area: Rect) {
        edges::etched(cx, area.x, area.y, area.width, area.height);
    }
}

/// Shadow and highlight line along the bottom.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeparatorBorder;

impl Border for SeparatorBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::Separator
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        Insets::new(0, 0, 2, 0)
    }

    fn draw(&self, cx: &mut PaintContext<'_>, _widget: &dyn WidgetModel, area: Rect) {
        edges::separator(cx, area.x, area.y, area.width, area.height);
    }
}

/// Menu bar border, styled by the `bevel.borderStyle` hint (separator by default).
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuBarBorder;

impl MenuBarBorder {
    fn style(widget: &dyn WidgetModel) -> BorderStyle {
        widget.border_style().unwrap_or(BorderStyle::Separator)
    }
}

impl Border for MenuBarBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::MenuBar
    }

    fn insets(&self, widget: &dyn WidgetModel) -> Insets {
        match Self::style(widget) {
            BorderStyle::Empty => Insets::ZERO,
            BorderStyle::Separator | BorderStyle::Etched => Insets::new(1, 0, 1, 0),
        }
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let Rect { x, y, width: w, height: h } = area;
        match Self::style(widget) {
            BorderStyle::Empty => {},
            BorderStyle::Separator => {
                cx.line(x, y, x + w - 1, y, ControlHighlight);
                cx.line(x, y + h - 1, x + w - 1, y + h - 1, ControlShadow);
            },
            BorderStyle::Etched => {
                cx.line(x, y, x + w - 1, y, ControlShadow);
                cx.line(x, y + h - 1, x + w - 1, y + h - 1, ControlHighlight);
            },
        }
    }
}

fn draw_menu_item_highlight(cx: &mut PaintContext<'_>, area: Rect, armed: bool) {
    let Rect { x, y, width: w, height: h } = area;
    if armed {
        cx.line(x, y, x + w - 2, y, PrimaryControlDarkShadow);
        cx.line(x, y + h - 1, x + w - 2, y + h - 1, PrimaryControlDarkShadow);
        cx.line(x + w - 1, y + 1, x + w - 1, y + h - 2, PrimaryControlHighlight);
    } else {
        cx.line(x, y, x, y + h - 1, ControlHighlight);
    }
}

/// Menu border: menu bar entries behave like rollover buttons, submenus like items.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuBorder;

impl Border for MenuBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::Menu
    }

    fn requires(&self) -> Capabilities {
        Capabilities::PRESS | Capabilities::SELECTION
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        THIN_INSETS
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let Rect { x, y, width: w, height: h } = area;
        let top_level = widget.hint(hints::IS_TOP_LEVEL_MENU, false);
        match variant::menu(widget.effective_state(), top_level) {
            MenuVariant::TopLevelSelected => edges::thin_lowered(cx, x, y, w, h),
            MenuVariant::TopLevelRollover => edges::thin_raised(cx, x, y, w, h),
            MenuVariant::TopLevelPlain => {},
            MenuVariant::Armed => draw_menu_item_highlight(cx, area, true),
            MenuVariant::Plain => draw_menu_item_highlight(cx, area, false),
        }
    }
}

/// Menu item border.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuItemBorder;

impl Border for MenuItemBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::MenuItem
    }

    fn requires(&self) -> Capabilities {
        Capabilities::PRESS | Capabilities::SELECTION
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        THIN_INSETS
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let armed = variant::menu_item(widget.effective_state(), false) == MenuItemVariant::Armed;
        draw_menu_item_highlight(cx, area, armed);
    }
}

/// Popup menu border.
#[derive(Debug, Default, Clone, Copy)]
pub struct PopupMenuBorder;

impl Border for PopupMenuBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::PopupMenu
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        Insets::uniform(3)
    }

    fn draw(&self, cx: &mut PaintContext<'_>, _widget: &dyn WidgetModel, area: Rect) {
        let Rect { x, y, width: w, height: h } = area;
        cx.rect(x, y, w - 1, h - 1, PrimaryControlDarkShadow);
        cx.line(x + 1, y + 1, x + w - 2, y + 1, PrimaryControlHighlight);
        cx.line(x + 1, y + 2, x + 1, y + h - 2, PrimaryControlHighlight);
    }
}

/// Tool bar border, styled by `bevel.borderStyle` (etched by default), with a bump
/// grip on the leading edge when `bevel.isFloatable` is set.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToolBarBorder;

impl ToolBarBorder {
    fn style(widget: &dyn WidgetModel) -> BorderStyle {
        widget.border_style().unwrap_or(BorderStyle::Etched)
    }

    fn grip(widget: &dyn WidgetModel) -> bool {
        widget.hint(hints::IS_FLOATABLE, false)
    }
}

impl Border for ToolBarBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::ToolBar
    }

    fn insets(&self, widget: &dyn WidgetModel) -> Insets {
        let mut insets = match Self::style(widget) {
            BorderStyle::Empty => Insets::ZERO,
            BorderStyle::Separator => Insets::new(0, 0, 2, 0),
            BorderStyle::Etched => THIN_INSETS,
        };
        if Self::grip(widget) {
            let extra = TOOL_BAR_GRIP_WIDTH + 2;
            if widget.is_left_to_right() {
                insets.left += extra;
            } else {
                insets.right += extra;
            }
        }
        insets
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let Rect { x, y, width: w, height: h } = area;
        match Self::style(widget) {
            BorderStyle::Empty => {},
            BorderStyle::Separator => edges::separator(cx, x, y, w, h),
            BorderStyle::Etched => edges::etched(cx, x, y, w, h),
        }
        if Self::grip(widget) {
            let grip_x = if widget.is_left_to_right() {
                x + 3
            } else {
                x + w - 3 - TOOL_BAR_GRIP_WIDTH
            };
            let (shadow, back) = match variant::availability(widget.effective_state()) {
                Availability::Enabled => (ControlDarkShadow, Control),
                Availability::Disabled => (ControlShadow, Control),
            };
            cx.bumps(
                whole_bumps(Rect::new(grip_x, y + 3, TOOL_BAR_GRIP_WIDTH, h - 6)),
                ControlHighlight,
                shadow,
                Some(back),
            );
        }
    }
}

/// Internal frame border: a five pixel frame, primary-colored while active.
#[derive(Debug, Default, Clone, Copy)]
pub struct InternalFrameBorder;

impl Border for InternalFrameBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::InternalFrame
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        Insets::uniform(5)
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let Rect { x, y, width: w, height: h } = area;
        let (frame, highlight, shadow) = match variant::frame(widget.state()) {
            FrameVariant::Active => (PrimaryControlDarkShadow, PrimaryControlShadow, PrimaryControlInfo),
            FrameVariant::Inactive => (ControlDarkShadow, ControlShadow, ControlInfo),
        };

        // Rounded outer edge.
        cx.line(x + 1, y, x + w - 2, y, frame);
        cx.line(x, y + 1, x, y + h - 2, frame);
        cx.line(x + w - 1, y + 1, x + w - 1, y + h - 2, frame);
        cx.line(x + 1, y + h - 1, x + w - 2, y + h - 1, frame);
        for i in 1..5 {
            cx.rect(x + i, y + i, w - i * 2 - 1, h - i * 2 - 1, frame);
        }

        // Corner notches.
        let corner = 14.min(w / 2).min(h / 2).max(1);
        cx.line(x + corner, y + 1, x + w - corner, y + 1, highlight);
        cx.line(x + 1, y + corner, x + 1, y + h - corner, highlight);
        cx.line(x + w - 2, y + corner, x + w - 2, y + h - corner, highlight);
        cx.line(x + corner, y + h - 2, x + w - corner, y + h - 2, highlight);
        cx.line(x + corner - 1, y + 2, x + w - corner - 1, y + 2, shadow);
        cx.line(x + 2, y + corner - 1, x + 2, y + h - corner - 1, shadow);
        cx.line(x + w - 1 - 2, y + corner - 1, x + w - 1 - 2, y + h - corner - 1, shadow);
        cx.line(x + corner - 1, y + h - 3, x + w - corner - 1, y + h - 3, shadow);
    }
}

/// Palette window border.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaletteBorder;

impl Border for PaletteBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::Palette
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        Insets::uniform(1)
    }

    fn draw(&self, cx: &mut PaintContext<'_>, _widget: &dyn WidgetModel, area: Rect) {
        let Rect { x, y, width: w, height: h } = area;
        cx.line(x + 1, y, x + w - 2, y, PrimaryControlDarkShadow);
        cx.line(x, y + 1, x, y + h - 2, PrimaryControlDarkShadow);
        cx.line(x + w - 1, y + 1, x + w - 1, y + h - 2, PrimaryControlDarkShadow);
        cx.line(x + 1, y + h - 1, x + w - 2, y + h - 1, PrimaryControlDarkShadow);
    }
}

/// Draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyBorder;

impl Border for EmptyBorder {
    fn kind(&self) -> BorderKind {
        BorderKind::Empty
    }

    fn insets(&self, _widget: &dyn WidgetModel) -> Insets {
        Insets::ZERO
    }

    fn draw(&self, _cx: &mut PaintContext<'_>, _widget: &dyn WidgetModel, _area: Rect) {}
}

/// Margin between a button's border and its content.
pub const BUTTON_MARGIN: Insets = Insets::new(2, 14, 2, 14);
/// Button margin with the `bevel.isNarrow` hint.
pub const NARROW_BUTTON_MARGIN: Insets = Insets::new(2, 4, 2, 4);

/// The content margin a button should use.
pub fn button_margin(widget: &dyn WidgetModel) -> Insets {
    if widget.hint(hints::IS_NARROW, false) {
        NARROW_BUTTON_MARGIN
    } else {
        BUTTON_MARGIN
    }
}
