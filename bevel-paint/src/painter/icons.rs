use std::sync::Arc;

use bevel_theme::theme::ColorRole::{self, *};

use crate::geometry::Rect;
use crate::painter::variant::{self, ArrowVariant, Availability, CheckVariant, FrameVariant, MarkVariant};
use crate::painter::{edges, whole_bumps, Icon, IconKind, PaintContext};
use crate::widget::{hints, Capabilities, WidgetModel};

/// Edge of check box and radio button icons.
pub const TOGGLE_ICON_SIZE: i32 = 13;
/// Edge of menu item check and radio icons.
pub const MENU_ICON_SIZE: i32 = 10;
/// Edge of tree expander icons.
pub const TREE_ICON_SIZE: i32 = 9;

pub(crate) fn build(kind: IconKind) -> Arc<dyn Icon> {
    match kind {
        IconKind::CheckBox => Arc::new(CheckBoxIcon),
        IconKind::RadioButton => Arc::new(RadioButtonIcon),
        IconKind::CheckBoxMenuItem => Arc::new(CheckBoxMenuItemIcon),
        IconKind::RadioButtonMenuItem => Arc::new(RadioButtonMenuItemIcon),
        IconKind::MenuArrow => Arc::new(MenuArrowIcon),
        IconKind::MenuItemArrow => Arc::new(MenuItemArrowIcon),
        IconKind::ExpandedTree => Arc::new(TreeIcon { expanded: true }),
        IconKind::CollapsedTree => Arc::new(TreeIcon { expanded: false }),
        IconKind::ComboBoxButton => Arc::new(ComboBoxButtonIcon),
        IconKind::TitleBumps => Arc::new(TitleBumpsIcon),
        IconKind::DragHandle => Arc::new(DragHandleIcon),
    }
}

fn toggle_mark_role(mark: MarkVariant) -> Option<ColorRole> {
    match mark {
        MarkVariant::Hidden => None,
        MarkVariant::Disabled => Some(ControlShadow),
        MarkVariant::Armed | MarkVariant::Normal => Some(ControlInfo),
    }
}

fn menu_mark_role(mark: MarkVariant) -> Option<ColorRole> {
    match mark {
        MarkVariant::Hidden => None,
        MarkVariant::Disabled => Some(MenuDisabledForeground),
        MarkVariant::Armed => Some(MenuSelectedForeground),
        MarkVariant::Normal => Some(MenuForeground),
    }
}

/// Check box: a 3-D box with a check mark when selected.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckBoxIcon;

impl Icon for CheckBoxIcon {
    fn kind(&self) -> IconKind {
        IconKind::CheckBox
    }

    fn requires(&self) -> Capabilities {
        Capabilities::PRESS | Capabilities::SELECTION
    }

    fn width(&self) -> i32 {
        TOGGLE_ICON_SIZE
    }

    fn height(&self) -> i32 {
        TOGGLE_ICON_SIZE
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let (x, y, size) = (area.x, area.y, TOGGLE_ICON_SIZE);
        let state = widget.effective_state();
        match variant::check(state, widget.hint(hints::BORDER_PAINTED_FLAT, false)) {
            CheckVariant::Disabled => cx.rect(x, y, size - 2, size - 2, ControlShadow),
            CheckVariant::Flat => edges::flat(cx, x, y, size - 1, size - 1),
            CheckVariant::Pressed => {
                cx.fill(Rect::new(x, y, size - 1, size - 1), ControlShadow);
                edges::flush_3d(cx, x, y, size, size);
            },
            CheckVariant::Plain => edges::flush_3d(cx, x, y, size, size),
        }
        if let Some(role) = toggle_mark_role(variant::mark(state)) {
            cx.fill(Rect::new(x + 3, y + 5, 2, size - 8), role);
            cx.line(x + size - 4, y + 3, x + 5, y + size - 6, role);
            cx.line(x + size - 4, y + 4, x + 5, y + size - 5, role);
        }
    }
}

/// Radio button: a ring with a dot when selected.
#[derive(Debug, Default, Clone, Copy)]
pub struct RadioButtonIcon;

impl RadioButtonIcon {
    fn ring(cx: &mut PaintContext<'_>, x: i32, y: i32, role: ColorRole) {
        cx.line(x + 4, y, x + 7, y, role);
        cx.line(x + 2, y + 1, x + 3, y + 1, role);
        cx.line(x + 8, y + 1, x + 9, y + 1, role);
        cx.line(x + 1, y + 2, x + 1, y + 3, role);
        cx.line(x + 10, y + 2, x + 10, y + 3, role);
        cx.line(x, y + 4, x, y + 7, role);
        cx.line(x + 11, y + 4, x + 11, y + 7, role);
        cx.line(x + 1, y + 8, x + 1, y + 9, role);
        cx.line(x + 10, y + 8, x + 10, y + 9, role);
        cx.line(x + 2, y + 10, x + 3, y + 10, role);
        cx.line(x + 8, y + 10, x + 9, y + 10, role);
        cx.line(x + 4, y + 11, x + 7, y + 11, role);
    }

    fn highlight(cx: &mut PaintContext<'_>, x: i32, y: i32) {
        cx.line(x + 4, y + 12, x + 8, y + 12, ControlHighlight);
        cx.line(x + 12, y + 4, x + 12, y + 8, ControlHighlight);
        cx.line(x + 9, y + 11, x + 10, y + 11, ControlHighlight);
        cx.line(x + 11, y + 9, x + 11, y + 10, ControlHighlight);
    }
}

impl Icon for RadioButtonIcon {
    fn kind(&self) -> IconKind {
        IconKind::RadioButton
    }

    fn requires(&self) -> Capabilities {
        Capabilities::PRESS | Capabilities::SELECTION
    }

    fn width(&self) -> i32 {
        TOGGLE_ICON_SIZE
    }

    fn height(&self) -> i32 {
        TOGGLE_ICON_SIZE
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let (x, y) = (area.x, area.y);
        let state = widget.effective_state();
        match variant::check(state, widget.hint(hints::BORDER_PAINTED_FLAT, false)) {
            CheckVariant::Disabled => Self::ring(cx, x, y, ControlShadow),
            CheckVariant::Flat => Self::ring(cx, x, y, ControlDarkShadow),
            CheckVariant::Pressed => {
                cx.fill(Rect::new(x + 2, y + 2, 8, 8), ControlShadow);
                Self::ring(cx, x, y, ControlDarkShadow);
                Self::highlight(cx, x, y);
            },
            CheckVariant::Plain => {
                Self::ring(cx, x, y, ControlDarkShadow);
                Self::highlight(cx, x, y);
            },
        }
        if let Some(role) = toggle_mark_role(variant::mark(state)) {
            cx.fill(Rect::new(x + 4, y + 3, 4, 6), role);
            cx.fill(Rect::new(x + 3, y + 4, 6, 4), role);
        }
    }
}

/// Check mark in a check box menu item. Hidden with `bevel.noIcons`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckBoxMenuItemIcon;

impl Icon for CheckBoxMenuItemIcon {
    fn kind(&self) -> IconKind {
        IconKind::CheckBoxMenuItem
    }

    fn requires(&self) -> Capabilities {
        Capabilities::PRESS | Capabilities::SELECTION
    }

    fn width(&self) -> i32 {
        MENU_ICON_SIZE
    }

    fn height(&self) -> i32 {
        MENU_ICON_SIZE
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        if widget.hint(hints::NO_ICONS, false) {
            return;
        }
        let Some(role) = menu_mark_role(variant::mark(widget.effective_state())) else {
            return;
        };
        let (x, y) = (area.x, area.y);
        cx.line(x + 9, y + 3, x + 9, y + 3, role);
        cx.line(x + 8, y + 4, x + 9, y + 4, role);
        cx.line(x + 7, y + 5, x + 9, y + 5, role);
        cx.line(x + 6, y + 6, x + 8, y + 6, role);
        cx.line(x + 3, y + 7, x + 7, y + 7, role);
        cx.line(x + 4, y + 8, x + 6, y + 8, role);
        cx.line(x + 5, y + 9, x + 5, y + 9, role);
        cx.line(x + 3, y + 5, x + 3, y + 5, role);
        cx.line(x + 3, y + 6, x + 4, y + 6, role);
    }
}

/// Dot in a radio button menu item. Hidden with `bevel.noIcons`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RadioButtonMenuItemIcon;

impl Icon for RadioButtonMenuItemIcon {
    fn kind(&self) -> IconKind {
        IconKind::RadioButtonMenuItem
    }

    fn requires(&self) -> Capabilities {
        Capabilities::PRESS | Capabilities::SELECTION
    }

    fn width(&self) -> i32 {
        MENU_ICON_SIZE
    }

    fn height(&self) -> i32 {
        MENU_ICON_SIZE
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        if widget.hint(hints::NO_ICONS, false) {
            return;
        }
        if let Some(role) = menu_mark_role(variant::mark(widget.effective_state())) {
            cx.fill(Rect::new(area.x + 3, area.y + 2, 4, 6), role);
            cx.fill(Rect::new(area.x + 2, area.y + 3, 6, 4), role);
        }
    }
}

/// Submenu arrow, pointing away from the reading direction's start.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuArrowIcon;

impl Icon for MenuArrowIcon {
    fn kind(&self) -> IconKind {
        IconKind::MenuArrow
    }

    fn requires(&self) -> Capabilities {
        Capabilities::PRESS | Capabilities::SELECTION
    }

    fn width(&self) -> i32 {
        4
    }

    fn height(&self) -> i32 {
        8
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let role = match variant::arrow(widget.effective_state(), true) {
            ArrowVariant::Selected => MenuSelectedForeground,
            ArrowVariant::Disabled => MenuDisabledForeground,
            ArrowVariant::Normal => MenuForeground,
        };
        let ltr = widget.is_left_to_right();
        for i in 0..4 {
            let column = if ltr { area.x + i } else { area.x + 3 - i };
            cx.line(column, area.y + i, column, area.y + 7 - i, role);
        }
    }
}

/// Reserves the space of a submenu arrow in plain menu items.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuItemArrowIcon;

impl Icon for MenuItemArrowIcon {
    fn kind(&self) -> IconKind {
        IconKind::MenuItemArrow
    }

    fn width(&self) -> i32 {
        4
    }

    fn height(&self) -> i32 {
        8
    }

    fn draw(&self, _cx: &mut PaintContext<'_>, _widget: &dyn WidgetModel, _area: Rect) {}
}

/// Tree node handle: a box with a minus, or a plus when collapsed.
#[derive(Debug, Clone, Copy)]
pub struct TreeIcon {
    expanded: bool,
}

impl Icon for TreeIcon {
    fn kind(&self) -> IconKind {
        if self.expanded {
            IconKind::ExpandedTree
        } else {
            IconKind::CollapsedTree
        }
    }

    fn width(&self) -> i32 {
        TREE_ICON_SIZE
    }

    fn height(&self) -> i32 {
        TREE_ICON_SIZE
    }

    fn draw(&self, cx: &mut PaintContext<'_>, _widget: &dyn WidgetModel, area: Rect) {
        let (x, y, size) = (area.x, area.y, TREE_ICON_SIZE);
        let mid = size / 2;
        cx.fill(Rect::new(x + 1, y + 1, size - 2, size - 2), WindowBackground);
        cx.rect(x, y, size - 1, size - 1, ControlShadow);
        cx.line(x + 2, y + mid, x + size - 3, y + mid, ControlInfo);
        if !self.expanded {
            cx.line(x + mid, y + 2, x + mid, y + size - 3, ControlInfo);
        }
    }
}

/// Downward arrow of a combo box button.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComboBoxButtonIcon;

impl Icon for ComboBoxButtonIcon {
    fn kind(&self) -> IconKind {
        IconKind::ComboBoxButton
    }

    fn width(&self) -> i32 {
        10
    }

    fn height(&self) -> i32 {
        5
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let role = match variant::availability(widget.effective_state()) {
            Availability::Enabled => ControlInfo,
            Availability::Disabled => ControlShadow,
        };
        for i in 0..5 {
            cx.line(area.x + i, area.y + i, area.x + 9 - i, area.y + i, role);
        }
    }
}

/// Rounds a bump area down to whole bumps, two pixels each.
/// Title bar texture, primary-colored while the window is active.
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleBumpsIcon;

impl Icon for TitleBumpsIcon {
    fn kind(&self) -> IconKind {
        IconKind::TitleBumps
    }

    fn width(&self) -> i32 {
        16
    }

    fn height(&self) -> i32 {
        16
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let (top, shadow, back) = match variant::frame(widget.state()) {
            FrameVariant::Active => (PrimaryControlHighlight, PrimaryControlDarkShadow, PrimaryControl),
            FrameVariant::Inactive => (ControlHighlight, ControlDarkShadow, Control),
        };
        cx.bumps(whole_bumps(area), top, shadow, Some(back));
    }
}

/// Grip texture for tool bars and split pane dividers; the background shows through.
#[derive(Debug, Default, Clone, Copy)]
pub struct DragHandleIcon;

impl Icon for DragHandleIcon {
    fn kind(&self) -> IconKind {
        IconKind::DragHandle
    }

    fn width(&self) -> i32 {
        8
    }

    fn height(&self) -> i32 {
        16
    }

    fn draw(&self, cx: &mut PaintContext<'_>, widget: &dyn WidgetModel, area: Rect) {
        let shadow = match variant::availability(widget.effective_state()) {
            Availability::Enabled => ControlDarkShadow,
            Availability::Disabled => ControlShadow,
        };
        cx.bumps(whole_bumps(area), ControlHighlight, shadow, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_areas_round_down_to_even() {
        assert_eq!(whole_bumps(Rect::new(3, 4, 17, 9)), Rect::new(3, 4, 16, 8));
        assert_eq!(whole_bumps(Rect::new(0, 0, -5, 1)), Rect::new(0, 0, 0, 0));
    }
}
