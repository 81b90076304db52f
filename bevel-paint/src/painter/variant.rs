//! # Variant Tables
//!
//! Each painter maps widget state to exactly one visual variant before drawing.
//! The tables live here as plain functions over [StateFlags] so their precedence
//! can be read in one place and checked without a surface.
//!
//! Callers pass the *effective* state (see [WidgetModel::effective_state](crate::widget::WidgetModel::effective_state)),
//! so a flag the widget does not model never influences the choice.

use crate::widget::StateFlags;

/// Push button border variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Not enabled.
    Disabled,
    /// The default button, pressed while armed.
    DefaultPressed,
    /// Pressed while armed.
    Pressed,
    /// The default button at rest.
    Default,
    /// Focused, with no other border showing focus.
    Focused,
    /// Enabled and idle.
    Plain,
}

/// Push button precedence: disabled, default pressed, pressed, default, focused, plain.
pub fn button(state: StateFlags, border_paints_focus: bool) -> ButtonVariant {
    if !state.contains(StateFlags::ENABLED) {
        ButtonVariant::Disabled
    } else if state.is_pressed_armed() && state.contains(StateFlags::DEFAULT) {
        ButtonVariant::DefaultPressed
    } else if state.is_pressed_armed() {
        ButtonVariant::Pressed
    } else if state.contains(StateFlags::DEFAULT) {
        ButtonVariant::Default
    } else if state.contains(StateFlags::FOCUSED) && !border_paints_focus {
        ButtonVariant::Focused
    } else {
        ButtonVariant::Plain
    }
}

/// Toggle button border variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleVariant {
    /// Not enabled.
    Disabled,
    /// Pressed while armed.
    Pressed,
    /// Toggled on.
    Selected,
    /// Enabled and off.
    Plain,
}

/// Toggle precedence: disabled, pressed, selected, plain.
pub fn toggle(state: StateFlags) -> ToggleVariant {
    if !state.contains(StateFlags::ENABLED) {
        ToggleVariant::Disabled
    } else if state.is_pressed_armed() {
        ToggleVariant::Pressed
    } else if state.contains(StateFlags::SELECTED) {
        ToggleVariant::Selected
    } else {
        ToggleVariant::Plain
    }
}

/// Tool bar (rollover) button border variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RolloverVariant {
    /// Nothing is drawn.
    Hidden,
    /// Hovered and pressed while armed.
    Pressed,
    /// Hovered.
    Raised,
    /// Toggled on, not hovered.
    Selected,
}

/// Rollover precedence: disabled hides; a hovered button is pressed or raised,
/// except while pressed but no longer armed; a selected one stays sunk.
pub fn rollover(state: StateFlags) -> RolloverVariant {
    if !state.contains(StateFlags::ENABLED) {
        return RolloverVariant::Hidden;
    }
    if state.contains(StateFlags::ROLLOVER) {
        if state.is_pressed_armed() {
            return RolloverVariant::Pressed;
        }
        if !state.contains(StateFlags::PRESSED) {
            return RolloverVariant::Raised;
        }
    }
    if state.contains(StateFlags::SELECTED) {
        RolloverVariant::Selected
    } else {
        RolloverVariant::Hidden
    }
}

/// Variants of borders around press-only controls such as combo box arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressVariant {
    /// Not enabled.
    Disabled,
    /// Pressed while armed.
    Pressed,
    /// Enabled and idle.
    Plain,
}

/// Press precedence: disabled, pressed, plain.
pub fn press(state: StateFlags) -> PressVariant {
    if !state.contains(StateFlags::ENABLED) {
        PressVariant::Disabled
    } else if state.is_pressed_armed() {
        PressVariant::Pressed
    } else {
        PressVariant::Plain
    }
}

/// Text field border variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextVariant {
    /// Not enabled.
    Disabled,
    /// Enabled, not editable.
    ReadOnly,
    /// Enabled and editable.
    Editable,
}

/// Text precedence: disabled, read-only, editable.
pub fn text(state: StateFlags) -> TextVariant {
    if !state.contains(StateFlags::ENABLED) {
        TextVariant::Disabled
    } else if !state.contains(StateFlags::EDITABLE) {
        TextVariant::ReadOnly
    } else {
        TextVariant::Editable
    }
}

/// Whether a control that only distinguishes availability is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    /// Accepts input.
    Enabled,
    /// Greyed out.
    Disabled,
}

/// Enabled or not.
pub fn availability(state: StateFlags) -> Availability {
    if state.contains(StateFlags::ENABLED) {
        Availability::Enabled
    } else {
        Availability::Disabled
    }
}

/// Menu item border variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItemVariant {
    /// Highlighted under the pointer or keyboard.
    Armed,
    /// Not highlighted.
    Plain,
}

/// An item is highlighted when armed; a menu also while its popup is open.
pub fn menu_item(state: StateFlags, is_menu: bool) -> MenuItemVariant {
    if state.contains(StateFlags::ARMED) || (is_menu && state.contains(StateFlags::SELECTED)) {
        MenuItemVariant::Armed
    } else {
        MenuItemVariant::Plain
    }
}

/// Menu border variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuVariant {
    /// A menu bar entry whose popup is open.
    TopLevelSelected,
    /// A menu bar entry under the pointer.
    TopLevelRollover,
    /// An idle menu bar entry.
    TopLevelPlain,
    /// A highlighted submenu.
    Armed,
    /// An idle submenu.
    Plain,
}

/// Menu bar entries look like rollover buttons; submenus look like menu items.
pub fn menu(state: StateFlags, top_level: bool) -> MenuVariant {
    if !top_level {
        return match menu_item(state, true) {
            MenuItemVariant::Armed => MenuVariant::Armed,
            MenuItemVariant::Plain => MenuVariant::Plain,
        };
    }
    if state.contains(StateFlags::SELECTED) {
        MenuVariant::TopLevelSelected
    } else if state.contains(StateFlags::ROLLOVER) && state.contains(StateFlags::ENABLED) {
        MenuVariant::TopLevelRollover
    } else {
        MenuVariant::TopLevelPlain
    }
}

/// Check box and radio button box variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckVariant {
    /// Not enabled.
    Disabled,
    /// Drawn with a flat outline.
    Flat,
    /// Pressed while armed.
    Pressed,
    /// Enabled and idle.
    Plain,
}

/// Box precedence: disabled, flat, pressed, plain.
pub fn check(state: StateFlags, flat: bool) -> CheckVariant {
    if !state.contains(StateFlags::ENABLED) {
        CheckVariant::Disabled
    } else if flat {
        CheckVariant::Flat
    } else if state.is_pressed_armed() {
        CheckVariant::Pressed
    } else {
        CheckVariant::Plain
    }
}

/// Check mark and radio dot variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkVariant {
    /// Not selected, nothing drawn.
    Hidden,
    /// Selected but not enabled.
    Disabled,
    /// Selected and highlighted.
    Armed,
    /// Selected.
    Normal,
}

/// Mark precedence: hidden unless selected, then disabled, armed, normal.
pub fn mark(state: StateFlags) -> MarkVariant {
    if !state.contains(StateFlags::SELECTED) {
        MarkVariant::Hidden
    } else if !state.contains(StateFlags::ENABLED) {
        MarkVariant::Disabled
    } else if state.intersects(StateFlags::ARMED | StateFlags::PRESSED) {
        MarkVariant::Armed
    } else {
        MarkVariant::Normal
    }
}

/// Submenu arrow variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowVariant {
    /// Highlighted.
    Selected,
    /// Not enabled.
    Disabled,
    /// Idle.
    Normal,
}

/// Arrow precedence: highlight wins over disabled, as in [menu_item].
pub fn arrow(state: StateFlags, is_menu: bool) -> ArrowVariant {
    if menu_item(state, is_menu) == MenuItemVariant::Armed {
        ArrowVariant::Selected
    } else if !state.contains(StateFlags::ENABLED) {
        ArrowVariant::Disabled
    } else {
        ArrowVariant::Normal
    }
}

/// Internal frame and title bar variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameVariant {
    /// The frame holding focus.
    Active,
    /// Any other frame.
    Inactive,
}

/// A frame is active while selected.
pub fn frame(state: StateFlags) -> FrameVariant {
    if state.contains(StateFlags::SELECTED) {
        FrameVariant::Active
    } else {
        FrameVariant::Inactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Capabilities;

    fn every_state() -> impl Iterator<Item = StateFlags> {
        (0..=StateFlags::all().bits()).map(StateFlags::from_bits_truncate)
    }

    #[test]
    fn button_precedence() {
        let enabled = StateFlags::ENABLED;
        let pressed = enabled | StateFlags::PRESSED | StateFlags::ARMED;
        assert_eq!(button(pressed | StateFlags::DEFAULT, false), ButtonVariant::DefaultPressed);
        assert_eq!(button(pressed | StateFlags::FOCUSED, false), ButtonVariant::Pressed);
        assert_eq!(button(enabled | StateFlags::PRESSED, false), ButtonVariant::Plain);
        assert_eq!(
            button(enabled | StateFlags::DEFAULT | StateFlags::FOCUSED, false),
            ButtonVariant::Default
        );
        assert_eq!(button(enabled | StateFlags::FOCUSED, false), ButtonVariant::Focused);
        assert_eq!(button(enabled | StateFlags::FOCUSED, true), ButtonVariant::Plain);
        assert_eq!(button(StateFlags::all() - enabled, false), ButtonVariant::Disabled);
    }

    #[test]
    fn rollover_hides_when_pressed_outside() {
        let hovered = StateFlags::ENABLED | StateFlags::ROLLOVER;
        assert_eq!(rollover(hovered), RolloverVariant::Raised);
        assert_eq!(rollover(hovered | StateFlags::PRESSED), RolloverVariant::Hidden);
        assert_eq!(
            rollover(hovered | StateFlags::PRESSED | StateFlags::ARMED),
            RolloverVariant::Pressed
        );
        assert_eq!(
            rollover(hovered | StateFlags::PRESSED | StateFlags::SELECTED),
            RolloverVariant::Selected
        );
        assert_eq!(rollover(StateFlags::ROLLOVER), RolloverVariant::Hidden);
    }

    #[test]
    fn menus_highlight_when_open() {
        let open = StateFlags::ENABLED | StateFlags::SELECTED;
        assert_eq!(menu_item(open, false), MenuItemVariant::Plain);
        assert_eq!(menu_item(open, true), MenuItemVariant::Armed);
        assert_eq!(menu(open, true), MenuVariant::TopLevelSelected);
        assert_eq!(menu(open, false), MenuVariant::Armed);
        assert_eq!(arrow(StateFlags::ARMED, false), ArrowVariant::Selected);
        assert_eq!(arrow(StateFlags::empty(), false), ArrowVariant::Disabled);
    }

    #[test]
    fn marks_follow_selection() {
        assert_eq!(mark(StateFlags::ENABLED), MarkVariant::Hidden);
        assert_eq!(mark(StateFlags::SELECTED), MarkVariant::Disabled);
        assert_eq!(
            mark(StateFlags::ENABLED | StateFlags::SELECTED | StateFlags::ARMED),
            MarkVariant::Armed
        );
        assert_eq!(check(StateFlags::ENABLED, true), CheckVariant::Flat);
        assert_eq!(check(StateFlags::empty(), true), CheckVariant::Disabled);
    }

    fn expected_button(state: StateFlags, border_paints_focus: bool) -> ButtonVariant {
        let on = |flag| state.contains(flag);
        let pressed = on(StateFlags::PRESSED) && on(StateFlags::ARMED);
        let focus_ring = on(StateFlags::FOCUSED) && !border_paints_focus;
        match (on(StateFlags::ENABLED), pressed, on(StateFlags::DEFAULT), focus_ring) {
            (false, _, _, _) => ButtonVariant::Disabled,
            (true, true, true, _) => ButtonVariant::DefaultPressed,
            (true, true, false, _) => ButtonVariant::Pressed,
            (true, false, true, _) => ButtonVariant::Default,
            (true, false, false, true) => ButtonVariant::Focused,
            (true, false, false, false) => ButtonVariant::Plain,
        }
    }

    fn expected_menu_item(state: StateFlags, is_menu: bool) -> MenuItemVariant {
        match (state.contains(StateFlags::ARMED), is_menu, state.contains(StateFlags::SELECTED)) {
            (true, _, _) | (false, true, true) => MenuItemVariant::Armed,
            _ => MenuItemVariant::Plain,
        }
    }

    fn expected_toggle(state: StateFlags) -> ToggleVariant {
        let on = |flag| state.contains(flag);
        match (on(StateFlags::ENABLED), on(StateFlags::PRESSED) && on(StateFlags::ARMED), on(StateFlags::SELECTED)) {
            (false, _, _) => ToggleVariant::Disabled,
            (true, true, _) => ToggleVariant::Pressed,
            (true, false, true) => ToggleVariant::Selected,
            (true, false, false) => ToggleVariant::Plain,
        }
    }

    fn expected_rollover(state: StateFlags) -> RolloverVariant {
        let on = |flag| state.contains(flag);
        match (
            on(StateFlags::ENABLED),
            on(StateFlags::ROLLOVER),
            on(StateFlags::PRESSED),
            on(StateFlags::ARMED),
            on(StateFlags::SELECTED),
        ) {
            (false, ..) => RolloverVariant::Hidden,
            (true, true, true, true, _) => RolloverVariant::Pressed,
            (true, true, false, _, _) => RolloverVariant::Raised,
            (true, _, _, _, true) => RolloverVariant::Selected,
            _ => RolloverVariant::Hidden,
        }
    }

    #[test]
    fn tables_match_their_precedence_over_every_state() {
        let mut count = 0;
        for state in every_state() {
            for flag in [false, true] {
                assert_eq!(button(state, flag), expected_button(state, flag), "button {state:?} {flag}");
                assert_eq!(menu_item(state, flag), expected_menu_item(state, flag), "menu item {state:?} {flag}");
            }
            assert_eq!(toggle(state), expected_toggle(state), "toggle {state:?}");
            assert_eq!(rollover(state), expected_rollover(state), "rollover {state:?}");
            count += 1;
        }
        assert_eq!(count, 256);
    }

    #[test]
    fn flags_a_table_does_not_read_leave_it_alone() {
        let unread = StateFlags::SELECTED | StateFlags::ROLLOVER | StateFlags::EDITABLE;
        for state in every_state() {
            for flag in [false, true] {
                assert_eq!(button(state, flag), button(state - unread, flag));
            }
            assert_eq!(
                menu_item(state, false),
                menu_item(state & StateFlags::ARMED, false)
            );
            assert_eq!(text(state), text(state & (StateFlags::ENABLED | StateFlags::EDITABLE)));
        }
    }

    #[test]
    fn masked_off_flags_never_change_the_variant() {
        for caps in (0..=Capabilities::all().bits()).map(Capabilities::from_bits_truncate) {
            let unmodeled = StateFlags::all() - StateFlags::all().masked(caps);
            for state in every_state() {
                let base = state.masked(caps);
                for extra in unmodeled.iter() {
                    let noisy = (state ^ extra).masked(caps);
                    assert_eq!(button(noisy, false), button(base, false), "{caps:?} {state:?} {extra:?}");
                    assert_eq!(toggle(noisy), toggle(base));
                    assert_eq!(rollover(noisy), rollover(base));
                    assert_eq!(menu_item(noisy, true), menu_item(base, true));
                    assert_eq!(text(noisy), text(base));
                    assert_eq!(mark(noisy), mark(base));
                }
            }
        }
    }

    #[test]
    fn disabled_always_wins_for_buttons() {
        for state in every_state().filter(|s| !s.contains(StateFlags::ENABLED)) {
            assert_eq!(button(state, false), ButtonVariant::Disabled);
            assert_eq!(toggle(state), ToggleVariant::Disabled);
            assert_eq!(press(state), PressVariant::Disabled);
            assert_eq!(text(state), TextVariant::Disabled);
        }
    }
}
