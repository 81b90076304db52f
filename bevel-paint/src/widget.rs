//! # Widget State
//!
//! Painters never see a concrete widget type. They read a [WidgetModel]: a set of
//! [StateFlags], the [Capabilities] that say which of those flags are meaningful,
//! and free-form [ClientProperties] hints.
//!
//! A painter that needs a concept the widget does not model (a check box icon on a
//! plain label, say) reports [PaintError::CapabilityMismatch](crate::error::PaintError)
//! instead of guessing.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use indexmap::IndexMap;

use crate::geometry::Rect;

bitflags! {
    /// Interaction state of a widget at paint time.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct StateFlags: u16 {
        /// The widget accepts input.
        const ENABLED = 1 << 0;
        /// A pointer button is held down on the widget.
        const PRESSED = 1 << 1;
        /// Releasing now would trigger the widget.
        const ARMED = 1 << 2;
        /// The widget is checked, toggled on or open.
        const SELECTED = 1 << 3;
        /// The widget owns keyboard focus.
        const FOCUSED = 1 << 4;
        /// The widget is the default button of its window.
        const DEFAULT = 1 << 5;
        /// The pointer hovers the widget.
        const ROLLOVER = 1 << 6;
        /// The widget's text can be edited.
        const EDITABLE = 1 << 7;
    }
}

bitflags! {
    /// The state concepts a widget actually models.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        /// Has a press/arm cycle (buttons, menu items).
        const PRESS = 1 << 0;
        /// Has a selected state (toggles, check boxes, menus).
        const SELECTION = 1 << 1;
        /// Can be a window's default button.
        const DEFAULT_BUTTON = 1 << 2;
        /// Holds editable text.
        const TEXT = 1 << 3;
    }
}

impl StateFlags {
    /// Pressed while armed: the widget would fire if released now.
    pub const fn is_pressed_armed(self) -> bool {
        self.contains(StateFlags::PRESSED.union(StateFlags::ARMED))
    }

    /// Drop flags whose concept the widget does not model.
    ///
    /// A stray `DEFAULT` on a widget that cannot be a default button, for example,
    /// must not change how its border looks.
    pub const fn masked(self, capabilities: Capabilities) -> Self {
        let mut state = self;
        if !capabilities.contains(Capabilities::PRESS) {
            state = state.difference(StateFlags::PRESSED.union(StateFlags::ARMED));
        }
        if !capabilities.contains(Capabilities::SELECTION) {
            state = state.difference(StateFlags::SELECTED);
        }
        if !capabilities.contains(Capabilities::DEFAULT_BUTTON) {
            state = state.difference(StateFlags::DEFAULT);
        }
        if !capabilities.contains(Capabilities::TEXT) {
            state = state.difference(StateFlags::EDITABLE);
        }
        state
    }
}

/// Hint keys read by painters.
pub mod hints {
    /// Use the narrow button margin.
    pub const IS_NARROW: &str = "bevel.isNarrow";
    /// Menu bar and tool bar edge style, see [BorderStyle](super::BorderStyle).
    pub const BORDER_STYLE: &str = "bevel.borderStyle";
    /// Draw 3-D edges; `false` draws flat outlines.
    pub const IS_3D: &str = "bevel.is3D";
    /// Suppress menu item check marks.
    pub const NO_ICONS: &str = "bevel.noIcons";
    /// Draw check box and radio icons with a flat outline.
    pub const BORDER_PAINTED_FLAT: &str = "bevel.borderPaintedFlat";
    /// The menu sits directly in a menu bar.
    pub const IS_TOP_LEVEL_MENU: &str = "bevel.isTopLevelMenu";
    /// Component orientation; `false` mirrors arrows.
    pub const LEFT_TO_RIGHT: &str = "bevel.leftToRight";
    /// The tool bar can be dragged off and shows a grip.
    pub const IS_FLOATABLE: &str = "bevel.isFloatable";
}

/// A client property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientProperty {
    /// A switch.
    Bool(bool),
    /// A named option.
    Str(String),
}

impl From<bool> for ClientProperty {
    fn from(value: bool) -> Self {
        ClientProperty::Bool(value)
    }
}

impl From<&str> for ClientProperty {
    fn from(value: &str) -> Self {
        ClientProperty::Str(value.to_string())
    }
}

impl From<String> for ClientProperty {
    fn from(value: String) -> Self {
        ClientProperty::Str(value)
    }
}

/// Hints attached to a widget by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientProperties {
    values: IndexMap<String, ClientProperty>,
}

impl ClientProperties {
    /// No hints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a hint, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ClientProperty>) {
        self.values.insert(key.into(), value.into());
    }

    /// Remove a hint.
    pub fn remove(&mut self, key: &str) -> Option<ClientProperty> {
        self.values.shift_remove(key)
    }

    /// Raw hint value.
    pub fn get(&self, key: &str) -> Option<&ClientProperty> {
        self.values.get(key)
    }

    /// A boolean hint. String values `"true"` and `"false"` are accepted too.
    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key)? {
            ClientProperty::Bool(value) => Some(*value),
            ClientProperty::Str(value) => value.trim().parse().ok(),
        }
    }

    /// A string hint.
    pub fn str(&self, key: &str) -> Option<&str> {
        match self.values.get(key)? {
            ClientProperty::Str(value) => Some(value),
            ClientProperty::Bool(_) => None,
        }
    }

    /// Number of hints.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no hints.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Edge style of menu bars and tool bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    /// No edge.
    Empty,
    /// A shadow and highlight line along the bottom.
    Separator,
    /// An etched rectangle.
    Etched,
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BorderStyle::Empty => "empty",
            BorderStyle::Separator => "separator",
            BorderStyle::Etched => "etched",
        })
    }
}

impl FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "empty" | "none" => Ok(BorderStyle::Empty),
            "separator" => Ok(BorderStyle::Separator),
            "etched" => Ok(BorderStyle::Etched),
            other => Err(format!("unknown border style '{other}'")),
        }
    }
}

/// What a painter reads from the widget it decorates.
pub trait WidgetModel {
    /// A short name used in diagnostics.
    fn name(&self) -> &str {
        "widget"
    }

    /// Current interaction state.
    fn state(&self) -> StateFlags;

    /// The state concepts this widget models.
    fn capabilities(&self) -> Capabilities;

    /// Bounds in the surface's coordinate space.
    fn bounds(&self) -> Rect;

    /// Whether focus is already shown by another border layered over this one.
    fn border_paints_focus(&self) -> bool {
        false
    }

    /// Host-supplied hints.
    fn client_properties(&self) -> &ClientProperties;

    /// The state with flags outside the widget's capabilities removed.
    fn effective_state(&self) -> StateFlags {
        self.state().masked(self.capabilities())
    }

    /// A boolean hint, or `default` when unset or malformed.
    fn hint(&self, key: &str, default: bool) -> bool {
        self.client_properties().bool(key).unwrap_or(default)
    }

    /// Whether the widget is laid out left to right.
    fn is_left_to_right(&self) -> bool {
        self.hint(hints::LEFT_TO_RIGHT, true)
    }

    /// The requested menu bar or tool bar edge style.
    fn border_style(&self) -> Option<BorderStyle> {
        let value = self.client_properties().str(hints::BORDER_STYLE)?;
        match value.parse() {
            Ok(style) => Some(style),
            Err(err) => {
                log::debug!("{}: {}", self.name(), err);
                None
            },
        }
    }
}

/// A plain, self-contained [WidgetModel].
///
/// Hosts that keep widget state elsewhere implement the trait directly; this type
/// serves tests, previews and simple embedders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    name: String,
    state: StateFlags,
    capabilities: Capabilities,
    bounds: Rect,
    border_paints_focus: bool,
    properties: ClientProperties,
}

impl WidgetView {
    /// A widget with the given capabilities, enabled and otherwise idle.
    pub fn new(name: impl Into<String>, capabilities: Capabilities) -> Self {
        Self {
            name: name.into(),
            state: StateFlags::ENABLED,
            capabilities,
            bounds: Rect::default(),
            border_paints_focus: false,
            properties: ClientProperties::new(),
        }
    }

    /// A push button.
    pub fn button() -> Self {
        Self::new("button", Capabilities::PRESS | Capabilities::DEFAULT_BUTTON)
    }

    /// A toggle button, check box or radio button.
    pub fn toggle() -> Self {
        Self::new("toggle", Capabilities::PRESS | Capabilities::SELECTION)
    }

    /// A menu or menu item.
    pub fn menu_item() -> Self {
        Self::new("menu item", Capabilities::PRESS | Capabilities::SELECTION)
    }

    /// An editable text field.
    pub fn text_field() -> Self {
        Self::new("text field", Capabilities::TEXT).with_state(StateFlags::ENABLED | StateFlags::EDITABLE)
    }

    /// A widget with no interactive state, such as a panel or label.
    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, Capabilities::empty())
    }

    /// Replace the whole state.
    pub fn with_state(mut self, state: StateFlags) -> Self {
        self.state = state;
        self
    }

    /// Set or clear individual flags.
    pub fn with_flag(mut self, flag: StateFlags, on: bool) -> Self {
        self.state.set(flag, on);
        self
    }

    /// Set the bounds.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Declare that another border already shows focus.
    pub fn with_border_paints_focus(mut self, paints: bool) -> Self {
        self.border_paints_focus = paints;
        self
    }

    /// Attach a hint.
    pub fn with_hint(mut self, key: impl Into<String>, value: impl Into<ClientProperty>) -> Self {
        self.properties.set(key, value);
        self
    }

    /// Mutable access to the state, for hosts driving a long-lived view.
    pub fn state_mut(&mut self) -> &mut StateFlags {
        &mut self.state
    }

    /// Mutable access to the hints.
    pub fn client_properties_mut(&mut self) -> &mut ClientProperties {
        &mut self.properties
    }
}

impl WidgetModel for WidgetView {
    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> StateFlags {
        self.state
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn border_paints_focus(&self) -> bool {
        self.border_paints_focus
    }

    fn client_properties(&self) -> &ClientProperties {
        &self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_armed_needs_both_flags() {
        assert!(!StateFlags::PRESSED.is_pressed_armed());
        assert!((StateFlags::PRESSED | StateFlags::ARMED).is_pressed_armed());
    }

    #[test]
    fn masking_drops_unmodelled_flags() {
        let state = StateFlags::ENABLED | StateFlags::DEFAULT | StateFlags::SELECTED | StateFlags::PRESSED;
        assert_eq!(
            state.masked(Capabilities::PRESS),
            StateFlags::ENABLED | StateFlags::PRESSED
        );
        assert_eq!(state.masked(Capabilities::all()), state);
    }

    #[test]
    fn hints_fall_back_to_defaults() {
        let widget = WidgetView::button()
            .with_hint(hints::IS_3D, false)
            .with_hint(hints::IS_NARROW, "true")
            .with_hint(hints::BORDER_STYLE, "bogus");
        assert!(!widget.hint(hints::IS_3D, true));
        assert!(widget.hint(hints::IS_NARROW, false));
        assert!(widget.hint(hints::NO_ICONS, true));
        assert!(widget.is_left_to_right());
        assert_eq!(widget.border_style(), None);
    }

    #[test]
    fn border_style_parses_known_names() {
        let widget = WidgetView::plain("bar").with_hint(hints::BORDER_STYLE, "Etched");
        assert_eq!(widget.border_style(), Some(BorderStyle::Etched));
    }
}
