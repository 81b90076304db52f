//! # UI Defaults
//!
//! The flat key/value table a toolkit reads when it creates widgets: which border
//! and icon painters to use, which theme role backs each color and font, margins
//! and a few switches. Keys follow the `Widget.property` convention, e.g.
//! `Button.border`, `MenuItem.checkIcon` or `Menu.selectionBackground`.
//!
//! Colors and fonts are stored as roles, not values, and are resolved against a
//! [ThemeScope] on lookup so the table stays valid across theme switches.

use std::sync::Arc;

use bevel_paint::geometry::Insets;
use bevel_paint::painter::{
    Border, BorderKind, Icon, IconKind, PainterFactory, BUTTON_MARGIN, NARROW_BUTTON_MARGIN,
};
use bevel_theme::config::{LookConfig, TabStyle};
use bevel_theme::registry::ThemeScope;
use bevel_theme::theme::{ColorRole, FontRole, FontSpec};
use bevel_theme::Color;
use indexmap::IndexMap;

/// A value in the [UiDefaults] table.
#[derive(Debug, Clone)]
pub enum DefaultValue {
    /// A shared border painter.
    Border(Arc<dyn Border>),
    /// A shared icon painter.
    Icon(Arc<dyn Icon>),
    /// A color, resolved from the active theme on lookup.
    Color(ColorRole),
    /// A font, resolved from the active theme on lookup.
    Font(FontRole),
    /// Fixed insets.
    Insets(Insets),
    /// A switch.
    Bool(bool),
    /// A number.
    Int(i64),
    /// A string.
    Str(String),
}

/// Flat table of UI defaults, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct UiDefaults {
    entries: IndexMap<String, DefaultValue>,
}

impl UiDefaults {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, returning the one it replaced.
    pub fn put(&mut self, key: impl Into<String>, value: DefaultValue) -> Option<DefaultValue> {
        self.entries.insert(key.into(), value)
    }

    /// Remove a value.
    pub fn remove(&mut self, key: &str) -> Option<DefaultValue> {
        self.entries.shift_remove(key)
    }

    /// Raw lookup.
    pub fn get(&self, key: &str) -> Option<&DefaultValue> {
        self.entries.get(key)
    }

    /// Whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// A border painter.
    pub fn border(&self, key: &str) -> Option<Arc<dyn Border>> {
        match self.get(key)? {
            DefaultValue::Border(border) => Some(Arc::clone(border)),
            _ => None,
        }
    }

    /// An icon painter.
    pub fn icon(&self, key: &str) -> Option<Arc<dyn Icon>> {
        match self.get(key)? {
            DefaultValue::Icon(icon) => Some(Arc::clone(icon)),
            _ => None,
        }
    }

    /// A color role's current value in `scope`.
    pub fn color(&self, key: &str, scope: &ThemeScope) -> Option<Color> {
        match self.get(key)? {
            DefaultValue::Color(role) => Some(scope.color(*role)),
            _ => None,
        }
    }

    /// A font role's current value in `scope`.
    pub fn font(&self, key: &str, scope: &ThemeScope) -> Option<FontSpec> {
        match self.get(key)? {
            DefaultValue::Font(role) => Some(scope.font(*role)),
            _ => None,
        }
    }

    /// Insets.
    pub fn insets(&self, key: &str) -> Option<Insets> {
        match self.get(key)? {
            DefaultValue::Insets(insets) => Some(*insets),
            _ => None,
        }
    }

    /// A switch.
    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            DefaultValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// A number.
    pub fn int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            DefaultValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// A string.
    pub fn str(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            DefaultValue::Str(value) => Some(value),
            _ => None,
        }
    }
}

const BORDER_ALIASES: &[(&str, BorderKind)] = &[
    ("PasswordField.border", BorderKind::TextField),
    ("FormattedTextField.border", BorderKind::TextField),
    ("Spinner.border", BorderKind::TextField),
    ("ToolBar.rolloverBorder", BorderKind::RolloverButton),
    ("ComboBox.editorBorder", BorderKind::ComboBoxEditor),
    ("ComboBox.arrowButtonBorder", BorderKind::ComboBoxArrowButton),
    ("Table.scrollPaneBorder", BorderKind::ScrollPane),
    ("TitledBorder.border", BorderKind::Etched),
    ("CheckBoxMenuItem.border", BorderKind::MenuItem),
    ("RadioButtonMenuItem.border", BorderKind::MenuItem),
    ("InternalFrame.paletteBorder", BorderKind::Palette),
    ("ToolTip.border", BorderKind::ThinRaised),
];

const ICONS: &[(&str, IconKind)] = &[
    ("CheckBox.icon", IconKind::CheckBox),
    ("RadioButton.icon", IconKind::RadioButton),
    ("MenuItem.checkIcon", IconKind::CheckBoxMenuItem),
    ("CheckBoxMenuItem.checkIcon", IconKind::CheckBoxMenuItem),
    ("RadioButtonMenuItem.checkIcon", IconKind::RadioButtonMenuItem),
    ("Menu.arrowIcon", IconKind::MenuArrow),
    ("MenuItem.arrowIcon", IconKind::MenuItemArrow),
    ("CheckBoxMenuItem.arrowIcon", IconKind::MenuItemArrow),
    ("RadioButtonMenuItem.arrowIcon", IconKind::MenuItemArrow),
    ("Tree.expandedIcon", IconKind::ExpandedTree),
    ("Tree.collapsedIcon", IconKind::CollapsedTree),
    ("ComboBox.buttonIcon", IconKind::ComboBoxButton),
    ("InternalFrame.titleBumps", IconKind::TitleBumps),
    ("ToolBar.dragHandle", IconKind::DragHandle),
    ("SplitPane.dragHandle", IconKind::DragHandle),
];

const COLORS: &[(&str, ColorRole)] = &[
    ("Button.focus", ColorRole::Focus),
    ("ToggleButton.focus", ColorRole::Focus),
    ("CheckBox.focus", ColorRole::Focus),
    ("RadioButton.focus", ColorRole::Focus),
    ("Button.background", ColorRole::Control),
    ("Button.foreground", ColorRole::ControlText),
    ("Button.shadow", ColorRole::ControlShadow),
    ("Button.darkShadow", ColorRole::ControlDarkShadow),
    ("Button.highlight", ColorRole::ControlHighlight),
    ("Button.disabledText", ColorRole::InactiveControlText),
    ("Button.select", ColorRole::ControlShadow),
    ("Panel.background", ColorRole::Control),
    ("Label.foreground", ColorRole::SystemText),
    ("Label.disabledForeground", ColorRole::InactiveSystemText),
    ("Desktop.background", ColorRole::Desktop),
    ("MenuBar.background", ColorRole::MenuBackground),
    ("Menu.background", ColorRole::MenuBackground),
    ("Menu.foreground", ColorRole::MenuForeground),
    ("Menu.selectionBackground", ColorRole::MenuSelectedBackground),
    ("Menu.selectionForeground", ColorRole::MenuSelectedForeground),
    ("Menu.disabledForeground", ColorRole::MenuDisabledForeground),
    ("MenuItem.background", ColorRole::MenuBackground),
    ("MenuItem.foreground", ColorRole::MenuForeground),
    ("MenuItem.selectionBackground", ColorRole::MenuSelectedBackground),
    ("MenuItem.selectionForeground", ColorRole::MenuSelectedForeground),
    ("MenuItem.disabledForeground", ColorRole::MenuDisabledForeground),
    ("MenuItem.acceleratorForeground", ColorRole::AcceleratorForeground),
    ("MenuItem.acceleratorSelectionForeground", ColorRole::AcceleratorSelectedForeground),
    ("PopupMenu.background", ColorRole::MenuBackground),
    ("Separator.foreground", ColorRole::Separator),
    ("Separator.background", ColorRole::SeparatorBackground),
    ("TextField.background", ColorRole::WindowBackground),
    ("TextField.foreground", ColorRole::UserText),
    ("TextField.inactiveForeground", ColorRole::InactiveSystemText),
    ("TextField.selectionBackground", ColorRole::TextHighlight),
    ("TextField.selectionForeground", ColorRole::HighlightedText),
    ("InternalFrame.activeTitleBackground", ColorRole::WindowTitleBackground),
    ("InternalFrame.activeTitleForeground", ColorRole::WindowTitleForeground),
    ("InternalFrame.inactiveTitleBackground", ColorRole::WindowTitleInactiveBackground),
    ("InternalFrame.inactiveTitleForeground", ColorRole::WindowTitleInactiveForeground),
    ("ToolTip.background", ColorRole::PrimaryControl),
    ("ToolTip.foreground", ColorRole::UserText),
];

const FONTS: &[(&str, FontRole)] = &[
    ("Button.font", FontRole::Control),
    ("ToggleButton.font", FontRole::Control),
    ("CheckBox.font", FontRole::Control),
    ("RadioButton.font", FontRole::Control),
    ("Label.font", FontRole::Control),
    ("ComboBox.font", FontRole::Control),
    ("Tree.font", FontRole::Control),
    ("MenuBar.font", FontRole::Menu),
    ("Menu.font", FontRole::Menu),
    ("MenuItem.font", FontRole::Menu),
    ("CheckBoxMenuItem.font", FontRole::Menu),
    ("RadioButtonMenuItem.font", FontRole::Menu),
    ("TextField.font", FontRole::User),
    ("TextArea.font", FontRole::User),
    ("InternalFrame.titleFont", FontRole::Title),
    ("ToolTip.font", FontRole::Small),
    ("MenuItem.acceleratorFont", FontRole::Small),
];

/// Write every engine-provided entry into `defaults`, replacing earlier values.
///
/// Entries the host added under other keys are left alone.
pub fn populate(defaults: &mut UiDefaults, painters: &PainterFactory, config: &LookConfig, theme_name: &str) {
    for &kind in BorderKind::ALL {
        defaults.put(format!("{}.border", kind.name()), DefaultValue::Border(painters.border(kind)));
    }
    for &(key, kind) in BORDER_ALIASES {
        defaults.put(key, DefaultValue::Border(painters.border(kind)));
    }
    for &(key, kind) in ICONS {
        defaults.put(key, DefaultValue::Icon(painters.icon(kind)));
    }
    for &(key, role) in COLORS {
        defaults.put(key, DefaultValue::Color(role));
    }
    for &(key, role) in FONTS {
        defaults.put(key, DefaultValue::Font(role));
    }

    defaults.put("Button.margin", DefaultValue::Insets(BUTTON_MARGIN));
    defaults.put("Button.narrowMargin", DefaultValue::Insets(NARROW_BUTTON_MARGIN));
    defaults.put("TabbedPane.tabStyle", DefaultValue::Str(config.tab_style.to_string()));
    defaults.put("TabbedPane.metalTabs", DefaultValue::Bool(config.tab_style == TabStyle::Metal));
    defaults.put("Bevel.highContrastFocus", DefaultValue::Bool(config.high_contrast_focus));
    defaults.put("Bevel.platform", DefaultValue::Str(config.platform.to_string()));
    defaults.put(
        "Bevel.bumpCacheCapacity",
        DefaultValue::Int(config.bump_cache_capacity as i64),
    );
    defaults.put("Bevel.themeName", DefaultValue::Str(theme_name.to_string()));
}
