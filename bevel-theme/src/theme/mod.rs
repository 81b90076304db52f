//! # Theme System
//!
//! A [Theme] is a named, immutable bundle of role colors and role fonts. Every role
//! color is derived from a small [ThemePalette] (three accent shades, three neutral
//! shades, black and white), so painters ask for *what* a color is used for
//! ([ColorRole::ControlShadow], [ColorRole::MenuSelectedBackground], ...) and never
//! hard-code shades.
//!
//! ## Built-in Themes
//!
//! - **Sky** family: [sky] (light gray controls, saturated accents)
//! - **Desert** family: [desert] (warm sand controls)
//! - **Experience** family: [experience] (modern desktop blues and greens)
//! - **Classic** set: [classic] (brown sugar, dark star, light gray, silver)
//!
//! The name -> constructor table lives in [builtin].
//!
//! ```rust
//! use bevel_theme::theme::{builtin, ColorRole};
//!
//! let theme = builtin::create("SkyBluer").unwrap();
//! let shadow = theme.color(ColorRole::ControlShadow);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use vello::peniko::Color;

pub use palette::ThemePalette;

/// Name -> constructor table of built-in themes.
pub mod builtin;
/// Brown sugar, dark star, light gray and silver.
pub mod classic;
/// The warm desert themes.
pub mod desert;
/// The modern desktop themes.
pub mod experience;
/// Palette type and shared shades.
pub mod palette;
/// The sky themes.
pub mod sky;

/// What a color is used for. Painters only ever ask a theme for roles.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorRole {
    Focus,
    Desktop,
    Control,
    ControlShadow,
    ControlDarkShadow,
    ControlInfo,
    ControlHighlight,
    ControlDisabled,
    PrimaryControl,
    PrimaryControlShadow,
    PrimaryControlDarkShadow,
    PrimaryControlInfo,
    PrimaryControlHighlight,
    SystemText,
    ControlText,
    InactiveControlText,
    InactiveSystemText,
    UserText,
    TextHighlight,
    HighlightedText,
    WindowBackground,
    WindowTitleBackground,
    WindowTitleForeground,
    WindowTitleInactiveBackground,
    WindowTitleInactiveForeground,
    MenuBackground,
    MenuForeground,
    MenuSelectedBackground,
    MenuSelectedForeground,
    MenuDisabledForeground,
    Separator,
    SeparatorBackground,
    AcceleratorForeground,
    AcceleratorSelectedForeground,
}

impl ColorRole {
    /// Every role, in declaration order.
    pub const ALL: [ColorRole; 34] = [
        ColorRole::Focus,
        ColorRole::Desktop,
        ColorRole::Control,
        ColorRole::ControlShadow,
        ColorRole::ControlDarkShadow,
        ColorRole::ControlInfo,
        ColorRole::ControlHighlight,
        ColorRole::ControlDisabled,
        ColorRole::PrimaryControl,
        ColorRole::PrimaryControlShadow,
        ColorRole::PrimaryControlDarkShadow,
        ColorRole::PrimaryControlInfo,
        ColorRole::PrimaryControlHighlight,
        ColorRole::SystemText,
        ColorRole::ControlText,
        ColorRole::InactiveControlText,
        ColorRole::InactiveSystemText,
        ColorRole::UserText,
        ColorRole::TextHighlight,
        ColorRole::HighlightedText,
        ColorRole::WindowBackground,
        ColorRole::WindowTitleBackground,
        ColorRole::WindowTitleForeground,
        ColorRole::WindowTitleInactiveBackground,
        ColorRole::WindowTitleInactiveForeground,
        ColorRole::MenuBackground,
        ColorRole::MenuForeground,
        ColorRole::MenuSelectedBackground,
        ColorRole::MenuSelectedForeground,
        ColorRole::MenuDisabledForeground,
        ColorRole::Separator,
        ColorRole::SeparatorBackground,
        ColorRole::AcceleratorForeground,
        ColorRole::AcceleratorSelectedForeground,
    ];
}

/// What a font is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontRole {
    /// Button, label and check box text.
    Control,
    /// Window and internal frame titles.
    Title,
    /// System text such as tool tips.
    System,
    /// User-entered text in text components and lists.
    User,
    /// Menu bar and menu item text.
    Menu,
    /// Accelerators and other secondary text.
    Small,
}

/// Weight/slant of a [FontSpec].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Regular weight, upright.
    #[default]
    Plain,
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
}

/// A font request the host toolkit resolves against installed fonts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontSpec {
    /// Family name, e.g. `Dialog` or `Tahoma`.
    pub family: String,
    /// Weight/slant.
    #[serde(default)]
    pub style: FontStyle,
    /// Point size.
    pub size: u16,
}

impl FontSpec {
    /// Create a font spec.
    pub fn new(family: impl Into<String>, style: FontStyle, size: u16) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }
}

/// One font per [FontRole].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    /// Font for [FontRole::Control].
    pub control: FontSpec,
    /// Font for [FontRole::Title].
    pub title: FontSpec,
    /// Font for [FontRole::System].
    pub system: FontSpec,
    /// Font for [FontRole::User].
    pub user: FontSpec,
    /// Font for [FontRole::Menu].
    pub menu: FontSpec,
    /// Font for [FontRole::Small].
    pub small: FontSpec,
}

impl FontSet {
    /// A set using one family at a base size; titles are bold, small text two points smaller.
    pub fn uniform(family: &str, size: u16) -> Self {
        Self {
            control: FontSpec::new(family, FontStyle::Plain, size),
            title: FontSpec::new(family, FontStyle::Bold, size),
            system: FontSpec::new(family, FontStyle::Plain, size),
            user: FontSpec::new(family, FontStyle::Plain, size),
            menu: FontSpec::new(family, FontStyle::Plain, size),
            small: FontSpec::new(family, FontStyle::Plain, size.saturating_sub(2).max(1)),
        }
    }

    /// Look up the font for a role.
    pub fn get(&self, role: FontRole) -> &FontSpec {
        match role {
            FontRole::Control => &self.control,
            FontRole::Title => &self.title,
            FontRole::System => &self.system,
            FontRole::User => &self.user,
            FontRole::Menu => &self.menu,
            FontRole::Small => &self.small,
        }
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self::uniform("Dialog", 12)
    }
}

/// A named, immutable bundle of role colors and fonts.
///
/// Themes are built once (by a [builtin] constructor or from a configuration file)
/// and shared behind an `Arc`; only the *active* theme reference ever changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    display_name: String,
    palette: ThemePalette,
    fonts: FontSet,
    overrides: IndexMap<ColorRole, Color>,
}

impl Theme {
    /// Create a theme. `name` is the lookup key, `display_name` the label shown in theme lists.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, palette: ThemePalette) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            palette,
            fonts: FontSet::default(),
            overrides: IndexMap::new(),
        }
    }

    /// Replace the font set.
    pub fn with_fonts(mut self, fonts: FontSet) -> Self {
        self.fonts = fonts;
        self
    }

    /// Pin a role to a specific color instead of the palette derivation.
    pub fn with_color(mut self, role: ColorRole, color: Color) -> Self {
        self.overrides.insert(role, color);
        self
    }

    /// The lookup name, e.g. `SkyBluer`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The human readable name, e.g. `Sky Bluer`.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The base palette.
    pub fn palette(&self) -> &ThemePalette {
        &self.palette
    }

    /// The font set.
    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Whether `query` names this theme (lookup or display name, case-insensitive).
    pub fn is_named(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query) || self.display_name.eq_ignore_ascii_case(query)
    }

    /// Resolve a role color.
    pub fn color(&self, role: ColorRole) -> Color {
        if let Some(color) = self.overrides.get(&role) {
            return *color;
        }

        let p = &self.palette;
        match role {
            ColorRole::Focus | ColorRole::Desktop => p.primary2,
            ColorRole::Control => p.secondary3,
            ColorRole::ControlShadow | ColorRole::ControlDisabled => p.secondary2,
            ColorRole::ControlDarkShadow => p.secondary1,
            ColorRole::ControlInfo
            | ColorRole::PrimaryControlInfo
            | ColorRole::SystemText
            | ColorRole::ControlText
            | ColorRole::UserText
            | ColorRole::HighlightedText
            | ColorRole::WindowTitleForeground
            | ColorRole::WindowTitleInactiveForeground
            | ColorRole::MenuForeground
            | ColorRole::MenuSelectedForeground
            | ColorRole::AcceleratorSelectedForeground => p.black,
            ColorRole::ControlHighlight
            | ColorRole::PrimaryControlHighlight
            | ColorRole::WindowBackground
            | ColorRole::SeparatorBackground => p.white,
            ColorRole::PrimaryControl | ColorRole::TextHighlight | ColorRole::WindowTitleBackground => {
                p.primary3
            },
            ColorRole::PrimaryControlShadow | ColorRole::MenuSelectedBackground => p.primary2,
            ColorRole::PrimaryControlDarkShadow
            | ColorRole::Separator
            | ColorRole::AcceleratorForeground => p.primary1,
            ColorRole::InactiveControlText
            | ColorRole::InactiveSystemText
            | ColorRole::MenuDisabledForeground => p.secondary2,
            ColorRole::WindowTitleInactiveBackground | ColorRole::MenuBackground => p.secondary3,
        }
    }

    /// Resolve a role font.
    pub fn font(&self, role: FontRole) -> &FontSpec {
        self.fonts.get(role)
    }
}
