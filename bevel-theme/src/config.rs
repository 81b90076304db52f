//! # Look Configuration
//!
//! Startup settings for the look: which theme to install by default, how tabs are
//! drawn, whether focus uses high-contrast colors, and how many bump textures to
//! keep cached. Settings come from environment variables, optionally pointing at
//! a TOML file.
//!
//! ## Environment Variables
//!
//! - `BEVEL_CONFIG`: path to a TOML configuration file (read first)
//! - `BEVEL_DEFAULT_THEME`: theme name, e.g. `DesertBlue`
//! - `BEVEL_TAB_STYLE`: `default` or `metal`
//! - `BEVEL_HIGH_CONTRAST_FOCUS`: `true` or `false`
//! - `BEVEL_PLATFORM`: `modern`, `windows` or `other`
//! - `BEVEL_BUMP_CACHE_CAPACITY`: positive integer
//!
//! Values that cannot be understood are logged and ignored; startup never fails
//! because of them.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [look]
//! default_theme = "Corporate"
//! tab_style = "metal"
//! high_contrast_focus = true
//!
//! [[theme]]
//! name = "Corporate"
//! display_name = "Corporate Blue"
//! primary1 = "#1e3c78"
//! primary2 = "#3c64b4"
//! primary3 = "#b4c8f0"
//! secondary1 = "#808080"
//! secondary2 = "#aaaaaa"
//! secondary3 = "#dcdcdc"
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};
use crate::platform::PlatformLook;
use crate::theme::builtin::BUILTIN_THEME_NAMES;
use crate::theme::{FontSet, Theme, ThemePalette};

/// Environment variable naming a TOML configuration file.
pub const ENV_CONFIG: &str = "BEVEL_CONFIG";
/// Environment variable overriding the default theme.
pub const ENV_DEFAULT_THEME: &str = "BEVEL_DEFAULT_THEME";
/// Environment variable selecting the tab style.
pub const ENV_TAB_STYLE: &str = "BEVEL_TAB_STYLE";
/// Environment variable toggling high-contrast focus colors.
pub const ENV_HIGH_CONTRAST_FOCUS: &str = "BEVEL_HIGH_CONTRAST_FOCUS";
/// Environment variable overriding the detected platform look.
pub const ENV_PLATFORM: &str = "BEVEL_PLATFORM";
/// Environment variable bounding the bump texture cache.
pub const ENV_BUMP_CACHE_CAPACITY: &str = "BEVEL_BUMP_CACHE_CAPACITY";

/// Default number of bump textures kept per cache.
pub const DEFAULT_BUMP_CACHE_CAPACITY: usize = 32;

/// How tabbed panes draw their tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabStyle {
    /// Rounded tabs.
    #[default]
    Default,
    /// Square tabs of the classic metal look.
    Metal,
}

impl fmt::Display for TabStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TabStyle::Default => "default",
            TabStyle::Metal => "metal",
        })
    }
}

impl FromStr for TabStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(TabStyle::Default),
            "metal" => Ok(TabStyle::Metal),
            other => Err(format!("unknown tab style '{other}'")),
        }
    }
}

/// A theme defined in a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomThemeSpec {
    /// Lookup name.
    pub name: String,
    /// Label for theme lists; defaults to `name`.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Base colors.
    #[serde(flatten)]
    pub palette: ThemePalette,
    /// Fonts; defaults to the standard set.
    #[serde(default)]
    pub fonts: Option<FontSet>,
}

impl CustomThemeSpec {
    /// Build the theme these settings describe.
    pub fn to_theme(&self) -> Theme {
        let display_name = self.display_name.clone().unwrap_or_else(|| self.name.clone());
        let theme = Theme::new(self.name.clone(), display_name, self.palette);
        match &self.fonts {
            Some(fonts) => theme.with_fonts(fonts.clone()),
            None => theme,
        }
    }
}

/// Look settings read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Theme to install instead of the platform default.
    pub default_theme: Option<String>,
    /// How tabs are drawn.
    pub tab_style: TabStyle,
    /// Use high-contrast focus colors.
    pub high_contrast_focus: bool,
    /// The platform flavor used to choose the default theme.
    pub platform: PlatformLook,
    /// Upper bound on cached bump textures.
    pub bump_cache_capacity: usize,
    /// Theme names installed when the catalog is first populated.
    pub installed_themes: Vec<String>,
    /// Themes defined in the configuration file.
    #[serde(skip)]
    pub custom_themes: Vec<CustomThemeSpec>,
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    look: toml::Table,
    #[serde(default)]
    theme: Vec<toml::Value>,
}

/// Environment variables and the `[look]` keys they set.
const ENV_SETTINGS: &[(&str, &str)] = &[
    (ENV_DEFAULT_THEME, "default_theme"),
    (ENV_TAB_STYLE, "tab_style"),
    (ENV_HIGH_CONTRAST_FOCUS, "high_contrast_focus"),
    (ENV_PLATFORM, "platform"),
    (ENV_BUMP_CACHE_CAPACITY, "bump_cache_capacity"),
];

impl Default for LookConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LookConfig {
    /// Configuration with built-in defaults and the detected platform.
    pub fn new() -> Self {
        Self {
            default_theme: None,
            tab_style: TabStyle::Default,
            high_contrast_focus: false,
            platform: PlatformLook::detect(),
            bump_cache_capacity: DEFAULT_BUMP_CACHE_CAPACITY,
            installed_themes: BUILTIN_THEME_NAMES.iter().map(|s| s.to_string()).collect(),
            custom_themes: Vec::new(),
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env_or_default() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `var`, which maps a variable name to its value.
    ///
    /// The file named by [ENV_CONFIG] is applied first; individual variables then
    /// override it.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(path) = var(ENV_CONFIG) {
            match Self::from_file(&path) {
                Ok(file_config) => config = file_config,
                Err(err) => log::warn!("Ignoring look configuration: {}", err),
            }
        }

        for &(name, key) in ENV_SETTINGS {
            if let Some(value) = var(name) {
                if let Err(reason) = config.apply(key, &value) {
                    log::warn!("Ignoring {}: {}", name, reason);
                }
            }
        }

        config
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| ThemeError::config_read(path, err))?;
        Self::from_toml(&content).map_err(|err| ThemeError::config_parse(path, err.to_string()))
    }

    /// Parse a configuration from TOML content.
    ///
    /// Only malformed TOML is an error. A `[look]` key or `[[theme]]` entry that
    /// cannot be understood is logged and skipped.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Self::new();

        for (key, value) in &file.look {
            let applied = match (key.as_str(), value) {
                ("installed_themes", toml::Value::Array(names)) => names
                    .iter()
                    .map(|name| name.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
                    .map(|names| config.installed_themes = names)
                    .ok_or_else(|| "expected a list of theme names".to_string()),
                (_, toml::Value::String(raw)) => config.apply(key, raw),
                (_, toml::Value::Boolean(_) | toml::Value::Integer(_)) => config.apply(key, &value.to_string()),
                _ => Err(format!("unsupported value {value}")),
            };
            if let Err(reason) = applied {
                log::warn!("Ignoring look.{}: {}", key, reason);
            }
        }

        for (index, value) in file.theme.into_iter().enumerate() {
            match value.try_into::<CustomThemeSpec>() {
                Ok(spec) => config.custom_themes.push(spec),
                Err(err) => log::warn!("Ignoring theme #{}: {}", index + 1, err.message()),
            }
        }

        Ok(config)
    }

    /// Apply one textual setting, named by its `[look]` key.
    fn apply(&mut self, key: &str, raw: &str) -> Result<(), String> {
        match key {
            "default_theme" => {
                let name = raw.trim();
                if !name.is_empty() {
                    self.default_theme = Some(name.to_string());
                }
            },
            "tab_style" => self.tab_style = raw.parse()?,
            "high_contrast_focus" => {
                self.high_contrast_focus = parse_bool(raw).ok_or_else(|| format!("'{raw}' is not a boolean"))?;
            },
            "platform" => self.platform = raw.parse()?,
            "bump_cache_capacity" => match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => self.bump_cache_capacity = capacity,
                _ => return Err(format!("'{raw}' is not a positive integer")),
            },
            other => return Err(format!("unknown setting '{other}'")),
        }
        Ok(())
    }

    /// Set the default theme name.
    pub fn with_default_theme(mut self, name: impl Into<String>) -> Self {
        self.default_theme = Some(name.into());
        self
    }

    /// Set the platform look.
    pub fn with_platform(mut self, platform: PlatformLook) -> Self {
        self.platform = platform;
        self
    }

    /// Set the theme names installed on first catalog population.
    pub fn with_installed_themes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.installed_themes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable high-contrast focus colors.
    pub fn with_high_contrast_focus(mut self, enabled: bool) -> Self {
        self.high_contrast_focus = enabled;
        self
    }

    /// Set the tab style.
    pub fn with_tab_style(mut self, style: TabStyle) -> Self {
        self.tab_style = style;
        self
    }

    /// Set the bump cache bound.
    pub fn with_bump_cache_capacity(mut self, capacity: usize) -> Self {
        self.bump_cache_capacity = capacity.max(1);
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
