//! Platform flavor detection, used to pick the default theme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The desktop look the host platform is expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformLook {
    /// A modern, visually-styled desktop.
    Modern,
    /// A classic Windows desktop without visual styles.
    Windows,
    /// Anything else.
    Other,
}

impl PlatformLook {
    /// Guess the look of the platform this binary was built for.
    pub fn detect() -> Self {
        if cfg!(target_os = "windows") {
            PlatformLook::Modern
        } else {
            PlatformLook::Other
        }
    }

    /// Name of the theme installed when no override is configured.
    pub fn default_theme_name(self) -> &'static str {
        match self {
            PlatformLook::Modern => "ExperienceBlue",
            PlatformLook::Windows => "DesertBluer",
            PlatformLook::Other => "SkyBluer",
        }
    }
}

impl Default for PlatformLook {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Display for PlatformLook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformLook::Modern => "modern",
            PlatformLook::Windows => "windows",
            PlatformLook::Other => "other",
        };
        f.write_str(name)
    }
}

impl FromStr for PlatformLook {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "modern" | "xp" => Ok(PlatformLook::Modern),
            "windows" | "classic" => Ok(PlatformLook::Windows),
            "other" => Ok(PlatformLook::Other),
            other => Err(format!("unknown platform look '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_names_per_platform() {
        assert_eq!(PlatformLook::Modern.default_theme_name(), "ExperienceBlue");
        assert_eq!(PlatformLook::Windows.default_theme_name(), "DesertBluer");
        assert_eq!(PlatformLook::Other.default_theme_name(), "SkyBluer");
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("Modern".parse::<PlatformLook>(), Ok(PlatformLook::Modern));
        assert_eq!("classic".parse::<PlatformLook>(), Ok(PlatformLook::Windows));
        assert!("amiga".parse::<PlatformLook>().is_err());
    }
}
