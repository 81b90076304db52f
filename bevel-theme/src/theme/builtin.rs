//! Compile-time registry of the built-in themes.
//!
//! Themes are looked up by name through [FACTORIES] instead of being discovered at
//! runtime; a configuration naming a theme that is not in this table simply fails
//! to resolve.

use super::{classic, desert, experience, sky, Theme};

/// Builds a fresh instance of a theme.
pub type ThemeFactory = fn() -> Theme;

/// Name of the theme used when nothing else resolves.
pub const FALLBACK_THEME: &str = "SkyBluer";

/// Names installed into a registry when the configuration does not list its own.
pub const BUILTIN_THEME_NAMES: &[&str] = &[
    "BrownSugar",
    "DarkStar",
    "DesertBlue",
    "DesertBluer",
    "DesertGreen",
    "DesertRed",
    "DesertYellow",
    "ExperienceBlue",
    "ExperienceGreen",
    "ExperienceRoyale",
    "LightGray",
    "Silver",
    "SkyBlue",
    "SkyBluer",
    "SkyGreen",
    "SkyKrupp",
    "SkyPink",
    "SkyRed",
    "SkyYellow",
];

/// Name -> constructor table.
pub const FACTORIES: &[(&str, ThemeFactory)] = &[
    ("BrownSugar", classic::brown_sugar),
    ("DarkStar", classic::dark_star),
    ("DesertBlue", desert::desert_blue),
    ("DesertBluer", desert::desert_bluer),
    ("DesertGreen", desert::desert_green),
    ("DesertRed", desert::desert_red),
    ("DesertYellow", desert::desert_yellow),
    ("ExperienceBlue", experience::experience_blue),
    ("ExperienceGreen", experience::experience_green),
    ("ExperienceRoyale", experience::experience_royale),
    ("LightGray", classic::light_gray),
    ("Silver", classic::silver),
    ("SkyBlue", sky::sky_blue),
    ("SkyBluer", sky::sky_bluer),
    ("SkyGreen", sky::sky_green),
    ("SkyKrupp", sky::sky_krupp),
    ("SkyPink", sky::sky_pink),
    ("SkyRed", sky::sky_red),
    ("SkyYellow", sky::sky_yellow),
];

/// Find the constructor for `name` (case-insensitive).
pub fn lookup(name: &str) -> Option<ThemeFactory> {
    FACTORIES
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
        .map(|(_, factory)| *factory)
}

/// Build the theme called `name`, if it is built in.
pub fn create(name: &str) -> Option<Theme> {
    lookup(name).map(|factory| factory())
}

/// The hard-coded fallback theme.
pub fn fallback() -> Theme {
    sky::sky_bluer()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_name_resolves_to_a_theme_with_that_name() {
        for name in BUILTIN_THEME_NAMES {
            let theme = create(name).unwrap_or_else(|| panic!("{name} should resolve"));
            assert_eq!(theme.name(), *name);
        }
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert!(lookup(" skybluer ").is_some());
        assert!(lookup("EXPERIENCEBLUE").is_some());
        assert!(lookup("Plastic").is_none());
    }

    #[test]
    fn fallback_is_the_named_fallback() {
        assert_eq!(fallback().name(), FALLBACK_THEME);
    }
}
