use std::sync::Arc;

use bevel_theme::config::LookConfig;
use bevel_theme::platform::PlatformLook;
use bevel_theme::registry::ThemeRegistry;
use bevel_theme::theme::{builtin, ColorRole, FontRole, Theme, ThemePalette};
use bevel_theme::Color;

fn custom(name: &str, display_name: &str) -> Theme {
    Theme::new(
        name,
        display_name,
        ThemePalette::new(
            [Color::from_rgb8(10, 0, 0), Color::from_rgb8(20, 0, 0), Color::from_rgb8(30, 0, 0)],
            [Color::from_rgb8(0, 10, 0), Color::from_rgb8(0, 20, 0), Color::from_rgb8(0, 30, 0)],
        ),
    )
}

#[test]
fn test_set_then_get_returns_identical_theme() {
    let registry = Arc::new(ThemeRegistry::default());
    let scope = registry.scope();
    let theme = registry.get("SkyPink").unwrap();

    scope.set_active_theme(Some(Arc::clone(&theme))).unwrap();

    assert!(Arc::ptr_eq(&scope.active_theme(), &theme));
}

#[test]
fn test_scopes_are_isolated() {
    let registry = Arc::new(ThemeRegistry::new(
        LookConfig::new().with_platform(PlatformLook::Other),
    ));
    let first = registry.scope();
    let second = registry.scope();

    first.set_active_theme_by_name("DarkStar").unwrap();

    assert_eq!(first.active_theme().name(), "DarkStar");
    assert!(!second.is_initialized());
    assert_eq!(second.active_theme().name(), "SkyBluer");
    assert_eq!(first.active_theme().name(), "DarkStar");
}

#[test]
fn test_installed_theme_is_listed_in_display_name_order() {
    let registry = ThemeRegistry::default();
    let zed = registry.install_theme(custom("Zed", "Zzz Last"));
    let aaa = registry.install_theme(custom("Aaa", "Aaa First"));

    let themes = registry.list_themes();

    assert!(themes.iter().any(|t| Arc::ptr_eq(t, &zed)));
    assert!(Arc::ptr_eq(&themes[0], &aaa));
    assert!(Arc::ptr_eq(themes.last().unwrap(), &zed));
    let names: Vec<&str> = themes.iter().map(|t| t.display_name()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(themes.len(), builtin::BUILTIN_THEME_NAMES.len() + 2);
}

#[test]
fn test_modern_platform_default() {
    let registry = Arc::new(ThemeRegistry::new(
        LookConfig::new().with_platform(PlatformLook::Modern),
    ));
    assert_eq!(registry.scope().active_theme().name(), "ExperienceBlue");
}

#[test]
fn test_override_wins_over_platform_default() {
    let registry = Arc::new(ThemeRegistry::new(
        LookConfig::new()
            .with_platform(PlatformLook::Modern)
            .with_default_theme("SkyGreen"),
    ));
    assert_eq!(registry.scope().active_theme().name(), "SkyGreen");
}

#[test]
fn test_custom_theme_from_config_can_be_activated() {
    let config = LookConfig::from_toml(
        r##"
        [look]
        default_theme = "Corporate"
        installed_themes = ["SkyBluer"]

        [[theme]]
        name = "Corporate"
        primary1 = "#1e3c78"
        primary2 = "#3c64b4"
        primary3 = "#b4c8f0"
        secondary1 = "#808080"
        secondary2 = "#aaaaaa"
        secondary3 = "#dcdcdc"
        "##,
    )
    .unwrap();
    let registry = Arc::new(ThemeRegistry::new(config));
    let scope = registry.scope();

    assert_eq!(scope.active_theme().name(), "Corporate");
    assert_eq!(
        bevel_theme::color::rgba8(scope.color(ColorRole::PrimaryControl)),
        [0xb4, 0xc8, 0xf0, 0xff]
    );
    assert_eq!(registry.list_themes().len(), 2);
}

#[test]
fn test_fonts_follow_active_theme() {
    let registry = Arc::new(ThemeRegistry::default());
    let scope = registry.scope();
    scope.set_active_theme_by_name("ExperienceBlue").unwrap();
    assert_eq!(scope.font(FontRole::Control).family, "Tahoma");
    scope.set_active_theme_by_name("SkyBluer").unwrap();
    assert_eq!(scope.font(FontRole::Control).family, "Dialog");
}

#[test]
fn test_unknown_name_is_not_found() {
    let registry = Arc::new(ThemeRegistry::default());
    let scope = registry.scope();
    assert!(scope.set_active_theme_by_name("Nope").is_err());
}

#[test]
fn test_bad_look_value_does_not_lose_custom_theme() {
    let config = LookConfig::from_toml(
        r##"
        [look]
        default_theme = "Corporate"
        tab_style = "fancy"

        [[theme]]
        name = "Corporate"
        primary1 = "#1e3c78"
        primary2 = "#3c64b4"
        primary3 = "#b4c8f0"
        secondary1 = "#808080"
        secondary2 = "#aaaaaa"
        secondary3 = "#dcdcdc"
        "##,
    )
    .unwrap();
    let registry = Arc::new(ThemeRegistry::new(config));

    assert_eq!(registry.scope().active_theme().name(), "Corporate");
}
