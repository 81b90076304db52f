use std::sync::Arc;

use bevel::defaults::DefaultValue;
use bevel::look_and_feel::LookAndFeel;
use bevel::paint::device::{DeviceConfig, DeviceId, PixelFormat};
use bevel::paint::error::PaintError;
use bevel::paint::geometry::{Insets, Rect};
use bevel::paint::painter::{BorderKind, IconKind};
use bevel::paint::surface::{DisplayList, Pixmap};
use bevel::paint::widget::{StateFlags, WidgetView};
use bevel::theme::color::rgba8;
use bevel::theme::config::{LookConfig, TabStyle};
use bevel::theme::platform::PlatformLook;
use bevel::theme::registry::ThemeRegistry;
use bevel::theme::theme::{ColorRole, FontRole};

fn session(config: LookConfig) -> LookAndFeel {
    LookAndFeel::new(Arc::new(ThemeRegistry::new(config)))
}

#[test]
fn test_install_populates_the_defaults_table() {
    let laf = session(LookConfig::new());
    assert!(laf.defaults().is_empty());
    laf.install();
    let defaults = laf.defaults();

    assert_eq!(defaults.border("Button.border").unwrap().kind(), BorderKind::Button);
    assert_eq!(defaults.icon("MenuItem.checkIcon").unwrap().kind(), IconKind::CheckBoxMenuItem);
    assert_eq!(
        defaults.color("Button.focus", laf.scope()).map(rgba8),
        Some(rgba8(laf.color(ColorRole::Focus)))
    );
    assert_eq!(
        defaults.color("Menu.selectionBackground", laf.scope()).map(rgba8),
        Some(rgba8(laf.color(ColorRole::MenuSelectedBackground)))
    );
    assert_eq!(defaults.insets("Button.margin"), Some(Insets::new(2, 14, 2, 14)));
    assert!(Arc::ptr_eq(
        &defaults.border("Button.border").unwrap(),
        &laf.border(BorderKind::Button)
    ));
}

#[test]
fn test_reinstall_overwrites_engine_entries_only() {
    let laf = session(LookConfig::new());
    laf.install();
    let before = laf.border(BorderKind::Button);
    laf.put_default("Host.custom", DefaultValue::Int(7));

    laf.install();

    let after = laf.defaults().border("Button.border").unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert!(Arc::ptr_eq(&after, &laf.border(BorderKind::Button)));
    assert_eq!(laf.defaults().int("Host.custom"), Some(7));
}

#[test]
fn test_theme_switch_is_visible_through_defaults() {
    let laf = session(LookConfig::new().with_platform(PlatformLook::Other));
    laf.install();
    let before = laf.default_value("Menu.selectionBackground");

    laf.set_theme_by_name("DesertRed").unwrap();
    laf.install();

    assert!(matches!(before, Some(DefaultValue::Color(ColorRole::MenuSelectedBackground))));
    assert_eq!(laf.defaults().str("Bevel.themeName"), Some("DesertRed"));
    assert_eq!(
        laf.defaults().font("Menu.font", laf.scope()),
        Some(laf.font(FontRole::Menu))
    );
}

#[test]
fn test_config_switches_reach_the_table() {
    let laf = session(
        LookConfig::new()
            .with_tab_style(TabStyle::Metal)
            .with_high_contrast_focus(true),
    );
    laf.install();
    let defaults = laf.defaults();

    assert_eq!(defaults.str("TabbedPane.tabStyle"), Some("metal"));
    assert_eq!(defaults.bool("TabbedPane.metalTabs"), Some(true));
    assert_eq!(defaults.bool("Bevel.highContrastFocus"), Some(true));
    assert_eq!(
        defaults.color("Button.focus", laf.scope()).map(rgba8),
        Some([255, 211, 120, 255])
    );
}

#[test]
fn test_sessions_on_one_registry_are_isolated() {
    let registry = Arc::new(ThemeRegistry::new(LookConfig::new()));
    let first = LookAndFeel::new(Arc::clone(&registry));
    let second = LookAndFeel::new(registry);

    first.set_theme_by_name("DarkStar").unwrap();
    second.set_theme_by_name("Silver").unwrap();

    assert_eq!(first.theme().name(), "DarkStar");
    assert_eq!(second.theme().name(), "Silver");
}

#[test]
fn test_empty_theme_is_rejected() {
    let laf = LookAndFeel::default();
    assert!(laf.set_theme(None).is_err());
}

#[test]
fn test_paint_reports_capability_mismatch() {
    let laf = LookAndFeel::default();
    let mut list = DisplayList::new();
    let result = laf.paint_icon(
        &mut list,
        IconKind::RadioButton,
        &WidgetView::plain("panel"),
        Rect::new(0, 0, 13, 13),
    );
    assert!(matches!(result, Err(PaintError::CapabilityMismatch { .. })));

    let toggle = WidgetView::toggle().with_flag(StateFlags::SELECTED, true);
    laf.paint_icon(&mut list, IconKind::RadioButton, &toggle, Rect::new(0, 0, 13, 13))
        .unwrap();
    assert!(!list.is_empty());
}

#[test]
fn test_device_bump_tiles_are_direct() {
    let laf = LookAndFeel::default().with_device(DeviceConfig::new(DeviceId(9), PixelFormat::Rgba8));
    let mut pixmap = Pixmap::new(32, 32);
    let frame = WidgetView::plain("frame");

    laf.paint_icon(&mut pixmap, IconKind::TitleBumps, &frame, Rect::new(0, 0, 32, 32))
        .unwrap();

    let tile = laf.bump_cache().buffer(
        Some(&DeviceConfig::new(DeviceId(9), PixelFormat::Rgba8)),
        laf.color(ColorRole::ControlHighlight),
        laf.color(ColorRole::ControlDarkShadow),
        laf.color(ColorRole::Control),
    );
    assert!(!tile.is_indexed());
    assert_eq!(laf.bump_cache().stats().built, 1);
    assert_eq!(pixmap.pixel(0, 0), Some(tile.pixel(0, 0)));
}
