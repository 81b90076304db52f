use std::sync::Arc;

use bevel_paint::bumps::BumpCache;
use bevel_paint::error::PaintError;
use bevel_paint::geometry::{Insets, Rect};
use bevel_paint::painter::{variant, BorderKind, IconKind, PaintContext, PainterFactory};
use bevel_paint::surface::{DisplayList, Pixmap, Surface};
use bevel_paint::widget::{hints, Capabilities, StateFlags, WidgetModel, WidgetView};
use bevel_theme::color::rgba8;
use bevel_theme::registry::{ThemeRegistry, ThemeScope};
use bevel_theme::theme::ColorRole;

struct Fixture {
    scope: ThemeScope,
    bumps: BumpCache,
    painters: PainterFactory,
}

impl Fixture {
    fn new() -> Self {
        Self {
            scope: Arc::new(ThemeRegistry::default()).scope(),
            bumps: BumpCache::new(8),
            painters: PainterFactory::new(),
        }
    }

    fn border(&self, surface: &mut dyn Surface, kind: BorderKind, widget: &dyn WidgetModel, area: Rect) {
        let mut cx = PaintContext::new(surface, &self.scope, &self.bumps);
        self.painters.border(kind).paint(&mut cx, widget, area).unwrap();
    }

    fn button_pixels(&self, widget: &WidgetView) -> Pixmap {
        let mut pixmap = Pixmap::new(40, 20);
        self.border(&mut pixmap, BorderKind::Button, widget, Rect::new(0, 0, 40, 20));
        pixmap
    }
}

#[test]
fn test_button_border_is_built_once() {
    let fixture = Fixture::new();
    let first = fixture.painters.border(BorderKind::Button);
    let second = fixture.painters.border(BorderKind::Button);

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(fixture.painters.constructed(), 1);
}

#[test]
fn test_pressing_changes_the_button_variant() {
    let fixture = Fixture::new();
    let idle = WidgetView::button();
    let pressed = idle
        .clone()
        .with_flag(StateFlags::PRESSED, true)
        .with_flag(StateFlags::ARMED, true);

    assert_ne!(
        variant::button(idle.effective_state(), false),
        variant::button(pressed.effective_state(), false)
    );
    let before = fixture.button_pixels(&idle);
    let after = fixture.button_pixels(&pressed);
    assert_ne!(before.image(), after.image());
    assert_eq!(
        after.pixel(1, 1),
        Some(rgba8(fixture.scope.color(ColorRole::ControlShadow)))
    );
}

#[test]
fn test_default_flag_is_ignored_without_default_capability() {
    let fixture = Fixture::new();
    let plain = WidgetView::toggle();
    let flagged = WidgetView::toggle().with_flag(StateFlags::DEFAULT, true);

    assert_eq!(
        fixture.button_pixels(&plain).image(),
        fixture.button_pixels(&flagged).image()
    );
}

#[test]
fn test_check_box_icon_rejects_a_label() {
    let fixture = Fixture::new();
    let label = WidgetView::plain("label");
    let mut list = DisplayList::new();
    let mut cx = PaintContext::new(&mut list, &fixture.scope, &fixture.bumps);

    let err = fixture
        .painters
        .icon(IconKind::CheckBox)
        .paint_at(&mut cx, &label, 0, 0)
        .unwrap_err();

    match &err {
        PaintError::CapabilityMismatch { painter, widget, .. } => {
            assert_eq!(*painter, "CheckBox");
            assert_eq!(widget, "label");
        },
    }
    assert_eq!(err.missing(), Capabilities::PRESS | Capabilities::SELECTION);
    assert!(list.is_empty());
}

#[test]
fn test_insets_ignore_state_and_theme() {
    let fixture = Fixture::new();
    let border = fixture.painters.border(BorderKind::Button);
    let idle = WidgetView::button();
    let busy = WidgetView::button().with_state(StateFlags::all());

    assert_eq!(border.insets(&idle), Insets::new(2, 3, 2, 3));
    fixture.scope.set_active_theme_by_name("DarkStar").unwrap();
    assert_eq!(border.insets(&busy), Insets::new(2, 3, 2, 3));

    let expected = [
        (BorderKind::TextField, Insets::uniform(2)),
        (BorderKind::MenuItem, Insets::uniform(2)),
        (BorderKind::ThinRaised, Insets::uniform(2)),
        (BorderKind::MenuBar, Insets::new(1, 0, 1, 0)),
        (BorderKind::ToolBar, Insets::uniform(2)),
        (BorderKind::InternalFrame, Insets::uniform(5)),
        (BorderKind::Empty, Insets::ZERO),
    ];
    for (kind, insets) in expected {
        assert_eq!(fixture.painters.border(kind).insets(&idle), insets, "{kind}");
    }
}

#[test]
fn test_theme_switch_shows_on_next_paint() {
    let fixture = Fixture::new();
    let widget = WidgetView::button();

    fixture.scope.set_active_theme_by_name("SkyBluer").unwrap();
    let sky = fixture.button_pixels(&widget);
    fixture.scope.set_active_theme_by_name("DarkStar").unwrap();
    let dark = fixture.button_pixels(&widget);

    let dark_shadow = rgba8(fixture.scope.color(ColorRole::ControlDarkShadow));
    assert_eq!(dark.pixel(0, 0), Some(dark_shadow));
    assert_ne!(sky.image(), dark.image());
}

#[test]
fn test_borders_stay_inside_their_area() {
    let fixture = Fixture::new();
    let areas = [
        Rect::new(4, 4, 30, 20),
        Rect::new(4, 4, 1, 1),
        Rect::new(4, 4, 2, 2),
        Rect::new(4, 4, 3, 3),
        Rect::new(4, 4, 1, 10),
        Rect::new(4, 4, 10, 1),
        Rect::new(4, 4, 0, 0),
    ];
    let widgets = [
        WidgetView::button().with_state(StateFlags::all()),
        WidgetView::button(),
        WidgetView::toggle().with_state(StateFlags::ENABLED | StateFlags::SELECTED),
        WidgetView::menu_item().with_state(StateFlags::ENABLED | StateFlags::ARMED),
        WidgetView::text_field(),
        WidgetView::plain("bar").with_hint(hints::IS_FLOATABLE, true),
        WidgetView::plain("frame").with_flag(StateFlags::SELECTED, true),
    ];
    for &kind in BorderKind::ALL {
        for widget in &widgets {
            if !widget.capabilities().contains(fixture.painters.border(kind).requires()) {
                continue;
            }
            for area in areas {
                let mut pixmap = Pixmap::new(38, 28);
                fixture.border(&mut pixmap, kind, widget, area);
                for y in 0..28 {
                    for x in 0..38 {
                        if !area.contains(x, y) {
                            assert!(!pixmap.is_set(x, y), "{kind} in {area:?} drew at ({x}, {y})");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_tool_bar_grip_ends_on_a_whole_bump() {
    let fixture = Fixture::new();
    let bar = WidgetView::plain("bar").with_hint(hints::IS_FLOATABLE, true);
    let mut list = DisplayList::new();
    fixture.border(&mut list, BorderKind::ToolBar, &bar, Rect::new(0, 0, 200, 31));

    let blits: Vec<Rect> = list.image_blits().collect();
    assert_eq!(blits, [Rect::new(3, 3, 8, 24)]);
}

#[test]
fn test_rollover_button_is_invisible_at_rest() {
    let fixture = Fixture::new();
    let mut list = DisplayList::new();
    let widget = WidgetView::button();
    fixture.border(&mut list, BorderKind::RolloverButton, &widget, Rect::new(0, 0, 20, 20));
    assert!(list.is_empty());

    let hovered = widget.with_flag(StateFlags::ROLLOVER, true);
    fixture.border(&mut list, BorderKind::RolloverButton, &hovered, Rect::new(0, 0, 20, 20));
    assert!(!list.is_empty());
}

#[test]
fn test_menu_check_icon_respects_no_icons() {
    let fixture = Fixture::new();
    let icon = fixture.painters.icon(IconKind::CheckBoxMenuItem);
    let checked = WidgetView::menu_item().with_flag(StateFlags::SELECTED, true);

    let mut list = DisplayList::new();
    {
        let mut cx = PaintContext::new(&mut list, &fixture.scope, &fixture.bumps);
        icon.paint_at(&mut cx, &checked, 0, 0).unwrap();
    }
    assert!(!list.is_empty());

    let hidden = checked.with_hint(hints::NO_ICONS, true);
    let mut quiet = DisplayList::new();
    {
        let mut cx = PaintContext::new(&mut quiet, &fixture.scope, &fixture.bumps);
        icon.paint_at(&mut cx, &hidden, 0, 0).unwrap();
    }
    assert!(quiet.is_empty());
}

#[test]
fn test_bump_icons_share_cached_tiles() {
    let fixture = Fixture::new();
    let icon = fixture.painters.icon(IconKind::DragHandle);
    let widget = WidgetView::plain("grip");
    let mut list = DisplayList::new();
    {
        let mut cx = PaintContext::new(&mut list, &fixture.scope, &fixture.bumps);
        icon.paint(&mut cx, &widget, Rect::new(0, 0, 9, 130)).unwrap();
        icon.paint(&mut cx, &widget, Rect::new(20, 0, 8, 8)).unwrap();
    }

    assert_eq!(fixture.bumps.stats().built, 1);
    let blits: Vec<Rect> = list.image_blits().collect();
    assert_eq!(
        blits,
        [
            Rect::new(0, 0, 8, 64),
            Rect::new(0, 64, 8, 64),
            Rect::new(0, 128, 8, 2),
            Rect::new(20, 0, 8, 8),
        ]
    );
}

#[test]
fn test_active_title_bumps_use_primary_colors() {
    let fixture = Fixture::new();
    let icon = fixture.painters.icon(IconKind::TitleBumps);
    let active = WidgetView::plain("frame").with_flag(StateFlags::SELECTED, true);
    let mut pixmap = Pixmap::new(16, 16);
    {
        let mut cx = PaintContext::new(&mut pixmap, &fixture.scope, &fixture.bumps);
        icon.paint_at(&mut cx, &active, 0, 0).unwrap();
    }
    assert_eq!(
        pixmap.pixel(0, 0),
        Some(rgba8(fixture.scope.color(ColorRole::PrimaryControlHighlight)))
    );
    assert_eq!(
        pixmap.pixel(1, 0),
        Some(rgba8(fixture.scope.color(ColorRole::PrimaryControl)))
    );
}
