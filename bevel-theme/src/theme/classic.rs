//! Themes outside the sky/desert/experience families.

use vello::peniko::Color;

use super::palette::shades::*;
use super::{ColorRole, Theme, ThemePalette};

/// Brown accents on sand.
pub fn brown_sugar() -> Theme {
    Theme::new(
        "BrownSugar",
        "Brown Sugar",
        ThemePalette::new(
            [Color::from_rgb8(83, 83, 61), Color::from_rgb8(115, 107, 82), Color::from_rgb8(156, 140, 107)],
            [SAND_DARK, SAND_MEDIUM, SAND_LIGHT],
        ),
    )
    .with_color(ColorRole::MenuSelectedForeground, Color::WHITE)
}

/// Dark faces with light text; black and white swap roles.
pub fn dark_star() -> Theme {
    Theme::new(
        "DarkStar",
        "Dark Star",
        ThemePalette::new(
            [GRAY_LIGHTER, GRAY_LIGHT, GRAY_MEDIUMLIGHT],
            [GRAY_DARKEST, GRAY_DARKER, GRAY_DARK],
        )
        .with_extremes(GRAY_LIGHTEST, Color::from_rgb8(30, 30, 30)),
    )
}

/// Neutral light gray without an accent hue.
pub fn light_gray() -> Theme {
    Theme::new(
        "LightGray",
        "Light Gray",
        ThemePalette::new(
            [GRAY_MEDIUMDARK, GRAY_MEDIUMLIGHT, GRAY_LIGHTER2],
            [GRAY_MEDIUMLIGHT, GRAY_LIGHTER, GRAY_LIGHTEST],
        ),
    )
}

/// Metallic gray with a cool accent.
pub fn silver() -> Theme {
    Theme::new(
        "Silver",
        "Silver",
        ThemePalette::new(
            [Color::from_rgb8(80, 90, 110), Color::from_rgb8(140, 150, 170), Color::from_rgb8(200, 205, 215)],
            [GRAY_MEDIUM, Color::from_rgb8(190, 190, 190), GRAY_LIGHTEST],
        ),
    )
}
