//! Modern desktop themes: light faces, Tahoma text, vivid selections.

use vello::peniko::Color;

use super::palette::shades::*;
use super::{ColorRole, FontSet, Theme, ThemePalette};

const FACE: [Color; 3] = [
    Color::from_rgb8(172, 168, 153),
    Color::from_rgb8(201, 199, 186),
    Color::from_rgb8(236, 233, 216),
];

fn experience(name: &str, display_name: &str, primary: [Color; 3]) -> Theme {
    Theme::new(name, display_name, ThemePalette::new(primary, FACE))
        .with_fonts(FontSet::uniform("Tahoma", 11))
        .with_color(ColorRole::MenuSelectedForeground, Color::WHITE)
        .with_color(ColorRole::WindowTitleForeground, Color::WHITE)
}

/// Blue selection, the default on modern desktops.
pub fn experience_blue() -> Theme {
    experience(
        "ExperienceBlue",
        "Experience Blue",
        [BLUE_MEDIUM_DARKEST, BLUE_MEDIUM_DARK, BLUE_MEDIUM_LIGHT],
    )
}

/// Olive green selection.
pub fn experience_green() -> Theme {
    experience(
        "ExperienceGreen",
        "Experience Green",
        [Color::from_rgb8(100, 112, 57), Color::from_rgb8(147, 160, 112), Color::from_rgb8(209, 217, 166)],
    )
}

/// Royal blue selection on a bluish face.
pub fn experience_royale() -> Theme {
    Theme::new(
        "ExperienceRoyale",
        "Experience Royale",
        ThemePalette::new(
            [BLUE_LOW_DARKEST, Color::from_rgb8(51, 94, 168), Color::from_rgb8(117, 150, 227)],
            [GRAY_MEDIUMDARK, GRAY_MEDIUMLIGHT, Color::from_rgb8(235, 233, 237)],
        ),
    )
    .with_fonts(FontSet::uniform("Tahoma", 11))
    .with_color(ColorRole::MenuSelectedForeground, Color::WHITE)
    .with_color(ColorRole::WindowTitleForeground, Color::WHITE)
}
