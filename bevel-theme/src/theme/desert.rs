//! Warm sand control faces, the classic Windows default.

use vello::peniko::Color;

use super::palette::shades::*;
use super::{ColorRole, Theme, ThemePalette};

fn desert(name: &str, display_name: &str, primary: [Color; 3]) -> Theme {
    Theme::new(
        name,
        display_name,
        ThemePalette::new(primary, [SAND_DARK, SAND_MEDIUM, SAND_LIGHT]),
    )
    .with_color(ColorRole::WindowBackground, BROWN_LIGHTEST)
}

/// Medium blue accent.
pub fn desert_blue() -> Theme {
    desert(
        "DesertBlue",
        "Desert Blue",
        [BLUE_LOW_DARKEST, BLUE_MEDIUM_MEDIUM, BLUE_LOW_LIGHTEST],
    )
}

/// Strong blue accent with a white-on-blue title bar.
pub fn desert_bluer() -> Theme {
    desert(
        "DesertBluer",
        "Desert Bluer",
        [BLUE_MEDIUM_DARKEST, BLUE_MEDIUM_DARK, BLUE_MEDIUM_LIGHT],
    )
    .with_color(ColorRole::WindowTitleForeground, Color::WHITE)
    .with_color(ColorRole::MenuSelectedForeground, Color::WHITE)
}

/// Green accent.
pub fn desert_green() -> Theme {
    desert(
        "DesertGreen",
        "Desert Green",
        [GREEN_LOW_DARK, GREEN_LOW_MEDIUM, GREEN_LOW_LIGHTEST],
    )
}

/// Red accent.
pub fn desert_red() -> Theme {
    desert(
        "DesertRed",
        "Desert Red",
        [RED_LOW_DARK, RED_LOW_MEDIUM, RED_LOW_LIGHTER],
    )
}

/// Yellow accent.
pub fn desert_yellow() -> Theme {
    desert(
        "DesertYellow",
        "Desert Yellow",
        [YELLOW_LOW_DARK, YELLOW_LOW_MEDIUM, YELLOW_LOW_LIGHTEST],
    )
}
