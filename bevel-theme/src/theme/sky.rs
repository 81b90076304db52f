//! Light gray control faces with a saturated accent.

use vello::peniko::Color;

use super::palette::shades::*;
use super::{Theme, ThemePalette};

fn sky(name: &str, display_name: &str, primary: [Color; 3]) -> Theme {
    Theme::new(
        name,
        display_name,
        ThemePalette::new(primary, [GRAY_MEDIUM, GRAY_LIGHT, GRAY_LIGHTER]),
    )
}

/// Blue accent with a light blue title bar.
pub fn sky_blue() -> Theme {
    sky(
        "SkyBlue",
        "Sky Blue",
        [BLUE_MEDIUM_DARKEST, BLUE_MEDIUM_LIGHT, BLUE_MEDIUM_LIGHTEST],
    )
}

/// Deeper blue accent; the fallback theme on every platform.
pub fn sky_bluer() -> Theme {
    sky(
        "SkyBluer",
        "Sky Bluer",
        [BLUE_MEDIUM_DARKEST, BLUE_MEDIUM_MEDIUM, BLUE_LOW_MEDIUM],
    )
}

/// Green accent.
pub fn sky_green() -> Theme {
    sky(
        "SkyGreen",
        "Sky Green",
        [GREEN_LOW_DARK, GREEN_LOW_MEDIUM, GREEN_LOW_LIGHTEST],
    )
}

/// Gray accent with a blue-tinted selection.
pub fn sky_krupp() -> Theme {
    sky(
        "SkyKrupp",
        "Sky Krupp",
        [Color::from_rgb8(54, 54, 90), Color::from_rgb8(156, 156, 178), Color::from_rgb8(197, 197, 221)],
    )
}

/// Pink accent.
pub fn sky_pink() -> Theme {
    sky(
        "SkyPink",
        "Sky Pink",
        [PINK_LOW_DARK, PINK_LOW_MEDIUM, PINK_LOW_LIGHTER],
    )
}

/// Red accent.
pub fn sky_red() -> Theme {
    sky(
        "SkyRed",
        "Sky Red",
        [RED_LOW_DARK, RED_LOW_MEDIUM, RED_LOW_LIGHTER],
    )
}

/// Yellow accent.
pub fn sky_yellow() -> Theme {
    sky(
        "SkyYellow",
        "Sky Yellow",
        [YELLOW_LOW_DARK, YELLOW_LOW_MEDIUM, YELLOW_LOW_LIGHTEST],
    )
}
