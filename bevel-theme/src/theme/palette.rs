use serde::{Deserialize, Serialize};
use vello::peniko::Color;

/// The eight base colors every role color of a [Theme](super::Theme) is derived from.
///
/// `primary*` colors carry the accent (selection, focus, title bars), `secondary*`
/// colors the neutral control surfaces. Index 1 is the darkest shade, 3 the lightest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    /// Darkest accent shade.
    #[serde(with = "crate::serde_color")]
    pub primary1: Color,
    /// Medium accent shade.
    #[serde(with = "crate::serde_color")]
    pub primary2: Color,
    /// Lightest accent shade.
    #[serde(with = "crate::serde_color")]
    pub primary3: Color,
    /// Darkest neutral shade.
    #[serde(with = "crate::serde_color")]
    pub secondary1: Color,
    /// Medium neutral shade.
    #[serde(with = "crate::serde_color")]
    pub secondary2: Color,
    /// Lightest neutral shade, the control face.
    #[serde(with = "crate::serde_color")]
    pub secondary3: Color,
    /// Text and outline color.
    #[serde(with = "crate::serde_color", default = "default_black")]
    pub black: Color,
    /// Highlight and window color.
    #[serde(with = "crate::serde_color", default = "default_white")]
    pub white: Color,
}

fn default_black() -> Color {
    Color::BLACK
}

fn default_white() -> Color {
    Color::WHITE
}

impl ThemePalette {
    /// Build a palette with plain black and white extremes.
    pub const fn new(primary: [Color; 3], secondary: [Color; 3]) -> Self {
        Self {
            primary1: primary[0],
            primary2: primary[1],
            primary3: primary[2],
            secondary1: secondary[0],
            secondary2: secondary[1],
            secondary3: secondary[2],
            black: Color::BLACK,
            white: Color::WHITE,
        }
    }

    /// Replace the black and white extremes, used by inverted themes.
    pub fn with_extremes(mut self, black: Color, white: Color) -> Self {
        self.black = black;
        self.white = white;
        self
    }
}

/// Shared shades used by several built-in themes.
pub(crate) mod shades {
    use vello::peniko::Color;

    pub const GRAY_DARKEST: Color = Color::from_rgb8(64, 64, 64);
    pub const GRAY_DARKER: Color = Color::from_rgb8(82, 82, 82);
    pub const GRAY_DARK: Color = Color::from_rgb8(90, 90, 90);
    pub const GRAY_MEDIUMDARK: Color = Color::from_rgb8(110, 110, 110);
    pub const GRAY_MEDIUM: Color = Color::from_rgb8(128, 128, 128);
    pub const GRAY_MEDIUMLIGHT: Color = Color::from_rgb8(150, 150, 150);
    pub const GRAY_LIGHT: Color = Color::from_rgb8(170, 170, 170);
    pub const GRAY_LIGHTER: Color = Color::from_rgb8(220, 220, 220);
    pub const GRAY_LIGHTER2: Color = Color::from_rgb8(230, 230, 230);
    pub const GRAY_LIGHTEST: Color = Color::from_rgb8(240, 240, 240);

    pub const BROWN_LIGHTEST: Color = Color::from_rgb8(242, 241, 238);

    pub const BLUE_LOW_DARKEST: Color = Color::from_rgb8(32, 64, 96);
    pub const BLUE_LOW_MEDIUM: Color = Color::from_rgb8(166, 202, 240);
    pub const BLUE_LOW_LIGHTEST: Color = Color::from_rgb8(195, 212, 232);
    pub const BLUE_MEDIUM_DARKEST: Color = Color::from_rgb8(44, 73, 135);
    pub const BLUE_MEDIUM_DARK: Color = Color::from_rgb8(49, 106, 196);
    pub const BLUE_MEDIUM_MEDIUM: Color = Color::from_rgb8(85, 115, 170);
    pub const BLUE_MEDIUM_LIGHT: Color = Color::from_rgb8(132, 162, 232);
    pub const BLUE_MEDIUM_LIGHTEST: Color = Color::from_rgb8(172, 210, 248);

    pub const GREEN_LOW_DARK: Color = Color::from_rgb8(75, 148, 75);
    pub const GREEN_LOW_MEDIUM: Color = Color::from_rgb8(112, 190, 112);
    pub const GREEN_LOW_LIGHTEST: Color = Color::from_rgb8(200, 222, 200);

    pub const PINK_LOW_DARK: Color = Color::from_rgb8(128, 74, 100);
    pub const PINK_LOW_MEDIUM: Color = Color::from_rgb8(214, 163, 185);
    pub const PINK_LOW_LIGHTER: Color = Color::from_rgb8(240, 214, 226);

    pub const RED_LOW_DARK: Color = Color::from_rgb8(128, 72, 72);
    pub const RED_LOW_MEDIUM: Color = Color::from_rgb8(218, 160, 160);
    pub const RED_LOW_LIGHTER: Color = Color::from_rgb8(240, 210, 210);

    pub const YELLOW_LOW_DARK: Color = Color::from_rgb8(160, 140, 60);
    pub const YELLOW_LOW_MEDIUM: Color = Color::from_rgb8(240, 218, 98);
    pub const YELLOW_LOW_LIGHTEST: Color = Color::from_rgb8(255, 250, 195);

    pub const SAND_DARK: Color = Color::from_rgb8(122, 115, 98);
    pub const SAND_MEDIUM: Color = Color::from_rgb8(165, 157, 136);
    pub const SAND_LIGHT: Color = Color::from_rgb8(212, 208, 200);

    pub const ORANGE_FOCUS: Color = Color::from_rgb8(255, 211, 120);
}
