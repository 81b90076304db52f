//! Hex string (de)serialization for [Color], used by custom theme definitions.

use serde::{Deserialize, Deserializer, Serializer};
use vello::peniko::Color;

use crate::color::rgba8;
use crate::error::{ThemeError, ThemeResult};

/// Serialize a Color as a hex string.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_hex(*color))
}

/// Deserialize a Color from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    parse_hex_color(&hex).map_err(Error::custom)
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = rgba8(color);
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
pub fn parse_hex_color(hex: &str) -> ThemeResult<Color> {
    let digits = hex.trim().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .ok_or_else(|| ThemeError::invalid_color(hex))
    };

    match digits.len() {
        6 => Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(ThemeError::invalid_color(hex)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_and_eight_digit_colors() {
        assert_eq!(rgba8(parse_hex_color("#2c4987").unwrap()), [0x2c, 0x49, 0x87, 0xff]);
        assert_eq!(rgba8(parse_hex_color("ff000080").unwrap()), [0xff, 0, 0, 0x80]);
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn hex_output_omits_opaque_alpha() {
        assert_eq!(to_hex(Color::from_rgb8(1, 2, 3)), "#010203");
        assert_eq!(to_hex(Color::from_rgba8(1, 2, 3, 4)), "#01020304");
    }
}
