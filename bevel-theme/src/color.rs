//! Small color helpers shared by themes and painters.

pub use vello::peniko::Color;

/// Channel values of a color as `[r, g, b, a]` in 8-bit sRGB.
///
/// Colors are compared through this form wherever value equality matters,
/// since the float components of [Color] are not `Eq`.
pub fn rgba8(color: Color) -> [u8; 4] {
    let c = color.to_rgba8();
    [c.r, c.g, c.b, c.a]
}

/// Pack a color into a `0xRRGGBBAA` word, usable as a hash key.
pub fn pack(color: Color) -> u32 {
    u32::from_be_bytes(rgba8(color))
}

/// Value equality of two colors at 8-bit precision.
pub fn same_color(a: Color, b: Color) -> bool {
    rgba8(a) == rgba8(b)
}

/// Fully transparent black, used for bump backgrounds that let the widget show through.
pub const TRANSPARENT: Color = Color::from_rgba8(0, 0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_orders_channels_big_endian() {
        assert_eq!(pack(Color::from_rgba8(0x11, 0x22, 0x33, 0x44)), 0x1122_3344);
    }

    #[test]
    fn transparent_has_zero_alpha() {
        assert_eq!(rgba8(TRANSPARENT)[3], 0);
        assert!(same_color(TRANSPARENT, Color::from_rgba8(0, 0, 0, 0)));
    }
}
