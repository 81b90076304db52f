use std::fmt;

use bevel_theme::color::{pack, rgba8};
use image::{GrayImage, Luma, Rgba, RgbaImage};

use crate::device::{DeviceConfig, DeviceId};
use crate::Color;

/// Edge length of a bump tile in pixels.
pub const BUMP_BUFFER_SIZE: u32 = 64;

/// Distance between two dots of the same color along each axis.
pub const BUMP_SPACING: u32 = 4;

const BACK: u8 = 0;
const TOP: u8 = 1;
const SHADOW: u8 = 2;

/// Identity of a bump tile: target device plus the three pattern colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BumpKey {
    device: Option<DeviceId>,
    top: u32,
    shadow: u32,
    back: u32,
}

impl BumpKey {
    /// The key for a color triple on a device.
    pub fn new(device: Option<&DeviceConfig>, top: Color, shadow: Color, back: Color) -> Self {
        Self {
            device: device.map(DeviceConfig::id),
            top: pack(top),
            shadow: pack(shadow),
            back: pack(back),
        }
    }

    /// The device the tile was built for, if any.
    pub fn device(&self) -> Option<DeviceId> {
        self.device
    }

    /// Packed `0xRRGGBBAA` colors as `(top, shadow, back)`.
    pub fn colors(&self) -> (u32, u32, u32) {
        (self.top, self.shadow, self.back)
    }
}

enum Pixels {
    /// Device-compatible storage.
    Direct(RgbaImage),
    /// Palette indices, used when no compatible image can be made.
    Indexed {
        palette: [[u8; 4]; 3],
        indices: GrayImage,
    },
}

/// One 64x64 tile of the bump pattern.
///
/// Every fourth pixel along each axis starts a dot pair: a top-color dot at
/// `(x, y)` and `(x + 2, y + 2)`, a shadow-color dot at `(x + 1, y + 1)` and
/// `(x + 3, y + 3)`. Everything else is the back color, which may be transparent.
pub struct BumpBuffer {
    key: BumpKey,
    pixels: Pixels,
}

impl BumpBuffer {
    /// Build the tile for a color triple.
    ///
    /// With a device that can hold a compatible image the tile is stored directly;
    /// without a device, or when allocation is refused, an indexed tile is built.
    pub fn new(device: Option<&DeviceConfig>, top: Color, shadow: Color, back: Color) -> Self {
        let key = BumpKey::new(device, top, shadow, back);
        let mut palette = [rgba8(back), rgba8(top), rgba8(shadow)];

        let pixels = match device {
            Some(device) if device.can_allocate(BUMP_BUFFER_SIZE, BUMP_BUFFER_SIZE) => {
                if !device.supports_alpha() {
                    // Bitmask transparency only.
                    for color in &mut palette {
                        color[3] = if color[3] < 128 { 0 } else { 255 };
                    }
                }
                let mut image = RgbaImage::from_pixel(BUMP_BUFFER_SIZE, BUMP_BUFFER_SIZE, Rgba(palette[BACK as usize]));
                draw_pattern(|x, y, slot| image.put_pixel(x, y, Rgba(palette[slot as usize])));
                Pixels::Direct(image)
            },
            device => {
                if let Some(device) = device {
                    log::debug!("Device {:?} cannot allocate a bump tile, using indexed color", device.id());
                }
                let mut indices = GrayImage::from_pixel(BUMP_BUFFER_SIZE, BUMP_BUFFER_SIZE, Luma([BACK]));
                draw_pattern(|x, y, slot| indices.put_pixel(x, y, Luma([slot])));
                Pixels::Indexed { palette, indices }
            },
        };

        Self { key, pixels }
    }

    /// The identity this tile was built for.
    pub fn key(&self) -> BumpKey {
        self.key
    }

    /// Whether the tile is stored as palette indices.
    pub fn is_indexed(&self) -> bool {
        matches!(self.pixels, Pixels::Indexed { .. })
    }

    /// Tile width.
    pub fn width(&self) -> u32 {
        BUMP_BUFFER_SIZE
    }

    /// Tile height.
    pub fn height(&self) -> u32 {
        BUMP_BUFFER_SIZE
    }

    /// The RGBA value at `(x, y)`; transparent outside the tile.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        match &self.pixels {
            Pixels::Direct(image) => image.get_pixel_checked(x, y).map_or([0; 4], |p| p.0),
            Pixels::Indexed { palette, indices } => indices
                .get_pixel_checked(x, y)
                .map_or([0; 4], |p| palette[p.0[0] as usize]),
        }
    }

    /// Expand the tile into an RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        match &self.pixels {
            Pixels::Direct(image) => image.clone(),
            Pixels::Indexed { .. } => {
                RgbaImage::from_fn(BUMP_BUFFER_SIZE, BUMP_BUFFER_SIZE, |x, y| Rgba(self.pixel(x, y)))
            },
        }
    }
}

impl fmt::Debug for BumpBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BumpBuffer")
            .field("key", &self.key)
            .field("indexed", &self.is_indexed())
            .finish_non_exhaustive()
    }
}

fn draw_pattern(mut put: impl FnMut(u32, u32, u8)) {
    for x in (0..BUMP_BUFFER_SIZE).step_by(BUMP_SPACING as usize) {
        for y in (0..BUMP_BUFFER_SIZE).step_by(BUMP_SPACING as usize) {
            put(x, y, TOP);
            put(x + 2, y + 2, TOP);
            put(x + 1, y + 1, SHADOW);
            put(x + 3, y + 3, SHADOW);
        }
    }
}
