//! Descriptions of the rendering device a surface targets.
//!
//! Bump buffers are built in the device's own pixel layout when a device is known.
//! Without one (an off-screen or printing surface), an indexed-color buffer is used.

/// Opaque identity of a rendering device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(pub u64);

/// Pixel layouts a device can present directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelFormat {
    /// 8-bit RGBA with straight alpha.
    #[default]
    Rgba8,
    /// 8-bit RGB without alpha; transparency must come from a mask.
    Rgb8,
}

/// A rendering device configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceConfig {
    id: DeviceId,
    format: PixelFormat,
    max_image_size: u32,
}

impl DeviceConfig {
    /// Default limit on compatible image width and height.
    pub const DEFAULT_MAX_IMAGE_SIZE: u32 = 8192;

    /// Describe a device.
    pub const fn new(id: DeviceId, format: PixelFormat) -> Self {
        Self {
            id,
            format,
            max_image_size: Self::DEFAULT_MAX_IMAGE_SIZE,
        }
    }

    /// Limit the size of device-compatible images.
    pub const fn with_max_image_size(mut self, size: u32) -> Self {
        self.max_image_size = size;
        self
    }

    /// Device identity.
    pub const fn id(&self) -> DeviceId {
        self.id
    }

    /// Native pixel layout.
    pub const fn format(&self) -> PixelFormat {
        self.format
    }

    /// Whether the device supports per-pixel alpha.
    pub const fn supports_alpha(&self) -> bool {
        matches!(self.format, PixelFormat::Rgba8)
    }

    /// Whether a compatible image of the given size can be created.
    pub const fn can_allocate(&self, width: u32, height: u32) -> bool {
        width <= self.max_image_size && height <= self.max_image_size
    }
}
