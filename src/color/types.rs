//! Opaque and alpha-tagged color values with explicit conversions

use image::{Rgb, Rgba};

/// Opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel intensity
    pub red: u8,
    /// Green channel intensity
    pub green: u8,
    /// Blue channel intensity
    pub blue: u8,
}

impl Color {
    /// Pure black, used for loop outlines
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white, used for canvas backgrounds
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its channel intensities
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Channels in red, green, blue order
    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        Self::from(pixel.0)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Self(color.channels())
    }
}

/// RGB color carrying an alpha channel, as read from silhouette masks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlphaColor {
    /// Color channels without alpha
    pub color: Color,
    /// Opacity, 255 being fully opaque
    pub alpha: u8,
}

impl AlphaColor {
    /// Alpha value of a fully opaque pixel
    pub const OPAQUE: u8 = u8::MAX;

    /// Create an alpha-tagged color
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            color: Color::new(red, green, blue),
            alpha,
        }
    }

    /// Discard the alpha channel
    pub const fn drop_alpha(self) -> Color {
        self.color
    }

    /// Whether the pixel is fully opaque
    pub const fn is_opaque(self) -> bool {
        self.alpha == Self::OPAQUE
    }
}

impl From<Rgba<u8>> for AlphaColor {
    fn from(Rgba([red, green, blue, alpha]): Rgba<u8>) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl From<AlphaColor> for Rgba<u8> {
    fn from(color: AlphaColor) -> Self {
        let [red, green, blue] = color.color.channels();
        Self([red, green, blue, color.alpha])
    }
}
