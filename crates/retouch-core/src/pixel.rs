//! Packed 8-bit-per-channel ARGB samples.
//!
//! A sample is stored as a single `u32` word laid out as
//! `a << 24 | r << 16 | g << 8 | b`. The type is `#[repr(transparent)]` and
//! `Pod`, so a slice of samples can be viewed as raw words without copying.

use bytemuck::{Pod, Zeroable};
use image::Rgba;

/// A packed ARGB sample.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Argb(u32);

impl Argb {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::opaque(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::opaque(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::opaque(0, 0, 255);

    /// Pack four channels into a sample.
    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Pack a fully opaque colour.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(255, r, g, b)
    }

    /// An opaque achromatic sample with every colour channel set to `level`.
    #[inline]
    pub const fn gray(level: u8) -> Self {
        Self::opaque(level, level, level)
    }

    /// Reinterpret a packed word.
    #[inline]
    pub const fn from_u32(word: u32) -> Self {
        Self(word)
    }

    /// The packed word.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Get the alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Get the red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Get the green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Get the blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// All four channels as an `(a, r, g, b)` tuple.
    #[inline]
    pub const fn channels(self) -> (u8, u8, u8, u8) {
        (self.a(), self.r(), self.g(), self.b())
    }

    /// Replace the colour channels, keeping alpha.
    #[inline]
    #[must_use]
    pub const fn with_rgb(self, r: u8, g: u8, b: u8) -> Self {
        Self::new(self.a(), r, g, b)
    }

    /// Whether the red, green and blue channels are equal.
    #[inline]
    pub const fn is_achromatic(self) -> bool {
        self.r() == self.g() && self.g() == self.b()
    }

    /// Whether the alpha channel is fully opaque.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }
}

impl std::fmt::Debug for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, r, g, b) = self.channels();
        write!(f, "Argb(a: {a}, r: {r}, g: {g}, b: {b})")
    }
}

impl From<u32> for Argb {
    fn from(word: u32) -> Self {
        Self(word)
    }
}

impl From<Argb> for u32 {
    fn from(px: Argb) -> Self {
        px.0
    }
}

impl From<(u8, u8, u8, u8)> for Argb {
    fn from((a, r, g, b): (u8, u8, u8, u8)) -> Self {
        Self::new(a, r, g, b)
    }
}

impl From<Rgba<u8>> for Argb {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self::new(a, r, g, b)
    }
}

impl From<Argb> for Rgba<u8> {
    fn from(px: Argb) -> Self {
        Rgba([px.r(), px.g(), px.b(), px.a()])
    }
}

/// Clamp an intermediate channel value into `[0, 255]`.
///
/// All channel arithmetic saturates through here; values never wrap.
#[inline]
pub fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_layout() {
        let px = Argb::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(px.to_u32(), 0x1234_5678);
        assert_eq!(px.channels(), (0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn test_opaque_and_gray() {
        assert_eq!(Argb::RED.to_u32(), 0xFFFF_0000);
        assert!(Argb::gray(127).is_achromatic());
        assert!(Argb::gray(127).is_opaque());
        assert!(!Argb::RED.is_achromatic());
    }

    #[test]
    fn test_with_rgb_keeps_alpha() {
        let px = Argb::new(40, 1, 2, 3).with_rgb(9, 8, 7);
        assert_eq!(px.channels(), (40, 9, 8, 7));
    }

    #[test]
    fn test_rgba_conversion() {
        let px = Argb::new(10, 20, 30, 40);
        let rgba: Rgba<u8> = px.into();
        assert_eq!(rgba.0, [20, 30, 40, 10]);
        assert_eq!(Argb::from(rgba), px);
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-40), 0);
        assert_eq!(clamp_channel(128), 128);
        assert_eq!(clamp_channel(383), 255);
    }
}
