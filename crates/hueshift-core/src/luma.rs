//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! These weights are the identity-angle row sums of the hue rotation matrix,
//! so rotating hue leaves luma approximately where it was.

/// ITU-R BT.601 coefficient for the red channel.
pub const LUMA_R: f64 = 0.299;

/// ITU-R BT.601 coefficient for the green channel.
pub const LUMA_G: f64 = 0.587;

/// ITU-R BT.601 coefficient for the blue channel.
pub const LUMA_B: f64 = 0.114;

/// Calculate luma from channel values on any common scale.
#[inline]
pub fn luma(r: f64, g: f64, b: f64) -> f64 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Calculate luma from u8 RGB values (0 to 255).
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    luma(r as f64, g as f64, b as f64).clamp(0.0, 255.0).round() as u8
}
