//! Hue rotation for RGBA pixel buffers.
//!
//! The rotation is one linear map over (R, G, B). It folds the RGB to YIQ
//! conversion, the rotation of the chroma plane and the YIQ to RGB
//! conversion into a single 3x3 matrix, so no per-pixel color-space round
//! trip is needed.
//!
//! ## Per-pixel steps
//! 1. Apply the matrix to the pixel's (R, G, B) in f64
//! 2. Clamp each result to [0, 255] and round to nearest
//! 3. Copy alpha through unchanged
//!
//! Rotating twice by `h` is close to, but not the same as, rotating once by
//! `2h`: the folded matrix is an approximation and does not compose exactly.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::luma::{LUMA_B, LUMA_G, LUMA_R};

/// Smallest accepted hue angle in degrees.
pub const MIN_HUE_DEGREES: f64 = 0.0;

/// Largest accepted hue angle in degrees.
pub const MAX_HUE_DEGREES: f64 = 360.0;

/// Errors produced when building a [`HueAngle`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HueError {
    /// The angle lies outside [0, 360] (or is NaN).
    #[error("Hue {0} is outside the 0-360 degree range")]
    OutOfRange(f64),

    /// The textual hue is not a base-10 integer.
    #[error("Hue is not an integer: {0:?}")]
    NotAnInteger(String),
}

/// A hue rotation angle in degrees, guaranteed to lie in [0, 360].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct HueAngle(f64);

impl HueAngle {
    /// The zero rotation.
    pub const ZERO: HueAngle = HueAngle(0.0);

    /// Create a validated hue angle.
    pub fn new(degrees: f64) -> Result<Self, HueError> {
        // NaN fails the range check as well
        if !(MIN_HUE_DEGREES..=MAX_HUE_DEGREES).contains(&degrees) {
            return Err(HueError::OutOfRange(degrees));
        }
        Ok(Self(degrees))
    }

    /// The angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// The angle in radians (`degrees * PI / 180`).
    #[inline]
    pub fn radians(self) -> f64 {
        self.0 * PI / 180.0
    }
}

impl TryFrom<f64> for HueAngle {
    type Error = HueError;

    fn try_from(degrees: f64) -> Result<Self, Self::Error> {
        Self::new(degrees)
    }
}

impl TryFrom<i64> for HueAngle {
    type Error = HueError;

    fn try_from(degrees: i64) -> Result<Self, Self::Error> {
        Self::new(degrees as f64)
    }
}

impl From<HueAngle> for f64 {
    fn from(angle: HueAngle) -> Self {
        angle.0
    }
}

/// Parses integer degrees only ("120", "+90"); fractions and whitespace are rejected.
impl FromStr for HueAngle {
    type Err = HueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degrees: i64 = s
            .parse()
            .map_err(|_| HueError::NotAnInteger(s.to_string()))?;
        Self::try_from(degrees)
    }
}

impl fmt::Display for HueAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 3x3 hue rotation coefficients. Row = output channel, column = input channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix {
    m: [[f64; 3]; 3],
}

impl RotationMatrix {
    /// The matrix that leaves every color unchanged.
    pub const IDENTITY: RotationMatrix = RotationMatrix {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Build the matrix for a validated angle.
    pub fn from_angle(angle: HueAngle) -> Self {
        Self::from_degrees(angle.degrees())
    }

    /// Build the matrix for an angle in degrees.
    ///
    /// The angle is not validated; any finite value gives a well-formed
    /// matrix, and angles a full turn apart give the same coefficients up
    /// to floating point error.
    pub fn from_degrees(degrees: f64) -> Self {
        let theta = degrees * PI / 180.0;
        let u = theta.cos();
        let w = theta.sin();

        Self {
            m: [
                [
                    LUMA_R + 0.701 * u + 0.168 * w,
                    LUMA_G - 0.587 * u + 0.330 * w,
                    LUMA_B - 0.114 * u - 0.497 * w,
                ],
                [
                    LUMA_R - 0.299 * u - 0.328 * w,
                    LUMA_G + 0.413 * u + 0.035 * w,
                    LUMA_B - 0.114 * u + 0.292 * w,
                ],
                [
                    LUMA_R - 0.300 * u + 1.250 * w,
                    LUMA_G - 0.588 * u - 1.050 * w,
                    LUMA_B + 0.886 * u - 0.203 * w,
                ],
            ],
        }
    }

    /// The raw coefficients.
    pub fn rows(&self) -> [[f64; 3]; 3] {
        self.m
    }

    /// Apply the matrix to an (R, G, B) triple. The result is not clamped.
    #[inline]
    pub fn apply(&self, r: f64, g: f64, b: f64) -> (f64, f64, f64) {
        let [red, green, blue] = &self.m;
        (
            red[0] * r + red[1] * g + red[2] * b,
            green[0] * r + green[1] * g + green[2] * b,
            blue[0] * r + blue[1] * g + blue[2] * b,
        )
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Clamp a channel value to [0, 255] and round to the nearest integer.
#[inline]
pub fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

/// Rotate the hue of every pixel, returning a new buffer.
///
/// The output has the same dimensions as the input. Alpha is copied
/// unchanged. A zero-area input yields a zero-area output.
pub fn rotate_hue(image: &PixelBuffer, angle: HueAngle) -> PixelBuffer {
    rotate_hue_owned(image.clone(), angle)
}

/// Rotate the hue of an owned buffer, reusing its allocation.
pub fn rotate_hue_owned(mut image: PixelBuffer, angle: HueAngle) -> PixelBuffer {
    rotate_hue_in_place(&mut image.pixels, angle);
    image
}

/// Rotate the hue of raw RGBA data in place.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `angle` - Rotation angle
///
/// Trailing bytes that do not form a whole pixel are left untouched.
pub fn rotate_hue_in_place(pixels: &mut [u8], angle: HueAngle) {
    let matrix = RotationMatrix::from_angle(angle);

    for chunk in pixels.chunks_exact_mut(CHANNELS) {
        let (r, g, b) = matrix.apply(chunk[0] as f64, chunk[1] as f64, chunk[2] as f64);
        chunk[0] = clamp_channel(r);
        chunk[1] = clamp_channel(g);
        chunk[2] = clamp_channel(b);
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
