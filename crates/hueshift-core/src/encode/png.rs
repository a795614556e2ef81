//! PNG encoding of RGBA8 pixel data using the `image` crate's PNG encoder.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::buffer::{PixelBuffer, CHANNELS};

/// The 8-byte signature every PNG stream starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if encoding fails.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = width as usize * height as usize * CHANNELS;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

/// Encode a [`PixelBuffer`] to PNG bytes.
pub fn encode_png_image(image: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    encode_png(&image.pixels, image.width, image.height)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=32, 1u32..=32)
    }

    proptest! {
        /// Property: Encoding always produces a PNG when given valid input.
        #[test]
        fn prop_valid_input_produces_png((width, height) in dimensions_strategy()) {
            let pixels = vec![200u8; width as usize * height as usize * 4];
            let result = encode_png(&pixels, width, height);
            prop_assert!(result.is_ok());
            prop_assert_eq!(&result.unwrap()[0..8], &PNG_SIGNATURE);
        }

        /// Property: Same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output((width, height) in (1u32..=16, 1u32..=16)) {
            let pixels: Vec<u8> = (0..width as usize * height as usize * 4)
                .map(|i| ((i * 37) % 256) as u8)
                .collect();
            let a = encode_png(&pixels, width, height).unwrap();
            let b = encode_png(&pixels, width, height).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Property: Mismatched pixel data length always returns an error.
        #[test]
        fn prop_invalid_pixel_length_returns_error(
            (width, height) in dimensions_strategy(),
            delta in 1usize..=8,
            longer in any::<bool>(),
        ) {
            let expected = width as usize * height as usize * 4;
            let actual = if longer { expected + delta } else { expected - delta.min(expected) };
            prop_assume!(actual != expected);

            let pixels = vec![0u8; actual];
            prop_assert!(
                matches!(
                    encode_png(&pixels, width, height),
                    Err(EncodeError::InvalidPixelData { .. })
                ),
                "Mismatched pixel data should return InvalidPixelData"
            );
        }
    }
}
