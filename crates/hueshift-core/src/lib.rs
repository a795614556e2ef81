//! Hueshift Core - hue rotation engine
//!
//! This crate provides the pixel-level pieces of hueshift: the RGBA pixel
//! buffer, the hue rotation matrix and transform, and the PNG/JPEG codecs
//! that sit on either side of it. Everything here is synchronous and free
//! of shared state, so it can be called from any number of threads at once.

pub mod buffer;
pub mod decode;
pub mod encode;
pub mod hue;
pub mod luma;

use thiserror::Error;

pub use buffer::PixelBuffer;
pub use decode::{decode_image, decode_image_with, DecodeError, DecodeOptions};
pub use encode::{encode_png, encode_png_image, EncodeError};
pub use hue::{
    rotate_hue, rotate_hue_in_place, rotate_hue_owned, HueAngle, HueError, RotationMatrix,
};

/// Failure of the bytes-in, bytes-out pipeline.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The source bytes could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The rotated buffer could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Decode `bytes`, rotate their hue by `angle`, and encode the result as PNG.
pub fn shift_hue_to_png(
    bytes: &[u8],
    angle: HueAngle,
    options: DecodeOptions,
) -> Result<Vec<u8>, ProcessError> {
    let image = decode_image_with(bytes, options)?;
    let rotated = rotate_hue_owned(image, angle);
    Ok(encode_png_image(&rotated)?)
}
