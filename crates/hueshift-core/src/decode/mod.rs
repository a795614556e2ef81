//! Image decoding for hueshift.
//!
//! Turns encoded bytes (PNG or JPEG) into an RGBA8 [`PixelBuffer`](crate::PixelBuffer).
//! Sources with more than 8 bits per channel are rescaled down to 8 bits,
//! alpha included. EXIF orientation is ignored unless requested through
//! [`DecodeOptions`].

mod reader;
mod types;

pub use reader::{decode_image, decode_image_with};
pub use types::{DecodeError, DecodeOptions, Orientation};
