//! Image encoding for hueshift.
//!
//! Processed buffers leave the service as PNG, which keeps the alpha
//! channel and is lossless, so the rotated colors arrive exactly as computed.

mod png;

pub use png::{encode_png, encode_png_image, EncodeError, PNG_SIGNATURE};
