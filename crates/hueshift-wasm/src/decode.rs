//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, decode_image_with_options } from '@hueshift/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const upright = decode_image_with_options(bytes, { apply_orientation: true });
//! ```

use crate::types::JsPixelBuffer;
use hueshift_core::decode::{self, DecodeOptions};
use wasm_bindgen::prelude::*;

/// Decode a PNG or JPEG image into RGBA pixels. EXIF orientation is ignored.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    decode::decode_image(bytes)
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode with options given as a plain object, e.g. `{ apply_orientation: true }`.
///
/// `undefined` or `null` selects the defaults.
#[wasm_bindgen]
pub fn decode_image_with_options(bytes: &[u8], options: JsValue) -> Result<JsPixelBuffer, JsValue> {
    let options: DecodeOptions = if options.is_undefined() || options.is_null() {
        DecodeOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    decode::decode_image_with(bytes, options)
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for decode bindings.
///
/// Error paths construct `JsValue`s and only run on wasm32 targets; the
/// underlying decoding is covered in `hueshift_core::decode`.
#[cfg(test)]
mod tests {
    use hueshift_core::{encode_png_image, PixelBuffer};

    #[test]
    fn test_decode_image_success() {
        let png = encode_png_image(&PixelBuffer::filled(3, 2, [9, 8, 7, 6])).unwrap();
        let img = super::decode_image(&png).ok().unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(&img.pixels()[0..4], &[9, 8, 7, 6]);
    }
}
