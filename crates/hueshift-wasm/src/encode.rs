//! Image encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png_from_image } from '@hueshift/wasm';
//!
//! const png = encode_png_from_image(rotated);
//! const blob = new Blob([png], { type: 'image/png' });
//! ```

use crate::types::JsPixelBuffer;
use hueshift_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGBA pixel data to PNG bytes.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 4
/// - Width or height is zero
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsPixelBuffer to PNG bytes.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsPixelBuffer) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(image.as_bytes(), image.width(), image.height())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_png_invalid_dimensions() {
        assert!(encode_png(&[], 0, 10).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_png_invalid_pixel_data() {
        let pixels = vec![0u8; 5 * 5 * 3];
        assert!(encode_png(&pixels, 5, 5).is_err());
    }
}
