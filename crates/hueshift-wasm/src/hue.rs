//! Hue rotation WASM bindings.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! import { decode_image, rotate_hue, shift_hue_to_png } from '@hueshift/wasm';
//!
//! const image = decode_image(bytes);
//! const rotated = rotate_hue(image, 120);
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(rotated.pixels()), rotated.width), 0, 0);
//!
//! // Or bytes in, PNG bytes out
//! const png = shift_hue_to_png(bytes, 120);
//! ```

use crate::types::JsPixelBuffer;
use hueshift_core::{hue, DecodeOptions, HueAngle, HueError, RotationMatrix};
use wasm_bindgen::prelude::*;

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

pub(crate) fn rotate_checked(image: &JsPixelBuffer, degrees: f64) -> Result<JsPixelBuffer, HueError> {
    let angle = HueAngle::new(degrees)?;
    Ok(JsPixelBuffer::from_buffer(hue::rotate_hue_owned(
        image.to_buffer(),
        angle,
    )))
}

/// Rotate the hue of every pixel by `degrees` (0-360), returning a new image.
///
/// Alpha is left as is. The source image is not modified.
#[wasm_bindgen]
pub fn rotate_hue(image: &JsPixelBuffer, degrees: f64) -> Result<JsPixelBuffer, JsValue> {
    rotate_checked(image, degrees).map_err(to_js_error)
}

/// Rotate the hue of raw RGBA data in place (e.g. `ImageData.data`).
#[wasm_bindgen]
pub fn rotate_hue_in_place(pixels: &mut [u8], degrees: f64) -> Result<(), JsValue> {
    let angle = HueAngle::new(degrees).map_err(to_js_error)?;
    hue::rotate_hue_in_place(pixels, angle);
    Ok(())
}

/// The 3x3 rotation coefficients for `degrees`, as nested arrays (row = output channel).
///
/// Useful for feeding the same transform to a WebGL shader or an SVG `feColorMatrix`.
#[wasm_bindgen]
pub fn hue_rotation_matrix(degrees: f64) -> Result<JsValue, JsValue> {
    let angle = HueAngle::new(degrees).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&RotationMatrix::from_angle(angle).rows()).map_err(to_js_error)
}

/// Decode PNG/JPEG bytes, rotate their hue and encode the result as PNG.
#[wasm_bindgen]
pub fn shift_hue_to_png(bytes: &[u8], degrees: f64) -> Result<Vec<u8>, JsValue> {
    let angle = HueAngle::new(degrees).map_err(to_js_error)?;
    hueshift_core::shift_hue_to_png(bytes, angle, DecodeOptions::default()).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_checked_red() {
        let image = JsPixelBuffer::new(1, 1, vec![255, 0, 0, 255]);
        let rotated = rotate_checked(&image, 120.0).unwrap();
        assert_eq!(rotated.pixels(), vec![24, 42, 255, 255]);
    }

    #[test]
    fn test_rotate_checked_does_not_modify_original() {
        let pixels = vec![10, 200, 30, 77];
        let image = JsPixelBuffer::new(1, 1, pixels.clone());
        let _ = rotate_checked(&image, 45.0).unwrap();
        assert_eq!(image.pixels(), pixels);
    }

    #[test]
    fn test_rotate_checked_rejects_out_of_range() {
        let image = JsPixelBuffer::new(1, 1, vec![0, 0, 0, 0]);
        assert!(matches!(
            rotate_checked(&image, 361.0),
            Err(HueError::OutOfRange(_))
        ));
        assert!(rotate_checked(&image, -1.0).is_err());
    }

    #[test]
    fn test_rotate_hue_in_place_success() {
        let mut pixels = vec![255, 0, 0, 255, 0, 0, 0, 0];
        assert!(super::rotate_hue_in_place(&mut pixels, 120.0).is_ok());
        assert_eq!(pixels, vec![24, 42, 255, 255, 0, 0, 0, 0]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_rotate_hue_invalid_angle() {
        let image = JsPixelBuffer::new(1, 1, vec![0, 0, 0, 0]);
        assert!(rotate_hue(&image, 400.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_hue_rotation_matrix_shape() {
        let value = hue_rotation_matrix(90.0).unwrap();
        let rows: [[f64; 3]; 3] = serde_wasm_bindgen::from_value(value).unwrap();
        assert!((rows[0][0] - 0.467).abs() < 1e-9);
    }

    #[wasm_bindgen_test]
    fn test_shift_hue_to_png_rejects_garbage() {
        assert!(shift_hue_to_png(b"garbage", 10.0).is_err());
    }
}
