//! Hueshift WASM - WebAssembly bindings for hueshift
//!
//! This crate exposes the hueshift-core hue rotation engine to
//! JavaScript/TypeScript, so the same transform the server applies can run
//! in the browser.
//!
//! # Module Structure
//!
//! - `hue` - Hue rotation of images, raw RGBA data and whole files
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - PNG/JPEG decoding bindings
//! - `encode` - PNG encoding bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, rotate_hue } from '@hueshift/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const rotated = rotate_hue(decode_image(bytes), 90);
//! console.log(`Rotated ${rotated.width}x${rotated.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod hue;
mod types;

// Re-export public types
pub use decode::{decode_image, decode_image_with_options};
pub use encode::{encode_png, encode_png_from_image};
pub use hue::{hue_rotation_matrix, rotate_hue, rotate_hue_in_place, shift_hue_to_png};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
