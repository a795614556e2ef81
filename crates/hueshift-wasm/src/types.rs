//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core hueshift types,
//! handling the conversion between Rust and JavaScript data representations.

use hueshift_core::PixelBuffer;
use wasm_bindgen::prelude::*;

/// An RGBA image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. The layout matches `ImageData.data`, so the
/// copy can be handed straight to a canvas.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a new JsPixelBuffer from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsPixelBuffer {
        JsPixelBuffer {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelBuffer {
    /// Wrap a core PixelBuffer without copying.
    pub(crate) fn from_buffer(buf: PixelBuffer) -> Self {
        Self {
            width: buf.width,
            height: buf.height,
            pixels: buf.pixels,
        }
    }

    /// Convert back to a core PixelBuffer (clones the pixel data).
    pub(crate) fn to_buffer(&self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_pixel_buffer_creation() {
        let img = JsPixelBuffer::new(100, 50, vec![0u8; 100 * 50 * 4]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_js_pixel_buffer_pixels() {
        let pixels = vec![255u8, 128, 64, 32, 16, 8, 4, 2];
        let img = JsPixelBuffer::new(2, 1, pixels.clone());
        assert_eq!(img.pixels(), pixels);
        assert_eq!(img.as_bytes(), pixels.as_slice());
    }

    #[test]
    fn test_buffer_conversions() {
        let core = PixelBuffer::filled(20, 10, [1, 2, 3, 4]);
        let js_img = JsPixelBuffer::from_buffer(core.clone());
        assert_eq!(js_img.width(), 20);
        assert_eq!(js_img.height(), 10);
        assert_eq!(js_img.to_buffer(), core);
    }
}
