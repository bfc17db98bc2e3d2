//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the four operations every backend must
//! support: decode (with optional auto-orientation), extract, rotate, and
//! encode.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, built on
//! the `image` crate. Everything is statically linked into the binary.

use super::params::{Quality, Region};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("extract region out of bounds: {0}")]
    Region(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Trait for image processing backends.
///
/// Every backend must implement all four operations — decode, extract,
/// rotate, and encode — so the rest of the codebase is backend-agnostic.
/// `Image` is whatever in-memory representation the backend works on;
/// operations pass it along by value, so each step owns its canvas.
pub trait ImageBackend: Send + Sync {
    type Image: Send + 'static;

    /// Decode raw bytes. When `auto_orient` is set, apply the embedded EXIF
    /// orientation so the result is upright before any geometry runs.
    fn decode(&self, bytes: &[u8], auto_orient: bool) -> Result<Self::Image, BackendError>;

    /// Extract a rectangular region. The region must lie within the canvas.
    fn extract(&self, img: Self::Image, region: &Region) -> Result<Self::Image, BackendError>;

    /// Rotate clockwise by `degrees`, expanding the canvas to hold the
    /// rotated bounds. Multiples of 360 (including 0) are a no-op.
    fn rotate(&self, img: Self::Image, degrees: f32) -> Result<Self::Image, BackendError>;

    /// Serialize to JPEG bytes.
    fn encode(&self, img: &Self::Image, quality: Quality) -> Result<Vec<u8>, BackendError>;
}
