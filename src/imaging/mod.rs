//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode + auto-orient** | `image` crate (`into_decoder` + `Orientation`) |
//! | **Extract** | `DynamicImage::crop_imm` |
//! | **Rotate** | bilinear resampling onto an expanded canvas |
//! | **Encode → JPEG** | `image::codecs::jpeg::JpegEncoder` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for fixture geometry (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
pub mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use operations::{apply_transform, plan_transform, planned_dimensions};
pub use params::{Quality, Region, TransformPlan};
pub use rust_backend::RustBackend;
