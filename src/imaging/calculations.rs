//! Pure calculation functions for fixture geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::Region;
use crate::matrix::Frame;

/// Calculate the target pixel dimensions for a job.
///
/// Base dimensions are landscape (e.g. 1800×1200); Portrait frames swap
/// them. When auto-orientation is NOT requested and the orientation tag is
/// greater than 4 (tags 5-8, the 90°-rotated variants), the raw pixel grid's
/// physical aspect differs from the nominal frame aspect, so the dimensions
/// swap once more to match what is actually decoded.
pub fn target_dimensions(
    frame: Frame,
    orientation: u8,
    auto_orient: bool,
    base: (u32, u32),
) -> (u32, u32) {
    let mut dims = base;
    if frame == Frame::Portrait {
        dims = (dims.1, dims.0);
    }
    if !auto_orient && orientation > 4 {
        dims = (dims.1, dims.0);
    }
    dims
}

/// Calculate the extraction region for the given target dimensions.
///
/// Cropping takes a one-third-sized rectangle starting one third in from the
/// top-left; otherwise the full target rectangle at the origin.
pub fn extraction_region(dims: (u32, u32), crop: bool) -> Region {
    let (width, height) = dims;
    if crop {
        Region {
            left: width / 3,
            top: height / 3,
            width: width / 3,
            height: height / 3,
        }
    } else {
        Region::full(width, height)
    }
}

/// Calculate the canvas size needed to hold an image rotated by `degrees`
/// without clipping: the axis-aligned bounding box of the rotated rectangle.
pub fn rotated_canvas(dims: (u32, u32), degrees: f32) -> (u32, u32) {
    if degrees.rem_euclid(360.0) == 0.0 {
        return dims;
    }
    let radians = degrees.to_radians();
    let (sin, cos) = (radians.sin().abs(), radians.cos().abs());
    let (w, h) = (dims.0 as f32, dims.1 as f32);
    (
        (w * cos + h * sin).round() as u32,
        (w * sin + h * cos).round() as u32,
    )
}
