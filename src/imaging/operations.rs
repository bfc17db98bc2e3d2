//! High-level image operations.
//!
//! These functions combine calculations with backend execution: a
//! [`TransformPlan`] is derived from job parameters, then replayed against
//! any [`ImageBackend`].

use super::backend::{BackendError, ImageBackend};
use super::calculations::{extraction_region, rotated_canvas, target_dimensions};
use super::params::{Quality, TransformPlan};
use crate::matrix::TransformJob;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Derive the transform plan for a job.
///
/// Pure — all geometry (target dimensions, extraction region, rotation) is
/// fixed here before any pixel work happens.
pub fn plan_transform(job: &TransformJob, base_dims: (u32, u32), quality: Quality) -> TransformPlan {
    let target = target_dimensions(job.frame, job.orientation, job.auto_orient, base_dims);
    TransformPlan {
        auto_orient: job.auto_orient,
        region: extraction_region(target, job.crop),
        degrees: if job.rotate { 45 } else { 0 },
        quality,
    }
}

/// Final pixel dimensions a plan produces, without executing it.
pub fn planned_dimensions(plan: &TransformPlan) -> (u32, u32) {
    rotated_canvas((plan.region.width, plan.region.height), plan.degrees as f32)
}

/// Run a plan against a backend: decode → extract → rotate → encode.
pub fn apply_transform<B: ImageBackend>(
    backend: &B,
    bytes: &[u8],
    plan: &TransformPlan,
) -> Result<Vec<u8>> {
    let img = backend.decode(bytes, plan.auto_orient)?;
    let img = backend.extract(img, &plan.region)?;
    let img = backend.rotate(img, plan.degrees as f32)?;
    backend.encode(&img, plan.quality)
}
