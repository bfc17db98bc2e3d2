//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which derives a transform plan from job parameters) and the
//! [`backend`](super::backend) (which does the actual pixel work). This
//! separation allows swapping backends (e.g. for testing with a mock)
//! without changing planning logic.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100, default 80). Clamped on construction.
//! - [`Region`] — Rectangular extraction area in pixel coordinates.
//! - [`TransformPlan`] — Full specification of one fixture transform: orient, extract, rotate, encode.

/// Quality setting for lossy JPEG encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(80)
    }
}

/// Rectangular extraction area, in pixels from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Full-canvas region at the origin.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            top: 0,
            width,
            height,
        }
    }
}

/// Everything the backend needs to turn fetched bytes into a fixture.
///
/// Steps run in a fixed order: decode (applying the embedded orientation when
/// `auto_orient` is set), extract `region`, rotate by `degrees` clockwise,
/// encode at `quality`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformPlan {
    pub auto_orient: bool,
    pub region: Region,
    /// Clockwise rotation in whole degrees; 0 is a no-op.
    pub degrees: u32,
    pub quality: Quality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_80() {
        assert_eq!(Quality::default().value(), 80);
    }

    #[test]
    fn full_region_starts_at_origin() {
        let r = Region::full(1800, 1200);
        assert_eq!(r.left, 0);
        assert_eq!(r.top, 0);
        assert_eq!(r.width, 1800);
        assert_eq!(r.height, 1200);
    }
}
