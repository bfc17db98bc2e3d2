//! The fixture parameter matrix.
//!
//! Every fixture is described by a [`TransformJob`]: which reference frame it
//! starts from, which EXIF orientation tag that frame carries, and the three
//! transform switches (crop, rotate, auto-orient). The full matrix is the
//! cross product
//!
//! ```text
//! {Landscape, Portrait} × {1..8} × {crop} × {rotate} × {auto-orient} = 128 jobs
//! ```
//!
//! Jobs are independent of each other; each one derives its own source URL
//! and output file name from its parameters, so no two jobs ever touch the
//! same file.

use serde::Serialize;
use std::fmt;

/// File extension shared by the reference images and the generated fixtures.
pub const SOURCE_EXT: &str = "jpg";

/// EXIF orientation tags under test. Tags 5-8 encode a 90°-rotated pixel grid.
pub const ORIENTATION_TAGS: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Nominal display orientation of a reference frame.
///
/// This is the orientation the image is *meant* to be viewed in, independent
/// of how the raw pixel grid is stored (which the EXIF tag describes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Frame {
    Landscape,
    Portrait,
}

impl Frame {
    pub const ALL: [Frame; 2] = [Frame::Landscape, Frame::Portrait];

    pub fn as_str(self) -> &'static str {
        match self {
            Frame::Landscape => "Landscape",
            Frame::Portrait => "Portrait",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of work: a unique parameter tuple from the fixture matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TransformJob {
    pub frame: Frame,
    /// EXIF orientation tag of the reference image (1-8).
    pub orientation: u8,
    pub crop: bool,
    pub rotate: bool,
    pub auto_orient: bool,
}

impl TransformJob {
    /// Output file name encoding the full parameter tuple.
    ///
    /// `Landscape-1-noauto-full-0.jpg`, `Portrait-6-auto-crop-45.jpg`, ...
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}.{}",
            self.frame,
            self.orientation,
            if self.auto_orient { "auto" } else { "noauto" },
            if self.crop { "crop" } else { "full" },
            if self.rotate { "45" } else { "0" },
            SOURCE_EXT,
        )
    }

    /// URL of the reference image this job starts from.
    pub fn source_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}_{}.{}",
            base_url.trim_end_matches('/'),
            self.frame,
            self.orientation,
            SOURCE_EXT,
        )
    }
}

impl fmt::Display for TransformJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// Enumerate the full matrix in deterministic order.
///
/// Frame varies slowest, then orientation, crop, rotate, with auto-orient
/// innermost. Output order is stable so runs are comparable.
pub fn enumerate_jobs() -> Vec<TransformJob> {
    let mut jobs = Vec::with_capacity(128);
    for frame in Frame::ALL {
        for orientation in ORIENTATION_TAGS {
            for crop in [false, true] {
                for rotate in [false, true] {
                    for auto_orient in [false, true] {
                        jobs.push(TransformJob {
                            frame,
                            orientation,
                            crop,
                            rotate,
                            auto_orient,
                        });
                    }
                }
            }
        }
    }
    jobs
}
