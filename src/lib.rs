//! # exif-fixtures
//!
//! Generates a matrix of test fixtures for image-orientation handling.
//! Reference JPEGs carrying every EXIF orientation tag (1–8) are downloaded,
//! run through combinations of auto-orientation, cropping, and rotation, and
//! written out under names that encode the parameters — 128 fixtures per run.
//!
//! # Architecture: One Pipeline, Many Independent Jobs
//!
//! Each fixture is one job: a unique parameter tuple from the cross product
//!
//! ```text
//! {Landscape, Portrait} × {tag 1..8} × {crop} × {rotate} × {auto-orient}
//! ```
//!
//! and every job runs the same three-step pipeline:
//!
//! ```text
//! 1. Fetch      GET {base_url}/{frame}_{tag}.jpg       (strictly HTTP 200)
//! 2. Transform  auto-orient? → extract → rotate → JPEG (image crate)
//! 3. Persist    output/{frame}-{tag}-{auto}-{crop}-{deg}.jpg
//! ```
//!
//! Jobs share nothing: each owns its response body, its canvas, and its
//! output path, so they run concurrently under a semaphore-bounded pool and
//! fail independently. The driver waits for all of them and reports every
//! outcome, then writes a `manifest.json` describing the generated set.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`matrix`] | Parameter tuples — enumeration, output naming, source URLs |
//! | [`fetch`] | Single-attempt HTTP GET of reference images via reqwest |
//! | [`imaging`] | Backend trait + pure geometry + the `image`-crate backend |
//! | [`process`] | The driver — bounded concurrent execution, manifest, outcomes |
//! | [`output`] | CLI reporting — pure `format_*` functions + print wrappers |
//!
//! # Design Decisions
//!
//! ## Bounded Worker Pool
//!
//! All 128 jobs are spawned up front, but a semaphore caps how many hold a
//! connection and a decode buffer at once (default 16). The remote host sees
//! a polite number of simultaneous requests and local file descriptors stay
//! bounded, while jobs remain fully independent.
//!
//! ## Collect All Outcomes
//!
//! A failed fetch or decode marks that job failed and nothing else. The run
//! report lists every failure; the exit status is non-zero if any job
//! failed. Partial output is left in place — fixtures are idempotent to
//! regenerate, and a partial set is still useful while a missing reference
//! image is investigated.
//!
//! ## Backend Behind a Trait
//!
//! The four pixel operations (decode with optional auto-orientation,
//! extract, rotate, encode) sit behind [`imaging::ImageBackend`]. The
//! production backend is pure Rust on the `image` crate; tests drive the
//! planner and driver with a recording mock instead of decoding real pixels.

pub mod fetch;
pub mod imaging;
pub mod matrix;
pub mod output;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
