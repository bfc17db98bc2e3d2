//! CLI output formatting for the fixture run.
//!
//! # Information-First Display
//!
//! Each job leads with its semantic identity — positional index and the
//! output file name, which encodes the full parameter tuple — with the
//! source URL as an indented `Source:` context line. The run report lists
//! every failure (not just the first observed) and closes with an aggregate
//! line.
//!
//! ```text
//! 001 Landscape-1-noauto-full-0.jpg
//!     Source: https://…/Landscape_1.jpg
//! ...
//!
//! Failures
//!     Portrait-3-noauto-full-0.jpg: failed to get 'https://…/Portrait_3.jpg' (404)
//!
//! Generated 127 fixtures, 1 failures
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::matrix::TransformJob;
use crate::process::RunSummary;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format one job as it is launched: index + fixture name, then the source.
pub fn format_job(index: usize, job: &TransformJob, url: &str) -> Vec<String> {
    vec![
        format!("{} {}", format_index(index), job.file_name()),
        format!("    Source: {}", url),
    ]
}

/// Print a job launch line to stdout.
pub fn print_job(index: usize, job: &TransformJob, url: &str) {
    for line in format_job(index, job, url) {
        println!("{}", line);
    }
}

/// Format the dry-run listing of the whole matrix.
pub fn format_plan(jobs: &[TransformJob], base_url: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, job) in jobs.iter().enumerate() {
        lines.extend(format_job(i + 1, job, &job.source_url(base_url)));
    }
    lines.push(String::new());
    lines.push(format!("{} fixtures planned", jobs.len()));
    lines
}

/// Print the dry-run listing to stdout.
pub fn print_plan(jobs: &[TransformJob], base_url: &str) {
    for line in format_plan(jobs, base_url) {
        println!("{}", line);
    }
}

/// Format the end-of-run report: failures first (if any), then the
/// aggregate line.
pub fn format_run_summary(summary: &RunSummary) -> Vec<String> {
    let mut lines = Vec::new();

    if !summary.failures.is_empty() {
        lines.push(String::new());
        lines.push("Failures".to_string());
        for failure in &summary.failures {
            lines.push(format!(
                "    {}: {}",
                failure.job.file_name(),
                failure.error
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} fixtures, {} failures",
        summary.fixtures.len(),
        summary.failures.len()
    ));
    lines
}

/// Print the end-of-run report to stdout.
pub fn print_run_summary(summary: &RunSummary) {
    for line in format_run_summary(summary) {
        println!("{}", line);
    }
}
