//! Fixture generation driver.
//!
//! Takes the full parameter matrix from [`matrix`](crate::matrix) and runs
//! every job through the fetch → transform → persist pipeline.
//!
//! ## Output Structure
//!
//! ```text
//! output/
//! ├── manifest.json                  # All generated fixtures with parameters
//! ├── Landscape-1-noauto-full-0.jpg
//! ├── Landscape-1-noauto-full-45.jpg
//! ├── ...
//! └── Portrait-8-auto-crop-45.jpg
//! ```
//!
//! ## Concurrency
//!
//! Jobs are independent: each owns its response body and output buffer, and
//! no two jobs share an output path. All jobs are spawned as tokio tasks up
//! front; a semaphore bounds how many are in flight at once so the remote
//! host and local file descriptors are not overwhelmed. The driver always
//! waits for every task and collects every outcome — one failed job never
//! cancels its siblings, and files already written stay written.

use crate::fetch::{DEFAULT_BASE_URL, FetchError, Fetcher};
use crate::imaging::{
    BackendError, ImageBackend, Quality, RustBackend, apply_transform, plan_transform,
    planned_dimensions,
};
use crate::matrix::{TransformJob, enumerate_jobs};
use crate::output;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Base pixel dimensions of the landscape reference frame.
pub const BASE_DIMENSIONS: (u32, u32) = (1800, 1200);

/// Default bound on concurrently running jobs.
pub const DEFAULT_WORKERS: usize = 16;

/// Name of the run manifest written next to the fixtures.
pub const MANIFEST_NAME: &str = "manifest.json";

/// Fatal driver errors — these abort the run before or after the jobs, never
/// in place of an individual job's outcome.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One job's failure. Carries no job context of its own — the driver pairs
/// it with the [`TransformJob`] in a [`JobFailure`].
#[derive(Error, Debug)]
pub enum JobError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Transform(#[from] BackendError),
    #[error("write failed: {0}")]
    Write(std::io::Error),
}

/// Immutable run configuration.
///
/// The parameter matrix itself is fixed; these knobs cover where fixtures
/// go, where reference images come from, and how hard to push. Tests
/// substitute a stub server URL and smaller base dimensions.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    pub base_url: String,
    pub output_dir: PathBuf,
    pub base_dims: (u32, u32),
    pub quality: Quality,
    pub workers: usize,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("output"),
            base_dims: BASE_DIMENSIONS,
            quality: Quality::default(),
            workers: DEFAULT_WORKERS,
        }
    }
}

/// One successfully generated fixture, as recorded in the run manifest.
#[derive(Debug, Clone, Serialize)]
pub struct FixtureEntry {
    pub file: String,
    #[serde(flatten)]
    pub job: TransformJob,
    pub width: u32,
    pub height: u32,
    pub bytes: u64,
}

/// A failed job paired with its parameters.
#[derive(Debug)]
pub struct JobFailure {
    pub job: TransformJob,
    pub error: JobError,
}

/// Everything a run produced: all outcomes, not just the first failure.
#[derive(Debug)]
pub struct RunSummary {
    pub fixtures: Vec<FixtureEntry>,
    pub failures: Vec<JobFailure>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Create the output directory and any missing ancestors.
///
/// Idempotent: an existing directory is success; any other failure (e.g.
/// permission denied, path occupied by a file) aborts before jobs start.
pub fn ensure_output_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}

/// Generate the full fixture matrix with the production image backend.
pub async fn run(config: &FixtureConfig) -> Result<RunSummary, ProcessError> {
    run_with_backend(Arc::new(RustBackend::new()), config).await
}

/// Generate fixtures using a specific backend (allows testing with a mock).
pub async fn run_with_backend<B>(
    backend: Arc<B>,
    config: &FixtureConfig,
) -> Result<RunSummary, ProcessError>
where
    B: ImageBackend + 'static,
{
    ensure_output_dir(&config.output_dir)?;

    let fetcher = Fetcher::new();
    let semaphore = Arc::new(Semaphore::new(config.workers.max(1)));
    let mut tasks = JoinSet::new();

    for (index, job) in enumerate_jobs().into_iter().enumerate() {
        output::print_job(index + 1, &job, &job.source_url(&config.base_url));

        let semaphore = Arc::clone(&semaphore);
        let fetcher = fetcher.clone();
        let backend = Arc::clone(&backend);
        let config = config.clone();
        tasks.spawn(async move {
            let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
            let result = execute_job(fetcher, backend, config, job).await;
            (job, result)
        });
    }

    let mut fixtures = Vec::new();
    let mut failures = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (job, result) = joined.expect("job task panicked");
        match result {
            Ok(entry) => fixtures.push(entry),
            Err(error) => failures.push(JobFailure { job, error }),
        }
    }

    // Completion order is nondeterministic; sort so manifest and report are stable.
    fixtures.sort_by(|a, b| a.file.cmp(&b.file));
    failures.sort_by_key(|f| f.job.file_name());

    let manifest = serde_json::to_string_pretty(&fixtures)?;
    std::fs::write(config.output_dir.join(MANIFEST_NAME), manifest)?;

    Ok(RunSummary { fixtures, failures })
}

/// One job's pipeline: fetch → transform → persist.
async fn execute_job<B: ImageBackend + 'static>(
    fetcher: Fetcher,
    backend: Arc<B>,
    config: FixtureConfig,
    job: TransformJob,
) -> Result<FixtureEntry, JobError> {
    let url = job.source_url(&config.base_url);
    let bytes = fetcher.fetch(&url).await?;

    let plan = plan_transform(&job, config.base_dims, config.quality);
    let encoded =
        tokio::task::spawn_blocking(move || apply_transform(backend.as_ref(), &bytes, &plan))
            .await
            .expect("transform task panicked")?;

    let file = job.file_name();
    tokio::fs::write(config.output_dir.join(&file), &encoded)
        .await
        .map_err(JobError::Write)?;

    let (width, height) = planned_dimensions(&plan);
    Ok(FixtureEntry {
        file,
        job,
        width,
        height,
        bytes: encoded.len() as u64,
    })
}
