use clap::{Parser, Subcommand};
use exif_fixtures::imaging::Quality;
use exif_fixtures::process::{DEFAULT_WORKERS, FixtureConfig};
use exif_fixtures::{fetch, matrix, output, process};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exif-fixtures")]
#[command(about = "Generate EXIF orientation test fixtures")]
#[command(long_about = "\
Generate EXIF orientation test fixtures

Downloads the reference images from recurser/exif-orientation-examples —
one Landscape and one Portrait frame for each EXIF orientation tag 1-8 —
and writes every combination of auto-orientation, centre-third crop, and
45° rotation as a JPEG fixture:

  output/
  ├── manifest.json                   # All fixtures with their parameters
  ├── Landscape-1-noauto-full-0.jpg   # {frame}-{tag}-{auto}-{crop}-{deg}.jpg
  ├── ...
  └── Portrait-8-auto-crop-45.jpg     # 128 fixtures in total

The matrix is fixed; flags only control where fixtures go, where reference
images come from, and how many jobs run at once. Run 'exif-fixtures plan'
to list the matrix without fetching anything.")]
#[command(version)]
struct Cli {
    /// Directory fixtures are written to
    #[arg(long, default_value = "output", global = true)]
    output: PathBuf,

    /// Base URL the reference images are fetched from
    #[arg(long, default_value = fetch::DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Maximum number of jobs in flight at once
    #[arg(long, default_value_t = DEFAULT_WORKERS, global = true)]
    workers: usize,

    /// JPEG quality of the generated fixtures (1-100)
    #[arg(long, default_value_t = 80, global = true)]
    quality: u32,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the reference images and write the full fixture matrix
    Generate,
    /// List the fixture matrix without touching the network
    Plan,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => {
            let config = FixtureConfig {
                base_url: cli.base_url,
                output_dir: cli.output,
                quality: Quality::new(cli.quality),
                workers: cli.workers,
                ..Default::default()
            };
            let summary = process::run(&config).await?;
            output::print_run_summary(&summary);
            if !summary.is_success() {
                std::process::exit(1);
            }
        }
        Command::Plan => {
            let jobs = matrix::enumerate_jobs();
            output::print_plan(&jobs, &cli.base_url);
        }
    }

    Ok(())
}
