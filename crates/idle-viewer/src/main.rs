// File: crates/idle-viewer/src/main.rs
// Summary: CLI host: fetches player data once and writes the chart container to disk.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use idle_viewer::config::Args;
use idle_viewer::{logging, FileContainer, HttpLoader, Outcome, Viewer};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    logging::init();
    let args = Args::parse();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let mut container = FileContainer::open(&args.out_dir)?;
    let loader = HttpLoader::new(&args.chart.base_url)?;
    let viewer = Viewer::new(loader, args.chart.render_options());

    match viewer.run(&mut container).await {
        Outcome::Rendered { players, series } => {
            println!("Wrote {} ({players} players, {series} series)", container.path().display());
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Failed(reason) => {
            eprintln!("idle-viewer: no chart rendered: {reason}");
            Ok(ExitCode::FAILURE)
        }
    }
}
