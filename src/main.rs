mod cli;

use std::fs::File;
use std::io;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::warn;

use cli::Cli;
use venue_extrude::export::write_scene;
use venue_extrude::{import_file, Scene};

fn main() -> anyhow::Result<()> {
    // Default: WARN for everything, INFO for venue_extrude.
    // Override with RUST_LOG. Logs go to stderr so stdout stays clean.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("venue_extrude=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.import_options();
    if !(options.unit_divisor.is_finite() && options.unit_divisor > 0.0) {
        bail!("--unit-divisor must be a positive number");
    }

    let mut scene = Scene::new();
    let report = import_file(&cli.input, &mut scene, options)
        .with_context(|| format!("failed to import {}", cli.input.display()))?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_scene(&scene, cli.format, file)
        }
        None => write_scene(&scene, cli.format, io::stdout().lock()),
    }
    .context("failed to write scene")?;

    if !report.is_clean() {
        warn!(
            failures = report.failures.len(),
            meshes = report.meshes,
            labels = report.labels,
            "import finished with skipped shapes"
        );
    }
    Ok(())
}
