//! Command line entry point bundling a static page into one HTML file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use site_inliner::{BundleConfig, SiteBuilder};

#[derive(Parser)]
#[command(name = "site-inliner")]
#[command(about = "Inline a page's CSS, JS, images and fonts into one self-contained HTML file")]
#[command(version)]
struct Cli {
  /// Project directory references are resolved against
  #[arg(short, long, default_value = ".")]
  project: PathBuf,

  /// Path to a JSON config file (defaults to inline.config.json in the project)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Input page, relative to the project directory
  #[arg(short, long)]
  input: Option<String>,

  /// Output page, relative to the project directory
  #[arg(short, long)]
  output: Option<String>,

  /// Skip minification
  #[arg(long)]
  no_minify: bool,

  /// Print the build report as JSON
  #[arg(long)]
  json: bool,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("build failed: {err:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let mut config = match &cli.config {
    Some(path) => BundleConfig::load(path)?,
    None => BundleConfig::discover(&cli.project),
  };
  if let Some(input) = cli.input {
    config.input_html = input;
  }
  if let Some(output) = cli.output {
    config.output_html = output;
  }
  if cli.no_minify {
    config.minify = false;
  }

  let builder = SiteBuilder::new(config.into_layout(&cli.project));
  let report = builder.build()?;

  if cli.json {
    let json = serde_json::to_string_pretty(&report).context("failed to serialise build report")?;
    println!("{json}");
  } else {
    info!(
      "built {} ({} bytes, {} assets inlined)",
      report.output.display(),
      report.output_bytes,
      report.inlined.total_inlined()
    );
    for reference in &report.inlined.unresolved {
      info!("left unresolved: {reference}");
    }
  }

  Ok(())
}
