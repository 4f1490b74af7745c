//! `resource-index` - write the resource index for a project.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use resource_index::config::{DEFAULT_CONFIG_FILE, ResourceConfig};
use resource_index::IndexConfig;

/// Scan declared resource directories and write a flat index of their packaged paths.
#[derive(Debug, Parser)]
#[command(name = "resource-index", version, about)]
struct Cli {
  /// Project directory that relative paths are resolved against.
  #[arg(long, default_value = ".")]
  project_dir: PathBuf,

  /// Configuration file (defaults to resource-index.json in the project directory).
  #[arg(long)]
  config: Option<PathBuf>,

  /// Output root the index path is resolved against.
  #[arg(long)]
  output_dir: Option<PathBuf>,

  /// Index location relative to the output root.
  #[arg(long)]
  target_path: Option<String>,

  /// Merge with an existing index instead of replacing it.
  #[arg(long)]
  append: bool,

  /// Target path to leave out of the index. May be repeated.
  #[arg(long = "exclude", value_name = "TARGET")]
  excludes: Vec<String>,

  /// Resource directory to scan, replacing the configured ones. May be repeated.
  #[arg(long = "resource", value_name = "DIR")]
  resources: Vec<PathBuf>,

  /// Enable debug logging.
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_filter = if cli.verbose { "debug" } else { "info" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
    .init();

  let config_path = cli
    .config
    .clone()
    .unwrap_or_else(|| cli.project_dir.join(DEFAULT_CONFIG_FILE));
  if cli.config.is_some() && !config_path.exists() {
    bail!("configuration file {} does not exist", config_path.display());
  }
  let mut config = IndexConfig::load_from_path(&config_path)
    .with_context(|| format!("failed to load configuration from {}", config_path.display()))?;
  apply_overrides(&mut config, &cli);

  let report = config
    .into_generator(&cli.project_dir)
    .generate()
    .context("failed to generate resource index")?;

  log::info!(
    "Indexed {} resources into {}",
    report.manifest.len(),
    report.manifest_path.display()
  );
  Ok(())
}

fn apply_overrides(config: &mut IndexConfig, cli: &Cli) {
  if let Some(output_dir) = &cli.output_dir {
    config.output_directory = output_dir.clone();
  }
  if let Some(target_path) = &cli.target_path {
    config.target_path = target_path.clone();
  }
  config.append_if_exists |= cli.append;
  config.excludes.extend(cli.excludes.iter().cloned());
  if !cli.resources.is_empty() {
    config.resources = cli
      .resources
      .iter()
      .map(|directory| ResourceConfig {
        directory: directory.clone(),
        ..ResourceConfig::default()
      })
      .collect();
  }
}
