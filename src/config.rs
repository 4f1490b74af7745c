//! Project configuration loader describing resource sources and the index location.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::generator::IndexGenerator;
use crate::models::{ExcludeList, ResourceSource};

/// Configuration file searched for in the project directory.
pub const DEFAULT_CONFIG_FILE: &str = "resource-index.json";

/// Declaration of one resource directory as written in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceConfig {
  /// Directory containing the resources, relative to the project directory.
  pub directory: PathBuf,
  /// Optional prefix applied to the packaged location of every resource.
  pub target_path: Option<String>,
  /// Include globs relative to `directory`.
  pub includes: Vec<String>,
  /// Exclude globs relative to `directory`.
  pub excludes: Vec<String>,
}

impl ResourceConfig {
  /// Resolve the declaration against the project directory.
  pub fn to_source(&self, project_dir: &Path) -> ResourceSource {
    ResourceSource::new(project_dir.join(&self.directory))
      .with_target_prefix(self.target_path.clone().unwrap_or_default())
      .with_includes(self.includes.iter().cloned())
      .with_excludes(self.excludes.iter().cloned())
  }
}

/// Discoverable project configuration describing what to index and where to write it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexConfig {
  /// Output root the manifest path is resolved against.
  pub output_directory: PathBuf,
  /// Location of the manifest relative to the output root.
  pub target_path: String,
  /// Merge with a previously written manifest instead of replacing it.
  pub append_if_exists: bool,
  /// Literal target paths that must never appear in the manifest.
  pub excludes: Vec<String>,
  /// Resource directories to scan, in declaration order.
  pub resources: Vec<ResourceConfig>,
}

impl Default for IndexConfig {
  fn default() -> Self {
    Self {
      output_directory: "target/classes".into(),
      target_path: "resources.list".into(),
      append_if_exists: false,
      excludes: Vec::new(),
      resources: vec![ResourceConfig {
        directory: "src/main/resources".into(),
        ..ResourceConfig::default()
      }],
    }
  }
}

impl IndexConfig {
  /// Load `resource-index.json` from the project directory, falling back to defaults when absent.
  pub fn discover(project_dir: &Path) -> Result<Self, ConfigError> {
    Self::load_from_path(project_dir.join(DEFAULT_CONFIG_FILE))
  }

  /// Read configuration from a specific JSON file, returning defaults when it does not exist.
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
      Ok(contents) => contents,
      Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
      Err(err) => {
        return Err(ConfigError::Read {
          path: path.to_path_buf(),
          source: err,
        });
      }
    };

    serde_json::from_str(&contents).map_err(|err| ConfigError::Parse {
      path: path.to_path_buf(),
      source: err,
    })
  }

  /// Full path of the manifest file for the given project directory.
  pub fn manifest_path(&self, project_dir: &Path) -> PathBuf {
    project_dir
      .join(&self.output_directory)
      .join(&self.target_path)
  }

  /// Build the generator described by this configuration.
  pub fn into_generator(self, project_dir: &Path) -> IndexGenerator {
    let sources: Vec<ResourceSource> = self
      .resources
      .iter()
      .map(|resource| resource.to_source(project_dir))
      .collect();
    let excludes: ExcludeList = self.excludes.iter().cloned().collect();

    IndexGenerator::new(self.manifest_path(project_dir))
      .with_sources(sources)
      .with_excludes(excludes)
      .append_if_exists(self.append_if_exists)
  }
}
