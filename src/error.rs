//! Error types surfaced by resource resolution, manifest I/O and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while enumerating a declared resource directory.
#[derive(Debug, Error)]
pub enum ResolveError {
  /// The declared resource root does not exist.
  #[error("resource directory does not exist: {}", path.display())]
  RootNotFound {
    /// Root directory that was declared.
    path: PathBuf,
  },
  /// The declared resource root is not a directory.
  #[error("resource root is not a directory: {}", path.display())]
  NotADirectory {
    /// Root path that was declared.
    path: PathBuf,
  },
  /// The resource root or one of its descendants could not be read.
  #[error("failed to walk resources under {}", path.display())]
  Traversal {
    /// Path that could not be read.
    path: PathBuf,
    /// Underlying traversal error.
    #[source]
    source: walkdir::Error,
  },
}

/// Failures raised while reading or writing the manifest file.
#[derive(Debug, Error)]
pub enum ManifestError {
  /// An existing manifest could not be read for merging.
  #[error("failed to read existing resource index {}", path.display())]
  Read {
    /// Manifest path.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },
  /// The final manifest could not be written.
  #[error("failed to write resource index {}", path.display())]
  Write {
    /// Manifest path.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },
}

/// First fatal error encountered during an index generation run.
#[derive(Debug, Error)]
pub enum IndexError {
  /// A resource source could not be resolved.
  #[error(transparent)]
  Resolve(#[from] ResolveError),
  /// The manifest could not be read or written.
  #[error(transparent)]
  Manifest(#[from] ManifestError),
}

/// Errors that can occur while loading the index configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// Failed to read the configuration file from disk.
  #[error("failed to read {}", path.display())]
  Read {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },
  /// Failed to parse the JSON configuration file.
  #[error("failed to parse {}", path.display())]
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    #[source]
    source: serde_json::Error,
  },
}
