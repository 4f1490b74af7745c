//! Data structures shared by the resolution and merge passes.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// One declared resource tree contributing files to the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSource {
  /// Directory scanned for resource files.
  pub root_directory: PathBuf,
  /// Prefix prepended to every target path produced by this source. May be empty.
  pub target_prefix: String,
  /// Include patterns relative to the root directory. Empty means everything is included.
  pub include_patterns: Vec<String>,
  /// Exclude patterns relative to the root directory. Always win over includes.
  pub exclude_patterns: Vec<String>,
}

impl ResourceSource {
  /// Create a source that includes every file beneath `root_directory`.
  pub fn new(root_directory: impl Into<PathBuf>) -> Self {
    Self {
      root_directory: root_directory.into(),
      ..Self::default()
    }
  }

  /// Set the target prefix for files produced by this source.
  pub fn with_target_prefix(mut self, prefix: impl Into<String>) -> Self {
    self.target_prefix = prefix.into();
    self
  }

  /// Append include patterns.
  pub fn with_includes<I, S>(mut self, patterns: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self
      .include_patterns
      .extend(patterns.into_iter().map(Into::into));
    self
  }

  /// Append exclude patterns.
  pub fn with_excludes<I, S>(mut self, patterns: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self
      .exclude_patterns
      .extend(patterns.into_iter().map(Into::into));
    self
  }
}

/// A resource file that survived filtering, along with its packaged location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
  /// Absolute path of the file on disk.
  pub source_path: PathBuf,
  /// Path of the file relative to its source root.
  pub relative_path: PathBuf,
  /// Location of the resource inside the packaged artifact, always `/`-separated.
  pub target_path: String,
}

/// Literal target paths the caller never wants in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeList {
  targets: BTreeSet<String>,
}

impl ExcludeList {
  /// Returns `true` when `target_path` was denylisted verbatim.
  pub fn contains(&self, target_path: &str) -> bool {
    self.targets.contains(target_path)
  }

  /// Number of distinct denylisted target paths.
  pub fn len(&self) -> usize {
    self.targets.len()
  }

  /// Returns `true` when nothing is denylisted.
  pub fn is_empty(&self) -> bool {
    self.targets.is_empty()
  }
}

impl<S: Into<String>> FromIterator<S> for ExcludeList {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    Self {
      targets: iter.into_iter().map(Into::into).collect(),
    }
  }
}
