use std::collections::BTreeSet;
use std::fmt;

use crate::models::{ExcludeList, ResolvedEntry};

/// Deduplicated set of target paths written to the resource index.
///
/// Iteration and serialisation happen in lexicographic order, but consumers should treat the
/// manifest as an unordered set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
  entries: BTreeSet<String>,
}

impl Manifest {
  /// Create an empty manifest.
  pub fn new() -> Self {
    Self::default()
  }

  /// Parse newline separated manifest text, ignoring blank lines.
  ///
  /// Only the line terminator is removed; other trailing whitespace belongs to the path.
  pub fn parse(content: &str) -> Self {
    content
      .split('\n')
      .map(|line| line.strip_suffix('\r').unwrap_or(line))
      .filter(|line| !line.is_empty())
      .collect()
  }

  /// Add a target path, returning `false` when it was already present or empty.
  pub fn insert(&mut self, target_path: impl Into<String>) -> bool {
    let target_path = target_path.into();
    !target_path.is_empty() && self.entries.insert(target_path)
  }

  /// Returns `true` when the manifest lists `target_path`.
  pub fn contains(&self, target_path: &str) -> bool {
    self.entries.contains(target_path)
  }

  /// Number of distinct target paths.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when the manifest has no entries.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Iterate over the target paths.
  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(String::as_str)
  }
}

impl<S: Into<String>> FromIterator<S> for Manifest {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    let mut manifest = Self::new();
    for target_path in iter {
      manifest.insert(target_path);
    }
    manifest
  }
}

/// Serialised form: one target path per line, no trailing newline.
impl fmt::Display for Manifest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, entry) in self.entries.iter().enumerate() {
      if index > 0 {
        f.write_str("\n")?;
      }
      f.write_str(entry)?;
    }
    Ok(())
  }
}

/// Outcome of merging resolved entries into a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
  /// The merged manifest.
  pub manifest: Manifest,
  /// Number of resolved entries dropped because the caller denylisted their target path.
  pub excluded: usize,
}

/// Combine resolved entries from every source with an optional previously written manifest.
///
/// Entries whose target path is denylisted are dropped before the union, so an excluded path
/// that already sits in `existing` is kept. Duplicate target paths collapse into one entry.
pub fn merge_entries<I>(
  resolved: I,
  excludes: &ExcludeList,
  existing: Option<Manifest>,
) -> MergeOutcome
where
  I: IntoIterator<Item = ResolvedEntry>,
{
  let mut manifest = existing.unwrap_or_default();
  let mut excluded = 0;

  for entry in resolved {
    if excludes.contains(&entry.target_path) {
      log::debug!("Excluding {}", entry.target_path);
      excluded += 1;
      continue;
    }
    manifest.insert(entry.target_path);
  }

  MergeOutcome { manifest, excluded }
}
