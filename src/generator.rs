//! Index generation orchestrator: resolves every resource source and rewrites the manifest.

use std::path::{Path, PathBuf};

use crate::error::IndexError;
use crate::manifest::{Manifest, MergeOutcome, load_manifest, merge_entries, write_manifest};
use crate::models::{ExcludeList, ResourceSource};
use crate::resolve::resolve_source;

/// Summary of a completed generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
  /// Location the manifest was written to.
  pub manifest_path: PathBuf,
  /// Final manifest contents.
  pub manifest: Manifest,
  /// Number of files resolved across all sources, before denylisting and deduplication.
  pub resolved: usize,
  /// Number of resolved files dropped by the caller denylist.
  pub excluded: usize,
  /// Whether a previously written manifest was merged into the result.
  pub appended: bool,
}

/// High-level helper for producing a resource index from declared resource sources.
#[derive(Debug, Clone)]
pub struct IndexGenerator {
  sources: Vec<ResourceSource>,
  excludes: ExcludeList,
  manifest_path: PathBuf,
  append_if_exists: bool,
}

impl IndexGenerator {
  /// Create a generator writing to `manifest_path` with no sources, no excludes and no append.
  pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
    Self {
      sources: Vec::new(),
      excludes: ExcludeList::default(),
      manifest_path: manifest_path.into(),
      append_if_exists: false,
    }
  }

  /// Declare the resource sources to scan, in declaration order.
  pub fn with_sources(mut self, sources: impl IntoIterator<Item = ResourceSource>) -> Self {
    self.sources.extend(sources);
    self
  }

  /// Set the literal target paths that must never be indexed.
  pub fn with_excludes(mut self, excludes: ExcludeList) -> Self {
    self.excludes = excludes;
    self
  }

  /// Merge with an existing manifest instead of replacing it.
  pub fn append_if_exists(mut self, append: bool) -> Self {
    self.append_if_exists = append;
    self
  }

  /// Path of the manifest this generator writes.
  pub fn manifest_path(&self) -> &Path {
    &self.manifest_path
  }

  /// Declared resource sources.
  pub fn sources(&self) -> &[ResourceSource] {
    &self.sources
  }

  /// Resolve every source, merge the results and rewrite the manifest.
  ///
  /// Nothing is written unless every source resolves and any existing manifest loads.
  pub fn generate(&self) -> Result<GenerationReport, IndexError> {
    let mut resolved = Vec::new();
    for source in &self.sources {
      resolved.extend(resolve_source(source)?);
    }
    let resolved_count = resolved.len();

    log::info!(
      "Writing resource index file to {}",
      self.manifest_path.display()
    );
    let existing = if self.append_if_exists {
      let existing = load_manifest(&self.manifest_path)?;
      if existing.is_some() {
        log::info!("Appending to existing resource index file");
      }
      existing
    } else {
      None
    };
    let appended = existing.is_some();

    let MergeOutcome { manifest, excluded } = merge_entries(resolved, &self.excludes, existing);
    write_manifest(&self.manifest_path, &manifest)?;

    Ok(GenerationReport {
      manifest_path: self.manifest_path.clone(),
      manifest,
      resolved: resolved_count,
      excluded,
      appended,
    })
  }
}
