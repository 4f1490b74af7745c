use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::models::{ResolvedEntry, ResourceSource};
use crate::resource_paths::{AntPattern, make_target_path, to_slash};
use crate::resolve::walker::walk_files;

/// Include and exclude patterns expanded into the fully-qualified path space of one source.
#[derive(Debug, Clone)]
struct SourceFilter {
  include: Vec<AntPattern>,
  exclude: Vec<AntPattern>,
}

impl SourceFilter {
  fn new(root: &Path, source: &ResourceSource) -> Self {
    let anchor = |patterns: &[String]| {
      patterns
        .iter()
        .map(|pattern| AntPattern::anchored(root, pattern))
        .collect::<Vec<_>>()
    };

    Self {
      include: anchor(&source.include_patterns),
      exclude: anchor(&source.exclude_patterns),
    }
  }

  fn accepts(&self, candidate: &str) -> bool {
    let included =
      self.include.is_empty() || self.include.iter().any(|pattern| pattern.is_match(candidate));
    included && !self.exclude.iter().any(|pattern| pattern.is_match(candidate))
  }
}

/// Resolve every file of a resource source that survives its include and exclude filters.
///
/// Patterns are declared relative to the source root and evaluated against absolute candidate
/// paths, so both sides live in the same path space. Any traversal failure aborts resolution.
pub fn resolve_source(source: &ResourceSource) -> Result<Vec<ResolvedEntry>, ResolveError> {
  log::info!(
    "Reading resources from {}",
    source.root_directory.display()
  );

  let root = absolute_root(&source.root_directory);
  let filter = SourceFilter::new(&root, source);
  log::debug!(
    "Include: {:?}, Exclude: {:?}",
    filter.include.iter().map(AntPattern::as_str).collect::<Vec<_>>(),
    filter.exclude.iter().map(AntPattern::as_str).collect::<Vec<_>>()
  );

  let mut resolved = Vec::new();
  for relative in walk_files(&root)? {
    let relative_path = relative?;
    let source_path = root.join(&relative_path);
    let Some(relative_name) = relative_path.to_str() else {
      log::warn!(
        "skipping {}: file name is not valid UTF-8",
        source_path.display()
      );
      continue;
    };
    if !filter.accepts(&to_slash(&source_path)) {
      continue;
    }

    log::info!("- {}", relative_path.display());
    resolved.push(ResolvedEntry {
      target_path: make_target_path(&source.target_prefix, relative_name),
      source_path,
      relative_path,
    });
  }

  Ok(resolved)
}

fn absolute_root(root: &Path) -> PathBuf {
  std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf())
}
