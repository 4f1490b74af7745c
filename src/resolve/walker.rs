use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ResolveError;

/// Lazily enumerate every regular file beneath `root`, yielding paths relative to it.
///
/// Symbolic links are followed. Links that point back at one of their ancestors, and links whose
/// target no longer exists, are skipped with a warning. Every other traversal failure is yielded
/// as an error and should end the run. Sibling order is unspecified.
pub fn walk_files(
  root: &Path,
) -> Result<impl Iterator<Item = Result<PathBuf, ResolveError>> + use<>, ResolveError> {
  if !root.exists() {
    return Err(ResolveError::RootNotFound {
      path: root.to_path_buf(),
    });
  }
  if !root.is_dir() {
    return Err(ResolveError::NotADirectory {
      path: root.to_path_buf(),
    });
  }

  let base = root.to_path_buf();
  let entries = WalkDir::new(root).follow_links(true).into_iter();

  Ok(entries.filter_map(move |entry| match entry {
    Ok(entry) if entry.file_type().is_file() => Some(Ok(
      entry
        .path()
        .strip_prefix(&base)
        .unwrap_or(entry.path())
        .to_path_buf(),
    )),
    Ok(_) => None,
    Err(err) if err.loop_ancestor().is_some() => {
      log::warn!(
        "skipping symbolic link loop at {}",
        err.path().unwrap_or(&base).display()
      );
      None
    }
    Err(err) if is_dangling_link(&err) => {
      log::warn!(
        "skipping dangling symbolic link at {}",
        err.path().unwrap_or(&base).display()
      );
      None
    }
    Err(err) => Some(Err(ResolveError::Traversal {
      path: err.path().unwrap_or(&base).to_path_buf(),
      source: err,
    })),
  }))
}

fn is_dangling_link(err: &walkdir::Error) -> bool {
  let not_found = err
    .io_error()
    .is_some_and(|io| io.kind() == ErrorKind::NotFound);
  not_found
    && err.depth() > 0
    && err
      .path()
      .and_then(|path| fs::symlink_metadata(path).ok())
      .is_some_and(|meta| meta.file_type().is_symlink())
}
