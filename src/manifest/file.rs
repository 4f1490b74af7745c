use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ManifestError;
use crate::manifest::merge::Manifest;

/// Load a previously written manifest, returning `None` when the file does not exist.
pub fn load_manifest(path: &Path) -> Result<Option<Manifest>, ManifestError> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(Some(Manifest::parse(&content))),
    Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
    Err(err) => Err(ManifestError::Read {
      path: path.to_path_buf(),
      source: err,
    }),
  }
}

/// Replace the manifest at `path` with the serialised contents of `manifest`.
///
/// The text is written to a temporary file next to the destination and renamed into place, so
/// a failure never leaves a truncated manifest behind. Missing parent directories are created.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), ManifestError> {
  let write_error = |source| ManifestError::Write {
    path: path.to_path_buf(),
    source,
  };

  let parent = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };
  fs::create_dir_all(parent).map_err(write_error)?;

  let mut staged = NamedTempFile::new_in(parent).map_err(write_error)?;
  staged
    .write_all(manifest.to_string().as_bytes())
    .map_err(write_error)?;
  // Temporary files are created owner-only; the index is an ordinary build output.
  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt;
    staged
      .as_file()
      .set_permissions(fs::Permissions::from_mode(0o644))
      .map_err(write_error)?;
  }
  staged.persist(path).map_err(|err| write_error(err.error))?;
  Ok(())
}
