//! End-to-end tests for index generation against real directory trees.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use resource_index::{ExcludeList, IndexError, IndexGenerator, ResolveError, ResourceSource};
use tempfile::{TempDir, tempdir};

fn write_file(path: &Path, contents: &str) {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).unwrap();
  }
  fs::write(path, contents).unwrap();
}

/// `res/a.txt` and `res/img/b.png` beneath a fresh temporary directory.
fn project() -> TempDir {
  let dir = tempdir().unwrap();
  write_file(&dir.path().join("res/a.txt"), "a");
  write_file(&dir.path().join("res/img/b.png"), "b");
  dir
}

fn read_set(path: &Path) -> BTreeSet<String> {
  fs::read_to_string(path)
    .unwrap()
    .lines()
    .map(str::to_string)
    .collect()
}

fn set(values: &[&str]) -> BTreeSet<String> {
  values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn includes_limit_the_index_to_matching_files() {
  let dir = project();
  let manifest = dir.path().join("out/resources.list");

  IndexGenerator::new(&manifest)
    .with_sources([ResourceSource::new(dir.path().join("res")).with_includes(["**/*.txt"])])
    .generate()
    .unwrap();

  assert_eq!(fs::read_to_string(&manifest).unwrap(), "a.txt");
}

#[test]
fn denylisted_targets_empty_the_index() {
  let dir = project();
  let manifest = dir.path().join("out/resources.list");

  let report = IndexGenerator::new(&manifest)
    .with_sources([ResourceSource::new(dir.path().join("res")).with_includes(["**/*.txt"])])
    .with_excludes(["a.txt"].into_iter().collect())
    .generate()
    .unwrap();

  assert!(report.manifest.is_empty());
  assert_eq!(fs::read_to_string(&manifest).unwrap(), "");
}

#[test]
fn append_merges_with_previous_index() {
  let dir = project();
  let manifest = dir.path().join("resources.list");
  let source = ResourceSource::new(dir.path().join("res")).with_includes(["*.txt"]);

  fs::write(&manifest, "old.txt").unwrap();
  let report = IndexGenerator::new(&manifest)
    .with_sources([source.clone()])
    .append_if_exists(true)
    .generate()
    .unwrap();
  assert!(report.appended);
  assert_eq!(read_set(&manifest), set(&["a.txt", "old.txt"]));

  fs::write(&manifest, "old.txt").unwrap();
  IndexGenerator::new(&manifest)
    .with_sources([source])
    .generate()
    .unwrap();
  assert_eq!(read_set(&manifest), set(&["a.txt"]));
}

#[test]
fn empty_includes_index_every_file() {
  let dir = project();
  write_file(&dir.path().join("res/deep/er/.hidden"), "h");
  let manifest = dir.path().join("resources.list");

  IndexGenerator::new(&manifest)
    .with_sources([ResourceSource::new(dir.path().join("res"))])
    .generate()
    .unwrap();

  assert_eq!(
    read_set(&manifest),
    set(&["a.txt", "img/b.png", "deep/er/.hidden"])
  );
}

#[test]
fn excluded_files_never_reach_the_index() {
  let dir = project();
  write_file(&dir.path().join("res/img/c.txt"), "c");
  let manifest = dir.path().join("resources.list");

  IndexGenerator::new(&manifest)
    .with_sources([ResourceSource::new(dir.path().join("res"))
      .with_includes(["**/*.txt", "img/**"])
      .with_excludes(["img/*.txt"])])
    .generate()
    .unwrap();

  assert_eq!(read_set(&manifest), set(&["a.txt", "img/b.png"]));
}

#[test]
fn overlapping_sources_are_deduplicated() {
  let dir = project();
  write_file(&dir.path().join("other/a.txt"), "same target");
  let manifest = dir.path().join("resources.list");

  let report = IndexGenerator::new(&manifest)
    .with_sources([
      ResourceSource::new(dir.path().join("res")),
      ResourceSource::new(dir.path().join("other")),
    ])
    .generate()
    .unwrap();

  assert_eq!(report.resolved, 3);
  let content = fs::read_to_string(&manifest).unwrap();
  assert_eq!(content.lines().filter(|line| *line == "a.txt").count(), 1);
}

#[test]
fn source_order_does_not_change_the_index() {
  let dir = project();
  write_file(&dir.path().join("web/index.html"), "<html>");
  let manifest = dir.path().join("resources.list");
  let res = ResourceSource::new(dir.path().join("res"));
  let web = ResourceSource::new(dir.path().join("web")).with_target_prefix("static");

  let forward = IndexGenerator::new(&manifest)
    .with_sources([res.clone(), web.clone()])
    .generate()
    .unwrap();
  let backward = IndexGenerator::new(&manifest)
    .with_sources([web, res])
    .generate()
    .unwrap();

  assert_eq!(forward.manifest, backward.manifest);
  assert!(forward.manifest.contains("static/index.html"));
}

#[test]
fn repeated_append_runs_are_idempotent() {
  let dir = project();
  let manifest = dir.path().join("resources.list");
  let generator = IndexGenerator::new(&manifest)
    .with_sources([ResourceSource::new(dir.path().join("res"))])
    .with_excludes(ExcludeList::default())
    .append_if_exists(true);

  let first = generator.generate().unwrap();
  let first_contents = read_set(&manifest);
  let second = generator.generate().unwrap();

  assert_eq!(first.manifest, second.manifest);
  assert_eq!(read_set(&manifest), first_contents);
}

#[test]
fn file_names_with_trailing_spaces_survive_append_runs() {
  let dir = project();
  write_file(&dir.path().join("res/notes "), "n");
  let manifest = dir.path().join("resources.list");
  let generator = IndexGenerator::new(&manifest)
    .with_sources([ResourceSource::new(dir.path().join("res"))])
    .append_if_exists(true);

  generator.generate().unwrap();
  let report = generator.generate().unwrap();

  assert_eq!(report.manifest.len(), 3);
  assert!(report.manifest.contains("notes "));
  assert!(!report.manifest.contains("notes"));
}

#[cfg(unix)]
#[test]
fn dangling_symlinks_do_not_abort_the_run() {
  let dir = tempdir().unwrap();
  let root = dir.path().join("res");
  write_file(&root.join("a.txt"), "a");
  std::os::unix::fs::symlink(root.join("gone"), root.join("broken")).unwrap();
  let manifest = dir.path().join("resources.list");

  IndexGenerator::new(&manifest)
    .with_sources([ResourceSource::new(&root)])
    .generate()
    .unwrap();

  assert_eq!(read_set(&manifest), set(&["a.txt"]));
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_aborts_the_run() {
  use std::os::unix::fs::PermissionsExt;

  let dir = project();
  let locked = dir.path().join("res/locked");
  write_file(&locked.join("secret.txt"), "s");
  fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
  if fs::read_dir(&locked).is_ok() {
    // Privileged users can still list the directory.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    return;
  }
  let manifest = dir.path().join("resources.list");

  let result = IndexGenerator::new(&manifest)
    .with_sources([ResourceSource::new(dir.path().join("res"))])
    .generate();
  fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

  assert!(matches!(
    result,
    Err(IndexError::Resolve(ResolveError::Traversal { ref path, .. })) if path.ends_with("locked")
  ));
  assert!(!manifest.exists());
}

#[test]
fn missing_source_directory_aborts_the_run() {
  let dir = project();
  let manifest = dir.path().join("resources.list");

  let err = IndexGenerator::new(&manifest)
    .with_sources([ResourceSource::new(dir.path().join("nope"))])
    .generate()
    .unwrap_err();

  assert!(matches!(
    err,
    IndexError::Resolve(ResolveError::RootNotFound { ref path }) if path.ends_with("nope")
  ));
  assert!(!manifest.exists());
}

#[test]
fn no_sources_write_an_empty_index() {
  let dir = tempdir().unwrap();
  let manifest = dir.path().join("resources.list");

  let report = IndexGenerator::new(&manifest).generate().unwrap();

  assert_eq!(report.resolved, 0);
  assert_eq!(fs::read_to_string(&manifest).unwrap(), "");
}
