/// Produce the packaged location of a resource from its source prefix and relative path.
///
/// The result always uses forward slashes so the manifest reads the same on every platform.
/// Empty and `.` segments are dropped, `..` removes the preceding segment and leading slashes
/// are stripped because target paths are relative to the artifact root.
pub fn make_target_path(prefix: &str, relative_path: &str) -> String {
  normalise_target_path(&format!("{prefix}/{relative_path}"))
}

/// Normalise a `/` or `\` separated path into canonical target form.
pub fn normalise_target_path(raw: &str) -> String {
  let mut segments: Vec<&str> = Vec::new();
  for segment in raw.split(['/', '\\']) {
    match segment {
      "" | "." => {}
      ".." => {
        segments.pop();
      }
      value => segments.push(value),
    }
  }
  segments.join("/")
}
