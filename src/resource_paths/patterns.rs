use std::path::Path;

use regex::Regex;

/// Ant-style wildcard pattern compiled for repeated matching.
///
/// `?` matches one character and `*` any run of characters, neither crossing a `/`. `**` spans
/// directory boundaries; as a whole component (`a/**/b`) it also matches zero directories. Every
/// other character, brackets and braces included, is literal. Matching is anchored at both ends.
#[derive(Debug, Clone)]
pub struct AntPattern {
  source: String,
  regex: Option<Regex>,
}

impl AntPattern {
  /// Compile a pattern written against `/`-separated candidates.
  pub fn new(pattern: &str) -> Self {
    Self::compile(pattern.to_string(), String::new(), pattern)
  }

  /// Compile a root-relative pattern into the fully-qualified path space of `root`.
  ///
  /// The root is matched literally. A pattern ending in `/` selects everything below that
  /// directory, as in Ant.
  pub fn anchored(root: &Path, pattern: &str) -> Self {
    let root = to_slash(root);
    let root = root.trim_end_matches('/');
    let mut pattern = pattern.replace('\\', "/");
    if pattern.ends_with('/') {
      pattern.push_str("**");
    }
    let pattern = pattern.trim_start_matches('/');

    Self::compile(
      format!("{root}/{pattern}"),
      format!("{}/", regex::escape(root)),
      pattern,
    )
  }

  fn compile(source: String, literal_prefix: String, wildcard: &str) -> Self {
    let expression = format!("(?s)^{literal_prefix}{}$", translate(wildcard));
    let regex = match Regex::new(&expression) {
      Ok(regex) => Some(regex),
      Err(err) => {
        log::warn!("treating pattern '{source}' as a literal path: {err}");
        None
      }
    };
    Self { source, regex }
  }

  /// Returns `true` when the whole candidate is accounted for by the pattern.
  pub fn is_match(&self, candidate: &str) -> bool {
    match &self.regex {
      Some(regex) => regex.is_match(candidate),
      None => candidate == self.source,
    }
  }

  /// The pattern as written, after anchoring.
  pub fn as_str(&self) -> &str {
    &self.source
  }
}

/// Match a candidate path against an Ant-style wildcard pattern.
pub fn matches(candidate: &str, pattern: &str) -> bool {
  AntPattern::new(pattern).is_match(candidate)
}

/// Render a filesystem path with `/` separators.
pub fn to_slash(path: &Path) -> String {
  path.to_string_lossy().replace('\\', "/")
}

fn translate(pattern: &str) -> String {
  let chars: Vec<char> = pattern.chars().collect();
  let mut expression = String::with_capacity(pattern.len() * 2);
  let mut index = 0;

  while index < chars.len() {
    match chars[index] {
      '*' if chars.get(index + 1) == Some(&'*') => {
        let segment_start = index == 0 || chars[index - 1] == '/';
        while chars.get(index) == Some(&'*') {
          index += 1;
        }
        if segment_start && chars.get(index) == Some(&'/') {
          expression.push_str("(?:.*/)?");
          index += 1;
        } else {
          expression.push_str(".*");
        }
        continue;
      }
      '*' => expression.push_str("[^/]*"),
      '?' => expression.push_str("[^/]"),
      literal => expression.push_str(&regex::escape(&literal.to_string())),
    }
    index += 1;
  }

  expression
}
