//! Helpers for matching resource files against Ant-style filters and computing their packaged paths.
//!
//! Pattern evaluation and target path construction are kept apart so each can be tested on
//! plain strings without touching the filesystem.

mod patterns;
mod target;

pub use patterns::{AntPattern, matches, to_slash};
pub use target::{make_target_path, normalise_target_path};
