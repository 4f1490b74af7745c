//! Resource index manifest: set-based merging and on-disk persistence.

mod file;
mod merge;

pub use file::{load_manifest, write_manifest};
pub use merge::{Manifest, MergeOutcome, merge_entries};
