#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod models;
pub mod resolve;
pub mod resource_paths;

pub use config::IndexConfig;
pub use error::{ConfigError, IndexError, ManifestError, ResolveError};
pub use generator::{GenerationReport, IndexGenerator};
pub use manifest::Manifest;
pub use models::{ExcludeList, ResolvedEntry, ResourceSource};
