//! Resource discovery: walking declared directories and filtering their files.

mod resolver;
mod walker;

pub use resolver::resolve_source;
pub use walker::walk_files;
