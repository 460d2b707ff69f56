//! CLI command implementations.

pub mod build;
pub mod convert;

pub use build::build_site;
pub use convert::convert_note_file;
