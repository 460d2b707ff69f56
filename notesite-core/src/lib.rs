//! # notesite-core
//!
//! Core library for the notesite article generator.
//!
//! This crate turns small line-oriented notes into HTML fragments, derives
//! their output file names, and discovers notes across the configured
//! categories.

pub mod builder;
pub mod config;
pub mod markdown;
pub mod models;
pub mod naming;

pub use builder::{BuildError, SiteBuilder};
pub use config::{CategoryConfig, CategoryDirs, Config, ConfigError};
pub use markdown::{classify_line, convert_note, LineKind};
pub use models::{Collision, Note, PageRecord, ParsedNote, SiteIndex};
pub use naming::{sanitize_filename, to_camel_case, OutputName};
