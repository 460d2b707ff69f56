//! Content model structs for notes and the site index.

use crate::naming::OutputName;
use std::path::PathBuf;

/// The result of converting one note: its title and HTML fragments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedNote {
    /// Title from the last `# ` line, `None` if the note had none
    pub title: Option<String>,

    /// One HTML snippet per classified line, in source order
    pub fragments: Vec<String>,
}

impl ParsedNote {
    /// Title, or the empty string for untitled notes
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Fragments joined with newlines
    pub fn content(&self) -> String {
        self.fragments.join("\n")
    }
}

/// A single note discovered in an input category
#[derive(Debug, Clone)]
pub struct Note {
    /// Category name (the input subdirectory)
    pub category: String,

    /// Path of the source note file
    pub source_path: PathBuf,

    /// Converted content
    pub parsed: ParsedNote,

    /// Derived output file name
    pub output_name: OutputName,

    /// Full output path (category output dir + output name)
    pub output_path: PathBuf,
}

impl Note {
    /// Source file name for progress messages
    pub fn source_file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Two notes that resolved to the same output path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub output_path: PathBuf,
    /// Note whose page gets overwritten
    pub overwritten: PathBuf,
    /// Note whose page is kept
    pub winner: PathBuf,
}

/// A page handed to the writer during a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub category: String,
    pub source_path: PathBuf,
    pub output_path: PathBuf,
}

/// Summary of a build, in write order
#[derive(Debug, Clone, Default)]
pub struct SiteIndex {
    pub pages: Vec<PageRecord>,
    pub collisions: Vec<Collision>,
}

impl SiteIndex {
    /// Pages belonging to one category
    pub fn pages_in<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a PageRecord> + 'a {
        self.pages.iter().filter(move |p| p.category == category)
    }
}
