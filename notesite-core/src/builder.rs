//! Site building logic - discovers notes per category and converts them.

use crate::{
    config::{CategoryDirs, Config},
    markdown::convert_note,
    models::*,
    naming::OutputName,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list category directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Main site builder
pub struct SiteBuilder {
    config: Config,
}

impl SiteBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Convert every note of every category, handing each to `on_note` as
    /// soon as it is converted.
    ///
    /// Notes arrive in write order: categories in configured order, files
    /// sorted by name within a category. A note is dropped once `on_note`
    /// returns; only its output path is kept to detect collisions. The first
    /// error, from I/O or from `on_note`, aborts the build.
    pub fn build_with<F, E>(&self, mut on_note: F) -> Result<SiteIndex, E>
    where
        F: FnMut(Note) -> Result<(), E>,
        E: From<BuildError>,
    {
        let mut index = SiteIndex::default();
        let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

        for dirs in self.config.category_dirs() {
            let files = self.discover_note_files(&dirs)?;
            tracing::debug!("Found {} notes in category {}", files.len(), dirs.name);

            for file_path in files {
                let note = self.parse_note(&dirs, &file_path)?;

                if let Some(previous) =
                    claimed.insert(note.output_path.clone(), note.source_path.clone())
                {
                    tracing::warn!(
                        "{:?} and {:?} both map to {:?}; the later note overwrites the earlier",
                        previous,
                        note.source_path,
                        note.output_path
                    );
                    index.collisions.push(Collision {
                        output_path: note.output_path.clone(),
                        overwritten: previous,
                        winner: note.source_path.clone(),
                    });
                }

                let page = PageRecord {
                    category: note.category.clone(),
                    source_path: note.source_path.clone(),
                    output_path: note.output_path.clone(),
                };
                on_note(note)?;
                index.pages.push(page);
            }
        }

        tracing::debug!("Processed {} notes", index.pages.len());

        Ok(index)
    }

    /// List every entry directly inside a category's input directory whose
    /// name ends in the note extension.
    ///
    /// Symlinks are followed. Entries that are not readable files are still
    /// returned so that reading them fails the build.
    fn discover_note_files(&self, dirs: &CategoryDirs) -> Result<Vec<PathBuf>, BuildError> {
        let extension = self.config.dotted_extension();
        let mut files = Vec::new();

        for entry in WalkDir::new(&dirs.input)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            if entry.file_name().to_string_lossy().ends_with(&extension) {
                files.push(entry.path().to_path_buf());
            }
        }

        Ok(files)
    }

    /// Read and convert a single note
    fn parse_note(&self, dirs: &CategoryDirs, path: &Path) -> Result<Note, BuildError> {
        let content = fs::read_to_string(path).map_err(|source| BuildError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = convert_note(&content);
        let output_name =
            OutputName::from_title(parsed.title.as_deref(), &self.config.fallback_stem);
        if output_name.is_fallback() {
            tracing::warn!(
                "{:?} has no usable title; writing it as {}",
                path,
                output_name
            );
        }
        let output_path = dirs.output.join(output_name.file_name());

        Ok(Note {
            category: dirs.name.clone(),
            source_path: path.to_path_buf(),
            parsed,
            output_name,
            output_path,
        })
    }
}
