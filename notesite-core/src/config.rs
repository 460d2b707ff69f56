//! Configuration parsing and management.

use crate::naming::DEFAULT_FALLBACK_STEM;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid category `{0}`: {1}")]
    InvalidCategory(String, String),
}

/// Main configuration struct matching the notesite.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    /// Note file extension, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Stem used for notes whose title yields no file name
    #[serde(default = "default_fallback_stem")]
    pub fallback_stem: String,

    /// Categories in processing order
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding one subdirectory per category
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Base output directory
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

/// A category of notes: an input subdirectory and where its pages go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Input subdirectory name
    pub name: String,

    /// Output subdirectory, relative to the base output directory
    #[serde(default = "default_output_subdir")]
    pub output_subdir: PathBuf,
}

/// Resolved input and output directories of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDirs {
    pub name: String,
    pub input: PathBuf,
    pub output: PathBuf,
}

fn default_input() -> PathBuf {
    PathBuf::from("markdown")
}

fn default_output() -> PathBuf {
    PathBuf::from("web/articles")
}

fn default_extension() -> String {
    String::from("md")
}

fn default_fallback_stem() -> String {
    DEFAULT_FALLBACK_STEM.to_string()
}

fn default_output_subdir() -> PathBuf {
    PathBuf::from(".")
}

fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig {
            name: "shitpost".into(),
            output_subdir: PathBuf::from("."),
        },
        CategoryConfig {
            name: "reviews".into(),
            output_subdir: PathBuf::from("reviews"),
        },
    ]
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            extension: default_extension(),
            fallback_stem: default_fallback_stem(),
            categories: default_categories(),
            config_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Reject category names that are not a single plain directory name
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in &self.categories {
            let name = category.name.as_str();
            let reason = if name.is_empty() {
                "name cannot be empty"
            } else if name != name.trim() {
                "name cannot start or end with whitespace"
            } else if name.contains(['/', '\\']) || name == "." || name == ".." {
                "name must be a single directory name"
            } else {
                continue;
            };
            return Err(ConfigError::InvalidCategory(
                category.name.clone(),
                reason.into(),
            ));
        }
        Ok(())
    }

    /// Get the input directory, resolved relative to config file
    pub fn input_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.input)
    }

    /// Get the base output directory, resolved relative to config file
    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.output)
    }

    /// Extension with a leading dot, as matched against file names
    pub fn dotted_extension(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }

    /// Input and output directory of every category, in processing order
    pub fn category_dirs(&self) -> Vec<CategoryDirs> {
        let input = self.input_dir();
        let output = self.output_dir();
        self.categories
            .iter()
            .map(|category| CategoryDirs {
                name: category.name.clone(),
                input: input.join(&category.name),
                output: join_subdir(&output, &category.output_subdir),
            })
            .collect()
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(config_path) = &self.config_path {
            if let Some(parent) = config_path.parent() {
                parent.join(path)
            } else {
                path.to_path_buf()
            }
        } else {
            path.to_path_buf()
        }
    }
}

/// Join an output subdirectory, treating "." and "" as the base itself
fn join_subdir(base: &Path, subdir: &Path) -> PathBuf {
    if subdir.as_os_str().is_empty() || subdir == Path::new(".") {
        base.to_path_buf()
    } else {
        base.join(subdir)
    }
}
