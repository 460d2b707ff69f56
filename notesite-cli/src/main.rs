//! # notesite CLI
//!
//! Command-line interface for the notesite article generator.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use notesite_core::Config;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "notesite.yml";

#[derive(Parser)]
#[command(name = "notesite")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Input directory holding one subdirectory per category
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Base output directory
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every note and write the article pages (default)
    Build,

    /// Render a single note to stdout without writing anything
    Convert {
        /// Note file to convert
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => commands::build_site(config).map(|_| ()),
        Commands::Convert { file } => commands::convert_note_file(&config, &file),
    }
}

/// Load the config file (explicit, or `notesite.yml` if present) and apply overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            read_config(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => {
            tracing::debug!("No config file; using built-in defaults");
            Config::default()
        }
    };

    if let Some(input) = &cli.input {
        config.paths.input = input.clone();
    }
    if let Some(output) = &cli.output {
        config.paths.output = output.clone();
    }

    Ok(config)
}

fn read_config(path: &Path) -> Result<Config> {
    tracing::debug!("Loading config from {:?}", path);
    Config::from_file(path).with_context(|| format!("Failed to load configuration {:?}", path))
}
