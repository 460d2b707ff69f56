//! Convert command: render one note to stdout.

use anyhow::{Context, Result};
use notesite_core::{convert_note, Config, OutputName};
use notesite_render::render_page;
use std::fs;
use std::path::Path;

pub fn convert_note_file(config: &Config, path: &Path) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

    let parsed = convert_note(&content);
    let name = OutputName::from_title(parsed.title.as_deref(), &config.fallback_stem);
    let html = render_page(&parsed).with_context(|| format!("Failed to render {:?}", path))?;

    tracing::info!("{:?} would be written as {}", path, name);
    println!("{}", html);

    Ok(())
}
