//! Build command implementation.

use anyhow::{Context, Result};
use notesite_core::{Config, Note, SiteBuilder, SiteIndex};
use notesite_render::render_page;
use std::fs;

/// Build every article page and return the index of what was written
pub fn build_site(config: Config) -> Result<SiteIndex> {
    let output_dir = config.output_dir();

    // Create output directories up front, including for empty categories
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", output_dir))?;
    for dirs in config.category_dirs() {
        fs::create_dir_all(&dirs.output)
            .with_context(|| format!("Failed to create output directory {:?}", dirs.output))?;
    }

    let builder = SiteBuilder::new(config);
    let site_index = builder
        .build_with(|note| write_note_page(&note))
        .context("Failed to build site")?;

    if !site_index.collisions.is_empty() {
        tracing::warn!(
            "{} page(s) were overwritten by notes with the same output name",
            site_index.collisions.len()
        );
    }

    tracing::info!(
        "Markdown files processed successfully! {} pages written to {:?}",
        site_index.pages.len(),
        output_dir
    );

    Ok(site_index)
}

/// Render a single note page and write it to its output path
fn write_note_page(note: &Note) -> Result<()> {
    let html = render_page(&note.parsed)
        .with_context(|| format!("Failed to render {:?}", note.source_path))?;

    fs::write(&note.output_path, html)
        .with_context(|| format!("Failed to write {:?}", note.output_path))?;

    tracing::info!(
        "Generated HTML for '{}' -> '{}'",
        note.source_file_name(),
        note.output_path.display()
    );

    Ok(())
}
