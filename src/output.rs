//! Output formatting and persistence for rendered tiles.
//!
//! Supports pretty-printing, JSON serialization, and CSV append.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::record::RenderRecord;
use crate::render::TileView;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Logs a tile view using Rust's debug pretty-print format.
pub fn print_pretty(view: &TileView) {
    debug!("{:#?}", view);
    info!(
        title = view.title.as_ref().map(|t| t.text.as_str()).unwrap_or(""),
        letter = view.glyph.letter,
        color = %view.glyph.color,
        subtitle = view.subtitle.as_ref().map(|s| s.text.as_str()).unwrap_or(""),
        "Grade tile"
    );
}

/// Logs any serializable value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Appends a [`RenderRecord`] to the render history at `path`.
///
/// The header row is only written when the file is new or empty, so repeated
/// renders build one continuous table.
pub fn append_record(path: impl AsRef<Path>, record: &RenderRecord) -> Result<()> {
    let path = path.as_ref();
    let needs_header = std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    debug!(path = %path.display(), needs_header, "Appending render record");

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open render history {}", path.display()))?;

    let mut writer = WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}
