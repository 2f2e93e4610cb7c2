//! Builds the view model a renderer draws for one tile.
//!
//! Configuration is resolved once per pass and threaded through; the
//! classification supplies both glyph and ring color.

use serde::Serialize;
use tracing::{debug, info};

use crate::dataset::{Measurement, QueryResponse};
use crate::error::Result;
use crate::tile::{RawConfig, TileConfig, classify, resolve};

/// A line of text with its styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRegion {
    pub text: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

/// The letter grade as drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Glyph {
    pub letter: &'static str,
    pub color: String,
    pub font_size: f64,
}

/// Decorative ring behind the glyph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ring {
    pub size: f64,
    pub thickness: f64,
    pub color: String,
}

/// Everything needed to draw one tile. Hidden regions are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileView {
    pub value: f64,
    pub title: Option<TextRegion>,
    pub glyph: Glyph,
    pub subtitle: Option<TextRegion>,
    pub ring: Option<Ring>,
}

/// Result of a full render pass: the measurement graded and the view built from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    pub measurement: Measurement,
    pub view: TileView,
}

/// Runs one render pass from raw host input.
///
/// # Errors
///
/// Fails with [`TileError::InsufficientData`](crate::error::TileError) when
/// the result has no measure, and with `InvalidInput` for non-numeric values.
pub fn render(raw: &RawConfig, response: &QueryResponse) -> Result<Rendered> {
    let measurement = Measurement::from_response(response)?;
    let config = resolve(raw);
    let view = render_value(&config, measurement.value)?;

    info!(
        measure = %measurement.measure,
        value = measurement.value,
        substituted = measurement.substituted,
        letter = view.glyph.letter,
        "Tile rendered"
    );
    Ok(Rendered { measurement, view })
}

/// Builds the view for an already resolved configuration.
pub fn render_value(config: &TileConfig, value: f64) -> Result<TileView> {
    let grade = classify(value, &config.palette)?;
    debug!(value, letter = grade.letter, color = %grade.color, "Value classified");

    let title = (!config.title_text.is_empty()).then(|| TextRegion {
        text: config.title_text.clone(),
        color: config.title_color.clone(),
        font_size: Some(config.font_size_title),
    });

    let subtitle = subtitle_text(config, value).map(|text| TextRegion {
        text,
        color: config.subtitle_color.clone(),
        font_size: None,
    });

    let ring = (config.ring_size > 0.0 && config.ring_thickness > 0.0).then(|| Ring {
        size: config.ring_size,
        thickness: config.ring_thickness,
        color: grade.color.clone(),
    });

    Ok(TileView {
        value,
        title,
        glyph: Glyph {
            letter: grade.letter,
            color: grade.color,
            font_size: config.font_size_grade,
        },
        subtitle,
        ring,
    })
}

/// Subtitle line, or `None` when there is no label to show.
///
/// The value is shown with one decimal, ties rounded away from zero.
pub fn subtitle_text(config: &TileConfig, value: f64) -> Option<String> {
    if config.subtitle_text.is_empty() {
        return None;
    }

    if config.show_numeric_value {
        // `{:.1}` alone rounds exact ties to even (85.25 -> 85.2).
        let rounded = (value * 10.0).round() / 10.0;
        Some(format!("{}: {:.1}", config.subtitle_text, rounded))
    } else {
        Some(config.subtitle_text.clone())
    }
}
