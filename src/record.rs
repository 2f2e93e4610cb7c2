use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::TileError;
use crate::render::TileView;

/// One row of the render history. Failed renders carry the error columns.
#[derive(Debug, Default, Serialize)]
pub struct RenderRecord {
    pub timestamp: DateTime<Utc>,
    pub measure: Option<String>,
    pub value: Option<f64>,
    pub substituted: bool,
    pub letter: Option<String>,
    pub color: Option<String>,
    pub subtitle: Option<String>,

    // error tracking
    pub error_type: Option<String>,
    pub error_message: Option<String>,
}

impl RenderRecord {
    pub fn from_view(view: &TileView) -> Self {
        RenderRecord {
            timestamp: Utc::now(),
            value: Some(view.value),
            letter: Some(view.glyph.letter.to_string()),
            color: Some(view.glyph.color.clone()),
            subtitle: view.subtitle.as_ref().map(|s| s.text.clone()),
            ..Default::default()
        }
    }

    /// Create an error record with timestamp and error information
    pub fn from_error(error: &TileError) -> Self {
        RenderRecord {
            timestamp: Utc::now(),
            error_type: Some(error.kind().to_string()),
            error_message: Some(error.to_string()),
            ..Default::default()
        }
    }

    /// Set the measure the value was read from
    pub fn with_measure(mut self, measure: &str, substituted: bool) -> Self {
        self.measure = Some(measure.to_string());
        self.substituted = substituted;
        self
    }
}
