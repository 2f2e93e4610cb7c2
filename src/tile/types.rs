//! Data types used by the resolve/classify pipeline.

use serde::{Deserialize, Deserializer, Serialize};

use crate::tile::options::*;

/// The five grade colors, keyed by coarse letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(rename = "a_color")]
    pub a: String,
    #[serde(rename = "b_color")]
    pub b: String,
    #[serde(rename = "c_color")]
    pub c: String,
    #[serde(rename = "d_color")]
    pub d: String,
    #[serde(rename = "f_color")]
    pub f: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            a: DEFAULT_A_COLOR.to_string(),
            b: DEFAULT_B_COLOR.to_string(),
            c: DEFAULT_C_COLOR.to_string(),
            d: DEFAULT_D_COLOR.to_string(),
            f: DEFAULT_F_COLOR.to_string(),
        }
    }
}

/// Slot of the [`Palette`] a grade band draws its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSlot {
    A,
    B,
    C,
    D,
    F,
}

impl Palette {
    pub fn color(&self, slot: PaletteSlot) -> &str {
        match slot {
            PaletteSlot::A => &self.a,
            PaletteSlot::B => &self.b,
            PaletteSlot::C => &self.c,
            PaletteSlot::D => &self.d,
            PaletteSlot::F => &self.f,
        }
    }
}

/// Fully resolved tile configuration. Built once per render, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileConfig {
    pub title_text: String,
    pub subtitle_text: String,
    pub title_color: String,
    pub subtitle_color: String,
    pub show_numeric_value: bool,
    pub font_size_grade: f64,
    pub font_size_title: f64,
    pub ring_size: f64,
    pub ring_thickness: f64,
    #[serde(flatten)]
    pub palette: Palette,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            title_text: DEFAULT_TITLE_TEXT.to_string(),
            subtitle_text: DEFAULT_SUBTITLE_TEXT.to_string(),
            title_color: DEFAULT_TITLE_COLOR.to_string(),
            subtitle_color: DEFAULT_SUBTITLE_COLOR.to_string(),
            show_numeric_value: DEFAULT_SHOW_NUMERIC_VALUE,
            font_size_grade: DEFAULT_FONT_SIZE_GRADE,
            font_size_title: DEFAULT_FONT_SIZE_TITLE,
            ring_size: DEFAULT_RING_SIZE,
            ring_thickness: DEFAULT_RING_THICKNESS,
            palette: Palette::default(),
        }
    }
}

/// Partial configuration as supplied by the host.
///
/// Absence is the unset signal for every option. An explicit `null` decodes to
/// what a host would display for it: empty text, `false` for the flag, and no
/// value (so the default) for sizes. Color options also treat `null` and `""`
/// as unset. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(default, deserialize_with = "text_or_empty", skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
    #[serde(default, deserialize_with = "text_or_empty", skip_serializing_if = "Option::is_none")]
    pub subtitle_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_color: Option<String>,
    #[serde(default, deserialize_with = "flag_or_false", skip_serializing_if = "Option::is_none")]
    pub show_numeric_value: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size_grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size_title: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f_color: Option<String>,
}

// Only reached when the key is present; `null` still counts as set.
fn text_or_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

fn flag_or_false<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<bool>::deserialize(deserializer)?.unwrap_or(false)))
}

impl From<&TileConfig> for RawConfig {
    fn from(config: &TileConfig) -> Self {
        Self {
            title_text: Some(config.title_text.clone()),
            subtitle_text: Some(config.subtitle_text.clone()),
            title_color: Some(config.title_color.clone()),
            subtitle_color: Some(config.subtitle_color.clone()),
            show_numeric_value: Some(config.show_numeric_value),
            font_size_grade: Some(config.font_size_grade),
            font_size_title: Some(config.font_size_title),
            ring_size: Some(config.ring_size),
            ring_thickness: Some(config.ring_thickness),
            a_color: Some(config.palette.a.clone()),
            b_color: Some(config.palette.b.clone()),
            c_color: Some(config.palette.c.clone()),
            d_color: Some(config.palette.d.clone()),
            f_color: Some(config.palette.f.clone()),
        }
    }
}

/// Letter grade and the color it is drawn in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub letter: &'static str,
    pub color: String,
}
