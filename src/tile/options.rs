//! The closed set of options a grade tile recognizes.
//!
//! Every option has a statically known kind and default. The same constants
//! feed [`TileConfig::default`](crate::tile::types::TileConfig) and the
//! settings manifest a host registers for its settings UI.

use serde::Serialize;
use serde_json::{Value, json};

pub const DEFAULT_TITLE_TEXT: &str = "";
pub const DEFAULT_SUBTITLE_TEXT: &str = "";
pub const DEFAULT_TITLE_COLOR: &str = "#282828";
pub const DEFAULT_SUBTITLE_COLOR: &str = "#808080";
pub const DEFAULT_SHOW_NUMERIC_VALUE: bool = true;
pub const DEFAULT_FONT_SIZE_GRADE: f64 = 36.0;
pub const DEFAULT_FONT_SIZE_TITLE: f64 = 16.0;
pub const DEFAULT_RING_SIZE: f64 = 120.0;
pub const DEFAULT_RING_THICKNESS: f64 = 4.0;
pub const DEFAULT_A_COLOR: &str = "#00AA00";
pub const DEFAULT_B_COLOR: &str = "#88AA00";
pub const DEFAULT_C_COLOR: &str = "#AAAA00";
pub const DEFAULT_D_COLOR: &str = "#AA5500";
pub const DEFAULT_F_COLOR: &str = "#AA0000";

/// How an option is edited and how its unset state is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    Text,
    Color,
    Boolean,
    Number,
}

impl OptionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Text => "text",
            OptionKind::Color => "color",
            OptionKind::Boolean => "boolean",
            OptionKind::Number => "number",
        }
    }

    /// Whether a JSON value has the shape this kind accepts. `null` always does.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            OptionKind::Text | OptionKind::Color => value.is_string() || value.is_null(),
            OptionKind::Boolean => value.is_boolean() || value.is_null(),
            OptionKind::Number => value.is_number() || value.is_null(),
        }
    }
}

/// A recognized configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    TitleText,
    SubtitleText,
    TitleColor,
    SubtitleColor,
    ShowNumericValue,
    FontSizeGrade,
    FontSizeTitle,
    RingSize,
    RingThickness,
    AColor,
    BColor,
    CColor,
    DColor,
    FColor,
}

impl OptionKey {
    /// All options, in settings-panel order.
    pub const ALL: [OptionKey; 14] = [
        OptionKey::TitleText,
        OptionKey::SubtitleText,
        OptionKey::TitleColor,
        OptionKey::SubtitleColor,
        OptionKey::ShowNumericValue,
        OptionKey::FontSizeGrade,
        OptionKey::FontSizeTitle,
        OptionKey::RingSize,
        OptionKey::RingThickness,
        OptionKey::AColor,
        OptionKey::BColor,
        OptionKey::CColor,
        OptionKey::DColor,
        OptionKey::FColor,
    ];

    /// The key as it appears in the host's configuration mapping.
    pub fn name(self) -> &'static str {
        match self {
            OptionKey::TitleText => "title_text",
            OptionKey::SubtitleText => "subtitle_text",
            OptionKey::TitleColor => "title_color",
            OptionKey::SubtitleColor => "subtitle_color",
            OptionKey::ShowNumericValue => "show_numeric_value",
            OptionKey::FontSizeGrade => "font_size_grade",
            OptionKey::FontSizeTitle => "font_size_title",
            OptionKey::RingSize => "ring_size",
            OptionKey::RingThickness => "ring_thickness",
            OptionKey::AColor => "a_color",
            OptionKey::BColor => "b_color",
            OptionKey::CColor => "c_color",
            OptionKey::DColor => "d_color",
            OptionKey::FColor => "f_color",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OptionKey::TitleText => "Title Text",
            OptionKey::SubtitleText => "Subtitle Text",
            OptionKey::TitleColor => "Title Color",
            OptionKey::SubtitleColor => "Subtitle Color",
            OptionKey::ShowNumericValue => "Show Numeric Value",
            OptionKey::FontSizeGrade => "Grade Font Size",
            OptionKey::FontSizeTitle => "Title Font Size",
            OptionKey::RingSize => "Ring Size",
            OptionKey::RingThickness => "Ring Thickness",
            OptionKey::AColor => "A Color",
            OptionKey::BColor => "B Color",
            OptionKey::CColor => "C Color",
            OptionKey::DColor => "D Color",
            OptionKey::FColor => "F Color",
        }
    }

    pub fn kind(self) -> OptionKind {
        match self {
            OptionKey::TitleText | OptionKey::SubtitleText => OptionKind::Text,
            OptionKey::ShowNumericValue => OptionKind::Boolean,
            OptionKey::FontSizeGrade
            | OptionKey::FontSizeTitle
            | OptionKey::RingSize
            | OptionKey::RingThickness => OptionKind::Number,
            OptionKey::TitleColor
            | OptionKey::SubtitleColor
            | OptionKey::AColor
            | OptionKey::BColor
            | OptionKey::CColor
            | OptionKey::DColor
            | OptionKey::FColor => OptionKind::Color,
        }
    }

    /// Color options treat `null` and `""` as unset, not just absence.
    pub fn is_color(self) -> bool {
        self.kind() == OptionKind::Color
    }

    pub fn default_value(self) -> Value {
        match self {
            OptionKey::TitleText => json!(DEFAULT_TITLE_TEXT),
            OptionKey::SubtitleText => json!(DEFAULT_SUBTITLE_TEXT),
            OptionKey::TitleColor => json!(DEFAULT_TITLE_COLOR),
            OptionKey::SubtitleColor => json!(DEFAULT_SUBTITLE_COLOR),
            OptionKey::ShowNumericValue => json!(DEFAULT_SHOW_NUMERIC_VALUE),
            OptionKey::FontSizeGrade => json!(DEFAULT_FONT_SIZE_GRADE),
            OptionKey::FontSizeTitle => json!(DEFAULT_FONT_SIZE_TITLE),
            OptionKey::RingSize => json!(DEFAULT_RING_SIZE),
            OptionKey::RingThickness => json!(DEFAULT_RING_THICKNESS),
            OptionKey::AColor => json!(DEFAULT_A_COLOR),
            OptionKey::BColor => json!(DEFAULT_B_COLOR),
            OptionKey::CColor => json!(DEFAULT_C_COLOR),
            OptionKey::DColor => json!(DEFAULT_D_COLOR),
            OptionKey::FColor => json!(DEFAULT_F_COLOR),
        }
    }
}

/// One entry of the settings manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: OptionKind,
    pub default: Value,
}

/// Settings schema for every recognized option, in [`OptionKey::ALL`] order.
pub fn manifest() -> Vec<OptionSpec> {
    OptionKey::ALL
        .iter()
        .map(|&key| OptionSpec {
            name: key.name(),
            label: key.label(),
            kind: key.kind(),
            default: key.default_value(),
        })
        .collect()
}
