use tracing::debug;

use crate::tile::options::*;
use crate::tile::types::{Palette, RawConfig, TileConfig};

/// Merges a partial host configuration with the documented defaults.
///
/// Absent options take their default. Color options additionally treat an
/// empty string as unset. Everything else is kept as supplied: no coercion,
/// no clamping. Resolution is total and never touches `raw`.
pub fn resolve(raw: &RawConfig) -> TileConfig {
    let config = TileConfig {
        title_text: text(&raw.title_text, DEFAULT_TITLE_TEXT),
        subtitle_text: text(&raw.subtitle_text, DEFAULT_SUBTITLE_TEXT),
        title_color: color(&raw.title_color, DEFAULT_TITLE_COLOR),
        subtitle_color: color(&raw.subtitle_color, DEFAULT_SUBTITLE_COLOR),
        show_numeric_value: raw.show_numeric_value.unwrap_or(DEFAULT_SHOW_NUMERIC_VALUE),
        font_size_grade: raw.font_size_grade.unwrap_or(DEFAULT_FONT_SIZE_GRADE),
        font_size_title: raw.font_size_title.unwrap_or(DEFAULT_FONT_SIZE_TITLE),
        ring_size: raw.ring_size.unwrap_or(DEFAULT_RING_SIZE),
        ring_thickness: raw.ring_thickness.unwrap_or(DEFAULT_RING_THICKNESS),
        palette: Palette {
            a: color(&raw.a_color, DEFAULT_A_COLOR),
            b: color(&raw.b_color, DEFAULT_B_COLOR),
            c: color(&raw.c_color, DEFAULT_C_COLOR),
            d: color(&raw.d_color, DEFAULT_D_COLOR),
            f: color(&raw.f_color, DEFAULT_F_COLOR),
        },
    };

    debug!(?config, "Resolved tile configuration");
    config
}

fn text(value: &Option<String>, default: &str) -> String {
    value.as_deref().unwrap_or(default).to_string()
}

fn color(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_resolve_empty_yields_defaults() {
        let config = resolve(&RawConfig::default());
        assert_eq!(config, TileConfig::default());

        assert_eq!(config.title_text, "");
        assert_eq!(config.subtitle_text, "");
        assert_eq!(config.title_color, "#282828");
        assert_eq!(config.subtitle_color, "#808080");
        assert!(config.show_numeric_value);
        assert_eq!(config.font_size_grade, 36.0);
        assert_eq!(config.font_size_title, 16.0);
        assert_eq!(config.ring_size, 120.0);
        assert_eq!(config.ring_thickness, 4.0);
        assert_eq!(config.palette.a, "#00AA00");
        assert_eq!(config.palette.b, "#88AA00");
        assert_eq!(config.palette.c, "#AAAA00");
        assert_eq!(config.palette.d, "#AA5500");
        assert_eq!(config.palette.f, "#AA0000");
    }

    #[test]
    fn test_empty_color_falls_back_to_default() {
        let config = resolve(&raw(r#"{"a_color": ""}"#));
        assert_eq!(config.palette.a, "#00AA00");
    }

    #[test]
    fn test_null_color_falls_back_to_default() {
        let config = resolve(&raw(r##"{"title_color": null, "f_color": "#FF0000"}"##));
        assert_eq!(config.title_color, "#282828");
        assert_eq!(config.palette.f, "#FF0000");
    }

    #[test]
    fn test_empty_text_is_kept() {
        let config = resolve(&raw(r#"{"title_text": "", "subtitle_text": ""}"#));
        assert_eq!(config.title_text, "");
        assert_eq!(config.subtitle_text, "");
    }

    #[test]
    fn test_null_text_and_flag_are_not_defaulted() {
        let config = resolve(&raw(
            r#"{"subtitle_text": null, "show_numeric_value": null, "font_size_grade": null}"#,
        ));
        assert_eq!(config.subtitle_text, "");
        assert!(!config.show_numeric_value);
        assert_eq!(config.font_size_grade, 36.0);
    }

    #[test]
    fn test_values_pass_through_unclamped() {
        let config = resolve(&raw(
            r#"{"font_size_grade": -5, "ring_thickness": 0, "show_numeric_value": false}"#,
        ));
        assert_eq!(config.font_size_grade, -5.0);
        assert_eq!(config.ring_thickness, 0.0);
        assert!(!config.show_numeric_value);
    }

    #[test]
    fn test_resolve_does_not_touch_input() {
        let input = raw(r#"{"b_color": ""}"#);
        let before = input.clone();
        let _ = resolve(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let inputs = [
            "{}",
            r#"{"a_color": "", "title_text": "Quality"}"#,
            r##"{"subtitle_text": "Score", "show_numeric_value": false, "c_color": "#123456"}"##,
            r#"{"font_size_title": 0, "ring_size": -1, "d_color": null}"#,
        ];

        for input in inputs {
            let once = resolve(&raw(input));
            let twice = resolve(&RawConfig::from(&once));
            assert_eq!(once, twice, "not idempotent for {input}");
        }
    }
}
