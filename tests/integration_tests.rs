use grade_tile::error::TileError;
use grade_tile::parser::{parse_config, parse_response};
use grade_tile::render::{Rendered, render};
use grade_tile::tile::{RawConfig, resolve};

#[test]
fn test_full_pipeline() {
    let config = parse_config(include_bytes!("fixtures/tile_config.json"))
        .expect("Failed to parse config");
    let response = parse_response(include_bytes!("fixtures/query_response.json"))
        .expect("Failed to parse response");

    let Rendered { measurement, view } = render(&config, &response).expect("Failed to render");

    assert_eq!(measurement.measure, "course_grades.average_score");
    assert!(!measurement.substituted);

    assert_eq!(view.glyph.letter, "B");
    assert_eq!(view.glyph.color, "#3366CC");
    assert_eq!(view.glyph.font_size, 48.0);

    let title = view.title.expect("title should be shown");
    assert_eq!(title.text, "Course Average");
    assert_eq!(title.color, "#282828");

    assert_eq!(view.subtitle.expect("subtitle should be shown").text, "Score: 85.3");
    assert_eq!(view.ring.expect("ring should be shown").color, "#3366CC");
}

#[test]
fn test_pipeline_without_measures() {
    let response = parse_response(include_bytes!("fixtures/no_measures.json"))
        .expect("Failed to parse response");

    let result = render(&RawConfig::default(), &response);
    assert!(matches!(result, Err(TileError::InsufficientData)));
}

#[test]
fn test_fixture_config_resolves_idempotently() {
    let config = parse_config(include_bytes!("fixtures/tile_config.json")).unwrap();
    let once = resolve(&config);
    assert_eq!(resolve(&RawConfig::from(&once)), once);
    assert_eq!(once.palette.a, "#00AA00");
}
