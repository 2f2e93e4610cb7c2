use crate::error::{Result, TileError};
use crate::tile::types::{Classification, Palette, PaletteSlot};

/// Grade bands, highest first. A value falls into the first band whose lower
/// bound it meets; anything below the last bound is an F.
///
/// | Range  | Grade | Color |
/// |--------|-------|-------|
/// | >= 97  | A+    | a     |
/// | >= 93  | A     | a     |
/// | >= 90  | A-    | a     |
/// | >= 87  | B+    | b     |
/// | >= 83  | B     | b     |
/// | >= 80  | B-    | b     |
/// | >= 77  | C+    | c     |
/// | >= 73  | C     | c     |
/// | >= 70  | C-    | c     |
/// | >= 67  | D+    | d     |
/// | >= 63  | D     | d     |
/// | >= 60  | D-    | d     |
/// | < 60   | F     | f     |
static BANDS: &[(f64, &str, PaletteSlot)] = &[
    (97.0, "A+", PaletteSlot::A),
    (93.0, "A", PaletteSlot::A),
    (90.0, "A-", PaletteSlot::A),
    (87.0, "B+", PaletteSlot::B),
    (83.0, "B", PaletteSlot::B),
    (80.0, "B-", PaletteSlot::B),
    (77.0, "C+", PaletteSlot::C),
    (73.0, "C", PaletteSlot::C),
    (70.0, "C-", PaletteSlot::C),
    (67.0, "D+", PaletteSlot::D),
    (63.0, "D", PaletteSlot::D),
    (60.0, "D-", PaletteSlot::D),
];

const FAILING: (&str, PaletteSlot) = ("F", PaletteSlot::F);

/// Converts a score into a letter grade and its palette color.
///
/// Scores outside 0–100 are graded like any other value.
///
/// # Errors
///
/// Returns [`TileError::InvalidInput`] for NaN, the one `f64` that is not a number.
pub fn classify(value: f64, palette: &Palette) -> Result<Classification> {
    if value.is_nan() {
        return Err(TileError::InvalidInput(
            "grade value must be a number, got NaN".to_string(),
        ));
    }

    let (letter, slot) = BANDS
        .iter()
        .find(|(lower, _, _)| value >= *lower)
        .map(|&(_, letter, slot)| (letter, slot))
        .unwrap_or(FAILING);

    Ok(Classification {
        letter,
        color: palette.color(slot).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(value: f64) -> &'static str {
        classify(value, &Palette::default()).unwrap().letter
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(letter(100.0), "A+");
        assert_eq!(letter(97.0), "A+");
        assert_eq!(letter(96.99), "A");
        assert_eq!(letter(93.0), "A");
        assert_eq!(letter(92.9), "A-");
        assert_eq!(letter(90.0), "A-");
        assert_eq!(letter(89.999), "B+");
        assert_eq!(letter(87.0), "B+");
        assert_eq!(letter(83.0), "B");
        assert_eq!(letter(80.0), "B-");
        assert_eq!(letter(79.9), "C+");
        assert_eq!(letter(77.0), "C+");
        assert_eq!(letter(73.0), "C");
        assert_eq!(letter(70.0), "C-");
        assert_eq!(letter(69.5), "D+");
        assert_eq!(letter(63.0), "D");
        assert_eq!(letter(60.0), "D-");
        assert_eq!(letter(59.9), "F");
        assert_eq!(letter(0.0), "F");
    }

    #[test]
    fn test_modifier_does_not_change_color() {
        let palette = Palette::default();
        for value in [97.0, 95.0, 91.0] {
            assert_eq!(classify(value, &palette).unwrap().color, palette.a);
        }
        for value in [88.0, 85.0, 81.0] {
            assert_eq!(classify(value, &palette).unwrap().color, palette.b);
        }
        for value in [78.0, 75.0, 71.0] {
            assert_eq!(classify(value, &palette).unwrap().color, palette.c);
        }
        for value in [68.0, 65.0, 61.0] {
            assert_eq!(classify(value, &palette).unwrap().color, palette.d);
        }
    }

    #[test]
    fn test_literal_boundary_scenarios() {
        let palette = Palette::default();

        let b_plus = classify(89.999, &palette).unwrap();
        assert_eq!((b_plus.letter, b_plus.color.as_str()), ("B+", palette.b.as_str()));

        let a_minus = classify(90.0, &palette).unwrap();
        assert_eq!((a_minus.letter, a_minus.color.as_str()), ("A-", palette.a.as_str()));

        let f = classify(59.9, &palette).unwrap();
        assert_eq!((f.letter, f.color.as_str()), ("F", palette.f.as_str()));

        let a_plus = classify(100.0, &palette).unwrap();
        assert_eq!((a_plus.letter, a_plus.color.as_str()), ("A+", palette.a.as_str()));
    }

    #[test]
    fn test_out_of_range_values_still_classify() {
        assert_eq!(letter(-40.0), "F");
        assert_eq!(letter(f64::NEG_INFINITY), "F");
        assert_eq!(letter(250.0), "A+");
        assert_eq!(letter(f64::INFINITY), "A+");
    }

    #[test]
    fn test_custom_palette_is_used() {
        let palette = Palette {
            f: "crimson".to_string(),
            ..Palette::default()
        };
        assert_eq!(classify(12.0, &palette).unwrap().color, "crimson");
    }

    #[test]
    fn test_nan_is_invalid_input() {
        let result = classify(f64::NAN, &Palette::default());
        assert!(matches!(result, Err(TileError::InvalidInput(_))));
    }
}
