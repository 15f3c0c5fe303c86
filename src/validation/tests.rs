// src/validation/tests.rs

use super::*;

fn grid(cell_size: f64, cols: f64, rows: f64) -> GridConfiguration {
    GridConfiguration::new(cell_size, cols, rows)
}

#[test_log::test]
fn in_range_random_configurations_are_valid() {
    for cell_size in [0.5, 1.0, 20.0, 199.9, 200.0] {
        for cols in [1.0, 2.0, 15.0, 399.0, 400.0] {
            for rows in [1.0, 3.0, 10.0, 400.0] {
                let result = validate(&grid(cell_size, cols, rows), Mode::Random);
                assert!(result.is_valid(), "{} {} {}", cell_size, cols, rows);
                assert!(result.errors().is_empty());
            }
        }
    }
}

#[test_log::test]
fn defaults_are_valid_in_both_modes() {
    let defaults = grid(20.0, 15.0, 10.0);
    assert!(validate(&defaults, Mode::Random).is_valid());
    assert!(validate(&defaults, Mode::Single).is_valid());
}

#[test_log::test]
fn cell_size_must_be_positive_and_finite() {
    for bad in [0.0, -1.0, f64::NAN, f64::NEG_INFINITY] {
        let result = validate(&grid(bad, 15.0, 10.0), Mode::Random);
        assert!(!result.is_valid());
        assert_eq!(result.error(Field::CellSize), Some(MSG_POSITIVE_NUMBER));
        assert_eq!(result.errors().len(), 1);
    }
}

#[test_log::test]
fn too_large_replaces_the_positivity_message() {
    // Infinity is both non-finite and above the cap; the cap message wins.
    let result = validate(&grid(f64::INFINITY, 15.0, 10.0), Mode::Random);
    assert_eq!(result.error(Field::CellSize), Some("too large (<= 200)"));

    let result = validate(&grid(200.5, 15.0, 10.0), Mode::Random);
    assert_eq!(result.error(Field::CellSize), Some("too large (<= 200)"));
}

#[test_log::test]
fn cols_and_rows_must_be_positive_integers() {
    for bad in [0.0, -3.0, 2.5, f64::NAN] {
        let result = validate(&grid(20.0, bad, bad), Mode::Random);
        assert_eq!(result.error(Field::Cols), Some(MSG_POSITIVE_INTEGER));
        assert_eq!(result.error(Field::Rows), Some(MSG_POSITIVE_INTEGER));
        assert_eq!(result.error(Field::CellSize), None);
    }
}

#[test_log::test]
fn cols_and_rows_are_capped() {
    let result = validate(&grid(20.0, 401.0, 1000.0), Mode::Random);
    assert_eq!(result.error(Field::Cols), Some("too large (<= 400)"));
    assert_eq!(result.error(Field::Rows), Some("too large (<= 400)"));
}

#[test_log::test]
fn custom_limits_are_honoured() {
    let limits = ValidationLimits {
        max_cell_size: 50.0,
        max_cols: 32.0,
        max_rows: 24.0,
    };
    let result = validate_with(&grid(60.0, 33.0, 24.0), Mode::Random, &limits);
    assert_eq!(result.error(Field::CellSize), Some("too large (<= 50)"));
    assert_eq!(result.error(Field::Cols), Some("too large (<= 32)"));
    assert_eq!(result.error(Field::Rows), None);
}

#[test_log::test]
fn random_mode_never_reports_a_mode_error() {
    for (cols, rows) in [(9.0, 9.0), (1.0, 1.0), (2.0, 2.0), (3.0, 1.0)] {
        let result = validate(&grid(20.0, cols, rows), Mode::Random);
        assert_eq!(result.error(Field::Mode), None);
    }
}

#[test_log::test]
fn single_mode_rejects_odd_by_odd() {
    let result = validate(&grid(20.0, 9.0, 9.0), Mode::Single);
    assert!(!result.is_valid());
    assert_eq!(result.error(Field::Mode), Some(MSG_ODD_BY_ODD));
    assert_eq!(result.errors().len(), 1);
}

#[test_log::test]
fn single_mode_rejects_tiny_grids() {
    let result = validate(&grid(20.0, 2.0, 2.0), Mode::Single);
    assert_eq!(result.error(Field::Mode), Some(MSG_TOO_SMALL));
}

#[test_log::test]
fn too_small_wins_when_both_mode_checks_fire() {
    let result = validate(&grid(20.0, 1.0, 1.0), Mode::Single);
    assert_eq!(result.error(Field::Mode), Some(MSG_TOO_SMALL));
}

#[test_log::test]
fn single_mode_flags_exactly_parity_or_size() {
    for cols in 1..=8 {
        for rows in 1..=8 {
            let result = validate(&grid(10.0, f64::from(cols), f64::from(rows)), Mode::Single);
            let expected = (cols % 2 == 1 && rows % 2 == 1) || (cols <= 2 && rows <= 2);
            assert_eq!(
                result.error(Field::Mode).is_some(),
                expected,
                "cols {} rows {}",
                cols,
                rows
            );
            assert_eq!(result.is_valid(), !expected);
        }
    }
}

#[test_log::test]
fn mode_error_is_reported_alongside_field_errors() {
    // -1 is not odd under remainder semantics, but both are <= 2.
    let result = validate(&grid(20.0, -1.0, 2.0), Mode::Single);
    assert_eq!(result.error(Field::Cols), Some(MSG_POSITIVE_INTEGER));
    assert_eq!(result.error(Field::Mode), Some(MSG_TOO_SMALL));

    let result = validate(&grid(20.0, 401.0, 401.0), Mode::Single);
    assert_eq!(result.error(Field::Cols), Some("too large (<= 400)"));
    assert_eq!(result.error(Field::Mode), Some(MSG_ODD_BY_ODD));
}

#[test_log::test]
fn fractional_dimensions_are_never_odd() {
    let result = validate(&grid(20.0, 3.5, 5.0), Mode::Single);
    assert_eq!(result.error(Field::Mode), None);
    assert_eq!(result.error(Field::Cols), Some(MSG_POSITIVE_INTEGER));
}

#[test_log::test]
fn validate_is_idempotent() {
    let config = grid(f64::NAN, 9.0, 9.0);
    let first = validate(&config, Mode::Single);
    let second = validate(&config, Mode::Single);
    assert_eq!(first, second);
}

#[test_log::test]
fn result_serializes_with_field_keys() {
    let result = validate(&grid(0.0, 15.0, 10.0), Mode::Random);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"]["cellSize"], MSG_POSITIVE_NUMBER);
    assert!(json["errors"].get("cols").is_none());
}
