// src/validation/mod.rs

//! Pure validation of a grid configuration against a mode.
//!
//! Rules are applied in a fixed order and at most one message is kept per
//! field; a later rule for the same field replaces an earlier one:
//!
//! 1. `cellSize` must be a finite number above zero, and at most the cap.
//! 2. `cols` and `rows` must be finite integers above zero, and at most the cap.
//! 3. In single-stroke mode, the `mode` pseudo-field is flagged when both
//!    dimensions are odd, then (overriding) when both are at most 2.
//!
//! Caps and mode constraints attach to different fields, so they are reported
//! side by side rather than one hiding the other.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::ValidationLimits;
use crate::grid::{Field, GridConfiguration, Mode};

pub const MSG_POSITIVE_NUMBER: &str = "must be a positive number";
pub const MSG_POSITIVE_INTEGER: &str = "must be a positive integer";
pub const MSG_ODD_BY_ODD: &str =
    "single-stroke mazes need an even number of rows or columns";
pub const MSG_TOO_SMALL: &str = "grid is too small (make rows or columns at least 3)";

/// Per-field messages plus the overall verdict.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationResult {
    errors: BTreeMap<Field, String>,
    valid: bool,
}

impl ValidationResult {
    fn from_errors(errors: BTreeMap<Field, String>) -> Self {
        let valid = errors.is_empty();
        Self { errors, valid }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Only fields that failed appear here.
    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }
}

/// Validates with the default caps (cell size 200, cols/rows 400).
pub fn validate(config: &GridConfiguration, mode: Mode) -> ValidationResult {
    validate_with(config, mode, &ValidationLimits::default())
}

pub fn validate_with(
    config: &GridConfiguration,
    mode: Mode,
    limits: &ValidationLimits,
) -> ValidationResult {
    let mut errors = BTreeMap::new();
    let GridConfiguration {
        cell_size,
        cols,
        rows,
    } = *config;

    if !(cell_size.is_finite() && cell_size > 0.0) {
        errors.insert(Field::CellSize, MSG_POSITIVE_NUMBER.to_string());
    }
    if !is_positive_integer(cols) {
        errors.insert(Field::Cols, MSG_POSITIVE_INTEGER.to_string());
    }
    if !is_positive_integer(rows) {
        errors.insert(Field::Rows, MSG_POSITIVE_INTEGER.to_string());
    }

    if cell_size > limits.max_cell_size {
        errors.insert(Field::CellSize, too_large(limits.max_cell_size));
    }
    if cols > limits.max_cols {
        errors.insert(Field::Cols, too_large(limits.max_cols));
    }
    if rows > limits.max_rows {
        errors.insert(Field::Rows, too_large(limits.max_rows));
    }

    if mode == Mode::Single {
        if is_odd(rows) && is_odd(cols) {
            errors.insert(Field::Mode, MSG_ODD_BY_ODD.to_string());
        }
        if rows <= 2.0 && cols <= 2.0 {
            errors.insert(Field::Mode, MSG_TOO_SMALL.to_string());
        }
    }

    ValidationResult::from_errors(errors)
}

fn is_positive_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value > 0.0
}

// Remainder keeps the dividend's sign, so negatives and fractions never count as odd.
fn is_odd(value: f64) -> bool {
    value % 2.0 == 1.0
}

fn too_large(cap: f64) -> String {
    format!("too large (<= {})", cap)
}

#[cfg(test)]
mod tests;
