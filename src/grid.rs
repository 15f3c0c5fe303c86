// src/grid.rs

//! Core value types: the grid configuration, the maze mode, field names,
//! size presets and the derived pixel geometry.
//!
//! Numeric fields are plain `f64` on purpose: the store keeps whatever the
//! user typed (after numeric coercion), including `NaN`, negatives and
//! fractions, and leaves the judgement to the validator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three numeric parameters of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfiguration {
    /// Width and height of one cell in pixels.
    pub cell_size: f64,
    /// Number of cells across.
    pub cols: f64,
    /// Number of cells down.
    pub rows: f64,
}

impl GridConfiguration {
    pub const fn new(cell_size: f64, cols: f64, rows: f64) -> Self {
        Self {
            cell_size,
            cols,
            rows,
        }
    }

    pub fn get(&self, field: GridField) -> f64 {
        match field {
            GridField::CellSize => self.cell_size,
            GridField::Cols => self.cols,
            GridField::Rows => self.rows,
        }
    }

    pub fn set(&mut self, field: GridField, value: f64) {
        match field {
            GridField::CellSize => self.cell_size = value,
            GridField::Cols => self.cols = value,
            GridField::Rows => self.rows = value,
        }
    }

    /// Pixel extent of the grid. Always computable, even for invalid values.
    pub fn geometry(&self) -> DisplayGeometry {
        DisplayGeometry {
            width_px: self.cell_size * self.cols,
            height_px: self.cell_size * self.rows,
        }
    }
}

/// Maze generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Spanning-tree maze drawn by the standard entry point.
    #[default]
    Random,
    /// Maze traceable in one continuous stroke.
    Single,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Random => "random",
            Mode::Single => "single",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Mode::Random),
            "single" | "single-stroke" => Ok(Mode::Single),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

/// A numeric field the user can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GridField {
    CellSize,
    Cols,
    Rows,
}

impl GridField {
    pub const ALL: [GridField; 3] = [GridField::CellSize, GridField::Cols, GridField::Rows];
}

/// Any field a validation message can be attached to. `Mode` is a pseudo-field
/// carrying the single-stroke constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CellSize,
    Cols,
    Rows,
    Mode,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::CellSize => "cellSize",
            Field::Cols => "cols",
            Field::Rows => "rows",
            Field::Mode => "mode",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GridField> for Field {
    fn from(field: GridField) -> Self {
        match field {
            GridField::CellSize => Field::CellSize,
            GridField::Cols => Field::Cols,
            GridField::Rows => Field::Rows,
        }
    }
}

/// A quick size choice that sets columns and rows together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Preset {
    pub cols: u32,
    pub rows: u32,
}

impl Preset {
    pub const fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// `"{cols}x{rows}"`, e.g. `"30x20"`.
    pub fn label(&self) -> String {
        format!("{}x{}", self.cols, self.rows)
    }
}

/// Pixel size of the surface for a configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayGeometry {
    pub width_px: f64,
    pub height_px: f64,
}

impl DisplayGeometry {
    /// Human readable caption, e.g. `"300 x 200 px"`.
    pub fn caption(&self) -> String {
        format!("{} x {} px", format_number(self.width_px), format_number(self.height_px))
    }
}

impl fmt::Display for DisplayGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.caption())
    }
}

fn format_number(value: f64) -> String {
    if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        value.to_string()
    }
}

/// Converts user-typed text to a number the way a browser number field does.
///
/// Whitespace is trimmed, empty input is `0`, decimal and exponent notation
/// parse normally, `0x`/`0o`/`0b` prefixes read unsigned integers, and
/// `Infinity` may carry a sign. Everything else is `NaN`.
pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(value) = parse_radix_literal(text) {
        return value;
    }
    // Rust's float parser also accepts "inf" and "nan"; those are not numbers here.
    let decimal_chars = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal_chars {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}
