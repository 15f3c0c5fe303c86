// src/store/mod.rs

//! The parameter store: the authoritative grid configuration and mode.
//!
//! Edits are never rejected here. Whatever number the user's text coerces to
//! is stored as-is so the form can keep showing it next to the validator's
//! message. Derived values (validity, geometry) are not held by the store.

use bitflags::bitflags;
use log::debug;

use crate::grid::{coerce_number, GridConfiguration, GridField, Mode, Preset};

bitflags! {
    /// Which parts of the store a mutation touched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StoreChange: u8 {
        const CELL_SIZE = 1 << 0;
        const COLS      = 1 << 1;
        const ROWS      = 1 << 2;
        const MODE      = 1 << 3;
        const GRID = Self::CELL_SIZE.bits() | Self::COLS.bits() | Self::ROWS.bits();
    }
}

impl From<GridField> for StoreChange {
    fn from(field: GridField) -> Self {
        match field {
            GridField::CellSize => StoreChange::CELL_SIZE,
            GridField::Cols => StoreChange::COLS,
            GridField::Rows => StoreChange::ROWS,
        }
    }
}

/// Holds the current configuration and mode.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    config: GridConfiguration,
    mode: Mode,
    defaults: GridConfiguration,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(GridConfiguration::new(20.0, 15.0, 10.0))
    }
}

impl ParameterStore {
    /// Creates a store holding `defaults` in `random` mode.
    pub fn new(defaults: GridConfiguration) -> Self {
        Self {
            config: defaults,
            mode: Mode::Random,
            defaults,
        }
    }

    pub fn config(&self) -> GridConfiguration {
        self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Stores the numeric coercion of `raw`. Always counts as a change, even
    /// when the value is unchanged, matching a form that re-submits on input.
    pub fn set_field(&mut self, field: GridField, raw: &str) -> StoreChange {
        let value = coerce_number(raw);
        debug!("ParameterStore: {:?} <- {:?} (coerced {})", field, raw, value);
        self.set_value(field, value)
    }

    /// Stores an already numeric value, e.g. from a slider.
    pub fn set_value(&mut self, field: GridField, value: f64) -> StoreChange {
        self.config.set(field, value);
        StoreChange::from(field)
    }

    /// Replaces cols and rows in a single mutation.
    pub fn apply_preset(&mut self, preset: Preset) -> StoreChange {
        debug!("ParameterStore: applying preset {}", preset.label());
        self.config = GridConfiguration {
            cols: f64::from(preset.cols),
            rows: f64::from(preset.rows),
            ..self.config
        };
        StoreChange::COLS | StoreChange::ROWS
    }

    /// Selects a mode. Re-selecting the current mode is not a change.
    pub fn set_mode(&mut self, mode: Mode) -> StoreChange {
        if self.mode == mode {
            return StoreChange::empty();
        }
        debug!("ParameterStore: mode {} -> {}", self.mode, mode);
        self.mode = mode;
        StoreChange::MODE
    }

    /// Restores the defaults and `random` mode together.
    pub fn reset(&mut self) -> StoreChange {
        debug!("ParameterStore: reset to defaults");
        self.config = self.defaults;
        self.mode = Mode::Random;
        StoreChange::all()
    }
}
