//! Maze preview library crate.
//!
//! Keeps the grid parameters, validates them, and decides when the external
//! maze engine may draw a preview.

pub mod command;
pub mod config;
pub mod grid;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod surface;
pub mod validation;

pub use grid::{DisplayGeometry, Field, GridConfiguration, GridField, Mode, Preset};
pub use scheduler::{RenderRequest, RenderScheduler, ScheduleDecision, SchedulerState, TimerHandle};
pub use session::{PreviewSession, SessionEvent, SessionStatus};
pub use store::{ParameterStore, StoreChange};
pub use surface::{MazeEngine, RenderError, Surface, SurfaceAdapter};
pub use validation::{validate, validate_with, ValidationResult};
