// src/surface/mod.rs
//! Drawing surface and maze engine boundary.
//!
//! - `Surface`: a resizable pixel target (headless in this crate).
//! - `MazeEngine`: the external generator with its two entry points.
//! - `SurfaceAdapter`: sizes the surface for a request, then dispatches to the
//!   engine entry point selected by the request's mode.
//!
//! The engine receives the surface explicitly instead of discovering "the
//! most recently sized surface" on its own.

pub mod headless;
pub mod mock;
pub mod outline;

pub use headless::{HeadlessSurface, Segment};
pub use mock::{EngineCall, EntryPoint, MockEngine};
pub use outline::GridOutlineEngine;

use log::{debug, info};
use std::fmt;

use crate::grid::Mode;
use crate::scheduler::RenderRequest;

/// A pixel target the engine draws on.
pub trait Surface {
    /// Sets the pixel size. Resizing discards everything drawn so far.
    fn resize(&mut self, width_px: u32, height_px: u32);

    /// Current `(width_px, height_px)`.
    fn dimensions(&self) -> (u32, u32);

    /// Strokes a straight line between two points in surface coordinates.
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64));
}

/// The external maze generator.
///
/// Both entry points draw synchronously and completely before returning.
/// Origins are in pixels; `rows` and `cols` count cells.
pub trait MazeEngine {
    fn draw_maze(
        &mut self,
        surface: &mut dyn Surface,
        origin_x: f64,
        origin_y: f64,
        rows: usize,
        cols: usize,
        cell_size: f64,
    ) -> anyhow::Result<()>;

    fn draw_single_stroke_maze(
        &mut self,
        surface: &mut dyn Surface,
        origin_x: f64,
        origin_y: f64,
        rows: usize,
        cols: usize,
        cell_size: f64,
    ) -> anyhow::Result<()>;
}

/// Errors from a single render attempt. Never retried.
#[derive(Debug)]
pub enum RenderError {
    /// The request cannot be expressed as a surface size and cell counts.
    InvalidRequest { reason: String },
    /// The engine failed while drawing.
    Engine(anyhow::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidRequest { reason } => write!(f, "invalid render request: {}", reason),
            RenderError::Engine(e) => write!(f, "maze engine failed: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::InvalidRequest { .. } => None,
            RenderError::Engine(e) => Some(&**e),
        }
    }
}

/// Sizes the surface and forwards draw calls. Makes no scheduling decisions.
pub struct SurfaceAdapter<'a> {
    pub surface: &'a mut dyn Surface,
    pub engine: &'a mut dyn MazeEngine,
}

impl<'a> SurfaceAdapter<'a> {
    pub fn new(surface: &'a mut dyn Surface, engine: &'a mut dyn MazeEngine) -> Self {
        Self { surface, engine }
    }

    /// Draws `request`, returning the surface size that was set.
    ///
    /// The surface is resized before the engine runs, on every call, so its
    /// dimensions always belong to the configuration being drawn.
    pub fn render(&mut self, request: &RenderRequest) -> Result<(u32, u32), RenderError> {
        let config = request.config;
        let geometry = config.geometry();
        let width_px = pixel_extent(geometry.width_px)?;
        let height_px = pixel_extent(geometry.height_px)?;
        let rows = cell_count(config.rows)?;
        let cols = cell_count(config.cols)?;

        debug!("SurfaceAdapter: resizing surface to {}x{}", width_px, height_px);
        self.surface.resize(width_px, height_px);

        info!(
            "SurfaceAdapter: drawing {} maze {}x{} cells at {}px",
            request.mode, cols, rows, config.cell_size
        );
        let drawn = match request.mode {
            Mode::Single => self.engine.draw_single_stroke_maze(
                &mut *self.surface,
                0.0,
                0.0,
                rows,
                cols,
                config.cell_size,
            ),
            Mode::Random => {
                self.engine
                    .draw_maze(&mut *self.surface, 0.0, 0.0, rows, cols, config.cell_size)
            }
        };
        drawn.map_err(RenderError::Engine)?;
        Ok((width_px, height_px))
    }
}

// Truncates toward zero, like assigning a fractional canvas dimension.
fn pixel_extent(value: f64) -> Result<u32, RenderError> {
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(RenderError::InvalidRequest {
            reason: format!("pixel extent {} out of range", value),
        });
    }
    Ok(value as u32)
}

fn cell_count(value: f64) -> Result<usize, RenderError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(RenderError::InvalidRequest {
            reason: format!("cell count {} is not a whole number", value),
        });
    }
    Ok(value as usize)
}
