//! Stand-in engine that strokes the bare cell lattice.
//!
//! It carves no passages; it exists so the preview binary has something to
//! draw without a real maze generator attached. Lines sit on half-pixel
//! offsets (`floor(i * cell_size) + 0.5`) so one-pixel strokes stay crisp.

use anyhow::{ensure, Result};
use log::info;

use crate::surface::{MazeEngine, Surface};

#[derive(Debug, Default)]
pub struct GridOutlineEngine;

impl GridOutlineEngine {
    pub fn new() -> Self {
        Self
    }

    fn stroke_lattice(
        &self,
        surface: &mut dyn Surface,
        origin: (f64, f64),
        rows: usize,
        cols: usize,
        cell_size: f64,
    ) -> Result<()> {
        ensure!(
            cell_size.is_finite() && cell_size > 0.0,
            "cell size {} cannot be drawn",
            cell_size
        );
        let (x0, y0) = origin;
        let width = cell_size * cols as f64;
        let height = cell_size * rows as f64;

        for x in 0..=cols {
            let px = x0 + (x as f64 * cell_size).floor() + 0.5;
            surface.stroke_line((px, y0), (px, y0 + height));
        }
        for y in 0..=rows {
            let py = y0 + (y as f64 * cell_size).floor() + 0.5;
            surface.stroke_line((x0, py), (x0 + width, py));
        }
        Ok(())
    }
}

impl MazeEngine for GridOutlineEngine {
    fn draw_maze(
        &mut self,
        surface: &mut dyn Surface,
        origin_x: f64,
        origin_y: f64,
        rows: usize,
        cols: usize,
        cell_size: f64,
    ) -> Result<()> {
        info!(
            "GridOutlineEngine: random maze outline, {} rows x {} cols, cell {}",
            rows, cols, cell_size
        );
        self.stroke_lattice(surface, (origin_x, origin_y), rows, cols, cell_size)
    }

    fn draw_single_stroke_maze(
        &mut self,
        surface: &mut dyn Surface,
        origin_x: f64,
        origin_y: f64,
        rows: usize,
        cols: usize,
        cell_size: f64,
    ) -> Result<()> {
        info!(
            "GridOutlineEngine: single-stroke outline, {} rows x {} cols, cell {}",
            rows, cols, cell_size
        );
        self.stroke_lattice(surface, (origin_x, origin_y), rows, cols, cell_size)
    }
}
