// src/surface/mock.rs

use anyhow::{bail, Result};

use crate::surface::{MazeEngine, Surface};

/// Which engine entry point was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    DrawMaze,
    DrawSingleStrokeMaze,
}

/// One recorded engine call, including the surface size seen at call time.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineCall {
    pub entry: EntryPoint,
    pub origin_x: f64,
    pub origin_y: f64,
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f64,
    pub surface_size: (u32, u32),
}

/// Engine double that records calls and can be told to fail.
#[derive(Debug, Default)]
pub struct MockEngine {
    calls: Vec<EngineCall>,
    failure: Option<String>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    pub fn last_call(&self) -> Option<&EngineCall> {
        self.calls.last()
    }

    /// Every following call fails with `message` until cleared.
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }

    pub fn clear_failure(&mut self) {
        self.failure = None;
    }

    #[allow(clippy::too_many_arguments)]
    fn record(
        &mut self,
        entry: EntryPoint,
        surface: &dyn Surface,
        origin_x: f64,
        origin_y: f64,
        rows: usize,
        cols: usize,
        cell_size: f64,
    ) -> Result<()> {
        self.calls.push(EngineCall {
            entry,
            origin_x,
            origin_y,
            rows,
            cols,
            cell_size,
            surface_size: surface.dimensions(),
        });
        if let Some(message) = &self.failure {
            bail!("{}", message);
        }
        Ok(())
    }
}

impl MazeEngine for MockEngine {
    fn draw_maze(
        &mut self,
        surface: &mut dyn Surface,
        origin_x: f64,
        origin_y: f64,
        rows: usize,
        cols: usize,
        cell_size: f64,
    ) -> Result<()> {
        self.record(EntryPoint::DrawMaze, surface, origin_x, origin_y, rows, cols, cell_size)
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
        self.record(
            EntryPoint::DrawSingleStrokeMaze,
            surface,
            origin_x,
            origin_y,
            rows,
            cols,
            cell_size,
        )
    }
}
