//! Headless in-memory surface.

use log::trace;

use crate::surface::Surface;

/// One stroked line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// Records its size and every stroke since the last resize.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    width_px: u32,
    height_px: u32,
    segments: Vec<Segment>,
    resize_count: u64,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// How many times the surface has been resized (one per render).
    pub fn resize_count(&self) -> u64 {
        self.resize_count
    }
}

impl Surface for HeadlessSurface {
    fn resize(&mut self, width_px: u32, height_px: u32) {
        trace!("HeadlessSurface: resize {}x{}", width_px, height_px);
        self.width_px = width_px;
        self.height_px = height_px;
        self.segments.clear();
        self.resize_count += 1;
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.segments.push(Segment { from, to });
    }
}
