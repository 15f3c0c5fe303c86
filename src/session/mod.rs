// src/session/mod.rs
//! Orchestrates the preview: applies user events to the parameter store,
//! re-validates, lets the render scheduler decide, and drives the surface
//! adapter when a render is due.
//!
//! Validation, geometry and the caption are recomputed on every read; the
//! session never caches them across mutations.

use anyhow::{Context, Result};
use log::{debug, info};
use std::time::{Duration, Instant};

use crate::config::{Config, ValidationLimits};
use crate::grid::{DisplayGeometry, GridConfiguration, GridField, Mode, Preset};
use crate::scheduler::{RenderRequest, RenderScheduler, ScheduleDecision, SchedulerState};
use crate::store::{ParameterStore, StoreChange};
use crate::surface::SurfaceAdapter;
use crate::validation::{validate_with, ValidationResult};

/// Represents the status of the session after processing an event.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SessionStatus {
    /// Keep processing events.
    Running,
    /// The user asked to quit.
    Shutdown,
}

/// Everything a user can do to the preview form.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Typed text for a numeric field.
    SetField { field: GridField, raw: String },
    /// A numeric value from a slider-style control.
    SetValue { field: GridField, value: f64 },
    ApplyPreset(Preset),
    SetMode(Mode),
    SetAutoPreview(bool),
    /// Manual "generate" request.
    Submit,
    Reset,
    Quit,
}

pub struct PreviewSession<'a> {
    store: ParameterStore,
    scheduler: RenderScheduler,
    limits: ValidationLimits,
    auto_preview: bool,
    renders: u64,
    pub adapter: SurfaceAdapter<'a>,
}

impl<'a> PreviewSession<'a> {
    /// Creates a session from `config`. Nothing is drawn or armed until the
    /// first event; call [`PreviewSession::start`] to schedule the initial
    /// auto-preview.
    pub fn new(config: &Config, adapter: SurfaceAdapter<'a>) -> Self {
        Self {
            store: ParameterStore::new(GridConfiguration::from(config.defaults)),
            scheduler: RenderScheduler::new(config.preview.debounce()),
            limits: config.limits,
            auto_preview: config.preview.auto_preview,
            renders: 0,
            adapter,
        }
    }

    /// Arms the initial auto-preview for the starting configuration.
    pub fn start(&mut self, now: Instant) -> ScheduleDecision {
        self.reschedule(now)
    }

    pub fn config(&self) -> GridConfiguration {
        self.store.config()
    }

    pub fn mode(&self) -> Mode {
        self.store.mode()
    }

    pub fn auto_preview(&self) -> bool {
        self.auto_preview
    }

    pub fn validation(&self) -> ValidationResult {
        validate_with(&self.store.config(), self.store.mode(), &self.limits)
    }

    pub fn geometry(&self) -> DisplayGeometry {
        self.store.config().geometry()
    }

    /// Pixel size caption, e.g. `"300 x 200 px"`. Shown even when invalid.
    pub fn caption(&self) -> String {
        self.geometry().caption()
    }

    pub fn scheduler_state(&self) -> &SchedulerState {
        self.scheduler.state()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Time left until the pending render, zero if overdue.
    pub fn time_until_render(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Number of renders handed to the surface adapter, failed ones included.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Applies one event.
    ///
    /// Errors come only from immediate renders (submit, reset); they are
    /// returned to the caller and not retried.
    pub fn handle_event(&mut self, event: SessionEvent, now: Instant) -> Result<SessionStatus> {
        debug!("PreviewSession: handling {:?}", event);
        match event {
            SessionEvent::SetField { field, raw } => {
                let change = self.store.set_field(field, &raw);
                self.after_change(change, now);
            }
            SessionEvent::SetValue { field, value } => {
                let change = self.store.set_value(field, value);
                self.after_change(change, now);
            }
            SessionEvent::ApplyPreset(preset) => {
                let change = self.store.apply_preset(preset);
                self.after_change(change, now);
            }
            SessionEvent::SetMode(mode) => {
                let change = self.store.set_mode(mode);
                self.after_change(change, now);
            }
            SessionEvent::SetAutoPreview(enabled) => {
                if self.auto_preview != enabled {
                    info!("PreviewSession: auto-preview {}", if enabled { "on" } else { "off" });
                    self.auto_preview = enabled;
                    self.reschedule(now);
                }
            }
            SessionEvent::Submit => {
                self.submit()?;
            }
            SessionEvent::Reset => {
                self.store.reset();
                // A timer armed before the reset must not draw the old values,
                // even when the defaults themselves fail validation.
                self.scheduler.cancel();
                if self.auto_preview {
                    self.submit().context("Failed to render defaults after reset")?;
                }
            }
            SessionEvent::Quit => {
                info!("PreviewSession: quit requested");
                self.scheduler.cancel();
                return Ok(SessionStatus::Shutdown);
            }
        }
        Ok(SessionStatus::Running)
    }

    /// Fires the pending render if its deadline has passed. Returns the
    /// request that was drawn.
    pub fn process_timers(&mut self, now: Instant) -> Result<Option<RenderRequest>> {
        let Some(request) = self.scheduler.poll(now) else {
            return Ok(None);
        };
        self.draw(request).context("Auto-preview render failed")?;
        Ok(Some(request))
    }

    /// Renders the current configuration immediately if it is valid.
    /// Returns whether anything was drawn.
    pub fn submit(&mut self) -> Result<bool> {
        let validation = self.validation();
        let request = self.current_request();
        match self.scheduler.submit(&validation, request) {
            Some(request) => {
                self.draw(request).context("Manual render failed")?;
                Ok(true)
            }
            None => {
                info!(
                    "PreviewSession: submit ignored, {} field(s) invalid",
                    validation.errors().len()
                );
                Ok(false)
            }
        }
    }

    fn current_request(&self) -> RenderRequest {
        RenderRequest::new(self.store.config(), self.store.mode())
    }

    fn after_change(&mut self, change: StoreChange, now: Instant) {
        if change.is_empty() {
            debug!("PreviewSession: no change");
            return;
        }
        debug!("PreviewSession: changed {:?}", change);
        self.reschedule(now);
    }

    fn reschedule(&mut self, now: Instant) -> ScheduleDecision {
        let validation = self.validation();
        let request = self.current_request();
        self.scheduler
            .on_change(self.auto_preview, &validation, request, now)
    }

    fn draw(&mut self, request: RenderRequest) -> Result<()> {
        self.renders += 1;
        let (width_px, height_px) = self.adapter.render(&request)?;
        info!(
            "PreviewSession: render #{} done, surface {}x{} ({} mode)",
            self.renders, width_px, height_px, request.mode
        );
        Ok(())
    }
}
