// src/scheduler/mod.rs

//! Debounced render scheduling.
//!
//! The scheduler is a two-state machine. `Idle` means nothing will be drawn
//! until the next change; `Armed` holds exactly one captured request and the
//! instant it becomes due. Arming always drops the previous timer first, so a
//! superseded request can never fire, and firing returns to `Idle` before the
//! request is handed out, so renders are never reordered.
//!
//! The scheduler does not own a clock or a thread. Hosts pass `now` in and
//! either poll [`RenderScheduler::poll`] until the deadline, or hold the
//! [`TimerHandle`] from arming and call [`RenderScheduler::fire`] from their
//! own timer callback.

use log::{debug, trace, warn};
use std::time::{Duration, Instant};

use crate::grid::{GridConfiguration, Mode};
use crate::validation::ValidationResult;

/// Default quiet period before an auto-preview render.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// The configuration and mode captured for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub config: GridConfiguration,
    pub mode: Mode,
}

impl RenderRequest {
    pub fn new(config: GridConfiguration, mode: Mode) -> Self {
        Self { config, mode }
    }
}

/// Identifies one armed timer. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerState {
    Idle,
    Armed {
        request: RenderRequest,
        deadline: Instant,
        timer: TimerHandle,
    },
}

/// Outcome of reporting a change to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleDecision {
    /// A render is pending behind this timer.
    Armed(TimerHandle),
    /// Auto-preview is off or the configuration is invalid; nothing is pending.
    Suppressed,
}

#[derive(Debug)]
pub struct RenderScheduler {
    state: SchedulerState,
    debounce: Duration,
    next_timer: u64,
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl RenderScheduler {
    pub fn new(debounce: Duration) -> Self {
        Self {
            state: SchedulerState::Idle,
            debounce,
            next_timer: 0,
        }
    }

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, SchedulerState::Armed { .. })
    }

    /// When the pending render becomes due, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            SchedulerState::Armed { deadline, .. } => Some(deadline),
            SchedulerState::Idle => None,
        }
    }

    /// Reacts to a parameter, mode or auto-preview change.
    ///
    /// Any pending timer is cancelled. A new one is armed only when
    /// auto-preview is on and the configuration is valid; otherwise the
    /// scheduler stays idle and the last drawn preview is left as it is.
    /// A debounce too long to represent as an `Instant` is never due.
    pub fn on_change(
        &mut self,
        auto_preview: bool,
        validation: &ValidationResult,
        request: RenderRequest,
        now: Instant,
    ) -> ScheduleDecision {
        self.cancel();
        if !auto_preview || !validation.is_valid() {
            debug!(
                "RenderScheduler: suppressed (auto_preview={}, valid={})",
                auto_preview,
                validation.is_valid()
            );
            return ScheduleDecision::Suppressed;
        }

        let Some(deadline) = now.checked_add(self.debounce) else {
            warn!(
                "RenderScheduler: debounce {:?} is out of range, render never due",
                self.debounce
            );
            return ScheduleDecision::Suppressed;
        };
        let timer = TimerHandle(self.next_timer);
        self.next_timer += 1;
        debug!(
            "RenderScheduler: armed {:?} for {:?} ({} mode)",
            timer, self.debounce, request.mode
        );
        self.state = SchedulerState::Armed {
            request,
            deadline,
            timer,
        };
        ScheduleDecision::Armed(timer)
    }

    /// Returns the captured request once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<RenderRequest> {
        match self.state {
            SchedulerState::Armed { deadline, .. } if now >= deadline => self.take_pending(),
            SchedulerState::Armed { deadline, .. } => {
                trace!(
                    "RenderScheduler: {:?} until deadline",
                    deadline.saturating_duration_since(now)
                );
                None
            }
            SchedulerState::Idle => None,
        }
    }

    /// Fires the timer identified by `timer`. Superseded or cancelled handles
    /// return `None`.
    pub fn fire(&mut self, timer: TimerHandle) -> Option<RenderRequest> {
        match self.state {
            SchedulerState::Armed { timer: live, .. } if live == timer => self.take_pending(),
            _ => {
                trace!("RenderScheduler: ignoring stale {:?}", timer);
                None
            }
        }
    }

    /// Manual submission. A valid request is returned for immediate drawing
    /// and any pending timer is dropped so it cannot draw a second time.
    /// Invalid submissions change nothing.
    pub fn submit(
        &mut self,
        validation: &ValidationResult,
        request: RenderRequest,
    ) -> Option<RenderRequest> {
        if !validation.is_valid() {
            debug!("RenderScheduler: submit ignored, configuration invalid");
            return None;
        }
        self.cancel();
        Some(request)
    }

    /// Drops the pending timer. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match std::mem::replace(&mut self.state, SchedulerState::Idle) {
            SchedulerState::Armed { timer, .. } => {
                trace!("RenderScheduler: cancelled {:?}", timer);
                true
            }
            SchedulerState::Idle => false,
        }
    }

    fn take_pending(&mut self) -> Option<RenderRequest> {
        match std::mem::replace(&mut self.state, SchedulerState::Idle) {
            SchedulerState::Armed { request, timer, .. } => {
                debug!("RenderScheduler: {:?} fired", timer);
                Some(request)
            }
            SchedulerState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests;
