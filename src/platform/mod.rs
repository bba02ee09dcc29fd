//! Platform abstraction layer
//!
//! Hosts feed wall-clock frame time in and get whole simulation ticks out.

use std::time::Duration;

use crate::consts::MAX_SUBSTEPS;

/// Longest frame the clock will account for; anything above is dropped
const MAX_FRAME_SECS: f32 = 0.25;

/// Fixed timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(interval: Duration) -> Self {
        Self {
            step: interval.as_secs_f32(),
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps.max(1);
        self
    }

    /// Add `dt` seconds of frame time and return how many ticks to run now.
    ///
    /// At most `max_substeps` ticks are returned per call; backlog beyond
    /// that is discarded to prevent a spiral of death.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_SECS);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == self.max_substeps && self.accumulator >= self.step {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        ticks
    }

    /// Forget accumulated time (after a pause or a restart)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
