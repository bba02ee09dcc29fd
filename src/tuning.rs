//! Data-driven game balance
//!
//! Defaults reproduce the classic game. The difficulty rule itself
//! (`LEVEL_UP_TICKS`) is fixed and lives in `consts`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Geometry, speeds and timing used by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Play area width (pixels)
    pub window_width: i32,
    /// Play area height (pixels)
    pub window_height: i32,
    pub player_width: i32,
    pub player_height: i32,
    /// Gap between paddle bottom and the bottom edge
    pub player_margin: i32,
    /// Paddle left edge at start and after a restart
    pub player_start_x: i32,
    /// Pixels per tick while a direction is held
    pub move_speed: i32,
    /// Side length of every block
    pub block_size: i32,
    /// Fall speed given to blocks spawned at level 1
    pub start_block_speed: i32,
    /// One spawn in N ticks on average (0 disables spawning)
    pub spawn_one_in: u32,
    /// Simulation timestep in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_margin: PLAYER_MARGIN,
            player_start_x: PLAYER_START_X,
            move_speed: MOVE_SPEED,
            block_size: BLOCK_SIZE,
            start_block_speed: START_BLOCK_SPEED,
            spawn_one_in: SPAWN_ONE_IN,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON object. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject geometry the simulation cannot honour
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("move_speed", self.move_speed),
            ("block_size", self.block_size),
            ("start_block_speed", self.start_block_speed),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| *v <= 0) {
            return Err(invalid(format!("{name} must be positive, got {value}")));
        }
        if self.player_margin < 0 {
            return Err(invalid(format!(
                "player_margin must not be negative, got {}",
                self.player_margin
            )));
        }
        if self.player_width > self.window_width {
            return Err(invalid(format!(
                "player ({}px) is wider than the window ({}px)",
                self.player_width, self.window_width
            )));
        }
        if self.block_size > self.window_width {
            return Err(invalid(format!(
                "blocks ({}px) are wider than the window ({}px)",
                self.block_size, self.window_width
            )));
        }
        if self.player_height + self.player_margin > self.window_height {
            return Err(invalid(format!(
                "player ({}px + {}px margin) does not fit a {}px tall window",
                self.player_height, self.player_margin, self.window_height
            )));
        }
        if !(0..=self.player_max_x()).contains(&self.player_start_x) {
            return Err(invalid(format!(
                "player_start_x {} outside 0..={}",
                self.player_start_x,
                self.player_max_x()
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms must be positive".to_string()));
        }
        Ok(())
    }

    /// Right-most legal paddle position
    #[inline]
    pub fn player_max_x(&self) -> i32 {
        self.window_width - self.player_width
    }

    /// Paddle top edge (fixed for the whole game)
    #[inline]
    pub fn player_y(&self) -> i32 {
        self.window_height - self.player_height - self.player_margin
    }

    /// Right-most spawn position for a block's left edge
    #[inline]
    pub fn block_max_x(&self) -> i32 {
        self.window_width - self.block_size
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

fn invalid(reason: String) -> Error {
    log::warn!("Rejecting tuning: {}", reason);
    Error::InvalidTuning(reason)
}
