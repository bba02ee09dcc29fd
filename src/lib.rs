//! Falling Blocks - dodge the blocks raining down on your paddle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, difficulty)
//! - `renderer`: Backend-agnostic draw list built from a simulation snapshot
//! - `platform`: Fixed-step clock shared by hosts
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Window title shown by the native host
    pub const WINDOW_TITLE: &str = "Falling Blocks Game";

    /// Play area dimensions (pixels)
    pub const WINDOW_WIDTH: i32 = 600;
    pub const WINDOW_HEIGHT: i32 = 800;

    /// Player paddle defaults
    pub const PLAYER_WIDTH: i32 = 50;
    pub const PLAYER_HEIGHT: i32 = 20;
    /// Gap between the paddle and the bottom edge
    pub const PLAYER_MARGIN: i32 = 10;
    pub const PLAYER_START_X: i32 = 250;
    /// Horizontal pixels per tick while a direction key is held
    pub const MOVE_SPEED: i32 = 10;

    /// Blocks are square
    pub const BLOCK_SIZE: i32 = 20;
    pub const START_BLOCK_SPEED: i32 = 2;
    /// A block spawns with probability 1 / SPAWN_ONE_IN per tick
    pub const SPAWN_ONE_IN: u32 = 20;

    /// Ticks between level-ups. Fixed: not part of the tuning.
    pub const LEVEL_UP_TICKS: u32 = 50;
    pub const START_LEVEL: u32 = 1;

    /// Fixed simulation timestep (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 20;
    /// Maximum ticks the host runs per rendered frame
    pub const MAX_SUBSTEPS: u32 = 8;
}
