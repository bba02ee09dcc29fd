//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, aabb_overlap};
pub use state::{
    Block, BlockColor, BlockView, GameOverChoice, GamePhase, GameState, Key, Player, Snapshot,
};
pub use tick::{TickOutcome, tick};
