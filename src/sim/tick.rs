//! Fixed timestep simulation tick
//!
//! Order within a tick: paddle movement, block fall, off-screen cleanup,
//! spawn, collision, difficulty clock.

use rand::Rng;

use super::state::{GamePhase, GameState};
use crate::consts::LEVEL_UP_TICKS;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// State advanced; redraw
    Advanced,
    /// A block hit the paddle. Ticking stops until the host resolves it.
    GameOver { level: u32 },
    /// Not running (waiting on a game-over answer, or terminated)
    Halted,
}

/// Advance the game state by one fixed timestep
pub fn tick<R: Rng>(state: &mut GameState<R>) -> TickOutcome {
    if state.phase != GamePhase::Running {
        return TickOutcome::Halted;
    }
    let tuning = state.tuning;

    state.player.apply_movement(
        state.move_left,
        state.move_right,
        tuning.move_speed,
        tuning.player_max_x(),
    );

    for block in &mut state.blocks {
        block.fall();
    }

    let before = state.blocks.len();
    state.blocks.retain(|b| !b.is_below(tuning.window_height));
    let removed = before - state.blocks.len();
    if removed > 0 {
        log::trace!("Removed {} off-screen block(s)", removed);
    }

    if tuning.spawn_one_in > 0 && state.rng.random_range(0..tuning.spawn_one_in) == 0 {
        state.spawn_block();
    }

    let hitbox = state.player.hitbox();
    if let Some(block) = state.blocks.iter().find(|b| b.rect().intersects(&hitbox)) {
        log::info!(
            "Game over at level {}: {:?} block at ({}, {}) hit the paddle at x={}",
            state.level,
            block.color,
            block.pos.x,
            block.pos.y,
            state.player.pos.x
        );
        state.phase = GamePhase::GameOver;
        return TickOutcome::GameOver { level: state.level };
    }

    state.blocks_dodged += 1;
    if state.blocks_dodged.is_multiple_of(LEVEL_UP_TICKS) {
        state.level += 1;
        state.block_speed += 1;
        log::debug!("Level {} (block speed {})", state.level, state.block_speed);
    }

    TickOutcome::Advanced
}

impl<R: Rng> GameState<R> {
    /// Advance one timestep; see [`tick`]
    pub fn tick(&mut self) -> TickOutcome {
        tick(self)
    }
}
