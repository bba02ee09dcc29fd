//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]. The random
//! source is owned by the state and injected at construction, so a seed
//! fully determines a run.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::Tuning;
use crate::consts::START_LEVEL;
use crate::error::Result;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticking normally
    Running,
    /// A block hit the paddle; waiting for the host's restart/quit answer
    GameOver,
    /// Player chose to quit; the host should exit
    Terminated,
}

/// Host answer to the game-over prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverChoice {
    Restart,
    Quit,
}

/// Logical keys the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    /// Anything else the host forwards; ignored
    Other,
}

/// Block colour tags (pastel palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockColor {
    Pink,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl BlockColor {
    /// Spawn palette, sampled uniformly
    pub const PALETTE: [BlockColor; 5] = [
        BlockColor::Pink,
        BlockColor::Green,
        BlockColor::Blue,
        BlockColor::Yellow,
        BlockColor::Purple,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::PALETTE[rng.random_range(0..Self::PALETTE.len())]
    }
}

/// The player's paddle. Only `pos.x` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: IVec2::new(tuning.player_start_x, tuning.player_y()),
            size: IVec2::new(tuning.player_width, tuning.player_height),
        }
    }

    /// Apply one tick of held-key movement.
    ///
    /// Left and right are checked independently, left first. The result is
    /// clamped to `[0, max_x]`.
    pub fn apply_movement(&mut self, left: bool, right: bool, speed: i32, max_x: i32) {
        if left && self.pos.x > 0 {
            self.pos.x -= speed;
        }
        if right && self.pos.x < max_x {
            self.pos.x += speed;
        }
        self.pos.x = self.pos.x.clamp(0, max_x);
    }

    /// Collision rectangle (same as the drawn paddle)
    pub fn hitbox(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }
}

/// A falling block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub pos: IVec2,
    pub size: IVec2,
    /// Pixels per tick, fixed at spawn
    pub speed: i32,
    pub color: BlockColor,
}

impl Block {
    pub fn new(pos: IVec2, size: i32, speed: i32, color: BlockColor) -> Self {
        Self {
            pos,
            size: IVec2::splat(size),
            speed,
            color,
        }
    }

    /// Move down by this block's speed
    #[inline]
    pub fn fall(&mut self) {
        self.pos.y += self.speed;
    }

    /// Strictly below the bottom edge
    #[inline]
    pub fn is_below(&self, window_height: i32) -> bool {
        self.pos.y > window_height
    }

    pub fn rect(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }
}

/// A block as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockView {
    pub rect: Rect,
    pub color: BlockColor,
}

/// Read-only view of one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub player: Rect,
    pub blocks: Vec<BlockView>,
    pub level: u32,
    pub phase: GamePhase,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    /// Balance in effect for this run
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    /// Live blocks in spawn order
    pub blocks: Vec<Block>,
    pub level: u32,
    /// Surviving ticks since start or last reset. Drives level-ups; it is a
    /// clock, not a count of blocks that went past the paddle.
    pub blocks_dodged: u32,
    /// Speed assigned to newly spawned blocks
    pub block_speed: i32,
    pub move_left: bool,
    pub move_right: bool,
    pub(crate) rng: R,
}

impl GameState<Pcg32> {
    /// Classic tuning, seeded PCG random source
    pub fn new(seed: u64) -> Self {
        Self::build(Tuning::default(), Pcg32::seed_from_u64(seed))
    }

    /// Custom tuning, seeded PCG random source. Fails if the tuning does
    /// not validate.
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Result<Self> {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Build a state around an arbitrary random source
    pub fn with_rng(tuning: Tuning, rng: R) -> Result<Self> {
        tuning.validate()?;
        Ok(Self::build(tuning, rng))
    }

    fn build(tuning: Tuning, rng: R) -> Self {
        Self {
            tuning,
            phase: GamePhase::Running,
            player: Player::new(&tuning),
            blocks: Vec::new(),
            level: START_LEVEL,
            blocks_dodged: 0,
            block_speed: tuning.start_block_speed,
            move_left: false,
            move_right: false,
            rng,
        }
    }

    /// Back to the starting position with a clean board.
    ///
    /// The random source keeps its position, so successive rounds differ.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.tuning);
        self.blocks.clear();
        self.level = START_LEVEL;
        self.blocks_dodged = 0;
        self.block_speed = self.tuning.start_block_speed;
        self.move_left = false;
        self.move_right = false;
        self.phase = GamePhase::Running;
    }

    /// Key-down (`pressed = true`) or key-up for a logical key
    pub fn handle_input(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Left => self.move_left = pressed,
            Key::Right => self.move_right = pressed,
            Key::Other => {}
        }
    }

    /// Apply the host's answer to a pending game over.
    ///
    /// Outside `GameOver` the choice is ignored. Returns the resulting phase.
    pub fn resolve_game_over(&mut self, choice: GameOverChoice) -> GamePhase {
        if self.phase != GamePhase::GameOver {
            log::warn!("Ignoring {:?}: game is {:?}", choice, self.phase);
            return self.phase;
        }
        match choice {
            GameOverChoice::Restart => {
                log::info!("Restarting after reaching level {}", self.level);
                self.reset();
            }
            GameOverChoice::Quit => {
                log::info!("Quitting at level {}", self.level);
                self.phase = GamePhase::Terminated;
            }
        }
        self.phase
    }

    /// Spawn one block at a random column with the current speed and a
    /// random palette colour
    pub fn spawn_block(&mut self) {
        let x = self.rng.random_range(0..=self.tuning.block_max_x());
        let color = BlockColor::random(&mut self.rng);
        let block = Block::new(
            IVec2::new(x, 0),
            self.tuning.block_size,
            self.block_speed,
            color,
        );
        log::trace!("Spawned {:?} block at x={} speed={}", color, x, self.block_speed);
        self.blocks.push(block);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.hitbox(),
            blocks: self
                .blocks
                .iter()
                .map(|b| BlockView {
                    rect: b.rect(),
                    color: b.color,
                })
                .collect(),
            level: self.level,
            phase: self.phase,
        }
    }
}
