//! Per-frame draw list
//!
//! Layering is background, paddle, blocks, HUD text, then the game-over
//! banner when one is pending.

use glam::Vec2;

use super::colors::{self, Rgba};
use super::shapes::Quad;
use crate::Tuning;
use crate::sim::{GamePhase, Snapshot};

/// Paddle corner radius (10px corner arc)
pub const PLAYER_CORNER_RADIUS: f32 = 5.0;
pub const LEVEL_FONT_SIZE: f32 = 20.0;
/// Baseline of the level overlay
pub const LEVEL_TEXT_POS: Vec2 = Vec2::new(10.0, 20.0);
pub const BANNER_FONT_SIZE: f32 = 22.0;
pub const BANNER_HEIGHT: f32 = 90.0;

/// One backend-agnostic drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Rgba,
    },
    RoundedRect {
        quad: Quad,
        radius: f32,
        color: Rgba,
    },
    FillRect {
        quad: Quad,
        color: Rgba,
    },
    /// `pos` is the left end of the text baseline
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Rgba,
    },
}

pub fn level_label(level: u32) -> String {
    format!("Level: {}", level)
}

pub fn game_over_message(level: u32) -> String {
    format!(
        "Game Over! You reached level {}. Do you want to restart?",
        level
    )
}

/// Hint line under the game-over message
pub const GAME_OVER_HINT: &str = "[Y] Restart    [N] Quit";

/// Build the ordered draw list for one frame
pub fn build_frame(snapshot: &Snapshot, tuning: &Tuning) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(snapshot.blocks.len() + 6);

    commands.push(DrawCommand::Clear {
        color: colors::BACKGROUND,
    });

    commands.push(DrawCommand::RoundedRect {
        quad: snapshot.player.into(),
        radius: PLAYER_CORNER_RADIUS,
        color: colors::PLAYER,
    });

    commands.extend(snapshot.blocks.iter().map(|b| DrawCommand::FillRect {
        quad: b.rect.into(),
        color: colors::block(b.color),
    }));

    commands.push(DrawCommand::Text {
        text: level_label(snapshot.level),
        pos: LEVEL_TEXT_POS,
        size: LEVEL_FONT_SIZE,
        color: colors::LEVEL_TEXT,
    });

    if snapshot.phase == GamePhase::GameOver {
        let width = tuning.window_width as f32;
        let top = (tuning.window_height as f32 - BANNER_HEIGHT) / 2.0;
        commands.push(DrawCommand::FillRect {
            quad: Quad::new(0.0, top, width, BANNER_HEIGHT),
            color: colors::BANNER_SHADE,
        });
        commands.push(DrawCommand::Text {
            text: game_over_message(snapshot.level),
            pos: Vec2::new(12.0, top + 36.0),
            size: BANNER_FONT_SIZE,
            color: colors::BANNER_TEXT,
        });
        commands.push(DrawCommand::Text {
            text: GAME_OVER_HINT.to_string(),
            pos: Vec2::new(12.0, top + 70.0),
            size: BANNER_FONT_SIZE,
            color: colors::BANNER_TEXT,
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;
    use crate::sim::{Block, BlockColor, GameState};

    fn state_with_blocks() -> GameState {
        let mut state = GameState::new(1);
        state
            .blocks
            .push(Block::new(IVec2::new(10, 40), 20, 2, BlockColor::Blue));
        state
            .blocks
            .push(Block::new(IVec2::new(300, 90), 20, 2, BlockColor::Yellow));
        state
    }

    #[test]
    fn test_layering_order() {
        let state = state_with_blocks();
        let frame = build_frame(&state.snapshot(), &state.tuning);

        assert_eq!(frame.len(), 5);
        assert!(matches!(frame[0], DrawCommand::Clear { color } if color == colors::BACKGROUND));
        match &frame[1] {
            DrawCommand::RoundedRect {
                quad,
                radius,
                color,
            } => {
                assert_eq!(*quad, Quad::new(250.0, 770.0, 50.0, 20.0));
                assert_eq!(*radius, PLAYER_CORNER_RADIUS);
                assert_eq!(*color, colors::PLAYER);
            }
            other => panic!("expected paddle, got {:?}", other),
        }
        assert_eq!(
            frame[2],
            DrawCommand::FillRect {
                quad: Quad::new(10.0, 40.0, 20.0, 20.0),
                color: colors::BLOCK_BLUE,
            }
        );
        assert_eq!(
            frame[3],
            DrawCommand::FillRect {
                quad: Quad::new(300.0, 90.0, 20.0, 20.0),
                color: colors::BLOCK_YELLOW,
            }
        );
        match &frame[4] {
            DrawCommand::Text { text, pos, .. } => {
                assert_eq!(text, "Level: 1");
                assert_eq!(*pos, LEVEL_TEXT_POS);
            }
            other => panic!("expected level text, got {:?}", other),
        }
    }

    #[test]
    fn test_game_over_banner() {
        let mut state = state_with_blocks();
        state.level = 6;
        state.phase = GamePhase::GameOver;
        let frame = build_frame(&state.snapshot(), &state.tuning);

        assert_eq!(frame.len(), 8);
        let texts: Vec<&str> = frame
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                "Level: 6",
                "Game Over! You reached level 6. Do you want to restart?",
                GAME_OVER_HINT,
            ]
        );
    }
}
