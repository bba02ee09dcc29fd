//! End-to-end rounds driven the way a host drives them

use falling_blocks::Tuning;
use falling_blocks::renderer::{DrawCommand, build_frame};
use falling_blocks::sim::{
    Block, BlockColor, GameOverChoice, GamePhase, GameState, Key, TickOutcome,
};
use glam::IVec2;

fn no_spawns() -> Tuning {
    Tuning {
        spawn_one_in: 0,
        ..Default::default()
    }
}

/// Ticks until the only block leaves the board; panics on collision
fn ticks_until_removed(state: &mut GameState) -> u32 {
    let mut ticks = 0;
    while !state.blocks.is_empty() {
        assert_eq!(state.tick(), TickOutcome::Advanced);
        ticks += 1;
        assert!(ticks < 10_000, "block never left the board");
    }
    ticks
}

#[test]
fn block_clears_bottom_edge_on_tick_401() {
    let mut state = GameState::with_tuning(no_spawns(), 11).expect("valid tuning");
    state
        .blocks
        .push(Block::new(IVec2::new(0, 0), 20, 2, BlockColor::Pink));

    for _ in 0..400 {
        assert_eq!(state.tick(), TickOutcome::Advanced);
    }
    // Exactly on the edge is still on the board
    assert_eq!(state.blocks.len(), 1);
    assert_eq!(state.blocks[0].pos.y, 800);

    assert_eq!(state.tick(), TickOutcome::Advanced);
    assert!(state.blocks.is_empty());
    assert_eq!(state.phase, GamePhase::Running);
}

#[test]
fn block_lifetime_matches_speed() {
    for speed in 1..=12 {
        let mut state = GameState::with_tuning(no_spawns(), 0).expect("valid tuning");
        state
            .blocks
            .push(Block::new(IVec2::new(0, 0), 20, speed, BlockColor::Green));
        let expected = (801 + speed as u32 - 1) / speed as u32;
        assert_eq!(ticks_until_removed(&mut state), expected, "speed {speed}");
    }
}

#[test]
fn block_above_left_wall_player_collides_next_tick() {
    let mut state = GameState::with_tuning(no_spawns(), 0).expect("valid tuning");
    state.player.pos.x = 0;
    state
        .blocks
        .push(Block::new(IVec2::new(0, 770), 20, 2, BlockColor::Blue));

    assert_eq!(state.tick(), TickOutcome::GameOver { level: 1 });
    assert_eq!(state.phase, GamePhase::GameOver);
}

#[test]
fn restart_then_quit() {
    let mut state = GameState::with_tuning(no_spawns(), 3).expect("valid tuning");
    state.handle_input(Key::Right, true);
    for _ in 0..75 {
        state.tick();
    }
    assert_eq!(state.level, 2);
    assert_eq!(state.player.pos.x, 550);

    state
        .blocks
        .push(Block::new(IVec2::new(540, 760), 20, 3, BlockColor::Purple));
    assert_eq!(state.tick(), TickOutcome::GameOver { level: 2 });

    // Prompt pending: the board is frozen and shows the banner
    assert_eq!(state.tick(), TickOutcome::Halted);
    let frame = build_frame(&state.snapshot(), &state.tuning);
    assert!(frame.iter().any(|c| matches!(
        c,
        DrawCommand::Text { text, .. } if text.starts_with("Game Over! You reached level 2.")
    )));

    assert_eq!(
        state.resolve_game_over(GameOverChoice::Restart),
        GamePhase::Running
    );
    let fresh = GameState::with_tuning(no_spawns(), 3).expect("valid tuning");
    assert_eq!(state.snapshot(), fresh.snapshot());
    assert_eq!(state.blocks_dodged, 0);
    assert_eq!(state.block_speed, 2);
    assert!(!state.move_right);

    // Held key was cleared by the restart
    state.tick();
    assert_eq!(state.player.pos.x, 250);

    state
        .blocks
        .push(Block::new(IVec2::new(250, 770), 20, 2, BlockColor::Yellow));
    assert_eq!(state.tick(), TickOutcome::GameOver { level: 1 });
    assert_eq!(
        state.resolve_game_over(GameOverChoice::Quit),
        GamePhase::Terminated
    );
    assert_eq!(state.tick(), TickOutcome::Halted);
}

#[test]
fn same_seed_same_spawns() {
    let mut a = GameState::new(2024);
    let mut b = GameState::new(2024);
    let mut spawned = 0;
    for _ in 0..300 {
        let before = a.blocks.len();
        assert_eq!(a.tick(), b.tick());
        if a.blocks.len() > before {
            spawned += 1;
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
    assert!(spawned > 0, "300 ticks at 1-in-20 should spawn something");
}

#[test]
fn snapshot_serializes_for_tooling() {
    let mut state = GameState::with_tuning(no_spawns(), 1).expect("valid tuning");
    state
        .blocks
        .push(Block::new(IVec2::new(40, 60), 20, 2, BlockColor::Pink));
    let json = serde_json::to_value(state.snapshot()).expect("serializes");
    assert_eq!(json["level"], 1);
    assert_eq!(json["phase"], "Running");
    assert_eq!(json["blocks"][0]["color"], "Pink");
}
