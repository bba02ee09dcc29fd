//! Falling Blocks entry point
//!
//! Opens the window, forwards arrow keys, runs the fixed-step loop and
//! asks restart-or-quit when a round ends.

use macroquad::prelude::*;

use falling_blocks::Tuning;
use falling_blocks::consts::WINDOW_TITLE;
use falling_blocks::platform::FixedStep;
use falling_blocks::renderer::{DrawCommand, build_frame, rounded_rect_parts};
use falling_blocks::sim::{GameOverChoice, GamePhase, GameState, Key, TickOutcome};

fn window_conf() -> Conf {
    let tuning = Tuning::default();
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: tuning.window_width,
        window_height: tuning.window_height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Arrow keys and the logical key each one drives
const MOVE_KEYS: [(KeyCode, Key); 2] = [(KeyCode::Left, Key::Left), (KeyCode::Right, Key::Right)];

/// Forward key-down/key-up transitions to the simulation
fn forward_keys(state: &mut GameState) {
    for (code, key) in MOVE_KEYS {
        if is_key_pressed(code) {
            state.handle_input(key, true);
        }
        if is_key_released(code) {
            state.handle_input(key, false);
        }
    }
}

/// Answer to the game-over prompt, if one was given this frame
fn game_over_choice() -> Option<GameOverChoice> {
    if is_key_pressed(KeyCode::Y) || is_key_pressed(KeyCode::Enter) {
        Some(GameOverChoice::Restart)
    } else if is_key_pressed(KeyCode::N) || is_key_pressed(KeyCode::Escape) {
        Some(GameOverChoice::Quit)
    } else {
        None
    }
}

fn to_color([r, g, b, a]: [f32; 4]) -> Color {
    Color::new(r, g, b, a)
}

fn execute(commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Clear { color } => clear_background(to_color(*color)),
            DrawCommand::RoundedRect {
                quad,
                radius,
                color,
            } => {
                let color = to_color(*color);
                let parts = rounded_rect_parts(*quad, *radius);
                for q in [parts.horizontal, parts.vertical] {
                    draw_rectangle(q.min.x, q.min.y, q.size.x, q.size.y, color);
                }
                for c in parts.corners {
                    draw_circle(c.x, c.y, parts.radius, color);
                }
            }
            DrawCommand::FillRect { quad, color } => draw_rectangle(
                quad.min.x,
                quad.min.y,
                quad.size.x,
                quad.size.y,
                to_color(*color),
            ),
            DrawCommand::Text {
                text,
                pos,
                size,
                color,
            } => {
                draw_text(text, pos.x, pos.y, *size, to_color(*color));
            }
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    log::info!("Falling Blocks starting...");

    let tuning = Tuning::default();
    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
    log::info!("Seed {}, tuning {:?}", seed, tuning);

    let mut state = match GameState::with_tuning(tuning, seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Cannot start: {}", err);
            return;
        }
    };
    let mut clock = FixedStep::new(tuning.tick_interval());

    loop {
        forward_keys(&mut state);

        match state.phase {
            GamePhase::Running => {
                for _ in 0..clock.advance(get_frame_time()) {
                    if let TickOutcome::GameOver { level } = state.tick() {
                        log::info!("Round over, reached level {}", level);
                        break;
                    }
                }
            }
            GamePhase::GameOver => {
                if let Some(choice) = game_over_choice() {
                    if state.resolve_game_over(choice) == GamePhase::Running {
                        clock.reset();
                    }
                }
            }
            GamePhase::Terminated => break,
        }

        execute(&build_frame(&state.snapshot(), &state.tuning));
        next_frame().await;
    }

    log::info!("Goodbye");
}
