//! Headless game loop.
//!
//! Reads one command per line, applies it, and writes the state as one JSON
//! line. Besides the player actions, `tick` runs a single update.

use std::io::{BufRead, Write};

use log::{info, warn};

use crate::game::actions::PlayerAction;
use crate::game::error::GameResult;
use crate::game::state::GameState;

/// Run commands from `input` until EOF or `quit`, returning the final state.
pub fn run_headless<R: BufRead, W: Write>(mut input: R, mut out: W) -> GameResult<GameState> {
    let mut game_state = GameState::new();
    let mut raw = Vec::new();
    info!("[Headless] Start");

    loop {
        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        // Undecodable bytes end up as an unknown command instead of an error.
        let line = String::from_utf8_lossy(&raw);
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        if command.eq_ignore_ascii_case("tick") {
            game_state.update();
        } else {
            match command.parse::<PlayerAction>() {
                Ok(PlayerAction::Quit) => break,
                Ok(action) => {
                    game_state.apply_player_action(action);
                }
                Err(e) => {
                    warn!("[Headless] {}", e);
                    eprintln!("{}", e);
                    continue;
                }
            }
        }

        writeln!(out, "{}", game_state.snapshot_json()?)?;
    }

    out.flush()?;
    info!("[Headless] Done after {} ticks", game_state.tick);
    Ok(game_state)
}
