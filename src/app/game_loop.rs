//! Interactive game loop.
//!
//! Each frame drains pending key events, applies them, runs the update tick
//! and renders to the terminal. Frames are paced by a tokio interval.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};
use tokio::time::{interval, MissedTickBehavior};

use crate::app::input::map_key;
use crate::app::tui::Tui;
use crate::game::actions::PlayerAction;
use crate::game::state::GameState;
use crate::game::systems::render;
use crate::render::terminal::TerminalCanvas;

/// Drain pending key events into the state. Returns false once the player quits.
fn handle_events(game_state: &mut GameState) -> Result<bool> {
    while event::poll(Duration::ZERO)? {
        let Event::Key(key) = event::read()? else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match map_key(key) {
            Some(PlayerAction::Quit) => return Ok(false),
            Some(action) => {
                game_state.apply_player_action(action);
            }
            None => {}
        }
    }
    Ok(true)
}

async fn frames(tui: &mut Tui, game_state: &mut GameState, fps: u32) -> Result<()> {
    let mut canvas = TerminalCanvas::new(&mut tui.terminal);
    let mut ticker = interval(Duration::from_secs_f64(1.0 / fps.max(1) as f64));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut was_solved = game_state.is_solved();

    loop {
        ticker.tick().await;

        if !handle_events(game_state).context("failed to read terminal input")? {
            return Ok(());
        }
        game_state.update();

        let solved = game_state.is_solved();
        if solved && !was_solved {
            info!("[GameLoop] All nodes connected at tick {} (stability {:.1})", game_state.tick, game_state.stability);
        }
        was_solved = solved;

        render(game_state, &mut canvas).context("failed to draw frame")?;
    }
}

/// Run the puzzle in the current terminal until the player quits.
pub async fn run_game_loop(fps: u32) -> Result<()> {
    let mut game_state = GameState::new();
    info!("[GameLoop] Start at {} fps", fps);

    let mut tui = Tui::init().context("failed to set up terminal")?;
    let result = frames(&mut tui, &mut game_state, fps).await;
    let result = finish(result, tui.exit());

    info!("[GameLoop] Exit with stability {:.1} after {} ticks", game_state.stability, game_state.tick);
    result
}

/// Combine the loop outcome with terminal teardown. A loop error wins; the
/// teardown error is then only logged.
fn finish(result: Result<()>, exit: io::Result<()>) -> Result<()> {
    match (result, exit) {
        (Err(e), Err(exit_err)) => {
            warn!("[GameLoop] Failed to restore terminal: {}", exit_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), exit) => exit.context("failed to restore terminal"),
    }
}
