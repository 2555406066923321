//! Main entry point for the link-grid puzzle.
//!
//! Parses the command line, initializes logging, and runs either the
//! interactive terminal loop or the headless command loop.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::display::DEFAULT_FPS;

pub mod config;
mod app;
mod game;
mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Place and rotate links on a 5x5 grid to connect every node", long_about = None)]
struct Args {
    /// Read commands from stdin and print a JSON snapshot after each one
    #[arg(long)]
    headless: bool,

    /// Frames per second for the interactive loop
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let args = Args::parse();

    if args.headless {
        let stdin = io::stdin();
        app::headless::run_headless(stdin.lock(), io::stdout().lock())
            .context("headless session failed")?;
        return Ok(());
    }

    app::game_loop::run_game_loop(args.fps).await
}
