//! Terminal Tetris runner.
//!
//! Takes no arguments: starts a terminal session, plays until game over or
//! quit, then restores the terminal.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use term_tetris::core::GameState;
use term_tetris::engine::{self, LoopOutcome};
use term_tetris::input::spawn_input_pump;
use term_tetris::term::TerminalRenderer;
use term_tetris::Config;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to initialize terminal")?;

    let result = run(&config, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(config: &Config, term: &mut TerminalRenderer) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    rt.block_on(async {
        // Never joined; the pump thread goes away with the process.
        let mut input = spawn_input_pump().context("failed to start input thread")?;

        let seed = config.seed_or_clock();
        let mut game = GameState::new(seed);
        game.start();
        info!(seed, tick_ms = config.tick_interval.as_millis() as u64, "game started");

        let outcome = engine::run(&mut game, term, &mut input, config.tick_interval).await?;
        if let LoopOutcome::GameOver { score } = outcome {
            info!(score, "game over");
        }
        engine::finish(outcome, term, config.game_over_display).await
    })
}

/// Logs go to a file when `TETRIS_LOG_PATH` is set; the terminal belongs to the game.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::DEBUG)
        .init();
    Ok(())
}
