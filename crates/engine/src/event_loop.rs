//! The event loop.
//!
//! Two producers feed it: a periodic gravity tick and the input channel. The
//! loop waits on whichever is ready first, applies exactly one signal to the
//! game, redraws, and goes round again. Only this task touches the game, so
//! no locking is needed. When both producers are ready at once either may win.

use std::time::Duration;

use anyhow::{bail, Result};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::core::{GameSnapshot, GameState};
use crate::types::{GameStatus, InputEvent};

/// Drawing capability the loop needs from a frontend.
pub trait Renderer {
    /// Full redraw of board, active piece and score.
    fn draw(&mut self, snap: &GameSnapshot) -> Result<()>;

    /// Replace the screen with the final score.
    fn show_game_over(&mut self, score: u32) -> Result<()>;
}

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    GameOver { score: u32 },
    Quit,
}

enum Signal {
    Tick,
    Input(Option<InputEvent>),
}

fn outcome(game: &GameState) -> Option<LoopOutcome> {
    match game.status() {
        GameStatus::GameOver => Some(LoopOutcome::GameOver {
            score: game.score(),
        }),
        GameStatus::Exited => Some(LoopOutcome::Quit),
        GameStatus::Spawning | GameStatus::Falling => None,
    }
}

/// Run until game over, quit, or a fatal input error.
///
/// The game should already be started. The first gravity tick fires one full
/// `tick_interval` after the loop begins.
pub async fn run<R: Renderer>(
    game: &mut GameState,
    renderer: &mut R,
    input: &mut UnboundedReceiver<InputEvent>,
    tick_interval: Duration,
) -> Result<LoopOutcome> {
    let mut ticker = time::interval_at(Instant::now() + tick_interval, tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut snap = GameSnapshot::default();
    let mut ticks: u64 = 0;

    loop {
        if let Some(done) = outcome(game) {
            info!(?done, ticks, pieces = game.pieces_spawned(), "game loop finished");
            return Ok(done);
        }

        game.snapshot_into(&mut snap);
        renderer.draw(&snap)?;

        let signal = tokio::select! {
            _ = ticker.tick() => Signal::Tick,
            event = input.recv() => Signal::Input(event),
        };

        match signal {
            Signal::Tick => {
                ticks += 1;
                game.tick();
            }
            Signal::Input(Some(InputEvent::Error(detail))) => {
                bail!("input source failed: {}", detail);
            }
            Signal::Input(Some(event)) => {
                if let Some(action) = event.action() {
                    let changed = game.apply_action(action);
                    debug!(action = action.as_str(), changed, "input");
                }
            }
            Signal::Input(None) => bail!("input source disconnected"),
        }

        if let Some(lock) = game.take_last_lock() {
            debug!(
                kind = lock.kind.as_str(),
                lines = lock.lines_cleared,
                gained = lock.score_delta,
                "piece locked"
            );
        }
    }
}

/// Show the final score for `hold` after a game over. Quitting shows nothing.
pub async fn finish<R: Renderer>(
    outcome: LoopOutcome,
    renderer: &mut R,
    hold: Duration,
) -> Result<()> {
    if let LoopOutcome::GameOver { score } = outcome {
        renderer.show_game_over(score)?;
        time::sleep(hold).await;
    }
    Ok(())
}
