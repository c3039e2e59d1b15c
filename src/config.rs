//! Runtime configuration.
//!
//! The game takes no command-line arguments. A few environment variables tune
//! the runtime; unset or unparsable values fall back to the defaults.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TETRIS_TICK_MS` | 500 | gravity interval |
//! | `TETRIS_GAME_OVER_MS` | 2000 | how long the final score stays up |
//! | `TETRIS_SEED` | wall clock | fixed piece sequence |
//! | `TETRIS_LOG_PATH` | unset | write `tracing` logs to this file |

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{GAME_OVER_DISPLAY_MS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick_interval: Duration,
    pub game_over_display: Duration,
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(TICK_MS),
            game_over_display: Duration::from_millis(GAME_OVER_DISPLAY_MS),
            seed: None,
            log_path: None,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_interval = lookup("TETRIS_TICK_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_interval);
        let game_over_display = lookup("TETRIS_GAME_OVER_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.game_over_display);
        let seed = lookup("TETRIS_SEED").and_then(|v| v.trim().parse::<u32>().ok());
        let log_path = lookup("TETRIS_LOG_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            tick_interval,
            game_over_display,
            seed,
            log_path,
        }
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
