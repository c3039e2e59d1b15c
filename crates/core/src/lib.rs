//! Core game logic - pure, deterministic, and testable
//!
//! Everything that decides what happens in a game lives here. There is no
//! terminal, clock or I/O in this crate: the event loop drives [`GameState`]
//! one call at a time and renderers read [`GameSnapshot`]s.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven 5x5 shape masks and mask rotation
//! - [`board`]: fixed-size grid with merge and line clearing
//! - [`piece`]: the active piece, collision and movement
//! - [`rng`]: seeded uniform piece selection
//! - [`game_state`]: the engine state machine (spawn, move, rotate, lock, score)
//! - [`snapshot`]: render-side copy of the state
//!
//! # Rules
//!
//! - Gravity moves the piece down one row per tick; a blocked downward step locks it
//! - Rotation is a plain 90° clockwise mask turn, rejected outright if it collides
//! - Each cleared row scores 100
//! - A spawn that collides ends the game
//!
//! # Example
//!
//! ```
//! use term_tetris_core::GameState;
//! use term_tetris_types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick();
//!
//! assert_eq!(game.status(), GameStatus::Falling);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use term_tetris_types as types;

pub use board::{Board, BoardError};
pub use game_state::{GameState, LockEvent};
pub use piece::Piece;
pub use pieces::{rotate_cw, shape, shapes, Mask};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
