//! Game loop: merges the gravity timer and the input stream into one
//! sequential consumer that drives [`term_tetris_core::GameState`].

pub mod event_loop;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use event_loop::{finish, run, LoopOutcome, Renderer};
