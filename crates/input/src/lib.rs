//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`]s and pumps them
//! from a background thread into the game loop's channel.

pub mod map;
pub mod pump;

pub use term_tetris_types as types;

pub use map::{map_event, map_key_event};
pub use pump::{spawn_input_pump, spawn_pump_with, InputReceiver};
