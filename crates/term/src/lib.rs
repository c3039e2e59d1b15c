//! Terminal "game renderer" module.
//!
//! Renders into a plain framebuffer first, then flushes it to the terminal
//! through crossterm. Board cells are two terminal columns wide.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_engine as engine;
pub use term_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
