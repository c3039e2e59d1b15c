//! Plain copy of the engine state handed to renderers.
//!
//! Renderers read a snapshot instead of borrowing the engine, so a frame can be
//! built while the engine moves on.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::GameStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<Piece>,
    pub score: u32,
    pub status: GameStatus,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::standard(),
            active: None,
            score: 0,
            status: GameStatus::Spawning,
        }
    }
}
