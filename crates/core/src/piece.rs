//! The active falling piece: a mask plus the board position of its top-left corner.

use crate::board::Board;
use crate::pieces::{occupied, rotate_cw, shape, Mask};
use crate::types::{PieceKind, MASK_SIZE};

/// Active falling piece
///
/// Coordinates may point off the board while a move is being tried; they are
/// only trusted after [`Piece::collides`] says no.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub mask: Mask,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Place a fresh catalog shape at the spawn position for a board `board_width` wide.
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        Self {
            kind,
            mask: *shape(kind),
            x: spawn_x(board_width),
            y: 0,
        }
    }

    /// Board coordinates of every occupied mask cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        occupied(&self.mask).map(move |(col, row)| (self.x + col as i32, self.y + row as i32))
    }

    /// True if any occupied cell is left/right of the board, below it, or on a filled cell.
    ///
    /// Cells above row 0 only get the horizontal check.
    pub fn collides(&self, board: &Board) -> bool {
        let width = board.width() as i32;
        let height = board.height() as i32;
        self.cells().any(|(x, y)| {
            if x < 0 || x >= width || y >= height {
                return true;
            }
            y >= 0 && board.is_occupied(x as usize, y as usize)
        })
    }

    /// Same piece, mask turned 90° clockwise. Position is unchanged.
    pub fn rotated_cw(&self) -> Self {
        Self {
            mask: rotate_cw(&self.mask),
            ..*self
        }
    }

    /// Same piece, shifted by (dx, dy)
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Left edge that roughly centers a 5-wide mask.
pub fn spawn_x(board_width: usize) -> i32 {
    (board_width / 2) as i32 - (MASK_SIZE as i32 / 2)
}
