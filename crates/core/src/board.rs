//! Board module - manages the game grid
//!
//! A fixed-size grid of occupied/empty cells stored as a flat row-major vector.
//! Coordinates: (x, y) where x runs left to right and y top to bottom (row 0 is the top).
//!
//! The board does no bounds logic of its own: callers check coordinates before
//! querying, and collision detection lives on [`Piece`].

use std::fmt;

use crate::piece::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Rejected board construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    InvalidDimensions { width: usize, height: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major (y * width + x)
    cells: Vec<bool>,
}

impl Board {
    /// Create an empty board. Both dimensions must be non-zero.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// The standard 10x20 playfield
    pub fn standard() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: vec![false; BOARD_WIDTH * BOARD_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({}, {}) off board", x, y);
        y * self.width + x
    }

    /// Whether (x, y) is filled. Out-of-range coordinates are a caller bug.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, occupied: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = occupied;
    }

    /// One row of cells, left to right
    pub fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height && self.row(y).iter().all(|&c| c)
    }

    /// Remove row `y`, shifting every row above it down by one and emptying row 0.
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.height {
            return;
        }
        let width = self.width;
        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            self.cells.copy_within(src..src + width, row * width);
        }
        self.cells[..width].fill(false);
    }

    /// Clear every full row and return how many went.
    ///
    /// Scans bottom to top. After a clear the same index is examined again,
    /// since the row from above has just moved into it.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Write every occupied piece cell that lands on the board.
    ///
    /// Cells outside the grid are dropped silently.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
                self.set(x as usize, y as usize, true);
            }
        }
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Empty the whole board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Fill a whole row, optionally leaving one column open.
    pub fn fill_row(&mut self, y: usize, gap: Option<usize>) {
        for x in 0..self.width {
            self.set(x, y, Some(x) != gap);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
