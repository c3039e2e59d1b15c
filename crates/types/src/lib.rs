//! Core types module - shared data structures and constants
//!
//! Pure data shared by the engine, the input pump and the terminal renderer.
//! Nothing in here does I/O.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (`BOARD_WIDTH / 2 - 2`, 0) = (3, 0) for the 5x5 piece mask
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 500 | Gravity tick interval |
//! | `GAME_OVER_DISPLAY_MS` | 2000 | How long the final score stays on screen |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Side length of the square mask every piece lives in.
pub const MASK_SIZE: usize = 5;

/// Gravity tick interval in milliseconds
pub const TICK_MS: u64 = 500;

/// Points awarded per cleared row
pub const LINE_CLEAR_SCORE: u32 = 100;

/// How long the game-over message is shown before exiting
pub const GAME_OVER_DISPLAY_MS: u64 = 2000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_constants() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 20);
        assert_eq!(MASK_SIZE, 5);
        assert_eq!(TICK_MS, 500);
        assert_eq!(LINE_CLEAR_SCORE, 100);
        assert_eq!(GAME_OVER_DISPLAY_MS, 2000);
    }

    #[test]
    fn piece_kind_index_matches_catalog_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn piece_kind_string_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_str("x"), None);
    }

    #[test]
    fn terminal_statuses() {
        assert!(!GameStatus::Spawning.is_terminal());
        assert!(!GameStatus::Falling.is_terminal());
        assert!(GameStatus::GameOver.is_terminal());
        assert!(GameStatus::Exited.is_terminal());
    }

    #[test]
    fn input_events_map_to_actions() {
        assert_eq!(InputEvent::MoveDown.action(), Some(GameAction::SoftDrop));
        assert_eq!(InputEvent::Quit.action(), Some(GameAction::Quit));
        assert_eq!(InputEvent::Error("boom".into()).action(), None);
    }
}

/// The seven tetromino piece kinds, in shape catalog order
///
/// - **I**: 4-long bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**, **J**: mirrored hooks
/// - **S**, **Z**: mirrored zig-zags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Position of this kind in the shape catalog
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Game actions that can be applied to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; same effect as a gravity tick
    SoftDrop,
    /// Rotate the piece mask 90° clockwise
    Rotate,
    /// Leave the game without a game-over screen
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Quit => "quit",
        }
    }
}

/// Discrete events yielded by the input source.
///
/// `Error` carries the backend's description and is fatal to the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    Quit,
    Error(String),
}

impl InputEvent {
    /// The engine action this event requests, `None` for errors.
    pub fn action(&self) -> Option<GameAction> {
        match self {
            InputEvent::MoveLeft => Some(GameAction::MoveLeft),
            InputEvent::MoveRight => Some(GameAction::MoveRight),
            InputEvent::MoveDown => Some(GameAction::SoftDrop),
            InputEvent::Rotate => Some(GameAction::Rotate),
            InputEvent::Quit => Some(GameAction::Quit),
            InputEvent::Error(_) => None,
        }
    }
}

/// Engine lifecycle state.
///
/// `Spawning` only exists for the instant between a lock and the next spawn.
/// `GameOver` and `Exited` are terminal; nothing leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Spawning,
    Falling,
    GameOver,
    Exited,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Exited)
    }
}
