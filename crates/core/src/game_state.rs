//! Game state module - the game engine
//!
//! Owns the board, the active piece, the RNG and the score, and runs the
//! Falling/GameOver state machine. All mutation goes through `&mut self`, one
//! call at a time; nothing here knows about terminals or timers.

use tracing::{debug, info};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GameStatus, PieceKind, LINE_CLEAR_SCORE};

/// Result of the most recent lock, for observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: usize,
    pub score_delta: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    rng: SimpleRng,
    status: GameStatus,
    score: u32,
    pieces_spawned: u32,
    last_lock: Option<LockEvent>,
}

impl GameState {
    /// Empty standard board; call [`GameState::start`] to spawn the first piece.
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::standard(), seed)
    }

    /// Start from an existing (possibly pre-filled) board.
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            active: None,
            rng: SimpleRng::new(seed),
            status: GameStatus::Spawning,
            score: 0,
            pieces_spawned: 0,
            last_lock: None,
        }
    }

    /// Spawn the first piece. Returns false if it already collides.
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::Spawning {
            return false;
        }
        self.spawn_piece()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Consume the record of the last lock, if any.
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.active = self.active;
        out.score = self.score;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Spawn a uniformly random piece.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.rng.next_kind();
        self.spawn_kind(kind)
    }

    /// Spawn a specific piece at the spawn position.
    ///
    /// If it collides straight away the game is over and no piece is active.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        let piece = Piece::spawn(kind, self.board.width());
        if piece.collides(&self.board) {
            self.active = None;
            self.status = GameStatus::GameOver;
            info!(kind = kind.as_str(), score = self.score, "spawn blocked, game over");
            return false;
        }
        self.active = Some(piece);
        self.status = GameStatus::Falling;
        self.pieces_spawned += 1;
        debug!(kind = kind.as_str(), x = piece.x, y = piece.y, "spawned piece");
        true
    }

    /// Translate the active piece. A colliding move is rejected and nothing changes.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.status != GameStatus::Falling {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.moved(dx, dy);
        if moved.collides(&self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Rotate the active piece clockwise in place, or leave it untouched if that collides.
    pub fn try_rotate(&mut self) -> bool {
        if self.status != GameStatus::Falling {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let rotated = active.rotated_cw();
        if rotated.collides(&self.board) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// One gravity step. If the piece cannot fall it locks, rows clear and
    /// the next piece spawns.
    ///
    /// Returns false only once the game is over.
    pub fn tick(&mut self) -> bool {
        if self.status != GameStatus::Falling {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        !self.status.is_terminal()
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    pub fn rotate(&mut self) -> bool {
        self.try_rotate()
    }

    /// Same as a gravity tick; there is no drop bonus.
    pub fn soft_drop(&mut self) -> bool {
        self.tick()
    }

    /// Leave the game. Distinct from game over: no final score is shown.
    pub fn quit(&mut self) {
        if !self.status.is_terminal() {
            info!(score = self.score, "player quit");
            self.status = GameStatus::Exited;
        }
    }

    /// Merge the active piece, clear rows, score them and spawn the next piece.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.board.merge(&active);
        let lines_cleared = self.board.clear_full_rows();
        let score_delta = LINE_CLEAR_SCORE * lines_cleared as u32;
        self.score = self.score.saturating_add(score_delta);
        self.last_lock = Some(LockEvent {
            kind: active.kind,
            lines_cleared,
            score_delta,
        });
        if lines_cleared > 0 {
            info!(lines = lines_cleared, score = self.score, "cleared rows");
        }

        self.status = GameStatus::Spawning;
        self.spawn_piece();
    }

    /// Apply a game action. Returns true if state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => {
                if self.status != GameStatus::Falling {
                    return false;
                }
                self.soft_drop();
                true
            }
            GameAction::Quit => {
                let was_running = !self.status.is_terminal();
                self.quit();
                was_running
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
