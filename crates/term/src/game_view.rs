//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BG: Rgb = Rgb::new(0, 0, 0);
const WELL_BG: Rgb = Rgb::new(25, 25, 35);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BG);
const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG);
const LOCKED: CellStyle = CellStyle::new(Rgb::new(230, 230, 230), WELL_BG);
const LABEL: CellStyle = CellStyle::new(Rgb::new(230, 230, 230), BG).bold();
const HELP: CellStyle = CellStyle::new(Rgb::new(130, 130, 140), BG);
const GAME_OVER: CellStyle = CellStyle::new(Rgb::new(230, 60, 60), BG).bold();

const KEY_HELP: [&str; 4] = ["←/→  move", "↓    drop", "↑    rotate", "Esc  quit"];

/// Foreground color of the falling piece.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}

/// Lays the board out as a bordered well, two terminal columns per cell.
pub struct GameView {
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Width and height of the bordered well in terminal cells.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = snap.board.width() as u16 * self.cell_w + 2;
        let h = snap.board.height() as u16 + 2;
        (w, h)
    }

    /// Render the current game state into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size(snap);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        let board = &snap.board;
        for y in 0..board.height() {
            for (x, &filled) in board.row(y).iter().enumerate() {
                let (ch, style) = if filled { ('█', LOCKED) } else { ('.', EMPTY) };
                self.put_cell(fb, origin_x, origin_y, x as u16, y as u16, ch, style);
            }
        }

        if let Some(active) = snap.active {
            let style = CellStyle::new(piece_color(active.kind), WELL_BG).bold();
            for (x, y) in active.cells() {
                // Cells above the top row are still spawning into view.
                if x < 0 || y < 0 || x as usize >= board.width() || y as usize >= board.height() {
                    continue;
                }
                self.put_cell(fb, origin_x, origin_y, x as u16, y as u16, '█', style);
            }
        }

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        if panel_x < viewport.width {
            fb.put_str(panel_x, origin_y, &format!("Score: {}", snap.score), LABEL);
            for (i, line) in KEY_HELP.iter().enumerate() {
                fb.put_str(panel_x, origin_y + 2 + i as u16, line, HELP);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Blank screen with the final score in the middle of the board's height.
    pub fn render_game_over(&self, score: u32, board_height: usize, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);
        let y = ((board_height / 2) as u16).min(viewport.height.saturating_sub(1));
        fb.put_str(0, y, &format!("Game Over! Final Score: {}", score), GAME_OVER);
    }

    #[allow(clippy::too_many_arguments)]
    fn put_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin_x + 1 + x * self.cell_w;
        let py = origin_y + 1 + y;
        for dx in 0..self.cell_w {
            // Empty cells get a single dot so the grid stays readable.
            let glyph = if ch == '.' && dx > 0 { ' ' } else { ch };
            fb.put_char(px + dx, py, glyph, style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(right, y, '┐', BORDER);
    fb.put_char(x, bottom, '└', BORDER);
    fb.put_char(right, bottom, '┘', BORDER);
    for dx in x + 1..right {
        fb.put_char(dx, y, '─', BORDER);
        fb.put_char(dx, bottom, '─', BORDER);
    }
    for dy in y + 1..bottom {
        fb.put_char(x, dy, '│', BORDER);
        fb.put_char(right, dy, '│', BORDER);
    }
}
