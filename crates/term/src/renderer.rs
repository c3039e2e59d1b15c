//! TerminalRenderer: owns the terminal session and flushes frames to it.
//!
//! The first frame, and any frame after a resize, is a full clear + redraw.
//! After that only runs of changed cells are written.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::engine::Renderer;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{GameView, Viewport};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: GameView,
    frame: FrameBuffer,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            view: GameView::default(),
            frame: FrameBuffer::new(0, 0),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo everything `enter` did.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn viewport() -> Viewport {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }

    /// Write `self.frame` to the terminal and keep it for the next diff.
    fn present(&mut self) -> Result<()> {
        self.buf.clear();
        encode_frame(self.last.as_ref(), &self.frame, &mut self.buf)?;
        self.flush_buf()?;

        let mut prev = self.last.take().unwrap_or_else(|| FrameBuffer::new(0, 0));
        std::mem::swap(&mut prev, &mut self.frame);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        self.view.render_into(snap, Self::viewport(), &mut self.frame);
        self.present()
    }

    fn show_game_over(&mut self, score: u32) -> Result<()> {
        self.view.render_game_over(
            score,
            crate::types::BOARD_HEIGHT,
            Self::viewport(),
            &mut self.frame,
        );
        self.last = None;
        self.present()
    }
}

/// Encode `next` into `out`: everything if there is no comparable previous
/// frame, otherwise only the cells that differ.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style: Option<CellStyle> = None;
    for y in 0..next.height() {
        let row = next.row(y);
        let runs = match prev {
            Some(p) => changed_runs(p.row(y), row),
            None => vec![(0, row.len())],
        };
        for (start, end) in runs {
            out.queue(cursor::MoveTo(start as u16, y))?;
            for cell in &row[start..end] {
                if style != Some(cell.style) {
                    queue_style(out, cell.style)?;
                    style = Some(cell.style);
                }
                out.queue(Print(cell.ch))?;
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Half-open `[start, end)` column ranges where two equal-length rows differ.
fn changed_runs<T: PartialEq>(prev: &[T], next: &[T]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;
    for (x, (a, b)) in prev.iter().zip(next).enumerate() {
        match (a == b, start) {
            (false, None) => start = Some(x),
            (true, Some(s)) => {
                runs.push((s, x));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, next.len()));
    }
    runs
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        assert_eq!(changed_runs(&b"abcde"[..], &b"aXYde"[..]), vec![(1, 3)]);
        assert_eq!(changed_runs(&b"abcde"[..], &b"Xbcd!"[..]), vec![(0, 1), (4, 5)]);
        assert!(changed_runs(&b"same"[..], &b"same"[..]).is_empty());
    }

    #[test]
    fn full_frame_clears_screen() {
        let fb = FrameBuffer::new(2, 1);
        let mut out = Vec::new();
        encode_frame(None, &fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("\x1b[2J"));
    }

    #[test]
    fn identical_frames_write_no_cells() {
        let mut a = FrameBuffer::new(3, 1);
        a.put_str(0, 0, "abc", CellStyle::default());
        let b = a.clone();
        let mut out = Vec::new();
        encode_frame(Some(&a), &b, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains("\x1b[2J"));
        assert!(!text.contains('a'));
    }

    #[test]
    fn resize_forces_full_redraw() {
        let a = FrameBuffer::new(3, 1);
        let b = FrameBuffer::new(4, 1);
        let mut out = Vec::new();
        encode_frame(Some(&a), &b, &mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).contains("\x1b[2J"));
    }
}
