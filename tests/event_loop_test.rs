//! Event loop tests: scripted terminal input through the pump, frames through GameView.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use term_tetris::core::{GameSnapshot, GameState};
use term_tetris::engine::{self, LoopOutcome, Renderer};
use term_tetris::input::spawn_pump_with;
use term_tetris::term::{FrameBuffer, GameView, Viewport};

struct FrameRecorder {
    view: GameView,
    frames: Vec<FrameBuffer>,
    last_active_x: Option<i32>,
    final_score: Option<u32>,
}

impl FrameRecorder {
    fn new() -> Self {
        Self {
            view: GameView::default(),
            frames: Vec::new(),
            last_active_x: None,
            final_score: None,
        }
    }
}

impl Renderer for FrameRecorder {
    fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        self.frames.push(self.view.render(snap, Viewport::new(40, 22)));
        self.last_active_x = snap.active.map(|p| p.x);
        Ok(())
    }

    fn show_game_over(&mut self, score: u32) -> Result<()> {
        self.final_score = Some(score);
        Ok(())
    }
}

/// Keys followed by a blocking read that never returns, like an idle terminal.
fn keys_then_idle(codes: Vec<KeyCode>) -> impl FnMut() -> io::Result<Event> + Send + 'static {
    let mut queue: VecDeque<KeyCode> = codes.into();
    move || match queue.pop_front() {
        Some(code) => Ok(Event::Key(KeyEvent::from(code))),
        None => loop {
            std::thread::park();
        },
    }
}

#[tokio::test]
async fn keys_move_piece_then_escape_quits() {
    let mut rx = spawn_pump_with(keys_then_idle(vec![KeyCode::Left, KeyCode::Left, KeyCode::Esc])).unwrap();
    let mut game = GameState::new(2024);
    game.start();

    let mut renderer = FrameRecorder::new();
    let outcome = engine::run(&mut game, &mut renderer, &mut rx, Duration::from_secs(60))
        .await
        .unwrap();

    assert_eq!(outcome, LoopOutcome::Quit);
    assert_eq!(renderer.frames.len(), 3);
    assert_eq!(renderer.last_active_x, Some(1));

    engine::finish(outcome, &mut renderer, Duration::from_secs(2)).await.unwrap();
    assert_eq!(renderer.final_score, None);
}

#[tokio::test]
async fn read_error_aborts_the_loop() {
    let mut rx = spawn_pump_with(|| Err(io::Error::new(io::ErrorKind::Other, "tty closed"))).unwrap();
    let mut game = GameState::new(1);
    game.start();

    let mut renderer = FrameRecorder::new();
    let err = engine::run(&mut game, &mut renderer, &mut rx, Duration::from_secs(60))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("tty closed"));
}

#[tokio::test(start_paused = true)]
async fn game_over_shows_final_score() {
    let (_tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut game = GameState::new(99);
    game.start();

    let mut renderer = FrameRecorder::new();
    let outcome = engine::run(&mut game, &mut renderer, &mut rx, Duration::from_millis(500))
        .await
        .unwrap();
    let LoopOutcome::GameOver { score } = outcome else {
        panic!("expected game over, got {:?}", outcome);
    };

    let before = tokio::time::Instant::now();
    engine::finish(outcome, &mut renderer, Duration::from_secs(2)).await.unwrap();
    assert_eq!(renderer.final_score, Some(score));
    assert!(before.elapsed() >= Duration::from_secs(2));
}
