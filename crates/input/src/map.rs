//! Key mapping from terminal events to input events.

use crate::types::InputEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a raw terminal event. Anything that is not a key press maps to `None`.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key_event(*key),
        _ => None,
    }
}

/// Map keyboard input to input events.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(InputEvent::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(InputEvent::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(InputEvent::MoveDown)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(InputEvent::Rotate),

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),

        _ => None,
    }
}
