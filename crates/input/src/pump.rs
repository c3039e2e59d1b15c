//! Background input pump.
//!
//! Terminal reads block, so they run on their own OS thread and hand mapped
//! events to the game loop over an unbounded channel. The thread is detached:
//! it ends on a read error or when the loop drops the receiver, and otherwise
//! dies with the process.

use std::io;
use std::thread;

use crossterm::event::Event;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::map::map_event;
use crate::types::InputEvent;

pub type InputReceiver = mpsc::UnboundedReceiver<InputEvent>;

/// Start pumping real terminal events.
pub fn spawn_input_pump() -> io::Result<InputReceiver> {
    spawn_pump_with(crossterm::event::read)
}

/// Start pumping events from any blocking reader.
pub fn spawn_pump_with<F>(mut read: F) -> io::Result<InputReceiver>
where
    F: FnMut() -> io::Result<Event> + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    thread::Builder::new()
        .name("input-pump".into())
        .spawn(move || loop {
            match read() {
                Ok(event) => {
                    let Some(mapped) = map_event(&event) else {
                        continue;
                    };
                    if tx.send(mapped).is_err() {
                        debug!("input receiver dropped, pump exiting");
                        break;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "terminal read failed");
                    let _ = tx.send(InputEvent::Error(err.to_string()));
                    break;
                }
            }
        })?;
    Ok(rx)
}
