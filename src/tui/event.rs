//! Event handling for the TUI
//!
//! A background thread polls crossterm for input and emits a tick at a fixed
//! rate; the main loop consumes both over a channel.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use log::error;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Default tick interval
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick, used for toast expiry and deferred refreshes
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    _handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(CrosstermEvent::Key(key)) => sender.send(Event::Key(key)),
                            Ok(CrosstermEvent::Resize(w, h)) => sender.send(Event::Resize(w, h)),
                            Ok(_) => Ok(()),
                            Err(e) => {
                                error!("event=terminal_read status=error error=\"{}\"", e);
                                return;
                            }
                        };
                        if forwarded.is_err() {
                            return;
                        }
                    }
                    Ok(false) => {}
                    Err(e) => {
                        // Dropping the sender ends the main loop with an error
                        error!("event=terminal_poll status=error error=\"{}\"", e);
                        return;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            receiver,
            _handler: handler,
        }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}
