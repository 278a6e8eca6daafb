use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events.
///
/// The poll timeout doubles as the frame interval: when no input arrives
/// within one frame we emit `Tick`, so the playback loop advances at the
/// configured frame rate whether or not the user is touching anything.
pub struct EventHandler {
    frame_interval: Duration,
}

impl EventHandler {
    pub fn new(frame_interval: Duration) -> Self {
        Self { frame_interval }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        if event::poll(self.frame_interval)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only initial key presses count. Repeat events (a held
                    // key) and release events must not re-trigger commands.
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed (never a repeat or release)
    Key(KeyEvent),
    /// Mouse press, drag, or release
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Frame tick: advance playback
    Tick,
}
