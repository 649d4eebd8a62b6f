//! Messages into the views and commands out of them.
//!
//! A view never performs I/O itself: it reacts to one [`Message`] at a time
//! and may hand back a [`Command`] for the runtime to carry out.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use crate::domain::{Departure, Station};
use crate::rtt::RttError;

/// Something that happened: input, a terminal resize, or a finished search.
#[derive(Debug)]
pub enum Message {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    /// Result of a dispatched search, delivered once and whole.
    SearchComplete(Result<Vec<Departure>, RttError>),
}

/// Work a view asks the runtime to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Exit the program.
    Quit,
    /// Look up departures in the background, then post `SearchComplete`.
    Search { from: Station, to: Station },
}

/// A screen driven by the runtime.
pub trait Model {
    /// Called once before the first render.
    fn init(&mut self) -> Option<Command> {
        None
    }

    /// Handle one message, optionally returning a command.
    fn update(&mut self, message: Message) -> Option<Command>;

    /// Draw the current state.
    fn render(&self, frame: &mut Frame);
}

/// True for key presses (Windows also reports releases and repeats).
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

/// Ctrl+C, which quits from every screen.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    is_press(key)
        && key.code == KeyCode::Char('c')
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
