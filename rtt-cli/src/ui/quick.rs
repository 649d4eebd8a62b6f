//! Quick mode: a fixed table of departures already fetched.

use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::domain::{Departure, Station};

use super::event::{Command, Message, Model, is_interrupt, is_press};
use super::table::{render_results, results_title};
use super::theme::Theme;

/// Read-only results screen for `rtt-cli FROM TO`.
#[derive(Debug)]
pub struct QuickDisplay {
    title: String,
    departures: Vec<Departure>,
    theme: Theme,
}

impl QuickDisplay {
    pub fn new(from: &Station, to: &Station, departures: Vec<Departure>, theme: Theme) -> Self {
        Self {
            title: results_title(from.name, to.name),
            departures,
            theme,
        }
    }
}

impl Model for QuickDisplay {
    fn update(&mut self, message: Message) -> Option<Command> {
        match message {
            Message::Key(key) if is_interrupt(&key) => Some(Command::Quit),
            Message::Key(key) if is_press(&key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame) {
        render_results(frame, frame.area(), &self.title, &self.departures, &self.theme);
    }
}
