//! Interactive mode: pick an origin, pick a destination, show departures.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Wrap};
use tracing::{debug, info};

use crate::domain::{Departure, Station};
use crate::rtt::RttError;
use crate::stations::STATIONS;

use super::event::{Command, Message, Model, is_interrupt, is_press};
use super::station_list::StationList;
use super::table::{QUIT_HINT, render_results, results_title};
use super::theme::Theme;

pub const DEPARTURE_TITLE: &str = "Select Departure Station";
pub const ARRIVAL_TITLE: &str = "Select Arrival Station";

/// Rows the list gives up to surrounding chrome.
const CHROME_ROWS: u16 = 4;

/// Where the user is in the pick-pick-search flow.
#[derive(Debug)]
pub enum Step {
    SelectingFrom,
    SelectingTo {
        from: Station,
    },
    Searching {
        from: Station,
        to: Station,
    },
    ShowingResults {
        from: Station,
        to: Station,
        outcome: Result<Vec<Departure>, RttError>,
    },
}

/// State machine behind the interactive picker.
#[derive(Debug)]
pub struct Selector {
    step: Step,
    list: StationList,
    theme: Theme,
}

impl Selector {
    pub fn new(theme: Theme) -> Self {
        Self::with_stations(STATIONS, theme)
    }

    pub fn with_stations(stations: &'static [Station], theme: Theme) -> Self {
        Self {
            step: Step::SelectingFrom,
            list: StationList::new(DEPARTURE_TITLE, stations, theme),
            theme,
        }
    }

    pub fn step(&self) -> &Step {
        &self.step
    }

    pub fn list(&self) -> &StationList {
        &self.list
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if !is_press(&key) {
            return None;
        }

        match self.step {
            Step::SelectingFrom | Step::SelectingTo { .. } => match key.code {
                KeyCode::Enter => self.confirm(),
                KeyCode::Esc if self.list.is_filtering() => {
                    self.list.reset_filter();
                    None
                }
                KeyCode::Esc => Some(Command::Quit),
                _ => {
                    self.list.handle_key(key);
                    None
                }
            },
            Step::Searching { .. } => None,
            Step::ShowingResults { .. } => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
                _ => None,
            },
        }
    }

    /// Enter on a highlighted station.
    fn confirm(&mut self) -> Option<Command> {
        let station = self.list.selected()?;

        match self.step {
            Step::SelectingFrom => {
                debug!(code = station.code, "origin chosen");
                self.step = Step::SelectingTo { from: station };
                self.list.set_title(ARRIVAL_TITLE);
                self.list.reset_filter();
                None
            }
            Step::SelectingTo { from } => {
                info!(from = from.code, to = station.code, "searching");
                self.step = Step::Searching { from, to: station };
                Some(Command::Search { from, to: station })
            }
            _ => None,
        }
    }

    fn search_finished(&mut self, outcome: Result<Vec<Departure>, RttError>) {
        match self.step {
            Step::Searching { from, to } => {
                self.step = Step::ShowingResults { from, to, outcome };
            }
            _ => debug!("search result arrived outside of a search; ignored"),
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, text: Text<'static>) {
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
}

impl Model for Selector {
    fn update(&mut self, message: Message) -> Option<Command> {
        match message {
            Message::Resize { width, height } => {
                self.list
                    .set_size(width, height.saturating_sub(CHROME_ROWS));
                None
            }
            Message::Key(key) if is_interrupt(&key) => Some(Command::Quit),
            Message::Key(key) => self.handle_key(key),
            Message::SearchComplete(outcome) => {
                self.search_finished(outcome);
                None
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        match &self.step {
            Step::SelectingFrom => self.list.render(frame, area),
            Step::SelectingTo { from } => {
                let [from_area, list_area] =
                    Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);
                frame.render_widget(
                    Paragraph::new(Line::styled(
                        format!("From: {} ({})", from.name, from.code),
                        self.theme.muted_style(),
                    )),
                    from_area,
                );
                self.list.render(frame, list_area);
            }
            Step::Searching { from, to } => {
                let text = Text::from(Line::styled(
                    format!("Searching for trains from {} to {}...", from.name, to.name),
                    self.theme.title_style(),
                ));
                render_message(frame, area, text);
            }
            Step::ShowingResults {
                outcome: Err(err), ..
            } => {
                let text = Text::from(vec![
                    Line::styled(format!("Error: {err}"), self.theme.error_style()),
                    Line::default(),
                    Line::styled(QUIT_HINT, self.theme.muted_style()),
                ]);
                render_message(frame, area, text);
            }
            Step::ShowingResults {
                outcome: Ok(departures),
                ..
            } if departures.is_empty() => {
                let text = Text::from(vec![
                    Line::styled("No departures found.", self.theme.muted_style()),
                    Line::default(),
                    Line::styled(QUIT_HINT, self.theme.muted_style()),
                ]);
                render_message(frame, area, text);
            }
            Step::ShowingResults {
                from,
                to,
                outcome: Ok(departures),
            } => render_results(
                frame,
                area,
                &results_title(from.name, to.name),
                departures,
                &self.theme,
            ),
        }
    }
}
