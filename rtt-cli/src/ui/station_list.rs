//! Filterable station list used by both picker steps.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::domain::Station;
use crate::stations::filter;

use super::event::is_press;
use super::theme::Theme;

/// Rows taken by the title and filter line above the list.
const HEADER_ROWS: u16 = 2;

/// Station list with a type-to-filter query and a cursor.
#[derive(Debug, Clone)]
pub struct StationList {
    title: String,
    stations: &'static [Station],
    query: String,
    visible: Vec<&'static Station>,
    cursor: usize,
    width: u16,
    height: u16,
    theme: Theme,
}

impl StationList {
    pub fn new(title: impl Into<String>, stations: &'static [Station], theme: Theme) -> Self {
        Self {
            title: title.into(),
            stations,
            query: String::new(),
            visible: stations.iter().collect(),
            cursor: 0,
            width: 0,
            height: 0,
            theme,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Current filter text.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_filtering(&self) -> bool {
        !self.query.is_empty()
    }

    /// Stations passing the filter, best match first.
    pub fn visible(&self) -> &[&'static Station] {
        &self.visible
    }

    /// The highlighted station, if any pass the filter.
    pub fn selected(&self) -> Option<Station> {
        self.visible.get(self.cursor).map(|s| **s)
    }

    /// Clear the filter and move the cursor back to the top.
    pub fn reset_filter(&mut self) {
        self.query.clear();
        self.refilter();
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Rows of stations shown at once; the PageUp/PageDown step.
    fn page_size(&self) -> usize {
        usize::from(self.height.saturating_sub(HEADER_ROWS)).max(1)
    }

    fn refilter(&mut self) {
        self.visible = filter(self.stations, &self.query);
        self.cursor = 0;
    }

    fn last_index(&self) -> usize {
        self.visible.len().saturating_sub(1)
    }

    /// Apply a navigation or filter key.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if !is_press(&key) {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Char('p') if ctrl => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor = (self.cursor + 1).min(self.last_index()),
            KeyCode::Char('n') if ctrl => self.cursor = (self.cursor + 1).min(self.last_index()),
            KeyCode::PageUp => self.cursor = self.cursor.saturating_sub(self.page_size()),
            KeyCode::PageDown => {
                self.cursor = (self.cursor + self.page_size()).min(self.last_index())
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.last_index(),
            KeyCode::Backspace => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                self.query.push(c);
                self.refilter();
            }
            _ => {}
        }
    }

    /// Draw the title, filter line and list into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [title_area, filter_area, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::styled(self.title.clone(), self.theme.title_style())),
            title_area,
        );

        let filter_line = if self.is_filtering() {
            Line::from(vec![
                Span::styled("Filter: ", self.theme.muted_style()),
                Span::raw(self.query.clone()),
                Span::styled(
                    format!("  ({} of {})", self.visible.len(), self.stations.len()),
                    self.theme.muted_style(),
                ),
            ])
        } else {
            Line::styled("Type to filter, Enter to choose", self.theme.muted_style())
        };
        frame.render_widget(Paragraph::new(filter_line), filter_area);

        if self.visible.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::styled("No matching stations", self.theme.muted_style())),
                list_area,
            );
            return;
        }

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .map(|station| {
                ListItem::new(Line::from(vec![
                    Span::raw(station.name),
                    Span::raw("  "),
                    Span::styled(station.code, self.theme.muted_style()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::new()
                    .fg(self.theme.title)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, list_area, &mut state);
    }
}
