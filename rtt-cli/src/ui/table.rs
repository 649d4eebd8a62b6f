//! Departure table shared by the quick and interactive results views.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table};

use crate::domain::{Departure, format_hhmm, truncate};

use super::theme::Theme;

/// Column headings, in display order.
pub const HEADERS: [&str; 6] = ["Time", "Leaving", "Dep Plat", "Arr Plat", "Service", "Duration"];

/// Operator names longer than this are shortened with "...".
pub const SERVICE_WIDTH: usize = 20;

/// Footer under every results screen.
pub const QUIT_HINT: &str = "Press q to quit";

/// Cell text for one departure, in [`HEADERS`] order.
pub fn row_cells(departure: &Departure) -> [String; 6] {
    [
        format_hhmm(&departure.booked_departure_time),
        departure.leaving.clone(),
        departure.departure_platform.clone(),
        departure.arrival_platform.clone(),
        truncate(&departure.service, SERVICE_WIDTH),
        departure.duration.clone(),
    ]
}

/// "Trains from X to Y".
pub fn results_title(from: &str, to: &str) -> String {
    format!("Trains from {from} to {to}")
}

/// Width of each column: the widest of its heading and cells.
fn column_widths(rows: &[[String; 6]]) -> [u16; 6] {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths.map(|w| u16::try_from(w).unwrap_or(u16::MAX))
}

/// Title, bordered table and quit hint.
pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    departures: &[Departure],
    theme: &Theme,
) {
    let [title_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(title.to_string(), theme.title_style())),
        title_area,
    );

    let rows: Vec<[String; 6]> = departures.iter().map(row_cells).collect();
    let widths = column_widths(&rows).map(Constraint::Length);

    // One colour per column so the eye can follow a train across.
    let column_styles = [
        theme.time,
        theme.leaving,
        theme.dep_platform,
        theme.arr_platform,
        theme.service,
        theme.duration,
    ]
    .map(|color| Style::new().fg(color));

    let body = rows.into_iter().map(|cells| {
        Row::new(
            cells
                .into_iter()
                .zip(column_styles)
                .map(|(text, style)| Cell::from(text).style(style)),
        )
    });

    let header = Row::new(HEADERS).style(theme.title_style().add_modifier(Modifier::UNDERLINED));

    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(2)
        .block(Block::bordered().border_style(Style::new().fg(theme.border)));

    frame.render_widget(table, table_area);
    frame.render_widget(
        Paragraph::new(Line::styled(QUIT_HINT, theme.muted_style())),
        footer_area,
    );
}

/// Buffer contents as text, one line per row. Used by view tests.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = usize::from(buffer.area.width.max(1));
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) fn sample_departure(time: &str, service: &str) -> Departure {
    Departure {
        booked_departure_time: time.to_string(),
        departure_platform: "4".to_string(),
        arrival_platform: "9".to_string(),
        arrival_time: "1545".to_string(),
        duration: "1hr 15min".to_string(),
        leaving: "12min".to_string(),
        service: service.to_string(),
    }
}
