//! Full-screen terminal views.
//!
//! Views implement [`Model`]: they turn [`Message`]s into state changes and
//! optional [`Command`]s, and draw themselves with ratatui. [`run`] owns the
//! terminal and performs the commands.

mod error;
mod event;
mod quick;
mod runtime;
mod selector;
mod station_list;
mod table;
mod theme;

pub use error::UiError;
pub use event::{Command, Message, Model};
pub use quick::QuickDisplay;
pub use runtime::{dispatch_search, run};
pub use selector::{ARRIVAL_TITLE, DEPARTURE_TITLE, Selector, Step};
pub use station_list::StationList;
pub use table::{HEADERS, row_cells, results_title};
pub use theme::Theme;
