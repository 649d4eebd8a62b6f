//! Domain types for the departure lookup.
//!
//! Plain values shared by the API client, the station directory and the
//! terminal UI. Nothing in here performs I/O apart from reading the clock.

mod departure;
mod station;
mod time;

pub use departure::{DEFAULT_PLATFORM, Departure, platform_or_default};
pub use station::{Crs, InvalidCrs, Station};
pub use time::{NOT_AVAILABLE, current_hhmm, elapsed_label, format_hhmm, truncate};
