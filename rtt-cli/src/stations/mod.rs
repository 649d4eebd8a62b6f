//! Station directory and lookup.
//!
//! Provides the static CRS code → station name table, exact code lookup
//! for quick mode and fuzzy filtering for the interactive picker.

mod directory;
mod filter;

pub use directory::{STATIONS, find};
pub use filter::filter;
