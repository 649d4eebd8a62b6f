//! The departure record shown to the user.

/// Platform shown when RTT gives none.
///
/// This is a display default, not a real platform assignment.
pub const DEFAULT_PLATFORM: &str = "1";

/// A single direct train from the origin to the destination.
///
/// Built once per matched service during a search and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Booked departure from the origin, "HHMM".
    pub booked_departure_time: String,
    /// Platform at the origin.
    pub departure_platform: String,
    /// Platform at the destination.
    pub arrival_platform: String,
    /// Booked arrival at the destination, "HHMM".
    pub arrival_time: String,
    /// Journey time, e.g. "1hr 15min".
    pub duration: String,
    /// Time from now until departure, e.g. "12min".
    pub leaving: String,
    /// Train operating company name.
    pub service: String,
}

/// Apply the platform default to a possibly-empty platform.
pub fn platform_or_default(platform: &str) -> String {
    if platform.is_empty() {
        DEFAULT_PLATFORM.to_string()
    } else {
        platform.to_string()
    }
}
