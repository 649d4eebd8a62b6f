//! Wall-clock time handling for RTT booked times.
//!
//! RTT provides booked times as 4-digit "HHMM" strings (UK local time) with
//! no date attached. Everything here works on minutes since local midnight
//! and assumes at most one midnight crossing between two times.

use chrono::{Local, Timelike};

/// Minutes in a day, added to the end time when it appears before the start.
const MINUTES_PER_DAY: i32 = 24 * 60;

/// Label returned when either time is missing or too short to read.
pub const NOT_AVAILABLE: &str = "N/A";

/// Human-readable elapsed time between two "HHMM" strings.
///
/// If `end` is earlier in the day than `start`, `end` is taken to be on the
/// following day. Each two-byte field is read like a `%d` scan (leading
/// blanks skipped, optional sign); a field with no digits counts as zero.
///
/// # Examples
///
/// ```
/// use rtt_cli::domain::elapsed_label;
///
/// assert_eq!(elapsed_label("1430", "1545"), "1hr 15min");
/// assert_eq!(elapsed_label("1430", "1442"), "12min");
/// assert_eq!(elapsed_label("2355", "0005"), "10min");
/// assert_eq!(elapsed_label("1", "0500"), "N/A");
/// ```
pub fn elapsed_label(start: &str, end: &str) -> String {
    if start.len() < 4 || end.len() < 4 {
        return NOT_AVAILABLE.to_string();
    }

    let start_mins = minutes_since_midnight(start);
    let mut end_mins = minutes_since_midnight(end);

    if end_mins < start_mins {
        end_mins += MINUTES_PER_DAY;
    }

    let elapsed = end_mins - start_mins;
    let hours = elapsed / 60;
    let minutes = elapsed % 60;

    if hours == 0 {
        format!("{minutes}min")
    } else {
        format!("{hours}hr {minutes}min")
    }
}

/// The current local wall-clock time as a zero-padded "HHMM" string.
pub fn current_hhmm() -> String {
    let now = Local::now();
    format!("{:02}{:02}", now.hour(), now.minute())
}

/// Format "HHMM" as "HH:MM" for display.
///
/// Inputs shorter than four bytes are returned unchanged.
pub fn format_hhmm(time: &str) -> String {
    match (time.get(0..2), time.get(2..4)) {
        (Some(hours), Some(minutes)) => format!("{hours}:{minutes}"),
        _ => time.to_string(),
    }
}

/// Shorten `s` to at most `max_len` characters, ending in "..." when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Minutes since midnight for the first four bytes of an "HHMM" string.
///
/// Caller guarantees at least four bytes.
fn minutes_since_midnight(hhmm: &str) -> i32 {
    let bytes = hhmm.as_bytes();
    lenient_number(&bytes[0..2]) * 60 + lenient_number(&bytes[2..4])
}

/// Read a signed decimal from the start of `bytes`.
///
/// Blanks before the number are skipped and one `+` or `-` is accepted.
/// Reading stops at the first non-digit; no digits at all reads as 0.
fn lenient_number(bytes: &[u8]) -> i32 {
    let Some(start) = bytes
        .iter()
        .position(|&b| !matches!(b, b' ' | b'\t' | b'\r' | 0x0b | 0x0c))
    else {
        return 0;
    };

    let (sign, digits) = match &bytes[start..] {
        [b'-', rest @ ..] => (-1, rest),
        [b'+', rest @ ..] => (1, rest),
        rest => (1, rest),
    };

    sign * digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0, |acc, b| acc * 10 + i32::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_hour() {
        assert_eq!(elapsed_label("1430", "1442"), "12min");
    }

    #[test]
    fn hours_and_minutes() {
        assert_eq!(elapsed_label("1430", "1545"), "1hr 15min");
        assert_eq!(elapsed_label("0600", "0900"), "3hr 0min");
    }

    #[test]
    fn zero_elapsed() {
        assert_eq!(elapsed_label("1200", "1200"), "0min");
    }

    #[test]
    fn day_rollover() {
        assert_eq!(elapsed_label("2355", "0005"), "10min");
        assert_eq!(elapsed_label("2300", "0130"), "2hr 30min");
    }

    #[test]
    fn earlier_end_is_next_day() {
        // One minute earlier means almost a full day later.
        assert_eq!(elapsed_label("1200", "1159"), "23hr 59min");
    }

    #[test]
    fn short_input_is_not_available() {
        assert_eq!(elapsed_label("1", "0500"), "N/A");
        assert_eq!(elapsed_label("0500", ""), "N/A");
        assert_eq!(elapsed_label("", ""), "N/A");
        assert_eq!(elapsed_label("050", "0600"), "N/A");
    }

    #[test]
    fn extra_characters_ignored() {
        assert_eq!(elapsed_label("1430H", "1545"), "1hr 15min");
    }

    #[test]
    fn non_numeric_digits_read_as_zero() {
        assert_eq!(elapsed_label("ab30", "0045"), "15min");
        assert_eq!(elapsed_label("1000", "10xx"), "0min");
        assert_eq!(elapsed_label("????", "0100"), "1hr 0min");
    }

    #[test]
    fn partially_numeric_reads_leading_digits() {
        // "1x" reads as 1.
        assert_eq!(elapsed_label("1x00", "0200"), "1hr 0min");
    }

    #[test]
    fn leading_blank_is_skipped() {
        // " 5" is hour 5.
        assert_eq!(elapsed_label(" 530", "0600"), "30min");
        assert_eq!(elapsed_label("\t900", "0930"), "30min");
    }

    #[test]
    fn signed_fields() {
        // "-1" is hour -1, an hour before midnight.
        assert_eq!(elapsed_label("-100", "0000"), "1hr 0min");
        assert_eq!(elapsed_label("+100", "0200"), "1hr 0min");
        // A bare sign has no digits.
        assert_eq!(elapsed_label("-x00", "0100"), "1hr 0min");
    }

    #[test]
    fn start_beyond_a_day_goes_negative() {
        // "99" hours is past tomorrow's midnight too; nothing wraps twice.
        assert_eq!(elapsed_label("9900", "0000"), "-75hr 0min");
    }

    #[test]
    fn lenient_number_fields() {
        assert_eq!(lenient_number(b"12"), 12);
        assert_eq!(lenient_number(b"1x"), 1);
        assert_eq!(lenient_number(b"x1"), 0);
        assert_eq!(lenient_number(b" 7"), 7);
        assert_eq!(lenient_number(b"-7"), -7);
        assert_eq!(lenient_number(b"  "), 0);
        assert_eq!(lenient_number(b"-"), 0);
    }

    #[test]
    fn current_time_is_four_digits() {
        let now = current_hhmm();
        assert_eq!(now.len(), 4);
        assert!(now.bytes().all(|b| b.is_ascii_digit()));
        let hours: u32 = now[0..2].parse().unwrap();
        let minutes: u32 = now[2..4].parse().unwrap();
        assert!(hours < 24);
        assert!(minutes < 60);
    }

    #[test]
    fn format_hhmm_inserts_colon() {
        assert_eq!(format_hhmm("1430"), "14:30");
        assert_eq!(format_hhmm("0005"), "00:05");
        assert_eq!(format_hhmm("143"), "143");
        assert_eq!(format_hhmm(""), "");
    }

    #[test]
    fn truncate_long_names() {
        assert_eq!(truncate("GWR", 20), "GWR");
        assert_eq!(truncate("London North Eastern Railway", 20), "London North East...");
        assert_eq!(truncate("London North Eastern Railway", 20).chars().count(), 20);
    }

    #[test]
    fn truncate_exact_length_unchanged() {
        assert_eq!(truncate("abcdefghij", 10), "abcdefghij");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn hhmm(mins: u32) -> String {
        format!("{:02}{:02}", mins / 60, mins % 60)
    }

    proptest! {
        /// For ordered times the label decomposes the difference exactly.
        #[test]
        fn forward_difference(a in 0u32..1440, b in 0u32..1440) {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            let diff = end - start;
            let expected = if diff / 60 == 0 {
                format!("{}min", diff % 60)
            } else {
                format!("{}hr {}min", diff / 60, diff % 60)
            };
            prop_assert_eq!(elapsed_label(&hhmm(start), &hhmm(end)), expected);
        }

        /// The label never reaches a full day.
        #[test]
        fn under_one_day(a in 0u32..1440, b in 0u32..1440) {
            let label = elapsed_label(&hhmm(a), &hhmm(b));
            let hours: u32 = label
                .split_once("hr ")
                .map(|(h, _)| h.parse().unwrap())
                .unwrap_or(0);
            prop_assert!(hours < 24);
        }

        /// Going out and back again covers exactly one day (or nothing).
        #[test]
        fn out_and_back_sums_to_a_day(a in 0u32..1440, b in 0u32..1440) {
            let to_minutes = |label: String| -> u32 {
                let label = label.trim_end_matches("min");
                match label.split_once("hr ") {
                    Some((h, m)) => h.parse::<u32>().unwrap() * 60 + m.parse::<u32>().unwrap(),
                    None => label.parse().unwrap(),
                }
            };
            let there = to_minutes(elapsed_label(&hhmm(a), &hhmm(b)));
            let back = to_minutes(elapsed_label(&hhmm(b), &hhmm(a)));
            if a == b {
                prop_assert_eq!(there + back, 0);
            } else {
                prop_assert_eq!(there + back, 1440);
            }
        }

        /// Arbitrary strings never panic.
        #[test]
        fn never_panics(start in ".{0,8}", end in ".{0,8}") {
            let _ = elapsed_label(&start, &end);
            let _ = format_hhmm(&start);
        }
    }
}
