//! Fuzzy station filtering for the interactive picker.

use crate::domain::Station;

/// How well a station matched a query. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchTier {
    /// Query is the station's CRS code.
    Code,
    /// Name starts with the query.
    NamePrefix,
    /// "name code" contains the query.
    Substring,
    /// Query characters appear in order somewhere in "name code".
    Subsequence,
}

/// Stations matching `query`, best matches first.
///
/// Matching is case-insensitive against "name code". Within a tier the
/// input order is kept. An empty (or all-whitespace) query matches
/// everything in input order.
pub fn filter<'a>(stations: &'a [Station], query: &str) -> Vec<&'a Station> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return stations.iter().collect();
    }

    let mut matches: Vec<(MatchTier, &Station)> = stations
        .iter()
        .filter_map(|s| match_tier(s, &query).map(|tier| (tier, s)))
        .collect();

    // sort_by_key is stable, so table order survives within a tier.
    matches.sort_by_key(|(tier, _)| *tier);
    matches.into_iter().map(|(_, s)| s).collect()
}

/// `query` must already be lower-case and non-empty.
fn match_tier(station: &Station, query: &str) -> Option<MatchTier> {
    if station.code.eq_ignore_ascii_case(query) {
        return Some(MatchTier::Code);
    }

    let name = station.name.to_lowercase();
    if name.starts_with(query) {
        return Some(MatchTier::NamePrefix);
    }

    let haystack = station.filter_value().to_lowercase();
    if haystack.contains(query) {
        return Some(MatchTier::Substring);
    }

    if is_subsequence(query, &haystack) {
        return Some(MatchTier::Subsequence);
    }

    None
}

/// True if every char of `needle` appears in `haystack`, in order.
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|c| hay.any(|h| h == c))
}
