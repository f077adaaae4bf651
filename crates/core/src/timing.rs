//! Past/upcoming classification of shows.
//!
//! The classification is never stored. Callers take one `now` per request and
//! pass it everywhere so a single response cannot straddle the boundary.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::types::Timestamp;

/// Accepted naive formats for a submitted start time, tried in order.
/// Naive values are interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Where a show sits relative to the request's `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowTiming {
    Past,
    Upcoming,
}

impl ShowTiming {
    /// A show starting exactly at `now` counts as upcoming.
    pub fn classify(start_time: Timestamp, now: Timestamp) -> Self {
        if start_time < now {
            Self::Past
        } else {
            Self::Upcoming
        }
    }
}

/// Split `items` into `(past, upcoming)`, preserving their relative order.
pub fn partition_by_timing<T>(
    items: impl IntoIterator<Item = T>,
    start_time: impl Fn(&T) -> Timestamp,
    now: Timestamp,
) -> (Vec<T>, Vec<T>) {
    items
        .into_iter()
        .partition(|item| ShowTiming::classify(start_time(item), now) == ShowTiming::Past)
}

/// Parse a submitted show start time.
///
/// Accepts RFC 3339 (any offset, normalised to UTC) and the naive layouts in
/// [`NAIVE_FORMATS`]. Returns `None` for anything else.
pub fn parse_start_time(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap()
    }

    #[test]
    fn one_hour_ahead_is_upcoming() {
        let start = now() + Duration::hours(1);
        assert_eq!(ShowTiming::classify(start, now()), ShowTiming::Upcoming);
    }

    #[test]
    fn one_hour_ago_is_past() {
        let start = now() - Duration::hours(1);
        assert_eq!(ShowTiming::classify(start, now()), ShowTiming::Past);
    }

    #[test]
    fn starting_now_is_upcoming() {
        assert_eq!(ShowTiming::classify(now(), now()), ShowTiming::Upcoming);
    }

    #[test]
    fn partition_keeps_order_within_each_side() {
        let starts = vec![
            now() - Duration::days(2),
            now() + Duration::days(1),
            now() - Duration::days(1),
            now() + Duration::days(3),
        ];
        let (past, upcoming) = partition_by_timing(starts.clone(), |s| *s, now());
        assert_eq!(past, vec![starts[0], starts[2]]);
        assert_eq!(upcoming, vec![starts[1], starts[3]]);
    }

    #[test]
    fn parses_form_layouts() {
        let expected = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();
        assert_eq!(parse_start_time("2035-04-01 20:00:00"), Some(expected));
        assert_eq!(parse_start_time("2035-04-01T20:00"), Some(expected));
        assert_eq!(parse_start_time("2035-04-01T20:00:00"), Some(expected));
        assert_eq!(parse_start_time(" 2035-04-01 20:00 "), Some(expected));
    }

    #[test]
    fn parses_rfc3339_and_normalises_offset() {
        let expected = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();
        assert_eq!(parse_start_time("2035-04-01T20:00:00Z"), Some(expected));
        assert_eq!(parse_start_time("2035-04-01T22:00:00+02:00"), Some(expected));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_start_time(""), None);
        assert_eq!(parse_start_time("tomorrow"), None);
        assert_eq!(parse_start_time("2035-13-01 20:00:00"), None);
    }
}
