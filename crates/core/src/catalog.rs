//! Closed enumerations for genre tags and US state codes.
//!
//! Both are plain constant sets; membership is a linear scan, which is fine
//! for lists of this size.

/// Every genre tag a venue or artist may carry.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// The 50 US states plus DC, as two-letter postal codes.
pub const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

/// Check whether `genre` is one of [`GENRES`]. Matching is exact.
pub fn is_genre(genre: &str) -> bool {
    GENRES.contains(&genre)
}

/// Check whether `state` is one of [`US_STATES`]. Matching is exact.
pub fn is_us_state(state: &str) -> bool {
    US_STATES.contains(&state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_list_has_fifty_one_unique_entries() {
        let mut sorted: Vec<_> = US_STATES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 51);
        assert_eq!(US_STATES.len(), 51);
    }

    #[test]
    fn genre_list_has_nineteen_entries() {
        assert_eq!(GENRES.len(), 19);
    }

    #[test]
    fn known_values_are_members() {
        assert!(is_genre("Jazz"));
        assert!(is_genre("R&B"));
        assert!(is_us_state("DC"));
        assert!(is_us_state("CA"));
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(!is_genre("jazz"));
        assert!(!is_us_state("ca"));
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(!is_genre("Polka"));
        assert!(!is_us_state("PR"));
        assert!(!is_us_state(""));
    }
}
