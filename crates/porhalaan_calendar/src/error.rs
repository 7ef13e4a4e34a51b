//! Error types for calendar conversion.

use porhalaan_ephem::EphemError;
use porhalaan_time::Instant;

/// Errors from locating a new year or translating a date.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// An oracle query failed and the search policy did not absorb it.
    #[error("ephemeris query failed: {0}")]
    Ephemeris(#[from] EphemError),
    /// The backward search ran out of candidates.
    #[error("no qualifying new year within {lookback} new moons before {from}")]
    NoNewYearFound {
        /// Candidates evaluated.
        lookback: u32,
        /// Where the search started.
        from: Instant,
    },
    /// Search bound or visibility rule out of range.
    #[error("invalid search configuration: {0}")]
    InvalidSearchConfig(&'static str),
    /// The oracle contradicted itself, e.g. a "previous" new moon after the target.
    #[error("inconsistent ephemeris: {0}")]
    InconsistentEphemeris(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_bound_and_start() {
        let e = CalendarError::NoNewYearFound {
            lookback: 40,
            from: Instant::from_jd_utc(2_449_443.5),
        };
        let msg = e.to_string();
        assert!(msg.starts_with("no qualifying new year within 40 new moons before 1994-04-01"));
    }

    #[test]
    fn wraps_ephemeris_error() {
        let e: CalendarError = EphemError::UnknownStar("Vulcan".into()).into();
        assert_eq!(e.to_string(), "ephemeris query failed: unknown star 'Vulcan'");
    }
}
