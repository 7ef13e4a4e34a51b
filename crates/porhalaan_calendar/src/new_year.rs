//! Backward search for the new moon that opened the current Batak year.

use porhalaan_ephem::{Ephemeris, ObserverConfig};
use porhalaan_time::Instant;

use crate::config::{OracleErrorPolicy, SearchConfig, VisibilityRule};
use crate::error::CalendarError;
use crate::month_count::new_moon_at_or_before;
use crate::visibility::{VisibilityReport, evaluate_new_moon};

/// Most recent new moon at or before `target` that passes the visibility rule.
///
/// Candidates are visited newest first; at most `search.max_lookback` are
/// evaluated.
pub fn find_new_year_start<E: Ephemeris>(
    ephemeris: &E,
    observer: &ObserverConfig,
    rule: &VisibilityRule,
    search: &SearchConfig,
    target: Instant,
) -> Result<Instant, CalendarError> {
    locate_new_year(ephemeris, observer, rule, search, target).map(|report| report.candidate)
}

/// As [`find_new_year_start`], returning the accepted candidate's report.
pub fn locate_new_year<E: Ephemeris>(
    ephemeris: &E,
    observer: &ObserverConfig,
    rule: &VisibilityRule,
    search: &SearchConfig,
    target: Instant,
) -> Result<VisibilityReport, CalendarError> {
    search.validate()?;
    rule.validate()?;

    let mut candidate = new_moon_at_or_before(ephemeris, target)?;
    for step in 1..=search.max_lookback {
        match evaluate_new_moon(ephemeris, observer, rule, candidate) {
            Ok(report) if report.qualifies() => {
                tracing::info!(epoch = %candidate, step, "new year located");
                return Ok(report);
            }
            Ok(report) => {
                tracing::debug!(
                    step,
                    candidate = %candidate,
                    star_rises = report.star_rises_in_window,
                    star_sets = report.star_sets_in_window,
                    moon_after_sun = report.moon_sets_after_sun,
                    "candidate rejected"
                );
            }
            Err(err) => match search.oracle_errors {
                OracleErrorPolicy::Skip => {
                    tracing::warn!(step, candidate = %candidate, error = %err, "skipping candidate");
                }
                OracleErrorPolicy::Abort => return Err(err.into()),
            },
        }
        if step < search.max_lookback {
            candidate = ephemeris.previous_new_moon(candidate.add_days(-1.0))?;
        }
    }

    Err(CalendarError::NoNewYearFound {
        lookback: search.max_lookback,
        from: target,
    })
}
