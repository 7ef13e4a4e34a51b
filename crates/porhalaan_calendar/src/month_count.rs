//! Walking forward over new moons.

use porhalaan_ephem::{EphemError, Ephemeris};
use porhalaan_time::Instant;

/// New moons after `new_year_start` up to and including `end`.
///
/// A boundary exactly at `end` counts. Returns 0 when `end` precedes the
/// first boundary. Pure in its inputs: repeated calls agree.
pub fn count_months_since<E: Ephemeris>(
    ephemeris: &E,
    new_year_start: Instant,
    end: Instant,
) -> Result<u32, EphemError> {
    let mut count = 0;
    let mut cursor = new_year_start;
    loop {
        let next = ephemeris.next_new_moon(cursor)?;
        if next > end {
            break;
        }
        if next <= cursor {
            return Err(EphemError::NoConvergence("new moons did not advance"));
        }
        count += 1;
        tracing::debug!(month = count + 1, starts = %next, "month boundary");
        cursor = next;
    }
    Ok(count)
}

/// The new moon at `instant` if one falls exactly there, else the one before.
///
/// The oracle's `previous_new_moon` is strict; one extra forward query
/// makes the lookup inclusive.
pub fn new_moon_at_or_before<E: Ephemeris>(
    ephemeris: &E,
    instant: Instant,
) -> Result<Instant, EphemError> {
    let previous = ephemeris.previous_new_moon(instant)?;
    let following = ephemeris.next_new_moon(previous)?;
    Ok(if following <= instant {
        following
    } else {
        previous
    })
}
