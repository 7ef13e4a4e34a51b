//! Next rising or setting of a body after a given instant.
//!
//! Iterative hour-angle solver: from the body's place, find the hour angle
//! at which its upper limb meets the observer's horizon, step to it at the
//! body's diurnal rate, recompute the place there, repeat until the step is
//! below the convergence threshold (Meeus Ch. 15, Montenbruck & Pfleger).
//!
//! Target altitude of the body's centre:
//!
//! `h0 = horizon − refraction − semidiameter + parallax`

use std::f64::consts::TAU;

use porhalaan_frames::cos_hour_angle_at_altitude;
use porhalaan_time::{Instant, SIDEREAL_RATE_RAD_PER_DAY, hour_angle_rad, wrap_pi};

use crate::body::{ApparentPlace, Body};
use crate::error::EphemError;
use crate::observer::{ObserverConfig, RiseSetEvent};

/// Equatorial Earth radius in meters, for the elevation term of parallax.
const EARTH_RADIUS_M: f64 = 6_378_140.0;

/// Events closer than this to the query instant count as at the query
/// instant and are skipped (~0.9 s).
const SAME_INSTANT_DAYS: f64 = 1.0e-5;

/// Solver tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Iteration cap per event. Default: 8.
    pub max_iterations: usize,
    /// Stop once a correction is below this many days. Default: 1e-6 (~0.09 s).
    pub convergence_days: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            max_iterations: 8,
            convergence_days: 1.0e-6,
        }
    }
}

/// Altitude in degrees the body's centre has when its upper limb touches
/// the observer's horizon.
pub fn target_altitude_deg(observer: &ObserverConfig, place: &ApparentPlace) -> f64 {
    let parallax = place.parallax_deg * (1.0 + observer.location.elevation_m / EARTH_RADIUS_M);
    observer.horizon_deg - observer.refraction_deg() - place.semidiameter_deg + parallax
}

/// Body right ascension and the hour angle of the event at `jd_utc`.
fn event_hour_angle(
    observer: &ObserverConfig,
    body: Body,
    event: RiseSetEvent,
    jd_utc: f64,
) -> Result<(f64, f64), EphemError> {
    let place = body.apparent_place(Instant::from_jd_utc(jd_utc).jd_tt());
    let h0 = target_altitude_deg(observer, &place).to_radians();
    let cos_h = cos_hour_angle_at_altitude(
        h0,
        place.equatorial.dec_rad,
        observer.location.latitude_rad(),
    );
    if cos_h > 1.0 {
        return Err(EphemError::NeverRises {
            body: body.name().to_string(),
        });
    }
    if cos_h < -1.0 {
        return Err(EphemError::NeverSets {
            body: body.name().to_string(),
        });
    }
    let h = cos_h.acos();
    let ha_target = if event.is_rising() { -h } else { h };
    Ok((place.equatorial.ra_rad, ha_target))
}

/// Newton-style refinement from an initial guess. Returns a UTC JD.
fn refine(
    observer: &ObserverConfig,
    body: Body,
    event: RiseSetEvent,
    jd_guess: f64,
    config: &RiseSetConfig,
) -> Result<f64, EphemError> {
    let rate = SIDEREAL_RATE_RAD_PER_DAY - body.mean_ra_rate_rad_per_day();
    let lon = observer.location.longitude_rad();
    let mut jd = jd_guess;
    for _ in 0..config.max_iterations {
        let (ra, ha_target) = event_hour_angle(observer, body, event, jd)?;
        let correction = wrap_pi(ha_target - hour_angle_rad(jd, lon, ra)) / rate;
        jd += correction;
        if correction.abs() < config.convergence_days {
            return Ok(jd);
        }
    }
    Err(EphemError::NoConvergence("rise/set hour-angle iteration"))
}

/// First `event` of `body` strictly after `as_of`.
///
/// # Errors
/// * `NeverRises` / `NeverSets` when the body does not cross the horizon
///   at this latitude around `as_of`
/// * `InvalidObserver` for out-of-range observer parameters
/// * `NoConvergence` if the iteration does not settle
pub fn next_rise_set(
    observer: &ObserverConfig,
    body: Body,
    event: RiseSetEvent,
    as_of: Instant,
    config: &RiseSetConfig,
) -> Result<Instant, EphemError> {
    observer.validate()?;
    let rate = SIDEREAL_RATE_RAD_PER_DAY - body.mean_ra_rate_rad_per_day();
    let period = TAU / rate;
    let lon = observer.location.longitude_rad();
    let jd0 = as_of.jd_utc();
    let floor = jd0 + SAME_INSTANT_DAYS;

    let (ra, ha_target) = event_hour_angle(observer, body, event, jd0)?;
    let lead = (ha_target - hour_angle_rad(jd0, lon, ra)).rem_euclid(TAU) / rate;
    let mut jd = refine(observer, body, event, jd0 + lead, config)?;

    // The place moved during the day: the converged event can fall just
    // before `as_of`, or a full period late when the real one is just after.
    if jd <= floor {
        jd = refine(observer, body, event, jd + period, config)?;
    } else if jd - period > floor {
        let earlier = refine(observer, body, event, jd - period, config)?;
        if earlier > floor {
            jd = earlier;
        }
    }
    if jd <= floor {
        return Err(EphemError::NoConvergence(
            "no rise/set found after the requested instant",
        ));
    }

    tracing::trace!(body = %body, ?event, as_of = jd0, jd_utc = jd, "rise/set solved");
    Ok(Instant::from_jd_utc(jd))
}

#[cfg(test)]
mod tests {
    use porhalaan_frames::altitude_rad;
    use porhalaan_time::UtcTime;

    use super::*;
    use crate::observer::GeoLocation;
    use crate::stars::Star;

    fn toba() -> ObserverConfig {
        ObserverConfig::new(GeoLocation::new(-2.55, 98.55, 905.0)).with_horizon_deg(-34.0 / 60.0)
    }

    fn at(s: &str) -> Instant {
        Instant::from_utc(&s.parse::<UtcTime>().unwrap()).unwrap()
    }

    fn solve(obs: &ObserverConfig, body: Body, event: RiseSetEvent, as_of: Instant) -> Instant {
        next_rise_set(obs, body, event, as_of, &RiseSetConfig::default()).unwrap()
    }

    /// Altitude of the body's centre at the event minus the target altitude.
    fn altitude_residual_deg(obs: &ObserverConfig, body: Body, t: Instant) -> f64 {
        let place = body.apparent_place(t.jd_tt());
        let ha = hour_angle_rad(t.jd_utc(), obs.location.longitude_rad(), place.equatorial.ra_rad);
        let alt = altitude_rad(ha, place.equatorial.dec_rad, obs.location.latitude_rad());
        alt.to_degrees() - target_altitude_deg(obs, &place)
    }

    #[test]
    fn lake_toba_equinox_sunset() {
        // Solar noon near 05:33 UTC, semi-arc a little over 6 h.
        let obs = toba();
        let t = solve(&obs, Body::Sun, RiseSetEvent::Setting, at("2024-03-20"));
        let utc = t.to_utc();
        assert_eq!(utc.date_string(), "2024-03-20");
        let hours = f64::from(utc.hour) + f64::from(utc.minute) / 60.0;
        assert!((11.3..11.9).contains(&hours), "sunset at {utc}");
    }

    #[test]
    fn event_lies_on_target_altitude() {
        let obs = toba();
        let as_of = at("1993-05-21T14:07:00");
        for body in [
            Body::Sun,
            Body::Moon,
            Body::Star(Star::Antares),
            Body::Star(Star::Betelgeuse),
        ] {
            for event in [RiseSetEvent::Rising, RiseSetEvent::Setting] {
                let t = solve(&obs, body, event, as_of);
                let r = altitude_residual_deg(&obs, body, t);
                assert!(r.abs() < 1e-3, "{body} {event:?}: residual {r}°");
            }
        }
    }

    #[test]
    fn strictly_after_and_within_one_period() {
        let obs = toba();
        let as_of = at("2000-01-01T06:00:00");
        for body in [Body::Sun, Body::Moon, Body::Star(Star::Sirius)] {
            for event in [RiseSetEvent::Rising, RiseSetEvent::Setting] {
                let t = solve(&obs, body, event, as_of);
                let lead = t - as_of;
                assert!(lead > 0.0 && lead < 1.05, "{body} {event:?}: lead {lead} d");
            }
        }
    }

    #[test]
    fn as_of_just_after_event_gives_the_next_one() {
        let obs = toba();
        let first = solve(&obs, Body::Sun, RiseSetEvent::Setting, at("2010-07-01"));
        let second = solve(&obs, Body::Sun, RiseSetEvent::Setting, first.add_hours(1.0 / 60.0));
        let gap = second - first;
        assert!((gap - 1.0).abs() < 0.01, "gap = {gap} d");
    }

    #[test]
    fn as_of_exactly_at_event_skips_it() {
        let obs = toba();
        let first = solve(&obs, Body::Moon, RiseSetEvent::Setting, at("2015-09-10"));
        let again = solve(&obs, Body::Moon, RiseSetEvent::Setting, first);
        assert!(again > first);
        assert!((again - first) > 0.9, "gap = {}", again - first);
    }

    #[test]
    fn moonsets_drift_later_each_day() {
        let obs = toba();
        let first = solve(&obs, Body::Moon, RiseSetEvent::Setting, at("2015-09-10"));
        let second = solve(&obs, Body::Moon, RiseSetEvent::Setting, first.add_hours(0.1));
        let gap_h = (second - first) * 24.0;
        assert!((24.3..25.5).contains(&gap_h), "gap = {gap_h} h");
    }

    #[test]
    fn polar_night_never_rises() {
        let obs = ObserverConfig::new(GeoLocation::new(80.0, 15.0, 0.0));
        let err = next_rise_set(
            &obs,
            Body::Sun,
            RiseSetEvent::Rising,
            at("2020-12-21"),
            &RiseSetConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EphemError::NeverRises { ref body } if body == "Sun"));
    }

    #[test]
    fn circumpolar_star_never_sets() {
        let obs = ObserverConfig::new(GeoLocation::new(-70.0, 0.0, 0.0));
        let err = next_rise_set(
            &obs,
            Body::Star(Star::Canopus),
            RiseSetEvent::Setting,
            at("2020-01-01"),
            &RiseSetConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EphemError::NeverSets { .. }));
    }

    #[test]
    fn invalid_observer_is_rejected() {
        let obs = ObserverConfig::new(GeoLocation::new(-2.55, 200.0, 0.0));
        let err = next_rise_set(
            &obs,
            Body::Sun,
            RiseSetEvent::Rising,
            at("2020-01-01"),
            &RiseSetConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EphemError::InvalidObserver(_)));
    }

    #[test]
    fn lower_horizon_delays_setting() {
        let flat = ObserverConfig::new(GeoLocation::new(-2.55, 98.55, 0.0));
        let low = flat.with_horizon_deg(-1.0);
        let as_of = at("2005-05-05");
        let a = solve(&flat, Body::Sun, RiseSetEvent::Setting, as_of);
        let b = solve(&low, Body::Sun, RiseSetEvent::Setting, as_of);
        // Near the equator 1° of altitude is about 4 minutes.
        let delay_min = (b - a) * 1440.0;
        assert!((3.5..4.5).contains(&delay_min), "delay = {delay_min} min");
    }
}
