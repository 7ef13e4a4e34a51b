//! The star-and-moon test a new moon must pass to open the Batak year.
//!
//! On the evening of the candidate new moon, seen from the observer:
//! - A: the rising star comes up within the window after sunset
//! - B: the setting star goes down within the same window
//! - C: the Moon sets after the Sun
//!
//! The candidate qualifies when all three hold.

use porhalaan_ephem::{Body, EphemError, Ephemeris, ObserverConfig};
use porhalaan_time::Instant;

use crate::config::VisibilityRule;

/// Everything the rule looked at for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityReport {
    /// The new moon under test.
    pub candidate: Instant,
    /// First sunset after the candidate.
    pub sunset: Instant,
    /// First rising of the rising star after sunset.
    pub star_rise: Instant,
    /// First setting of the setting star after sunset.
    pub star_set: Instant,
    /// First moonset after the candidate.
    pub moonset: Instant,
    /// Window end, `sunset + window_hours`.
    pub window_end: Instant,
    /// Condition A.
    pub star_rises_in_window: bool,
    /// Condition B.
    pub star_sets_in_window: bool,
    /// Condition C.
    pub moon_sets_after_sun: bool,
}

impl VisibilityReport {
    /// All three conditions hold.
    pub fn qualifies(&self) -> bool {
        self.star_rises_in_window && self.star_sets_in_window && self.moon_sets_after_sun
    }
}

/// Run the visibility rule for `candidate` and keep every intermediate instant.
///
/// Each query carries its own as-of instant: sunset and moonset are taken
/// as of the candidate, the star events as of that sunset. Oracle failures
/// are returned unchanged; the caller picks the policy.
pub fn evaluate_new_moon<E: Ephemeris>(
    ephemeris: &E,
    observer: &ObserverConfig,
    rule: &VisibilityRule,
    candidate: Instant,
) -> Result<VisibilityReport, EphemError> {
    let sunset = ephemeris.next_sunset(observer, candidate)?;
    let star_rise = ephemeris.next_rising(observer, Body::Star(rule.rising_star), sunset)?;
    let star_set = ephemeris.next_setting(observer, Body::Star(rule.setting_star), sunset)?;
    let moonset = ephemeris.next_moonset(observer, candidate)?;

    let window_end = sunset.add_hours(rule.window_hours);
    let in_window = |t: Instant| sunset <= t && t <= window_end;

    Ok(VisibilityReport {
        candidate,
        sunset,
        star_rise,
        star_set,
        moonset,
        window_end,
        star_rises_in_window: in_window(star_rise),
        star_sets_in_window: in_window(star_set),
        moon_sets_after_sun: moonset > sunset,
    })
}

/// Whether `candidate` opens a Batak year.
pub fn is_qualifying_new_moon<E: Ephemeris>(
    ephemeris: &E,
    observer: &ObserverConfig,
    rule: &VisibilityRule,
    candidate: Instant,
) -> Result<bool, EphemError> {
    evaluate_new_moon(ephemeris, observer, rule, candidate).map(|r| r.qualifies())
}

#[cfg(test)]
mod tests {
    use porhalaan_ephem::Star;

    use super::*;
    use crate::config::lake_toba;

    /// Fixed offsets from the as-of instant, in hours.
    struct Offsets {
        sunset: f64,
        rise: f64,
        set: f64,
        moonset: f64,
    }

    impl Ephemeris for Offsets {
        fn next_rising(
            &self,
            _: &ObserverConfig,
            body: Body,
            as_of: Instant,
        ) -> Result<Instant, EphemError> {
            match body {
                Body::Star(Star::Canopus) => Err(EphemError::NeverRises {
                    body: body.to_string(),
                }),
                _ => Ok(as_of.add_hours(self.rise)),
            }
        }

        fn next_setting(
            &self,
            _: &ObserverConfig,
            body: Body,
            as_of: Instant,
        ) -> Result<Instant, EphemError> {
            let h = match body {
                Body::Sun => self.sunset,
                Body::Moon => self.moonset,
                Body::Star(_) => self.set,
            };
            Ok(as_of.add_hours(h))
        }

        fn previous_new_moon(&self, instant: Instant) -> Result<Instant, EphemError> {
            Ok(instant.add_days(-29.5))
        }

        fn next_new_moon(&self, instant: Instant) -> Result<Instant, EphemError> {
            Ok(instant.add_days(29.5))
        }
    }

    fn check(o: Offsets) -> VisibilityReport {
        let candidate = Instant::from_jd_utc(2_449_000.5);
        evaluate_new_moon(&o, &lake_toba(), &VisibilityRule::default(), candidate).unwrap()
    }

    #[test]
    fn all_conditions_met() {
        let r = check(Offsets {
            sunset: 5.0,
            rise: 0.5,
            set: 2.0,
            moonset: 6.0,
        });
        assert!(r.qualifies());
        assert_eq!(r.sunset, r.candidate.add_hours(5.0));
        assert_eq!(r.star_rise, r.sunset.add_hours(0.5));
        assert_eq!(r.window_end, r.sunset.add_hours(3.5));
    }

    #[test]
    fn window_edge_is_inclusive() {
        let r = check(Offsets {
            sunset: 5.0,
            rise: 3.5,
            set: 0.0,
            moonset: 6.0,
        });
        assert!(r.star_rises_in_window);
        assert!(r.star_sets_in_window);
        assert!(r.qualifies());
    }

    #[test]
    fn late_star_fails_condition_a() {
        let r = check(Offsets {
            sunset: 5.0,
            rise: 3.6,
            set: 1.0,
            moonset: 6.0,
        });
        assert!(!r.star_rises_in_window);
        assert!(r.star_sets_in_window);
        assert!(!r.qualifies());
    }

    #[test]
    fn late_setting_star_fails_condition_b() {
        let r = check(Offsets {
            sunset: 5.0,
            rise: 1.0,
            set: 4.0,
            moonset: 6.0,
        });
        assert!(!r.star_sets_in_window);
        assert!(!r.qualifies());
    }

    #[test]
    fn moon_down_before_sun_fails_condition_c() {
        let r = check(Offsets {
            sunset: 5.0,
            rise: 1.0,
            set: 2.0,
            moonset: 4.0,
        });
        assert!(!r.moon_sets_after_sun);
        assert!(!r.qualifies());
    }

    #[test]
    fn simultaneous_moonset_is_not_after() {
        let r = check(Offsets {
            sunset: 5.0,
            rise: 1.0,
            set: 2.0,
            moonset: 5.0,
        });
        assert!(!r.moon_sets_after_sun);
    }

    #[test]
    fn oracle_error_propagates() {
        let o = Offsets {
            sunset: 5.0,
            rise: 1.0,
            set: 2.0,
            moonset: 6.0,
        };
        let rule = VisibilityRule {
            rising_star: Star::Canopus,
            ..VisibilityRule::default()
        };
        let err = is_qualifying_new_moon(&o, &lake_toba(), &rule, Instant::from_jd_utc(2_449_000.5))
            .unwrap_err();
        assert!(err.is_unobservable());
    }
}
