//! Analytic implementation of [`Ephemeris`].

use porhalaan_time::Instant;

use crate::body::Body;
use crate::error::EphemError;
use crate::lunar_phase;
use crate::observer::{ObserverConfig, RiseSetEvent};
use crate::oracle::Ephemeris;
use crate::riseset::{RiseSetConfig, next_rise_set};

/// Self-contained ephemeris built on the Meeus series.
///
/// Needs no data files. Stateless apart from solver tuning, so a single
/// value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticEphemeris {
    config: RiseSetConfig,
}

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RiseSetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RiseSetConfig {
        &self.config
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn next_rising(
        &self,
        observer: &ObserverConfig,
        body: Body,
        as_of: Instant,
    ) -> Result<Instant, EphemError> {
        next_rise_set(observer, body, RiseSetEvent::Rising, as_of, &self.config)
    }

    fn next_setting(
        &self,
        observer: &ObserverConfig,
        body: Body,
        as_of: Instant,
    ) -> Result<Instant, EphemError> {
        next_rise_set(observer, body, RiseSetEvent::Setting, as_of, &self.config)
    }

    fn previous_new_moon(&self, instant: Instant) -> Result<Instant, EphemError> {
        Ok(lunar_phase::previous_new_moon(instant))
    }

    fn next_new_moon(&self, instant: Instant) -> Result<Instant, EphemError> {
        Ok(lunar_phase::next_new_moon(instant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::GeoLocation;

    #[test]
    fn usable_through_a_reference() {
        fn sunset_via<E: Ephemeris>(e: E, obs: &ObserverConfig, t: Instant) -> Instant {
            e.next_sunset(obs, t).unwrap()
        }
        let eph = AnalyticEphemeris::new();
        let obs = ObserverConfig::new(GeoLocation::new(-2.55, 98.55, 0.0));
        let t = Instant::from_jd_utc(2_450_000.5);
        assert_eq!(sunset_via(&eph, &obs, t), eph.next_sunset(&obs, t).unwrap());
    }

    #[test]
    fn moonset_matches_setting_query() {
        let eph = AnalyticEphemeris::new();
        let obs = ObserverConfig::new(GeoLocation::new(-2.55, 98.55, 0.0));
        let t = Instant::from_jd_utc(2_449_128.5);
        assert_eq!(
            eph.next_moonset(&obs, t).unwrap(),
            eph.next_setting(&obs, Body::Moon, t).unwrap()
        );
    }

    #[test]
    fn default_config_is_exposed() {
        assert_eq!(*AnalyticEphemeris::new().config(), RiseSetConfig::default());
    }
}
