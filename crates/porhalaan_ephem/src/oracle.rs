//! The ephemeris seam the calendar is written against.
//!
//! Every query takes its reference instant explicitly; implementations
//! hold no "current date" state. Tests substitute scripted oracles.

use porhalaan_time::Instant;

use crate::body::Body;
use crate::error::EphemError;
use crate::observer::ObserverConfig;

/// Astronomical event source.
pub trait Ephemeris {
    /// First rising of `body` strictly after `as_of`.
    fn next_rising(
        &self,
        observer: &ObserverConfig,
        body: Body,
        as_of: Instant,
    ) -> Result<Instant, EphemError>;

    /// First setting of `body` strictly after `as_of`.
    fn next_setting(
        &self,
        observer: &ObserverConfig,
        body: Body,
        as_of: Instant,
    ) -> Result<Instant, EphemError>;

    /// Most recent new moon strictly before `instant`.
    fn previous_new_moon(&self, instant: Instant) -> Result<Instant, EphemError>;

    /// First new moon strictly after `instant`.
    fn next_new_moon(&self, instant: Instant) -> Result<Instant, EphemError>;

    fn next_sunset(&self, observer: &ObserverConfig, as_of: Instant) -> Result<Instant, EphemError> {
        self.next_setting(observer, Body::Sun, as_of)
    }

    fn next_moonset(&self, observer: &ObserverConfig, as_of: Instant) -> Result<Instant, EphemError> {
        self.next_setting(observer, Body::Moon, as_of)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn next_rising(
        &self,
        observer: &ObserverConfig,
        body: Body,
        as_of: Instant,
    ) -> Result<Instant, EphemError> {
        (**self).next_rising(observer, body, as_of)
    }

    fn next_setting(
        &self,
        observer: &ObserverConfig,
        body: Body,
        as_of: Instant,
    ) -> Result<Instant, EphemError> {
        (**self).next_setting(observer, body, as_of)
    }

    fn previous_new_moon(&self, instant: Instant) -> Result<Instant, EphemError> {
        (**self).previous_new_moon(instant)
    }

    fn next_new_moon(&self, instant: Instant) -> Result<Instant, EphemError> {
        (**self).next_new_moon(instant)
    }

    fn next_sunset(&self, observer: &ObserverConfig, as_of: Instant) -> Result<Instant, EphemError> {
        (**self).next_sunset(observer, as_of)
    }

    fn next_moonset(&self, observer: &ObserverConfig, as_of: Instant) -> Result<Instant, EphemError> {
        (**self).next_moonset(observer, as_of)
    }
}
