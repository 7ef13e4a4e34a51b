//! `Instant`: a UTC Julian Date with day-based arithmetic.
//!
//! Every ephemeris query in the workspace takes an `Instant` as its explicit
//! "as of" argument. Subtraction yields a duration in days.

use std::fmt;
use std::ops::Sub;

use chrono::NaiveDate;

use crate::delta_t::delta_t_seconds;
use crate::error::TimeError;
use crate::julian::SECONDS_PER_DAY;
use crate::utc_time::UtcTime;

/// A point in time, stored as a UTC Julian Date.
///
/// UT1 and UTC are treated as equal; the < 0.9 s difference is invisible
/// at the resolution the calendar works with.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    jd_utc: f64,
}

impl Instant {
    /// Wrap a UTC Julian Date.
    pub fn from_jd_utc(jd_utc: f64) -> Self {
        Self { jd_utc }
    }

    /// Convert a Terrestrial Time Julian Date to UTC by removing ΔT.
    ///
    /// ΔT is evaluated at the UT estimate, refined twice.
    pub fn from_jd_tt(jd_tt: f64) -> Self {
        let mut jd = jd_tt;
        for _ in 0..2 {
            jd = jd_tt - delta_t_seconds(jd) / SECONDS_PER_DAY;
        }
        Self { jd_utc: jd }
    }

    /// Build from calendar fields after validating them.
    pub fn from_utc(utc: &UtcTime) -> Result<Self, TimeError> {
        utc.validate()?;
        Ok(Self {
            jd_utc: utc.to_jd(),
        })
    }

    /// Midnight UTC at the start of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            jd_utc: UtcTime::from_naive_date(date).to_jd(),
        }
    }

    /// UTC Julian Date.
    pub fn jd_utc(self) -> f64 {
        self.jd_utc
    }

    /// Terrestrial Time Julian Date (UTC + ΔT).
    pub fn jd_tt(self) -> f64 {
        self.jd_utc + delta_t_seconds(self.jd_utc) / SECONDS_PER_DAY
    }

    /// Calendar breakdown in UTC.
    pub fn to_utc(self) -> UtcTime {
        UtcTime::from_jd(self.jd_utc)
    }

    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd_utc: self.jd_utc + days,
        }
    }

    pub fn add_hours(self, hours: f64) -> Self {
        self.add_days(hours / 24.0)
    }

    /// Whole days elapsed since `earlier`, floored.
    ///
    /// Negative when `earlier` is actually later.
    pub fn whole_days_since(self, earlier: Instant) -> i64 {
        (self - earlier).floor() as i64
    }
}

impl Sub for Instant {
    /// Elapsed time in days.
    type Output = f64;

    fn sub(self, rhs: Instant) -> f64 {
        self.jd_utc - rhs.jd_utc
    }
}

impl From<NaiveDate> for Instant {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_utc().fmt(f)
    }
}
