//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the human-facing representation used at the edges of the
//! workspace (input parsing, printing). Arithmetic happens on
//! [`crate::Instant`].

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight UTC at the start of the given calendar day.
    pub fn midnight(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Reject field combinations that are not a real Gregorian date/time.
    pub fn validate(&self) -> Result<(), TimeError> {
        let date_ok = NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_some();
        let time_ok = self.hour < 24
            && self.minute < 60
            && self.second.is_finite()
            && (0.0..60.0).contains(&self.second);
        if date_ok && time_ok {
            Ok(())
        } else {
            Err(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            })
        }
    }

    /// Julian Date (UTC) of this calendar instant.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar breakdown of a Julian Date (UTC), rounded to the millisecond.
    pub fn from_jd(jd: f64) -> Self {
        let millis = ((jd + 0.5) * MILLIS_PER_DAY as f64).round() as i64;
        let day_number = millis.div_euclid(MILLIS_PER_DAY);
        let ms_of_day = millis.rem_euclid(MILLIS_PER_DAY);

        let (year, month, day_frac) = jd_to_calendar(day_number as f64 - 0.5 + 1e-9);
        let hour = (ms_of_day / 3_600_000) as u32;
        let minute = ((ms_of_day % 3_600_000) / 60_000) as u32;
        let second = (ms_of_day % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
            hour,
            minute,
            second,
        }
    }

    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self::midnight(date.year(), date.month(), date.day())
    }

    pub fn from_naive_datetime(dt: NaiveDateTime) -> Self {
        let second = dt.second() as f64 + dt.nanosecond() as f64 * 1e-9;
        Self::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            second,
        )
    }

    /// Calendar date part as a `chrono` date.
    pub fn to_naive_date(&self) -> Result<NaiveDate, TimeError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(TimeError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }

    /// `YYYY-MM-DD` form of the date part.
    pub fn date_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD` (midnight UTC) or `YYYY-MM-DDThh:mm:ss[.fff][Z]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parse_err = |e: chrono::ParseError| TimeError::Parse {
            input: trimmed.to_string(),
            reason: e.to_string(),
        };
        if trimmed.contains('T') {
            let body = trimmed.trim_end_matches('Z');
            let dt = NaiveDateTime::parse_from_str(body, "%Y-%m-%dT%H:%M:%S%.f")
                .map_err(parse_err)?;
            Ok(Self::from_naive_datetime(dt))
        } else {
            let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(parse_err)?;
            Ok(Self::from_naive_date(date))
        }
    }
}

impl fmt::Display for UtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
