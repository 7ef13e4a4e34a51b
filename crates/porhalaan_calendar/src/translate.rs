//! Gregorian date → Batak date.

use std::fmt;

use chrono::NaiveDate;
use porhalaan_ephem::{Ephemeris, ObserverConfig};
use porhalaan_time::Instant;

use crate::config::{SearchConfig, VisibilityRule, lake_toba};
use crate::error::CalendarError;
use crate::month_count::{count_months_since, new_moon_at_or_before};
use crate::names::{BatakDay, BatakMonth};
use crate::new_year::locate_new_year;
use crate::visibility::VisibilityReport;

/// A date in the Batak cosmogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatakDate {
    /// 1-based month, counted from the new year.
    pub month_ordinal: u32,
    /// 1-based day, counted from the latest new moon.
    pub day_ordinal: u32,
    /// New moon that opened the year.
    pub new_year_start: Instant,
}

impl BatakDate {
    /// Month name, `None` when the ordinal is outside the table.
    pub fn month(&self) -> Option<BatakMonth> {
        BatakMonth::from_ordinal(self.month_ordinal)
    }

    /// Day name, `None` when the ordinal is outside the table.
    pub fn day(&self) -> Option<BatakDay> {
        BatakDay::from_ordinal(self.day_ordinal)
    }
}

/// `Month(11): Li, Day: 20 - Singkora Duapulu`, with `?` for a name the
/// tables do not cover.
impl fmt::Display for BatakDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.month().map_or("?", BatakMonth::name);
        let day = self.day().map_or("?", BatakDay::name);
        write!(
            f,
            "Month({}): {month}, Day: {} - {day}",
            self.month_ordinal, self.day_ordinal
        )
    }
}

/// A conversion together with the evidence for its new year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explanation {
    /// Month, day and epoch.
    pub date: BatakDate,
    /// New moon the day count starts from.
    pub latest_new_moon: Instant,
    /// Visibility check of the accepted new year.
    pub new_year: VisibilityReport,
}

/// Converts Gregorian dates for one observer and rule set.
#[derive(Debug, Clone)]
pub struct Converter<E> {
    ephemeris: E,
    observer: ObserverConfig,
    rule: VisibilityRule,
    search: SearchConfig,
}

impl<E: Ephemeris> Converter<E> {
    /// Lake Toba observer, Antares/Betelgeuse rule, default search bound.
    pub fn new(ephemeris: E) -> Self {
        Self {
            ephemeris,
            observer: lake_toba(),
            rule: VisibilityRule::default(),
            search: SearchConfig::default(),
        }
    }

    /// Replace the observer.
    pub fn with_observer(mut self, observer: ObserverConfig) -> Self {
        self.observer = observer;
        self
    }

    /// Replace the visibility rule.
    pub fn with_rule(mut self, rule: VisibilityRule) -> Self {
        self.rule = rule;
        self
    }

    /// Replace the search bound and oracle error policy.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Observer in use.
    pub fn observer(&self) -> &ObserverConfig {
        &self.observer
    }

    /// Visibility rule in use.
    pub fn rule(&self) -> &VisibilityRule {
        &self.rule
    }

    /// Search bound and error policy in use.
    pub fn search(&self) -> &SearchConfig {
        &self.search
    }

    /// Underlying oracle.
    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// Batak date for a calendar day, taken at 00:00 UTC.
    pub fn convert(&self, date: NaiveDate) -> Result<BatakDate, CalendarError> {
        self.convert_instant(Instant::from_date(date))
    }

    /// Batak date at an arbitrary instant.
    pub fn convert_instant(&self, instant: Instant) -> Result<BatakDate, CalendarError> {
        self.explain_instant(instant).map(|e| e.date)
    }

    /// Conversion plus the visibility report of the governing new year.
    pub fn explain(&self, date: NaiveDate) -> Result<Explanation, CalendarError> {
        self.explain_instant(Instant::from_date(date))
    }

    /// As [`Converter::explain`], at an arbitrary instant.
    pub fn explain_instant(&self, instant: Instant) -> Result<Explanation, CalendarError> {
        let latest_new_moon = new_moon_at_or_before(&self.ephemeris, instant)?;
        let report = locate_new_year(
            &self.ephemeris,
            &self.observer,
            &self.rule,
            &self.search,
            instant,
        )?;
        let new_year_start = report.candidate;

        let months = count_months_since(&self.ephemeris, new_year_start, instant)?;
        let days = instant.whole_days_since(latest_new_moon);
        let day_ordinal = u32::try_from(days + 1).map_err(|_| {
            CalendarError::InconsistentEphemeris("latest new moon lies after the target date")
        })?;

        let date = BatakDate {
            month_ordinal: months + 1,
            day_ordinal,
            new_year_start,
        };
        tracing::debug!(at = %instant, month = date.month_ordinal, day = date.day_ordinal, "converted");
        Ok(Explanation {
            date,
            latest_new_moon,
            new_year: report,
        })
    }
}

/// Convert with the default Lake Toba setup.
pub fn gregorian_to_batak<E: Ephemeris>(
    ephemeris: E,
    date: NaiveDate,
) -> Result<BatakDate, CalendarError> {
    Converter::new(ephemeris).convert(date)
}
