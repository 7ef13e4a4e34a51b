//! Input parsing, settings and report rendering for the `porhalaan` binary.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use porhalaan_calendar::{BatakDate, Explanation, VisibilityRule};
use porhalaan_config::{PorhalaanConfig, Settings};
use porhalaan_ephem::ObserverConfig;
use porhalaan_frames::format_sexagesimal_deg;
use porhalaan_time::Instant;

/// Printed for input that is not a `YYYY-MM-DD` date.
pub const DATE_FORMAT_ERROR: &str = "Error: Please enter the date in YYYY-MM-DD format.";

/// Interactive prompt used when no date argument is given.
pub const PROMPT: &str = "Enter a Gregorian date (YYYY-MM-DD) to convert to the Batak cosmogram: ";

const SEPARATOR: &str = "--------------------->oo<---------------------";

pub fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
}

/// Settings from the optional config file, with CLI overrides applied.
pub fn load_settings(config: Option<&Path>, max_lookback: Option<u32>) -> Result<Settings> {
    let file = match config {
        Some(path) => PorhalaanConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PorhalaanConfig::default(),
    };
    let mut settings = file.resolve().context("invalid configuration")?;
    if let Some(n) = max_lookback {
        settings.search.max_lookback = n;
        settings
            .search
            .validate()
            .context("invalid --max-lookback")?;
    }
    Ok(settings)
}

/// The three-line conversion report.
pub fn render(date: NaiveDate, batak: &BatakDate) -> String {
    format!(
        "{SEPARATOR}\nFor previously Batak New Year date is {}, then\nthe Batak cosmogram date for {} is {batak}\n",
        batak.new_year_start.to_utc().date_string(),
        date.format("%Y-%m-%d"),
    )
}

/// Observer and sky events of the evening that opened the year.
pub fn render_explanation(
    ex: &Explanation,
    observer: &ObserverConfig,
    rule: &VisibilityRule,
) -> String {
    let r = &ex.new_year;
    let loc = &observer.location;
    let event = |label: String, t: Instant| {
        format!("  {label:<18} {t} ({:+.2} h)\n", (t - r.sunset) * 24.0)
    };
    [
        format!(
            "Observer:            lat {}, lon {}, horizon {}\n",
            format_sexagesimal_deg(loc.latitude_deg),
            format_sexagesimal_deg(loc.longitude_deg),
            format_sexagesimal_deg(observer.horizon_deg),
        ),
        format!("New year new moon:   {}\n", r.candidate),
        format!("  sunset             {}\n", r.sunset),
        event(format!("{} rises", rule.rising_star), r.star_rise),
        event(format!("{} sets", rule.setting_star), r.star_set),
        event("moonset".to_string(), r.moonset),
        format!("  window ends        {}\n", r.window_end),
        format!("Latest new moon:     {}\n", ex.latest_new_moon),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use porhalaan_calendar::{VisibilityReport, lake_toba};

    use super::*;

    #[test]
    fn parse_accepts_iso_dates_only() {
        assert_eq!(
            parse_date(" 1994-04-01\n").unwrap(),
            NaiveDate::from_ymd_opt(1994, 4, 1).unwrap()
        );
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("01/04/1994").is_err());
        assert!(parse_date("1994-02-30").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn render_matches_report_layout() {
        let batak = BatakDate {
            month_ordinal: 11,
            day_ordinal: 20,
            new_year_start: Instant::from_jd_utc(2_449_129.088),
        };
        let date = NaiveDate::from_ymd_opt(1994, 4, 1).unwrap();
        assert_eq!(
            render(date, &batak),
            "--------------------->oo<---------------------\n\
             For previously Batak New Year date is 1993-05-21, then\n\
             the Batak cosmogram date for 1994-04-01 is Month(11): Li, Day: 20 - Singkora Duapulu\n"
        );
    }

    #[test]
    fn lookback_override_is_validated() {
        let s = load_settings(None, Some(7)).unwrap();
        assert_eq!(s.search.max_lookback, 7);
        assert!(load_settings(None, Some(0)).is_err());
    }

    #[test]
    fn explanation_lists_observer_and_evening() {
        let nm = Instant::from_jd_utc(2_449_129.088);
        let sunset = Instant::from_jd_utc(2_449_129.974);
        let ex = Explanation {
            date: BatakDate {
                month_ordinal: 11,
                day_ordinal: 20,
                new_year_start: nm,
            },
            latest_new_moon: Instant::from_jd_utc(2_449_423.795),
            new_year: VisibilityReport {
                candidate: nm,
                sunset,
                star_rise: sunset.add_hours(0.5),
                star_set: sunset.add_hours(2.0),
                moonset: sunset.add_hours(1.0),
                window_end: sunset.add_hours(3.5),
                star_rises_in_window: true,
                star_sets_in_window: true,
                moon_sets_after_sun: true,
            },
        };
        let text = render_explanation(&ex, &lake_toba(), &VisibilityRule::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[0],
            "Observer:            lat -2:33:00.0, lon 98:33:00.0, horizon -0:34:00.0"
        );
        assert!(lines[3].starts_with("  Antares rises      1993-05-22"));
        assert!(lines[3].ends_with("(+0.50 h)"));
        assert!(lines[4].ends_with("(+2.00 h)"));
        assert!(lines[5].starts_with("  moonset "));
        assert!(lines[7].starts_with("Latest new moon:     1994-03-12"));
    }
}
