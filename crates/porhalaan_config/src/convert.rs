//! TOML sections to calendar settings.

use porhalaan_calendar::{OracleErrorPolicy, SearchConfig, VisibilityRule};
use porhalaan_ephem::{GeoLocation, ObserverConfig, Star};
use porhalaan_frames::parse_sexagesimal_deg;

use crate::config::{AngleToml, ObserverToml, PorhalaanConfig, SearchToml, VisibilityToml};
use crate::error::ConfigError;

/// Everything a `Converter` needs besides the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Observer site and horizon.
    pub observer: ObserverConfig,
    /// Star pair and window.
    pub rule: VisibilityRule,
    /// Search bound and error policy.
    pub search: SearchConfig,
}

impl PorhalaanConfig {
    /// Resolve names and angles and range-check the result.
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        Ok(Settings {
            observer: build_observer(&self.observer)?,
            rule: build_visibility_rule(&self.visibility)?,
            search: build_search_config(&self.search)?,
        })
    }
}

/// Horizon offset in degrees.
pub fn parse_angle(angle: &AngleToml) -> Result<f64, ConfigError> {
    match angle {
        AngleToml::Degrees(d) => Ok(*d),
        AngleToml::Text(s) => Ok(parse_sexagesimal_deg(s)?),
    }
}

/// Catalog lookup for the `[visibility]` key `field`.
pub fn parse_star(field: &'static str, name: &str) -> Result<Star, ConfigError> {
    Star::from_name(name).map_err(|_| ConfigError::UnknownStar {
        field,
        name: name.to_string(),
    })
}

/// `skip` or `abort`, case-insensitive.
pub fn parse_oracle_errors(s: &str) -> Result<OracleErrorPolicy, ConfigError> {
    match s.to_lowercase().as_str() {
        "skip" => Ok(OracleErrorPolicy::Skip),
        "abort" => Ok(OracleErrorPolicy::Abort),
        other => Err(ConfigError::Invalid(format!(
            "unknown oracle_errors policy {other:?}, expected \"skip\" or \"abort\""
        ))),
    }
}

/// Validated observer from `[observer]`.
pub fn build_observer(t: &ObserverToml) -> Result<ObserverConfig, ConfigError> {
    let observer = ObserverConfig::new(GeoLocation::new(t.latitude, t.longitude, t.elevation))
        .with_pressure(t.pressure)
        .with_temperature(t.temperature)
        .with_horizon_deg(parse_angle(&t.horizon)?);
    observer
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(observer)
}

/// Validated rule from `[visibility]`.
pub fn build_visibility_rule(t: &VisibilityToml) -> Result<VisibilityRule, ConfigError> {
    let rule = VisibilityRule {
        rising_star: parse_star("rising_star", &t.rising_star)?,
        setting_star: parse_star("setting_star", &t.setting_star)?,
        window_hours: t.window_hours,
    };
    rule.validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(rule)
}

/// Validated search bound from `[search]`.
pub fn build_search_config(t: &SearchToml) -> Result<SearchConfig, ConfigError> {
    let search = SearchConfig::new(t.max_lookback, parse_oracle_errors(&t.oracle_errors)?);
    search
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(search)
}

#[cfg(test)]
mod tests {
    use porhalaan_calendar::lake_toba;

    use super::*;

    #[test]
    fn defaults_resolve_to_lake_toba() {
        let s = PorhalaanConfig::default().resolve().unwrap();
        assert_eq!(s.observer, lake_toba());
        assert_eq!(s.rule, VisibilityRule::default());
        assert_eq!(s.search, SearchConfig::default());
    }

    #[test]
    fn sexagesimal_horizon() {
        let h = parse_angle(&AngleToml::Text("-0:34".into())).unwrap();
        assert!((h + 34.0 / 60.0).abs() < 1e-12);
        assert!(matches!(
            parse_angle(&AngleToml::Text("low".into())),
            Err(ConfigError::InvalidAngle(_))
        ));
    }

    #[test]
    fn star_names_are_case_insensitive() {
        assert_eq!(parse_star("rising_star", "antares").unwrap(), Star::Antares);
        assert!(matches!(
            parse_star("setting_star", "Vulcan"),
            Err(ConfigError::UnknownStar { field: "setting_star", .. })
        ));
    }

    #[test]
    fn oracle_error_policies() {
        assert_eq!(parse_oracle_errors("Abort").unwrap(), OracleErrorPolicy::Abort);
        assert_eq!(parse_oracle_errors("skip").unwrap(), OracleErrorPolicy::Skip);
        assert!(matches!(
            parse_oracle_errors("retry"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn out_of_range_values_are_invalid() {
        let observer = ObserverToml {
            latitude: 95.0,
            ..ObserverToml::default()
        };
        assert!(matches!(build_observer(&observer), Err(ConfigError::Invalid(_))));

        let rule = VisibilityToml {
            window_hours: 0.0,
            ..VisibilityToml::default()
        };
        assert!(matches!(build_visibility_rule(&rule), Err(ConfigError::Invalid(_))));

        let search = SearchToml {
            max_lookback: 0,
            ..SearchToml::default()
        };
        assert!(matches!(build_search_config(&search), Err(ConfigError::Invalid(_))));
    }
}
