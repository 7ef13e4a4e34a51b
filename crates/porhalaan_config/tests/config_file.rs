use std::fs;
use std::path::PathBuf;

use porhalaan_calendar::OracleErrorPolicy;
use porhalaan_config::{ConfigError, PorhalaanConfig};
use porhalaan_ephem::Star;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("porhalaan-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn full_file_resolves() {
    let path = write_temp(
        "full.toml",
        r#"
[observer]
latitude = -2.55
longitude = 98.55
elevation = 900.0
pressure = 0.0
temperature = 15.0
horizon = "-0:34"

[visibility]
rising_star = "Antares"
setting_star = "Betelgeuse"
window_hours = 3.5

[search]
max_lookback = 40
oracle_errors = "skip"
"#,
    );
    let settings = PorhalaanConfig::from_path(&path).unwrap().resolve().unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(settings.observer, porhalaan_calendar::lake_toba());
    assert_eq!(settings.rule.rising_star, Star::Antares);
    assert_eq!(settings.search.max_lookback, 40);
    assert_eq!(settings.search.oracle_errors, OracleErrorPolicy::Skip);
}

#[test]
fn partial_file_overrides_only_named_keys() {
    let path = write_temp(
        "partial.toml",
        "[visibility]\nsetting_star = \"rigel\"\n\n[search]\noracle_errors = \"abort\"\n",
    );
    let settings = PorhalaanConfig::from_path(&path).unwrap().resolve().unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(settings.rule.rising_star, Star::Antares);
    assert_eq!(settings.rule.setting_star, Star::Rigel);
    assert_eq!(settings.search.oracle_errors, OracleErrorPolicy::Abort);
    assert_eq!(settings.observer.location.latitude_deg, -2.55);
}

#[test]
fn malformed_toml_is_reported() {
    let path = write_temp("broken.toml", "[observer\nlatitude = ");
    let err = PorhalaanConfig::from_path(&path).unwrap_err();
    fs::remove_file(&path).ok();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn unknown_star_fails_resolution() {
    let cfg = PorhalaanConfig::from_toml_str("[visibility]\nrising_star = \"Polaris\"").unwrap();
    let err = cfg.resolve().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown star 'Polaris' in [visibility].rising_star"
    );
}
