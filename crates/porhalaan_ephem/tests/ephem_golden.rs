//! Golden values for the analytic ephemeris.
//!
//! New moon times are checked against published (NASA/USNO) phase tables,
//! the Lake Toba sky against the evenings the Batak calendar cares about.

use porhalaan_ephem::{AnalyticEphemeris, Body, Ephemeris, GeoLocation, ObserverConfig, Star};
use porhalaan_time::{Instant, UtcTime};

fn at(s: &str) -> Instant {
    Instant::from_utc(&s.parse::<UtcTime>().unwrap()).unwrap()
}

fn lake_toba() -> ObserverConfig {
    ObserverConfig::new(GeoLocation::new(-2.55, 98.55, 900.0))
        .with_pressure(0.0)
        .with_horizon_deg(-34.0 / 60.0)
}

fn minutes_between(a: Instant, b: Instant) -> f64 {
    (a - b).abs() * 1440.0
}

/// NASA: New Moon 2024-Jan-11 11:57 UTC
#[test]
fn new_moon_jan_2024() {
    let eph = AnalyticEphemeris::new();
    let nm = eph.next_new_moon(at("2024-01-01")).unwrap();
    assert!(
        minutes_between(nm, at("2024-01-11T11:57:00")) < 3.0,
        "got {nm}"
    );
}

/// USNO: New Moon 1993-May-21 14:07 UTC
#[test]
fn new_moon_may_1993() {
    let eph = AnalyticEphemeris::new();
    let nm = eph.previous_new_moon(at("1993-06-01")).unwrap();
    assert!(
        minutes_between(nm, at("1993-05-21T14:07:00")) < 3.0,
        "got {nm}"
    );
}

/// USNO: New Moon 1994-Mar-12 07:05 UTC
#[test]
fn new_moon_march_1994() {
    let eph = AnalyticEphemeris::new();
    let nm = eph.previous_new_moon(at("1994-04-01")).unwrap();
    assert!(
        minutes_between(nm, at("1994-03-12T07:05:00")) < 3.0,
        "got {nm}"
    );
}

#[test]
fn consecutive_new_moons_strictly_increase() {
    let eph = AnalyticEphemeris::new();
    let mut t = at("1990-01-01");
    for _ in 0..150 {
        let next = eph.next_new_moon(t).unwrap();
        assert!(next > t);
        let gap = next - t;
        assert!(gap < 30.0, "gap = {gap}");
        t = next;
    }
}

#[test]
fn previous_then_next_returns_to_start() {
    let eph = AnalyticEphemeris::new();
    let nm = eph.previous_new_moon(at("2001-09-11")).unwrap();
    let prev = eph.previous_new_moon(nm).unwrap();
    assert_eq!(eph.next_new_moon(prev).unwrap(), nm);
}

/// Evening after the 1993-05-21 new moon: Antares comes up within half an
/// hour of sunset while Betelgeuse follows the Sun down two hours later.
#[test]
fn lake_toba_evening_may_1993() {
    let eph = AnalyticEphemeris::new();
    let obs = lake_toba();
    let candidate = at("1993-05-21T14:07:00");

    let sunset = eph.next_sunset(&obs, candidate).unwrap();
    assert_eq!(sunset.to_utc().date_string(), "1993-05-22");

    let antares = eph
        .next_rising(&obs, Body::Star(Star::Antares), sunset)
        .unwrap();
    let betelgeuse = eph
        .next_setting(&obs, Body::Star(Star::Betelgeuse), sunset)
        .unwrap();
    let antares_h = (antares - sunset) * 24.0;
    let betelgeuse_h = (betelgeuse - sunset) * 24.0;
    assert!((0.2..0.7).contains(&antares_h), "Antares +{antares_h} h");
    assert!((1.7..2.3).contains(&betelgeuse_h), "Betelgeuse +{betelgeuse_h} h");

    let moonset = eph.next_moonset(&obs, candidate).unwrap();
    assert!(moonset > sunset, "moonset {moonset} sunset {sunset}");
}

/// Stars return to the same sidereal time ~3m56s earlier each day.
#[test]
fn star_rises_four_minutes_earlier_each_day() {
    let eph = AnalyticEphemeris::new();
    let obs = lake_toba();
    let body = Body::Star(Star::Spica);
    let first = eph.next_rising(&obs, body, at("2012-04-01")).unwrap();
    let second = eph.next_rising(&obs, body, first.add_hours(1.0)).unwrap();
    let gap_min = (second - first) * 1440.0;
    assert!((gap_min - 1436.07).abs() < 0.1, "gap = {gap_min} min");
}
