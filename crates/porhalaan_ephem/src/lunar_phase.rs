//! New moon instants.
//!
//! Meeus, _Astronomical Algorithms_, Ch. 49: the mean phase for lunation
//! number `k` plus periodic and planetary corrections. Times come out in
//! TT (max error ~17 s over 1700–2300) and are shifted to UTC with ΔT.
//!
//! Lunation `k = 0` is the new moon of 2000-01-06.

use porhalaan_time::{Instant, decimal_year};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

/// New moon time in TT Julian Days for lunation number `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = 2_451_550.097_66 + SYNODIC_MONTH_DAYS * k + 0.000_154_37 * t2
        - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = (2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3).to_radians();
    let mp = (201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4)
        .to_radians();
    let f = (160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4)
        .to_radians();
    let om = (124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3).to_radians();

    let periodic = -0.40720 * mp.sin()
        + 0.17241 * e * m.sin()
        + 0.01608 * (2.0 * mp).sin()
        + 0.01039 * (2.0 * f).sin()
        + 0.00739 * e * (mp - m).sin()
        - 0.00514 * e * (mp + m).sin()
        + 0.00208 * e * e * (2.0 * m).sin()
        - 0.00111 * (mp - 2.0 * f).sin()
        - 0.00057 * (mp + 2.0 * f).sin()
        + 0.00056 * e * (2.0 * mp + m).sin()
        - 0.00042 * (3.0 * mp).sin()
        + 0.00042 * e * (m + 2.0 * f).sin()
        + 0.00038 * e * (m - 2.0 * f).sin()
        - 0.00024 * e * (2.0 * mp - m).sin()
        - 0.00017 * om.sin()
        - 0.00007 * (mp + 2.0 * m).sin()
        + 0.00004 * (2.0 * mp - 2.0 * f).sin()
        + 0.00004 * (3.0 * m).sin()
        + 0.00003 * (mp + m - 2.0 * f).sin()
        + 0.00003 * (2.0 * mp + 2.0 * f).sin()
        - 0.00003 * (mp + m + 2.0 * f).sin()
        + 0.00003 * (mp - m + 2.0 * f).sin()
        - 0.00002 * (mp - m - 2.0 * f).sin()
        - 0.00002 * (3.0 * mp + m).sin()
        + 0.00002 * (4.0 * mp).sin();

    mean + periodic + planetary_correction(k, t2)
}

/// Additional corrections A1..A14 (Meeus Ch. 49), days.
fn planetary_correction(k: f64, t2: f64) -> f64 {
    #[rustfmt::skip]
    const TERMS: [(f64, f64, f64); 14] = [
        (299.77, 0.107_408, 0.000_325),
        (251.88, 0.016_321, 0.000_165),
        (251.83, 26.651_886, 0.000_164),
        (349.42, 36.412_478, 0.000_126),
        (84.66, 18.206_239, 0.000_110),
        (141.74, 53.303_771, 0.000_062),
        (207.14, 2.453_732, 0.000_060),
        (154.84, 7.306_860, 0.000_056),
        (34.52, 27.261_239, 0.000_047),
        (207.19, 0.121_824, 0.000_042),
        (291.34, 1.844_379, 0.000_040),
        (161.72, 24.198_154, 0.000_037),
        (239.56, 25.513_099, 0.000_035),
        (331.55, 3.592_518, 0.000_023),
    ];
    TERMS
        .iter()
        .enumerate()
        .map(|(i, &(a0, rate, amp))| {
            // A1 carries a quadratic term.
            let quad = if i == 0 { -0.009_173 * t2 } else { 0.0 };
            amp * (a0 + rate * k + quad).to_radians().sin()
        })
        .sum()
}

/// New moon of lunation `k` as a UTC instant.
pub fn new_moon_instant(k: i64) -> Instant {
    Instant::from_jd_tt(new_moon_jde(k))
}

/// Lunation number of the last new moon strictly before `instant`.
pub fn lunation_before(instant: Instant) -> i64 {
    let mut k = ((decimal_year(instant.jd_utc()) - 2000.0) * 12.3685).floor() as i64;
    while new_moon_instant(k) >= instant {
        k -= 1;
    }
    while new_moon_instant(k + 1) < instant {
        k += 1;
    }
    k
}

/// Most recent new moon strictly before `instant`.
pub fn previous_new_moon(instant: Instant) -> Instant {
    new_moon_instant(lunation_before(instant))
}

/// First new moon strictly after `instant`.
pub fn next_new_moon(instant: Instant) -> Instant {
    let mut k = lunation_before(instant) + 1;
    // `instant` may itself be a new moon
    while new_moon_instant(k) <= instant {
        k += 1;
    }
    new_moon_instant(k)
}

/// All new moons in `[start, end)`, chronological.
pub fn search_new_moons(start: Instant, end: Instant) -> Vec<Instant> {
    let mut out = Vec::new();
    if end <= start {
        return out;
    }
    let mut k = lunation_before(start);
    if new_moon_instant(k) < start {
        k += 1;
    }
    loop {
        let t = new_moon_instant(k);
        if t >= end {
            break;
        }
        if t >= start {
            out.push(t);
        }
        k += 1;
    }
    out
}
