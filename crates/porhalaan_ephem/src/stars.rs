//! Named bright stars used as horizon markers.
//!
//! Positions are Hipparcos (ICRS, epoch J2000.0) with proper motions. The
//! apparent place of date applies proper motion, precession and nutation;
//! annual aberration (≤ 20″) is left out.

use std::fmt;

use porhalaan_frames::{EquatorialCoords, nutation, precess_from_j2000, true_obliquity_deg};
use porhalaan_time::{J2000_JD, jd_to_centuries};

use crate::error::EphemError;

/// Milliarcseconds to degrees.
const MAS_TO_DEG: f64 = 1.0 / 3_600_000.0;

/// Catalog stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Star {
    Aldebaran,
    Antares,
    Arcturus,
    Betelgeuse,
    Canopus,
    Pleiades,
    Regulus,
    Rigel,
    Sirius,
    Spica,
    Vega,
}

/// Every catalog star, alphabetical.
pub const ALL_STARS: [Star; 11] = [
    Star::Aldebaran,
    Star::Antares,
    Star::Arcturus,
    Star::Betelgeuse,
    Star::Canopus,
    Star::Pleiades,
    Star::Regulus,
    Star::Rigel,
    Star::Sirius,
    Star::Spica,
    Star::Vega,
];

/// J2000 catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CatalogEntry {
    ra_hours: f64,
    dec_deg: f64,
    /// μα·cos δ, mas/yr.
    pm_ra_mas: f64,
    /// μδ, mas/yr.
    pm_dec_mas: f64,
}

const fn entry(ra_hours: f64, dec_deg: f64, pm_ra_mas: f64, pm_dec_mas: f64) -> CatalogEntry {
    CatalogEntry {
        ra_hours,
        dec_deg,
        pm_ra_mas,
        pm_dec_mas,
    }
}

impl Star {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aldebaran => "Aldebaran",
            Self::Antares => "Antares",
            Self::Arcturus => "Arcturus",
            Self::Betelgeuse => "Betelgeuse",
            Self::Canopus => "Canopus",
            Self::Pleiades => "Pleiades",
            Self::Regulus => "Regulus",
            Self::Rigel => "Rigel",
            Self::Sirius => "Sirius",
            Self::Spica => "Spica",
            Self::Vega => "Vega",
        }
    }

    /// Case-insensitive lookup. "Alcyone" is accepted for the Pleiades.
    pub fn from_name(name: &str) -> Result<Self, EphemError> {
        let wanted = name.trim();
        if wanted.eq_ignore_ascii_case("Alcyone") {
            return Ok(Self::Pleiades);
        }
        ALL_STARS
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EphemError::UnknownStar(wanted.to_string()))
    }

    const fn catalog(self) -> CatalogEntry {
        match self {
            Self::Aldebaran => entry(4.598_677, 16.509_303, 63.45, -188.94),
            Self::Antares => entry(16.490_128, -26.432_003, -12.11, -23.30),
            Self::Arcturus => entry(14.261_020, 19.182_408, -1093.39, -2000.06),
            Self::Betelgeuse => entry(5.919_529, 7.407_064, 27.54, 11.30),
            Self::Canopus => entry(6.399_197, -52.695_661, 19.93, 23.24),
            // Alcyone (η Tau), the brightest of the cluster.
            Self::Pleiades => entry(3.791_410, 24.105_136, 19.34, -43.67),
            Self::Regulus => entry(10.139_531, 11.967_208, -248.73, 5.59),
            Self::Rigel => entry(5.242_298, -8.201_639, 1.31, 0.50),
            Self::Sirius => entry(6.752_477, -16.716_117, -546.01, -1223.07),
            Self::Spica => entry(13.419_883, -11.161_319, -42.35, -30.67),
            Self::Vega => entry(18.615_649, 38.783_689, 200.94, 286.23),
        }
    }

    /// Mean J2000.0 position, ignoring proper motion.
    pub fn j2000(self) -> EquatorialCoords {
        let c = self.catalog();
        EquatorialCoords::from_hours_deg(c.ra_hours, c.dec_deg)
    }

    /// Apparent right ascension and declination at a TT Julian Date.
    pub fn apparent_place(self, jd_tt: f64) -> EquatorialCoords {
        let c = self.catalog();
        let years = (jd_tt - J2000_JD) / 365.25;
        let dec0 = c.dec_deg.to_radians();
        let ra_deg = c.ra_hours * 15.0 + c.pm_ra_mas * MAS_TO_DEG * years / dec0.cos();
        let dec_deg = c.dec_deg + c.pm_dec_mas * MAS_TO_DEG * years;
        let mean_j2000 = EquatorialCoords::new(ra_deg.to_radians(), dec_deg.to_radians());

        let t = jd_to_centuries(jd_tt);
        let nut = nutation(t);
        precess_from_j2000(&mean_j2000, t).with_nutation(&nut, true_obliquity_deg(t, &nut))
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Star {
    type Err = EphemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Star::from_name("antares").unwrap(), Star::Antares);
        assert_eq!(Star::from_name(" BETELGEUSE ").unwrap(), Star::Betelgeuse);
        assert_eq!("Alcyone".parse::<Star>().unwrap(), Star::Pleiades);
    }

    #[test]
    fn unknown_star() {
        let err = Star::from_name("Vulcan").unwrap_err();
        assert_eq!(err, EphemError::UnknownStar("Vulcan".into()));
    }

    #[test]
    fn names_roundtrip() {
        for s in ALL_STARS {
            assert_eq!(Star::from_name(s.name()).unwrap(), s);
            assert_eq!(s.to_string(), s.name());
        }
    }

    #[test]
    fn apparent_equals_mean_at_j2000_within_nutation() {
        // At J2000 only nutation separates the two (|Δψ| < 20″).
        let mean = Star::Antares.j2000();
        let app = Star::Antares.apparent_place(J2000_JD);
        assert!((app.ra_hours() - mean.ra_hours()).abs() < 0.002);
        assert!((app.dec_deg() - mean.dec_deg()).abs() < 0.01);
    }

    #[test]
    fn antares_1993_precessed() {
        // 1993-05-21 sits 6.6 years before J2000; precession at ~3.69 s/yr
        // pulls RA back by ~0.0068 h.
        let jd_1993 = 2_449_128.5;
        let app = Star::Antares.apparent_place(jd_1993);
        assert!(
            (app.ra_hours() - 16.4835).abs() < 0.002,
            "RA = {}",
            app.ra_hours()
        );
        assert!((app.dec_deg() + 26.41).abs() < 0.02, "Dec = {}", app.dec_deg());
    }

    #[test]
    fn arcturus_proper_motion_is_visible() {
        // Arcturus moves ~2″/yr in declination; after a century that is ~0.055°
        // on top of precession.
        let jd = J2000_JD + 36_525.0;
        let with_pm = Star::Arcturus.apparent_place(jd);
        let t = 1.0;
        let nut = nutation(t);
        let no_pm = precess_from_j2000(&Star::Arcturus.j2000(), t)
            .with_nutation(&nut, true_obliquity_deg(t, &nut));
        let diff = (with_pm.dec_deg() - no_pm.dec_deg()).abs();
        assert!((diff - 0.0556).abs() < 0.005, "diff = {diff}");
    }
}
