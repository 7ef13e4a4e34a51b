//! Bodies whose horizon crossings the calendar needs.

use std::f64::consts::TAU;
use std::fmt;

use porhalaan_frames::EquatorialCoords;

use crate::moon::moon_position;
use crate::stars::Star;
use crate::sun::sun_position;

/// A body the ephemeris can rise and set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Star(Star),
}

/// Apparent place plus the disk and parallax corrections for rise/set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentPlace {
    pub equatorial: EquatorialCoords,
    /// Angular radius of the disk, degrees. Zero for stars.
    pub semidiameter_deg: f64,
    /// Horizontal parallax, degrees. Zero for stars.
    pub parallax_deg: f64,
}

impl Body {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Star(s) => s.name(),
        }
    }

    /// Mean eastward drift in right ascension, radians per day.
    ///
    /// Subtracted from the sidereal rate so the hour-angle iteration steps
    /// at the body's own diurnal rate.
    pub fn mean_ra_rate_rad_per_day(self) -> f64 {
        match self {
            Self::Sun => TAU / 365.2422,
            Self::Moon => TAU / 27.3217,
            Self::Star(_) => 0.0,
        }
    }

    /// Apparent geocentric place at a TT Julian Date.
    pub fn apparent_place(self, jd_tt: f64) -> ApparentPlace {
        match self {
            Self::Sun => {
                let sun = sun_position(jd_tt);
                ApparentPlace {
                    equatorial: sun.equatorial,
                    semidiameter_deg: sun.semidiameter_deg(),
                    parallax_deg: sun.parallax_deg(),
                }
            }
            Self::Moon => {
                let moon = moon_position(jd_tt);
                ApparentPlace {
                    equatorial: moon.equatorial,
                    semidiameter_deg: moon.semidiameter_deg(),
                    parallax_deg: moon.parallax_deg(),
                }
            }
            Self::Star(star) => ApparentPlace {
                equatorial: star.apparent_place(jd_tt),
                semidiameter_deg: 0.0,
                parallax_deg: 0.0,
            },
        }
    }
}

impl From<Star> for Body {
    fn from(star: Star) -> Self {
        Self::Star(star)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
