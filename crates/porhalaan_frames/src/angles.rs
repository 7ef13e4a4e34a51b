//! Angle normalization and sexagesimal parsing.

use std::str::FromStr;

/// Error from parsing a sexagesimal or decimal angle string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid angle '{input}': {reason}")]
pub struct AngleParseError {
    /// The rejected text.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

/// Normalize degrees to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

/// Parse an angle in degrees written as `D`, `D:M` or `D:M:S`.
///
/// The sign applies to the whole angle, so `"-0:34"` is −34′ = −0.5667°.
/// A plain decimal such as `"-0.5667"` is accepted too.
pub fn parse_sexagesimal_deg(text: &str) -> Result<f64, AngleParseError> {
    let err = |reason| AngleParseError {
        input: text.to_string(),
        reason,
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(err("empty string"));
    }
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut fields = body.split(':');
    let mut total = 0.0;
    let mut scale = 1.0;
    let mut count = 0;
    for field in fields.by_ref() {
        count += 1;
        if count > 3 {
            return Err(err("more than three fields"));
        }
        let value = f64::from_str(field.trim()).map_err(|_| err("field is not a number"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(err("field must be a non-negative finite number"));
        }
        if count > 1 && value >= 60.0 {
            return Err(err("minutes and seconds must be below 60"));
        }
        total += value / scale;
        scale *= 60.0;
    }

    Ok(if negative { -total } else { total })
}

/// Format degrees as `±D:MM:SS.s`.
pub fn format_sexagesimal_deg(deg: f64) -> String {
    let sign = if deg < 0.0 { "-" } else { "" };
    let tenths = (deg.abs() * 36_000.0).round() as u64;
    let d = tenths / 36_000;
    let m = (tenths % 36_000) / 600;
    let s = (tenths % 600) as f64 / 10.0;
    format!("{sign}{d}:{m:02}:{s:04.1}")
}
