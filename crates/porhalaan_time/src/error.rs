//! Error types for calendar input and time conversion.

/// Errors from date parsing or calendar validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input text does not follow `YYYY-MM-DD` or `YYYY-MM-DDThh:mm:ss[Z]`.
    #[error("cannot parse '{input}' as a date: {reason}")]
    Parse {
        /// The rejected input, trimmed.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// Calendar fields do not name a real Gregorian date/time.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
