//! Error types for ephemeris queries.

/// Errors from the ephemeris oracle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EphemError {
    /// The body stays below the target altitude all day at this latitude.
    #[error("{body} never rises above the horizon at this location")]
    NeverRises { body: String },
    /// The body stays above the target altitude all day at this latitude.
    #[error("{body} never sets below the horizon at this location")]
    NeverSets { body: String },
    /// Star name not present in the catalog.
    #[error("unknown star '{0}'")]
    UnknownStar(String),
    /// Observer parameters out of range.
    #[error("invalid observer: {0}")]
    InvalidObserver(&'static str),
    /// Iterative solver did not settle.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
}

impl EphemError {
    /// Whether the failure comes from the sky geometry (object never
    /// crossing the horizon) rather than from bad input.
    pub fn is_unobservable(&self) -> bool {
        matches!(self, Self::NeverRises { .. } | Self::NeverSets { .. })
    }
}
