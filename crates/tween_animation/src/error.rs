//! Curve lookup errors

use thiserror::Error;

/// Errors raised when a curve is named by something other than the `Curve` enum
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// No curve has this name
    #[error("Invalid easing curve: {0:?}")]
    InvalidCurve(String),

    /// Curve id outside `0..Curve::COUNT`
    #[error("Invalid easing curve id: {0}")]
    InvalidCurveId(u8),
}

/// Result type for curve lookups
pub type Result<T> = std::result::Result<T, CurveError>;
