//! Structured error types for the biocat crates.

use thiserror::Error;

/// Unified error type for all biocat operations.
///
/// The analysis functions are total apart from [`BiocatError::InvalidParameter`].
/// [`BiocatError::InvalidSymbol`] only comes out of the opt-in strict
/// validation path.
#[derive(Debug, Error)]
pub enum BiocatError {
    /// Bad argument: non-positive window or step, or a missing required value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A symbol outside the declared alphabet, found by strict validation.
    #[error("invalid {alphabet} symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        alphabet: &'static str,
        symbol: char,
        position: usize,
    },

    /// Rendering a result as JSON failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl BiocatError {
    /// Shorthand for [`BiocatError::InvalidParameter`].
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Stable snake_case name of the variant, for machine-readable reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidParameter(_) => "invalid_parameter",
            Self::InvalidSymbol { .. } => "invalid_symbol",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience alias used throughout the biocat crates.
pub type Result<T> = std::result::Result<T, BiocatError>;
