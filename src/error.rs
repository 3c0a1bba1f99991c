use thiserror::Error;

/// Result type alias for mining operations.
pub type Result<T> = std::result::Result<T, MiningError>;

/// Errors that can occur while configuring or running the mining pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MiningError {
    /// Alphabet size outside the breakpoint table.
    #[error("unsupported alphabet size {0}: must be in 2..=10")]
    UnsupportedAlphabet(usize),

    /// Invalid configuration value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A series without any points.
    #[error("series {index} is empty")]
    EmptySeries { index: usize },

    /// NaN or infinite input value.
    #[error("non-finite value in series {series} at position {position}")]
    NonFiniteValue { series: usize, position: usize },

    /// Series with zero variance cannot be standardized.
    #[error("series {index} has zero variance and cannot be standardized")]
    ConstantSeries { index: usize },

    /// Reconstruction requested for a motif that never occurred.
    #[error("motif '{pattern}' has no recorded occurrences")]
    EmptyOccurrences { pattern: String },

    /// Broken internal invariant; indicates a bug rather than bad input.
    #[error("internal error: {0}")]
    Internal(String),
}
