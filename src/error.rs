//! Error types for snapshot validation and projection

use thiserror::Error;

/// Errors raised by the projection engine and baseline derivation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Cost-reduction mode needs a non-zero target ratio to solve for S&M spend
    #[error("target ratio {target_ratio} leaves required sales & marketing spend undefined")]
    DivisionByZero { target_ratio: f64 },

    #[error("target ratio must be finite, got {target_ratio}")]
    NonFiniteRatio { target_ratio: f64 },

    /// Baseline figure that percentages are taken against is zero
    #[error("baseline {metric} is zero; relative impacts are undefined")]
    DegenerateBaseline { metric: &'static str },

    #[error("invalid snapshot field {field}: {value}")]
    InvalidSnapshot { field: &'static str, value: f64 },
}

/// Errors loading a snapshot override from disk
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] EngineError),
}
