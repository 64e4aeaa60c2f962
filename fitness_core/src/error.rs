//! Error types for the fitness_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitness_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workout code is not one of RUN, WLK, SWM
    #[error("Unknown workout kind: {0:?}")]
    UnknownWorkoutKind(String),

    /// Raw data length does not match the workout's field list
    #[error("Invalid arity for {kind}: expected {expected} values, got {actual}")]
    InvalidArity {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A value is out of the range the formulas can divide by
    #[error("Invalid magnitude for {field}: {value}")]
    InvalidMagnitude { field: &'static str, value: f64 },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed input source
    #[error("Input error: {0}")]
    Input(String),
}
