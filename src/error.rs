//! Error types for statsarray
//!
//! Provides a unified error type for storage, statistics, reporting and the
//! command layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StatsError
pub type Result<T> = std::result::Result<T, StatsError>;

/// Unified error type for statsarray operations
#[derive(Debug, Error)]
pub enum StatsError {
    // -------------------------------------------------------------------------
    // Dataset Size Errors
    // -------------------------------------------------------------------------
    #[error("Dataset is empty.")]
    DatasetEmpty { operation: &'static str },

    #[error("{operation} requires at least {required} value(s).")]
    InsufficientData {
        operation: &'static str,
        required: usize,
    },

    #[error("{operation} undefined when mean is 0.")]
    ZeroMean { operation: &'static str },

    // -------------------------------------------------------------------------
    // Storage Contract Violations
    // -------------------------------------------------------------------------
    #[error("Value must be finite, got {0}")]
    NonFiniteValue(f64),

    #[error("Index {index} out of range for dataset of size {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Erase count must be at least 1, got {0}")]
    InvalidCount(usize),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not write report to {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error("Command error: {0}")]
    Command(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`StatsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The dataset has no values
    DatasetEmpty,

    /// The dataset is non-empty but too small, or the statistic is undefined
    /// for its contents (zero mean)
    InsufficientData,

    /// A storage precondition was violated by the caller
    ContractViolation,

    Io,
    Command,
    Config,
}

impl StatsError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::DatasetEmpty { .. } => ErrorKind::DatasetEmpty,
            StatsError::InsufficientData { .. } | StatsError::ZeroMean { .. } => {
                ErrorKind::InsufficientData
            }
            StatsError::NonFiniteValue(_)
            | StatsError::IndexOutOfRange { .. }
            | StatsError::InvalidCount(_) => ErrorKind::ContractViolation,
            StatsError::Io(_) | StatsError::ReportWrite { .. } => ErrorKind::Io,
            StatsError::Command(_) => ErrorKind::Command,
            StatsError::Config(_) => ErrorKind::Config,
        }
    }

    /// Label of the operation that failed, for size and domain errors
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            StatsError::DatasetEmpty { operation }
            | StatsError::InsufficientData { operation, .. }
            | StatsError::ZeroMean { operation } => Some(*operation),
            _ => None,
        }
    }
}
