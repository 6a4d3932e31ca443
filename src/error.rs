//! Error types for the skill panel core

use thiserror::Error;

/// Main error type for the skill panel core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("Category index out of range: {index} (panel has {len} categories)")]
    OutOfRange { index: i32, len: usize },

    #[error("Invalid star count: {0} (expected 0..=5)")]
    InvalidValue(i32),

    #[error("Invalid star position: {0} (expected 0..=4)")]
    InvalidStar(i32),

    #[error("Panel is read-only")]
    ReadOnly,

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        PanelError::Deserialization(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<PanelError> for pyo3::PyErr {
    fn from(err: PanelError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyIndexError, PyRuntimeError, PyValueError};

        match err {
            PanelError::OutOfRange { .. } => PyIndexError::new_err(err.to_string()),
            PanelError::InvalidValue(_)
            | PanelError::InvalidStar(_)
            | PanelError::InvalidColor(_)
            | PanelError::Deserialization(_) => PyValueError::new_err(err.to_string()),
            PanelError::ReadOnly => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Result type alias for the skill panel core
pub type Result<T> = std::result::Result<T, PanelError>;
