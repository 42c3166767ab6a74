//! Core error types

use thiserror::Error;

/// Core arbitration errors
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("State error: {0}")]
    StateError(String),

    #[error("Invalid window ID: {0}")]
    InvalidWindowId(u32),

    #[error("Invalid view ID: {0}")]
    InvalidViewId(u32),
}

impl CoreError {
    pub fn state_error(msg: impl Into<String>) -> Self {
        Self::StateError(msg.into())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
