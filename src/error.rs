// src/error.rs

//! Unified error handling for courier resolution and tracking lookups.

use thiserror::Error;

/// Result type alias for parcel operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reference data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lookup attempted with a blank airway bill
    #[error("AWB number is empty")]
    EmptyAwb,
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AppError::validation("duplicate courier id 'jne'").to_string(),
            "Validation error: duplicate courier id 'jne'"
        );
        assert_eq!(AppError::EmptyAwb.to_string(), "AWB number is empty");
    }
}
