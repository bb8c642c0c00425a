//! Centralized error types for the issue form.
//!
//! Form operations fail only on local validation: a malformed `open` call or
//! a save attempted with a required field unset. Configuration errors are
//! carried alongside so hosts can surface every failure the same way.

use thiserror::Error;

use crate::config::ConfigError;
use crate::issue::FormField;

/// Errors produced by the issue form.
#[derive(Debug, Error)]
pub enum FormError {
    /// An operation was called in a state that does not permit it.
    #[error("Invalid form state: {0}")]
    InvalidState(String),

    /// Save was attempted while a required field is unset.
    #[error("Incomplete issue: '{field}' is not set")]
    IncompleteRecord {
        /// The first unset field in form order.
        field: FormField,
    },

    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),
}

impl FormError {
    /// Create an invalid state error.
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        FormError::InvalidState(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            FormError::InvalidState(msg) => format!("The form cannot do that right now: {}", msg),
            FormError::IncompleteRecord { field } => {
                format!("Please fill in '{}' before saving.", field)
            }
            FormError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file exists and is readable.".to_string()
                }
                ConfigError::WriteError(_) => {
                    "Could not save configuration. Please check file permissions.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save configuration. Internal error.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
        }
    }

    /// Check if the user can correct this error while the form stays open.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FormError::IncompleteRecord { .. })
    }

    /// The field the user should look at, if any.
    pub fn field(&self) -> Option<FormField> {
        match self {
            FormError::IncompleteRecord { field } => Some(*field),
            _ => None,
        }
    }
}

/// Result type for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
