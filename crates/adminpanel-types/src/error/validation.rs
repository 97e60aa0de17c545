//! Draft validation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First violation found while validating a draft against its schema.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ValidationError {
    /// A required field is empty or whitespace-only
    #[error("{label} is required")]
    MissingField {
        /// Wire name of the field
        field: String,
        /// Human-readable field label
        label: String,
    },

    /// An email field does not look like `local@domain.tld`
    #[error("{label} must be a valid email address")]
    InvalidEmail {
        /// Wire name of the field
        field: String,
        /// Human-readable field label
        label: String,
    },
}

impl ValidationError {
    /// Wire name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field, .. } | Self::InvalidEmail { field, .. } => field,
        }
    }
}
