//! Schema-driven draft validation.
//!
//! Checks run in schema order and stop at the first violation, so the form
//! always shows exactly one message.

use crate::error::ValidationError;
use crate::schema::{Draft, FieldKind};
use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`: no whitespace, one `@`, a dot inside the domain.
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").ok());

/// Whether `value` looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(value))
}

/// Validate every schema field of `draft`, returning the first violation.
pub fn validate<D: Draft>(draft: &D) -> Result<(), ValidationError> {
    for spec in D::schema() {
        let value = draft.value(spec.name).unwrap_or_default();

        if spec.required && value.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: spec.name.to_string(),
                label: spec.label.to_string(),
            });
        }

        if spec.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
            return Err(ValidationError::InvalidEmail {
                field: spec.name.to_string(),
                label: spec.label.to_string(),
            });
        }
    }
    Ok(())
}
