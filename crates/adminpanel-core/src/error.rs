//! Errors surfaced at the panel and form boundary.

use crate::form::EditorMode;
use adminpanel_client::ClientError;
use adminpanel_types::ValidationError;
use thiserror::Error;

/// Status text when a change went through but the list could not be re-fetched.
pub(crate) const RELOAD_FAILURE: &str = "Change saved, but refreshing the list failed";

/// Why a panel or form operation did not complete.
///
/// Every variant is also reflected in the controller's status message, so a
/// host may ignore the returned error entirely.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PanelError {
    /// Transport failed before any response arrived.
    #[error("Network failure: {0}")]
    Network(String),

    /// Server answered outside 2xx.
    #[error("Server rejected request ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// Draft failed client-side checks; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Server answered 2xx with a body that could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The change was saved but the follow-up reload failed. The cached rows
    /// were patched locally instead, so retrying the change is wrong.
    #[error("Change saved, but refreshing the list failed: {0}")]
    RefreshFailed(String),

    /// The controller was torn down; the result was discarded.
    #[error("Panel has been torn down")]
    Detached,

    /// Editor event not allowed in the current mode.
    #[error("Cannot {event} while {mode}")]
    InvalidTransition {
        mode: EditorMode,
        event: &'static str,
    },
}

impl PanelError {
    /// Text for the status line: the server's or validator's own words when
    /// there are any, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } => message.clone(),
            Self::Validation(err) => err.to_string(),
            Self::InvalidTransition { .. } => self.to_string(),
            Self::RefreshFailed(_) => RELOAD_FAILURE.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<ClientError> for PanelError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network(detail) => Self::Network(detail),
            ClientError::Rejected { status, message } => Self::Rejected { status, message },
            ClientError::InvalidResponse(detail) | ClientError::InvalidUrl(detail) => {
                Self::InvalidResponse(detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = PanelError::from(ClientError::Rejected {
            status: 400,
            message: Some("Duplicate vendorId".to_string()),
        });
        assert_eq!(err.user_message("Failed to create vendor"), "Duplicate vendorId");

        let bare = PanelError::from(ClientError::Rejected { status: 500, message: None });
        assert_eq!(bare.user_message("Failed to create vendor"), "Failed to create vendor");

        let offline = PanelError::from(ClientError::Network("connection refused".to_string()));
        assert_eq!(offline.user_message("Failed to load feedback"), "Failed to load feedback");
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = PanelError::from(ValidationError::MissingField {
            field: "phone".to_string(),
            label: "Phone".to_string(),
        });
        assert_eq!(err.user_message("ignored"), "Phone is required");
    }

    #[test]
    fn test_refresh_failure_ignores_action_fallback() {
        let err = PanelError::RefreshFailed("Network failure: reset".to_string());
        assert_eq!(
            err.user_message("Failed to delete feedback"),
            "Change saved, but refreshing the list failed"
        );
    }
}
