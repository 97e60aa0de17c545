//! End-user feedback awaiting moderation.

use super::Record;
use crate::schema::{Draft, ResourceKind};
use serde::{Deserialize, Serialize};

/// Feedback left by an end user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
    /// Star rating as submitted
    #[serde(default)]
    pub rating: f64,
    /// Whether a moderator has approved it for display
    #[serde(default)]
    pub approved: bool,
}

impl Feedback {
    /// Still waiting for a moderator.
    pub const fn is_pending(&self) -> bool {
        !self.approved
    }
}

impl Record for Feedback {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Draft for Feedback {
    const KIND: ResourceKind = ResourceKind::Feedback;

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(self.name.as_str()),
            "message" => Some(self.message.as_str()),
            _ => None,
        }
    }

    fn set_value(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "message" => self.message = value,
            _ => return false,
        }
        true
    }
}
