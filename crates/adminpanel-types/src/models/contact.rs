//! Singleton contact details shown on the public site.

use crate::schema::{Draft, ResourceKind};
use serde::{Deserialize, Serialize};

/// Public contact details. There is at most one of these.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl ContactInfo {
    /// True when every field is empty, which the server uses for "not set".
    pub fn is_blank(&self) -> bool {
        self.phone.is_empty() && self.email.is_empty() && self.address.is_empty()
    }
}

impl Draft for ContactInfo {
    const KIND: ResourceKind = ResourceKind::ContactInfo;

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "phone" => Some(self.phone.as_str()),
            "email" => Some(self.email.as_str()),
            "address" => Some(self.address.as_str()),
            _ => None,
        }
    }

    fn set_value(&mut self, field: &str, value: String) -> bool {
        match field {
            "phone" => self.phone = value,
            "email" => self.email = value,
            "address" => self.address = value,
            _ => return false,
        }
        true
    }
}
