//! Domain records for the admin panel.
//!
//! All records are owned by the remote service; these are the wire shapes
//! the client caches between fetches. Identifiers arrive as `id` or `_id`.

mod contact;
mod employee;
mod feedback;
mod vendor;

pub use contact::ContactInfo;
pub use employee::{Employee, EmployeeStatus, StatusUpdate, VendorSnapshot};
pub use feedback::Feedback;
pub use vendor::{Vendor, VendorDraft};

use serde::{Deserialize, Serialize};

/// A record addressable by a server-assigned identifier.
pub trait Record {
    fn id(&self) -> &str;
}

/// Acknowledgement body returned by mutation endpoints (`{"message": ...}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
