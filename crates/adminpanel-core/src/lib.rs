//! # Admin Panel Core
//!
//! UI-agnostic controllers for the admin screens. Each controller owns a
//! transient copy of server state plus loading and status flags, and exposes
//! its render state as plain data for whatever host draws it.
//!
//! - [`FeedbackPanel`] - moderate end-user feedback (approve, delete)
//! - [`EmployeeApprovalPanel`] - approve or reject pending employees, with search
//! - [`VendorForm`] - create vendors from a validated draft
//! - [`ContactInfoEditor`] - view/edit state machine over the contact singleton
//!
//! Every operation awaits to completion before the next begins. A host that
//! goes away mid-request calls [`TeardownHandle::teardown`]; late responses
//! are then dropped without touching state. [`LoadingHandle`] reports whether a
//! request is in flight while the controller itself is borrowed by it.

pub mod error;
pub mod form;
pub mod lifecycle;
pub mod panel;
pub mod settings;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;

pub use error::PanelError;
pub use form::{ContactInfoEditor, CreateForm, EditorMode, VendorForm};
pub use lifecycle::{LoadingHandle, TeardownHandle};
pub use panel::{EmployeeApprovalPanel, FeedbackPanel, PanelView, Patch, ResourcePanel};
pub use settings::{PanelSettings, RefreshStrategy};
pub use status::{StatusMessage, StatusSlot, Tone};
