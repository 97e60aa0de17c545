//! # Admin Panel Types
//!
//! Entities, field schema, validation and client-side filtering shared by the
//! admin panel crates.
//!
//! - **`error`** - Validation errors raised before anything touches the network
//! - **`models`** - Domain records (Feedback, Vendor, Employee, ContactInfo)
//! - **`schema`** - Per-resource field descriptions driving forms and validation
//! - **`validation`** - Required-field and email checks over a schema
//! - **`filter`** - Case-insensitive substring search over record fields
//!
//! ## Architecture Role
//!
//! `adminpanel-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!            adminpanel-types (this crate)
//!                    │
//!          ┌─────────┴─────────┐
//!          ▼                   ▼
//!  adminpanel-client ──▶ adminpanel-core
//!                              │
//!                              ▼
//!                        adminpanel-cli
//! ```

pub mod error;
pub mod filter;
pub mod models;
pub mod schema;
pub mod validation;

pub use error::ValidationError;
pub use filter::{filter_records, matches_query, Searchable};
pub use models::{
    ContactInfo, Employee, EmployeeStatus, Feedback, MessageResponse, Record, StatusUpdate,
    Vendor, VendorDraft, VendorSnapshot,
};
pub use schema::{Draft, FieldKind, FieldSpec, ResourceKind};
pub use validation::{is_valid_email, validate};
