//! # Admin Panel Client
//!
//! Thin HTTP client for the admin REST API. Every call is a single
//! authenticated request: no retries, no caching, and no timeout beyond the
//! transport default unless [`ClientConfig::timeout_secs`] is set.
//!
//! [`AdminApi`] is the seam the panel controllers depend on; [`AdminClient`]
//! is its `reqwest` implementation.

mod api;
mod client;
mod error;
mod types;

pub use api::AdminApi;
pub use client::AdminClient;
pub use error::ClientError;
pub use types::*;
