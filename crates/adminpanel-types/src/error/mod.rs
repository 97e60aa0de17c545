//! Typed error definitions for client-side checks.
//!
//! Validation runs before a draft is submitted, so these errors never carry
//! transport or server details. All errors are designed to be:
//!
//! - **Serializable** for handing to a UI host via serde
//! - **Displayable** as the single message shown next to a form
//! - **Matchable** for deciding which field to highlight

mod validation;

pub use validation::ValidationError;
