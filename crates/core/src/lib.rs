//! # Halqa Core
//!
//! Core types, traits, and error handling for Halqa Admin.
//!
//! This crate provides the foundational building blocks shared by the
//! schema, client, and UI crates:
//!
//! - **Types**: record identifiers, user classification, parent references
//! - **Traits**: `Validatable` and `Resource`
//! - **Errors**: unified error handling with `ConsoleError` and `ConsoleResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ConsoleError, ConsoleResult, GENERIC_FAILURE_MESSAGE, ResultExt};
pub use traits::{Resource, Validatable, item_path};
pub use types::{ID_FIELD, RecordId, Reference, TITLE_FIELD, Timestamps, UserRole, UserType};
