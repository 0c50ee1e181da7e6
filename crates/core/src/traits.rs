//! Core traits for Halqa Admin
//!
//! `Validatable` is shared by configuration and form state; `Resource`
//! ties a typed record to its REST collection.

use crate::error::ConsoleResult;
use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use halqa_core::{ConsoleError, ConsoleResult, Validatable};
///
/// struct Credentials {
///     username: String,
/// }
///
/// impl Validatable for Credentials {
///     fn validate(&self) -> ConsoleResult<()> {
///         if self.username.is_empty() {
///             return Err(ConsoleError::validation("username", "Username is required"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `ConsoleError` describing the problem.
    fn validate(&self) -> ConsoleResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// Resource Trait
// ============================================================================

/// A record type served by a REST collection
///
/// `PATH` is the collection path relative to the API base URL; single
/// records live at `{PATH}/{id}`.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection path, e.g. `/districts`
    const PATH: &'static str;

    /// Human readable singular name, e.g. `District`
    const NAME: &'static str;

    /// The record id
    fn id(&self) -> &str;

    /// Name shown in confirmations and selects
    fn display_name(&self) -> String;
}

/// Path of a single record in a collection, e.g. `/areas/a1`
pub fn item_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection.trim_end_matches('/'), id)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsoleError;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Tag {
        #[serde(rename = "_id")]
        id: String,
        title: String,
    }

    impl Resource for Tag {
        const PATH: &'static str = "/tags";
        const NAME: &'static str = "Tag";

        fn id(&self) -> &str {
            &self.id
        }

        fn display_name(&self) -> String {
            self.title.clone()
        }
    }

    impl Validatable for Tag {
        fn validate(&self) -> ConsoleResult<()> {
            if self.title.trim().is_empty() {
                return Err(ConsoleError::validation("title", "Title is required"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_item_path() {
        assert_eq!(item_path(Tag::PATH, "t1"), "/tags/t1");
        assert_eq!(item_path("/tags/", "t1"), "/tags/t1");
    }

    #[test]
    fn test_validatable_default_is_valid() {
        let tag = Tag {
            id: "t1".into(),
            title: " ".into(),
        };
        assert!(!tag.is_valid());
        assert_eq!(tag.display_name(), " ");
    }
}
