//! Core types used throughout Halqa Admin
//!
//! Identifiers, the user classification enums, and the reference type used
//! for parent links between directory records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier assigned by the API (the `_id` field)
pub type RecordId = String;

/// Name of the identifier field on every API record
pub const ID_FIELD: &str = "_id";

/// Name of the display field on directory records
pub const TITLE_FIELD: &str = "title";

// ============================================================================
// User Classification
// ============================================================================

/// Hierarchy level a user account represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum UserType {
    State,
    District,
    Area,
    Halqa,
    #[default]
    Member,
    MembersGroup,
}

impl UserType {
    /// Every user type, in hierarchy order
    pub fn all() -> &'static [UserType] {
        &[
            UserType::State,
            UserType::District,
            UserType::Area,
            UserType::Halqa,
            UserType::Member,
            UserType::MembersGroup,
        ]
    }

    /// Wire value used by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::State => "state",
            UserType::District => "district",
            UserType::Area => "area",
            UserType::Halqa => "halqa",
            UserType::Member => "member",
            UserType::MembersGroup => "membersGroup",
        }
    }

    /// Get the display name
    pub fn display_name(&self) -> &'static str {
        match self {
            UserType::State => "State",
            UserType::District => "District",
            UserType::Area => "Area",
            UserType::Halqa => "Halqa",
            UserType::Member => "Member",
            UserType::MembersGroup => "Members Group",
        }
    }

    /// Parse a wire value
    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.as_str() == value)
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    /// Every role
    pub fn all() -> &'static [UserRole] {
        &[UserRole::Admin, UserRole::User]
    }

    /// Wire value used by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    /// Get the display name
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::User => "User",
        }
    }

    /// Parse a wire value
    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.as_str() == value)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// References
// ============================================================================

/// A link to a parent record
///
/// The API populates references on list endpoints (`{"_id": .., "title": ..}`)
/// but accepts and sometimes returns bare id strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Populated {
        #[serde(rename = "_id")]
        id: RecordId,
        #[serde(default)]
        title: Option<String>,
    },
    Id(RecordId),
}

impl Reference {
    /// Create a bare id reference
    pub fn id(id: impl Into<RecordId>) -> Self {
        Reference::Id(id.into())
    }

    /// The referenced record id
    pub fn record_id(&self) -> &str {
        match self {
            Reference::Populated { id, .. } => id,
            Reference::Id(id) => id,
        }
    }

    /// The referenced title, if the API populated it
    pub fn title(&self) -> Option<&str> {
        match self {
            Reference::Populated { title, .. } => title.as_deref(),
            Reference::Id(_) => None,
        }
    }
}

// ============================================================================
// Timestamps
// ============================================================================

/// Creation/update stamps carried by every record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_type_wire_values() {
        assert_eq!(UserType::MembersGroup.as_str(), "membersGroup");
        assert_eq!(
            serde_json::to_string(&UserType::MembersGroup).unwrap(),
            "\"membersGroup\""
        );
        assert_eq!(UserType::parse("halqa"), Some(UserType::Halqa));
        assert_eq!(UserType::parse("planet"), None);
        assert_eq!(UserType::all().len(), 6);
    }

    #[test]
    fn test_user_role_wire_values() {
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
        assert_eq!(UserRole::parse("user"), Some(UserRole::User));
        assert_eq!(role.to_string(), "Admin");
    }

    #[test]
    fn test_reference_populated() {
        let r: Reference = serde_json::from_str(r#"{"_id":"d1","title":"North"}"#).unwrap();
        assert_eq!(r.record_id(), "d1");
        assert_eq!(r.title(), Some("North"));
    }

    #[test]
    fn test_reference_bare_id() {
        let r: Reference = serde_json::from_str("\"d1\"").unwrap();
        assert_eq!(r, Reference::id("d1"));
        assert_eq!(r.title(), None);
    }

    #[test]
    fn test_timestamps_optional() {
        let t: Timestamps =
            serde_json::from_str(r#"{"createdAt":"2024-01-02T03:04:05Z"}"#).unwrap();
        assert!(t.created_at.is_some());
        assert!(t.updated_at.is_none());
    }
}
