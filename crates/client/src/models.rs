//! Typed records served by the directory API
//!
//! Tables and forms work on raw JSON; these types are used where the
//! console needs real fields (dashboard counts, the admin profile, the
//! collection paths behind each page).

use halqa_core::{RecordId, Reference, Resource, Timestamps, UserRole, UserType};
use serde::{Deserialize, Serialize};

// ============================================================================
// Directory Hierarchy
// ============================================================================

/// Top of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub title: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// An area inside a district
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub title: String,
    pub district: Option<Reference>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// A members group inside an area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberGroup {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub district: Option<Reference>,
    #[serde(default)]
    pub area: Option<Reference>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Smallest unit of the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Halqa {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub district: Option<Reference>,
    #[serde(default)]
    pub area: Option<Reference>,
    #[serde(default)]
    pub members_group: Option<Reference>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

// ============================================================================
// Tenants and Accounts
// ============================================================================

/// Tenant record a user belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub title: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// A user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub username: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub user_type: UserType,
    #[serde(default)]
    pub user_role: UserRole,
    #[serde(default)]
    pub app: Option<Reference>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// The signed-in administrator, as returned by `/admin/profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    #[serde(rename = "_id", default)]
    pub id: RecordId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl AdminProfile {
    /// Name for the greeting
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

// ============================================================================
// Resource Impls
// ============================================================================

macro_rules! titled_resource {
    ($ty:ty, $path:literal, $name:literal) => {
        impl Resource for $ty {
            const PATH: &'static str = $path;
            const NAME: &'static str = $name;

            fn id(&self) -> &str {
                &self.id
            }

            fn display_name(&self) -> String {
                self.title.clone()
            }
        }
    };
}

titled_resource!(District, "/districts", "District");
titled_resource!(Area, "/areas", "Area");
titled_resource!(MemberGroup, "/members", "Members Group");
titled_resource!(Halqa, "/halqas", "Halqa");
titled_resource!(App, "/apps", "App");

impl Resource for User {
    const PATH: &'static str = "/admin/users";
    const NAME: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.username.clone()
    }
}
