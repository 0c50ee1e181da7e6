//! Page Components for Halqa Admin
//!
//! Every directory page is a [`ResourcePage`] with its own
//! [`ResourceConfig`]; login and dashboard are hand-built.
//!
//! ## Available Pages
//!
//! - **LoginPage**: administrator sign-in
//! - **DashboardPage**: collection counts and profile
//! - **DistrictsPage**, **AreasPage**, **MemberGroupsPage**, **HalqasPage**:
//!   the directory hierarchy
//! - **AppsPage**: tenant records
//! - **UsersPage**: user accounts
//!

pub mod apps;
pub mod areas;
pub mod dashboard;
pub mod districts;
pub mod halqas;
pub mod login;
pub mod member_groups;
pub mod resource;
pub mod users;

// Re-export page components for convenience
pub use apps::AppsPage;
pub use areas::AreasPage;
pub use dashboard::DashboardPage;
pub use districts::DistrictsPage;
pub use halqas::HalqasPage;
pub use login::LoginPage;
pub use member_groups::MemberGroupsPage;
pub use resource::{ResourceConfig, ResourcePage};
pub use users::UsersPage;
