//! # Halqa Client
//!
//! Everything between the console and the directory API.
//!
//! - **api**: `ApiClient` with bearer auth, request logging, envelope
//!   decoding, and 401 handling
//! - **models**: typed directory records and their collection paths
//! - **session**: the auth session and where it is persisted
//! - **config**: layered console configuration

pub mod api;
pub mod config;
pub mod models;
pub mod session;

pub use api::{ApiClient, LOGIN_PATH, PROFILE_PATH};
pub use config::{ConsoleConfig, DEFAULT_CONFIG_FILE, default_session_path};
pub use models::{AdminProfile, App, Area, District, Halqa, MemberGroup, User};
pub use session::{
    ADMIN_USER_TYPE, AuthSession, FileSessionStore, MemorySessionStore, Session, SessionStore,
};
