//! # Halqa Admin UI
//!
//! Dioxus Desktop UI for Halqa Admin.
//!
//! This crate renders the administration console over the directory REST
//! API: districts, areas, member groups, halqas, apps, and users.
//!
//! ## Features
//!
//! - Generic data table with search, filters, and a card layout
//! - One record form for create and edit, with cascading selects
//! - Delete confirmation
//! - Sidebar navigation behind a login guard
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod context;
pub mod hooks;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use halqa_client;
pub use halqa_core;
pub use halqa_schema;

// Re-export main components
pub use app::App;
pub use context::{ConsoleContext, use_console};
pub use pages::{ResourceConfig, ResourcePage};
pub use state::{APP_STATE, AppState, Page, StatusLevel, StatusMessage, UiState, init_app_state};

// Re-export components
pub use components::{
    ConfirmDeleteDialog, DataTable, FilterBar, RecordDetailsDialog, RecordFormDialog,
    SearchInput, Select, TextInput,
};

// Re-export hooks
pub use hooks::{Collection, use_collection, use_lookups};

use std::sync::Arc;

use halqa_client::{ApiClient, ConsoleConfig, FileSessionStore, Session};
use halqa_core::ConsoleResult;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Halqa Admin";

/// Application display title
pub const TITLE: &str = "Halqa Admin - Directory Console";

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Build the shared services for a configuration
///
/// Restores any saved session from the configured session file.
pub fn build_context(config: ConsoleConfig) -> ConsoleResult<ConsoleContext> {
    let store = Arc::new(FileSessionStore::new(config.session_path()));
    let session = Session::restore(store);
    let client = ApiClient::new(&config, session)?;
    Ok(ConsoleContext { client, config })
}

/// Launch the Halqa Admin desktop application
///
/// Blocks until the window closes.
///
/// # Example
///
/// ```rust,ignore
/// fn main() -> anyhow::Result<()> {
///     let config = halqa_client::ConsoleConfig::load()?;
///     halqa_ui::launch(config)?;
///     Ok(())
/// }
/// ```
pub fn launch(config: ConsoleConfig) -> ConsoleResult<()> {
    tracing::info!("Starting {} v{}", NAME, VERSION);
    tracing::info!(api = %config.base_url(), "Using API");

    let context = build_context(config)?;

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_context(context)
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 820.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(420.0, 560.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);

    Ok(())
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        // Both table layouts and the breakpoint that switches them
        assert!(STYLES.contains(".table-wide"));
        assert!(STYLES.contains(".table-cards"));
        assert!(STYLES.contains("@media"));
    }

    #[test]
    fn test_build_context_restores_saved_session() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"token":"abc","userType":"admin"}"#).expect("write session");

        let config = ConsoleConfig {
            session_file: Some(path),
            ..ConsoleConfig::default()
        };
        let context = build_context(config).expect("context");
        assert!(context.client.session().is_authenticated());
        assert_eq!(context.client.session().token().as_deref(), Some("abc"));
    }
}
