//! Application State Management for Halqa Admin
//!
//! Navigation, sidebar, and status bar state live in one global signal.
//! Page data does not: every page fetches on mount and drops its data on
//! navigation.

use dioxus::prelude::*;
use halqa_client::ApiClient;
use halqa_core::ConsoleError;
use tracing::{error, info, warn};

// ============================================================================
// Page Navigation
// ============================================================================

/// Application pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Credentials form
    #[default]
    Login,
    /// Counts and profile
    Dashboard,
    Districts,
    Areas,
    MemberGroups,
    Halqas,
    Apps,
    Users,
}

impl Page {
    /// Pages grouped under "Directory" in the sidebar
    pub const DIRECTORY: [Page; 4] = [
        Page::Districts,
        Page::Areas,
        Page::MemberGroups,
        Page::Halqas,
    ];

    /// Get the display name for this page
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Login => "Sign In",
            Page::Dashboard => "Dashboard",
            Page::Districts => "Districts",
            Page::Areas => "Areas",
            Page::MemberGroups => "Member Groups",
            Page::Halqas => "Halqas",
            Page::Apps => "Apps",
            Page::Users => "Users",
        }
    }

    /// Get the icon emoji for this page
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Login => "🔑",
            Page::Dashboard => "🏠",
            Page::Districts => "🗺️",
            Page::Areas => "📍",
            Page::MemberGroups => "👥",
            Page::Halqas => "⭕",
            Page::Apps => "🧩",
            Page::Users => "👤",
        }
    }

    /// Every page except the login form needs a session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Page::Login)
    }

    pub fn in_directory(&self) -> bool {
        Self::DIRECTORY.contains(self)
    }
}

// ============================================================================
// UI State
// ============================================================================

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusLevel::Info => "status-info",
            StatusLevel::Success => "status-success",
            StatusLevel::Warning => "status-warning",
            StatusLevel::Error => "status-error",
        }
    }
}

/// Shell state: sidebar, navigation, status bar
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub sidebar_collapsed: bool,
    /// Whether the Directory group shows its pages
    pub directory_expanded: bool,
    pub active_page: Page,
    pub status_message: Option<StatusMessage>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            directory_expanded: true,
            active_page: Page::Login,
            status_message: None,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a page
    ///
    /// Opening a directory page also expands the group.
    pub fn navigate(&mut self, page: Page) {
        self.active_page = page;
        if page.in_directory() {
            self.directory_expanded = true;
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_directory(&mut self) {
        self.directory_expanded = !self.directory_expanded;
    }

    /// Set status message
    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

// ============================================================================
// App State
// ============================================================================

/// Global application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub ui: UiState,
    /// Mirrors whether the API client holds a session
    pub authenticated: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the session active and go to the dashboard
    pub fn sign_in(&mut self) {
        self.authenticated = true;
        self.ui.clear_status();
        self.ui.navigate(Page::Dashboard);
    }

    /// Drop to the login page
    pub fn sign_out(&mut self) {
        self.authenticated = false;
        self.ui.navigate(Page::Login);
    }

    /// Page to actually render, honoring the auth guard
    pub fn visible_page(&self) -> Page {
        if self.ui.active_page.requires_auth() && !self.authenticated {
            Page::Login
        } else {
            self.ui.active_page
        }
    }

    /// Route an operation error
    ///
    /// A rejected session signs out with an explanatory message; anything
    /// else lands in the status bar.
    pub fn report_error(&mut self, context: &str, err: &ConsoleError) {
        if err.is_unauthorized() {
            self.sign_out();
            self.ui.set_status(err.user_message(), StatusLevel::Warning);
        } else {
            self.ui
                .set_status(format!("{context}: {}", err.user_message()), StatusLevel::Error);
        }
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Sync the global state with a restored session
///
/// Call once from the root component.
pub fn init_app_state(client: &ApiClient) {
    if client.session().is_authenticated() {
        info!("Resuming saved session");
        APP_STATE.write().sign_in();
    }
}

/// Route an error through the global state
pub fn report_error(context: &str, err: &ConsoleError) {
    if err.is_unauthorized() {
        warn!(context, "Session expired");
    } else if err.is_remote() {
        warn!(context, error = %err, "Request failed");
    } else {
        error!(context, error = %err, "Operation failed");
    }
    APP_STATE.write().report_error(context, err);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_properties() {
        assert!(!Page::Login.requires_auth());
        assert!(Page::Halqas.requires_auth());
        assert!(Page::Areas.in_directory());
        assert!(!Page::Users.in_directory());
        assert_eq!(Page::MemberGroups.display_name(), "Member Groups");
    }

    #[test]
    fn test_ui_state() {
        let mut ui = UiState::new();
        assert_eq!(ui.active_page, Page::Login);

        ui.toggle_directory();
        assert!(!ui.directory_expanded);
        ui.navigate(Page::Halqas);
        assert!(ui.directory_expanded);

        ui.toggle_sidebar();
        assert!(ui.sidebar_collapsed);

        ui.set_status("Saved", StatusLevel::Success);
        assert!(ui.status_message.is_some());
        ui.clear_status();
        assert!(ui.status_message.is_none());
    }

    #[test]
    fn test_auth_guard() {
        let mut state = AppState::new();
        state.ui.navigate(Page::Users);
        assert_eq!(state.visible_page(), Page::Login);

        state.sign_in();
        assert_eq!(state.visible_page(), Page::Dashboard);
        state.ui.navigate(Page::Users);
        assert_eq!(state.visible_page(), Page::Users);
    }

    #[test]
    fn test_unauthorized_error_routes_to_login() {
        let mut state = AppState::new();
        state.sign_in();
        state.ui.navigate(Page::Areas);

        state.report_error("Loading areas", &ConsoleError::Unauthorized);
        assert!(!state.authenticated);
        assert_eq!(state.visible_page(), Page::Login);
        assert_eq!(
            state.ui.status_message.as_ref().map(|m| m.level),
            Some(StatusLevel::Warning)
        );
    }

    #[test]
    fn test_other_errors_stay_on_page() {
        let mut state = AppState::new();
        state.sign_in();
        state.ui.navigate(Page::Areas);

        state.report_error("Deleting area", &ConsoleError::api(400, "Area is in use"));
        assert_eq!(state.visible_page(), Page::Areas);
        assert_eq!(
            state.ui.status_message.map(|m| m.text),
            Some("Deleting area: Area is in use".to_string())
        );
    }
}
