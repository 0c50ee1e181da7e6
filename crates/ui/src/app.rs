//! Main Application Component for Halqa Admin
//!
//! The root component: sidebar, the active page, and the status bar. Signed
//! out, the whole window is the login form.

use dioxus::prelude::*;

use crate::context::use_console;
use crate::pages::{
    AppsPage, AreasPage, DashboardPage, DistrictsPage, HalqasPage, LoginPage, MemberGroupsPage,
    UsersPage,
};
use crate::state::{APP_STATE, Page, StatusLevel, init_app_state};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let console = use_console();

    // Pick up a session saved by a previous run
    use_hook(move || {
        init_app_state(&console.client);
        tracing::info!("Halqa Admin UI initialized");
    });

    let page = APP_STATE.read().visible_page();

    if page == Page::Login {
        return rsx! {
            div {
                class: "app-container",
                LoginPage {}
            }
        };
    }

    rsx! {
        div {
            class: "app-container flex",

            // Left Sidebar (navigation)
            Sidebar {}

            div {
                class: "flex-1 flex flex-col overflow-hidden",

                // Main Content Area
                MainContent { page: page }

                // Status Bar
                StatusBar {}
            }
        }
    }
}

// ============================================================================
// Sidebar Component
// ============================================================================

/// Navigation sidebar with the collapsible Directory group
#[component]
fn Sidebar() -> Element {
    let console = use_console();
    let state = APP_STATE.read();
    let collapsed = state.ui.sidebar_collapsed;
    let expanded = state.ui.directory_expanded;
    let current_page = state.ui.active_page;
    drop(state);

    let sidebar_class = if collapsed {
        "sidebar sidebar-collapsed"
    } else {
        "sidebar"
    };

    rsx! {
        aside {
            class: "{sidebar_class}",

            // Header with toggle button
            div {
                class: "sidebar-header",

                if !collapsed {
                    span { class: "sidebar-brand", "⭕ Halqa Admin" }
                }

                button {
                    class: "btn btn-ghost btn-sm",
                    title: if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                    onclick: move |_| {
                        APP_STATE.write().ui.toggle_sidebar();
                    },
                    if collapsed { "☰" } else { "✕" }
                }
            }

            // Navigation items
            nav {
                class: "sidebar-nav",

                SidebarItem {
                    page: Page::Dashboard,
                    current: current_page,
                    collapsed: collapsed,
                }

                // Directory group
                button {
                    class: "sidebar-group",
                    title: "Directory",
                    onclick: move |_| {
                        APP_STATE.write().ui.toggle_directory();
                    },
                    span { class: "sidebar-icon", "📂" }
                    if !collapsed {
                        span { class: "flex-1", "Directory" }
                        span { class: "text-muted", if expanded { "▾" } else { "▸" } }
                    }
                }

                if expanded {
                    div {
                        class: "sidebar-group-items",
                        for page in Page::DIRECTORY {
                            SidebarItem {
                                key: "{page:?}",
                                page: page,
                                current: current_page,
                                collapsed: collapsed,
                            }
                        }
                    }
                }

                SidebarItem {
                    page: Page::Apps,
                    current: current_page,
                    collapsed: collapsed,
                }

                SidebarItem {
                    page: Page::Users,
                    current: current_page,
                    collapsed: collapsed,
                }
            }

            // Logout at bottom
            div {
                class: "sidebar-footer",
                button {
                    class: "sidebar-item",
                    title: "Log out",
                    onclick: move |_| {
                        console.client.logout();
                        let mut state = APP_STATE.write();
                        state.sign_out();
                        state.ui.set_status("Signed out", StatusLevel::Info);
                    },
                    span { class: "sidebar-icon", "🚪" }
                    if !collapsed {
                        span { "Log out" }
                    }
                }
            }
        }
    }
}

/// Sidebar navigation item
#[component]
fn SidebarItem(page: Page, current: Page, collapsed: bool) -> Element {
    let is_active = page == current;
    let icon = page.icon();
    let name = page.display_name();

    let item_class = if is_active {
        "sidebar-item sidebar-item-active"
    } else {
        "sidebar-item"
    };

    rsx! {
        button {
            class: "{item_class}",
            title: "{name}",
            onclick: move |_| {
                APP_STATE.write().ui.navigate(page);
            },
            span { class: "sidebar-icon", "{icon}" }
            if !collapsed {
                span { "{name}" }
            }
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// Main content area that renders the active page
///
/// Each page is its own component, so navigating remounts it and it re-fetches.
#[component]
fn MainContent(page: Page) -> Element {
    rsx! {
        main {
            class: "main-content",

            match page {
                Page::Login => rsx! { LoginPage {} },
                Page::Dashboard => rsx! { DashboardPage {} },
                Page::Districts => rsx! { DistrictsPage {} },
                Page::Areas => rsx! { AreasPage {} },
                Page::MemberGroups => rsx! { MemberGroupsPage {} },
                Page::Halqas => rsx! { HalqasPage {} },
                Page::Apps => rsx! { AppsPage {} },
                Page::Users => rsx! { UsersPage {} },
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let state = APP_STATE.read();
    let status = state.ui.status_message.clone();
    let page = state.ui.active_page;
    drop(state);
    let location = format!("{} {}", page.icon(), page.display_name());

    rsx! {
        footer {
            class: "status-bar",

            // Status message
            if let Some(msg) = status {
                span {
                    class: msg.level.css_class(),
                    "{msg.text}"
                }
                button {
                    class: "btn btn-ghost btn-xs",
                    title: "Dismiss",
                    onclick: move |_| APP_STATE.write().ui.clear_status(),
                    "✕"
                }
            } else {
                span { "Ready" }
            }

            // Spacer
            div { class: "flex-1" }

            span { "{location}" }
        }
    }
}
