//! Dashboard Page Component
//!
//! Greets the signed-in admin and shows one count per collection. Every
//! request is joined; a failure shows one error with a retry button.

use dioxus::prelude::*;
use halqa_client::{AdminProfile, ApiClient, App, Area, District, Halqa, MemberGroup, User};
use halqa_core::ConsoleResult;
use halqa_schema::LoadState;
use tracing::debug;

use crate::context::use_console;
use crate::state::{APP_STATE, Page, report_error};

// ============================================================================
// Data
// ============================================================================

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub profile: AdminProfile,
    /// Record count per page, in sidebar order
    pub counts: Vec<(Page, usize)>,
}

/// Fetch the profile and every collection concurrently
async fn load_dashboard(client: &ApiClient) -> ConsoleResult<DashboardData> {
    let (profile, districts, areas, groups, halqas, apps, users) = futures::try_join!(
        client.profile(),
        client.list::<District>(),
        client.list::<Area>(),
        client.list::<MemberGroup>(),
        client.list::<Halqa>(),
        client.list::<App>(),
        client.list::<User>(),
    )?;

    Ok(DashboardData {
        profile,
        counts: vec![
            (Page::Districts, districts.len()),
            (Page::Areas, areas.len()),
            (Page::MemberGroups, groups.len()),
            (Page::Halqas, halqas.len()),
            (Page::Apps, apps.len()),
            (Page::Users, users.len()),
        ],
    })
}

// ============================================================================
// Dashboard Page Component
// ============================================================================

#[component]
pub fn DashboardPage() -> Element {
    let console = use_console();
    let mut data = use_signal(|| LoadState::<DashboardData>::Loading);

    let reload = use_callback(move |()| {
        let client = console.client.clone();
        data.set(LoadState::Loading);
        spawn(async move {
            let result = load_dashboard(&client).await;
            if let Err(err) = &result {
                report_error("Loading dashboard", err);
            } else {
                debug!("Dashboard loaded");
            }
            data.set(LoadState::from_result(result.map_err(|e| e.user_message())));
        });
    });

    use_effect(move || reload.call(()));

    let body = match &*data.read() {
        LoadState::Loading => rsx! {
            div {
                class: "table-state",
                span { class: "animate-spin text-2xl", "⏳" }
                p { "Loading..." }
            }
        },
        LoadState::Failed(message) => rsx! {
            div {
                class: "table-state table-state-error",
                p { "{message}" }
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| reload.call(()),
                    "🔄 Retry"
                }
            }
        },
        LoadState::Ready(dashboard) => {
            let greeting = dashboard.profile.display_name().to_string();
            let counts = dashboard.counts.clone();
            rsx! {
                p { class: "page-subtitle mb-6", "Welcome back, {greeting}" }
                div {
                    class: "stat-grid",
                    for (page, count) in counts {
                        StatCard { key: "{page:?}", page: page, count: count }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page dashboard-page",
            div {
                class: "page-header",
                h1 { class: "page-title", "Dashboard" }
            }
            {body}
        }
    }
}

// ============================================================================
// Stat Card Component
// ============================================================================

#[component]
fn StatCard(page: Page, count: usize) -> Element {
    let icon = page.icon();
    let label = page.display_name();

    rsx! {
        button {
            r#type: "button",
            class: "stat-card",
            onclick: move |_| APP_STATE.write().ui.navigate(page),

            div { class: "stat-icon", "{icon}" }
            div { class: "stat-count", "{count}" }
            div { class: "stat-label", "{label}" }
        }
    }
}
