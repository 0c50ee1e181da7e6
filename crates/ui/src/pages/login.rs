//! # Login Page
//!
//! Posts admin credentials, stores the returned token, and opens the
//! dashboard. Server messages are shown as-is under the form.

use dioxus::prelude::*;
use halqa_core::{ConsoleError, ConsoleResult, Validatable};
use tracing::warn;

use crate::NAME;
use crate::components::TextInput;
use crate::context::use_console;
use crate::state::APP_STATE;

// ============================================================================
// Credentials
// ============================================================================

/// Login form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Validatable for Credentials {
    fn validate(&self) -> ConsoleResult<()> {
        if self.username.trim().is_empty() {
            return Err(ConsoleError::validation("username", "Username is required"));
        }
        if self.password.is_empty() {
            return Err(ConsoleError::validation("password", "Password is required"));
        }
        Ok(())
    }
}

// ============================================================================
// Page Component
// ============================================================================

#[component]
pub fn LoginPage() -> Element {
    let console = use_console();
    let mut credentials = use_signal(Credentials::default);
    let mut error = use_signal(|| None::<String>);
    let mut signing_in = use_signal(|| false);

    let submit = use_callback(move |()| {
        if *signing_in.peek() {
            return;
        }
        let values = credentials.peek().clone();
        if let Err(err) = values.validate() {
            error.set(Some(err.user_message()));
            return;
        }

        error.set(None);
        signing_in.set(true);
        let client = console.client.clone();

        spawn(async move {
            match client.login(values.username.trim(), &values.password).await {
                Ok(_) => {
                    credentials.set(Credentials::default());
                    APP_STATE.write().sign_in();
                }
                Err(err) => {
                    warn!(error = %err, "Sign in failed");
                    error.set(Some(err.user_message()));
                }
            }
            signing_in.set(false);
        });
    });

    let busy = *signing_in.read();
    let current = credentials.read().clone();
    // e.g. "session expired" after a 401 elsewhere
    let notice = APP_STATE.read().ui.status_message.clone();

    rsx! {
        div {
            class: "login-page",

            div {
                class: "login-card",

                div {
                    class: "text-center mb-6",
                    span { class: "text-4xl", "⭕" }
                    h1 { class: "page-title", "{NAME}" }
                    p { class: "text-muted", "Sign in with your administrator account" }
                }

                if let Some(notice) = notice {
                    div { class: "alert alert-warning", "{notice.text}" }
                }

                if let Some(message) = error.read().as_ref() {
                    div { class: "alert alert-error", "⚠ {message}" }
                }

                TextInput {
                    value: current.username,
                    label: "Username".to_string(),
                    placeholder: "admin".to_string(),
                    required: true,
                    disabled: busy,
                    on_change: move |value: String| credentials.write().username = value,
                    on_enter: move |_| submit.call(()),
                }

                TextInput {
                    value: current.password,
                    label: "Password".to_string(),
                    input_type: "password".to_string(),
                    required: true,
                    disabled: busy,
                    on_change: move |value: String| credentials.write().password = value,
                    on_enter: move |_| submit.call(()),
                }

                button {
                    r#type: "button",
                    class: "btn btn-primary w-full mt-4",
                    disabled: busy,
                    onclick: move |_| submit.call(()),
                    if busy {
                        span { class: "animate-spin", "⏳" }
                        "Signing in..."
                    } else {
                        "Sign In"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_fields() {
        let mut credentials = Credentials::default();
        assert_eq!(
            credentials.validate().err().and_then(|e| e.field().map(str::to_string)),
            Some("username".to_string())
        );

        credentials.username = "admin".into();
        assert!(!credentials.is_valid());

        credentials.password = "secret".into();
        assert!(credentials.is_valid());
    }
}
