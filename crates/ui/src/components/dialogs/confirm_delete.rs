//! # Confirm Delete Dialog Component
//!
//! Dialog for confirming a destructive delete.
//!
//! ## Features
//!
//! - Names the record being deleted
//! - Both buttons disabled while the delete runs
//! - Never closes itself; the page settles the prompt when its request
//!   finishes

use dioxus::prelude::*;
use halqa_core::RecordId;
use halqa_schema::DeletePrompt;
use tracing::debug;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// Prompt state; owned by the page
    pub prompt: Signal<DeletePrompt>,

    /// Singular name for the title (e.g. "District")
    pub noun: String,

    /// Called with the record id once the user confirms
    pub on_confirm: EventHandler<RecordId>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let mut prompt = props.prompt;
    let current = prompt.read();
    if !current.is_open() {
        return rsx! {};
    }
    let name = current.display_name().to_string();
    let deleting = current.buttons_disabled();
    drop(current);

    let handle_delete = move |_| {
        let Some(id) = prompt.write().begin() else {
            return;
        };
        props.on_confirm.call(id);
    };

    let handle_cancel = move |_| {
        if !prompt.write().cancel() {
            debug!("Cancel ignored while delete is pending");
        }
    };

    rsx! {
        div {
            class: "modal-overlay",

            div {
                class: "modal-backdrop",
                onclick: handle_cancel,
            }

            div {
                class: "modal max-w-lg confirm-delete-dialog",
                onclick: move |e| e.stop_propagation(),

                // Header with warning icon
                div {
                    class: "flex items-start gap-4 mb-6",

                    div {
                        class: "warning-icon",
                        span { class: "text-2xl", "⚠️" }
                    }

                    div {
                        class: "flex-1",
                        h2 {
                            class: "modal-title text-danger",
                            "Delete {props.noun}"
                        }
                        p {
                            class: "text-muted",
                            "Are you sure you want to delete "
                            strong { "{name}" }
                            "? This action cannot be undone."
                        }
                    }
                }

                // Actions
                div {
                    class: "modal-footer",

                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        disabled: deleting,
                        onclick: handle_cancel,
                        "Cancel"
                    }

                    button {
                        r#type: "button",
                        class: "btn btn-danger",
                        disabled: deleting,
                        onclick: handle_delete,

                        if deleting {
                            span { class: "animate-spin", "⏳" }
                            "Deleting..."
                        } else {
                            "🗑️ Delete"
                        }
                    }
                }
            }
        }
    }
}
