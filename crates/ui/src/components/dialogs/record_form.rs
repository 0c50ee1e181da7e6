//! # Record Form Dialog
//!
//! One modal for creating and editing any resource, driven by a
//! [`FormSchema`].
//!
//! ## Features
//!
//! - Text, phone, password, and select fields
//! - Lookup-backed selects fetched when the modal opens
//! - Cascading selects: choosing a parent clears and re-filters children
//! - Inline validation before any request is made
//! - Success banner, fixed delay, then close
//! - Close controls locked while a submit is in flight

use dioxus::prelude::*;
use halqa_schema::{Banner, FieldKind, FieldOptions, FieldSpec, FormDialog, FormSchema};
use tracing::{debug, info, warn};

use crate::components::inputs::{Select, TextInput};
use crate::context::use_console;
use crate::hooks::use_lookups;
use crate::state::report_error;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct RecordFormDialogProps {
    /// Fields, cascades, and lookups
    pub schema: FormSchema,

    /// Singular name used in titles and messages (e.g. "Area")
    pub noun: String,

    /// Collection path to POST / PUT against
    pub endpoint: String,

    /// Open state, mode, and values; owned by the page
    pub dialog: Signal<FormDialog>,

    /// Called after a successful save, once the modal has closed
    #[props(default)]
    pub on_success: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Create / edit modal
///
/// The body only mounts while the dialog is open, so lookups are fetched
/// fresh on every open.
#[component]
pub fn RecordFormDialog(props: RecordFormDialogProps) -> Element {
    if !props.dialog.read().open {
        return rsx! {};
    }

    rsx! {
        RecordFormBody {
            schema: props.schema,
            noun: props.noun,
            endpoint: props.endpoint,
            dialog: props.dialog,
            on_success: props.on_success,
        }
    }
}

/// Everything a field needs to render, read out of the dialog signal
struct FieldView {
    spec: FieldSpec,
    value: String,
    error: Option<String>,
    options: Option<FieldOptions>,
}

#[component]
fn RecordFormBody(
    schema: FormSchema,
    noun: String,
    endpoint: String,
    dialog: Signal<FormDialog>,
    on_success: EventHandler<()>,
) -> Element {
    let console = use_console();
    let lookups = use_lookups(schema.lookups.clone());
    let mut dialog = dialog;

    let current = dialog.read();
    let title = current.mode.title(&noun);
    let submit_label = current.mode.submit_label();
    let submitting = current.submitting;
    let banner = current.banner.clone();
    let fields: Vec<FieldView> = {
        let lookup_states = lookups.read();
        schema
            .visible_fields(&current.mode)
            .map(|spec| FieldView {
                spec: spec.clone(),
                value: current.state.get(&spec.name).to_string(),
                error: current.error_for(&spec.name).map(str::to_string),
                options: spec
                    .kind
                    .is_select()
                    .then(|| schema.options_for(spec, &current.state, &lookup_states)),
            })
            .collect()
    };
    drop(current);

    let close = move |_| {
        if !dialog.write().close() {
            debug!("Close ignored while submitting");
        }
    };

    let submit = {
        let schema = schema.clone();
        let client = console.client.clone();
        let delay = console.config.success_close_delay();
        move |_| {
            let submission = match dialog.write().begin_submit(&schema) {
                Ok(submission) => submission,
                Err(err) => {
                    debug!(error = %err, "Form rejected before submit");
                    return;
                }
            };
            let success_message = dialog.peek().mode.success_message(&noun);
            let client = client.clone();
            let endpoint = endpoint.clone();

            spawn(async move {
                let result = match &submission.target {
                    Some(id) => client.update(&endpoint, id, &submission.payload).await,
                    None => client.create(&endpoint, &submission.payload).await,
                };

                match result {
                    Ok(_) => {
                        info!(endpoint = %endpoint, "{success_message}");
                        dialog.write().succeed(success_message);
                        tokio::time::sleep(delay).await;
                        dialog.write().complete();
                        on_success.call(());
                    }
                    Err(err) if err.is_unauthorized() => {
                        dialog.write().complete();
                        report_error("Saving record", &err);
                    }
                    Err(err) => {
                        warn!(endpoint = %endpoint, error = %err, "Save failed");
                        dialog.write().fail(err.user_message());
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "modal-overlay",

            // Backdrop
            div {
                class: "modal-backdrop",
                onclick: close,
            }

            div {
                class: "modal max-w-2xl",
                onclick: move |e| e.stop_propagation(),

                // Header
                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        r#type: "button",
                        class: "btn btn-ghost btn-sm",
                        title: "Close",
                        disabled: submitting,
                        onclick: close,
                        "✕"
                    }
                }

                // Banner
                match banner {
                    Some(Banner::Success(message)) => rsx! {
                        div { class: "alert alert-success", "✓ {message}" }
                    },
                    Some(Banner::Error(message)) => rsx! {
                        div { class: "alert alert-error", "⚠ {message}" }
                    },
                    None => rsx! {},
                }

                // Fields
                div {
                    class: "modal-body form-grid",
                    for field in fields.into_iter() {
                        FormField {
                            key: "{field.spec.name}",
                            field: field.spec.clone(),
                            value: field.value,
                            error: field.error,
                            options: field.options,
                            disabled: submitting,
                            on_change: {
                                let schema = schema.clone();
                                move |(name, value): (String, String)| {
                                    dialog.write().set(&schema, &name, value);
                                }
                            },
                        }
                    }
                }

                // Footer
                div {
                    class: "modal-footer",
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        disabled: submitting,
                        onclick: close,
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        disabled: submitting,
                        onclick: submit,
                        if submitting {
                            span { class: "animate-spin", "⏳" }
                            "Saving..."
                        } else {
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Field
// ============================================================================

#[component]
fn FormField(
    field: FieldSpec,
    value: String,
    error: Option<String>,
    options: Option<FieldOptions>,
    disabled: bool,
    on_change: EventHandler<(String, String)>,
) -> Element {
    let name = field.name.clone();
    let handle_change = move |value: String| on_change.call((name.clone(), value));

    match (&field.kind, options) {
        (FieldKind::Select(_), Some(options)) => {
            let placeholder = match &options {
                FieldOptions::AwaitingParent { prompt } => prompt.clone(),
                FieldOptions::Loading => "Loading...".to_string(),
                FieldOptions::Ready(_) => field.placeholder_text(),
            };
            rsx! {
                Select {
                    value: value,
                    options: options.options().to_vec(),
                    label: field.label.clone(),
                    placeholder: placeholder,
                    error: error,
                    required: field.required,
                    disabled: disabled || options.is_disabled(),
                    full_width: field.full_width,
                    on_change: handle_change,
                }
            }
        }
        (kind, _) => rsx! {
            TextInput {
                value: value,
                label: field.label.clone(),
                placeholder: field.placeholder_text(),
                error: error,
                required: field.required,
                disabled: disabled,
                input_type: kind.input_type().to_string(),
                full_width: field.full_width,
                on_change: handle_change,
            }
        },
    }
}
