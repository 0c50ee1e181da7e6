//! # Resource Page
//!
//! The shared CRUD screen every directory page is built from.
//!
//! ## Features
//!
//! - Collection and lookups fetched together on mount
//! - Search and filter bar
//! - Create and edit through one record form
//! - Delete confirmation, then re-fetch
//!
//! A page only supplies a [`ResourceConfig`]; the screen itself knows
//! nothing about districts or halqas.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use halqa_core::{RecordId, Resource, TITLE_FIELD};
use halqa_schema::{
    ActionKind, Column, DeletePrompt, FilterControl, FormDialog, FormSchema, RowAction,
    TableQuery, record_id, text_at,
};
use serde_json::Value;
use tracing::info;

use crate::components::{
    ConfirmDeleteDialog, DataTable, FilterBar, RecordDetailsDialog, RecordFormDialog,
};
use crate::context::use_console;
use crate::hooks::use_collection;
use crate::state::{APP_STATE, StatusLevel, report_error};

// ============================================================================
// Configuration
// ============================================================================

/// Everything that differs between resource pages
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceConfig {
    /// Page heading, e.g. "Districts"
    pub title: String,
    /// Singular name, e.g. "District"
    pub noun: String,
    /// Collection path
    pub endpoint: String,
    pub columns: Vec<Column>,
    pub form: FormSchema,
    pub filters: Vec<FilterControl>,
    /// Dot-path of the name shown in the delete prompt
    pub name_key: String,
    pub actions: Vec<RowAction>,
}

impl ResourceConfig {
    /// Config for a typed resource: path and noun come from the type
    pub fn of<T: Resource>(title: impl Into<String>, columns: Vec<Column>, form: FormSchema) -> Self {
        Self {
            title: title.into(),
            noun: T::NAME.to_string(),
            endpoint: T::PATH.to_string(),
            columns,
            form,
            filters: Vec::new(),
            name_key: TITLE_FIELD.to_string(),
            actions: RowAction::edit_delete(),
        }
    }

    pub fn filter(mut self, control: FilterControl) -> Self {
        self.filters.push(control);
        self
    }

    pub fn name_key(mut self, key: impl Into<String>) -> Self {
        self.name_key = key.into();
        self
    }

    pub fn actions(mut self, actions: Vec<RowAction>) -> Self {
        self.actions = actions;
        self
    }

    /// Lookup collections the page loads next to its rows
    pub fn lookups(&self) -> BTreeMap<String, String> {
        self.form.lookups.clone()
    }

    /// Name for the delete prompt
    pub fn record_name(&self, record: &Value) -> String {
        text_at(record, &self.name_key)
    }
}

// ============================================================================
// Main Component
// ============================================================================

/// Generic CRUD page
#[component]
pub fn ResourcePage(config: ResourceConfig) -> Element {
    let console = use_console();
    let collection = use_collection(&config.endpoint, config.lookups());
    let query = use_signal(TableQuery::new);
    let mut dialog = use_signal(FormDialog::new);
    let mut prompt = use_signal(DeletePrompt::new);
    let mut details = use_signal(|| None::<Value>);

    let rows = collection.rows();
    let lookups = collection.lookups();
    let loading = collection.is_loading();
    let error = collection.error();
    let count = rows.len();

    let handle_action = {
        let config = config.clone();
        move |(kind, record): (ActionKind, Value)| match kind {
            ActionKind::View => details.set(Some(record)),
            ActionKind::Edit => dialog.write().open_edit(&config.form, record),
            ActionKind::Delete => {
                let name = config.record_name(&record);
                prompt.write().request(record_id(&record), name);
            }
        }
    };

    let handle_delete = {
        let client = console.client.clone();
        let endpoint = config.endpoint.clone();
        let noun = config.noun.clone();
        move |id: RecordId| {
            let client = client.clone();
            let endpoint = endpoint.clone();
            let noun = noun.clone();
            spawn(async move {
                match client.delete(&endpoint, &id).await {
                    Ok(()) => {
                        info!(endpoint = %endpoint, id = %id, "Record deleted");
                        APP_STATE
                            .write()
                            .ui
                            .set_status(format!("{noun} deleted"), StatusLevel::Success);
                        prompt.write().settle();
                        collection.refresh();
                    }
                    Err(err) => {
                        prompt.write().settle();
                        report_error(&format!("Deleting {noun}"), &err);
                    }
                }
            });
        }
    };

    let form = config.form.clone();

    rsx! {
        div {
            class: "page resource-page",

            // Header
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "{config.title}" }
                    p { class: "page-subtitle", "{count} total" }
                }
                div {
                    class: "flex items-center gap-2",
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        title: "Reload",
                        disabled: loading,
                        onclick: move |_| collection.refresh(),
                        "🔄"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        onclick: move |_| dialog.write().open_create(&form),
                        "+ Add {config.noun}"
                    }
                }
            }

            FilterBar {
                query: query,
                controls: config.filters.clone(),
                lookups: lookups,
                placeholder: format!("Search {}...", config.title.to_lowercase()),
            }

            DataTable {
                rows: rows,
                columns: config.columns.clone(),
                actions: config.actions.clone(),
                query: query.read().clone(),
                loading: loading,
                error: error,
                on_action: handle_action,
                on_retry: move |_| collection.refresh(),
            }

            RecordFormDialog {
                schema: config.form.clone(),
                noun: config.noun.clone(),
                endpoint: config.endpoint.clone(),
                dialog: dialog,
                on_success: move |_| collection.refresh(),
            }

            ConfirmDeleteDialog {
                prompt: prompt,
                noun: config.noun.clone(),
                on_confirm: handle_delete,
            }

            RecordDetailsDialog {
                record: details,
                columns: config.columns.clone(),
                noun: config.noun.clone(),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use halqa_client::District;
    use halqa_schema::FieldSpec;
    use serde_json::json;

    fn districts() -> ResourceConfig {
        ResourceConfig::of::<District>(
            "Districts",
            vec![Column::new("title", "Title")],
            FormSchema::new(vec![FieldSpec::text("title", "Title").required()]),
        )
    }

    #[test]
    fn test_config_from_resource() {
        let config = districts();
        assert_eq!(config.endpoint, "/districts");
        assert_eq!(config.noun, "District");
        assert_eq!(config.actions, RowAction::edit_delete());
        assert!(config.lookups().is_empty());
    }

    #[test]
    fn test_record_name_uses_name_key() {
        let config = districts().name_key("code");
        let record = json!({"_id": "d1", "title": "North", "code": "N-1"});
        assert_eq!(config.record_name(&record), "N-1");
        assert_eq!(districts().record_name(&record), "North");
    }
}
