//! # Data Table Component
//!
//! Configuration-driven table over JSON records.
//!
//! ## Features
//!
//! - Column kinds: plain, badge, date, avatar, custom formatter
//! - Search and exact-match filters through [`TableQuery`]
//! - Distinct loading, error (with retry), empty, and no-match states
//! - Full table on wide windows, stacked cards on narrow ones
//! - Caller supplied row actions
//!
//! Both renderings walk the same filtered rows and the same [`Cell`]
//! renderer; the stylesheet decides which one is visible.

use dioxus::prelude::*;
use halqa_schema::{
    ActionKind, CardLayout, Cell, Column, EMPTY_CELL, EMPTY_MESSAGE, NO_MATCHES_MESSAGE, RowAction,
    TableQuery, TableView, card_layout, record_id, summary, table_view,
};
use serde_json::Value;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    /// Full collection, unfiltered
    pub rows: Vec<Value>,

    pub columns: Vec<Column>,

    /// One button per action per row
    #[props(default)]
    pub actions: Vec<RowAction>,

    /// Search text and filters
    #[props(default)]
    pub query: TableQuery,

    #[props(default = false)]
    pub loading: bool,

    /// Load error; replaces the body
    #[props(default)]
    pub error: Option<String>,

    /// Row action clicked
    #[props(default)]
    pub on_action: EventHandler<(ActionKind, Value)>,

    /// Retry button in the error state
    #[props(default)]
    pub on_retry: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Generic data table
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let view = table_view(
        props.loading,
        props.error.as_deref(),
        &props.rows,
        &props.columns,
        &props.query,
    );
    let total = props.rows.len();

    let body = match view {
        TableView::Loading => rsx! {
            div {
                class: "table-state",
                span { class: "animate-spin text-2xl", "⏳" }
                p { "Loading..." }
            }
        },
        TableView::Error(message) => rsx! {
            div {
                class: "table-state table-state-error",
                span { class: "text-2xl", "⚠️" }
                p { "{message}" }
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| props.on_retry.call(()),
                    "🔄 Retry"
                }
            }
        },
        TableView::Empty => rsx! {
            div {
                class: "table-state",
                span { class: "text-2xl", "📭" }
                p { "{EMPTY_MESSAGE}" }
            }
        },
        TableView::NoMatches => rsx! {
            div {
                class: "table-state",
                span { class: "text-2xl", "🔍" }
                p { "{NO_MATCHES_MESSAGE}" }
            }
        },
        TableView::Rows(rows) => {
            let footer = summary(rows.len(), total);
            let rows: Vec<Value> = rows.into_iter().cloned().collect();
            rsx! {
                TableLayout {
                    rows: rows.clone(),
                    columns: props.columns.clone(),
                    actions: props.actions.clone(),
                    on_action: props.on_action,
                }
                CardList {
                    rows: rows,
                    columns: props.columns.clone(),
                    actions: props.actions.clone(),
                    on_action: props.on_action,
                }
                div {
                    class: "table-summary",
                    "{footer}"
                }
            }
        }
    };

    rsx! {
        div {
            class: "data-table",
            {body}
        }
    }
}

// ============================================================================
// Wide Layout
// ============================================================================

#[component]
fn TableLayout(
    rows: Vec<Value>,
    columns: Vec<Column>,
    actions: Vec<RowAction>,
    on_action: EventHandler<(ActionKind, Value)>,
) -> Element {
    let has_actions = !actions.is_empty();

    rsx! {
        div {
            class: "table-wide",
            table {
                thead {
                    tr {
                        for column in columns.iter() {
                            th {
                                key: "{column.key}",
                                class: column.align.css_class(),
                                "{column.label}"
                            }
                        }
                        if has_actions {
                            th { class: "text-right", "Actions" }
                        }
                    }
                }
                tbody {
                    for (row_id, row) in rows.iter().enumerate().map(|(index, row)| (row_key(row, index), row)) {
                        tr {
                            key: "{row_id}",
                            for column in columns.iter() {
                                td {
                                    key: "{column.key}",
                                    class: column.align.css_class(),
                                    CellView { cell: column.render(row) }
                                }
                            }
                            if has_actions {
                                td {
                                    class: "text-right",
                                    RowActions {
                                        row: row.clone(),
                                        actions: actions.clone(),
                                        on_action: on_action,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Narrow Layout
// ============================================================================

#[component]
fn CardList(
    rows: Vec<Value>,
    columns: Vec<Column>,
    actions: Vec<RowAction>,
    on_action: EventHandler<(ActionKind, Value)>,
) -> Element {
    rsx! {
        div {
            class: "table-cards",
            for (row_id, row) in rows.iter().enumerate().map(|(index, row)| (row_key(row, index), row)) {
                {
                    let CardLayout { heading, subheading, details } = card_layout(&columns, row);
                    rsx! {
                        div {
                            key: "{row_id}",
                            class: "record-card",
                            div {
                                class: "record-card-header",
                                div {
                                    class: "record-card-title",
                                    CellView { cell: heading }
                                    if let Some(subheading) = subheading {
                                        div {
                                            class: "record-card-subtitle",
                                            CellView { cell: subheading }
                                        }
                                    }
                                }
                                if !actions.is_empty() {
                                    RowActions {
                                        row: row.clone(),
                                        actions: actions.clone(),
                                        on_action: on_action,
                                    }
                                }
                            }
                            if !details.is_empty() {
                                dl {
                                    class: "record-card-details",
                                    for (label, cell) in details {
                                        div {
                                            key: "{label}",
                                            dt { "{label}" }
                                            dd { CellView { cell: cell } }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Shared Pieces
// ============================================================================

/// One rendered cell
#[component]
pub fn CellView(cell: Cell) -> Element {
    match cell {
        Cell::Text(text) => rsx! { span { "{text}" } },
        Cell::Date(text) => rsx! { span { class: "cell-date", "{text}" } },
        Cell::Badge { text, tone } => rsx! {
            span { class: tone.css_class(), "{text}" }
        },
        Cell::Avatar { initial, text } => rsx! {
            span {
                class: "cell-avatar",
                span { class: "avatar", "{initial}" }
                span { "{text}" }
            }
        },
        Cell::Empty => rsx! { span { class: "cell-empty", "{EMPTY_CELL}" } },
    }
}

#[component]
fn RowActions(
    row: Value,
    actions: Vec<RowAction>,
    on_action: EventHandler<(ActionKind, Value)>,
) -> Element {
    rsx! {
        div {
            class: "row-actions",
            for action in actions.into_iter() {
                {
                    let row = row.clone();
                    rsx! {
                        button {
                            key: "{action.title}",
                            r#type: "button",
                            class: action.class,
                            title: action.title,
                            onclick: move |_| on_action.call((action.kind, row.clone())),
                            "{action.icon}"
                        }
                    }
                }
            }
        }
    }
}

/// Stable key: the record id, or the position when it has none
fn row_key(row: &Value, index: usize) -> String {
    let id = record_id(row);
    if id.is_empty() { format!("row-{index}") } else { id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_key_prefers_id() {
        assert_eq!(row_key(&json!({"_id": "d1"}), 3), "d1");
        assert_eq!(row_key(&json!({"title": "No id"}), 3), "row-3");
    }
}
