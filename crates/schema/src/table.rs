//! Table query, row actions, and view states
//!
//! Everything the data table decides without touching the renderer:
//! which rows survive the search box and filter selects, which state the
//! body is in, and how a row splits into the card layout.
//!
//! ## Features
//!
//! - Case-insensitive search over searchable columns
//! - Exact-match filters on dot-path keys
//! - Loading / error / empty / no-match short circuits
//! - Card layout for narrow viewports

use std::collections::BTreeMap;

use serde_json::Value;

use crate::column::{Cell, Column};
use crate::value::{filter_value, lookup};

// ============================================================================
// Query
// ============================================================================

/// Search text plus exact-match filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    /// Dot-path key → required value
    pub filters: BTreeMap<String, String>,
}

impl TableQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`TableQuery::set_search`]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Builder form of [`TableQuery::set_filter`]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_filter(key, value);
        self
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Set a filter; an empty value removes it
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value);
        }
    }

    /// Current value of a filter, empty when unset
    pub fn filter(&self, key: &str) -> &str {
        self.filters.get(key).map(String::as_str).unwrap_or("")
    }

    /// Drop the search text and every filter
    pub fn clear(&mut self) {
        self.search.clear();
        self.filters.clear();
    }

    /// Whether anything narrows the rows
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.filters.is_empty()
    }

    /// Search predicate
    ///
    /// True when the search is empty or any searchable column's rendered
    /// text contains it, ignoring case. The text is not trimmed, so a
    /// search of only spaces is a real search.
    pub fn matches_search(&self, columns: &[Column], record: &Value) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        columns
            .iter()
            .filter(|column| column.searchable)
            .any(|column| column.text(record).to_lowercase().contains(&needle))
    }

    /// Filter predicate: every non-empty filter equals the resolved value
    ///
    /// Reference values resolve to their id.
    pub fn matches_filters(&self, record: &Value) -> bool {
        self.filters
            .iter()
            .filter(|(_, wanted)| !wanted.is_empty())
            .all(|(key, wanted)| {
                lookup(record, key).map(filter_value).unwrap_or_default() == *wanted
            })
    }

    /// AND of the search and filter predicates
    pub fn matches(&self, columns: &[Column], record: &Value) -> bool {
        self.matches_search(columns, record) && self.matches_filters(record)
    }

    /// Rows surviving the query, in their original order
    pub fn apply<'a>(&self, columns: &[Column], rows: &'a [Value]) -> Vec<&'a Value> {
        rows.iter()
            .filter(|record| self.matches(columns, record))
            .collect()
    }
}

// ============================================================================
// Row Actions
// ============================================================================

/// What a row button does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    View,
    Edit,
    Delete,
}

/// A per-row action button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub kind: ActionKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub class: &'static str,
}

impl RowAction {
    pub fn view() -> Self {
        Self {
            kind: ActionKind::View,
            icon: "👁",
            title: "View",
            class: "btn btn-ghost btn-sm",
        }
    }

    pub fn edit() -> Self {
        Self {
            kind: ActionKind::Edit,
            icon: "✏️",
            title: "Edit",
            class: "btn btn-ghost btn-sm",
        }
    }

    pub fn delete() -> Self {
        Self {
            kind: ActionKind::Delete,
            icon: "🗑",
            title: "Delete",
            class: "btn btn-ghost btn-sm btn-danger-text",
        }
    }

    /// Edit and delete, the default pair on every resource page
    pub fn edit_delete() -> Vec<Self> {
        vec![Self::edit(), Self::delete()]
    }
}

// ============================================================================
// View State
// ============================================================================

/// Copy shown when the collection itself is empty
pub const EMPTY_MESSAGE: &str = "No records yet";

/// Copy shown when the query hides every row
pub const NO_MATCHES_MESSAGE: &str = "No records match your search or filters";

/// What the table body should show
#[derive(Debug, Clone, PartialEq)]
pub enum TableView<'a> {
    Loading,
    Error(String),
    Empty,
    NoMatches,
    Rows(Vec<&'a Value>),
}

/// Decide the table body
///
/// Loading and error win over data; an empty collection and an empty
/// filtered result are distinct states.
pub fn table_view<'a>(
    loading: bool,
    error: Option<&str>,
    rows: &'a [Value],
    columns: &[Column],
    query: &TableQuery,
) -> TableView<'a> {
    if loading {
        return TableView::Loading;
    }
    if let Some(message) = error {
        return TableView::Error(message.to_string());
    }
    if rows.is_empty() {
        return TableView::Empty;
    }
    let visible = query.apply(columns, rows);
    if visible.is_empty() {
        TableView::NoMatches
    } else {
        TableView::Rows(visible)
    }
}

/// Footer copy, e.g. `Showing 3 of 10 records`
pub fn summary(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "record" } else { "records" };
    format!("Showing {shown} of {total} {noun}")
}

// ============================================================================
// Card Layout
// ============================================================================

/// A record split for the narrow-viewport card
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    /// First column, shown as the card title
    pub heading: Cell,
    /// Second column, shown under the title
    pub subheading: Option<Cell>,
    /// Remaining columns as `(label, cell)` for the detail grid
    pub details: Vec<(String, Cell)>,
}

/// Split a record into the card layout
pub fn card_layout(columns: &[Column], record: &Value) -> CardLayout {
    let mut cells = columns.iter().map(|column| (column, column.render(record)));

    let heading = cells.next().map(|(_, cell)| cell).unwrap_or(Cell::Empty);
    let subheading = cells.next().map(|(_, cell)| cell);
    let details = cells
        .map(|(column, cell)| (column.label.clone(), cell))
        .collect();

    CardLayout {
        heading,
        subheading,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn area_columns() -> Vec<Column> {
        vec![
            Column::new("title", "Title"),
            Column::new("district.title", "District"),
            Column::new("code", "Code").searchable(false),
            Column::date("createdAt", "Created"),
        ]
    }

    fn areas() -> Vec<Value> {
        vec![
            json!({"_id": "a1", "title": "North Zone", "district": {"_id": "d1", "title": "Lahore"}, "code": "N1"}),
            json!({"_id": "a2", "title": "South Zone", "district": {"_id": "d2", "title": "Karachi"}, "code": "S1"}),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = areas();
        let query = TableQuery::new().with_search("north");
        let visible = query.apply(&area_columns(), &rows);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0]["_id"], "a1");
    }

    #[test]
    fn test_search_reaches_nested_columns() {
        let rows = areas();
        let query = TableQuery::new().with_search("KARA");
        let visible = query.apply(&area_columns(), &rows);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0]["_id"], "a2");
    }

    #[test]
    fn test_search_skips_unsearchable_columns() {
        let rows = areas();
        let query = TableQuery::new().with_search("S1");
        assert!(query.apply(&area_columns(), &rows).is_empty());
    }

    #[test]
    fn test_empty_search_matches_all() {
        let rows = areas();
        let query = TableQuery::new().with_search("");
        assert_eq!(query.apply(&area_columns(), &rows).len(), 2);
        assert!(!query.is_active());
    }

    #[test]
    fn test_whitespace_search_is_not_trimmed() {
        let rows = areas();

        // Both titles contain a single space
        let single = TableQuery::new().with_search(" ");
        assert!(single.is_active());
        assert_eq!(single.apply(&area_columns(), &rows).len(), 2);

        // No rendered cell contains three spaces
        let triple = TableQuery::new().with_search("   ");
        assert!(triple.is_active());
        assert!(triple.apply(&area_columns(), &rows).is_empty());
    }

    #[test]
    fn test_filters_match_exactly() {
        let rows = areas();
        let query = TableQuery::new().with_filter("district._id", "d1");
        let visible = query.apply(&area_columns(), &rows);
        assert_eq!(visible.len(), 1);

        let partial = TableQuery::new().with_filter("district._id", "d");
        assert!(partial.apply(&area_columns(), &rows).is_empty());
    }

    #[test]
    fn test_reference_filter_matches_both_shapes() {
        let rows = vec![
            json!({"_id": "a1", "title": "North", "district": {"_id": "d1", "title": "Lahore"}}),
            json!({"_id": "a2", "title": "East", "district": "d1"}),
            json!({"_id": "a3", "title": "South", "district": "d2"}),
        ];
        let query = TableQuery::new().with_filter("district", "d1");
        assert_eq!(query.apply(&area_columns(), &rows).len(), 2);
    }

    #[test]
    fn test_search_and_filter_combine() {
        let rows = areas();
        let query = TableQuery::new()
            .with_search("zone")
            .with_filter("district._id", "d2");
        let visible = query.apply(&area_columns(), &rows);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0]["_id"], "a2");
    }

    #[test]
    fn test_empty_filter_value_removes_filter() {
        let mut query = TableQuery::new().with_filter("district._id", "d1");
        query.set_filter("district._id", "");
        assert!(query.filters.is_empty());
        assert_eq!(query.filter("district._id"), "");
    }

    #[test]
    fn test_view_states() {
        let columns = area_columns();
        let rows = areas();
        let query = TableQuery::new();

        assert_eq!(table_view(true, None, &rows, &columns, &query), TableView::Loading);
        assert_eq!(
            table_view(false, Some("boom"), &rows, &columns, &query),
            TableView::Error("boom".into())
        );
        assert_eq!(table_view(false, None, &[], &columns, &query), TableView::Empty);

        let miss = TableQuery::new().with_search("east");
        assert_eq!(table_view(false, None, &rows, &columns, &miss), TableView::NoMatches);

        match table_view(false, None, &rows, &columns, &query) {
            TableView::Rows(visible) => assert_eq!(visible.len(), 2),
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary(1, 2), "Showing 1 of 2 records");
        assert_eq!(summary(1, 1), "Showing 1 of 1 record");
    }

    #[test]
    fn test_card_layout() {
        let rows = areas();
        let card = card_layout(&area_columns(), &rows[0]);
        assert_eq!(card.heading, Cell::Text("North Zone".into()));
        assert_eq!(card.subheading, Some(Cell::Text("Lahore".into())));
        assert_eq!(card.details.len(), 2);
        assert_eq!(card.details[0], ("Code".to_string(), Cell::Text("N1".into())));
        assert_eq!(card.details[1], ("Created".to_string(), Cell::Empty));
    }

    #[test]
    fn test_default_actions() {
        let actions = RowAction::edit_delete();
        let kinds: Vec<_> = actions.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![ActionKind::Edit, ActionKind::Delete]);
    }
}
