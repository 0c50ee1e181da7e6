//! Filter selects above a table
//!
//! A filter control binds a select to one [`TableQuery`] filter key. Its
//! options come from the page's lookup collections or a static list; a
//! dependent filter narrows its options once its parent filter is set and
//! is cleared whenever the parent changes.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::field::{OptionSource, ParentFilter, SelectOption};
use crate::table::TableQuery;

/// A filter select bound to a query key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    /// Query key (dot-path into the row)
    pub key: String,
    pub label: String,
    pub source: OptionSource,
}

impl FilterControl {
    pub fn new(key: impl Into<String>, label: impl Into<String>, source: OptionSource) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            source,
        }
    }

    /// Filter by a lookup collection keyed by its `_id`
    pub fn lookup(key: impl Into<String>, label: impl Into<String>, lookup: impl Into<String>) -> Self {
        Self::new(key, label, OptionSource::lookup(lookup))
    }

    /// Narrow options to records under the parent filter's selection
    ///
    /// `parent_key` is the other filter's query key; `reference` is the key
    /// on this filter's lookup records holding the parent reference.
    pub fn depends_on(mut self, parent_key: impl Into<String>, reference: impl Into<String>) -> Self {
        self.source = self
            .source
            .parent(ParentFilter::new(parent_key).with_reference(reference));
        self
    }

    /// Query key of the parent filter
    pub fn parent_key(&self) -> Option<&str> {
        self.source.parent_filter().map(|parent| parent.field.as_str())
    }

    /// Options given the loaded lookups and the current query
    ///
    /// With the parent filter unset every record is offered.
    pub fn options(&self, lookups: &BTreeMap<String, Vec<Value>>, query: &TableQuery) -> Vec<SelectOption> {
        let records: &[Value] = match &self.source {
            OptionSource::Lookup { key, .. } => lookups.get(key).map(Vec::as_slice).unwrap_or(&[]),
            OptionSource::Static(_) => &[],
        };

        match self.parent_key().map(|key| query.filter(key)) {
            Some("") => {
                let mut unfiltered = self.source.clone();
                if let OptionSource::Lookup { parent, .. } = &mut unfiltered {
                    *parent = None;
                }
                unfiltered.options_from(records, "")
            }
            Some(parent_id) => self.source.options_from(records, parent_id),
            None => self.source.options_from(records, ""),
        }
    }
}

/// Set a filter and clear every filter depending on it, transitively
pub fn set_filter(controls: &[FilterControl], query: &mut TableQuery, key: &str, value: &str) {
    let changed = query.filter(key) != value;
    query.set_filter(key, value);
    if !changed {
        return;
    }
    for control in controls.iter().filter(|c| c.parent_key() == Some(key)) {
        set_filter(controls, query, &control.key, "");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn halqa_filters() -> Vec<FilterControl> {
        vec![
            FilterControl::lookup("district", "District", "districts"),
            FilterControl::lookup("area", "Area", "areas").depends_on("district", "district"),
            FilterControl::lookup("membersGroup", "Members Group", "members").depends_on("area", "area"),
        ]
    }

    fn lookups() -> BTreeMap<String, Vec<Value>> {
        BTreeMap::from([
            (
                "districts".to_string(),
                vec![json!({"_id": "d1", "title": "Lahore"}), json!({"_id": "d2", "title": "Multan"})],
            ),
            (
                "areas".to_string(),
                vec![
                    json!({"_id": "a1", "title": "North", "district": {"_id": "d1"}}),
                    json!({"_id": "a2", "title": "South", "district": "d2"}),
                ],
            ),
        ])
    }

    #[test]
    fn test_dependent_filter_shows_all_until_parent_set() {
        let filters = halqa_filters();
        let mut query = TableQuery::new();
        assert_eq!(filters[1].options(&lookups(), &query).len(), 2);

        set_filter(&filters, &mut query, "district", "d2");
        assert_eq!(
            filters[1].options(&lookups(), &query),
            vec![SelectOption::new("a2", "South")]
        );
    }

    #[test]
    fn test_parent_change_clears_children() {
        let filters = halqa_filters();
        let mut query = TableQuery::new();
        set_filter(&filters, &mut query, "district", "d1");
        set_filter(&filters, &mut query, "area", "a1");
        set_filter(&filters, &mut query, "membersGroup", "m1");

        set_filter(&filters, &mut query, "district", "d2");
        assert_eq!(query.filter("area"), "");
        assert_eq!(query.filter("membersGroup"), "");
        assert_eq!(query.filter("district"), "d2");
    }

    #[test]
    fn test_static_filter() {
        let control = FilterControl::new(
            "userRole",
            "Role",
            OptionSource::from_pairs([("admin", "Admin"), ("user", "User")]),
        );
        assert_eq!(control.options(&BTreeMap::new(), &TableQuery::new()).len(), 2);
        assert_eq!(control.parent_key(), None);
    }
}
