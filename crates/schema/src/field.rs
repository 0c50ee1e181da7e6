//! Form field definitions
//!
//! A [`FieldSpec`] declares one input of the record form. Select fields
//! take their options either from a static list or from a lookup
//! collection fetched when the form opens; a lookup may be narrowed by a
//! parent field ([`ParentFilter`]).

use halqa_core::{ID_FIELD, TITLE_FIELD};
use serde_json::Value;

use crate::rules::Rule;
use crate::value::{lookup, reference_id, text_at};

// ============================================================================
// Select Options
// ============================================================================

/// One entry of a select input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Narrows lookup options to records under the chosen parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentFilter {
    /// Parent form field name (e.g. `district`)
    pub field: String,
    /// Key on the lookup record holding the parent reference
    ///
    /// The reference may be populated (`{"_id": ..}`) or a bare id; both
    /// resolve to the id before comparison.
    pub reference: String,
}

impl ParentFilter {
    /// Parent stored under the same key as the form field
    pub fn new(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            reference: field.clone(),
            field,
        }
    }

    /// Parent stored under a different key on the lookup record
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// Whether a lookup record belongs to `parent_id`
    pub fn accepts(&self, record: &Value, parent_id: &str) -> bool {
        lookup(record, &self.reference)
            .and_then(reference_id)
            .is_some_and(|id| id == parent_id)
    }
}

/// Where a select gets its options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSource {
    Static(Vec<SelectOption>),
    Lookup {
        /// Lookup key, resolved against the form's lookup paths
        key: String,
        value_key: String,
        label_key: String,
        parent: Option<ParentFilter>,
    },
}

impl OptionSource {
    /// Lookup with the default `_id` / `title` keys
    pub fn lookup(key: impl Into<String>) -> Self {
        OptionSource::Lookup {
            key: key.into(),
            value_key: ID_FIELD.to_string(),
            label_key: TITLE_FIELD.to_string(),
            parent: None,
        }
    }

    /// Static options from `(value, label)` pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        OptionSource::Static(
            pairs
                .into_iter()
                .map(|(value, label)| SelectOption::new(value, label))
                .collect(),
        )
    }

    /// Use a different label key on lookup records
    pub fn label_key(mut self, key: impl Into<String>) -> Self {
        if let OptionSource::Lookup { label_key, .. } = &mut self {
            *label_key = key.into();
        }
        self
    }

    /// Narrow lookup options by a parent field
    pub fn parent(mut self, filter: ParentFilter) -> Self {
        if let OptionSource::Lookup { parent, .. } = &mut self {
            *parent = Some(filter);
        }
        self
    }

    /// The parent filter, if any
    pub fn parent_filter(&self) -> Option<&ParentFilter> {
        match self {
            OptionSource::Lookup { parent, .. } => parent.as_ref(),
            OptionSource::Static(_) => None,
        }
    }

    /// Turn lookup records into options, honoring the parent filter
    ///
    /// `parent_id` is the parent field's current value; it is ignored when
    /// the source has no parent filter.
    pub fn options_from(&self, records: &[Value], parent_id: &str) -> Vec<SelectOption> {
        match self {
            OptionSource::Static(options) => options.clone(),
            OptionSource::Lookup {
                value_key,
                label_key,
                parent,
                ..
            } => records
                .iter()
                .filter(|record| {
                    parent
                        .as_ref()
                        .is_none_or(|filter| filter.accepts(record, parent_id))
                })
                .map(|record| SelectOption::new(text_at(record, value_key), text_at(record, label_key)))
                .filter(|option| !option.value.is_empty())
                .collect(),
        }
    }
}

// ============================================================================
// Field Spec
// ============================================================================

/// Input kind of a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Tel,
    Password,
    Select(OptionSource),
}

impl FieldKind {
    /// HTML input type for text-like kinds
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Select(_) => "text",
            FieldKind::Tel => "tel",
            FieldKind::Password => "password",
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, FieldKind::Select(_))
    }
}

/// Declaration of one form field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Payload key
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
    /// Span both grid columns
    pub full_width: bool,
    /// Shown only when creating (e.g. an initial password)
    pub create_only: bool,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
            full_width: false,
            create_only: false,
            rules: Vec::new(),
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn tel(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Tel).rule(Rule::Phone)
    }

    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    pub fn select(name: impl Into<String>, label: impl Into<String>, source: OptionSource) -> Self {
        Self::new(name, label, FieldKind::Select(source))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn create_only(mut self) -> Self {
        self.create_only = true;
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Option source, for select fields
    pub fn source(&self) -> Option<&OptionSource> {
        match &self.kind {
            FieldKind::Select(source) => Some(source),
            _ => None,
        }
    }

    /// Parent filter, for dependent selects
    pub fn parent(&self) -> Option<&ParentFilter> {
        self.source().and_then(OptionSource::parent_filter)
    }

    /// Lookup key, for lookup-backed selects
    pub fn lookup_key(&self) -> Option<&str> {
        match self.source() {
            Some(OptionSource::Lookup { key, .. }) => Some(key),
            _ => None,
        }
    }

    /// Placeholder text, defaulting from the label
    pub fn placeholder_text(&self) -> String {
        self.placeholder.clone().unwrap_or_else(|| {
            if self.kind.is_select() {
                format!("Select {}", self.label)
            } else {
                format!("Enter {}", self.label.to_lowercase())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn areas() -> Vec<Value> {
        vec![
            json!({"_id": "a1", "title": "North", "district": {"_id": "d1", "title": "Lahore"}}),
            json!({"_id": "a2", "title": "South", "district": "d2"}),
            json!({"_id": "a3", "title": "East", "district": {"_id": "d1"}}),
        ]
    }

    #[test]
    fn test_parent_filter_accepts_both_reference_shapes() {
        let filter = ParentFilter::new("district");
        let rows = areas();
        assert!(filter.accepts(&rows[0], "d1"));
        assert!(filter.accepts(&rows[1], "d2"));
        assert!(!filter.accepts(&rows[1], "d1"));
    }

    #[test]
    fn test_lookup_options_filtered_by_parent() {
        let source = OptionSource::lookup("areas").parent(ParentFilter::new("district"));
        let options = source.options_from(&areas(), "d1");
        assert_eq!(
            options,
            vec![SelectOption::new("a1", "North"), SelectOption::new("a3", "East")]
        );
    }

    #[test]
    fn test_lookup_options_without_parent() {
        let source = OptionSource::lookup("areas");
        assert_eq!(source.options_from(&areas(), "").len(), 3);
    }

    #[test]
    fn test_custom_label_key() {
        let source = OptionSource::lookup("users").label_key("username");
        let options = source.options_from(&[json!({"_id": "u1", "username": "zaid"})], "");
        assert_eq!(options, vec![SelectOption::new("u1", "zaid")]);
    }

    #[test]
    fn test_static_options() {
        let source = OptionSource::from_pairs([("admin", "Admin"), ("user", "User")]);
        assert_eq!(source.options_from(&[], "").len(), 2);
        assert!(source.parent_filter().is_none());
    }

    #[test]
    fn test_field_builders() {
        let field = FieldSpec::tel("mobile", "Mobile").required().full_width();
        assert!(field.required);
        assert!(field.full_width);
        assert_eq!(field.rules, vec![Rule::Phone]);
        assert_eq!(field.kind.input_type(), "tel");
        assert_eq!(field.placeholder_text(), "Enter mobile");

        let select = FieldSpec::select("district", "District", OptionSource::lookup("districts"));
        assert_eq!(select.lookup_key(), Some("districts"));
        assert_eq!(select.placeholder_text(), "Select District");
    }
}
