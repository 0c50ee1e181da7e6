//! Record form model
//!
//! The form is described by a [`FormSchema`]: the ordered fields, a
//! declarative [`CascadeGraph`] saying which field depends on which, and
//! the lookup collections that feed select options. [`FormState`] holds the
//! values and applies cascades; [`FormDialog`] adds the open/submit/banner
//! lifecycle that the modal renders.
//!
//! ## Features
//!
//! - Create and edit through one model ([`FormMode`])
//! - Transitive cascade resets (district → area → membersGroup)
//! - Per-lookup loading state; failed lookups degrade to no options
//! - Required checks then rules, first failure wins
//! - Create payloads omit blank optional fields

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use halqa_core::{ConsoleError, ConsoleResult, RecordId};
use serde_json::{Map, Value};
use tracing::debug;

use crate::field::{FieldSpec, SelectOption};
use crate::load::LoadState;
use crate::value::{lookup, record_id, reference_id, value_text};

// ============================================================================
// Cascade Graph
// ============================================================================

/// Field → parent field edges
///
/// Setting a field clears every field that (transitively) depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeGraph {
    parents: BTreeMap<String, String>,
}

impl CascadeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that `child` depends on `parent`
    pub fn link(&mut self, child: impl Into<String>, parent: impl Into<String>) {
        self.parents.insert(child.into(), parent.into());
    }

    /// Direct parent of a field
    pub fn parent_of(&self, child: &str) -> Option<&str> {
        self.parents.get(child).map(String::as_str)
    }

    /// Every field depending on `field`, nearest first
    pub fn dependants(&self, field: &str) -> Vec<String> {
        let mut found = Vec::new();
        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([field.to_string()]);

        while let Some(current) = queue.pop_front() {
            for (child, parent) in &self.parents {
                if *parent == current && child != field && seen.insert(child.clone()) {
                    found.push(child.clone());
                    queue.push_back(child.clone());
                }
            }
        }
        found
    }

    /// Graph implied by the fields' parent filters
    pub fn from_fields(fields: &[FieldSpec]) -> Self {
        let mut graph = Self::new();
        for field in fields {
            if let Some(parent) = field.parent() {
                graph.link(field.name.clone(), parent.field.clone());
            }
        }
        graph
    }
}

// ============================================================================
// Form Mode
// ============================================================================

/// Whether the form creates a record or edits an existing one
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(Value),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    /// Id of the record being edited
    pub fn record_id(&self) -> Option<RecordId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(record) => Some(record_id(record)).filter(|id| !id.is_empty()),
        }
    }

    /// Modal heading, e.g. `Create District`
    pub fn title(&self, noun: &str) -> String {
        match self {
            FormMode::Create => format!("Create {noun}"),
            FormMode::Edit(_) => format!("Edit {noun}"),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Edit(_) => "Save Changes",
        }
    }

    /// Banner copy after a successful submit
    pub fn success_message(&self, noun: &str) -> String {
        match self {
            FormMode::Create => format!("{noun} created successfully"),
            FormMode::Edit(_) => format!("{noun} updated successfully"),
        }
    }
}

// ============================================================================
// Form Schema
// ============================================================================

/// Options a select field can currently offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOptions {
    Ready(Vec<SelectOption>),
    Loading,
    /// Parent not chosen yet; the select is disabled
    AwaitingParent { prompt: String },
}

impl FieldOptions {
    pub fn is_disabled(&self) -> bool {
        !matches!(self, FieldOptions::Ready(_))
    }

    pub fn options(&self) -> &[SelectOption] {
        match self {
            FieldOptions::Ready(options) => options,
            _ => &[],
        }
    }
}

/// Fields, cascades, and lookup sources of a record form
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
    pub cascade: CascadeGraph,
    /// Lookup key → API path
    pub lookups: BTreeMap<String, String>,
}

impl FormSchema {
    /// Schema whose cascade graph follows the fields' parent filters
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        let cascade = CascadeGraph::from_fields(&fields);
        Self {
            fields,
            cascade,
            lookups: BTreeMap::new(),
        }
    }

    /// Register a lookup collection
    pub fn lookup(mut self, key: impl Into<String>, path: impl Into<String>) -> Self {
        self.lookups.insert(key.into(), path.into());
        self
    }

    /// Add a cascade edge not implied by a parent filter
    pub fn with_cascade(mut self, child: impl Into<String>, parent: impl Into<String>) -> Self {
        self.cascade.link(child, parent);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields shown in the given mode
    pub fn visible_fields<'a>(&'a self, mode: &'a FormMode) -> impl Iterator<Item = &'a FieldSpec> + 'a {
        self.fields
            .iter()
            .filter(move |field| !(mode.is_edit() && field.create_only))
    }

    /// Options for a select field given current values and lookup states
    pub fn options_for(
        &self,
        field: &FieldSpec,
        state: &FormState,
        lookups: &BTreeMap<String, LoadState<Vec<Value>>>,
    ) -> FieldOptions {
        let Some(source) = field.source() else {
            return FieldOptions::Ready(Vec::new());
        };

        let parent_id = match source.parent_filter() {
            Some(filter) => {
                let parent_id = state.get(&filter.field);
                if parent_id.is_empty() {
                    let parent_label = self
                        .field(&filter.field)
                        .map(|parent| parent.label.as_str())
                        .unwrap_or(filter.field.as_str());
                    return FieldOptions::AwaitingParent {
                        prompt: format!("Select {parent_label} first"),
                    };
                }
                parent_id
            }
            None => "",
        };

        match field.lookup_key() {
            None => FieldOptions::Ready(source.options_from(&[], parent_id)),
            Some(key) => match lookups.get(key) {
                Some(LoadState::Ready(records)) => {
                    FieldOptions::Ready(source.options_from(records, parent_id))
                }
                Some(LoadState::Failed(_)) => FieldOptions::Ready(Vec::new()),
                Some(LoadState::Loading) | None => FieldOptions::Loading,
            },
        }
    }
}

// ============================================================================
// Form State
// ============================================================================

/// Current values of every declared field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, String>,
}

impl FormState {
    /// Every declared field set to empty
    pub fn empty(schema: &FormSchema) -> Self {
        Self {
            values: schema
                .fields
                .iter()
                .map(|field| (field.name.clone(), String::new()))
                .collect(),
        }
    }

    /// Values taken from an existing record
    ///
    /// Select fields resolve references to their id; other fields take the
    /// value's text.
    pub fn from_record(schema: &FormSchema, record: &Value) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|field| {
                let raw = lookup(record, &field.name);
                let value = if field.create_only {
                    String::new()
                } else if field.kind.is_select() {
                    raw.and_then(reference_id).unwrap_or_default()
                } else {
                    raw.map(value_text).unwrap_or_default()
                };
                (field.name.clone(), value)
            })
            .collect();
        Self { values }
    }

    /// Initial state for a mode
    pub fn for_mode(schema: &FormSchema, mode: &FormMode) -> Self {
        match mode {
            FormMode::Create => Self::empty(schema),
            FormMode::Edit(record) => Self::from_record(schema, record),
        }
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Set a field and clear its dependants
    ///
    /// Returns the names of the fields that were cleared.
    pub fn set(&mut self, schema: &FormSchema, name: &str, value: impl Into<String>) -> Vec<String> {
        let value = value.into();
        let changed = self.get(name) != value;
        self.values.insert(name.to_string(), value);

        if !changed {
            return Vec::new();
        }

        let cleared = schema.cascade.dependants(name);
        for dependant in &cleared {
            self.values.insert(dependant.clone(), String::new());
        }
        if !cleared.is_empty() {
            debug!(field = name, cleared = ?cleared, "Cascade reset");
        }
        cleared
    }

    /// Required checks across all fields, then rules, in field order
    pub fn validate(&self, schema: &FormSchema, mode: &FormMode) -> ConsoleResult<()> {
        let fields: Vec<&FieldSpec> = schema.visible_fields(mode).collect();

        for field in &fields {
            if field.required && self.get(&field.name).trim().is_empty() {
                return Err(ConsoleError::validation(
                    &field.name,
                    format!("{} is required", field.label),
                ));
            }
        }

        for field in &fields {
            let value = self.get(&field.name).trim();
            for rule in &field.rules {
                rule.check(&field.label, value)
                    .map_err(|message| ConsoleError::validation(&field.name, message))?;
            }
        }
        Ok(())
    }

    /// Request body for the mode
    ///
    /// Create omits blank optional fields; edit sends every visible field.
    pub fn payload(&self, schema: &FormSchema, mode: &FormMode) -> Value {
        let mut body = Map::new();
        for field in schema.visible_fields(mode) {
            let value = self.get(&field.name).trim();
            if !mode.is_edit() && value.is_empty() && !field.required {
                continue;
            }
            body.insert(field.name.clone(), Value::String(value.to_string()));
        }
        Value::Object(body)
    }
}

// ============================================================================
// Form Dialog
// ============================================================================

/// Message banner inside the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

/// Inline error under one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// What to send after a successful local validation
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// `None` for create, the record id for edit
    pub target: Option<RecordId>,
    pub payload: Value,
}

/// Lifecycle of the record modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDialog {
    pub open: bool,
    pub mode: FormMode,
    pub state: FormState,
    pub submitting: bool,
    pub banner: Option<Banner>,
    pub field_error: Option<FieldError>,
}

impl FormDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an empty create form
    pub fn open_create(&mut self, schema: &FormSchema) {
        self.open_with(schema, FormMode::Create);
    }

    /// Open the form pre-filled from a record
    pub fn open_edit(&mut self, schema: &FormSchema, record: Value) {
        self.open_with(schema, FormMode::Edit(record));
    }

    fn open_with(&mut self, schema: &FormSchema, mode: FormMode) {
        self.state = FormState::for_mode(schema, &mode);
        self.mode = mode;
        self.open = true;
        self.submitting = false;
        self.banner = None;
        self.field_error = None;
    }

    /// Close unless a submit is in flight; returns whether it closed
    pub fn close(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.open = false;
        true
    }

    /// Set a field value, clearing dependants and a stale inline error
    pub fn set(&mut self, schema: &FormSchema, name: &str, value: impl Into<String>) {
        if self.submitting {
            return;
        }
        self.state.set(schema, name, value);
        if self
            .field_error
            .as_ref()
            .is_some_and(|error| error.field == name)
        {
            self.field_error = None;
        }
    }

    /// Validate and mark the form as submitting
    ///
    /// A validation failure is recorded inline and returned; no request
    /// should be made.
    pub fn begin_submit(&mut self, schema: &FormSchema) -> ConsoleResult<Submission> {
        if self.submitting {
            return Err(ConsoleError::internal("A submit is already in progress"));
        }
        self.banner = None;
        if let Err(err) = self.state.validate(schema, &self.mode) {
            self.field_error = err.field().map(|field| FieldError {
                field: field.to_string(),
                message: err.user_message(),
            });
            return Err(err);
        }
        self.field_error = None;
        self.submitting = true;
        Ok(Submission {
            target: self.mode.record_id(),
            payload: self.state.payload(schema, &self.mode),
        })
    }

    /// Record a successful submit; the form stays locked until [`FormDialog::complete`]
    pub fn succeed(&mut self, message: impl Into<String>) {
        self.banner = Some(Banner::Success(message.into()));
    }

    /// Record a failed submit; values are kept for a retry
    pub fn fail(&mut self, message: impl Into<String>) {
        self.banner = Some(Banner::Error(message.into()));
        self.submitting = false;
    }

    /// Close after the success delay
    pub fn complete(&mut self) {
        self.submitting = false;
        self.open = false;
    }

    /// Inline error for a field
    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.field_error
            .as_ref()
            .filter(|error| error.field == name)
            .map(|error| error.message.as_str())
    }
}
