//! # Halqa Schema
//!
//! Headless models behind the console's generic components.
//!
//! The UI crate renders these; nothing here knows about Dioxus, so table
//! filtering, form cascades, and the delete prompt are tested as plain
//! data.
//!
//! - **value**: dot-path lookup into JSON records
//! - **column / table**: column kinds, search and filters, view states
//! - **field / rules / form**: record form fields, validation, cascades
//! - **filter**: filter selects bound to table query keys
//! - **confirm**: delete confirmation state
//! - **load**: per-request loading state

pub mod column;
pub mod confirm;
pub mod field;
pub mod filter;
pub mod form;
pub mod load;
pub mod rules;
pub mod table;
pub mod value;

pub use column::{Align, BadgeTone, Cell, Column, ColumnKind, EMPTY_CELL, role_tone, user_type_tone};
pub use confirm::{DeletePrompt, DeleteTarget, FALLBACK_NAME};
pub use field::{FieldKind, FieldSpec, OptionSource, ParentFilter, SelectOption};
pub use filter::{FilterControl, set_filter};
pub use form::{
    Banner, CascadeGraph, FieldError, FieldOptions, FormDialog, FormMode, FormSchema, FormState,
    Submission,
};
pub use load::LoadState;
pub use rules::{Pattern, Rule};
pub use table::{
    ActionKind, CardLayout, EMPTY_MESSAGE, NO_MATCHES_MESSAGE, RowAction, TableQuery, TableView,
    card_layout, summary, table_view,
};
pub use value::{filter_value, lookup, record_id, reference_id, text_at, value_text};
