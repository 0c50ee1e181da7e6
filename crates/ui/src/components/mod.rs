//! # UI Components
//!
//! Reusable Dioxus components for Halqa Admin.
//!
//! - **DataTable**: generic table / card list over JSON records
//! - **FilterBar**: search box plus filter selects bound to a table query
//! - **Inputs**: text, select, and search inputs
//! - **Dialogs**: record form, delete confirmation, record details
//!
//! ## Component Hierarchy
//!
//! ```text
//! ResourcePage
//! ├── FilterBar
//! │   ├── SearchInput
//! │   └── Select (per filter)
//! ├── DataTable
//! │   ├── TableLayout (wide)
//! │   └── CardList (narrow)
//! ├── RecordFormDialog
//! │   └── TextInput / Select (per field)
//! └── ConfirmDeleteDialog
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod data_table;
pub mod dialogs;
pub mod filter_bar;
pub mod inputs;

// ============================================================================
// Re-exports
// ============================================================================

pub use data_table::{CellView, DataTable, DataTableProps};
pub use dialogs::{ConfirmDeleteDialog, RecordDetailsDialog, RecordFormDialog};
pub use filter_bar::FilterBar;
pub use inputs::{SearchInput, Select, TextInput};
