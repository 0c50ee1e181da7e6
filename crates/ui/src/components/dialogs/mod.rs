//! # Dialog Components
//!
//! Modal dialogs shared by every resource page.
//!
//! ## Dialogs
//!
//! - **RecordFormDialog**: create and edit a record from a form schema
//! - **ConfirmDeleteDialog**: confirmation before a delete
//! - **RecordDetailsDialog**: read-only record view
//!
//! ## Usage
//!
//! ```rust,ignore
//! rsx! {
//!     RecordFormDialog { schema, noun: "Area", endpoint: "/areas", dialog, on_success }
//!     ConfirmDeleteDialog { prompt, noun: "Area", on_confirm }
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod confirm_delete;
pub mod record_details;
pub mod record_form;

// ============================================================================
// Re-exports
// ============================================================================

pub use confirm_delete::ConfirmDeleteDialog;
pub use record_details::RecordDetailsDialog;
pub use record_form::{RecordFormDialog, RecordFormDialogProps};
