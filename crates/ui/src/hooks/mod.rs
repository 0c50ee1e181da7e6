//! # UI Hooks
//!
//! Custom Dioxus hooks for Halqa Admin.
//!
//! - Collection loading with lookups, refresh, and stale-result dropping
//! - Lookup loading for the record form

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_collection;
pub mod use_lookups;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_collection::{Collection, Generation, PageData, use_collection};
pub use use_lookups::use_lookups;
