//! Services shared by every component
//!
//! Provided once at launch through the Dioxus root context.

use dioxus::prelude::*;
use halqa_client::{ApiClient, ConsoleConfig};

/// API client plus configuration
#[derive(Debug, Clone)]
pub struct ConsoleContext {
    pub client: ApiClient,
    pub config: ConsoleConfig,
}

/// Access the console context from a component
pub fn use_console() -> ConsoleContext {
    use_context::<ConsoleContext>()
}
