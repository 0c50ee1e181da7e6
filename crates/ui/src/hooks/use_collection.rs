//! # Collection Hook
//!
//! Loads a page's primary collection together with its lookup collections.
//!
//! All paths are fetched concurrently and joined; one failure fails the
//! whole batch with a single error. Every fetch takes a ticket from a
//! generation counter, and a result whose ticket is no longer current is
//! dropped, so a slow response can never overwrite a newer one.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let collection = use_collection("/areas", lookups);
//!
//! // After a mutation
//! collection.refresh();
//! ```

use std::collections::BTreeMap;

use dioxus::prelude::*;
use halqa_client::ApiClient;
use halqa_schema::LoadState;
use serde_json::Value;
use tracing::debug;

use crate::context::use_console;
use crate::state::report_error;

// ============================================================================
// Generation Counter
// ============================================================================

/// Hands out fetch tickets; only the latest ticket may publish
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation {
    current: u64,
}

impl Generation {
    /// Start a new fetch, superseding any in flight
    pub fn next(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}

// ============================================================================
// Page Data
// ============================================================================

/// Primary rows plus lookup collections by key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageData {
    pub rows: Vec<Value>,
    pub lookups: BTreeMap<String, Vec<Value>>,
}

impl PageData {
    /// Split a joined batch: first the primary path, then lookups in key order
    pub fn from_batch(keys: impl IntoIterator<Item = String>, batch: Vec<Vec<Value>>) -> Self {
        let mut batch = batch.into_iter();
        let rows = batch.next().unwrap_or_default();
        let lookups = keys.into_iter().zip(batch).collect();
        Self { rows, lookups }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CollectionSource {
    path: String,
    /// Lookup key → path
    lookups: BTreeMap<String, String>,
}

impl CollectionSource {
    fn paths(&self) -> Vec<String> {
        std::iter::once(self.path.clone())
            .chain(self.lookups.values().cloned())
            .collect()
    }
}

// ============================================================================
// Hook
// ============================================================================

/// Handle returned by [`use_collection`]
#[derive(Clone, Copy, PartialEq)]
pub struct Collection {
    pub state: Signal<LoadState<PageData>>,
    generation: Signal<Generation>,
    source: CopyValue<CollectionSource>,
    client: CopyValue<ApiClient>,
}

impl Collection {
    /// Re-fetch everything
    pub fn refresh(&self) {
        let mut state = self.state;
        let mut generation = self.generation;
        let ticket = generation.write().next();
        let source = self.source.cloned();
        let client = self.client.cloned();

        if !state.peek().is_loading() {
            state.set(LoadState::Loading);
        }

        spawn(async move {
            let result = client.fetch_all(&source.paths()).await;

            if !generation.peek().is_current(ticket) {
                debug!(path = %source.path, ticket, "Dropping superseded fetch");
                return;
            }

            match result {
                Ok(batch) => {
                    let data = PageData::from_batch(source.lookups.keys().cloned(), batch);
                    debug!(path = %source.path, rows = data.rows.len(), "Collection loaded");
                    state.set(LoadState::Ready(data));
                }
                Err(err) => {
                    report_error(&format!("Loading {}", source.path), &err);
                    state.set(LoadState::Failed(err.user_message()));
                }
            }
        });
    }

    /// Primary rows (empty while loading or failed)
    pub fn rows(&self) -> Vec<Value> {
        self.state
            .read()
            .ready()
            .map(|data| data.rows.clone())
            .unwrap_or_default()
    }

    /// Loaded lookup collections
    pub fn lookups(&self) -> BTreeMap<String, Vec<Value>> {
        self.state
            .read()
            .ready()
            .map(|data| data.lookups.clone())
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error().map(str::to_string)
    }
}

/// Fetch `path` and `lookups` on mount
pub fn use_collection(path: &str, lookups: BTreeMap<String, String>) -> Collection {
    let console = use_console();
    let client = use_hook(|| CopyValue::new(console.client.clone()));
    let source = use_hook(|| {
        CopyValue::new(CollectionSource {
            path: path.to_string(),
            lookups,
        })
    });
    let state = use_signal(|| LoadState::Loading);
    let generation = use_signal(Generation::default);

    let collection = Collection {
        state,
        generation,
        source,
        client,
    };

    use_effect(move || collection.refresh());

    collection
}

// ============================================================================
// Tests
// ============================================================================
