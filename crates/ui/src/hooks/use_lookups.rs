//! # Lookup Hook
//!
//! Fetches the record form's lookup collections when the form mounts.
//! Each lookup publishes its own state as soon as it settles, so a slow
//! collection only holds back its own select.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use futures::future::join_all;
use halqa_schema::LoadState;
use serde_json::Value;
use tracing::{debug, warn};

use crate::context::use_console;
use crate::state::report_error;

/// Lookup key → state of that fetch
pub type LookupStates = BTreeMap<String, LoadState<Vec<Value>>>;

/// Every key starts out loading
fn initial_states(lookups: &BTreeMap<String, String>) -> LookupStates {
    lookups
        .keys()
        .map(|key| (key.clone(), LoadState::Loading))
        .collect()
}

/// Fetch every lookup once, concurrently
pub fn use_lookups(lookups: BTreeMap<String, String>) -> Signal<LookupStates> {
    let console = use_console();
    let states = use_signal(|| initial_states(&lookups));

    use_hook(move || {
        let client = console.client.clone();
        spawn(async move {
            let fetches = lookups.into_iter().map(|(key, path)| {
                let client = client.clone();
                let mut states = states;
                async move {
                    let result = client.list_values(&path).await;
                    let state = match result {
                        Ok(records) => {
                            debug!(lookup = %key, count = records.len(), "Lookup loaded");
                            LoadState::Ready(records)
                        }
                        Err(err) if err.is_unauthorized() => {
                            report_error("Loading form options", &err);
                            LoadState::Failed(err.user_message())
                        }
                        Err(err) => {
                            warn!(lookup = %key, error = %err, "Lookup failed; field will offer no options");
                            LoadState::Failed(err.user_message())
                        }
                    };
                    states.write().insert(key, state);
                }
            });
            join_all(fetches).await;
        })
    });

    states
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_states_are_loading() {
        let lookups = BTreeMap::from([
            ("districts".to_string(), "/districts".to_string()),
            ("areas".to_string(), "/areas".to_string()),
        ]);
        let states = initial_states(&lookups);
        assert_eq!(states.len(), 2);
        assert!(states.values().all(LoadState::is_loading));
    }
}
