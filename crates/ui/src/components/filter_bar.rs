//! Search box and filter selects above a data table

use std::collections::BTreeMap;

use dioxus::prelude::*;
use halqa_schema::{FilterControl, TableQuery, set_filter};
use serde_json::Value;

use crate::components::inputs::{SearchInput, Select};

/// Filter bar bound to a page's table query
#[component]
pub fn FilterBar(
    query: Signal<TableQuery>,
    controls: Vec<FilterControl>,
    /// Lookup collections the filter options come from
    lookups: BTreeMap<String, Vec<Value>>,
    #[props(default = "Search...".to_string())] placeholder: String,
) -> Element {
    let mut query = query;
    let current = query.read().clone();
    let active = current.is_active();

    rsx! {
        div {
            class: "filter-bar",

            SearchInput {
                value: current.search.clone(),
                placeholder: placeholder,
                on_change: move |text: String| query.write().set_search(text),
            }

            for control in controls.iter() {
                Select {
                    key: "{control.key}",
                    value: current.filter(&control.key).to_string(),
                    options: control.options(&lookups, &current),
                    placeholder: format!("All {}", control.label),
                    on_change: {
                        let controls = controls.clone();
                        let key = control.key.clone();
                        move |value: String| set_filter(&controls, &mut query.write(), &key, &value)
                    },
                }
            }

            if active {
                button {
                    r#type: "button",
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| query.write().clear(),
                    "Clear filters"
                }
            }
        }
    }
}
