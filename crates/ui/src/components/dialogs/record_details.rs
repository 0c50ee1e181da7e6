//! Read-only view of one record, laid out like a table card

use dioxus::prelude::*;
use halqa_schema::{CardLayout, Column, card_layout};
use serde_json::Value;

use crate::components::data_table::CellView;

/// Details modal; closes on backdrop or button
#[component]
pub fn RecordDetailsDialog(
    record: Signal<Option<Value>>,
    columns: Vec<Column>,
    noun: String,
) -> Element {
    let Some(current) = record.read().clone() else {
        return rsx! {};
    };
    let CardLayout { heading, subheading, details } = card_layout(&columns, &current);
    let subheading_label = columns.get(1).map(|column| column.label.clone()).unwrap_or_default();
    let mut record = record;

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal-backdrop",
                onclick: move |_| record.set(None),
            }
            div {
                class: "modal max-w-lg",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "{noun} Details" }
                    button {
                        r#type: "button",
                        class: "btn btn-ghost btn-sm",
                        title: "Close",
                        onclick: move |_| record.set(None),
                        "✕"
                    }
                }

                div {
                    class: "modal-body",
                    div {
                        class: "details-heading",
                        CellView { cell: heading }
                    }
                    dl {
                        class: "record-card-details",
                        if let Some(subheading) = subheading {
                            div {
                                dt { "{subheading_label}" }
                                dd { CellView { cell: subheading } }
                            }
                        }
                        for (label, cell) in details {
                            div {
                                key: "{label}",
                                dt { "{label}" }
                                dd { CellView { cell: cell } }
                            }
                        }
                    }
                }
            }
        }
    }
}
