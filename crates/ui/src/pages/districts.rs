//! Districts: top of the directory

use dioxus::prelude::*;
use halqa_client::District;
use halqa_schema::{Column, FieldSpec, FormSchema, Rule};

use super::resource::{ResourceConfig, ResourcePage};

/// Districts page configuration
pub fn districts_config() -> ResourceConfig {
    ResourceConfig::of::<District>(
        "Districts",
        vec![
            Column::new("title", "Title"),
            Column::date("createdAt", "Created"),
            Column::date("updatedAt", "Updated"),
        ],
        FormSchema::new(vec![
            FieldSpec::text("title", "Title")
                .required()
                .full_width()
                .placeholder("e.g. Lahore")
                .rule(Rule::MinLength(2)),
        ]),
    )
}

#[component]
pub fn DistrictsPage() -> Element {
    rsx! {
        ResourcePage { config: districts_config() }
    }
}
