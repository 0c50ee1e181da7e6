//! Apps: tenant records users belong to

use dioxus::prelude::*;
use halqa_client::App;
use halqa_schema::{Column, FieldSpec, FormSchema};

use super::resource::{ResourceConfig, ResourcePage};

/// Apps page configuration
pub fn apps_config() -> ResourceConfig {
    ResourceConfig::of::<App>(
        "Apps",
        vec![
            Column::avatar("title", "Title"),
            Column::date("createdAt", "Created"),
            Column::date("updatedAt", "Updated"),
        ],
        FormSchema::new(vec![FieldSpec::text("title", "Title").required().full_width()]),
    )
}

#[component]
pub fn AppsPage() -> Element {
    rsx! {
        ResourcePage { config: apps_config() }
    }
}
