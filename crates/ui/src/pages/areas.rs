//! Areas: one level under districts

use dioxus::prelude::*;
use halqa_client::{Area, District};
use halqa_core::Resource;
use halqa_schema::{Column, FieldSpec, FilterControl, FormSchema, OptionSource, Rule};

use super::resource::{ResourceConfig, ResourcePage};

/// Areas page configuration
pub fn areas_config() -> ResourceConfig {
    ResourceConfig::of::<Area>(
        "Areas",
        vec![
            Column::new("title", "Title"),
            Column::new("district.title", "District"),
            Column::new("code", "Code"),
            Column::date("createdAt", "Created"),
        ],
        FormSchema::new(vec![
            FieldSpec::text("title", "Title").required().placeholder("e.g. Zone A"),
            FieldSpec::select("district", "District", OptionSource::lookup("districts")).required(),
            FieldSpec::text("code", "Code")
                .placeholder("Optional short code")
                .rule(Rule::MaxLength(10)),
        ])
        .lookup("districts", District::PATH),
    )
    .filter(FilterControl::lookup("district", "Districts", "districts"))
}

#[component]
pub fn AreasPage() -> Element {
    rsx! {
        ResourcePage { config: areas_config() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halqa_schema::{FormMode, FormState};
    use serde_json::json;

    #[test]
    fn test_create_area_payload() {
        let config = areas_config();
        let mut state = FormState::empty(&config.form);
        state.set(&config.form, "district", "d1");
        state.set(&config.form, "title", "Zone A");

        assert!(state.validate(&config.form, &FormMode::Create).is_ok());
        assert_eq!(
            state.payload(&config.form, &FormMode::Create),
            json!({"district": "d1", "title": "Zone A"})
        );
    }

    #[test]
    fn test_page_loads_districts_with_areas() {
        let config = areas_config();
        assert_eq!(config.endpoint, "/areas");
        assert_eq!(config.lookups().get("districts").map(String::as_str), Some("/districts"));
    }
}
