//! Halqas: the smallest unit, under an area and a members group

use dioxus::prelude::*;
use halqa_client::{Area, District, Halqa, MemberGroup};
use halqa_core::Resource;
use halqa_schema::{Column, FieldSpec, FilterControl, FormSchema, OptionSource, ParentFilter};

use super::resource::{ResourceConfig, ResourcePage};

/// Halqas page configuration
pub fn halqas_config() -> ResourceConfig {
    ResourceConfig::of::<Halqa>(
        "Halqas",
        vec![
            Column::new("title", "Title"),
            Column::new("district.title", "District"),
            Column::new("area.title", "Area"),
            Column::new("membersGroup.title", "Members Group"),
            Column::date("createdAt", "Created"),
        ],
        FormSchema::new(vec![
            FieldSpec::text("title", "Title").required().full_width(),
            FieldSpec::select("district", "District", OptionSource::lookup("districts")).required(),
            FieldSpec::select(
                "area",
                "Area",
                OptionSource::lookup("areas").parent(ParentFilter::new("district")),
            )
            .required(),
            FieldSpec::select(
                "membersGroup",
                "Members Group",
                OptionSource::lookup("members").parent(ParentFilter::new("area")),
            )
            .required(),
        ])
        .lookup("districts", District::PATH)
        .lookup("areas", Area::PATH)
        .lookup("members", MemberGroup::PATH),
    )
    .filter(FilterControl::lookup("district", "Districts", "districts"))
    .filter(FilterControl::lookup("area", "Areas", "areas").depends_on("district", "district"))
    .filter(
        FilterControl::lookup("membersGroup", "Member Groups", "members").depends_on("area", "area"),
    )
}

#[component]
pub fn HalqasPage() -> Element {
    rsx! {
        ResourcePage { config: halqas_config() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halqa_schema::{FieldOptions, FormState, LoadState};
    use serde_json::{Value, json};
    use std::collections::BTreeMap;

    #[test]
    fn test_district_narrows_areas_and_blocks_groups() {
        let config = halqas_config();
        let schema = &config.form;
        let lookups: BTreeMap<String, LoadState<Vec<Value>>> = BTreeMap::from([
            ("districts".to_string(), LoadState::Ready(vec![json!({"_id": "d1", "title": "Lahore"})])),
            (
                "areas".to_string(),
                LoadState::Ready(vec![
                    json!({"_id": "a1", "title": "North", "district": {"_id": "d1", "title": "Lahore"}}),
                    json!({"_id": "a2", "title": "South", "district": "d2"}),
                ]),
            ),
            (
                "members".to_string(),
                LoadState::Ready(vec![json!({"_id": "m1", "title": "Group 1", "area": "a1"})]),
            ),
        ]);

        let mut state = FormState::empty(schema);
        state.set(schema, "district", "d1");

        let area = schema.field("area").map(|f| schema.options_for(f, &state, &lookups));
        let values: Vec<String> = area
            .as_ref()
            .map(|options| options.options().iter().map(|o| o.value.clone()).collect())
            .unwrap_or_default();
        assert_eq!(values, vec!["a1"]);

        let group = schema.field("membersGroup").map(|f| schema.options_for(f, &state, &lookups));
        assert!(matches!(group, Some(FieldOptions::AwaitingParent { .. })));
    }

    #[test]
    fn test_three_lookups_load_with_halqas() {
        let config = halqas_config();
        assert_eq!(config.lookups().len(), 3);
        assert_eq!(config.filters.len(), 3);
    }
}
