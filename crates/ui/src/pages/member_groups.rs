//! Members groups: under an area, within a district

use dioxus::prelude::*;
use halqa_client::{Area, District, MemberGroup};
use halqa_core::Resource;
use halqa_schema::{Column, FieldSpec, FilterControl, FormSchema, OptionSource, ParentFilter};

use super::resource::{ResourceConfig, ResourcePage};

/// Members groups page configuration
pub fn member_groups_config() -> ResourceConfig {
    ResourceConfig::of::<MemberGroup>(
        "Member Groups",
        vec![
            Column::new("title", "Title"),
            Column::new("district.title", "District"),
            Column::new("area.title", "Area"),
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
        ])
        .lookup("districts", District::PATH)
        .lookup("areas", Area::PATH),
    )
    .filter(FilterControl::lookup("district", "Districts", "districts"))
    .filter(FilterControl::lookup("area", "Areas", "areas").depends_on("district", "district"))
}

#[component]
pub fn MemberGroupsPage() -> Element {
    rsx! {
        ResourcePage { config: member_groups_config() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_follows_district() {
        let config = member_groups_config();
        assert_eq!(config.endpoint, "/members");
        assert_eq!(config.form.cascade.parent_of("area"), Some("district"));
        assert_eq!(config.filters[1].parent_key(), Some("district"));
    }
}
