//! Users: admin-managed accounts

use dioxus::prelude::*;
use halqa_client::{App, User};
use halqa_core::{Resource, UserRole, UserType};
use halqa_schema::{
    Column, FieldSpec, FilterControl, FormSchema, OptionSource, RowAction, Rule, SelectOption,
    role_tone, user_type_tone,
};

use super::resource::{ResourceConfig, ResourcePage};

fn user_type_options() -> OptionSource {
    OptionSource::Static(
        UserType::all()
            .iter()
            .map(|t| SelectOption::new(t.as_str(), t.display_name()))
            .collect(),
    )
}

fn user_role_options() -> OptionSource {
    OptionSource::Static(
        UserRole::all()
            .iter()
            .map(|r| SelectOption::new(r.as_str(), r.display_name()))
            .collect(),
    )
}

/// Users page configuration
pub fn users_config() -> ResourceConfig {
    ResourceConfig::of::<User>(
        "Users",
        vec![
            Column::avatar("username", "Username"),
            Column::new("mobile", "Mobile"),
            Column::badge("userType", "Type", user_type_tone),
            Column::badge("userRole", "Role", role_tone),
            Column::new("app.title", "App"),
            Column::date("createdAt", "Created"),
        ],
        FormSchema::new(vec![
            FieldSpec::text("username", "Username")
                .required()
                .rule(Rule::MinLength(3))
                .rule(Rule::pattern(
                    r"^[A-Za-z0-9_.]+$",
                    "Username may only contain letters, digits, dots and underscores",
                )),
            FieldSpec::password("password", "Password")
                .required()
                .create_only()
                .rule(Rule::MinLength(6)),
            FieldSpec::tel("mobile", "Mobile").required().placeholder("+923001234567"),
            FieldSpec::select("userType", "User Type", user_type_options()).required(),
            FieldSpec::select("userRole", "User Role", user_role_options()).required(),
            FieldSpec::select("app", "App", OptionSource::lookup("apps")).required(),
        ])
        .lookup("apps", App::PATH),
    )
    .name_key("username")
    .actions(vec![RowAction::view(), RowAction::edit(), RowAction::delete()])
    .filter(FilterControl::new("userType", "Types", user_type_options()))
    .filter(FilterControl::new("userRole", "Roles", user_role_options()))
}

#[component]
pub fn UsersPage() -> Element {
    rsx! {
        ResourcePage { config: users_config() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halqa_schema::{FormMode, FormState, TableQuery};
    use serde_json::json;

    #[test]
    fn test_password_only_on_create() {
        let config = users_config();
        let record = json!({
            "_id": "u1",
            "username": "ali",
            "mobile": "03001234567",
            "userType": "district",
            "userRole": "user",
            "app": {"_id": "app1", "title": "Main"}
        });
        let mode = FormMode::Edit(record.clone());
        let names: Vec<&str> = config.form.visible_fields(&mode).map(|f| f.name.as_str()).collect();
        assert!(!names.contains(&"password"));

        let state = FormState::from_record(&config.form, &record);
        assert!(state.validate(&config.form, &mode).is_ok());
        assert_eq!(state.get("app"), "app1");
    }

    #[test]
    fn test_filters_by_type_and_role() {
        let config = users_config();
        let rows = vec![
            json!({"_id": "u1", "username": "ali", "userType": "district", "userRole": "admin"}),
            json!({"_id": "u2", "username": "sara", "userType": "halqa", "userRole": "user"}),
        ];
        let query = TableQuery::new().with_filter("userType", "halqa");
        let shown = query.apply(&config.columns, &rows);
        assert_eq!(shown.len(), 1);
        assert_eq!(config.record_name(shown[0]), "sara");
    }

    #[test]
    fn test_static_options_use_wire_values() {
        let options = user_type_options().options_from(&[], "");
        assert_eq!(options.len(), UserType::all().len());
        assert!(options.iter().any(|o| o.value == "membersGroup"));
    }
}
