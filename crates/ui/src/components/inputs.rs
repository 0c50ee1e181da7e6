//! # Input Components
//!
//! Form inputs shared by the record form, the login page, and the filter
//! bar.
//!
//! - **TextInput**: single-line text, tel, or password input
//! - **Select**: dropdown over [`SelectOption`]s
//! - **SearchInput**: search box with a clear button

use dioxus::prelude::*;
use halqa_schema::SelectOption;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, tel, password)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Span both form grid columns
    #[props(default = false)]
    pub full_width: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<()>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled);
    let group_class = if props.full_width {
        "form-group form-group-full"
    } else {
        "form-group"
    };

    rsx! {
        div {
            class: "{group_class}",

            if let Some(label) = &props.label {
                label {
                    class: "form-label",
                    "{label}"
                    if props.required {
                        span { class: "required-mark", "*" }
                    }
                }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(());
                    }
                },
            }

            if let Some(error) = &props.error {
                p { class: "form-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder (shown when no selection)
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default = false)]
    pub full_width: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = build_input_class(props.error.is_some(), props.disabled);
    let group_class = if props.full_width {
        "form-group form-group-full"
    } else {
        "form-group"
    };
    let placeholder = props.placeholder.clone().unwrap_or_else(|| "Select...".to_string());

    rsx! {
        div {
            class: "{group_class}",

            if let Some(label) = &props.label {
                label {
                    class: "form-label",
                    "{label}"
                    if props.required {
                        span { class: "required-mark", "*" }
                    }
                }
            }

            select {
                class: "{select_class} form-select",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                option {
                    value: "",
                    selected: props.value.is_empty(),
                    "{placeholder}"
                }

                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == props.value,
                        "{opt.label}"
                    }
                }
            }

            if let Some(error) = &props.error {
                p { class: "form-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// Search Input Component
// ============================================================================

/// Search box with a clear button
#[component]
pub fn SearchInput(
    value: String,
    #[props(default = "Search...".to_string())] placeholder: String,
    on_change: EventHandler<String>,
) -> Element {
    let has_value = !value.is_empty();

    rsx! {
        div {
            class: "search-input",
            span { class: "search-icon", "🔍" }
            input {
                class: "form-input",
                r#type: "search",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |e| on_change.call(e.value()),
            }
            if has_value {
                button {
                    r#type: "button",
                    class: "search-clear",
                    title: "Clear search",
                    onclick: move |_| on_change.call(String::new()),
                    "✕"
                }
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Build the input CSS class list
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec!["form-input"];
    if has_error {
        classes.push("form-input-error");
    }
    if disabled {
        classes.push("form-input-disabled");
    }
    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_class() {
        assert_eq!(build_input_class(false, false), "form-input");
        assert_eq!(
            build_input_class(true, true),
            "form-input form-input-error form-input-disabled"
        );
    }
}
