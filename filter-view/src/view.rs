//! Plain view data handed to the rendering layer.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

impl Link {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// A named form value: a text input, or a hidden field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Input {
    pub name: String,
    pub value: String,
}

impl Input {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checkbox {
    pub label: String,
    pub value: String,
    pub checked: bool,
}

/// Checkboxes sharing one field name; `id_prefix` seeds the element ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxGroup {
    pub id_prefix: String,
    pub name: String,
    pub checkboxes: Vec<Checkbox>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Description {
    Text { text: String },
    Link { text: String, href: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionItem {
    pub term: String,
    pub description: Description,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescriptionList {
    pub items: Vec<DescriptionItem>,
}
