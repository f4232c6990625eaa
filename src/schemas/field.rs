//! Field schema - static descriptions of the inputs on each step

use serde::Serialize;

/// Format constraint applied to a non-empty value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldFormat {
    #[default]
    None,
    Email,
}

/// Widget used to collect a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldWidget {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

impl FieldWidget {
    /// Verb used in the "Please ... your <label>" message
    pub fn verb(self) -> &'static str {
        match self {
            FieldWidget::Select => "select",
            _ => "enter",
        }
    }
}

/// Static description of a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Key used in the field and error mappings (e.g. `fullName`)
    pub name: &'static str,

    /// Label shown next to the input
    pub label: &'static str,

    /// Lower-case noun used in validation messages (e.g. "full name")
    pub noun: &'static str,

    pub widget: FieldWidget,

    pub required: bool,

    #[serde(skip_serializing_if = "is_plain")]
    pub format: FieldFormat,

    pub placeholder: &'static str,

    /// Allowed values for select widgets, empty otherwise
    #[serde(skip_serializing_if = "has_no_options")]
    pub options: &'static [&'static str],
}

fn is_plain(format: &FieldFormat) -> bool {
    *format == FieldFormat::None
}

fn has_no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

impl FieldSpec {
    pub fn is_select(&self) -> bool {
        self.widget == FieldWidget::Select
    }
}
