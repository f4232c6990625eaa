//! Step state schema - the values and errors of the step currently on screen

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{FieldSpec, WizardStep};

/// Field-keyed validation messages.
///
/// An empty mapping means the step is valid. Validation failures are never
/// raised as errors; they are carried in this mapping and rendered inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Remove a field's message, returning whether one was present
    pub fn clear_field(&mut self, field: &str) -> bool {
        self.0.remove(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Values and errors for one visit to a step.
///
/// Every field in `specs` is present in `fields` from creation, so the keys of
/// `errors` always form a subset of the keys of `fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepState {
    pub step: WizardStep,
    pub fields: BTreeMap<String, String>,
    pub errors: ValidationErrors,
}

impl StepState {
    /// Fresh state for a step with every field in `specs` blank
    pub fn new(step: WizardStep, specs: &[FieldSpec]) -> Self {
        let fields = specs
            .iter()
            .map(|spec| (spec.name.to_string(), String::new()))
            .collect();

        StepState {
            step,
            fields,
            errors: ValidationErrors::new(),
        }
    }

    /// Current value of a field (empty when unknown)
    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Store a value and optimistically drop any error recorded for the field.
    ///
    /// Names outside this step's catalog are ignored; returns whether the value
    /// was stored.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                self.errors.clear_field(name);
                true
            }
            None => false,
        }
    }

    /// Return a copy with a field updated
    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_field(name, value);
        self
    }

    /// Return a copy with errors replaced
    pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
        self.errors = errors;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{FieldFormat, FieldWidget};

    const fn text(name: &'static str) -> FieldSpec {
        FieldSpec {
            name,
            label: name,
            noun: name,
            widget: FieldWidget::Text,
            required: true,
            format: FieldFormat::None,
            placeholder: "",
            options: &[],
        }
    }

    const PERSONAL: &[FieldSpec] = &[text("fullName"), text("email"), text("phone")];
    const ADDRESS: &[FieldSpec] = &[text("city"), text("state")];

    #[test]
    fn test_new_state_has_blank_catalog_fields() {
        let state = StepState::new(WizardStep::Step1, PERSONAL);
        assert_eq!(state.fields.len(), 3);
        assert!(state.has_field("fullName"));
        assert!(state.has_field("email"));
        assert!(state.has_field("phone"));
        assert_eq!(state.value("email"), "");
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_no_specs_means_no_fields() {
        assert!(StepState::new(WizardStep::Step3, &[]).fields.is_empty());
        assert!(StepState::new(WizardStep::Done, &[]).fields.is_empty());
    }

    #[test]
    fn test_set_field_clears_existing_error() {
        let mut state = StepState::new(WizardStep::Step2, ADDRESS)
            .with_errors([("city", "Please enter your city")].into_iter().collect());
        assert!(state.errors.contains("city"));

        assert!(state.set_field("city", "Springfield"));
        assert_eq!(state.value("city"), "Springfield");
        assert!(!state.errors.contains("city"));
    }

    #[test]
    fn test_set_field_leaves_other_errors() {
        let mut state = StepState::new(WizardStep::Step2, ADDRESS).with_errors(
            [
                ("city", "Please enter your city"),
                ("state", "Please select your state"),
            ]
            .into_iter()
            .collect(),
        );

        state.set_field("city", "Springfield");
        assert_eq!(state.errors.get("state"), Some("Please select your state"));
    }

    #[test]
    fn test_set_unknown_field_is_ignored() {
        let mut state = StepState::new(WizardStep::Step1, PERSONAL);
        assert!(!state.set_field("favouriteColour", "green"));
        assert!(!state.has_field("favouriteColour"));
    }

    #[test]
    fn test_validation_errors_serialize_as_plain_map() {
        let errors: ValidationErrors = [("fullName", "Please enter your full name")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"fullName":"Please enter your full name"}"#);
    }
}
