//! Field validation rules
//!
//! One validator driven by the field catalog serves every step.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schemas::{FieldFormat, FieldSpec, ValidationErrors};

/// Message reported for a missing or malformed email address
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

// Unanchored: a match anywhere in the value is accepted.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Check a value against the email shape `something@something.something`
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Message shown when a required field is left blank
pub fn required_message(spec: &FieldSpec) -> String {
    match spec.format {
        FieldFormat::Email => INVALID_EMAIL_MESSAGE.to_string(),
        FieldFormat::None => format!("Please {} your {}", spec.widget.verb(), spec.noun),
    }
}

/// Validate a single value against its spec.
///
/// Presence is checked on the trimmed value; format on the raw value, and only
/// when it is non-empty.
pub fn validate_field(spec: &FieldSpec, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        if spec.required {
            return Some(required_message(spec));
        }
        return None;
    }

    match spec.format {
        FieldFormat::Email if !is_valid_email(value) => Some(INVALID_EMAIL_MESSAGE.to_string()),
        _ => None,
    }
}

/// Validate a set of field values against a step's specs.
///
/// Pure function of `fields`; returns only the failing fields. A field missing
/// from the mapping is treated as blank.
pub fn validate_fields(specs: &[FieldSpec], fields: &BTreeMap<String, String>) -> ValidationErrors {
    specs
        .iter()
        .filter_map(|spec| {
            let value = fields.get(spec.name).map(String::as_str).unwrap_or("");
            validate_field(spec, value).map(|message| (spec.name, message))
        })
        .collect()
}
