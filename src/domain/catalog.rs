//! Field catalog for each wizard step

use crate::schemas::{FieldFormat, FieldSpec, FieldWidget, StepState, WizardStep};

/// States offered by the step 2 selector
pub const US_STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado",
    "Connecticut", "Delaware", "Florida", "Georgia", "Hawaii", "Idaho",
    "Illinois", "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana",
    "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota",
    "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
    "New Hampshire", "New Jersey", "New Mexico", "New York",
    "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon",
    "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
    "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington",
    "West Virginia", "Wisconsin", "Wyoming",
];

/// Personal information
pub const STEP1_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "fullName",
        label: "Full Name",
        noun: "full name",
        widget: FieldWidget::Text,
        required: true,
        format: FieldFormat::None,
        placeholder: "Enter your full name",
        options: &[],
    },
    FieldSpec {
        name: "email",
        label: "Email Address",
        noun: "email address",
        widget: FieldWidget::Email,
        required: true,
        format: FieldFormat::Email,
        placeholder: "Enter your email address",
        options: &[],
    },
    FieldSpec {
        name: "phone",
        label: "Phone Number",
        noun: "phone number",
        widget: FieldWidget::Tel,
        required: true,
        format: FieldFormat::None,
        placeholder: "Enter your phone number",
        options: &[],
    },
];

/// Address information
pub const STEP2_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "streetAddress",
        label: "Street Address",
        noun: "street address",
        widget: FieldWidget::Text,
        required: true,
        format: FieldFormat::None,
        placeholder: "Enter your street address",
        options: &[],
    },
    FieldSpec {
        name: "city",
        label: "City",
        noun: "city",
        widget: FieldWidget::Text,
        required: true,
        format: FieldFormat::None,
        placeholder: "Enter your city",
        options: &[],
    },
    FieldSpec {
        name: "state",
        label: "State/Province",
        noun: "state",
        widget: FieldWidget::Select,
        required: true,
        format: FieldFormat::None,
        placeholder: "Select your state",
        options: US_STATES,
    },
    FieldSpec {
        name: "postalCode",
        label: "Postal Code",
        noun: "postal code",
        widget: FieldWidget::Text,
        required: true,
        format: FieldFormat::None,
        placeholder: "Enter your postal code",
        options: &[],
    },
    FieldSpec {
        name: "bio",
        label: "Bio/Profile Information",
        noun: "bio",
        widget: FieldWidget::TextArea,
        required: false,
        format: FieldFormat::None,
        placeholder: "Tell us a bit about yourself...",
        options: &[],
    },
];

/// Fields collected on a step (empty for review and done)
pub fn fields_for_step(step: WizardStep) -> &'static [FieldSpec] {
    match step {
        WizardStep::Step1 => STEP1_FIELDS,
        WizardStep::Step2 => STEP2_FIELDS,
        WizardStep::Step3 | WizardStep::Done => &[],
    }
}

/// Fresh state for a step with every catalog field blank
pub fn blank_state(step: WizardStep) -> StepState {
    StepState::new(step, fields_for_step(step))
}

/// Look up a field on a step by name
pub fn find_field(step: WizardStep, name: &str) -> Option<&'static FieldSpec> {
    fields_for_step(step).iter().find(|spec| spec.name == name)
}
