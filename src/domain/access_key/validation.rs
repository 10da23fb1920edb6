//! Field-level validation errors for access key forms

use std::collections::BTreeMap;

use thiserror::Error;

pub const KEY_CODE: &str = "keyCode";
pub const REGION_UUID: &str = "regionUUID";
pub const KEY_TYPE: &str = "keyType";
pub const KEY_CONTENT: &str = "keyContent";
pub const SSH_USER: &str = "sshUser";
pub const SSH_PORT: &str = "sshPort";
pub const PASSWORDLESS_SUDO_ACCESS: &str = "passwordlessSudoAccess";
pub const AIR_GAP_INSTALL: &str = "airGapInstall";

/// Category of a field validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// A required field was absent, null or empty
    MissingRequiredField,
    /// A value could not be coerced to the field's type
    InvalidFieldType,
    /// A value is not a member of the field's enumeration
    InvalidEnumerationValue,
}

impl FieldErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "missing_required_field",
            Self::InvalidFieldType => "invalid_field_type",
            Self::InvalidEnumerationValue => "invalid_enumeration_value",
        }
    }
}

/// A single failure attached to one form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            kind: FieldErrorKind::MissingRequiredField,
            message: "This field is required".to_string(),
        }
    }

    pub fn invalid_type(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            kind: FieldErrorKind::InvalidFieldType,
            message: message.into(),
        }
    }

    pub fn invalid_enum(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            kind: FieldErrorKind::InvalidEnumerationValue,
            message: message.into(),
        }
    }
}

/// All field failures collected while binding a single form
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("Invalid access key form: {}", summarize(.errors))]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Errors for a single field
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn has(&self, field: &str, kind: FieldErrorKind) -> bool {
        self.for_field(field).any(|e| e.kind == kind)
    }

    /// Messages grouped by wire field name
    pub fn by_field(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for error in &self.errors {
            grouped
                .entry(error.field.to_string())
                .or_default()
                .push(error.message.clone());
        }

        grouped
    }

    /// `Ok(value)` when nothing was collected
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<FieldError> for FormErrors {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}
