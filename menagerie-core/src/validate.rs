//! Draft validation, flattened to field-keyed messages the form can render
//! next to the offending input.

use std::collections::BTreeMap;

use validator::Validate;

use crate::record::AnimalDraft;

/// Per-field validation messages, keyed by field path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn push_field(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(|v| v.as_slice())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

fn friendly_message(code: &str) -> Option<&'static str> {
    match code {
        "required" => Some("is required"),
        "length" => Some("has invalid length"),
        "url" => Some("must be a valid URL"),
        _ => None,
    }
}

fn push_validation_errors(out: &mut FieldErrors, errs: &validator::ValidationErrors) {
    for (field, kind) in errs.errors() {
        if let validator::ValidationErrorsKind::Field(field_errors) = kind {
            for e in field_errors {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .or_else(|| friendly_message(&e.code).map(|m| m.to_string()))
                    .unwrap_or_else(|| e.code.to_string());
                out.push_field(field, msg);
            }
        }
    }
}

/// Validate a draft before any remote call is issued.
///
/// Returns the normalized draft on success so callers submit exactly what
/// was validated.
pub fn validate_draft(draft: &AnimalDraft) -> Result<AnimalDraft, FieldErrors> {
    let normalized = draft.clone().normalized();
    match normalized.validate() {
        Ok(()) => Ok(normalized),
        Err(errs) => {
            let mut out = FieldErrors::default();
            push_validation_errors(&mut out, &errs);
            Err(out)
        }
    }
}
