//! Per-field validation rules derived from template keys.
//!
//! Required keys need a non-empty string; optional keys accept an empty,
//! null or missing value. Validation is cheap and meant to run after every
//! edit.

use std::fmt;

use crate::form::FormValues;
use crate::template::ParsedParameterKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Non-empty string.
    Required,
    /// Nullable string.
    Optional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All failing fields, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSchema {
    rules: Vec<(String, FieldRule)>,
}

impl ValidationSchema {
    pub fn from_keys(keys: &[ParsedParameterKey]) -> Self {
        let rules = keys
            .iter()
            .map(|k| {
                let rule = if k.optional {
                    FieldRule::Optional
                } else {
                    FieldRule::Required
                };
                (k.name.clone(), rule)
            })
            .collect();
        Self { rules }
    }

    pub fn rule(&self, field: &str) -> Option<FieldRule> {
        self.rules
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rule)| *rule)
    }

    pub fn rules(&self) -> &[(String, FieldRule)] {
        &self.rules
    }

    /// Error for a single field, or `None` when it passes (or is unknown).
    pub fn field_error(&self, field: &str, values: &FormValues) -> Option<FieldError> {
        match self.rule(field)? {
            FieldRule::Optional => None,
            FieldRule::Required if values.filled(field).is_some() => None,
            FieldRule::Required => Some(FieldError {
                field: field.to_string(),
                message: format!("{field} is required"),
            }),
        }
    }

    /// Checks every field; values for names outside the schema are ignored.
    pub fn validate(&self, values: &FormValues) -> Result<(), ValidationErrors> {
        let errors: Vec<FieldError> = self
            .rules
            .iter()
            .filter_map(|(name, _)| self.field_error(name, values))
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    pub fn is_valid(&self, values: &FormValues) -> bool {
        self.validate(values).is_ok()
    }
}
