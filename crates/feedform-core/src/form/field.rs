//! Presentation-agnostic description of one form field.

use crate::route::{ParameterOption, RouteParameter};
use crate::template::ParsedParameterKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input.
    Text,
    /// Choice among declared options.
    Select(Vec<ParameterOption>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: String,
    pub required: bool,
    pub description: Option<String>,
    /// Hint taken from the route's example path.
    pub placeholder: Option<String>,
    pub default: Option<String>,
    pub kind: FieldKind,
}

impl FormField {
    pub(super) fn new(
        key: &ParsedParameterKey,
        parameter: Option<&RouteParameter>,
        placeholder: Option<&str>,
    ) -> Self {
        let spec = parameter.map(RouteParameter::normalize);
        let kind = match spec.as_ref().and_then(|s| s.options.clone()) {
            Some(options) => FieldKind::Select(options),
            None => FieldKind::Text,
        };
        Self {
            key: key.name.clone(),
            required: !key.optional,
            description: spec
                .as_ref()
                .map(|s| s.description.clone())
                .filter(|d| !d.is_empty()),
            placeholder: placeholder.map(str::to_string),
            default: spec.and_then(|s| s.default),
            kind,
        }
    }

    /// Whether `value` is acceptable for a select field. Text fields accept
    /// anything.
    pub fn accepts(&self, value: &str) -> bool {
        match &self.kind {
            FieldKind::Text => true,
            FieldKind::Select(options) => options.iter().any(|o| o.value == value),
        }
    }
}
