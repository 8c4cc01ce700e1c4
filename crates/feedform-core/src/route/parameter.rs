//! Parameter metadata attached to a route.

use serde::{Deserialize, Serialize};

/// One entry of a select-style parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterOption {
    pub label: String,
    pub value: String,
}

/// Structured parameter declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<ParameterOption>>,
}

/// A parameter is declared either as a bare description string or as a
/// structured object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteParameter {
    Description(String),
    Spec(ParameterSpec),
}

impl RouteParameter {
    /// Structured view: a bare description has no default and no options.
    pub fn normalize(&self) -> ParameterSpec {
        match self {
            RouteParameter::Description(description) => ParameterSpec {
                description: description.clone(),
                default: None,
                options: None,
            },
            RouteParameter::Spec(spec) => spec.clone(),
        }
    }

    pub fn default_value(&self) -> Option<&str> {
        match self {
            RouteParameter::Description(_) => None,
            RouteParameter::Spec(spec) => spec.default.as_deref(),
        }
    }
}
