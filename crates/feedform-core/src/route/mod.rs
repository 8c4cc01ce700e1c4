//! Route descriptors: the declarative template of a remote feed source.

mod parameter;
mod request;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use parameter::{ParameterOption, ParameterSpec, RouteParameter};
pub use request::RouteRequest;

/// Errors decoding a route payload.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("route payload is empty")]
    Empty,
    #[error("malformed route payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A feed source template as published by the route catalog.
///
/// Never mutated after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, RouteParameter>,
    #[serde(default)]
    pub maintainers: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl RouteDescriptor {
    pub fn from_json(payload: &str) -> Result<Self, RouteError> {
        if payload.trim().is_empty() {
            return Err(RouteError::Empty);
        }
        Ok(serde_json::from_str(payload)?)
    }

    pub fn parameter(&self, name: &str) -> Option<&RouteParameter> {
        self.parameters.get(name)
    }

    /// Form heading: `"<source name> - <route name>"`.
    pub fn title(&self, source_name: &str) -> String {
        format!("{} - {}", source_name, self.name)
    }

    /// Unfilled identifier shown under the heading, e.g. `rsshub://github/issue/:user`.
    pub fn subtitle(&self, scheme: &str, route_prefix: &str) -> String {
        format!("{}://{}{}", scheme, route_prefix, self.path)
    }

    /// Profile links crediting each maintainer.
    pub fn maintainer_links(&self) -> Vec<String> {
        self.maintainers
            .iter()
            .map(|m| format!("https://github.com/{m}"))
            .collect()
    }

    /// Description markdown with `"::: "` container openers tightened to `":::"`.
    pub fn display_description(&self) -> Option<String> {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| d.replace("::: ", ":::"))
    }
}
