//! Form construction and submission.
//!
//! [`FormModel`] holds everything derived from a route descriptor (keys,
//! defaults, validation schema, example placeholders); it is built once per
//! descriptor and shared. [`FormSession`] owns the values being edited and
//! the submit state.

mod field;
mod session;
mod values;

use std::collections::BTreeMap;

use crate::assemble::{self, AssembleError, AssembledUrl};
use crate::config::FeedformConfig;
use crate::defaults::resolve_defaults;
use crate::route::RouteDescriptor;
use crate::schema::ValidationSchema;
use crate::template::{match_path, ParsedParameterKey, PathTemplate, TemplateError};

pub use field::{FieldKind, FormField};
pub use session::{FormSession, SubmitError, SubmitState};
pub use values::FormValues;

#[derive(Debug, Clone)]
pub struct FormModel {
    route: RouteDescriptor,
    route_prefix: String,
    scheme: String,
    template: PathTemplate,
    keys: Vec<ParsedParameterKey>,
    defaults: FormValues,
    schema: ValidationSchema,
    placeholders: BTreeMap<String, String>,
}

impl FormModel {
    pub fn build(
        route: RouteDescriptor,
        route_prefix: &str,
        cfg: &FeedformConfig,
    ) -> Result<Self, TemplateError> {
        let template = PathTemplate::parse(&route.path)?;
        let keys = template.keys(cfg.excluded_names.as_slice());
        let defaults = resolve_defaults(&route.parameters);
        let schema = ValidationSchema::from_keys(&keys);
        let placeholders = example_placeholders(&route, &template, route_prefix);

        tracing::debug!(
            path = %route.path,
            keys = ?keys.iter().map(|k| k.name.as_str()).collect::<Vec<_>>(),
            defaults = defaults.len(),
            "built form model"
        );

        Ok(Self {
            route,
            route_prefix: route_prefix.to_string(),
            scheme: cfg.scheme.clone(),
            template,
            keys,
            defaults,
            schema,
            placeholders,
        })
    }

    pub fn route(&self) -> &RouteDescriptor {
        &self.route
    }

    pub fn route_prefix(&self) -> &str {
        &self.route_prefix
    }

    pub fn keys(&self) -> &[ParsedParameterKey] {
        &self.keys
    }

    pub fn defaults(&self) -> &FormValues {
        &self.defaults
    }

    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    /// Example value for a field, taken from the route's example path.
    pub fn placeholder(&self, name: &str) -> Option<&str> {
        self.placeholders.get(name).map(String::as_str)
    }

    /// One field per key, in template order.
    pub fn fields(&self) -> Vec<FormField> {
        self.keys
            .iter()
            .map(|key| {
                FormField::new(
                    key,
                    self.route.parameter(&key.name),
                    self.placeholder(&key.name),
                )
            })
            .collect()
    }

    /// Unfilled identifier for headings.
    pub fn subtitle(&self) -> String {
        self.route.subtitle(&self.scheme, &self.route_prefix)
    }

    pub fn assemble(&self, values: &FormValues) -> Result<AssembledUrl, AssembleError> {
        assemble::assemble(&self.template, &self.scheme, &self.route_prefix, values)
    }
}

/// Matches the example (with its leading `/<route_prefix>` removed) against
/// the template. An absent or non-matching example yields no placeholders.
fn example_placeholders(
    route: &RouteDescriptor,
    template: &PathTemplate,
    route_prefix: &str,
) -> BTreeMap<String, String> {
    let Some(example) = route.example.as_deref() else {
        return BTreeMap::new();
    };
    let marker = format!("/{route_prefix}");
    let path = example
        .strip_prefix(&marker)
        .map(str::to_string)
        .unwrap_or_else(|| example.replacen(&marker, "", 1));
    match_path(template, &path).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUE_ROUTE: &str = r#"{
        "path": "/issue/:user/:repo/:state?/:labels?/:routeParams?",
        "name": "Repo Issues",
        "example": "/github/issue/DIYgod/RSSHub/open",
        "parameters": {
            "user": "GitHub username",
            "repo": "GitHub repo name",
            "state": {
                "description": "the state of the issues",
                "default": "open",
                "options": [
                    { "label": "Open", "value": "open" },
                    { "label": "Closed", "value": "closed" }
                ]
            }
        }
    }"#;

    fn model() -> FormModel {
        let route = RouteDescriptor::from_json(ISSUE_ROUTE).unwrap();
        FormModel::build(route, "github", &FeedformConfig::default()).unwrap()
    }

    #[test]
    fn keys_defaults_and_placeholders() {
        let m = model();
        let names: Vec<&str> = m.keys().iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["user", "repo", "state", "labels"]);
        assert_eq!(m.defaults().get("state"), Some("open"));
        assert_eq!(m.placeholder("user"), Some("DIYgod"));
        assert_eq!(m.placeholder("state"), Some("open"));
        assert_eq!(m.placeholder("labels"), None);
        assert_eq!(
            m.subtitle(),
            "rsshub://github/issue/:user/:repo/:state?/:labels?/:routeParams?"
        );
    }

    #[test]
    fn fields_describe_kind() {
        let fields = model().fields();
        assert_eq!(fields.len(), 4);
        assert!(fields[0].required);
        assert_eq!(fields[0].description.as_deref(), Some("GitHub username"));
        assert!(matches!(fields[2].kind, FieldKind::Select(ref o) if o.len() == 2));
        assert_eq!(fields[2].default.as_deref(), Some("open"));
        // No metadata: plain text field without description.
        assert!(!fields[3].required);
        assert_eq!(fields[3].kind, FieldKind::Text);
        assert!(fields[3].description.is_none());
    }

    #[test]
    fn example_without_prefix_marker() {
        let route = RouteDescriptor::from_json(
            r#"{"path":"/:id","name":"x","example":"/42"}"#,
        )
        .unwrap();
        let m = FormModel::build(route, "example", &FeedformConfig::default()).unwrap();
        assert_eq!(m.placeholder("id"), Some("42"));
    }

    #[test]
    fn malformed_template_rejected() {
        let route = RouteDescriptor::from_json(r#"{"path":"/:","name":"x"}"#).unwrap();
        assert!(FormModel::build(route, "example", &FeedformConfig::default()).is_err());
    }
}
