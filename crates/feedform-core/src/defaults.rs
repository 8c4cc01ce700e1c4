//! Default field values from parameter declarations.

use std::collections::BTreeMap;

use crate::form::FormValues;
use crate::route::RouteParameter;

/// Maps every declared parameter to its declared default, or `None` when
/// the declaration has no default or is a bare description.
pub fn resolve_defaults(parameters: &BTreeMap<String, RouteParameter>) -> FormValues {
    parameters
        .iter()
        .map(|(name, param)| (name.clone(), param.default_value().map(str::to_string)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::ParameterSpec;

    #[test]
    fn defaults_from_mixed_declarations() {
        let mut params = BTreeMap::new();
        params.insert(
            "user".to_string(),
            RouteParameter::Description("GitHub username".to_string()),
        );
        params.insert(
            "state".to_string(),
            RouteParameter::Spec(ParameterSpec {
                description: "state".to_string(),
                default: Some("open".to_string()),
                options: None,
            }),
        );
        params.insert("labels".to_string(), RouteParameter::Spec(ParameterSpec::default()));

        let values = resolve_defaults(&params);
        assert_eq!(values.len(), 3);
        assert_eq!(values.get("user"), None);
        assert_eq!(values.get("state"), Some("open"));
        assert_eq!(values.get("labels"), None);
    }

    #[test]
    fn no_parameters_no_defaults() {
        assert!(resolve_defaults(&BTreeMap::new()).is_empty());
    }
}
