//! Feed URL assembly from a template and form values.
//!
//! Values whose key starts with [`SUFFIX_KEY_PREFIX`] are not substituted
//! into the path. They are encoded as `key=value` pairs and appended as one
//! extra segment in place of the template's `:routeParams` placeholder.

mod encode;

use std::fmt;

use crate::form::FormValues;
use crate::template::{PathTemplate, Token};

pub use encode::{encode_component, encode_segments};

/// Key prefix marking a suffix (query-like) parameter.
pub const SUFFIX_KEY_PREFIX: &str = "route-params-";
/// Placeholder the suffix segment replaces.
pub const ROUTE_PARAMS_NAME: &str = "routeParams";
pub const DEFAULT_SCHEME: &str = "rsshub";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssembleError {
    #[error("missing required parameter `{param}`")]
    MissingRequired { param: String },
    /// An optional placeholder is empty while a later one is filled; the
    /// path cannot skip a middle segment.
    #[error("missing optional parameter `{param}`: it must be filled when a later parameter is set")]
    MissingOptional { param: String },
}

/// A fully substituted feed identifier, e.g. `rsshub://github/issue/DIYgod/RSSHub`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledUrl {
    scheme: String,
    route_prefix: String,
    path: String,
    suffix: Option<String>,
    full: String,
}

impl AssembledUrl {
    pub fn new(scheme: &str, route_prefix: &str, path: String, suffix: Option<String>) -> Self {
        let mut full = format!("{scheme}://{route_prefix}{path}");
        if let Some(s) = &suffix {
            full.push('/');
            full.push_str(s);
        }
        Self {
            scheme: scheme.to_string(),
            route_prefix: route_prefix.to_string(),
            path,
            suffix,
            full,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn route_prefix(&self) -> &str {
        &self.route_prefix
    }

    /// Substituted path, without the suffix segment.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// `/<prefix><path>[/<suffix>]`, the part an HTTP instance serves.
    pub fn route_path(&self) -> String {
        match &self.suffix {
            Some(s) => format!("/{}{}/{}", self.route_prefix, self.path, s),
            None => format!("/{}{}", self.route_prefix, self.path),
        }
    }
}

impl fmt::Display for AssembledUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

/// Substitutes `values` into `template`.
///
/// An absent optional placeholder collapses together with its leading `/`.
/// An absent optional followed by any filled placeholder is an error, as is
/// any absent required placeholder.
pub fn fill_path(template: &PathTemplate, values: &FormValues) -> Result<String, AssembleError> {
    let mut out = String::new();
    let mut skipped: Option<&str> = None;

    for token in template.tokens() {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Param(p) => match values.filled(&p.name) {
                Some(value) => {
                    if let Some(param) = skipped {
                        return Err(AssembleError::MissingOptional {
                            param: param.to_string(),
                        });
                    }
                    out.push_str(&p.prefix);
                    if p.spans_segments() {
                        out.push_str(&encode_segments(value));
                    } else {
                        out.push_str(&encode_component(value));
                    }
                }
                None if p.modifier.is_optional() => {
                    skipped.get_or_insert(p.name.as_str());
                }
                None => {
                    return Err(AssembleError::MissingRequired {
                        param: p.name.clone(),
                    })
                }
            },
        }
    }
    Ok(out)
}

/// Splits values into path values and filled suffix pairs (prefix stripped).
/// Pairs come out in ascending key order.
pub fn split_suffix(values: &FormValues) -> (FormValues, Vec<(String, String)>) {
    let mut path_values = FormValues::new();
    let mut suffix = Vec::new();
    for (key, value) in values.iter() {
        match key.strip_prefix(SUFFIX_KEY_PREFIX) {
            Some(stripped) => {
                if let Some(v) = value.filter(|v| !v.is_empty()) {
                    suffix.push((stripped.to_string(), v.to_string()));
                }
            }
            None => path_values.insert(key, value.map(str::to_string)),
        }
    }
    (path_values, suffix)
}

/// `k1=v1&k2=v2` with each key and value percent-encoded, or `None` when
/// there are no pairs.
pub fn encode_suffix(pairs: &[(String, String)]) -> Option<String> {
    if pairs.is_empty() {
        return None;
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect();
    Some(encoded.join("&"))
}

/// Builds the final identifier `<scheme>://<route_prefix><path>[/<suffix>]`.
pub fn assemble(
    template: &PathTemplate,
    scheme: &str,
    route_prefix: &str,
    values: &FormValues,
) -> Result<AssembledUrl, AssembleError> {
    let (path_values, pairs) = split_suffix(values);
    let suffix = encode_suffix(&pairs);

    let truncated;
    let effective = if suffix.is_some() {
        truncated = template.truncated_before(ROUTE_PARAMS_NAME);
        &truncated
    } else {
        template
    };

    let path = fill_path(effective, &path_values)?;
    let url = AssembledUrl::new(scheme, route_prefix, path, suffix);
    tracing::debug!(template = template.source(), url = %url, "assembled feed url");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tpl(s: &str) -> PathTemplate {
        PathTemplate::parse(s).unwrap()
    }

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        let mut v = FormValues::new();
        for (k, val) in pairs {
            v.set(*k, *val);
        }
        v
    }

    #[test]
    fn optional_segment_collapses() {
        let t = tpl("/:category/:id?");
        assert_eq!(fill_path(&t, &values(&[("category", "tech")])).unwrap(), "/tech");
        assert_eq!(
            fill_path(&t, &values(&[("category", "tech"), ("id", "5")])).unwrap(),
            "/tech/5"
        );
    }

    #[test]
    fn empty_optional_counts_as_absent() {
        let t = tpl("/:category/:id?");
        assert_eq!(
            fill_path(&t, &values(&[("category", "tech"), ("id", "")])).unwrap(),
            "/tech"
        );
    }

    #[test]
    fn missing_required() {
        let t = tpl("/issue/:user/:repo");
        assert_eq!(
            fill_path(&t, &values(&[("user", "DIYgod")])),
            Err(AssembleError::MissingRequired {
                param: "repo".to_string()
            })
        );
    }

    #[test]
    fn skipped_optional_before_filled_one() {
        let t = tpl("/issue/:user/:repo/:state?/:labels?");
        let err = fill_path(
            &t,
            &values(&[("user", "a"), ("repo", "b"), ("labels", "bug")]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            AssembleError::MissingOptional {
                param: "state".to_string()
            }
        );
        assert!(err.to_string().contains("`state`"));
    }

    #[test]
    fn values_are_escaped() {
        let t = tpl("/search/:q/:path{.+}?");
        assert_eq!(
            fill_path(&t, &values(&[("q", "a b/c"), ("path", "x y/z")])).unwrap(),
            "/search/a%20b%2Fc/x%20y/z"
        );
    }

    #[test]
    fn literal_after_param_kept() {
        let t = tpl("/user/:id/posts");
        assert_eq!(fill_path(&t, &values(&[("id", "7")])).unwrap(), "/user/7/posts");
    }

    #[test]
    fn suffix_parameters_appended() {
        let t = tpl("/feed/:routeParams?");
        let url = assemble(&t, DEFAULT_SCHEME, "example", &values(&[("route-params-lang", "en")])).unwrap();
        assert_eq!(url.path(), "/feed");
        assert_eq!(url.suffix(), Some("lang=en"));
        assert_eq!(url.as_str(), "rsshub://example/feed/lang=en");
        assert_eq!(url.route_path(), "/example/feed/lang=en");
    }

    #[test]
    fn suffix_pairs_encoded_and_joined() {
        let pairs = vec![
            ("lang".to_string(), "en".to_string()),
            ("q".to_string(), "a&b=c".to_string()),
        ];
        assert_eq!(encode_suffix(&pairs).as_deref(), Some("lang=en&q=a%26b%3Dc"));
        assert_eq!(encode_suffix(&[]), None);
    }

    #[test]
    fn empty_suffix_values_dropped() {
        let t = tpl("/feed/:id?/:routeParams?");
        let url = assemble(
            &t,
            DEFAULT_SCHEME,
            "example",
            &values(&[("route-params-lang", ""), ("id", "3")]),
        )
        .unwrap();
        assert_eq!(url.as_str(), "rsshub://example/feed/3");
        assert_eq!(url.suffix(), None);
    }

    #[test]
    fn suffix_pairs_sorted_by_key() {
        let (path_values, pairs) = split_suffix(&values(&[
            ("route-params-z", "1"),
            ("id", "3"),
            ("route-params-a", "2"),
        ]));
        assert_eq!(path_values.get("id"), Some("3"));
        assert_eq!(
            pairs,
            vec![("a".to_string(), "2".to_string()), ("z".to_string(), "1".to_string())]
        );
        let t = tpl("/feed/:routeParams?");
        let url = assemble(
            &t,
            DEFAULT_SCHEME,
            "example",
            &values(&[("route-params-z", "1"), ("route-params-a", "2")]),
        )
        .unwrap();
        assert_eq!(url.suffix(), Some("a=2&z=1"));
    }

    #[test]
    fn suffix_without_route_params_placeholder() {
        let t = tpl("/feed/:id");
        let url = assemble(
            &t,
            DEFAULT_SCHEME,
            "example",
            &values(&[("id", "3"), ("route-params-sort", "new")]),
        )
        .unwrap();
        assert_eq!(url.as_str(), "rsshub://example/feed/3/sort=new");
    }

    #[test]
    fn nothing_filled_yields_bare_prefix() {
        let url = assemble(&tpl("/:id?"), DEFAULT_SCHEME, "example", &FormValues::new()).unwrap();
        assert_eq!(url.as_str(), "rsshub://example");
        assert_eq!(url.to_string(), "rsshub://example");
    }
}
