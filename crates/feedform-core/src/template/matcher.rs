//! Matching a populated path against a template.
//!
//! Used to pull per-field placeholder hints out of a route's example path.

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;
use regex::Regex;

use super::{Modifier, PathTemplate, Token};

/// Segment pattern for placeholders without a custom `{...}` regex.
const DEFAULT_SEGMENT: &str = "[^/#?]+?";

/// Matches `path` against `template` and returns the decoded value of each
/// placeholder that matched. Returns `None` when the path does not fit the
/// template or a custom pattern is not a valid regex.
pub fn match_path(template: &PathTemplate, path: &str) -> Option<BTreeMap<String, String>> {
    let (regex, names) = compile(template)?;
    let caps = regex.captures(path)?;

    let mut out = BTreeMap::new();
    for (idx, name) in names.iter().enumerate() {
        let Some(m) = caps.name(&format!("p{idx}")) else {
            continue;
        };
        if out.contains_key(name) {
            continue;
        }
        let value = percent_decode_str(m.as_str()).decode_utf8_lossy().into_owned();
        out.insert(name.clone(), value);
    }
    Some(out)
}

fn compile(template: &PathTemplate) -> Option<(Regex, Vec<String>)> {
    let mut source = String::from("^");
    let mut names = Vec::new();

    for token in template.tokens() {
        match token {
            Token::Literal(text) => source.push_str(&regex::escape(text)),
            Token::Param(p) => {
                let group = format!("p{}", names.len());
                names.push(p.name.clone());
                let inner = p.pattern.as_deref().unwrap_or(DEFAULT_SEGMENT);
                let prefix = regex::escape(&p.prefix);
                let piece = match p.modifier {
                    Modifier::One => format!("{prefix}(?P<{group}>{inner})"),
                    Modifier::Optional => format!("(?:{prefix}(?P<{group}>{inner}))?"),
                    Modifier::OneOrMore => {
                        format!("{prefix}(?P<{group}>(?:{inner})(?:{prefix}(?:{inner}))*)")
                    }
                    Modifier::ZeroOrMore => {
                        format!("(?:{prefix}(?P<{group}>(?:{inner})(?:{prefix}(?:{inner}))*))?")
                    }
                };
                source.push_str(&piece);
            }
        }
    }
    source.push_str("/?$");

    match Regex::new(&source) {
        Ok(regex) => Some((regex, names)),
        Err(err) => {
            tracing::debug!(template = template.source(), %err, "template does not compile to a matcher");
            None
        }
    }
}
