//! Path template parsing.
//!
//! Route paths are templates such as `/issue/:user/:repo/:state?`. This
//! module tokenizes them, derives the ordered list of form keys, and
//! matches populated example paths back against a template.

mod error;
mod lexer;
mod matcher;

use std::collections::HashSet;

pub use error::TemplateError;
pub use matcher::match_path;

/// Placeholder names never offered as form fields. These carry feature
/// flags and query-like options rather than route identity.
pub const DEFAULT_EXCLUDED_NAMES: &[&str] = &[
    "routeParams",
    "functionalFlag",
    "fulltext",
    "disableEmbed",
    "date",
    "language",
    "lang",
    "sort",
];

/// How many times a placeholder may occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Exactly one segment (no modifier).
    One,
    /// `?`
    Optional,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

impl Modifier {
    pub fn is_optional(self) -> bool {
        matches!(self, Modifier::Optional | Modifier::ZeroOrMore)
    }

    pub fn is_repeat(self) -> bool {
        matches!(self, Modifier::ZeroOrMore | Modifier::OneOrMore)
    }
}

/// A named variable segment of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    /// Custom regex from `{...}`, if any.
    pub pattern: Option<String>,
    pub modifier: Modifier,
    /// Separator emitted before the value (`"/"` or empty).
    pub prefix: String,
}

impl Placeholder {
    /// True when a value for this placeholder may legitimately contain `/`.
    pub fn spans_segments(&self) -> bool {
        self.modifier.is_repeat() || self.pattern.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Param(Placeholder),
}

/// A form key derived from a template placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedParameterKey {
    pub name: String,
    pub optional: bool,
}

/// A tokenized path template. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    source: String,
    tokens: Vec<Token>,
}

impl PathTemplate {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let tokens = lexer::tokenize(source)?;
        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.tokens.iter().filter_map(|t| match t {
            Token::Param(p) => Some(p),
            Token::Literal(_) => None,
        })
    }

    /// Ordered, deduplicated form keys, skipping any name in `exclude`.
    /// When a name repeats, its first occurrence decides optionality.
    pub fn keys<S: AsRef<str>>(&self, exclude: &[S]) -> Vec<ParsedParameterKey> {
        let excluded: HashSet<&str> = exclude.iter().map(AsRef::as_ref).collect();
        let mut seen = HashSet::new();
        self.placeholders()
            .filter(|p| !excluded.contains(p.name.as_str()))
            .filter(|p| seen.insert(p.name.as_str()))
            .map(|p| ParsedParameterKey {
                name: p.name.clone(),
                optional: p.modifier.is_optional(),
            })
            .collect()
    }

    /// The template up to (not including) the first placeholder named
    /// `name`, together with that placeholder's prefix. Returns the whole
    /// template when no such placeholder exists.
    pub fn truncated_before(&self, name: &str) -> PathTemplate {
        let cut = self
            .tokens
            .iter()
            .position(|t| matches!(t, Token::Param(p) if p.name == name));
        let Some(cut) = cut else {
            return self.clone();
        };
        let tokens = self.tokens[..cut].to_vec();
        let source = render_source(&tokens);
        PathTemplate { source, tokens }
    }
}

/// Rebuilds template text from tokens (used for truncated templates).
fn render_source(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => {
                for c in text.chars() {
                    if matches!(c, ':' | '\\') {
                        out.push('\\');
                    }
                    out.push(c);
                }
            }
            Token::Param(p) => {
                out.push_str(&p.prefix);
                out.push(':');
                out.push_str(&p.name);
                if let Some(pattern) = &p.pattern {
                    out.push('{');
                    out.push_str(pattern);
                    out.push('}');
                }
                match p.modifier {
                    Modifier::One => {}
                    Modifier::Optional => out.push('?'),
                    Modifier::ZeroOrMore => out.push('*'),
                    Modifier::OneOrMore => out.push('+'),
                }
            }
        }
    }
    out
}

/// Parses `path` and returns its form keys, excluding reserved names.
pub fn parse_keys<S: AsRef<str>>(
    path: &str,
    exclude: &[S],
) -> Result<Vec<ParsedParameterKey>, TemplateError> {
    Ok(PathTemplate::parse(path)?.keys(exclude))
}
