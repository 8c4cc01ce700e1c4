//! Template tokenizer.
//!
//! Grammar: literal text interleaved with placeholders of the form
//! `:name`, `:name{pattern}`, each optionally followed by a modifier
//! (`?`, `*` or `+`). A backslash escapes the next character as literal.

use super::{Modifier, Placeholder, TemplateError, Token};

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits `source` into literal and placeholder tokens.
///
/// A `/` directly in front of a placeholder becomes that placeholder's
/// prefix, so an omitted optional placeholder takes its separator with it.
pub(super) fn tokenize(source: &str) -> Result<Vec<Token>, TemplateError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                let next = chars.get(i + 1).ok_or(TemplateError::TrailingEscape)?;
                literal.push(*next);
                i += 2;
            }
            ':' => {
                let position = i;
                i += 1;
                let mut name = String::new();
                while i < chars.len() && is_name_char(chars[i]) {
                    name.push(chars[i]);
                    i += 1;
                }
                if name.is_empty() {
                    return Err(TemplateError::MissingName { position });
                }

                let pattern = if chars.get(i) == Some(&'{') {
                    let (pattern, next) = read_pattern(&chars, i, &name)?;
                    i = next;
                    Some(pattern)
                } else {
                    None
                };

                let modifier = match chars.get(i).copied() {
                    Some('?') => Modifier::Optional,
                    Some('*') => Modifier::ZeroOrMore,
                    Some('+') => Modifier::OneOrMore,
                    _ => Modifier::One,
                };
                if modifier != Modifier::One {
                    i += 1;
                }

                let prefix = if literal.ends_with('/') {
                    literal.pop();
                    "/"
                } else {
                    ""
                };
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Param(Placeholder {
                    name,
                    pattern,
                    modifier,
                    prefix: prefix.to_string(),
                }));
            }
            c => {
                literal.push(c);
                i += 1;
            }
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

/// Reads a balanced `{...}` group starting at `start` (which must be `{`).
/// Returns the inner pattern and the index just past the closing brace.
fn read_pattern(chars: &[char], start: usize, name: &str) -> Result<(String, usize), TemplateError> {
    let mut depth = 0usize;
    let mut pattern = String::new();
    let mut i = start;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                // Escapes belong to the regex; keep them verbatim.
                let next = chars.get(i + 1).ok_or_else(|| TemplateError::UnterminatedPattern {
                    name: name.to_string(),
                })?;
                pattern.push(c);
                pattern.push(*next);
                i += 2;
                continue;
            }
            '{' => {
                if depth > 0 {
                    pattern.push(c);
                }
                depth += 1;
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    if pattern.is_empty() {
                        return Err(TemplateError::EmptyPattern {
                            name: name.to_string(),
                        });
                    }
                    return Ok((pattern, i + 1));
                }
                pattern.push(c);
            }
            _ => pattern.push(c),
        }
        i += 1;
    }

    Err(TemplateError::UnterminatedPattern {
        name: name.to_string(),
    })
}
