//! Errors raised while tokenizing a path template.

/// A path template could not be tokenized.
///
/// Positions are character offsets into the template source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// A `:` was not followed by a parameter name.
    #[error("missing parameter name at position {position}")]
    MissingName { position: usize },
    /// A `{` pattern was never closed.
    #[error("unterminated pattern for parameter `{name}`")]
    UnterminatedPattern { name: String },
    /// A `{}` pattern with nothing inside.
    #[error("empty pattern for parameter `{name}`")]
    EmptyPattern { name: String },
    /// The template ends with a lone backslash.
    #[error("trailing escape character")]
    TrailingEscape,
}
