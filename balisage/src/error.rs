/// Errors produced while building a node tree.
///
/// Every failure is reported before anything is mutated: a method that returns
/// an [Error] leaves its receiver exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A node was created with an empty tag name.
    #[error("tag name must not be empty")]
    EmptyTag,
    /// A node was created with a tag name containing whitespace or markup characters.
    #[error("invalid tag name {0:?}")]
    InvalidTag(String),
    /// A positional operation was given an index outside the current bounds.
    #[error("index {index} is out of bounds for {len} element(s)")]
    IndexOutOfBounds {
        /// The index as passed by the caller (possibly negative).
        index: isize,
        /// The length of the sequence at the time of the call.
        len: usize,
    },
    /// A class token failed [crate::is_valid_class_name].
    #[error("invalid class name {0:?}")]
    InvalidClassName(String),
    /// An attribute name was empty or reserved.
    #[error("invalid attribute name {0:?}")]
    InvalidAttributeName(String),
    /// A raw attribute declaration could not be parsed.
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for attribute declaration parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    /// A quoted span was opened and never closed by the same quote character.
    #[error("unclosed quote '{quote}' at position {position}")]
    UnclosedQuote {
        /// The quote character that was not closed (either ' or ")
        quote: char,
        /// The byte offset of the opening quote in the input string
        position: usize,
    },
    /// A token does not follow the `name` / `name=value` shape.
    #[error("invalid syntax in {token:?}: {context}")]
    InvalidSyntax {
        /// The offending token, verbatim
        token: String,
        /// What was being parsed when the error occurred
        context: ParseContext,
    },
}

/// Context of what was being parsed when a [DeclarationError::InvalidSyntax] occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum ParseContext {
    /// Expected an attribute name but found something else
    ExpectedAttributeName,
    /// Expected an attribute value after `=` but found nothing
    ExpectedAttributeValue,
    /// Expected a quoted value or a valid unquoted value character
    ExpectedQuoteOrValue,
}
impl std::fmt::Display for ParseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ParseContext::ExpectedAttributeName => "expecting attribute name",
            ParseContext::ExpectedAttributeValue => "expecting attribute value",
            ParseContext::ExpectedQuoteOrValue => "expecting quote or valid value character",
        })
    }
}
