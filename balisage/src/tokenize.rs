//! Tokenization of raw attribute declarations such as `id='main' hidden`.

use crate::error::{DeclarationError, ParseContext};

/// Split a string on whitespace, keeping quoted spans intact.
///
/// A span opened by `'` or `"` extends to the next occurrence of the same quote
/// character, whitespace included. The quotes are kept in the returned tokens,
/// which borrow from `s` and appear in input order.
///
/// ## Example
///
/// ```rust
/// use balisage::tokenize::split_preserving_quotes;
///
/// let tokens = split_preserving_quotes("id='test' class='a b' hidden").unwrap();
/// assert_eq!(tokens, ["id='test'", "class='a b'", "hidden"]);
/// ```
///
/// ## Errors
///
/// Returns [DeclarationError::UnclosedQuote] if a quoted span is still open at the
/// end of the input. A quote of the other kind inside a span is ordinary text, so
/// mismatched quoting is reported the same way.
pub fn split_preserving_quotes(s: &str) -> Result<Vec<&str>, DeclarationError> {
    let mut tokens = Vec::new();
    let mut token_start: Option<usize> = None;
    let mut open_quote: Option<(char, usize)> = None;

    for (pos, c) in s.char_indices() {
        if let Some((quote, _)) = open_quote {
            if c == quote {
                open_quote = None;
            }
            continue;
        }
        match c {
            c if c.is_whitespace() => {
                if let Some(start) = token_start.take() {
                    tokens.push(&s[start..pos]);
                }
            }
            '"' | '\'' => {
                open_quote = Some((c, pos));
                token_start.get_or_insert(pos);
            }
            _ => {
                token_start.get_or_insert(pos);
            }
        }
    }

    if let Some((quote, position)) = open_quote {
        return Err(DeclarationError::UnclosedQuote { quote, position });
    }
    if let Some(start) = token_start {
        tokens.push(&s[start..]);
    }

    Ok(tokens)
}

/// Parse a raw attribute declaration into `(name, value)` pairs.
///
/// Bare names are boolean attributes and yield `None`. `name=value` yields the
/// value with its delimiting quotes stripped; unquoted values may only contain
/// ASCII alphanumerics, `-` and `_`.
///
/// ## Example
///
/// ```rust
/// use balisage::tokenize::parse_declaration;
///
/// let parsed = parse_declaration(r#"id="main" hidden width=50"#).unwrap();
/// assert_eq!(parsed, [("id", Some("main")), ("hidden", None), ("width", Some("50"))]);
/// ```
///
/// ## Errors
///
/// Fails on the first malformed token; see [DeclarationError].
pub fn parse_declaration(s: &str) -> Result<Vec<(&str, Option<&str>)>, DeclarationError> {
    split_preserving_quotes(s)?
        .into_iter()
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Result<(&str, Option<&str>), DeclarationError> {
    let invalid = |context| DeclarationError::InvalidSyntax {
        token: token.to_string(),
        context,
    };

    let Some((name, value)) = token.split_once('=') else {
        if token.contains(is_quote) {
            return Err(invalid(ParseContext::ExpectedAttributeName));
        }
        return Ok((token, None));
    };

    if name.is_empty() || name.contains(is_quote) {
        return Err(invalid(ParseContext::ExpectedAttributeName));
    }
    if value.is_empty() {
        return Err(invalid(ParseContext::ExpectedAttributeValue));
    }

    let value = match value.chars().next() {
        Some(quote) if is_quote(quote) => value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
            .filter(|inner| !inner.contains(quote))
            .ok_or_else(|| invalid(ParseContext::ExpectedQuoteOrValue))?,
        _ => {
            if !value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(invalid(ParseContext::ExpectedQuoteOrValue));
            }
            value
        }
    };

    Ok((name, Some(value)))
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}
