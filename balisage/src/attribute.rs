use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{tokenize, Error, Result};

/// The value of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum AttributeValue<'bump> {
    /// A boolean attribute, rendered as the bare name.
    Boolean,
    /// A valued attribute, rendered as `name="value"`.
    String(BumpString<'bump>),
}
impl<'bump> AttributeValue<'bump> {
    /// Returns the value as a string slice if this is a String variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s.as_str()),
            AttributeValue::Boolean => None,
        }
    }

    /// Returns `true` if this is a [`Boolean`](AttributeValue::Boolean) value.
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
/// A key-value pair for an HTML attribute.
pub struct Attribute<'bump> {
    /// The key of the attribute.
    pub key: BumpString<'bump>,
    /// The value of the attribute.
    pub value: AttributeValue<'bump>,
}

/// The attribute store of a [crate::Node].
///
/// Keys are unique and kept in insertion order; setting an existing key replaces
/// its value without moving it. The `class` key is reserved for [crate::Classes].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attributes<'bump> {
    #[cfg_attr(feature = "serde", serde(skip))]
    bump: &'bump Bump,
    entries: BumpVec<'bump, Attribute<'bump>>,
}
impl<'bump> Attributes<'bump> {
    /// Create an empty attribute store.
    pub fn new(bump: &'bump Bump) -> Self {
        Self {
            bump,
            entries: BumpVec::new_in(bump),
        }
    }

    /// Set a valued attribute.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = AttributeValue::String(BumpString::from_str_in(value, self.bump));
        self.insert(key, value)
    }

    /// Set a boolean attribute.
    pub fn set_boolean(&mut self, key: &str) -> Result<()> {
        self.insert(key, AttributeValue::Boolean)
    }

    /// Insert an attribute, replacing the value of an existing key in place.
    ///
    /// Returns [Error::InvalidAttributeName] for `class`, and for a key that is empty
    /// or contains whitespace, a quote, `=`, `<`, `>` or `/`.
    pub fn insert(&mut self, key: &str, value: AttributeValue<'bump>) -> Result<()> {
        validate_key(key)?;
        match self.entries.iter_mut().find(|a| a.key.as_str() == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Attribute {
                key: BumpString::from_str_in(key, self.bump),
                value,
            }),
        }
        Ok(())
    }

    /// Apply a raw declaration such as `id='main' hidden`.
    ///
    /// The whole declaration is parsed and checked before anything is stored.
    /// A `class` entry is rejected; use [crate::Node::declare] to route it to the
    /// class set.
    pub fn declare(&mut self, declaration: &str) -> Result<()> {
        let parsed = tokenize::parse_declaration(declaration)?;
        for (key, _) in &parsed {
            validate_key(key)?;
        }
        for (key, value) in parsed {
            match value {
                Some(value) => self.set(key, value)?,
                None => self.set_boolean(key)?,
            }
        }
        Ok(())
    }

    /// Get the value of an attribute.
    pub fn get(&self, key: &str) -> Option<&AttributeValue<'bump>> {
        self.entries
            .iter()
            .find(|a| a.key.as_str() == key)
            .map(|a| &a.value)
    }

    /// Returns `true` if the store contains `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove an attribute, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<AttributeValue<'bump>> {
        let index = self.entries.iter().position(|a| a.key.as_str() == key)?;
        Some(self.entries.remove(index).value)
    }

    /// Iterate over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute<'bump>> {
        self.entries.iter()
    }

    /// The number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every attribute.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
impl PartialEq for Attributes<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}
impl Eq for Attributes<'_> {}

/// Returns `true` if `name` can be written as a tag or attribute name as is.
pub(crate) fn is_valid_markup_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/'))
}

pub(crate) fn validate_key(key: &str) -> Result<()> {
    if !is_valid_markup_name(key) || key == "class" {
        tracing::debug!(key, "rejected invalid attribute name");
        return Err(Error::InvalidAttributeName(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeclarationError, ParseContext};

    fn keys<'a>(attributes: &'a Attributes) -> Vec<&'a str> {
        attributes.iter().map(|a| a.key.as_str()).collect()
    }

    #[test]
    fn test_set_and_get() {
        let bump = Bump::new();
        let mut attributes = Attributes::new(&bump);
        attributes.set("id", "main").unwrap();
        attributes.set_boolean("hidden").unwrap();
        assert_eq!(attributes.get("id").and_then(|v| v.as_str()), Some("main"));
        assert_eq!(attributes.get("hidden"), Some(&AttributeValue::Boolean));
        assert_eq!(attributes.get("missing"), None);
        assert_eq!(keys(&attributes), ["id", "hidden"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let bump = Bump::new();
        let mut attributes = Attributes::new(&bump);
        attributes.set("id", "a").unwrap();
        attributes.set("title", "t").unwrap();
        attributes.set_boolean("id").unwrap();
        assert_eq!(keys(&attributes), ["id", "title"]);
        assert!(attributes.get("id").unwrap().is_boolean());
    }

    #[test]
    fn test_reserved_and_empty_keys() {
        let bump = Bump::new();
        let mut attributes = Attributes::new(&bump);
        assert_eq!(
            attributes.set("class", "a"),
            Err(Error::InvalidAttributeName("class".into()))
        );
        assert_eq!(
            attributes.set_boolean(""),
            Err(Error::InvalidAttributeName("".into()))
        );
        assert!(attributes.is_empty());
    }

    #[test]
    fn test_rejects_keys_that_break_markup() {
        let bump = Bump::new();
        let mut attributes = Attributes::new(&bump);
        for key in ["x\" y", "a b", "it's", "a=b", "<a", "b>", "a/b", "tab\t"] {
            assert_eq!(
                attributes.set(key, "v"),
                Err(Error::InvalidAttributeName(key.into())),
                "{key}"
            );
            assert!(attributes.set_boolean(key).is_err(), "{key}");
        }
        assert!(attributes.is_empty());
        attributes.set("data-x_1:y", "v").unwrap();
        assert!(attributes.contains("data-x_1:y"));
    }

    #[test]
    fn test_declare() {
        let bump = Bump::new();
        let mut attributes = Attributes::new(&bump);
        attributes
            .declare("id='test' required title=\"a b\" width=50")
            .unwrap();
        assert_eq!(keys(&attributes), ["id", "required", "title", "width"]);
        assert_eq!(attributes.get("title").and_then(|v| v.as_str()), Some("a b"));
        assert_eq!(attributes.get("width").and_then(|v| v.as_str()), Some("50"));
    }

    #[test]
    fn test_declare_is_all_or_nothing() {
        let bump = Bump::new();
        let mut attributes = Attributes::new(&bump);
        let result = attributes.declare("id='x' hidden class='a'");
        assert_eq!(result, Err(Error::InvalidAttributeName("class".into())));
        assert!(attributes.is_empty());

        let result = attributes.declare("id='x' title='oops");
        assert_eq!(
            result,
            Err(Error::Declaration(DeclarationError::UnclosedQuote {
                quote: '\'',
                position: 13,
            }))
        );
        assert!(attributes.is_empty());

        let result = attributes.declare("id='x' =y");
        assert!(matches!(
            result,
            Err(Error::Declaration(DeclarationError::InvalidSyntax {
                context: ParseContext::ExpectedAttributeName,
                ..
            }))
        ));
        assert!(attributes.is_empty());
    }

    #[test]
    fn test_remove() {
        let bump = Bump::new();
        let mut attributes = Attributes::new(&bump);
        attributes.declare("a b c").unwrap();
        assert_eq!(attributes.remove("b"), Some(AttributeValue::Boolean));
        assert_eq!(attributes.remove("b"), None);
        assert_eq!(keys(&attributes), ["a", "c"]);
        attributes.clear();
        assert_eq!(attributes.len(), 0);
    }
}
