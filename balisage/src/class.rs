use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{Error, Result};

/// Returns `true` if `name` is a syntactically valid class token.
///
/// A valid token starts with an ASCII letter, `_`, or `-`. A leading `-` must be
/// followed by a letter or `_`. The remaining characters are ASCII alphanumerics,
/// `_`, or `-`.
///
/// ```rust
/// use balisage::is_valid_class_name;
///
/// assert!(is_valid_class_name("-_class"));
/// assert!(!is_valid_class_name("--class"));
/// assert!(!is_valid_class_name("1234567890"));
/// ```
pub fn is_valid_class_name(name: &str) -> bool {
    let mut chars = name.chars();
    let is_start = |c: char| c.is_ascii_alphabetic() || c == '_';
    match chars.next() {
        Some('-') => match chars.next() {
            Some(c) if is_start(c) => {}
            _ => return false,
        },
        Some(c) if is_start(c) => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// The class set of a [crate::Node].
///
/// Tokens are kept in insertion order and duplicates are ignored. Only tokens
/// accepted by [is_valid_class_name] are ever stored.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Classes<'bump> {
    #[cfg_attr(feature = "serde", serde(skip))]
    bump: &'bump Bump,
    names: BumpVec<'bump, BumpString<'bump>>,
}
impl<'bump> Classes<'bump> {
    /// Create an empty class set.
    pub fn new(bump: &'bump Bump) -> Self {
        Self {
            bump,
            names: BumpVec::new_in(bump),
        }
    }

    /// Add a class token.
    ///
    /// Returns `Ok(false)` if the token was already present.
    pub fn add(&mut self, name: &str) -> Result<bool> {
        validate(name)?;
        if self.contains(name) {
            return Ok(false);
        }
        self.names.push(BumpString::from_str_in(name, self.bump));
        Ok(true)
    }

    /// Add several class tokens.
    ///
    /// Every token is validated before any is inserted, so a single invalid token
    /// leaves the set unchanged.
    pub fn extend<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> Result<()> {
        let names: Vec<&str> = names.into_iter().collect();
        for name in &names {
            validate(name)?;
        }
        for name in names {
            self.add(name)?;
        }
        Ok(())
    }

    /// Add the whitespace-separated class tokens in `s`, as found in a `class` attribute.
    pub fn extend_from_str(&mut self, s: &str) -> Result<()> {
        self.extend(s.split_whitespace())
    }

    /// Returns `true` if the set contains `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.as_str() == name)
    }

    /// Remove a class token, returning whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n.as_str() == name) {
            Some(index) => {
                self.names.remove(index);
                true
            }
            None => false,
        }
    }

    /// Iterate over the tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_str())
    }

    /// The number of tokens in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Remove every token.
    pub fn clear(&mut self) {
        self.names.clear();
    }
}
impl PartialEq for Classes<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}
impl Eq for Classes<'_> {}

pub(crate) fn validate(name: &str) -> Result<()> {
    if is_valid_class_name(name) {
        Ok(())
    } else {
        tracing::debug!(name, "rejected invalid class name");
        Err(Error::InvalidClassName(name.to_string()))
    }
}
