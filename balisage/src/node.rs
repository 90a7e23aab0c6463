use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

use crate::{
    attribute, class, tokenize, Attribute, AttributeValue, Attributes, Classes, Element, Elements, Error,
    IntoElement, Result,
};

/// An HTML element pending serialization.
///
/// The tag name is fixed at creation. Children, attributes and classes are
/// public and are mutated directly through their own operations:
///
/// ```rust
/// use balisage::{bumpalo::Bump, Node};
///
/// let bump = Bump::new();
/// let mut div = Node::new(&bump, "div").unwrap();
/// div.classes.add("a").unwrap();
/// div.attributes.set("id", "x").unwrap();
/// div.elements.push("hi");
/// assert_eq!(div.construct(), r#"<div class="a" id="x">hi</div>"#);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node<'bump> {
    #[cfg_attr(feature = "serde", serde(skip))]
    bump: &'bump Bump,
    tag: BumpString<'bump>,
    /// The children of the node.
    pub elements: Elements<'bump>,
    /// The attributes of the node, excluding `class`.
    pub attributes: Attributes<'bump>,
    /// The classes of the node.
    pub classes: Classes<'bump>,
}
impl<'bump> Node<'bump> {
    /// Create an empty node.
    ///
    /// Returns [Error::EmptyTag] if `tag` is empty, and [Error::InvalidTag] if it
    /// contains whitespace, a quote, `=`, `<`, `>` or `/`.
    pub fn new(bump: &'bump Bump, tag: &str) -> Result<Self> {
        if tag.is_empty() {
            return Err(Error::EmptyTag);
        }
        if !attribute::is_valid_markup_name(tag) {
            tracing::debug!(tag, "rejected invalid tag name");
            return Err(Error::InvalidTag(tag.to_string()));
        }
        Ok(Self::from_tag(bump, tag))
    }

    pub(crate) fn from_tag(bump: &'bump Bump, tag: &str) -> Self {
        Self {
            bump,
            tag: BumpString::from_str_in(tag, bump),
            elements: Elements::new(bump),
            attributes: Attributes::new(bump),
            classes: Classes::new(bump),
        }
    }

    /// Append children to the node.
    pub fn with_elements<E: IntoElement<'bump>>(
        mut self,
        elements: impl IntoIterator<Item = E>,
    ) -> Self {
        self.elements.add(elements);
        self
    }

    /// Apply a raw attribute declaration to the node; see [Node::declare].
    pub fn with_attributes(mut self, declaration: &str) -> Result<Self> {
        self.declare(declaration)?;
        Ok(self)
    }

    /// Add classes to the node.
    pub fn with_classes<'a>(mut self, classes: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        self.classes.extend(classes)?;
        Ok(self)
    }

    /// The tag name of the node.
    pub fn tag(&self) -> &str {
        self.tag.as_str()
    }

    /// The allocator this node was created with.
    pub fn bump(&self) -> &'bump Bump {
        self.bump
    }

    /// Apply a raw declaration such as `id='main' class='a b' hidden`.
    ///
    /// A `class` entry is split on whitespace and added to [Node::classes]; every
    /// other entry goes to [Node::attributes]. Nothing is applied unless the whole
    /// declaration is valid.
    pub fn declare(&mut self, declaration: &str) -> Result<()> {
        let parsed = tokenize::parse_declaration(declaration)?;

        let mut class_names = Vec::new();
        for &(key, value) in &parsed {
            match (key, value) {
                ("class", Some(value)) => class_names.extend(value.split_whitespace()),
                ("class", None) => return Err(Error::InvalidAttributeName(key.to_string())),
                _ => attribute::validate_key(key)?,
            }
        }
        for name in &class_names {
            class::validate(name)?;
        }

        for (key, value) in parsed {
            match value {
                _ if key == "class" => {}
                Some(value) => self.attributes.set(key, value)?,
                None => self.attributes.set_boolean(key)?,
            }
        }
        self.classes.extend(class_names)
    }

    /// Render the node and its subtree to an HTML string.
    ///
    /// The class attribute comes first when there are classes, followed by the
    /// other attributes; both keep insertion order. Text children are emitted
    /// verbatim and attribute values are escaped.
    pub fn construct(&self) -> String {
        tracing::trace!(tag = self.tag(), "constructing node");
        self.to_string()
    }

    /// Write the node and its subtree to a writer.
    pub fn write(&self, writer: &mut dyn fmt::Write) -> fmt::Result {
        // start tag
        write!(writer, "<{}", self.tag())?;
        if !self.classes.is_empty() {
            writer.write_str(" class=\"")?;
            for (idx, name) in self.classes.iter().enumerate() {
                if idx > 0 {
                    writer.write_char(' ')?;
                }
                writer.write_str(name)?;
            }
            writer.write_char('"')?;
        }
        for Attribute { key, value } in self.attributes.iter() {
            match value {
                AttributeValue::String(value) => write!(
                    writer,
                    " {}=\"{}\"",
                    key.as_str(),
                    html_escape::encode_double_quoted_attribute(value.as_str())
                )?,
                AttributeValue::Boolean => write!(writer, " {}", key.as_str())?,
            }
        }
        writer.write_char('>')?;

        for element in &self.elements {
            match element {
                Element::Node(node) => node.write(writer)?,
                Element::Text { text } => writer.write_str(text.as_str())?,
            }
        }

        // end tag
        write!(writer, "</{}>", self.tag())
    }
}
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}
impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.elements == other.elements
            && self.attributes == other.attributes
            && self.classes == other.classes
    }
}
impl Eq for Node<'_> {}
