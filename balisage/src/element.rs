use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

use crate::Node;

/// A child of a [Node]: either a nested node or a literal text fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Element<'bump> {
    /// A nested node, serialized recursively.
    Node(Node<'bump>),
    /// A text fragment, inserted verbatim.
    Text {
        /// The text of the element.
        text: BumpString<'bump>,
    },
}
impl<'bump> Element<'bump> {
    /// Create a text element.
    pub fn text(bump: &'bump Bump, text: &str) -> Element<'bump> {
        Element::Text {
            text: BumpString::from_str_in(text, bump),
        }
    }

    /// Get the node if this is a [`Node`](Element::Node).
    pub fn as_node(&self) -> Option<&Node<'bump>> {
        match self {
            Element::Node(node) => Some(node),
            Element::Text { .. } => None,
        }
    }

    /// Get the node mutably if this is a [`Node`](Element::Node).
    pub fn as_node_mut(&mut self) -> Option<&mut Node<'bump>> {
        match self {
            Element::Node(node) => Some(node),
            Element::Text { .. } => None,
        }
    }

    /// Get the text if this is a [`Text`](Element::Text).
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Element::Text { text } => Some(text.as_str()),
            Element::Node(_) => None,
        }
    }

    /// Returns `true` if the element is a [`Node`](Element::Node).
    #[must_use]
    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    /// Returns `true` if the element is [`Text`](Element::Text).
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }
}

/// Trait for types that can be converted into an Element with a bump allocator.
pub trait IntoElement<'bump> {
    /// Convert this value into an Element using the given bump allocator.
    fn into_element(self, bump: &'bump Bump) -> Element<'bump>;
}
impl<'bump> IntoElement<'bump> for Element<'bump> {
    fn into_element(self, _bump: &'bump Bump) -> Element<'bump> {
        self
    }
}
impl<'bump> IntoElement<'bump> for Node<'bump> {
    fn into_element(self, _bump: &'bump Bump) -> Element<'bump> {
        Element::Node(self)
    }
}
impl<'bump> IntoElement<'bump> for &str {
    fn into_element(self, bump: &'bump Bump) -> Element<'bump> {
        Element::text(bump, self)
    }
}
impl<'bump> IntoElement<'bump> for String {
    fn into_element(self, bump: &'bump Bump) -> Element<'bump> {
        Element::text(bump, &self)
    }
}
impl<'bump> IntoElement<'bump> for &String {
    fn into_element(self, bump: &'bump Bump) -> Element<'bump> {
        Element::text(bump, self)
    }
}
impl<'bump> From<Node<'bump>> for Element<'bump> {
    fn from(node: Node<'bump>) -> Self {
        Element::Node(node)
    }
}
