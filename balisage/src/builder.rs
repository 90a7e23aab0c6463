//! Shorthand constructors for nodes of common tags.

use bumpalo::Bump;

use crate::{Element, Node, Result};

/// A builder for creating nodes using a bump allocator.
///
/// # Example
///
/// ```
/// use balisage::{bumpalo::Bump, builder::Builder};
///
/// let bump = Bump::new();
/// let b = Builder::new(&bump);
/// let page = b
///     .div()
///     .with_classes(["container"])
///     .unwrap()
///     .with_elements([b.h1().with_elements(["Hello, World!"])]);
/// assert_eq!(
///     page.construct(),
///     r#"<div class="container"><h1>Hello, World!</h1></div>"#
/// );
/// ```
#[derive(Clone, Copy)]
pub struct Builder<'bump> {
    bump: &'bump Bump,
}
impl<'bump> Builder<'bump> {
    /// Create a new builder with the given bump allocator.
    pub fn new(bump: &'bump Bump) -> Self {
        Self { bump }
    }

    /// Get a reference to the bump allocator.
    pub fn bump(&self) -> &'bump Bump {
        self.bump
    }

    /// Create a node with an arbitrary tag name.
    ///
    /// This is a convenience wrapper around [`Node::new`].
    pub fn node(&self, tag: &str) -> Result<Node<'bump>> {
        Node::new(self.bump, tag)
    }

    /// Create a text element from a string.
    pub fn text(&self, text: &str) -> Element<'bump> {
        Element::text(self.bump, text)
    }
}

macro_rules! tag_builders {
    ($($tag_ident:ident),*) => {
        impl<'bump> Builder<'bump> {
            $(
                #[doc = concat!("Create an empty node with the tag name `", stringify!($tag_ident), "`.")]
                pub fn $tag_ident(&self) -> Node<'bump> {
                    Node::from_tag(self.bump, stringify!($tag_ident))
                }
            )*
        }
        /// A list of all tags with a dedicated constructor on [Builder].
        pub const TAGS: &[&str] = &[$(stringify!($tag_ident)),*];
    };
}
tag_builders! {
    head, body, main, p, code, div, pre, header, nav, footer,
    ol, ul, li, strong, em, blockquote, article, section,
    aside, span, script, style, title, time, html, a, button, form,
    h1, h2, h3, h4, h5, h6, small, sup, sub, label, q, s,
    table, tr, td, th, tbody, thead, tfoot, colgroup, video
}
