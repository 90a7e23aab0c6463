#![deny(missing_docs)]
//! A crate for assembling HTML markup from a mutable tree of typed nodes.
//!
//! A [Node] has a fixed tag name, an ordered list of child [Element]s, an
//! [Attributes] store and a [Classes] set. All three are public and mutated
//! through their own operations; [Node::construct] then renders the subtree to a
//! string.
//!
//! All allocations are done through a bump allocator ([bumpalo::Bump]) which must be passed
//! to all node-creating functions.
//!
//! # Example
//!
//! ```
//! use balisage::{bumpalo::Bump, Node};
//!
//! let bump = Bump::new();
//! let mut list = Node::new(&bump, "ul")
//!     .unwrap()
//!     .with_attributes("id='menu' class='nav dark' hidden")
//!     .unwrap();
//! list.elements.add([
//!     Node::new(&bump, "li").unwrap().with_elements(["Home"]),
//!     Node::new(&bump, "li").unwrap().with_elements(["About"]),
//! ]);
//! list.elements.insert(0, Node::new(&bump, "li").unwrap().with_elements(["Top"])).unwrap();
//! list.attributes.remove("hidden");
//!
//! assert_eq!(
//!     list.construct(),
//!     r#"<ul class="nav dark" id="menu"><li>Top</li><li>Home</li><li>About</li></ul>"#
//! );
//! ```

pub mod builder;
pub mod capability;
pub mod tokenize;

// Re-export bumpalo for convenience
pub use bumpalo;

mod attribute;
pub use attribute::{Attribute, AttributeValue, Attributes};

mod class;
pub use class::{is_valid_class_name, Classes};

mod element;
pub use element::{Element, IntoElement};

mod elements;
pub use elements::Elements;

mod error;
pub use error::{DeclarationError, Error, ParseContext, Result};

mod node;
pub use node::Node;
