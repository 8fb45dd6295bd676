//! ## About
//!
//! This crate illustrates the [null object pattern](https://en.wikipedia.org/wiki/Null_object_pattern)
//! with a tiny binary tree. Missing children are not represented by `Option` but by a single shared
//! sentinel ([NullNode]) that implements the same [Node] trait as the real nodes ([NodeImpl]). Its
//! size is zero, its children are itself and walking it does nothing, so recursive algorithms such as
//! [Node::tree_size] and [Node::walk] never check whether a child is present.
//!
//! See [NodeImpl] to get started.
//!
//! ```
//! use nullobject::{Node, NodeImpl, RecordingSink};
//!
//! let root = NodeImpl::new(
//!     "root",
//!     NodeImpl::leaf("left").into_ref(),
//!     NodeImpl::leaf("right").into_ref(),
//! );
//! assert_eq!(root.tree_size(), 3);
//!
//! let mut sink = RecordingSink::new();
//! root.walk(&mut sink).unwrap();
//! assert_eq!(sink.lines(), ["root", "left", "right"]);
//! ```
//!
//! ## Naming conventions
//! * Traits – capabilities shared by both node variants and by the output destinations
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             are uses substantives (i.e., omit a `get_` prefix) much like the standard library.

pub mod errors;
pub mod sink;
pub mod tree;

pub use errors::NullObjectError;
pub use sink::{LineSink, RecordingSink, WriterSink};
pub use tree::{is_null_node, Node, NodeImpl, NodeRef, NullNode};
