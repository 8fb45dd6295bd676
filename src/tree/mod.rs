//! # Nomenclature
//!
//! * Traits are capabilities shared by all nodes ([Node])
//! * Structs are nouns. They directly relate to the variant they implement
//!
//! In this module, a tree is nothing but its root node. Children are never optional: a
//! node without a child on one side points to the shared [NullNode] instead. Both variants
//! implement [Node], so size computation and traversal dispatch dynamically and never
//! branch on the presence of a child.

pub mod node;
pub mod node_impl;
pub mod null_node;

pub use node::{Node, NodeRef};
pub use node_impl::NodeImpl;
pub use null_node::{is_null_node, NullNode};
