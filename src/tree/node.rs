//! Definition of the interface shared by real nodes and the null node

use crate::{LineSink, NullObjectError};
use std::{fmt::Debug, sync::Arc};

/// Shared, non-nullable handle to a node of either variant.
///
/// A child is always a `NodeRef`, never an `Option`. Leaves point to
/// [NullNode::instance](crate::NullNode::instance).
pub type NodeRef = Arc<dyn Node>;

/// A node in a binary tree.
pub trait Node: Debug + Send + Sync {
    /// Label of the node. Empty for the null node.
    fn name(&self) -> &str;

    fn left(&self) -> &NodeRef;

    fn right(&self) -> &NodeRef;

    /// Number of nodes in the subtree rooted here, the node itself included.
    /// Computed on every call.
    fn tree_size(&self) -> usize;

    /// Pre-order traversal (self, left, right). Writes one line per visited node to `sink`.
    fn walk(&self, sink: &mut dyn LineSink) -> Result<(), NullObjectError>;
}
