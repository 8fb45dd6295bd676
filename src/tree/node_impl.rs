//! Named node with two children.

use super::{Node, NodeRef, NullNode};
use crate::{LineSink, NullObjectError};
use std::sync::Arc;
use tracing::{debug, trace, warn};
use tracing_attributes::instrument;

/// A real node of the tree. Name and children are fixed at construction.
///
/// Trees are built bottom-up: children first, then their parent.
///
/// ```
/// use nullobject::{Node, NodeImpl, NullNode};
///
/// let left = NodeImpl::leaf("left").into_ref();
/// let root = NodeImpl::new("root", left, NullNode::instance());
/// assert_eq!(root.tree_size(), 2);
/// assert_eq!(root.left().name(), "left");
/// ```
#[derive(Debug)]
pub struct NodeImpl {
    name: String,
    left: NodeRef,
    right: NodeRef,
}

impl NodeImpl {
    /// Constructor. Pass [NullNode::instance] for a missing child.
    pub fn new(name: impl Into<String>, left: NodeRef, right: NodeRef) -> Self {
        let name = name.into();
        if name.is_empty() {
            warn!("Creating a node with an empty name; it is indistinguishable from the null node in a walk");
        }
        debug!(name = %name, "Creating node");
        NodeImpl { name, left, right }
    }

    /// Constructor for a node whose children are both the null node.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, NullNode::instance(), NullNode::instance())
    }

    /// Moves the node behind a shared handle so it can become another node's child.
    pub fn into_ref(self) -> NodeRef {
        Arc::new(self)
    }
}

impl Node for NodeImpl {
    fn name(&self) -> &str {
        &self.name
    }

    fn left(&self) -> &NodeRef {
        &self.left
    }

    fn right(&self) -> &NodeRef {
        &self.right
    }

    fn tree_size(&self) -> usize {
        1 + self.left.tree_size() + self.right.tree_size()
    }

    #[instrument(level = "trace", skip(self, sink), fields(name = %self.name))]
    fn walk(&self, sink: &mut dyn LineSink) -> Result<(), NullObjectError> {
        trace!("Visiting node");
        sink.write_line(&self.name)?;
        self.left.walk(sink)?;
        self.right.walk(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_null_node, RecordingSink};
    use itertools::Itertools;

    #[test]
    fn test_leaf() {
        let leaf = NodeImpl::leaf("leaf");
        assert_eq!(leaf.name(), "leaf");
        assert_eq!(leaf.tree_size(), 1);
        assert!(is_null_node(leaf.left()));
        assert!(is_null_node(leaf.right()));

        let mut sink = RecordingSink::new();
        leaf.walk(&mut sink).unwrap();
        assert_eq!(sink.lines(), ["leaf"]);
    }

    #[test]
    fn test_children_returned_as_is() {
        let left = NodeImpl::leaf("left").into_ref();
        let right = NodeImpl::leaf("right").into_ref();
        let root = NodeImpl::new("root", Arc::clone(&left), Arc::clone(&right));

        assert!(Arc::ptr_eq(root.left(), &left));
        assert!(Arc::ptr_eq(root.right(), &right));
    }

    #[test]
    fn test_one_sided_tree() {
        // root -> a -> b, all on the right
        let b = NodeImpl::leaf("b").into_ref();
        let a = NodeImpl::new("a", NullNode::instance(), b).into_ref();
        let root = NodeImpl::new("root", NullNode::instance(), a);

        assert_eq!(root.tree_size(), 3);
        assert_eq!(root.right().tree_size(), 2);
        assert_eq!(root.left().tree_size(), 0);

        let mut lines: Vec<String> = vec![];
        root.walk(&mut lines).unwrap();
        assert_eq!(lines.iter().map(String::as_str).collect_vec(), &["root", "a", "b"]);
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let node = NodeImpl::leaf("");
        assert_eq!(node.tree_size(), 1);

        let mut sink = RecordingSink::new();
        node.walk(&mut sink).unwrap();
        assert_eq!(sink.lines(), [""]);
    }
}
