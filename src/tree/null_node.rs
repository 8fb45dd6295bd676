//! The null node: a neutral [Node] that terminates every branch of a tree.

use super::{Node, NodeRef};
use crate::{LineSink, NullObjectError};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::trace;

static INSTANCE: Lazy<NodeRef> = Lazy::new(|| {
    trace!("Initializing the shared null node");
    let node: NodeRef = Arc::new(NullNode { _private: () });
    node
});

/// Sentinel that stands in for a missing child.
///
/// There is exactly one instance per process, obtained with [NullNode::instance]. It
/// cannot be constructed elsewhere, so identity comparison ([is_null_node]) is reliable.
#[derive(Debug)]
pub struct NullNode {
    _private: (),
}

impl NullNode {
    /// Handle to the shared instance.
    pub fn instance() -> NodeRef {
        Arc::clone(Self::instance_ref())
    }

    /// Borrow of the shared instance. Does not touch the reference count.
    pub fn instance_ref() -> &'static NodeRef {
        &INSTANCE
    }
}

impl Node for NullNode {
    fn name(&self) -> &str {
        ""
    }

    fn left(&self) -> &NodeRef {
        Self::instance_ref()
    }

    fn right(&self) -> &NodeRef {
        Self::instance_ref()
    }

    fn tree_size(&self) -> usize {
        0
    }

    fn walk(&self, _sink: &mut dyn LineSink) -> Result<(), NullObjectError> {
        Ok(())
    }
}

/// Whether `node` is the shared null node.
///
/// Traversals do not need this; it exists for callers that want to inspect a tree's shape.
pub fn is_null_node(node: &NodeRef) -> bool {
    Arc::ptr_eq(node, NullNode::instance_ref())
}
