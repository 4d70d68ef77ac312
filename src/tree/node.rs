use std::collections::HashMap;
use std::fmt;

/// Handle to a node inside a [`SelectionTree`](super::SelectionTree).
///
/// Ids are only minted by the tree that owns the node. Using an id with a
/// different tree panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// A named element of the selection tree.
#[derive(Debug, Clone)]
pub struct Node<P> {
    pub(crate) name: String,
    pub(crate) is_selected: bool,
    /// Parent node ID (None for the root and for detached nodes)
    pub(crate) parent: Option<NodeId>,
    /// Child IDs in insertion order
    pub(crate) children: Vec<NodeId>,
    pub(crate) child_index: HashMap<String, NodeId>,
    pub(crate) payload: Option<P>,
}

impl<P> Node<P> {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            is_selected: false,
            parent: None,
            children: Vec::new(),
            child_index: HashMap::new(),
            payload: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }
}
