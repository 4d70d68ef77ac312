//! In-memory tree of named nodes with cascading multi-select.
//!
//! All nodes live in an arena owned by [`SelectionTree`]; parent links are
//! plain [`NodeId`]s used only for walking upwards.

pub mod navigation;
pub mod node;
pub mod selection;

pub use node::{Node, NodeId};

use crate::error::{Result, TreeError};

#[derive(Debug, Clone)]
pub struct SelectionTree<P> {
    /// All nodes indexed by ID
    nodes: Vec<Node<P>>,
    root_id: NodeId,
}

impl<P> SelectionTree<P> {
    /// Create a tree containing only a root node with the given name
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(root_name.into())],
            root_id: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root_id
    }

    /// Number of nodes in the arena, attached or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by ID
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn node(&self, id: NodeId) -> &Node<P> {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<P> {
        &mut self.nodes[id.0]
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.node(id).is_selected
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Direct children in insertion order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Create a detached node. It joins the tree once passed to [`add_child`](Self::add_child).
    pub fn create_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name.into()));
        id
    }

    /// Attach `child` under `parent`.
    ///
    /// Returns `false` without changing anything when `parent` already has a
    /// child with the same name, when `child` is already attached somewhere,
    /// or when attaching would create a cycle.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let child_name = self.node(child).name.clone();

        if self.node(parent).child_index.contains_key(&child_name) {
            log::debug!(
                "Ignoring duplicate child '{}' under '{}'",
                child_name,
                self.name(parent)
            );
            return false;
        }

        if self.node(child).parent.is_some() {
            log::debug!("Refusing to re-parent already attached node '{child_name}'");
            return false;
        }

        if self.is_ancestor_or_self(child, parent) {
            log::debug!(
                "Refusing to attach '{}' under its own descendant '{}'",
                child_name,
                self.name(parent)
            );
            return false;
        }

        self.attach_unchecked(parent, child, child_name);
        true
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);

        while let Some(node_id) = current {
            if node_id == candidate {
                return true;
            }
            current = self.parent(node_id);
        }

        false
    }

    /// Link a detached `child` under `parent` whose name is known to be free
    fn attach_unchecked(&mut self, parent: NodeId, child: NodeId, child_name: String) {
        self.node_mut(child).parent = Some(parent);
        let parent_node = self.node_mut(parent);
        parent_node.children.push(child);
        parent_node.child_index.insert(child_name, child);
    }

    /// Return the named child of `parent`, creating and attaching it if absent
    pub fn insert_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        if let Some(existing) = self.get_child(parent, name) {
            return existing;
        }
        let child = self.create_node(name);
        self.attach_unchecked(parent, child, name.to_string());
        child
    }

    pub fn get_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent).child_index.get(name).copied()
    }

    /// Like [`get_child`](Self::get_child), but a missing child is an error
    pub fn require_child(&self, parent: NodeId, name: &str) -> Result<NodeId> {
        self.get_child(parent, name)
            .ok_or_else(|| TreeError::ChildNotFound {
                parent: self.name(parent).to_string(),
                name: name.to_string(),
            })
    }

    pub fn payload(&self, id: NodeId) -> Option<&P> {
        self.node(id).payload.as_ref()
    }

    pub fn set_payload(&mut self, id: NodeId, payload: P) {
        self.node_mut(id).payload = Some(payload);
    }

    pub fn payload_mut(&mut self, id: NodeId) -> Option<&mut P> {
        self.node_mut(id).payload.as_mut()
    }

    pub fn take_payload(&mut self, id: NodeId) -> Option<P> {
        self.node_mut(id).payload.take()
    }
}
