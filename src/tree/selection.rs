use super::NodeId;
use crate::error::Result;

impl<P> super::SelectionTree<P> {
    /// Set the selection flag of `id`.
    ///
    /// Selecting a node deselects its whole subtree. Deselecting leaves the
    /// subtree untouched.
    pub fn toggle(&mut self, id: NodeId, selected: bool) {
        self.node_mut(id).is_selected = selected;

        if selected {
            log::debug!("Selected '{}', clearing its subtree", self.name(id));
            self.deselect_subtree(id);
        }
    }

    fn deselect_subtree(&mut self, id: NodeId) {
        let mut stack = self.node(id).children.clone();

        while let Some(child) = stack.pop() {
            if self.is_selected(child) {
                log::trace!("Deselecting '{}'", self.name(child));
            }
            let node = self.node_mut(child);
            node.is_selected = false;
            stack.extend_from_slice(&node.children);
        }
    }

    /// Toggle the named child of `parent`
    pub fn toggle_child(&mut self, parent: NodeId, name: &str, selected: bool) -> Result<()> {
        let child = self.require_child(parent, name)?;
        self.toggle(child, selected);
        Ok(())
    }

    /// Toggle every direct child of `id`, each cascading into its own subtree
    pub fn toggle_all_children(&mut self, id: NodeId, selected: bool) {
        let children = self.node(id).children.clone();

        for child in children {
            self.toggle(child, selected);
        }
    }

    pub fn is_child_selected(&self, parent: NodeId, name: &str) -> Result<bool> {
        let child = self.require_child(parent, name)?;
        Ok(self.is_selected(child))
    }

    /// Count selected nodes below `id`, not counting `id` itself.
    ///
    /// Each child adds one if selected plus the count below it, even below a
    /// selected child.
    pub fn count_selected_descendants(&self, id: NodeId) -> usize {
        let mut count = 0;
        let mut pending = vec![id];

        while let Some(node_id) = pending.pop() {
            for child in self.children(node_id) {
                count += usize::from(self.is_selected(*child));
                pending.push(*child);
            }
        }

        count
    }

    pub fn count_selected_children(&self, id: NodeId) -> usize {
        self.children(id)
            .iter()
            .filter(|child| self.is_selected(**child))
            .count()
    }

    /// Selected nodes below `id`, in child order.
    ///
    /// The walk stops at a selected node and does not look into its subtree.
    pub fn selected_descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut selected = Vec::new();
        let mut pending: Vec<NodeId> = self.children(id).iter().rev().copied().collect();

        while let Some(node_id) = pending.pop() {
            if self.is_selected(node_id) {
                selected.push(node_id);
            } else {
                pending.extend(self.children(node_id).iter().rev());
            }
        }

        selected
    }

    /// Payloads of [`selected_descendants`](Self::selected_descendants), skipping nodes without one
    pub fn selected_payloads(&self, id: NodeId) -> Vec<&P> {
        self.selected_descendants(id)
            .into_iter()
            .filter_map(|node_id| self.payload(node_id))
            .collect()
    }
}
