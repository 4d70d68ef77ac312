use super::NodeId;
use crate::error::{Result, TreeError};
use crate::node_utils::NodeUtils;

impl<P> super::SelectionTree<P> {
    /// Nodes from the root down to `id`, inclusive
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = self.parent(id);

        while let Some(parent_id) = current {
            path.push(parent_id);
            current = self.parent(parent_id);
        }

        path.reverse();
        path
    }

    /// True if `id` or any of its ancestors is selected
    pub fn is_any_selected_on_path_to_root(&self, id: NodeId) -> bool {
        let mut current = Some(id);

        while let Some(node_id) = current {
            if self.is_selected(node_id) {
                return true;
            }
            current = self.parent(node_id);
        }

        false
    }

    /// Number of ancestors above `id`
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);

        while let Some(parent_id) = current {
            depth += 1;
            current = self.parent(parent_id);
        }

        depth
    }

    /// Names on the path below the top-most ancestor, joined with `separator`
    pub fn path_string(&self, id: NodeId, separator: &str) -> String {
        let names: Vec<&str> = self
            .path_to_root(id)
            .into_iter()
            .skip(1)
            .map(|node_id| self.name(node_id))
            .collect();
        names.join(separator)
    }

    /// Walk from the root along the segments of `path`.
    ///
    /// An empty path resolves to the root.
    pub fn resolve_path(&self, path: &str, separator: &str) -> Result<NodeId> {
        let mut current = self.root();
        let mut walked = String::new();

        for segment in NodeUtils::split_path(path, separator) {
            NodeUtils::push_segment(&mut walked, segment, separator);
            current = self
                .get_child(current, segment)
                .ok_or_else(|| TreeError::PathNotFound(walked.clone()))?;
        }

        Ok(current)
    }
}
