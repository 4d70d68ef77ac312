//! Textual pick operations, applied to a tree by path.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TreeError};
use crate::node_utils::NodeUtils;
use crate::tree::SelectionTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickAction {
    Select,
    Deselect,
    SelectAll,
    DeselectAll,
}

impl PickAction {
    fn keyword(self) -> &'static str {
        match self {
            PickAction::Select => "select",
            PickAction::Deselect => "deselect",
            PickAction::SelectAll => "select-all",
            PickAction::DeselectAll => "deselect-all",
        }
    }
}

/// One user action, e.g. `select:sales/2024` or `select-all:` (all children of the root)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOp {
    pub action: PickAction,
    pub path: String,
}

impl FromStr for PickOp {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self> {
        let (keyword, path) = s
            .split_once(':')
            .ok_or_else(|| TreeError::InvalidOperation(format!("missing ':' in '{s}'")))?;

        let action = match keyword.trim() {
            "select" => PickAction::Select,
            "deselect" => PickAction::Deselect,
            "select-all" => PickAction::SelectAll,
            "deselect-all" => PickAction::DeselectAll,
            other => {
                return Err(TreeError::InvalidOperation(format!(
                    "unknown action '{other}'"
                )))
            }
        };

        Ok(Self {
            action,
            path: path.trim().to_string(),
        })
    }
}

impl fmt::Display for PickOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.action.keyword(), self.path)
    }
}

impl PickOp {
    pub fn apply<P>(&self, tree: &mut SelectionTree<P>, separator: &str) -> Result<()> {
        log::debug!("Applying {self}");

        match self.action {
            PickAction::Select | PickAction::Deselect => {
                let (parent_path, name) = NodeUtils::split_last(&self.path, separator)
                    .ok_or_else(|| {
                        TreeError::InvalidOperation(format!("'{self}' needs a node path"))
                    })?;
                let parent = tree.resolve_path(&parent_path, separator)?;
                let select = self.action == PickAction::Select;
                if select && tree.is_any_selected_on_path_to_root(parent) {
                    return Err(TreeError::InvalidOperation(format!(
                        "'{self}' is inside an already selected folder"
                    )));
                }
                tree.toggle_child(parent, &name, select)
            }
            PickAction::SelectAll | PickAction::DeselectAll => {
                let node = tree.resolve_path(&self.path, separator)?;
                let select = self.action == PickAction::SelectAll;
                if select && tree.is_any_selected_on_path_to_root(node) {
                    return Err(TreeError::InvalidOperation(format!(
                        "'{self}' is inside an already selected folder"
                    )));
                }
                tree.toggle_all_children(node, select);
                Ok(())
            }
        }
    }
}

/// Apply operations in order, stopping at the first failure.
///
/// `select` and `select-all` are refused below an already selected node, which keeps a node and
/// its descendants from being selected together.
pub fn apply_all<P>(tree: &mut SelectionTree<P>, ops: &[PickOp], separator: &str) -> Result<()> {
    for op in ops {
        op.apply(tree, separator)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::build_from_listing;

    #[test]
    fn test_parse_ops() {
        assert_eq!(
            "select:sales/2024".parse::<PickOp>().unwrap(),
            PickOp {
                action: PickAction::Select,
                path: "sales/2024".to_string(),
            }
        );
        assert_eq!(
            "select-all:".parse::<PickOp>().unwrap().action,
            PickAction::SelectAll
        );
        assert!("toggle:x".parse::<PickOp>().is_err());
        assert!("sales/2024".parse::<PickOp>().is_err());
    }

    #[test]
    fn test_display_roundtrips_keyword() {
        let op: PickOp = "deselect-all:hr".parse().unwrap();
        assert_eq!(op.to_string(), "deselect-all:hr");
    }

    #[test]
    fn test_apply_select_and_deselect() {
        let mut tree = build_from_listing("a/b/c\na/d", "root", "/");

        let ops: Vec<PickOp> = ["select:a/b/c", "select:a/d", "deselect:a/b/c"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        apply_all(&mut tree, &ops, "/").unwrap();

        let selected: Vec<String> = tree
            .selected_descendants(tree.root())
            .into_iter()
            .map(|id| tree.path_string(id, "/"))
            .collect();
        assert_eq!(selected, vec!["a/d"]);
    }

    #[test]
    fn test_apply_select_all_on_root() {
        let mut tree = build_from_listing("a/x\nb\nc", "root", "/");

        "select-all:".parse::<PickOp>().unwrap().apply(&mut tree, "/").unwrap();
        assert_eq!(tree.count_selected_children(tree.root()), 3);

        "deselect-all:".parse::<PickOp>().unwrap().apply(&mut tree, "/").unwrap();
        assert_eq!(tree.count_selected_descendants(tree.root()), 0);
    }

    #[test]
    fn test_select_below_selected_folder_is_refused() {
        let mut tree = build_from_listing("a/b/c", "root", "/");

        "select:a".parse::<PickOp>().unwrap().apply(&mut tree, "/").unwrap();
        let err = "select:a/b/c".parse::<PickOp>().unwrap().apply(&mut tree, "/");
        assert!(matches!(err, Err(TreeError::InvalidOperation(_))));

        let c = tree.resolve_path("a/b/c", "/").unwrap();
        assert!(!tree.is_selected(c));

        // Deselecting below a selected folder stays allowed
        "deselect:a/b".parse::<PickOp>().unwrap().apply(&mut tree, "/").unwrap();
    }

    #[test]
    fn test_apply_missing_child() {
        let mut tree = build_from_listing("a/b", "root", "/");

        let err = "select:a/zzz".parse::<PickOp>().unwrap().apply(&mut tree, "/");
        assert_eq!(
            err,
            Err(TreeError::ChildNotFound {
                parent: "a".to_string(),
                name: "zzz".to_string(),
            })
        );

        let err = "select:q/b".parse::<PickOp>().unwrap().apply(&mut tree, "/");
        assert_eq!(err, Err(TreeError::PathNotFound("q".to_string())));

        let err = "select:".parse::<PickOp>().unwrap().apply(&mut tree, "/");
        assert!(matches!(err, Err(TreeError::InvalidOperation(_))));
    }
}
