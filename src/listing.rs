//! Building a [`SelectionTree`] from a flat, path-per-line catalog listing.
//!
//! ```text
//! # comment
//! sales/2024/orders.csv
//! sales/archive/
//! ```
//!
//! A trailing separator marks an entry browsable even when nothing is listed below it.

use crate::browser_object::BrowserObject;
use crate::node_utils::NodeUtils;
use crate::tree::{NodeId, SelectionTree};

pub type CatalogTree = SelectionTree<BrowserObject>;

pub fn build_from_listing(listing: &str, root_name: &str, separator: &str) -> CatalogTree {
    build_from_paths(
        listing
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
        root_name,
        separator,
    )
}

pub fn build_from_paths<'a>(
    paths: impl IntoIterator<Item = &'a str>,
    root_name: &str,
    separator: &str,
) -> CatalogTree {
    let mut tree = SelectionTree::new(root_name);
    let root = tree.root();
    tree.set_payload(root, BrowserObject::new(root_name, "", true));

    let mut entries = 0usize;
    for path in paths {
        insert_path(&mut tree, path, separator);
        entries += 1;
    }

    log::info!(
        "Built catalog tree '{}' with {} nodes from {} entries",
        root_name,
        tree.len(),
        entries
    );
    tree
}

/// Insert every prefix of `path`, returning the node for the full path
pub fn insert_path(tree: &mut CatalogTree, path: &str, separator: &str) -> NodeId {
    let mut current = tree.root();
    let mut current_path = String::new();

    for segment in NodeUtils::split_path(path, separator) {
        let parent = current;
        NodeUtils::push_segment(&mut current_path, segment, separator);
        current = tree.insert_child(parent, segment);

        if tree.payload(current).is_none() {
            tree.set_payload(
                current,
                BrowserObject::new(segment, current_path.clone(), false),
            );
        }
        mark_browsable(tree, parent);
    }

    if path.trim_end().ends_with(separator) {
        mark_browsable(tree, current);
    }

    current
}

fn mark_browsable(tree: &mut CatalogTree, id: NodeId) {
    if let Some(object) = tree.payload_mut(id) {
        object.can_browse = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
# warehouse export
sales/2024/orders.csv
sales/2024/returns.csv

sales/archive/
hr/people.parquet
sales/2024/orders.csv
";

    #[test]
    fn test_build_from_listing_shape() {
        let tree = build_from_listing(LISTING, "warehouse", "/");
        let root = tree.root();

        let top: Vec<&str> = tree.children(root).iter().map(|id| tree.name(*id)).collect();
        assert_eq!(top, vec!["sales", "hr"]);

        let year = tree.resolve_path("sales/2024", "/").unwrap();
        assert_eq!(tree.children(year).len(), 2);
        // root + sales, 2024, orders, returns, archive, hr, people
        assert_eq!(tree.len(), 8);
    }

    #[test]
    fn test_payloads_carry_paths() {
        let tree = build_from_listing(LISTING, "warehouse", "/");

        let orders = tree.resolve_path("sales/2024/orders.csv", "/").unwrap();
        assert_eq!(
            tree.payload(orders),
            Some(&BrowserObject::new("orders.csv", "sales/2024/orders.csv", false))
        );

        let root_object = tree.payload(tree.root()).unwrap();
        assert_eq!(root_object.name, "warehouse");
        assert!(root_object.can_browse);
    }

    #[test]
    fn test_trailing_separator_marks_browsable() {
        let tree = build_from_listing(LISTING, "warehouse", "/");

        let archive = tree.resolve_path("sales/archive", "/").unwrap();
        assert!(tree.children(archive).is_empty());
        assert!(tree.payload(archive).unwrap().can_browse);

        let sales = tree.resolve_path("sales", "/").unwrap();
        assert!(tree.payload(sales).unwrap().can_browse);

        let people = tree.resolve_path("hr/people.parquet", "/").unwrap();
        assert!(!tree.payload(people).unwrap().can_browse);
    }

    #[test]
    fn test_segment_whitespace_is_kept() {
        let tree = build_from_listing("a /b\nc d/e f", "root", "/");

        let b = tree.resolve_path("a /b", "/").unwrap();
        assert_eq!(tree.payload(b).unwrap().path, "a /b");
        assert!(tree.resolve_path("a/b", "/").is_err());
        assert!(tree.resolve_path("c d/e f", "/").is_ok());
    }

    #[test]
    fn test_custom_separator() {
        let tree = build_from_paths(["db.schema.table", "db.schema.view"], "catalog", ".");

        let schema = tree.resolve_path("db.schema", ".").unwrap();
        assert_eq!(tree.children(schema).len(), 2);
        assert_eq!(tree.path_string(tree.children(schema)[1], "."), "db.schema.view");
    }
}
