//! Selection model behind a hierarchical catalog picker.
//!
//! A [`SelectionTree`] holds named nodes with cascading multi-select:
//! selecting a node clears every selection below it, so the set returned by
//! [`SelectionTree::selected_descendants`] never contains both a node and one
//! of its descendants.

pub mod browser_object;
pub mod config;
pub mod demo_data;
pub mod error;
pub mod listing;
pub mod logging;
pub mod node_utils;
pub mod ops;
pub mod shared;
pub mod tree;

pub use browser_object::BrowserObject;
pub use error::{Result, TreeError};
pub use listing::CatalogTree;
pub use ops::{PickAction, PickOp};
pub use shared::SharedSelectionTree;
pub use tree::{Node, NodeId, SelectionTree};
