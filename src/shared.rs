use parking_lot::Mutex;
use std::sync::Arc;

use crate::tree::SelectionTree;

/// Cloneable handle for callers that share one tree between threads.
///
/// Every access goes through the lock, so mutations are serialized.
#[derive(Debug)]
pub struct SharedSelectionTree<P> {
    inner: Arc<Mutex<SelectionTree<P>>>,
}

impl<P> Clone for SharedSelectionTree<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> SharedSelectionTree<P> {
    pub fn new(tree: SelectionTree<P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tree)),
        }
    }

    /// Run `f` with exclusive access to the tree
    pub fn with<R>(&self, f: impl FnOnce(&mut SelectionTree<P>) -> R) -> R {
        let mut tree = self.inner.lock();
        f(&mut tree)
    }

    /// Recover the tree if this is the last handle
    pub fn try_into_inner(self) -> Result<SelectionTree<P>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<P> From<SelectionTree<P>> for SharedSelectionTree<P> {
    fn from(tree: SelectionTree<P>) -> Self {
        Self::new(tree)
    }
}
