//! TreeWalker - bounded depth-first walk over a category subtree

use tracing::debug;

use crate::error::Result;
use crate::model::Category;
use crate::store::CategoryStore;

use super::config::WalkerConfig;
use super::visitor::{CategoryVisitor, FnVisitor};

/// Walks a category subtree depth-first, visiting each parent before its
/// children. Children are visited in the order the store returns them.
///
/// There is no cycle detection. A cyclic parent chain in the store only
/// terminates when the walk is bounded by `max_depth`.
pub struct TreeWalker<'a, S: CategoryStore + ?Sized> {
    store: &'a S,
    config: WalkerConfig,
}

impl<'a, S: CategoryStore + ?Sized> TreeWalker<'a, S> {
    pub fn new(store: &'a S, config: WalkerConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk the subtree under `root` (depth 0). Returns the number of visited
    /// categories.
    pub fn walk<V: CategoryVisitor + ?Sized>(&self, root: &Category, visitor: &mut V) -> Result<usize> {
        debug!(
            "Walking category tree from '{}' (max depth {:?})",
            root.name, self.config.max_depth
        );
        let visited = self.walk_from(root, visitor, 0)?;
        debug!("Visited {} categories under '{}'", visited, root.name);
        Ok(visited)
    }

    /// Walk with a closure as the visitor.
    pub fn walk_fn<F>(&self, root: &Category, f: F) -> Result<usize>
    where
        F: FnMut(&Category, usize) -> Result<()>,
    {
        self.walk(root, &mut FnVisitor(f))
    }

    fn walk_from<V: CategoryVisitor + ?Sized>(
        &self,
        category: &Category,
        visitor: &mut V,
        depth: usize,
    ) -> Result<usize> {
        if self.config.exceeds_max_depth(depth) {
            return Ok(0);
        }

        visitor.visit(category, depth)?;

        let mut visited = 1;
        for child in self.store.list_children(category.id)? {
            visited += self.walk_from(&child, visitor, depth + 1)?;
        }
        Ok(visited)
    }
}
