//! Disjoint-set (union-find) structure.
//!
//! Supports Kruskal's edge-acceptance test, and is useful on its own for
//! connectivity bookkeeping. Uses full path compression and union by rank,
//! giving effectively constant amortized `find`/`union`.

use aerograph_common::utils::hash::FxHashMap;
use aerograph_common::{Error, NodeKey, Result};

/// Tracks a partition of node keys into disjoint sets.
#[derive(Debug, Clone)]
pub struct UnionFind<N> {
    parent: FxHashMap<N, N>,
    rank: FxHashMap<N, u32>,
    sets: usize,
}

impl<N: NodeKey> UnionFind<N> {
    /// Creates a partition with every node in its own singleton set.
    pub fn new(nodes: impl IntoIterator<Item = N>) -> Self {
        let parent: FxHashMap<N, N> = nodes.into_iter().map(|n| (n.clone(), n)).collect();
        let rank = parent.keys().map(|n| (n.clone(), 0)).collect();
        let sets = parent.len();
        Self { parent, rank, sets }
    }

    /// Number of elements tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative of the set containing `x`, compressing
    /// the path: every node visited on the way is re-pointed directly at
    /// the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `x` was not given to [`new`](Self::new).
    pub fn find(&mut self, x: &N) -> Result<N> {
        if !self.parent.contains_key(x) {
            return Err(Error::unknown_node(x));
        }

        let mut root = x.clone();
        while let Some(parent) = self.parent.get(&root) {
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        // Second pass: re-point the whole find-path at the root.
        let mut current = x.clone();
        while current != root {
            let next = self
                .parent
                .insert(current, root.clone())
                .unwrap_or_else(|| root.clone());
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `true` if a merge happened, `false` if they were already in
    /// the same set. The lower-rank root is attached under the higher-rank
    /// root; on equal ranks the surviving root's rank increments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either key was not given to
    /// [`new`](Self::new).
    pub fn union(&mut self, x: &N, y: &N) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(false);
        }

        let rank_x = self.rank.get(&root_x).copied().unwrap_or(0);
        let rank_y = self.rank.get(&root_y).copied().unwrap_or(0);

        match rank_x.cmp(&rank_y) {
            std::cmp::Ordering::Less => {
                self.parent.insert(root_x, root_y);
            }
            std::cmp::Ordering::Greater => {
                self.parent.insert(root_y, root_x);
            }
            std::cmp::Ordering::Equal => {
                self.parent.insert(root_y, root_x.clone());
                self.rank.insert(root_x, rank_x + 1);
            }
        }

        self.sets -= 1;
        Ok(true)
    }

    /// Returns `true` if `x` and `y` are currently in the same set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either key was not given to
    /// [`new`](Self::new).
    pub fn connected(&mut self, x: &N, y: &N) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }
}
