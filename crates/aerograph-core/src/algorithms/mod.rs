//! Connectivity algorithms for route graphs.
//!
//! Three engines, one supporting structure:
//!
//! - [`traversal`] - BFS fewest-hop search
//! - [`shortest_path`] - Dijkstra cheapest-route search
//! - [`union_find`] - disjoint-set bookkeeping for Kruskal
//! - [`mst`] - Kruskal minimum spanning tree / forest
//!
//! Each query runs to completion synchronously over an immutable
//! [`RouteGraph`](crate::graph::RouteGraph). "No path exists" is a normal
//! outcome (`Ok(None)`), distinct from referencing a node the graph does
//! not have (`Err(UnknownNode)`).
//!
//! ## Usage
//!
//! ```rust
//! use aerograph_core::{RouteGraph, algorithms};
//!
//! let mut builder = RouteGraph::builder();
//! builder.node("A", ());
//! builder.node("B", ());
//! builder.edge("A", "B", 5.0);
//! let graph = builder.build()?;
//!
//! let hops = algorithms::shortest_hop_path(&graph, &"A", &"B")?;
//! let cheapest = algorithms::shortest_weighted_path(&graph, &"A", &"B")?;
//! let mst = algorithms::minimum_spanning_tree(&graph);
//! assert_eq!(mst.total_weight, 5.0);
//! # Ok::<(), aerograph_common::Error>(())
//! ```

mod mst;
mod shortest_path;
mod traits;
mod traversal;
mod union_find;

pub use mst::{
    MstResult, minimum_spanning_tree, minimum_spanning_tree_with_visitor, mst_restricted_path,
};
pub use shortest_path::{shortest_weighted_path, shortest_weighted_path_with_visitor};
pub use traits::{Control, MinScored, TraversalEvent};
pub use traversal::{shortest_hop_path, shortest_hop_path_with_visitor};
pub use union_find::UnionFind;

use aerograph_common::NodeKey;
use serde::{Deserialize, Serialize};

use crate::graph::{DEFAULT_EDGE_WEIGHT, RouteGraph};

/// A route through the graph: at least one node, each consecutive pair
/// joined by an edge of the graph it was computed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath<N> {
    /// Node sequence from source to target inclusive.
    pub nodes: Vec<N>,
    /// Sum of the weights of the edges traversed.
    pub cost: f64,
}

impl<N> RoutePath<N> {
    /// Number of edges traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Returns `true` for the single-node path returned when source equals
    /// target.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }
}

impl<N: NodeKey> RoutePath<N> {
    /// The trivial path from a node to itself.
    pub(crate) fn trivial(node: &N) -> Self {
        Self {
            nodes: vec![node.clone()],
            cost: 0.0,
        }
    }
}

/// Sums the edge weights along a node sequence, reading weights back from
/// the graph rather than trusting any search-internal tally.
///
/// Pairs without a stored weight count as [`DEFAULT_EDGE_WEIGHT`]; valid
/// paths never contain such pairs, the fallback just mirrors how the
/// unweighted-graph case is costed.
pub(crate) fn recompute_cost<N: NodeKey, A>(graph: &RouteGraph<N, A>, nodes: &[N]) -> f64 {
    nodes
        .windows(2)
        .map(|pair| {
            graph
                .weight_between(&pair[0], &pair[1])
                .unwrap_or(DEFAULT_EDGE_WEIGHT)
        })
        .sum()
}
