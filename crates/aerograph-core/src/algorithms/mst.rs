//! Kruskal minimum spanning tree / forest.
//!
//! Edges are scanned in ascending weight order and accepted whenever they
//! join two different [`UnionFind`] sets. On a connected graph the result
//! spans every node with `node_count - 1` edges; on a disconnected graph
//! the scan exhausts the edge list and yields a minimum spanning forest,
//! which [`MstResult::is_spanning_tree`] distinguishes.
//!
//! Weight ties are broken by endpoint order, so the accepted edge set is
//! reproducible for a given graph. Different declaration of tied edges may
//! legitimately produce a different edge set with the same total weight.

use std::cmp::Ordering;

use aerograph_common::utils::hash::FxIndexMap;
use aerograph_common::{Error, NodeKey, Result};
use tracing::{debug, trace};

use super::traits::{Control, TraversalEvent};
use super::traversal::shortest_hop_path;
use super::union_find::UnionFind;
use super::RoutePath;
use crate::graph::RouteGraph;

/// The spanning structure produced by [`minimum_spanning_tree`].
#[derive(Debug, Clone)]
pub struct MstResult<N, A = ()> {
    /// All nodes of the input graph plus only the accepted edges.
    pub graph: RouteGraph<N, A>,
    /// Sum of the accepted edges' weights.
    pub total_weight: f64,
    /// Number of connected components (1 for a spanning tree).
    pub tree_count: usize,
}

impl<N: NodeKey, A> MstResult<N, A> {
    /// Returns `true` if the structure is a single tree spanning every
    /// node, `false` for a forest (or an empty graph).
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.tree_count == 1
    }

    /// Number of accepted edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Builds the minimum spanning tree (or forest) of the graph.
///
/// Global: no source or target is involved, and rebuilding from the same
/// graph always yields the same structure. The total weight is unique;
/// under weight ties the specific edge set is one valid choice among
/// equals.
///
/// Runs in O(E log E) dominated by the edge sort.
pub fn minimum_spanning_tree<N: NodeKey, A: Clone>(graph: &RouteGraph<N, A>) -> MstResult<N, A> {
    minimum_spanning_tree_with_visitor(graph, |_| Control::Continue)
}

/// [`minimum_spanning_tree`] with a visitor receiving a
/// [`TraversalEvent::TreeEdge`] per accepted edge.
///
/// Returning [`Control::Break`] stops the scan; the structure built so far
/// is returned, without the edge that triggered the break.
pub fn minimum_spanning_tree_with_visitor<N: NodeKey, A: Clone, F>(
    graph: &RouteGraph<N, A>,
    mut visitor: F,
) -> MstResult<N, A>
where
    F: FnMut(TraversalEvent<'_, N>) -> Control,
{
    let node_count = graph.node_count();

    let mut sorted: Vec<(&N, &N, f64)> = graph.edges().collect();
    sorted.sort_by(|x, y| {
        x.2.partial_cmp(&y.2)
            .unwrap_or(Ordering::Equal)
            .then_with(|| (x.0, x.1).cmp(&(y.0, y.1)))
    });

    let mut uf = UnionFind::new(graph.node_keys().cloned());
    let mut accepted: Vec<(N, N, f64)> = Vec::new();
    let mut total_weight = 0.0;

    for (a, b, weight) in sorted {
        // Endpoints come from the graph's own edge list; union cannot fail.
        if let Ok(true) = uf.union(a, b) {
            if visitor(TraversalEvent::TreeEdge { a, b, weight }) == Control::Break {
                break;
            }
            trace!(a = ?a, b = ?b, weight, "accepted tree edge");
            accepted.push((a.clone(), b.clone(), weight));
            total_weight += weight;

            // A spanning tree is complete; later edges only close cycles.
            if accepted.len() == node_count.saturating_sub(1) {
                break;
            }
        }
    }

    // Every accepted edge merged two components.
    let tree_count = node_count - accepted.len();
    debug!(
        edges = accepted.len(),
        total_weight, tree_count, "minimum spanning structure built"
    );

    let nodes: FxIndexMap<N, A> = graph
        .nodes()
        .map(|(key, attrs)| (key.clone(), attrs.clone()))
        .collect();
    MstResult {
        graph: RouteGraph::from_validated_parts(nodes, accepted),
        total_weight,
        tree_count,
    }
}

/// Finds the path from `source` to `target` that stays inside the minimum
/// spanning structure of the graph.
///
/// Within an acyclic component there is exactly one such path, so a hop
/// search over the structure suffices; its cost is the sum of the tree
/// edges traversed, and can only meet (never beat) the true cheapest path
/// on the full graph. Returns `Ok(None)` when the endpoints fall in
/// different components of the forest.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if `source` or `target` is not in the
/// graph.
pub fn mst_restricted_path<N: NodeKey, A: Clone>(
    graph: &RouteGraph<N, A>,
    source: &N,
    target: &N,
) -> Result<Option<RoutePath<N>>> {
    if !graph.contains(source) {
        return Err(Error::unknown_node(source));
    }
    if !graph.contains(target) {
        return Err(Error::unknown_node(target));
    }
    if source == target {
        return Ok(Some(RoutePath::trivial(source)));
    }

    let mst = minimum_spanning_tree(graph);
    shortest_hop_path(&mst.graph, source, target)
}
