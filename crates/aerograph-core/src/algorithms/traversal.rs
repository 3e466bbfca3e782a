//! Breadth-first fewest-hop search.
//!
//! BFS ignores edge weights while searching: it minimizes the number of
//! edges traversed, not their summed cost. The returned path still carries
//! a cost, recomputed from the graph afterwards, so a caller can display
//! the distance of the fewest-hop route. Fewest edges and cheapest route
//! are different questions; [`shortest_weighted_path`] answers the latter.
//!
//! [`shortest_weighted_path`]: super::shortest_weighted_path

use std::collections::VecDeque;

use aerograph_common::utils::hash::FxHashMap;
use aerograph_common::{Error, NodeKey, Result};
use tracing::debug;

use super::traits::{Control, TraversalEvent};
use super::{RoutePath, recompute_cost};
use crate::graph::RouteGraph;

/// Finds a path from `source` to `target` with the fewest edges.
///
/// Ties between equal-hop-count paths are broken by neighbor declaration
/// order, which the graph store keeps deterministic. Returns `Ok(None)`
/// when `target` is unreachable from `source`.
///
/// Runs in O(V + E).
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if `source` or `target` is not in the
/// graph.
pub fn shortest_hop_path<N: NodeKey, A>(
    graph: &RouteGraph<N, A>,
    source: &N,
    target: &N,
) -> Result<Option<RoutePath<N>>> {
    shortest_hop_path_with_visitor(graph, source, target, |_| Control::Continue)
}

/// [`shortest_hop_path`] with a visitor receiving a
/// [`TraversalEvent::Discover`] for every first visit.
///
/// Returning [`Control::Break`] abandons the search; the query then
/// reports no path.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if `source` or `target` is not in the
/// graph.
pub fn shortest_hop_path_with_visitor<N: NodeKey, A, F>(
    graph: &RouteGraph<N, A>,
    source: &N,
    target: &N,
    mut visitor: F,
) -> Result<Option<RoutePath<N>>>
where
    F: FnMut(TraversalEvent<'_, N>) -> Control,
{
    if !graph.contains(source) {
        return Err(Error::unknown_node(source));
    }
    if !graph.contains(target) {
        return Err(Error::unknown_node(target));
    }

    // First-visit-wins parent map; the source's parent is None.
    let mut parents: FxHashMap<N, Option<N>> = FxHashMap::default();
    parents.insert(source.clone(), None);

    if visitor(TraversalEvent::Discover {
        node: source,
        parent: None,
    }) == Control::Break
    {
        return Ok(None);
    }

    let mut queue = VecDeque::new();
    queue.push_back(source.clone());

    while let Some(current) = queue.pop_front() {
        if current == *target {
            let nodes = reconstruct(&parents, &current);
            let cost = recompute_cost(graph, &nodes);
            debug!(hops = nodes.len() - 1, cost, "bfs path found");
            return Ok(Some(RoutePath { nodes, cost }));
        }

        for (neighbor, _) in graph.neighbors(&current)? {
            if parents.contains_key(neighbor) {
                continue;
            }
            parents.insert(neighbor.clone(), Some(current.clone()));
            if visitor(TraversalEvent::Discover {
                node: neighbor,
                parent: Some(&current),
            }) == Control::Break
            {
                return Ok(None);
            }
            queue.push_back(neighbor.clone());
        }
    }

    debug!("bfs target unreachable");
    Ok(None)
}

/// Walks the parent map from `last` back to the source and reverses.
fn reconstruct<N: NodeKey>(parents: &FxHashMap<N, Option<N>>, last: &N) -> Vec<N> {
    let mut nodes = vec![last.clone()];
    let mut current = last;
    while let Some(Some(parent)) = parents.get(current) {
        nodes.push(parent.clone());
        current = parent;
    }
    nodes.reverse();
    nodes
}
