//! Dijkstra single-source cheapest-route search.
//!
//! Standard priority-queue relaxation with two standing simplifications:
//! the distance map stores only discovered nodes, so "infinity" is absence
//! rather than a numeric value, and the heap tolerates stale duplicate
//! entries, which get skipped on pop instead of being removed on update.
//! Both lean on the graph's non-negative-weight contract, as does the
//! early exit when the target is popped.

use std::collections::BinaryHeap;

use aerograph_common::utils::hash::FxHashMap;
use aerograph_common::{Error, NodeKey, Result};
use tracing::{debug, trace};

use super::traits::{Control, MinScored, TraversalEvent};
use super::RoutePath;
use crate::graph::RouteGraph;

/// Finds the minimum-total-weight path from `source` to `target`.
///
/// Returns the path together with its cost in [`RoutePath::cost`], or
/// `Ok(None)` when `target` is unreachable. Never reports a numeric
/// infinity.
///
/// Runs in O((V + E) log V).
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if `source` or `target` is not in the
/// graph.
pub fn shortest_weighted_path<N: NodeKey, A>(
    graph: &RouteGraph<N, A>,
    source: &N,
    target: &N,
) -> Result<Option<RoutePath<N>>> {
    shortest_weighted_path_with_visitor(graph, source, target, |_| Control::Continue)
}

/// [`shortest_weighted_path`] with a visitor receiving a
/// [`TraversalEvent::Settle`] per finalized node and a
/// [`TraversalEvent::EdgeRelaxed`] per improved tentative distance.
///
/// Returning [`Control::Break`] abandons the search; the query then
/// reports no path.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if `source` or `target` is not in the
/// graph.
pub fn shortest_weighted_path_with_visitor<N: NodeKey, A, F>(
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

    // Absence from `dist` is the infinity sentinel.
    let mut dist: FxHashMap<N, f64> = FxHashMap::default();
    let mut parents: FxHashMap<N, N> = FxHashMap::default();
    dist.insert(source.clone(), 0.0);

    let mut heap = BinaryHeap::new();
    heap.push(MinScored(0.0, source.clone()));

    while let Some(MinScored(current_dist, current)) = heap.pop() {
        // Stale duplicate: a cheaper entry for this node was already popped.
        if dist.get(&current).is_some_and(|&best| current_dist > best) {
            continue;
        }

        if visitor(TraversalEvent::Settle {
            node: &current,
            distance: current_dist,
        }) == Control::Break
        {
            return Ok(None);
        }

        // Non-negative weights: nothing can improve on the popped target.
        if current == *target {
            break;
        }

        for (neighbor, weight) in graph.neighbors(&current)? {
            let candidate = current_dist + weight;
            let improved = dist.get(neighbor).is_none_or(|&best| candidate < best);
            if !improved {
                continue;
            }

            dist.insert(neighbor.clone(), candidate);
            parents.insert(neighbor.clone(), current.clone());
            trace!(
                from = ?current,
                to = ?neighbor,
                weight,
                distance = candidate,
                "relaxed edge"
            );
            if visitor(TraversalEvent::EdgeRelaxed {
                from: &current,
                to: neighbor,
                weight,
                distance: candidate,
            }) == Control::Break
            {
                return Ok(None);
            }
            heap.push(MinScored(candidate, neighbor.clone()));
        }
    }

    let Some(&cost) = dist.get(target) else {
        debug!("dijkstra target unreachable");
        return Ok(None);
    };

    let mut nodes = vec![target.clone()];
    let mut current = target;
    while let Some(parent) = parents.get(current) {
        nodes.push(parent.clone());
        current = parent;
    }
    nodes.reverse();

    debug!(hops = nodes.len() - 1, cost, "dijkstra path found");
    Ok(Some(RoutePath { nodes, cost }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> RouteGraph<&'static str> {
        let mut builder = RouteGraph::builder();
        builder.node("A", ());
        builder.node("B", ());
        builder.node("C", ());
        builder.edge("A", "B", 5.0);
        builder.edge("B", "C", 3.0);
        builder.edge("A", "C", 10.0);
        builder.build().unwrap()
    }

    #[test]
    fn test_dijkstra_picks_cheapest_route() {
        let g = triangle();
        let path = shortest_weighted_path(&g, &"A", &"C").unwrap().unwrap();
        assert_eq!(path.nodes, vec!["A", "B", "C"]);
        assert_eq!(path.cost, 8.0);
    }

    #[test]
    fn test_dijkstra_direct_edge_when_cheaper() {
        let mut builder = RouteGraph::builder();
        builder.node("A", ());
        builder.node("B", ());
        builder.node("C", ());
        builder.edge("A", "B", 5.0);
        builder.edge("B", "C", 3.0);
        builder.edge("A", "C", 6.0);
        let g = builder.build().unwrap();

        let path = shortest_weighted_path(&g, &"A", &"C").unwrap().unwrap();
        assert_eq!(path.nodes, vec!["A", "C"]);
        assert_eq!(path.cost, 6.0);
    }

    #[test]
    fn test_dijkstra_trivial_path() {
        let g = triangle();
        let path = shortest_weighted_path(&g, &"A", &"A").unwrap().unwrap();
        assert_eq!(path.nodes, vec!["A"]);
        assert_eq!(path.cost, 0.0);
        assert!(path.is_trivial());
    }

    #[test]
    fn test_dijkstra_unreachable_is_none() {
        let mut builder = RouteGraph::builder();
        builder.node("A", ());
        builder.node("B", ());
        builder.node("C", ());
        builder.edge("A", "B", 1.0);
        let g = builder.build().unwrap();

        assert_eq!(shortest_weighted_path(&g, &"A", &"C").unwrap(), None);
    }

    #[test]
    fn test_dijkstra_unknown_node() {
        let g = triangle();
        assert!(matches!(
            shortest_weighted_path(&g, &"Z", &"A"),
            Err(Error::UnknownNode(_))
        ));
        assert!(matches!(
            shortest_weighted_path(&g, &"A", &"Z"),
            Err(Error::UnknownNode(_))
        ));
    }

    #[test]
    fn test_dijkstra_revises_tentative_distance() {
        // D is first reached expensively via B, then cheaply via C.
        let mut builder = RouteGraph::builder();
        builder.node("A", ());
        builder.node("B", ());
        builder.node("C", ());
        builder.node("D", ());
        builder.edge("A", "B", 1.0);
        builder.edge("B", "D", 10.0);
        builder.edge("A", "C", 2.0);
        builder.edge("C", "D", 2.0);
        let g = builder.build().unwrap();

        let path = shortest_weighted_path(&g, &"A", &"D").unwrap().unwrap();
        assert_eq!(path.nodes, vec!["A", "C", "D"]);
        assert_eq!(path.cost, 4.0);
    }

    #[test]
    fn test_dijkstra_zero_weight_edges() {
        let mut builder = RouteGraph::builder();
        builder.node(1u64, ());
        builder.node(2u64, ());
        builder.node(3u64, ());
        builder.edge(1, 2, 0.0);
        builder.edge(2, 3, 0.0);
        let g = builder.build().unwrap();

        let path = shortest_weighted_path(&g, &1, &3).unwrap().unwrap();
        assert_eq!(path.cost, 0.0);
        assert_eq!(path.nodes, vec![1, 2, 3]);
    }

    #[test]
    fn test_dijkstra_visitor_sees_relaxations() {
        let g = triangle();
        let mut relaxed = Vec::new();
        shortest_weighted_path_with_visitor(&g, &"A", &"C", |event| {
            if let TraversalEvent::EdgeRelaxed { from, to, .. } = event {
                relaxed.push((*from, *to));
            }
            Control::Continue
        })
        .unwrap();

        // A's edges relax first; B-C then improves on the direct A-C.
        assert_eq!(relaxed, vec![("A", "B"), ("A", "C"), ("B", "C")]);
    }

    #[test]
    fn test_dijkstra_visitor_break_abandons_search() {
        let g = triangle();
        let result =
            shortest_weighted_path_with_visitor(&g, &"A", &"C", |_| Control::Break).unwrap();
        assert_eq!(result, None);
    }
}
