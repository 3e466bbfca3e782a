//! The route graph store.
//!
//! [`RouteGraph`] is an in-memory weighted undirected simple graph, built
//! once per dataset load and read-only afterwards. Nodes carry an opaque
//! attribute payload the algorithms never inspect; edges carry a
//! non-negative finite weight (a great-circle distance in the origin
//! domain, an abstract cost here).
//!
//! Enumeration order is part of the observable contract: nodes iterate in
//! declaration order and neighbors in edge-declaration order, so tie-breaks
//! in the algorithms are reproducible across runs.

use aerograph_common::utils::hash::FxIndexMap;
use aerograph_common::{Error, NodeKey, Result};
use smallvec::SmallVec;

/// Weight assigned to edges declared without one.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Per-node adjacency entries: (neighbor, weight).
type AdjacencyList<N> = SmallVec<[(N, f64); 4]>;

/// An immutable weighted undirected simple graph.
///
/// Construct via [`RouteGraph::builder`]. There is no mutation API:
/// reloading a dataset means building a new value, so concurrent readers
/// can never observe a partially updated graph.
#[derive(Debug, Clone)]
pub struct RouteGraph<N, A = ()> {
    /// Node attributes, in declaration order.
    nodes: FxIndexMap<N, A>,
    /// Adjacency lists, one entry per node (possibly empty).
    adjacency: FxIndexMap<N, AdjacencyList<N>>,
    /// Each undirected edge once, in declaration order.
    edges: Vec<(N, N, f64)>,
}

impl<N: NodeKey, A> RouteGraph<N, A> {
    /// Returns a builder for assembling a graph.
    #[must_use]
    pub fn builder() -> GraphBuilder<N, A> {
        GraphBuilder::new()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `key` names a node of this graph.
    pub fn contains(&self, key: &N) -> bool {
        self.nodes.contains_key(key)
    }

    /// Iterates over `(key, attributes)` pairs in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = (&N, &A)> {
        self.nodes.iter()
    }

    /// Iterates over node keys in declaration order.
    pub fn node_keys(&self) -> impl Iterator<Item = &N> {
        self.nodes.keys()
    }

    /// Returns the attributes of a node, if present.
    pub fn attrs(&self, key: &N) -> Option<&A> {
        self.nodes.get(key)
    }

    /// Iterates over a node's neighbors as `(neighbor, weight)` pairs, in
    /// edge-declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `key` is not a node of this graph.
    pub fn neighbors(&self, key: &N) -> Result<impl Iterator<Item = (&N, f64)>> {
        self.adjacency
            .get(key)
            .map(|list| list.iter().map(|(n, w)| (n, *w)))
            .ok_or_else(|| Error::unknown_node(key))
    }

    /// Looks up the weight of the edge between `a` and `b` (symmetric).
    ///
    /// Returns `Ok(None)` when both nodes exist but no edge connects them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either endpoint is absent.
    pub fn edge_weight(&self, a: &N, b: &N) -> Result<Option<f64>> {
        if !self.contains(b) {
            return Err(Error::unknown_node(b));
        }
        let list = self
            .adjacency
            .get(a)
            .ok_or_else(|| Error::unknown_node(a))?;
        Ok(list.iter().find(|(n, _)| n == b).map(|(_, w)| *w))
    }

    /// Iterates over each undirected edge once as `(a, b, weight)`, in
    /// declaration order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, f64)> {
        self.edges.iter().map(|(a, b, w)| (a, b, *w))
    }

    /// Edge weight lookup that treats absent nodes as absent edges.
    ///
    /// Internal: callers that walk adjacency-derived paths already know the
    /// endpoints exist.
    pub(crate) fn weight_between(&self, a: &N, b: &N) -> Option<f64> {
        self.adjacency
            .get(a)
            .and_then(|list| list.iter().find(|(n, _)| n == b))
            .map(|(_, w)| *w)
    }

    /// Assembles a graph from parts already validated by a builder or an
    /// algorithm that only emits known nodes and accepted edges.
    pub(crate) fn from_validated_parts(nodes: FxIndexMap<N, A>, edges: Vec<(N, N, f64)>) -> Self {
        let mut adjacency: FxIndexMap<N, AdjacencyList<N>> = nodes
            .keys()
            .map(|key| (key.clone(), AdjacencyList::new()))
            .collect();
        for (a, b, w) in &edges {
            if let Some(list) = adjacency.get_mut(a) {
                list.push((b.clone(), *w));
            }
            if let Some(list) = adjacency.get_mut(b) {
                list.push((a.clone(), *w));
            }
        }
        Self {
            nodes,
            adjacency,
            edges,
        }
    }
}

/// Builder for [`RouteGraph`].
///
/// Collects node and edge declarations, then validates everything at once
/// in [`build`](GraphBuilder::build). Validation is atomic: any invalid
/// edge fails the whole build, and no partially constructed graph escapes.
#[derive(Debug)]
pub struct GraphBuilder<N, A = ()> {
    nodes: FxIndexMap<N, A>,
    edges: Vec<(N, N, Option<f64>)>,
}

impl<N: NodeKey, A> GraphBuilder<N, A> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: FxIndexMap::default(),
            edges: Vec::new(),
        }
    }

    /// Declares a node. Re-declaring a key replaces its attributes.
    pub fn node(&mut self, key: N, attrs: A) -> &mut Self {
        self.nodes.insert(key, attrs);
        self
    }

    /// Declares a weighted undirected edge.
    pub fn edge(&mut self, a: N, b: N, weight: f64) -> &mut Self {
        self.edges.push((a, b, Some(weight)));
        self
    }

    /// Declares an undirected edge with the default weight of
    /// [`DEFAULT_EDGE_WEIGHT`].
    pub fn edge_unweighted(&mut self, a: N, b: N) -> &mut Self {
        self.edges.push((a, b, None));
        self
    }

    /// Validates the declarations and builds the graph.
    ///
    /// Policy choices, all deliberate:
    /// - an edge endpoint that was never declared as a node rejects the
    ///   build (rather than being silently dropped);
    /// - self-loops are rejected;
    /// - a negative, NaN, or infinite weight is rejected;
    /// - re-declaring an edge between the same pair replaces its weight,
    ///   keeping the pair's original position in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEdge`] describing the first offending edge.
    pub fn build(self) -> Result<RouteGraph<N, A>> {
        let mut edges: FxIndexMap<(N, N), f64> = FxIndexMap::default();
        for (a, b, weight) in self.edges {
            if !self.nodes.contains_key(&a) {
                return Err(Error::invalid_edge(&a, &b, "endpoint is not a node"));
            }
            if !self.nodes.contains_key(&b) {
                return Err(Error::invalid_edge(&a, &b, "endpoint is not a node"));
            }
            if a == b {
                return Err(Error::invalid_edge(&a, &b, "self-loop"));
            }
            let weight = weight.unwrap_or(DEFAULT_EDGE_WEIGHT);
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::invalid_edge(&a, &b, "weight must be non-negative and finite"));
            }
            // Canonical endpoint order so both declaration directions hit
            // the same entry.
            let pair = if a <= b { (a, b) } else { (b, a) };
            edges.insert(pair, weight);
        }

        let edges = edges.into_iter().map(|((a, b), w)| (a, b, w)).collect();
        Ok(RouteGraph::from_validated_parts(self.nodes, edges))
    }
}

impl<N: NodeKey, A> Default for GraphBuilder<N, A> {
    fn default() -> Self {
        Self::new()
    }
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
    fn test_counts() {
        let g = triangle();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert!(!g.is_empty());
    }

    #[test]
    fn test_neighbor_order_is_declaration_order() {
        let g = triangle();
        let neighbors: Vec<_> = g.neighbors(&"A").unwrap().map(|(n, _)| *n).collect();
        assert_eq!(neighbors, vec!["B", "C"]);
    }

    #[test]
    fn test_edge_weight_is_symmetric() {
        let g = triangle();
        assert_eq!(g.edge_weight(&"A", &"B").unwrap(), Some(5.0));
        assert_eq!(g.edge_weight(&"B", &"A").unwrap(), Some(5.0));
        assert_eq!(g.edge_weight(&"B", &"C").unwrap(), Some(3.0));
    }

    #[test]
    fn test_edge_weight_absent_edge() {
        let mut builder = RouteGraph::builder();
        builder.node("A", ());
        builder.node("B", ());
        let g = builder.build().unwrap();
        assert_eq!(g.edge_weight(&"A", &"B").unwrap(), None);
    }

    #[test]
    fn test_unknown_node_errors() {
        let g = triangle();
        assert!(matches!(g.neighbors(&"Z"), Err(Error::UnknownNode(_))));
        assert!(matches!(
            g.edge_weight(&"Z", &"A"),
            Err(Error::UnknownNode(_))
        ));
        assert!(matches!(
            g.edge_weight(&"A", &"Z"),
            Err(Error::UnknownNode(_))
        ));
    }

    #[test]
    fn test_build_rejects_missing_endpoint() {
        let mut builder = RouteGraph::builder();
        builder.node("A", ());
        builder.edge("A", "B", 1.0);
        assert!(matches!(builder.build(), Err(Error::InvalidEdge(_))));
    }

    #[test]
    fn test_build_rejects_self_loop() {
        let mut builder = RouteGraph::builder();
        builder.node("A", ());
        builder.edge("A", "A", 1.0);
        assert!(matches!(builder.build(), Err(Error::InvalidEdge(_))));
    }

    #[test]
    fn test_build_rejects_bad_weight() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let mut builder = RouteGraph::builder();
            builder.node(1u64, ());
            builder.node(2u64, ());
            builder.edge(1, 2, bad);
            assert!(matches!(builder.build(), Err(Error::InvalidEdge(_))));
        }
    }

    #[test]
    fn test_duplicate_edge_replaces_weight() {
        let mut builder = RouteGraph::builder();
        builder.node("A", ());
        builder.node("B", ());
        builder.edge("A", "B", 5.0);
        builder.edge("B", "A", 7.0);
        let g = builder.build().unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge_weight(&"A", &"B").unwrap(), Some(7.0));
    }

    #[test]
    fn test_unweighted_edge_defaults() {
        let mut builder = RouteGraph::builder();
        builder.node("A", ());
        builder.node("B", ());
        builder.edge_unweighted("A", "B");
        let g = builder.build().unwrap();
        assert_eq!(g.edge_weight(&"A", &"B").unwrap(), Some(DEFAULT_EDGE_WEIGHT));
    }

    #[test]
    fn test_isolated_node_has_empty_neighbors() {
        let mut builder = RouteGraph::<&str>::builder();
        builder.node("A", ());
        let g = builder.build().unwrap();
        assert_eq!(g.neighbors(&"A").unwrap().count(), 0);
    }

    #[test]
    fn test_attrs_are_opaque_payloads() {
        let mut builder = RouteGraph::builder();
        builder.node(1u64, "Guarulhos");
        builder.node(2u64, "Galeao");
        builder.edge(1, 2, 340.0);
        let g = builder.build().unwrap();
        assert_eq!(g.attrs(&1), Some(&"Guarulhos"));
        assert_eq!(g.attrs(&3), None);
    }

    #[test]
    fn test_edges_enumerates_each_edge_once() {
        let g = triangle();
        let edges: Vec<_> = g.edges().map(|(a, b, w)| (*a, *b, w)).collect();
        assert_eq!(edges.len(), 3);
        assert!(edges.contains(&("A", "B", 5.0)));
        assert!(edges.contains(&("B", "C", 3.0)));
        assert!(edges.contains(&("A", "C", 10.0)));
    }
}
