//! Shared algorithm plumbing: visitor events, traversal control, and the
//! min-heap score wrapper.
//!
//! The engines stay pure libraries: anything a caller might want traced
//! (each discovered node, each relaxed edge, each accepted tree edge) is
//! surfaced through a visitor callback instead of being printed. Callers
//! that do not care pass a no-op visitor via the plain entry points.

use std::cmp::Ordering;

/// Tells a traversal whether to keep going after a visitor event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    /// Continue the traversal.
    #[default]
    Continue,
    /// Abandon the traversal. The query reports no result.
    Break,
}

/// Events emitted by the engines while they work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraversalEvent<'a, N> {
    /// BFS reached `node` for the first time, via `parent` (`None` for the
    /// source).
    Discover {
        /// The newly discovered node.
        node: &'a N,
        /// The node it was discovered from.
        parent: Option<&'a N>,
    },
    /// Dijkstra popped `node` with its final shortest distance.
    Settle {
        /// The settled node.
        node: &'a N,
        /// Final distance from the source.
        distance: f64,
    },
    /// Dijkstra improved the tentative distance of `to` via the edge from
    /// `from`.
    EdgeRelaxed {
        /// Tail of the relaxed edge.
        from: &'a N,
        /// Head of the relaxed edge.
        to: &'a N,
        /// Weight of the relaxed edge.
        weight: f64,
        /// New tentative distance of `to`.
        distance: f64,
    },
    /// Kruskal accepted an edge into the spanning structure.
    TreeEdge {
        /// One endpoint of the accepted edge.
        a: &'a N,
        /// The other endpoint.
        b: &'a N,
        /// Weight of the accepted edge.
        weight: f64,
    },
}

/// `MinScored<K, T>` holds a score and an associated value, ordered by
/// *reverse* score comparison so that `BinaryHeap<MinScored<..>>` behaves
/// as a min-heap.
///
/// `f64` scores only implement `PartialOrd`, so the `Ord` impl here defines
/// a total order by sorting NaN as the least priority. Edge weights are
/// validated finite at graph build time; the NaN arms exist only to keep
/// the order total.
#[derive(Debug, Clone, Copy)]
pub struct MinScored<K, T>(pub K, pub T);

impl<K: PartialOrd, T> PartialEq for MinScored<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd, T> Eq for MinScored<K, T> {}

impl<K: PartialOrd, T> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd, T> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = &self.0;
        let b = &other.0;
        if a == b {
            Ordering::Equal
        } else if a < b {
            Ordering::Greater
        } else if a > b {
            Ordering::Less
        } else if a.ne(a) && b.ne(b) {
            // Both NaN: arbitrary but consistent.
            Ordering::Equal
        } else if a.ne(a) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}
