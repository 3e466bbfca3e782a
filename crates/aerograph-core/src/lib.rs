//! # aerograph-core
//!
//! Core layer for Aerograph: the route graph store and the connectivity
//! algorithms that run over it.
//!
//! The engine answers three kinds of question about a static weighted
//! undirected graph: fewest hops between two nodes (BFS), cheapest route
//! between two nodes (Dijkstra), and the cheapest network connecting every
//! node (Kruskal's minimum spanning tree). It depends only on
//! `aerograph-common`; ingestion and visualization live elsewhere and
//! exchange plain data with this crate.
//!
//! ## Modules
//!
//! - [`graph`] - The immutable weighted undirected graph store and its builder
//! - [`algorithms`] - BFS, Dijkstra, Union-Find, and Kruskal engines
//!
//! ## Quick Start
//!
//! ```rust
//! use aerograph_core::{RouteGraph, algorithms};
//!
//! let mut builder = RouteGraph::builder();
//! builder.node("GRU", ());
//! builder.node("GIG", ());
//! builder.node("BSB", ());
//! builder.edge("GRU", "GIG", 340.0);
//! builder.edge("GIG", "BSB", 930.0);
//! let graph = builder.build()?;
//!
//! let path = algorithms::shortest_weighted_path(&graph, &"GRU", &"BSB")?
//!     .expect("connected");
//! assert_eq!(path.nodes, vec!["GRU", "GIG", "BSB"]);
//! assert_eq!(path.cost, 1270.0);
//! # Ok::<(), aerograph_common::Error>(())
//! ```

pub mod algorithms;
pub mod graph;

// Re-export commonly used types
pub use aerograph_common::{Error, Result};
pub use algorithms::{
    Control, MinScored, MstResult, RoutePath, TraversalEvent, UnionFind, minimum_spanning_tree,
    mst_restricted_path, shortest_hop_path, shortest_weighted_path,
};
pub use graph::{GraphBuilder, RouteGraph};
