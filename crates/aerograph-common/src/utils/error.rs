//! Error taxonomy for Aerograph.
//!
//! The taxonomy is deliberately small. `NotFound` (a valid query with no
//! satisfying path) is *not* here: unreachable targets are a normal outcome
//! and surface as `Ok(None)` from the query functions, never as an error
//! and never as a numeric infinity.

use thiserror::Error;

/// Errors produced by graph construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A query referenced a node identifier absent from the graph.
    ///
    /// This is a caller bug, not a transient condition; nothing retries it.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Graph construction was given an edge with an invalid endpoint.
    ///
    /// Construction fails atomically; no partially built graph escapes.
    #[error("invalid edge: {0}")]
    InvalidEdge(String),
}

impl Error {
    /// Builds an `UnknownNode` error from any debuggable key.
    pub fn unknown_node(key: &impl std::fmt::Debug) -> Self {
        Self::UnknownNode(format!("{key:?}"))
    }

    /// Builds an `InvalidEdge` error from an endpoint pair and reason.
    pub fn invalid_edge(a: &impl std::fmt::Debug, b: &impl std::fmt::Debug, reason: &str) -> Self {
        Self::InvalidEdge(format!("{a:?} - {b:?}: {reason}"))
    }
}

/// Result alias used throughout Aerograph.
pub type Result<T> = std::result::Result<T, Error>;
