//! Core type definitions for Aerograph.
//!
//! The algorithm crates are generic over the node identifier: anything the
//! ingestion layer hands us (numeric OpenFlights IDs, IATA codes, plain
//! strings) works as long as it satisfies [`NodeKey`]. Display attributes
//! live alongside the identifier but are never interpreted by the engines;
//! [`GeoPoint`] and [`AirportInfo`] are ready-made payloads for the
//! route-network domain.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Bounds a node identifier must satisfy.
///
/// `Eq + Hash` drive adjacency lookup, `Ord` drives deterministic
/// tie-breaking (edge sorting, reproducible MST output), and `Debug` lets
/// errors carry the offending key. Blanket-implemented; never implement
/// this by hand.
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> NodeKey for T {}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, positive north.
    pub lat: f64,
    /// Longitude in decimal degrees, positive east.
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a new geographic point.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Display attributes for an airport node.
///
/// Opaque to the algorithms; a presentation layer reads these to label
/// markers and draw paths on a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportInfo {
    /// Human-readable airport name.
    pub name: String,
    /// Geographic position of the airport.
    pub position: GeoPoint,
}

impl AirportInfo {
    /// Creates airport attributes from a name and position.
    pub fn new(name: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}
