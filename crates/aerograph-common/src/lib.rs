//! # aerograph-common
//!
//! Foundation layer for Aerograph: node-key bounds, attribute types, and
//! the error taxonomy shared by every other crate.
//!
//! This crate has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (NodeKey, GeoPoint, AirportInfo)
//! - [`utils`] - Utility modules (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use types::{AirportInfo, GeoPoint, NodeKey};
pub use utils::error::{Error, Result};
