//! Utility modules shared across Aerograph crates.
//!
//! - [`error`] - Error taxonomy and result alias
//! - [`hash`] - Fast hash map/set aliases

pub mod error;
pub mod hash;
