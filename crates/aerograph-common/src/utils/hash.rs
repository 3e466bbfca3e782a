//! Fast hashing aliases.
//!
//! All internal maps use `hashbrown` with `ahash`: node keys are small and
//! hashed constantly during traversal, so the default SipHash is wasted
//! effort. Not DoS-resistant, which is fine for an in-process engine.

/// A hash map using `ahash` for fast, non-cryptographic hashing.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// A hash set using `ahash` for fast, non-cryptographic hashing.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;

/// An insertion-ordered map using `ahash`.
///
/// Used wherever iteration order is part of the observable contract
/// (node and neighbor enumeration).
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, ahash::RandomState>;
