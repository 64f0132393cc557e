//! # Common Types

/// Integer type used for vocabulary positions in vectorized grids.
pub type SymbolIndex = u32;

/// Type alias for hash maps in this crate.
pub type CBHashMap<K, V> = hashbrown::HashMap<K, V>;

/// Create a new empty hash map.
pub fn hash_map_new<K, V>() -> CBHashMap<K, V> {
    CBHashMap::new()
}

/// Create a new hash map with the given capacity.
pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CBHashMap<K, V> {
    CBHashMap::with_capacity(capacity)
}
