//! Keyed containers backing the statistics engine.

pub mod hash_map;

pub use hash_map::{hash_key, Entry, HashMap};
