//! Hash-indexed backend
//!
//! `HashMap` keyed by name. Average O(1) point operations; `all()`
//! carries no order guarantee beyond set-equality.

use std::collections::HashMap;

use crate::pokemon::Pokemon;

use super::{filter_by_ability, sort_by_type, PokemonStore};

/// Unordered backend with O(1) point lookups.
#[derive(Debug, Default)]
pub struct HashStore {
    records: HashMap<String, Pokemon>,
}

impl HashStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PokemonStore for HashStore {
    fn put(&mut self, pokemon: Pokemon) {
        self.records.insert(pokemon.name.clone(), pokemon);
    }

    fn get(&self, name: &str) -> Option<&Pokemon> {
        self.records.get(name)
    }

    fn all(&self) -> Vec<&Pokemon> {
        // No iteration order guarantee: whatever the hash map yields
        self.records.values().collect()
    }

    fn exists(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    fn search_by_ability(&self, query: &str) -> HashMap<&str, &Pokemon> {
        filter_by_ability(self.records.iter(), query)
    }

    fn sorted_by_type(&self) -> Vec<&Pokemon> {
        sort_by_type(self.records.values().collect())
    }

    fn backend_name(&self) -> &'static str {
        "hash"
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
