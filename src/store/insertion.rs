//! Insertion-ordered backend
//!
//! A `HashMap` index paired with a `Vec` insertion log: O(1) point
//! lookups while `all()` replays the order records were first
//! inserted. Overwriting an existing name updates the value in place
//! and leaves its position untouched, which is the defining contract
//! difference from the other two backends.

use std::collections::HashMap;

use crate::pokemon::Pokemon;

use super::{filter_by_ability, sort_by_type, PokemonStore};

/// Backend that preserves first-insertion order.
#[derive(Debug, Default)]
pub struct InsertionStore {
    records: HashMap<String, Pokemon>,

    /// Names in first-insertion order; one entry per stored record.
    order: Vec<String>,
}

impl InsertionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite the global order: snapshot every record, sort by dex
    /// number ascending, clear the store and reinsert in that order.
    ///
    /// Ties keep their previous relative order (the sort is stable).
    /// This is the only backend operation that mutates ordering after
    /// the fact.
    pub fn reorder_by_dex_number(&mut self) {
        let mut snapshot = Vec::with_capacity(self.order.len());
        for name in std::mem::take(&mut self.order) {
            if let Some(pokemon) = self.records.remove(&name) {
                snapshot.push(pokemon);
            }
        }
        snapshot.sort_by_key(|p| p.dex_number);

        for pokemon in snapshot {
            self.put(pokemon);
        }
    }
}

impl PokemonStore for InsertionStore {
    fn put(&mut self, pokemon: Pokemon) {
        // New names go to the back of the log; overwrites keep their slot
        if !self.records.contains_key(&pokemon.name) {
            self.order.push(pokemon.name.clone());
        }
        self.records.insert(pokemon.name.clone(), pokemon);
    }

    fn get(&self, name: &str) -> Option<&Pokemon> {
        self.records.get(name)
    }

    fn all(&self) -> Vec<&Pokemon> {
        self.order
            .iter()
            .filter_map(|name| self.records.get(name))
            .collect()
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
        "insertion"
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
