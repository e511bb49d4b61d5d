//! Ordered backend
//!
//! `BTreeMap` keyed by name, so iteration always yields ascending name
//! order. Point operations are O(log n). The only backend that can
//! answer name range queries, exposed as an extension on the concrete
//! type rather than on the shared contract.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

use crate::pokemon::Pokemon;

use super::{filter_by_ability, sort_by_type, PokemonStore};

/// Key-sorted backend with O(log n) point lookups and range queries.
#[derive(Debug, Default)]
pub struct OrderedStore {
    records: BTreeMap<String, Pokemon>,
}

impl OrderedStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records whose name falls in the closed interval `[from, to]`,
    /// in ascending name order.
    ///
    /// An inverted interval (`from > to`) yields nothing.
    pub fn range_by_name(&self, from: &str, to: &str) -> Vec<&Pokemon> {
        if from > to {
            return Vec::new();
        }
        self.records
            .range::<str, _>((Bound::Included(from), Bound::Included(to)))
            .map(|(_, p)| p)
            .collect()
    }
}

impl PokemonStore for OrderedStore {
    fn put(&mut self, pokemon: Pokemon) {
        self.records.insert(pokemon.name.clone(), pokemon);
    }

    fn get(&self, name: &str) -> Option<&Pokemon> {
        self.records.get(name)
    }

    fn all(&self) -> Vec<&Pokemon> {
        // BTreeMap iteration is ascending by key, i.e. by name
        self.records.values().collect()
    }

    fn exists(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    fn search_by_ability(&self, query: &str) -> HashMap<&str, &Pokemon> {
        filter_by_ability(self.records.iter(), query)
    }

    fn sorted_by_type(&self) -> Vec<&Pokemon> {
        // Name order is not type order; always resort on a copy
        sort_by_type(self.records.values().collect())
    }

    fn backend_name(&self) -> &'static str {
        "ordered"
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
