//! User collection
//!
//! A named sub-collection (the user's favorites) layered on top of a
//! store. It holds only names; every lookup delegates to a store that
//! the caller passes in explicitly, so the collection never owns
//! records and carries no ambient state.

use std::collections::HashSet;

use crate::pokemon::Pokemon;
use crate::store::{self, PokemonStore};

/// Set of collected names, resolved against a store on demand.
#[derive(Debug, Default)]
pub struct UserCollection {
    names: HashSet<String>,
}

impl UserCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect a name.
    ///
    /// Returns false when the name is unknown to the store or already
    /// collected; the collection never holds names the catalog cannot
    /// resolve.
    pub fn add(&mut self, store: &dyn PokemonStore, name: &str) -> bool {
        if !store.exists(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    /// Drop a name from the collection.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    /// Whether a name has been collected.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of collected names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The collected names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Resolve the collected names against `store`.
    ///
    /// Names the store no longer knows are silently dropped from the
    /// result (the collection itself is left untouched).
    pub fn pokemons<'a>(&self, store: &'a dyn PokemonStore) -> Vec<&'a Pokemon> {
        self.names
            .iter()
            .filter_map(|name| store.get(name))
            .collect()
    }

    /// Collected records sorted by `(primary_type, name)` ascending,
    /// the same ordering the store contract uses.
    pub fn sorted_by_type<'a>(&self, store: &'a dyn PokemonStore) -> Vec<&'a Pokemon> {
        store::sort_by_type(self.pokemons(store))
    }
}
