//! Storage Module
//!
//! The pluggable storage layer: one contract, three backends.
//!
//! ## Responsibilities
//! - Define the contract every backend satisfies ([`PokemonStore`])
//! - Provide the concrete backends (hash, ordered, insertion-ordered)
//! - Construct backends from a discriminator ([`create_store`])
//! - Optional per-call timing via a wrapping decorator ([`TimedStore`])
//!
//! ## Backend Comparison
//! ```text
//! ┌────────────────┬───────────┬─────────────────────────────┐
//! │ Backend        │ Point ops │ all() iteration order       │
//! ├────────────────┼───────────┼─────────────────────────────┤
//! │ HashStore      │ O(1) avg  │ unspecified                 │
//! │ OrderedStore   │ O(log n)  │ ascending by name           │
//! │ InsertionStore │ O(1) avg  │ first-insertion order       │
//! └────────────────┴───────────┴─────────────────────────────┘
//! ```

mod hash;
mod ordered;
mod insertion;
mod factory;
mod timed;

pub use hash::HashStore;
pub use ordered::OrderedStore;
pub use insertion::InsertionStore;
pub use factory::{create_store, BackendKind};
pub use timed::TimedStore;

use std::collections::HashMap;

use crate::pokemon::Pokemon;

/// The storage contract shared by every backend.
///
/// All query operations are read-only and never mutate the store. A
/// lookup miss is a normal result (`None` / empty), never an error.
///
/// ## Sharing across threads
/// Backends are plain owned values with no interior locking. A caller
/// that ever shares a store must impose a single-writer/multi-reader
/// discipline (e.g. an external `RwLock`): `put`, bulk loads and
/// reorders need exclusive access, while the read-only queries may run
/// concurrently with each other but never with a writer.
pub trait PokemonStore {
    /// Insert a record, or overwrite the record with the same name.
    ///
    /// Last-write-wins: no merge, no versioning, no error on overwrite.
    fn put(&mut self, pokemon: Pokemon);

    /// Exact, case-sensitive lookup by name.
    fn get(&self, name: &str) -> Option<&Pokemon>;

    /// Every stored record, in **backend-defined** order.
    ///
    /// The order is part of each backend's contract: unspecified for
    /// the hash backend, ascending by name for the ordered backend,
    /// first-insertion order for the insertion backend.
    fn all(&self) -> Vec<&Pokemon>;

    /// Key presence check.
    fn exists(&self, name: &str) -> bool;

    /// Case-insensitive substring match against the raw ability text.
    ///
    /// The query matches anywhere in the text, not at token boundaries:
    /// `"char"` matches a record whose abilities are `"Cute Charm"`.
    /// Returns an empty map when nothing matches.
    fn search_by_ability(&self, query: &str) -> HashMap<&str, &Pokemon>;

    /// Every stored record sorted by `(primary_type, name)` ascending.
    ///
    /// Recomputed from a copy on every call; the backend's native order
    /// never leaks into the tie-breaking. Callers needing repeated
    /// access should cache the result themselves.
    fn sorted_by_type(&self) -> Vec<&Pokemon>;

    /// Which backend is active: `"hash"`, `"ordered"` or `"insertion"`.
    fn backend_name(&self) -> &'static str;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// True when the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared two-key sort used by every backend's `sorted_by_type`:
/// primary type ascending, ties broken by name ascending.
pub(crate) fn sort_by_type<'a>(mut records: Vec<&'a Pokemon>) -> Vec<&'a Pokemon> {
    records.sort_by(|a, b| {
        a.primary_type
            .cmp(&b.primary_type)
            .then_with(|| a.name.cmp(&b.name))
    });
    records
}

/// Shared ability filter used by every backend's `search_by_ability`.
pub(crate) fn filter_by_ability<'a>(
    entries: impl Iterator<Item = (&'a String, &'a Pokemon)>,
    query: &str,
) -> HashMap<&'a str, &'a Pokemon> {
    let needle = query.to_lowercase();
    entries
        .filter(|(_, p)| p.abilities.to_lowercase().contains(&needle))
        .map(|(name, p)| (name.as_str(), p))
        .collect()
}
