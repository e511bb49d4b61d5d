//! Timing decorator
//!
//! Wraps any backend and records per-call wall time without the
//! backends themselves carrying instrumentation. Timing is an optional
//! cross-cutting concern: callers that don't wrap pay nothing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::pokemon::Pokemon;

use super::PokemonStore;

/// Decorator that times every contract operation on the wrapped store.
///
/// Counters are lock-free (`AtomicU64`); each call also emits a
/// `tracing` event at trace level.
pub struct TimedStore {
    inner: Box<dyn PokemonStore>,

    /// Wall time of the most recent operation, in nanoseconds
    last_op_nanos: AtomicU64,

    /// Total operations observed
    op_count: AtomicU64,
}

impl TimedStore {
    /// Wrap a store.
    pub fn new(inner: Box<dyn PokemonStore>) -> Self {
        Self {
            inner,
            last_op_nanos: AtomicU64::new(0),
            op_count: AtomicU64::new(0),
        }
    }

    /// Wall time of the most recent operation, in nanoseconds.
    pub fn last_op_nanos(&self) -> u64 {
        self.last_op_nanos.load(Ordering::Relaxed)
    }

    /// Number of operations observed so far.
    pub fn op_count(&self) -> u64 {
        self.op_count.load(Ordering::Relaxed)
    }

    /// Unwrap, discarding the counters.
    pub fn into_inner(self) -> Box<dyn PokemonStore> {
        self.inner
    }

    fn record(&self, op: &'static str, started: Instant) {
        let nanos = started.elapsed().as_nanos() as u64;
        self.last_op_nanos.store(nanos, Ordering::Relaxed);
        self.op_count.fetch_add(1, Ordering::Relaxed);

        tracing::trace!(op, nanos, backend = self.inner.backend_name(), "store op");
    }
}

impl PokemonStore for TimedStore {
    fn put(&mut self, pokemon: Pokemon) {
        let started = Instant::now();
        self.inner.put(pokemon);
        self.record("put", started);
    }

    fn get(&self, name: &str) -> Option<&Pokemon> {
        let started = Instant::now();
        let result = self.inner.get(name);
        self.record("get", started);
        result
    }

    fn all(&self) -> Vec<&Pokemon> {
        let started = Instant::now();
        let result = self.inner.all();
        self.record("all", started);
        result
    }

    fn exists(&self, name: &str) -> bool {
        let started = Instant::now();
        let result = self.inner.exists(name);
        self.record("exists", started);
        result
    }

    fn search_by_ability(&self, query: &str) -> HashMap<&str, &Pokemon> {
        let started = Instant::now();
        let result = self.inner.search_by_ability(query);
        self.record("search_by_ability", started);
        result
    }

    fn sorted_by_type(&self) -> Vec<&Pokemon> {
        let started = Instant::now();
        let result = self.inner.sorted_by_type();
        self.record("sorted_by_type", started);
        result
    }

    fn backend_name(&self) -> &'static str {
        // Introspection reports the wrapped backend, not the decorator
        self.inner.backend_name()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
