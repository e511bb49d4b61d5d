//! Store factory
//!
//! Turns a discriminator (numeric code or case-insensitive name) into
//! a ready, empty backend. Unrecognized discriminators fail with
//! [`DexError::InvalidBackendKind`]; there is no silent default.

use std::fmt;
use std::str::FromStr;

use crate::error::{DexError, Result};

use super::{HashStore, InsertionStore, OrderedStore, PokemonStore};

/// Discriminator for the three backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// `HashMap`-backed, unordered (code 1)
    Hash,

    /// `BTreeMap`-backed, ascending name order (code 2)
    Ordered,

    /// Insertion-order preserving (code 3)
    Insertion,
}

impl BackendKind {
    /// Resolve a numeric discriminator: 1=hash, 2=ordered, 3=insertion.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            1 => Ok(BackendKind::Hash),
            2 => Ok(BackendKind::Ordered),
            3 => Ok(BackendKind::Insertion),
            other => Err(DexError::InvalidBackendKind {
                value: other.to_string(),
            }),
        }
    }

    /// The contract name reported by [`PokemonStore::backend_name`].
    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Hash => "hash",
            BackendKind::Ordered => "ordered",
            BackendKind::Insertion => "insertion",
        }
    }

    /// One-line characteristics summary, for the CLI's info output.
    pub fn description(self) -> &'static str {
        match self {
            BackendKind::Hash => "O(1) lookups, no iteration order guarantee",
            BackendKind::Ordered => "O(log n) lookups, iterates in ascending name order, range queries",
            BackendKind::Insertion => "O(1) lookups, iterates in first-insertion order",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = DexError;

    /// Accepts the backend names case-insensitively as well as the
    /// numeric codes `"1"`/`"2"`/`"3"`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "1" | "hash" => Ok(BackendKind::Hash),
            "2" | "ordered" => Ok(BackendKind::Ordered),
            "3" | "insertion" => Ok(BackendKind::Insertion),
            _ => Err(DexError::InvalidBackendKind {
                value: s.to_string(),
            }),
        }
    }
}

/// Construct a ready, empty store for the given backend kind.
pub fn create_store(kind: BackendKind) -> Box<dyn PokemonStore> {
    tracing::debug!(backend = %kind, "creating store");

    match kind {
        BackendKind::Hash => Box::new(HashStore::new()),
        BackendKind::Ordered => Box::new(OrderedStore::new()),
        BackendKind::Insertion => Box::new(InsertionStore::new()),
    }
}
