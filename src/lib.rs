//! # DexKV
//!
//! An in-memory Pokémon catalog built on a pluggable key-value storage
//! abstraction:
//! - Three interchangeable backends behind one contract (hash, ordered,
//!   insertion-ordered)
//! - Backend selected at startup through a factory, by code or by name
//! - Identical query surface regardless of backend (point lookup,
//!   substring ability search, derived type sort)
//! - Bulk loading from CSV rows with per-row error absorption
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CLI Driver                              │
//! │              (owns store + user collection)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Bulk Loader                               │
//! │           (CSV rows → Pokemon records → put)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 PokemonStore trait                           │
//! │       (put / get / all / exists / search / sort)             │
//! └──────┬──────────────┬──────────────────┬────────────────────┘
//!        │              │                  │
//!        ▼              ▼                  ▼
//! ┌────────────┐ ┌─────────────┐ ┌──────────────────┐
//! │ HashStore  │ │OrderedStore │ │  InsertionStore  │
//! │ (HashMap)  │ │ (BTreeMap)  │ │ (HashMap + Vec)  │
//! └────────────┘ └─────────────┘ └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod pokemon;
pub mod store;
pub mod loader;
pub mod collection;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DexError, Result};
pub use config::Config;
pub use pokemon::Pokemon;
pub use store::{create_store, BackendKind, PokemonStore, TimedStore};
pub use loader::{load_csv_file, load_rows, LoadReport};
pub use collection::UserCollection;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of DexKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
