//! The catalog record type
//!
//! One `Pokemon` per catalog entry, shaped after the columns of the
//! PokeAPI CSV export. Records are built once by the loader and never
//! mutated afterwards; a store owns every record it holds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// `name` is the sole identity key within a store, compared
/// case-sensitively. Inserting a record under an existing name
/// overwrites the prior value silently (last-write-wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Unique key within a store (case-sensitive)
    pub name: String,

    /// National dex number; not required to be unique
    pub dex_number: u32,

    /// Primary type, e.g. "Fire"
    pub primary_type: String,

    /// Secondary type; the empty string means "none" (never an Option,
    /// so downstream formatting needs no null handling)
    pub secondary_type: String,

    /// Species classification, e.g. "Flame Pokémon"
    pub classification: String,

    /// Height in meters (no unit validation)
    pub height: f32,

    /// Weight in kilograms (no unit validation)
    pub weight: f32,

    /// Comma-separated ability text, stored and searched as raw text
    pub abilities: String,

    /// Game generation the entry was introduced in
    pub generation: u32,

    /// Legendary marker
    pub legendary: bool,
}

impl Pokemon {
    /// True if the entry has a secondary type.
    pub fn has_secondary_type(&self) -> bool {
        !self.secondary_type.is_empty()
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (#{})", self.name, self.dex_number)?;
        write!(f, "  type: {}", self.primary_type)?;
        if self.has_secondary_type() {
            write!(f, "/{}", self.secondary_type)?;
        }
        writeln!(f)?;
        writeln!(f, "  classification: {}", self.classification)?;
        writeln!(f, "  height: {} m, weight: {} kg", self.height, self.weight)?;
        writeln!(f, "  abilities: {}", self.abilities)?;
        write!(
            f,
            "  generation: {}{}",
            self.generation,
            if self.legendary { " (legendary)" } else { "" }
        )
    }
}
