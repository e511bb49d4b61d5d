//! Bulk loader
//!
//! Turns raw positional rows into [`Pokemon`] records and feeds them to
//! a store, one `put` per well-formed row.
//!
//! ## Row Format
//! At least 9 positional fields:
//! ```text
//! name, dex number, primary type, secondary type, classification,
//! height, weight, abilities, generation [, flag text]
//! ```
//! The optional 10th field marks a record legendary when it contains
//! the text "legendary" (case-insensitive).
//!
//! ## Error Absorption
//! Malformed rows (wrong arity, non-numeric numeric field) are skipped
//! with a logged warning and counted; one bad row never aborts a load.
//! File-level failures (missing file, CSV-level errors) do abort and
//! surface to the caller.

use std::path::Path;

use crate::error::{DexError, Result};
use crate::pokemon::Pokemon;
use crate::store::PokemonStore;

/// Outcome of a bulk load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows that became records and were put into the store
    pub loaded: usize,

    /// Malformed rows that were skipped
    pub skipped: usize,
}

/// Load a sequence of raw rows into `store`.
///
/// Row numbering in warnings is 1-based over the given sequence.
pub fn load_rows<I>(store: &mut dyn PokemonStore, rows: I) -> LoadReport
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut report = LoadReport {
        loaded: 0,
        skipped: 0,
    };

    for (index, row) in rows.into_iter().enumerate() {
        match parse_row(index + 1, &row) {
            Ok(pokemon) => {
                store.put(pokemon);
                report.loaded += 1;
            }
            Err(err) => {
                tracing::warn!("skipping row: {err}");
                report.skipped += 1;
            }
        }
    }

    tracing::debug!(
        loaded = report.loaded,
        skipped = report.skipped,
        backend = store.backend_name(),
        "bulk load finished"
    );

    report
}

/// Load a CSV file into `store`.
///
/// The first line is treated as a header and skipped. Rows are parsed
/// leniently at the CSV layer (varying field counts allowed) so that
/// arity problems are handled per row by [`load_rows`] instead of
/// aborting the file.
pub fn load_csv_file(path: impl AsRef<Path>, store: &mut dyn PokemonStore) -> Result<LoadReport> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "loading catalog");

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(load_rows(store, rows))
}

/// Parse one positional row into a record.
fn parse_row(line: usize, fields: &[String]) -> Result<Pokemon> {
    if fields.len() < 9 {
        return Err(DexError::MalformedRow {
            line,
            reason: format!("expected at least 9 fields, got {}", fields.len()),
        });
    }

    let dex_number = parse_field(line, &fields[1], "dex number")?;
    let height = parse_field(line, &fields[5], "height")?;
    let weight = parse_field(line, &fields[6], "weight")?;
    let generation = parse_field(line, &fields[8], "generation")?;

    // Absent flag field means not legendary
    let legendary = fields
        .get(9)
        .map(|flag| flag.to_lowercase().contains("legendary"))
        .unwrap_or(false);

    Ok(Pokemon {
        name: fields[0].trim().to_string(),
        dex_number,
        primary_type: fields[2].trim().to_string(),
        secondary_type: fields[3].trim().to_string(),
        classification: fields[4].trim().to_string(),
        height,
        weight,
        abilities: fields[7].trim().to_string(),
        generation,
        legendary,
    })
}

/// Parse a required numeric field, mapping failures to `MalformedRow`.
fn parse_field<T: std::str::FromStr>(line: usize, raw: &str, what: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|err| DexError::MalformedRow {
        line,
        reason: format!("{what}: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_parse_row_well_formed() {
        let fields = row(&[
            "Charizard", "6", "Fire", "Flying", "Flame Pokémon", "1.7", "90.5",
            "Blaze, Solar Power", "1", "Legendary: no",
        ]);

        let pokemon = parse_row(1, &fields).unwrap();

        assert_eq!(pokemon.name, "Charizard");
        assert_eq!(pokemon.dex_number, 6);
        assert_eq!(pokemon.primary_type, "Fire");
        assert_eq!(pokemon.secondary_type, "Flying");
        assert!(!pokemon.legendary);
    }

    #[test]
    fn test_parse_row_legendary_flag_is_substring_match() {
        let fields = row(&[
            "Mewtwo", "150", "Psychic", "", "Genetic Pokémon", "2.0", "122.0",
            "Pressure", "1", "LEGENDARY",
        ]);

        assert!(parse_row(1, &fields).unwrap().legendary);
    }

    #[test]
    fn test_parse_row_missing_flag_field() {
        let fields = row(&[
            "Squirtle", "7", "Water", "", "Tiny Turtle Pokémon", "0.5", "9.0",
            "Torrent", "1",
        ]);

        assert!(!parse_row(1, &fields).unwrap().legendary);
    }

    #[test]
    fn test_parse_row_too_few_fields() {
        let fields = row(&["Pidgey", "16", "Normal"]);

        let err = parse_row(3, &fields).unwrap_err();
        assert!(matches!(err, DexError::MalformedRow { line: 3, .. }));
    }

    #[test]
    fn test_parse_row_non_numeric_field() {
        let fields = row(&[
            "Pidgey", "not-a-number", "Normal", "Flying", "Tiny Bird Pokémon",
            "0.3", "1.8", "Keen Eye", "1",
        ]);

        let err = parse_row(7, &fields).unwrap_err();
        assert!(matches!(err, DexError::MalformedRow { line: 7, .. }));
    }
}
