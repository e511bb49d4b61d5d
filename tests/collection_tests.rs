//! Tests for the user collection
//!
//! These tests verify:
//! - Names can only be collected when the catalog knows them
//! - Duplicate collection attempts are rejected
//! - Lookups delegate to the store the caller passes in

use dexkv::store::{create_store, BackendKind};
use dexkv::{Pokemon, PokemonStore, UserCollection};

fn pokemon(name: &str, dex: u32, primary: &str, abilities: &str) -> Pokemon {
    Pokemon {
        name: name.to_string(),
        dex_number: dex,
        primary_type: primary.to_string(),
        secondary_type: String::new(),
        classification: format!("{name} Pokémon"),
        height: 1.0,
        weight: 10.0,
        abilities: abilities.to_string(),
        generation: 1,
        legendary: false,
    }
}

fn catalog() -> Box<dyn PokemonStore> {
    let mut store = create_store(BackendKind::Hash);
    store.put(pokemon("Bulbasaur", 1, "Grass", "Overgrow"));
    store.put(pokemon("Charizard", 6, "Fire", "Blaze"));
    store.put(pokemon("Squirtle", 7, "Water", "Torrent"));
    store
}

// =============================================================================
// Add / Remove Tests
// =============================================================================

#[test]
fn test_add_known_name() {
    let store = catalog();
    let mut collection = UserCollection::new();

    assert!(collection.add(store.as_ref(), "Charizard"));
    assert!(collection.contains("Charizard"));
    assert_eq!(collection.len(), 1);
}

#[test]
fn test_add_unknown_name_is_rejected() {
    let store = catalog();
    let mut collection = UserCollection::new();

    assert!(!collection.add(store.as_ref(), "Missingno"));
    assert!(collection.is_empty());
}

#[test]
fn test_add_duplicate_is_rejected() {
    let store = catalog();
    let mut collection = UserCollection::new();

    assert!(collection.add(store.as_ref(), "Squirtle"));
    assert!(!collection.add(store.as_ref(), "Squirtle"));
    assert_eq!(collection.len(), 1);
}

#[test]
fn test_remove() {
    let store = catalog();
    let mut collection = UserCollection::new();
    collection.add(store.as_ref(), "Bulbasaur");

    assert!(collection.remove("Bulbasaur"));
    assert!(!collection.remove("Bulbasaur"));
    assert!(collection.is_empty());
}

// =============================================================================
// Delegated Lookup Tests
// =============================================================================

#[test]
fn test_pokemons_resolves_against_store() {
    let store = catalog();
    let mut collection = UserCollection::new();
    collection.add(store.as_ref(), "Bulbasaur");
    collection.add(store.as_ref(), "Squirtle");

    let mut names: Vec<&str> = collection
        .pokemons(store.as_ref())
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    names.sort_unstable();
    assert_eq!(names, ["Bulbasaur", "Squirtle"]);
}

#[test]
fn test_sorted_by_type_matches_contract_ordering() {
    let store = catalog();
    let mut collection = UserCollection::new();
    collection.add(store.as_ref(), "Squirtle");
    collection.add(store.as_ref(), "Charizard");
    collection.add(store.as_ref(), "Bulbasaur");

    let names: Vec<&str> = collection
        .sorted_by_type(store.as_ref())
        .iter()
        .map(|p| p.name.as_str())
        .collect();

    // Fire < Grass < Water
    assert_eq!(names, ["Charizard", "Bulbasaur", "Squirtle"]);
}

#[test]
fn test_collection_does_not_own_records() {
    let store = catalog();
    let mut collection = UserCollection::new();
    collection.add(store.as_ref(), "Charizard");

    // A different, empty store resolves nothing; the name stays collected
    let empty = create_store(BackendKind::Hash);
    assert!(collection.pokemons(empty.as_ref()).is_empty());
    assert!(collection.contains("Charizard"));
}
