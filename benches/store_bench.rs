//! Benchmarks comparing the three backends
//!
//! The whole point of having three interchangeable backends is that
//! their trade-offs differ; these benchmarks put numbers on them:
//! - put throughput (bulk insert)
//! - point lookup throughput
//! - full-scan ability search
//! - derived type sort

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use dexkv::store::{create_store, BackendKind};
use dexkv::{Pokemon, PokemonStore};

const KINDS: [BackendKind; 3] = [
    BackendKind::Hash,
    BackendKind::Ordered,
    BackendKind::Insertion,
];

const CATALOG_SIZE: usize = 500;

fn sample_records(n: usize) -> Vec<Pokemon> {
    let types = ["Fire", "Water", "Grass", "Electric", "Psychic"];
    (0..n)
        .map(|i| Pokemon {
            name: format!("pokemon-{i:04}"),
            dex_number: i as u32,
            primary_type: types[i % types.len()].to_string(),
            secondary_type: String::new(),
            classification: "Bench Pokémon".to_string(),
            height: 1.0,
            weight: 10.0,
            abilities: format!("Ability-{}, Trait-{}", i % 17, i % 5),
            generation: 1,
            legendary: false,
        })
        .collect()
}

fn populated(kind: BackendKind, records: &[Pokemon]) -> Box<dyn PokemonStore> {
    let mut store = create_store(kind);
    for p in records {
        store.put(p.clone());
    }
    store
}

fn bench_put(c: &mut Criterion) {
    let records = sample_records(CATALOG_SIZE);

    let mut group = c.benchmark_group("put");
    for kind in KINDS {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| {
                let mut store = create_store(kind);
                for p in &records {
                    store.put(p.clone());
                }
                store
            });
        });
    }
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let records = sample_records(CATALOG_SIZE);

    let mut group = c.benchmark_group("get");
    for kind in KINDS {
        let store = populated(kind, &records);
        group.bench_with_input(BenchmarkId::from_parameter(kind), &store, |b, store| {
            b.iter(|| {
                for i in (0..CATALOG_SIZE).step_by(7) {
                    let name = format!("pokemon-{i:04}");
                    assert!(store.get(&name).is_some());
                }
            });
        });
    }
    group.finish();
}

fn bench_search_by_ability(c: &mut Criterion) {
    let records = sample_records(CATALOG_SIZE);

    let mut group = c.benchmark_group("search_by_ability");
    for kind in KINDS {
        let store = populated(kind, &records);
        group.bench_with_input(BenchmarkId::from_parameter(kind), &store, |b, store| {
            b.iter(|| store.search_by_ability("ability-3"));
        });
    }
    group.finish();
}

fn bench_sorted_by_type(c: &mut Criterion) {
    let records = sample_records(CATALOG_SIZE);

    let mut group = c.benchmark_group("sorted_by_type");
    for kind in KINDS {
        let store = populated(kind, &records);
        group.bench_with_input(BenchmarkId::from_parameter(kind), &store, |b, store| {
            b.iter(|| store.sorted_by_type());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_put,
    bench_get,
    bench_search_by_ability,
    bench_sorted_by_type
);
criterion_main!(benches);
