use countrydex_core::{paginate, population_rank, search, Country, CountryCatalog};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Roughly the size of the live API answer, with a few translations each.
fn synthetic_catalog() -> Vec<Country> {
    (0..250u64)
        .map(|i| {
            let code = format!("C{i:02}");
            Country::new(&code, &format!("Country {i} Land"))
                .with_population((i * 7_919) % 1_000_003)
                .with_translation("deu", &format!("Land Nummer {i}"))
                .with_translation("fra", &format!("Pays numéro {i}"))
                .with_translation("jpn", &format!("国 {i}"))
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let all = synthetic_catalog();

    c.bench_function("search_empty_term", |b| {
        b.iter(|| search(black_box(&all), black_box("")))
    });
    c.bench_function("search_localized_substring", |b| {
        b.iter(|| search(black_box(&all), black_box("numero 12")))
    });
    c.bench_function("search_then_paginate", |b| {
        b.iter(|| {
            let hits = search(black_box(&all), black_box("land"));
            paginate(&hits, 3, 20).len()
        })
    });
}

fn bench_rank(c: &mut Criterion) {
    let all = synthetic_catalog();
    let catalog = CountryCatalog::from_countries(all.clone());

    c.bench_function("rank_recompute", |b| {
        b.iter(|| population_rank(black_box(&all), black_box("C42")))
    });
    c.bench_function("rank_memoized", |b| {
        b.iter(|| catalog.rank(black_box("C42")))
    });
}

criterion_group!(benches, bench_search, bench_rank);
criterion_main!(benches);
