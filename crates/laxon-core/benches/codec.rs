//! Codec throughput over a representative nested document.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use laxon_core::{parse, stringify};

const DOCUMENT: &str = "{'title': 'Hearty rye bread', 'servings': 4, 'rating': 4.5, \
    'vegan': true, 'notes': null, \
    'ingredients': [\
        {'name': 'rye flour', 'amount': 500, 'unit': 'g'}, \
        {'name': 'water', 'amount': 350, 'unit': 'ml'}, \
        {'name': \"baker's salt\", 'amount': 10, 'unit': 'g'}], \
    'steps': ['mix', 'rest\tovernight', 'bake'], \
    'times': {'rest': 720, 'bake': 35}}";

fn bench_codec(c: &mut Criterion) {
    let value = parse(DOCUMENT).expect("benchmark document must parse");

    c.bench_function("parse_nested_document", |b| {
        b.iter(|| parse(black_box(DOCUMENT)).unwrap())
    });

    c.bench_function("stringify_nested_document", |b| {
        b.iter(|| stringify(black_box(&value)))
    });

    c.bench_function("roundtrip_nested_document", |b| {
        b.iter(|| {
            let parsed = parse(black_box(DOCUMENT)).unwrap();
            stringify(&parsed)
        })
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
