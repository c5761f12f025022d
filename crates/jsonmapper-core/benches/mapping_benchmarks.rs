//! Benchmarks for path resolution and rule-driven conversion
//!
//! Copyright (c) 2025 jsonmapper contributors
//! Licensed under the Apache-2.0 license

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonmapper_core::{resolve, CoercionMode, Mapper, MappingRule, SourcePath};
use serde_json::{json, Value};

fn create_large_data(size: usize) -> Value {
    let items: Vec<Value> = (0..size)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("Item {}", i),
                "category": match i % 3 { 0 => "A", 1 => "B", _ => "C" },
                "price": format!("{:.2}", (i as f64) * 1.5 + 10.0),
                "active": if i % 2 == 0 { "true" } else { "false" }
            })
        })
        .collect();

    json!({"catalog": {"items": items, "owner": {"name": "bench"}}})
}

fn item_rules() -> Vec<MappingRule> {
    vec![
        MappingRule::new("catalog.owner.name", "owner"),
        MappingRule::new("catalog.items", "items")
            .with_type("array")
            .with_sub_mappers(vec![
                MappingRule::new("id", "id"),
                MappingRule::new("price", "price").with_type("double"),
                MappingRule::new("active", "active").with_type("bool"),
            ]),
    ]
}

fn bench_resolution(c: &mut Criterion) {
    let data = create_large_data(1000);
    let mut group = c.benchmark_group("resolution");

    for path in [
        "catalog.owner.name",
        "catalog.items[]",
        "catalog.items[500].name",
        "catalog.items[category=c&id=998]",
    ] {
        group.bench_with_input(BenchmarkId::new("parse_and_resolve", path), path, |b, path| {
            b.iter(|| resolve(black_box(&data), black_box(path)))
        });

        let compiled = SourcePath::parse(path);
        group.bench_with_input(BenchmarkId::new("precompiled", path), &compiled, |b, compiled| {
            b.iter(|| compiled.resolve(black_box(&data)))
        });
    }

    group.finish();
}

fn bench_conversion(c: &mut Criterion) {
    let rules = item_rules();
    let mut group = c.benchmark_group("conversion");

    for size in [10, 100, 1000] {
        let data = create_large_data(size);
        for mode in [CoercionMode::Compatible, CoercionMode::TypeDriven] {
            let mapper = Mapper::new().coercion_mode(mode);
            group.bench_with_input(
                BenchmarkId::new(mode.to_string(), size),
                &data,
                |b, data| b.iter(|| mapper.convert(black_box(data), &rules).unwrap()),
            );
        }
    }

    group.bench_function("identity_copy", |b| {
        let data = create_large_data(1000);
        let mapper = Mapper::new();
        b.iter(|| mapper.convert(black_box(&data), &[]).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_resolution, bench_conversion);
criterion_main!(benches);
