//! Conversion and Arithmetic Benchmarks
//!
//! - Descriptor conversion (ratio and affine)
//! - Typed conversion through compile-time tags
//! - Registry resolution of products and quotients
//! - Registry construction

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mensura::prelude::*;
use mensura::si::{Celsius, Centimeter, Fahrenheit, Liter, Millimeter, SquareMeter};
use mensura::{RegistryConfig, convert};

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let pairs = [
        ("cm_to_m", Centimeter::descriptor(), Meter::descriptor()),
        ("celsius_to_fahrenheit", Celsius::descriptor(), Fahrenheit::descriptor()),
        ("identity", Meter::descriptor(), Meter::descriptor()),
    ];
    for (name, from, to) in &pairs {
        group.bench_with_input(BenchmarkId::new("descriptor", name), &(from, to), |b, (from, to)| {
            b.iter(|| convert(black_box(42.0), from, to))
        });
    }

    group.bench_function("typed_in_unit", |b| {
        b.iter(|| black_box(Measurable::<Celsius>::new(black_box(20.0))).in_unit::<Kelvin>())
    });

    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let registry = UnitRegistry::si().unwrap();
    let mut group = c.benchmark_group("arithmetic");

    group.bench_function("add_mixed_units", |b| {
        b.iter(|| {
            black_box(Measurable::<Meter>::new(1.0)) + black_box(Measurable::<Centimeter>::new(50.0))
        })
    });

    group.bench_function("multiply_into", |b| {
        b.iter(|| {
            Measurable::<Centimeter>::new(black_box(15.0))
                .multiply_into::<Liter>(Measurable::<SquareMeter>::new(0.02), &registry)
        })
    });

    group.bench_function("divide_dynamic", |b| {
        b.iter(|| {
            Measurable::<Liter>::new(black_box(4.0))
                .divide(Measurable::<Millimeter>::new(2.0), &registry)
        })
    });

    group.bench_function("resolve_quotient", |b| {
        b.iter(|| registry.resolve_quotient(black_box(Dimension::VOLUME), Dimension::LENGTH))
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("build_si", |b| b.iter(UnitRegistry::si));

    let config = RegistryConfig::from_toml_str(
        r#"
        [[units]]
        symbol = "ft"
        name = "foot"
        dimension = "length"
        scale = 0.3048

        [[prefixed]]
        base = "ft"
        prefixes = ["kilo", "milli"]
        "#,
    )
    .unwrap();
    group.bench_function("build_from_config", |b| b.iter(|| config.build_registry()));

    group.bench_function("lookup", |b| {
        let registry = UnitRegistry::si().unwrap();
        b.iter(|| registry.lookup(black_box("mGy")).map(|u| u.scale()))
    });

    group.finish();
}

criterion_group!(benches, bench_convert, bench_arithmetic, bench_registry);
criterion_main!(benches);
