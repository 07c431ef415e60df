//! Terrain generation benchmarks.
//!
//! Run with: `cargo bench -p terrawalk-world`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use terrawalk_world::{generate_terrain, ElevationConvention, GeneratorConfig, NoiseFieldGenerator};

/// Benchmarks raw and normalized field generation across map sizes.
pub fn noise_field_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise_field");
    for size in [32usize, 64, 128] {
        let generator =
            NoiseFieldGenerator::new(GeneratorConfig::with_size(size)).expect("valid config");
        group.bench_with_input(BenchmarkId::new("raw", size), &generator, |b, generator| {
            b.iter(|| black_box(generator.generate_raw()));
        });
        group.bench_with_input(
            BenchmarkId::new("normalized", size),
            &generator,
            |b, generator| {
                b.iter(|| black_box(generator.generate_normalized()));
            },
        );
    }
    group.finish();
}

/// Benchmarks generation plus classification.
pub fn terrain_map_benchmark(c: &mut Criterion) {
    let config = GeneratorConfig {
        convention: ElevationConvention::Raw,
        ..GeneratorConfig::with_size(64)
    };
    c.bench_function("generate_terrain_64", |b| {
        b.iter(|| black_box(generate_terrain(&config).expect("valid config")));
    });
}

criterion_group!(benches, noise_field_benchmark, terrain_map_benchmark);
criterion_main!(benches);
