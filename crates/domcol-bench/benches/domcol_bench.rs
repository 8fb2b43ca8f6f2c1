//! Benchmarks for domcol operations.
//!
//! Run with: `cargo bench`

use std::f64::consts::TAU;
use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use domcol_color::{Converter, GamutCache, GamutTable};
use domcol_core::Colorspace;
use domcol_map::{Complex64, MapConfig, Mapper};
use domcol_transfer::srgb;

/// Square grid of complex samples over `[-2, 2]^2`.
fn plane(n: usize) -> Vec<Complex64> {
    (0..n * n)
        .map(|k| {
            let (i, j) = (k % n, k / n);
            Complex64::new(
                -2.0 + 4.0 * i as f64 / (n - 1) as f64,
                -2.0 + 4.0 * j as f64 / (n - 1) as f64,
            )
        })
        .collect()
}

/// Benchmark sRGB transfer function.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 100000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| i as f64 / *size as f64).collect();
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_eotf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::eotf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("srgb_oetf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::oetf(black_box(x))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark colorspace to sRGB conversion.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Elements(10000));

    for cs in Colorspace::ALL {
        let conv = Converter::new(cs);
        let l = 0.5 * cs.lightness_range();
        let r = 0.2 * cs.search_radius();
        let points: Vec<[f64; 3]> = (0..10000)
            .map(|i| conv.from_polar(l, r, i as f64 / 10000.0 * TAU))
            .collect();

        group.bench_function(BenchmarkId::new("to_rgb1", cs.name()), |b| {
            b.iter(|| points.iter().map(|p| conv.to_rgb1(black_box(p))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark gamut table solving (one lightness level).
fn bench_gamut(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamut");
    group.sample_size(20);

    for cs in Colorspace::ALL {
        let l = 0.5 * cs.lightness_range();
        group.bench_function(BenchmarkId::new("table", cs.name()), |b| {
            b.iter(|| GamutTable::build(cs, black_box(l)))
        });
    }

    group.finish();
}

/// Benchmark the full mapper with a warm cache.
fn bench_mapper(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapper");

    let cache = Arc::new(GamutCache::new());
    for cs in Colorspace::ALL {
        cache.full_stack(cs);
    }

    for size in [64, 256].iter() {
        let z = plane(*size);
        group.throughput(Throughput::Elements((size * size) as u64));

        for cs in Colorspace::ALL {
            let config = MapConfig {
                colorspace: cs,
                ..Default::default()
            };
            let Ok(mapper) = Mapper::with_cache(config, Arc::clone(&cache)) else {
                continue;
            };
            group.bench_with_input(
                BenchmarkId::new(format!("complex_to_rgb/{cs}"), size),
                &z,
                |b, z| b.iter(|| mapper.complex_to_rgb(black_box(z))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_convert, bench_gamut, bench_mapper);
criterion_main!(benches);
