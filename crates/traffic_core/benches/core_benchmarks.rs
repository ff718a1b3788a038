//! Criterion benchmarks for the generation kernel.
//!
//! Measures the LCG generation loop and the exponential inverse transform
//! across sample sizes to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use traffic_core::lcg::{generate, LcgParams};
use traffic_core::variate::exponential;

/// Benchmark the LCG loop with the drand48-family parameters, whose
/// multiplier forces the 128-bit product path.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcg_generate");
    let params = LcgParams::new(7, 11, 25_214_903_917, 1 << 48);

    for size in [1_024, 102_400] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| generate(black_box(size), &params).unwrap());
        });
    }
    group.finish();
}

/// Benchmark the inverse transform over a pre-generated uniform sample.
fn bench_exponential(c: &mut Criterion) {
    let mut group = c.benchmark_group("exponential_transform");
    let params = LcgParams::new(7, 11, 25_214_903_917, 1 << 48);

    for size in [1_024, 102_400] {
        let uniforms = generate(size, &params).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &uniforms, |b, uniforms| {
            b.iter(|| exponential(black_box(uniforms), 3.0).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_exponential);
criterion_main!(benches);
