// File: crates/scatter-core/benches/layout_bench.rs
// Purpose: Benchmark scene layout across dataset sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scatter_core::{DataPoint, RenderOptions, ScatterChart};
use std::hint::black_box;

fn synthetic_points(n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|i| DataPoint {
            income: 30_000.0 + (i as f64 * 977.0) % 45_000.0,
            healthcare: 4.0 + (i as f64 * 0.37) % 18.0,
            abbr: format!("S{i}"),
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for n in [51usize, 1_000, 10_000] {
        let chart = ScatterChart::new(synthetic_points(n));
        let opts = RenderOptions::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(chart.layout(&opts)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
