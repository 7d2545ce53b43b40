//! Benchmarks for cursor pipelines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flow_core::prelude::*;

fn benchmark_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("sources");

    let data: Vec<i32> = (0..10_000).collect();

    group.bench_function("array_sum", |b| {
        b.iter(|| ints(black_box(&data)).sum());
    });

    group.bench_function("by_indexing_sum", |b| {
        b.iter(|| ints_by_indexing(|i| i as i32, black_box(10_000)).sum());
    });

    group.bench_function("wrap_sum", |b| {
        b.iter(|| wrap(black_box(&data).iter().copied()).sum());
    });

    group.finish();
}

fn benchmark_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");

    let data: Vec<i64> = (0..10_000).collect();

    for take in [10, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("map_take_to_vec", take), take, |b, &take| {
            b.iter(|| longs(black_box(&data)).map(|x| x * 2).take(take).to_vec());
        });
    }

    group.bench_function("filter_count", |b| {
        b.iter(|| longs(black_box(&data)).filter(|x| x % 3 == 0).count());
    });

    group.bench_function("slice_every_tenth", |b| {
        b.iter(|| longs(black_box(&data)).slice(|i| i * 10).sum());
    });

    group.bench_function("pair_fold_differences", |b| {
        b.iter(|| longs(black_box(&data)).pair_fold(|a, b| b - a).sum());
    });

    group.bench_function("flatten_chunks", |b| {
        let chunks: Vec<Vec<i64>> = data.chunks(100).map(<[i64]>::to_vec).collect();
        b.iter(|| over(black_box(chunks.clone())).flatten().count());
    });

    group.finish();
}

fn benchmark_chained(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained");

    let words: Vec<String> = (0..2_000).map(|i| format!("word{}", i % 97)).collect();

    group.bench_function("group_by_length", |b| {
        b.iter(|| over(black_box(words.clone())).group_by(String::len));
    });

    group.bench_function("to_set", |b| {
        b.iter(|| over(black_box(words.clone())).to_set());
    });

    group.bench_function("zip_combine_average", |b| {
        let left: Vec<f64> = (0..5_000).map(f64::from).collect();
        b.iter(|| {
            doubles(black_box(&left))
                .combine(doubles(&left).drop(1), |a, b| a * b)
                .average()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sources,
    benchmark_operators,
    benchmark_chained
);
criterion_main!(benches);
