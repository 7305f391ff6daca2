use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use midpoint_pi::math::{
    calculate_pi, calculate_pi_sequential, kahan_sum, partition, IntegrationConfig,
};

fn bench_thread_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_pi");
    group.sample_size(20);

    let intervals = 1_000_000;
    let sequential = IntegrationConfig::new(intervals, 1).unwrap();
    group.bench_function("sequential", |b| {
        b.iter(|| calculate_pi_sequential(black_box(&sequential)).unwrap())
    });

    for threads in [1, 2, 4, 8, 16] {
        let config = IntegrationConfig::new(intervals, threads).unwrap();
        group.bench_with_input(BenchmarkId::new("threads", threads), &config, |b, config| {
            b.iter(|| calculate_pi(black_box(config)).unwrap())
        });
    }
    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    c.bench_function("partition 10M/64", |b| {
        b.iter(|| partition(black_box(10_000_000), black_box(64)).unwrap())
    });
}

fn bench_reduction(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| 1.0 / (i as f64 + 1.0)).collect();
    let mut group = c.benchmark_group("reduction");
    group.bench_function("kahan", |b| b.iter(|| kahan_sum(black_box(&values))));
    group.bench_function("naive", |b| {
        b.iter(|| black_box(&values).iter().sum::<f64>())
    });
    group.finish();
}

criterion_group!(benches, bench_thread_counts, bench_partition, bench_reduction);
criterion_main!(benches);
