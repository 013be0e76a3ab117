use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use memofib::cache::FibCache;
use memofib::fib::fib;

fn bench_cold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fib_cold");
    for n in [100u64, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fib(&mut FibCache::new(), n));
        });
    }
    group.finish();
}

fn bench_warm(c: &mut Criterion) {
    let mut cache = FibCache::new();
    fib(&mut cache, 10_000);
    c.bench_function("fib_warm_10000", |b| {
        b.iter(|| fib(&mut cache, 10_000));
    });
}

criterion_group!(benches, bench_cold, bench_warm);
criterion_main!(benches);
