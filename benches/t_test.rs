/// Supplier comparison benchmarks
///
/// Measures repeated sampling, the density evaluation across the direct
/// and log-space Gamma paths, and the full decision step.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use rockstat::hypothesis::{decide, density};
use rockstat::sampling::repeat;

fn bench_repeat(c: &mut Criterion) {
    let mut group = c.benchmark_group("repeat");
    group.measurement_time(Duration::from_secs(5));

    for rocks in [10usize, 100, 1000].iter() {
        group.throughput(Throughput::Elements((*rocks * 11) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rocks), rocks, |b, &rocks| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(repeat(&mut rng, rocks, 11).unwrap()));
        });
    }

    group.finish();
}

fn bench_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("density");
    group.throughput(Throughput::Elements(1));

    // 20 and 100 take the direct Gamma path, 1000 the log-space path
    for df in [20u32, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(df), df, |b, &df| {
            b.iter(|| black_box(density(black_box(df), black_box(1.7)).unwrap()));
        });
    }

    group.finish();
}

fn bench_decide(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide");
    group.measurement_time(Duration::from_secs(5));

    let mut rng = StdRng::seed_from_u64(7);
    let a = repeat(&mut rng, 100, 11).unwrap();
    let b = repeat(&mut rng, 100, 11).unwrap();

    group.bench_function("eleven_samples_each", |bench| {
        bench.iter(|| black_box(decide(black_box(a.means()), black_box(b.means())).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_repeat, bench_density, bench_decide);
criterion_main!(benches);
