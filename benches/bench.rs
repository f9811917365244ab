#[macro_use]
extern crate criterion;
use criterion::Criterion;
use equacore::{factorize, integrate, is_prime, IntegrationConfig};

pub fn bench_is_prime(c: &mut Criterion) {
    const N: i64 = 1_000_000;
    const STEP: usize = 101;
    let mut group = c.benchmark_group("is_prime");

    group.bench_function("small", |b| {
        b.iter(|| (1..N).step_by(STEP).filter(|&n| is_prime(n)).count())
    });
    group.bench_function("large", |b| {
        b.iter(|| {
            (1_000_000_000_000..1_000_000_000_000 + N)
                .step_by(STEP)
                .filter(|&n| is_prime(n))
                .count()
        })
    });

    group.finish();
}

pub fn bench_factorization(c: &mut Criterion) {
    const N: i64 = 1_000_000;
    const STEP: usize = 501;
    let mut group = c.benchmark_group("factorize");

    group.bench_function("small", |b| {
        b.iter(|| {
            (1..N)
                .step_by(STEP)
                .filter_map(|n| factorize(n).ok())
                .filter(|f| f.len() > 1)
                .count()
        })
    });

    group.finish();
}

pub fn bench_integration(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate");

    group.bench_function("default config", |b| {
        b.iter(|| integrate(f64::sin, 0., std::f64::consts::PI, None))
    });
    group.bench_function("1e6 steps", |b| {
        let config = Some(IntegrationConfig::with_steps(1_000_000));
        b.iter(|| integrate(|x| x * x.exp(), -1., 1., config))
    });

    group.finish();
}

criterion_group!(benches, bench_is_prime, bench_factorization, bench_integration);
criterion_main!(benches);
