//! Yield solver benchmarks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use tenor_bonds::{price_fixed_rate_bond, yield_to_maturity, YtmConfig};
use tenor_core::term::Flat;

fn bench_ytm(c: &mut Criterion) {
    let config = YtmConfig::default();

    // Near-par bond: Newton converges in a handful of iterations
    c.bench_function("ytm_10y_semi_annual_near_par", |b| {
        b.iter(|| {
            yield_to_maturity(black_box(981.5), 1000.0, 0.05, 2, 10.0, &config).unwrap()
        });
    });

    // Deep discount: the Newton phase has real work to do
    let distressed = price_fixed_rate_bond(1000.0, 0.08, 2, 5.0, &Flat::new(0.35)).unwrap();
    c.bench_function("ytm_5y_deep_discount", |b| {
        b.iter(|| {
            yield_to_maturity(black_box(distressed), 1000.0, 0.08, 2, 5.0, &config).unwrap()
        });
    });
}

fn bench_pricing(c: &mut Criterion) {
    c.bench_function("price_30y_monthly", |b| {
        b.iter(|| {
            price_fixed_rate_bond(black_box(1000.0), 0.06, 12, 30.0, &Flat::new(0.055)).unwrap()
        });
    });
}

criterion_group!(benches, bench_ytm, bench_pricing);
criterion_main!(benches);
