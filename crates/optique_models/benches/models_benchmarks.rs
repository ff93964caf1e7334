//! Criterion benchmarks for the Black-Scholes engine.
//!
//! Measures a single price evaluation, the full Greeks tuple, and a strike
//! ladder sweep of the size a dashboard would request per refresh.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use optique_models::analytical::BlackScholes;
use optique_models::instruments::{OptionParams, OptionType};

fn engine() -> BlackScholes<f64> {
    BlackScholes::new(OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap())
}

fn bench_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("price");
    let bs = engine();

    group.bench_function("call", |b| {
        b.iter(|| black_box(&bs).price(OptionType::Call));
    });

    group.bench_function("put", |b| {
        b.iter(|| black_box(&bs).price(OptionType::Put));
    });

    // 100 strikes, the shape of a per-refresh ladder
    group.bench_function("call_ladder_100", |b| {
        let engines: Vec<BlackScholes<f64>> = (0..100)
            .map(|i| {
                let strike = 50.0 + i as f64;
                BlackScholes::new(OptionParams::new(100.0, strike, 1.0, 0.05, 0.2).unwrap())
            })
            .collect();
        b.iter(|| {
            for bs in &engines {
                let _ = black_box(bs).price_call();
            }
        });
    });

    group.finish();
}

fn bench_greeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("greeks");
    let bs = engine();

    group.bench_function("full_tuple", |b| {
        b.iter(|| black_box(&bs).greeks());
    });

    group.finish();
}

criterion_group!(benches, bench_price, bench_greeks);
criterion_main!(benches);
