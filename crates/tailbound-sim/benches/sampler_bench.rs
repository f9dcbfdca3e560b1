use criterion::{criterion_group, criterion_main, Criterion};

use tailbound_core::traits::ISampler;
use tailbound_sim::CoinFlipSampler;

fn bench_sample_default_load(c: &mut Criterion) {
    let sampler = CoinFlipSampler::new();
    c.bench_function("sample_12k_trials_100_coins", |b| {
        b.iter(|| sampler.sample(100, 12_000));
    });
}

fn bench_tail_count(c: &mut Criterion) {
    let sample = CoinFlipSampler::new().sample(100, 12_000);
    c.bench_function("tail_count_12k", |b| {
        b.iter(|| sample.tail_count(60.0));
    });
}

criterion_group!(benches, bench_sample_default_load, bench_tail_count);
criterion_main!(benches);
