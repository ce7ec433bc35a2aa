use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use msdsort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Strings");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(90)); // Increase time for large sort setup overhead

    // Dataset generation
    let mut rng = rand::rng();
    let count = 1_000_000;

    let random_strings: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(8..24);
            (0..len).map(|_| rng.random::<char>()).collect()
        })
        .collect();

    // Calculate approximate size for throughput
    let total_bytes: usize = random_strings.iter().map(|s| s.len()).sum();
    group.throughput(Throughput::Bytes(total_bytes as u64));

    group.bench_function("msdsort (in-place)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    // One-byte passes only, to compare against the adaptive default.
    let one_byte = SortConfig::default().with_byte_budget(usize::MAX).unwrap();
    group.bench_function("msdsort (one-byte only)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| RadixSorter::with_config(one_byte).sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| data.sort(),
            BatchSize::LargeInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_strings);
criterion_main!(benches);
