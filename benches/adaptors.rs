use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazy_itertools::{compress, count, cycle, enumerate, filter, reversed, zip, SequenceExt};

pub fn adaptor_pipelines(c: &mut Criterion) {
    let data: Vec<u64> = (0..10_000).collect();
    let selectors: Vec<bool> = (0..10_000).map(|i| i % 3 != 0).collect();
    let mut group = c.benchmark_group("adaptors");
    group.throughput(criterion::Throughput::Elements(data.len() as u64));
    group.bench_function("enumerate_filter", |b| {
        b.iter(|| {
            filter(|(i, _): &(usize, &u64)| i % 2 == 0, enumerate(black_box(&data), 0))
                .map(|(_, x)| *x)
                .sum::<u64>()
        })
    });
    group.bench_function("compress", |b| {
        b.iter(|| {
            compress(black_box(&data), black_box(&selectors))
                .copied()
                .sum::<u64>()
        })
    });
    group.bench_function("zip_count_reversed", |b| {
        b.iter(|| {
            zip(count(0_u64, 1), reversed(black_box(&data)))
                .takewhile(|(i, _)| *i < 5_000)
                .map(|(i, x)| i ^ x)
                .fold(0, |acc, v| acc ^ v)
        })
    });
    group.bench_function("cycle_take", |b| {
        b.iter(|| cycle(black_box(&data[..16])).take(10_000).copied().sum::<u64>())
    });
    group.finish();
}

criterion_group!(benches, adaptor_pipelines);
criterion_main!(benches);
