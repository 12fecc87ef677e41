use cryptolab::hash::sha256;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sha2::{Digest, Sha256};
use std::hint::black_box;

pub fn bench_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    for size in [64usize, 1024, 16 * 1024] {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("cryptolab", size), &data, |b, data| {
            b.iter(|| sha256(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("sha2", size), &data, |b, data| {
            b.iter(|| {
                let mut hasher = Sha256::new();
                hasher.update(black_box(data));
                hasher.finalize()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha256);
criterion_main!(benches);
