//! GHASH throughput per strategy.
use benches::{Benchmarker, SIZES, criterion_group_bench};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gcm_ref::{Block, Strategy, ghash::ghash};

fn bench(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("ghash");
    let h = Block::from_u128(0x66e9_4bd4_ef8a_2c3b_884c_fa59_ca34_2b2e);

    for size in SIZES {
        let data = vec![0x5au8; size];
        group.throughput(Throughput::Bytes(size as u64));

        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &data, |b, data| {
                b.iter(|| ghash(strategy.backend(), h, &[], data));
            });
        }
    }

    group.finish();
}

criterion_group_bench!(benches, bench);
criterion_main!(benches);
