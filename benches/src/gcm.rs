//! Full AES-GCM encrypt and decrypt per strategy.
use benches::{Benchmarker, SIZES, criterion_group_bench};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gcm_ref::{ExpandedKey, Gcm, KeySize, Strategy};

const NONCE: [u8; 12] = [0x24; 12];
const AAD: [u8; 20] = [0x42; 20];

fn bench(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("aes-gcm");

    for size in [KeySize::Aes128, KeySize::Aes256] {
        let key_bits = size.bits();
        let key = ExpandedKey::expand(&vec![0x11; size.key_len()], key_bits);
        for size in SIZES {
            let pt = vec![0u8; size];
            group.throughput(Throughput::Bytes(size as u64));

            for strategy in Strategy::ALL {
                let gcm = Gcm::new(&key, strategy.backend());
                let (ct, tag) = gcm.encrypt(&NONCE, &AAD, &pt);

                let id = format!("encrypt-aes{key_bits}-{strategy}");
                group.bench_function(BenchmarkId::new(id, size), |b| {
                    b.iter(|| gcm.encrypt(&NONCE, &AAD, &pt));
                });

                let id = format!("decrypt-aes{key_bits}-{strategy}");
                group.bench_function(BenchmarkId::new(id, size), |b| {
                    b.iter(|| gcm.decrypt(&NONCE, &AAD, &ct, tag.as_bytes()));
                });
            }
        }
    }

    group.finish();
}

criterion_group_bench!(benches, bench);
criterion_main!(benches);
