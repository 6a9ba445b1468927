// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use ravelin_aead::Aead;

/// Encrypt-only throughput per variant, one group each, so the parallel
/// degrees can be compared on the same machine.
fn benchmark_variants(c: &mut Criterion) {
    let variants: [(&str, fn() -> Result<Aead, ravelin_aead::AeadError>); 3] = [
        ("aegis128l", Aead::with_aegis128l),
        ("aegis128x2", Aead::with_aegis128x2),
        ("aegis128x4", Aead::with_aegis128x4),
    ];

    for (label, bind) in variants {
        let mut group = c.benchmark_group(format!("{label}_encrypt"));

        for size in [256, 4096, 65536].iter() {
            group.throughput(Throughput::Bytes(*size as u64));
            group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
                let key = [0u8; 16];
                let nonce = [0u8; 16];
                let mut data = vec![0u8; size];
                let mut tag = [0u8; 16];
                let mut aead = bind().expect("backend resolution failed");

                b.iter(|| {
                    aead.encrypt(
                        black_box(&key),
                        black_box(&nonce),
                        black_box(&[]),
                        black_box(&mut data),
                        black_box(&mut tag),
                    )
                    .expect("encrypt failed");
                });
            });
        }
        group.finish();
    }
}

criterion_group!(benches, benchmark_variants);
criterion_main!(benches);
