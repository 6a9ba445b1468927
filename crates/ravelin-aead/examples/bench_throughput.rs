// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Casual roundtrip benchmark across the three variants.
// Usage: cargo run --release --example bench_throughput

use std::time::Instant;

use ravelin_aead::{Aead, AeadError};

fn benchmark_size(aead: &mut Aead, size: usize, iterations: usize) -> Result<(), AeadError> {
    let key = [0u8; 16];
    let nonce = [0u8; 16];
    let mut data = vec![0u8; size];
    let mut tag = [0u8; 16];

    // Warmup
    for _ in 0..100 {
        aead.encrypt(&key, &nonce, &[], &mut data, &mut tag)?;
        aead.decrypt(&key, &nonce, &[], &mut data, &tag)?;
    }

    // Benchmark roundtrip (encrypt + decrypt together)
    let start = Instant::now();
    for _ in 0..iterations {
        aead.encrypt(&key, &nonce, &[], &mut data, &mut tag)?;
        aead.decrypt(&key, &nonce, &[], &mut data, &tag)?;
    }
    let duration = start.elapsed();

    // The data is processed twice per roundtrip (encrypt + decrypt)
    let total_bytes = (size * iterations * 2) as f64;
    let throughput = total_bytes / duration.as_secs_f64() / 1_000_000_000.0;

    println!(
        "{:>9} bytes: {:>7.2} GB/s ({:>10.2} ns/roundtrip)",
        size,
        throughput,
        duration.as_nanos() as f64 / iterations as f64,
    );

    Ok(())
}

fn bench_backend(mut aead: Aead) -> Result<(), AeadError> {
    println!("{}", aead.backend_name());
    println!("------------------------------------");

    benchmark_size(&mut aead, 64, 200_000)?;
    benchmark_size(&mut aead, 256, 200_000)?;
    benchmark_size(&mut aead, 1024, 100_000)?;
    benchmark_size(&mut aead, 4096, 50_000)?;
    benchmark_size(&mut aead, 16384, 20_000)?;
    benchmark_size(&mut aead, 65536, 5_000)?;
    benchmark_size(&mut aead, 262144, 1_000)?;
    benchmark_size(&mut aead, 1048576, 250)?;
    println!();

    Ok(())
}

fn main() -> Result<(), AeadError> {
    println!("AEGIS-128 family roundtrip benchmark");
    println!("====================================");
    println!();

    bench_backend(Aead::with_aegis128l()?)?;
    bench_backend(Aead::with_aegis128x2()?)?;
    bench_backend(Aead::with_aegis128x4()?)?;

    println!("auto-selected: {}", Aead::new()?.backend_name());

    Ok(())
}
