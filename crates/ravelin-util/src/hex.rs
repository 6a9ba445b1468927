// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hex decoding for test vectors.

/// Decodes a hex string into bytes.
///
/// # Panics
///
/// Panics on odd-length input or non-hex digits. This is a test helper;
/// malformed vectors are programmer errors.
#[must_use]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string has odd length: {}", hex.len());

    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| {
            let hi = (pair[0] as char).to_digit(16).expect("non-hex digit");
            let lo = (pair[1] as char).to_digit(16).expect("non-hex digit");
            (hi * 16 + lo) as u8
        })
        .collect()
}
