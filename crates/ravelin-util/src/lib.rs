// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_util
//!
//! Constant-time helpers shared across the Ravelin AEAD suite.
//!
//! The only production export is [`constant_time_eq`]; everything else is
//! test tooling behind the `test-utils` feature.

#![cfg_attr(not(any(test, feature = "test-utils")), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "test-utils")]
mod hex;

#[cfg(feature = "test-utils")]
pub use hex::hex_to_bytes;

/// Compares two byte slices in constant time with respect to their contents.
///
/// Accumulates the OR of per-byte XOR differences and branches exactly once,
/// at the end. Slices of unequal length compare unequal; the length check is
/// not secret (lengths are public in every caller).
///
/// Never use `==` to compare authentication tags: slice equality may
/// short-circuit on the first mismatched byte.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    // black_box keeps the accumulator opaque so the loop cannot be rewritten
    // into an early-exit comparison.
    core::hint::black_box(diff) == 0
}
