// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Key size in bytes, shared by every variant.
pub const KEY_SIZE: usize = 16;

/// Nonce size in bytes, shared by every variant.
pub const NONCE_SIZE: usize = 16;

/// Authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// Widest absorption rate in bytes (degree 4); scratch buffers are sized
/// to this and sliced down per engine.
pub(crate) const MAX_RATE: usize = 128;

/// First Fibonacci constant (RFC 9773 section 2.2).
pub(crate) const C0: [u8; 16] = [
    0x00, 0x01, 0x01, 0x02, 0x03, 0x05, 0x08, 0x0d, 0x15, 0x22, 0x37, 0x59, 0x90, 0xe9, 0x79,
    0x62,
];

/// Second Fibonacci constant (RFC 9773 section 2.2).
pub(crate) const C1: [u8; 16] = [
    0xdb, 0x3d, 0x18, 0x55, 0x6d, 0xc2, 0x2f, 0xf1, 0x20, 0x11, 0x31, 0x42, 0x73, 0xb5, 0x28,
    0xdd,
];
