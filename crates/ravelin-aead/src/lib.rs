// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_aead
//!
//! AEGIS-128 family AEAD (AEGIS-128L, AEGIS-128X2, AEGIS-128X4) with
//! runtime CPU-capability dispatch.
//!
//! Every algorithm is serviced by the fastest state-update engine the
//! running CPU supports (VAES/AVX-512, VAES/AVX2, AES-NI, ARMv8 crypto
//! extensions or the portable fallback), resolved once per process. All
//! engines of an algorithm produce byte-identical ciphertext and tags.
//!
//! ## Choosing an algorithm
//!
//! - [`Aegis128L`]: the baseline, fastest on 128-bit AES hardware.
//! - [`Aegis128X2`] / [`Aegis128X4`]: data-parallel variants that win on
//!   CPUs with 256-/512-bit vector AES. These are distinct algorithms, not
//!   accelerations of AEGIS-128L: their outputs differ.
//! - [`Aead`]: binds to whichever of the three the CPU runs fastest.
//!
//! All variants use 16-byte keys, 16-byte nonces and 16-byte tags. Nonces
//! must never repeat under the same key; the library does not enforce
//! uniqueness.

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod aead;
mod aegis;
mod block;
mod dispatch;

pub use aead::Aead;
pub use aegis::{
    Aegis128L, Aegis128X2, Aegis128X4, KEY_SIZE, Key, NONCE_SIZE, Nonce, TAG_SIZE, Tag,
};
pub use ravelin_aead_core::{
    AeadBackend, AeadError, EntropyError, EntropySource, NonceGenerator, SystemEntropySource,
};
