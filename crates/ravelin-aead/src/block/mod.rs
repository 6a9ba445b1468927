// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Opaque AES block abstraction.
//!
//! Each engine manipulates the AEGIS state through one block type exposing
//! the operation set `{load, store, xor, and, round}`. Only this module
//! touches the underlying vector representation; the protocol layer is
//! generic over [`AesBlock`] and never sees an intrinsic.
//!
//! Wider degrees are built either from native wide vectors (VAES) or by
//! pairing narrower blocks with [`Lanes`]. Both give byte-identical
//! results, which is what makes cross-engine parity testable.

#[cfg(target_arch = "aarch64")]
pub(crate) mod aarch64;
#[cfg(any(feature = "soft", test))]
pub(crate) mod soft;
#[cfg(target_arch = "x86_64")]
pub(crate) mod x86_64;

/// Widest lane row in bytes (degree 4).
pub(crate) const MAX_WIDTH: usize = 64;

/// One row of 128-bit AES lanes.
///
/// `round` is a single AES encryption round applied lane-wise:
/// `MixColumns(ShiftRows(SubBytes(self))) ^ rk`. Implementations must be
/// branch-free and access memory independently of block contents; the
/// hardware backends inherit this from the round instruction itself.
pub(crate) trait AesBlock: Copy {
    /// Row width in bytes; always a multiple of 16.
    const WIDTH: usize;

    /// Loads `Self::WIDTH` bytes.
    fn load(bytes: &[u8]) -> Self;

    /// Stores `Self::WIDTH` bytes.
    fn store(self, out: &mut [u8]);

    /// Lane-wise XOR.
    fn xor(self, rhs: Self) -> Self;

    /// Lane-wise AND.
    fn and(self, rhs: Self) -> Self;

    /// One AES encryption round per 128-bit lane, `rk` XORed in last.
    fn round(self, rk: Self) -> Self;
}

/// Doubles a block's degree by running two rows side by side.
///
/// `Lanes<Lanes<B>>` quadruples it. Lane order matches a contiguous load of
/// the doubled width, so a native wide vector and its paired equivalent are
/// interchangeable.
#[derive(Clone, Copy)]
pub(crate) struct Lanes<B: AesBlock>(B, B);

impl<B: AesBlock> AesBlock for Lanes<B> {
    const WIDTH: usize = 2 * B::WIDTH;

    #[inline(always)]
    fn load(bytes: &[u8]) -> Self {
        Self(
            B::load(&bytes[..B::WIDTH]),
            B::load(&bytes[B::WIDTH..2 * B::WIDTH]),
        )
    }

    #[inline(always)]
    fn store(self, out: &mut [u8]) {
        self.0.store(&mut out[..B::WIDTH]);
        self.1.store(&mut out[B::WIDTH..2 * B::WIDTH]);
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(self.0.xor(rhs.0), self.1.xor(rhs.1))
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(self.0.and(rhs.0), self.1.and(rhs.1))
    }

    #[inline(always)]
    fn round(self, rk: Self) -> Self {
        Self(self.0.round(rk.0), self.1.round(rk.1))
    }
}
