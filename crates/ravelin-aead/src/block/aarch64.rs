// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! aarch64 block type over the ARMv8 crypto extensions.
//!
//! AESE xors the round key before SubBytes, while the x86 round instruction
//! and the software fallback apply it after MixColumns. Feeding AESE a zero
//! key and xoring the real key after AESMC reproduces the common semantics
//! exactly.

use core::arch::aarch64::{
    uint8x16_t, vaeseq_u8, vaesmcq_u8, vandq_u8, vdupq_n_u8, veorq_u8, vld1q_u8, vst1q_u8,
};

use super::AesBlock;

/// One 128-bit lane (NEON + AES extension).
#[derive(Clone, Copy)]
pub(crate) struct NeonBlock(uint8x16_t);

impl AesBlock for NeonBlock {
    const WIDTH: usize = 16;

    #[inline(always)]
    fn load(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() >= 16);
        Self(unsafe { vld1q_u8(bytes.as_ptr()) })
    }

    #[inline(always)]
    fn store(self, out: &mut [u8]) {
        debug_assert!(out.len() >= 16);
        unsafe { vst1q_u8(out.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { veorq_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe { vandq_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn round(self, rk: Self) -> Self {
        Self(unsafe {
            veorq_u8(vaesmcq_u8(vaeseq_u8(self.0, vdupq_n_u8(0))), rk.0)
        })
    }
}
