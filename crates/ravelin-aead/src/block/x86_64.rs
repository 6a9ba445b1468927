// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! x86_64 block types: AES-NI, VAES/AVX2 and VAES/AVX-512F.
//!
//! Every method is `#[inline(always)]` so the whole engine collapses into
//! the `#[target_feature]` entry points in the dispatcher; these types must
//! only ever be driven through an entry point whose features the dispatcher
//! has confirmed.

use core::arch::x86_64::{
    __m128i, __m256i, __m512i, _mm_aesenc_si128, _mm_and_si128, _mm_loadu_si128, _mm_storeu_si128,
    _mm_xor_si128, _mm256_aesenc_epi128, _mm256_and_si256, _mm256_loadu_si256,
    _mm256_storeu_si256, _mm256_xor_si256, _mm512_aesenc_epi128, _mm512_and_si512,
    _mm512_loadu_si512, _mm512_storeu_si512, _mm512_xor_si512,
};

use super::AesBlock;

/// One 128-bit lane (AES-NI).
#[derive(Clone, Copy)]
pub(crate) struct AesniBlock(__m128i);

impl AesBlock for AesniBlock {
    const WIDTH: usize = 16;

    #[inline(always)]
    fn load(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() >= 16);
        Self(unsafe { _mm_loadu_si128(bytes.as_ptr().cast()) })
    }

    #[inline(always)]
    fn store(self, out: &mut [u8]) {
        debug_assert!(out.len() >= 16);
        unsafe { _mm_storeu_si128(out.as_mut_ptr().cast(), self.0) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe { _mm_and_si128(self.0, rhs.0) })
    }

    #[inline(always)]
    fn round(self, rk: Self) -> Self {
        Self(unsafe { _mm_aesenc_si128(self.0, rk.0) })
    }
}

/// Two 128-bit lanes in one 256-bit register (VAES + AVX2).
#[derive(Clone, Copy)]
pub(crate) struct Vaes256Block(__m256i);

impl AesBlock for Vaes256Block {
    const WIDTH: usize = 32;

    #[inline(always)]
    fn load(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() >= 32);
        Self(unsafe { _mm256_loadu_si256(bytes.as_ptr().cast()) })
    }

    #[inline(always)]
    fn store(self, out: &mut [u8]) {
        debug_assert!(out.len() >= 32);
        unsafe { _mm256_storeu_si256(out.as_mut_ptr().cast(), self.0) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_xor_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_and_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn round(self, rk: Self) -> Self {
        Self(unsafe { _mm256_aesenc_epi128(self.0, rk.0) })
    }
}

/// Four 128-bit lanes in one 512-bit register (VAES + AVX-512F).
#[derive(Clone, Copy)]
pub(crate) struct Vaes512Block(__m512i);

impl AesBlock for Vaes512Block {
    const WIDTH: usize = 64;

    #[inline(always)]
    fn load(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() >= 64);
        Self(unsafe { _mm512_loadu_si512(bytes.as_ptr().cast()) })
    }

    #[inline(always)]
    fn store(self, out: &mut [u8]) {
        debug_assert!(out.len() >= 64);
        unsafe { _mm512_storeu_si512(out.as_mut_ptr().cast(), self.0) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_xor_si512(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_and_si512(self.0, rhs.0) })
    }

    #[inline(always)]
    fn round(self, rk: Self) -> Self {
        Self(unsafe { _mm512_aesenc_epi128(self.0, rk.0) })
    }
}
