// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Generic AEGIS-128 state machine and one-shot drivers.
//!
//! `Aegis<B>` is the eight-lane state of AEGIS-128L generalized over the
//! block width: with a 16-byte block it is AEGIS-128L, with 32/64-byte
//! blocks it is AEGIS-128X2/X4 (the per-lane context constants folded into
//! initialization are what separate the parallel variants from D copies of
//! the base algorithm). Every engine of a variant therefore shares this one
//! implementation and differs only in the block type it plugs in.
//!
//! Everything here is `#[inline(always)]`: the drivers are instantiated
//! inside `#[target_feature]` entry points and must collapse into them.

use ravelin_util::constant_time_eq;
use zeroize::Zeroize;

use crate::block::{AesBlock, MAX_WIDTH};

use super::consts::{C0, C1, MAX_RATE, TAG_SIZE};

pub(crate) struct Aegis<B: AesBlock> {
    v: [B; 8],
}

impl<B: AesBlock> Aegis<B> {
    /// 128-bit lanes per block.
    pub(crate) const DEGREE: usize = B::WIDTH / 16;

    /// Bytes absorbed per update: two blocks.
    pub(crate) const RATE: usize = 2 * B::WIDTH;

    /// Repeats a 16-byte value across every lane.
    #[inline(always)]
    fn broadcast(lane: &[u8; 16]) -> B {
        let mut buf = [0u8; MAX_WIDTH];
        for chunk in buf[..B::WIDTH].chunks_exact_mut(16) {
            chunk.copy_from_slice(lane);
        }
        B::load(&buf[..B::WIDTH])
    }

    /// Context-separation block: lane i carries (i, degree - 1) in its
    /// first two bytes. All-zero at degree 1, where the algorithm must
    /// reduce to plain AEGIS-128L.
    #[inline(always)]
    fn context() -> B {
        let mut buf = [0u8; MAX_WIDTH];
        for (i, chunk) in buf[..B::WIDTH].chunks_exact_mut(16).enumerate() {
            chunk[0] = i as u8;
            chunk[1] = (Self::DEGREE - 1) as u8;
        }
        B::load(&buf[..B::WIDTH])
    }

    #[inline(always)]
    pub(crate) fn new(key: &[u8; 16], nonce: &[u8; 16]) -> Self {
        let key_b = Self::broadcast(key);
        let nonce_b = Self::broadcast(nonce);
        let c0 = Self::broadcast(&C0);
        let c1 = Self::broadcast(&C1);
        let key_nonce = key_b.xor(nonce_b);

        let mut state = Self {
            v: [
                key_nonce,
                c1,
                c0,
                c1,
                key_nonce,
                key_b.xor(c0),
                key_b.xor(c1),
                key_b.xor(c0),
            ],
        };

        let ctx = Self::context();
        for _ in 0..10 {
            state.v[3] = state.v[3].xor(ctx);
            state.v[7] = state.v[7].xor(ctx);
            state.update(nonce_b, key_b);
        }

        state
    }

    /// One state update: rotate every lane through the AES round, then
    /// absorb the two message blocks into lanes 0 and 4.
    #[inline(always)]
    pub(crate) fn update(&mut self, m0: B, m1: B) {
        let v = &mut self.v;
        let tmp = v[7];
        v[7] = v[6].round(v[7]);
        v[6] = v[5].round(v[6]);
        v[5] = v[4].round(v[5]);
        v[4] = v[3].round(v[4]);
        v[3] = v[2].round(v[3]);
        v[2] = v[1].round(v[2]);
        v[1] = v[0].round(v[1]);
        v[0] = tmp.round(v[0]);

        v[0] = v[0].xor(m0);
        v[4] = v[4].xor(m1);
    }

    /// Absorbs one rate-sized chunk of associated data.
    #[inline(always)]
    fn absorb(&mut self, chunk: &[u8]) {
        let m0 = B::load(&chunk[..B::WIDTH]);
        let m1 = B::load(&chunk[B::WIDTH..Self::RATE]);
        self.update(m0, m1);
    }

    #[inline(always)]
    fn keystream(&self) -> (B, B) {
        let v = &self.v;
        let z0 = v[6].xor(v[1]).xor(v[2].and(v[3]));
        let z1 = v[2].xor(v[5]).xor(v[6].and(v[7]));
        (z0, z1)
    }

    /// Encrypts one full chunk in place, absorbing the plaintext.
    #[inline(always)]
    fn enc(&mut self, chunk: &mut [u8]) {
        let (z0, z1) = self.keystream();
        let t0 = B::load(&chunk[..B::WIDTH]);
        let t1 = B::load(&chunk[B::WIDTH..Self::RATE]);
        t0.xor(z0).store(&mut chunk[..B::WIDTH]);
        t1.xor(z1).store(&mut chunk[B::WIDTH..Self::RATE]);
        self.update(t0, t1);
    }

    /// Encrypts a short tail: the plaintext is zero-padded to the rate in a
    /// scratch buffer, absorbed whole, and only `tail.len()` ciphertext
    /// bytes are written back.
    #[inline(always)]
    fn enc_partial(&mut self, tail: &mut [u8]) {
        let mut pad = [0u8; MAX_RATE];
        pad[..tail.len()].copy_from_slice(tail);

        let (z0, z1) = self.keystream();
        let t0 = B::load(&pad[..B::WIDTH]);
        let t1 = B::load(&pad[B::WIDTH..Self::RATE]);
        t0.xor(z0).store(&mut pad[..B::WIDTH]);
        t1.xor(z1).store(&mut pad[B::WIDTH..Self::RATE]);
        tail.copy_from_slice(&pad[..tail.len()]);

        self.update(t0, t1);
        pad.zeroize();
    }

    /// Decrypts one full chunk in place, absorbing the recovered plaintext.
    #[inline(always)]
    fn dec(&mut self, chunk: &mut [u8]) {
        let (z0, z1) = self.keystream();
        let p0 = B::load(&chunk[..B::WIDTH]).xor(z0);
        let p1 = B::load(&chunk[B::WIDTH..Self::RATE]).xor(z1);
        p0.store(&mut chunk[..B::WIDTH]);
        p1.store(&mut chunk[B::WIDTH..Self::RATE]);
        self.update(p0, p1);
    }

    /// Decrypts a short tail. The recovered plaintext is re-zero-padded
    /// before absorption so the state matches what encryption produced.
    #[inline(always)]
    fn dec_partial(&mut self, tail: &mut [u8]) {
        let mut pad = [0u8; MAX_RATE];
        pad[..tail.len()].copy_from_slice(tail);

        let (z0, z1) = self.keystream();
        let out0 = B::load(&pad[..B::WIDTH]).xor(z0);
        let out1 = B::load(&pad[B::WIDTH..Self::RATE]).xor(z1);
        out0.store(&mut pad[..B::WIDTH]);
        out1.store(&mut pad[B::WIDTH..Self::RATE]);
        tail.copy_from_slice(&pad[..tail.len()]);

        pad[tail.len()..Self::RATE].fill(0);
        let v0 = B::load(&pad[..B::WIDTH]);
        let v1 = B::load(&pad[B::WIDTH..Self::RATE]);
        self.update(v0, v1);
        pad.zeroize();
    }

    /// Absorbs the bit lengths, runs the seven blank updates and folds the
    /// final state into the tag.
    #[inline(always)]
    fn finalize(mut self, aad_len: usize, msg_len: usize) -> [u8; TAG_SIZE] {
        let mut sizes = [0u8; 16];
        sizes[..8].copy_from_slice(&((aad_len as u64) * 8).to_le_bytes());
        sizes[8..].copy_from_slice(&((msg_len as u64) * 8).to_le_bytes());

        let t = self.v[2].xor(Self::broadcast(&sizes));
        for _ in 0..7 {
            self.update(t, t);
        }

        let v = &self.v;
        let acc = v[0]
            .xor(v[1])
            .xor(v[2])
            .xor(v[3])
            .xor(v[4])
            .xor(v[5])
            .xor(v[6]);

        let mut buf = [0u8; MAX_WIDTH];
        acc.store(&mut buf[..B::WIDTH]);

        let mut tag = [0u8; TAG_SIZE];
        for chunk in buf[..B::WIDTH].chunks_exact(16) {
            for (t, c) in tag.iter_mut().zip(chunk) {
                *t ^= c;
            }
        }
        buf.zeroize();

        tag
    }

    /// Absorbs associated data, zero-padding the tail in scratch only.
    #[inline(always)]
    fn absorb_aad(&mut self, aad: &[u8]) {
        let mut chunks = aad.chunks_exact(Self::RATE);
        for chunk in &mut chunks {
            self.absorb(chunk);
        }

        let tail = chunks.remainder();
        if !tail.is_empty() {
            let mut pad = [0u8; MAX_RATE];
            pad[..tail.len()].copy_from_slice(tail);
            self.absorb(&pad[..Self::RATE]);
        }
    }
}

#[cfg(test)]
impl<B: AesBlock> Aegis<B> {
    pub(crate) fn from_lanes(v: [B; 8]) -> Self {
        Self { v }
    }

    pub(crate) fn lanes(&self) -> &[B; 8] {
        &self.v
    }
}

/// One-shot in-place encryption. `data` is plaintext on entry, ciphertext
/// of the same length on return.
#[inline(always)]
pub(crate) fn encrypt<B: AesBlock>(
    key: &[u8; 16],
    nonce: &[u8; 16],
    aad: &[u8],
    data: &mut [u8],
    tag: &mut [u8; TAG_SIZE],
) {
    let msg_len = data.len();
    let mut state = Aegis::<B>::new(key, nonce);

    state.absorb_aad(aad);

    let mut chunks = data.chunks_exact_mut(Aegis::<B>::RATE);
    for chunk in &mut chunks {
        state.enc(chunk);
    }
    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        state.enc_partial(tail);
    }

    *tag = state.finalize(aad.len(), msg_len);
}

/// One-shot in-place decryption with tag verification.
///
/// On mismatch the buffer is zeroized before the error is returned: no
/// candidate plaintext ever reaches the caller.
#[inline(always)]
pub(crate) fn decrypt<B: AesBlock>(
    key: &[u8; 16],
    nonce: &[u8; 16],
    aad: &[u8],
    data: &mut [u8],
    tag: &[u8; TAG_SIZE],
) -> Result<(), ravelin_aead_core::AeadError> {
    let msg_len = data.len();
    let mut state = Aegis::<B>::new(key, nonce);

    state.absorb_aad(aad);

    let mut chunks = data.chunks_exact_mut(Aegis::<B>::RATE);
    for chunk in &mut chunks {
        state.dec(chunk);
    }
    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        state.dec_partial(tail);
    }

    let expected = state.finalize(aad.len(), msg_len);
    if constant_time_eq(&expected, tag) {
        Ok(())
    } else {
        data.zeroize();
        Err(ravelin_aead_core::AeadError::AuthenticationFailed)
    }
}
