// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capability-bound AEAD front.
//!
//! [`Aead`] hides the algorithm choice: at construction the dispatcher binds
//! it to the variant the running CPU executes fastest (AEGIS-128X4 on
//! 512-bit vector AES, X2 on 256-bit, otherwise AEGIS-128L). All variants
//! share 16-byte keys, nonces and tags, so the surface is fixed no matter
//! which engine was chosen.
//!
//! Because the variant is CPU-dependent, ciphertexts from `Aead` are only
//! portable between machines that resolve to the same variant. Peers that
//! must interoperate across CPU generations should pin a variant type
//! explicitly.

#[cfg(test)]
mod tests;

use ravelin_aead_core::{
    AeadError, EntropyError, EntropySource, NonceGenerator, SessionNonceGenerator,
    SystemEntropySource,
};

use crate::aegis::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::dispatch::{self, Engine};

/// AEAD bound to the fastest AEGIS-128 variant for this CPU.
pub struct Aead<E: EntropySource = SystemEntropySource> {
    engine: Engine,
    nonce_gen: SessionNonceGenerator<E, NONCE_SIZE>,
}

impl Aead<SystemEntropySource> {
    /// Binds to the preferred variant for this CPU.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::UnsupportedPlatform`] if no engine is usable
    /// (only possible with the `soft` feature disabled).
    pub fn new() -> Result<Self, AeadError> {
        Self::from_engine(dispatch::preferred()?)
    }

    /// Binds to AEGIS-128L regardless of wider capabilities.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::UnsupportedPlatform`] if no engine is usable.
    pub fn with_aegis128l() -> Result<Self, AeadError> {
        Self::from_engine(dispatch::aegis128l()?)
    }

    /// Binds to AEGIS-128X2.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::UnsupportedPlatform`] if no engine is usable.
    pub fn with_aegis128x2() -> Result<Self, AeadError> {
        Self::from_engine(dispatch::aegis128x2()?)
    }

    /// Binds to AEGIS-128X4.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::UnsupportedPlatform`] if no engine is usable.
    pub fn with_aegis128x4() -> Result<Self, AeadError> {
        Self::from_engine(dispatch::aegis128x4()?)
    }

    fn from_engine(engine: Engine) -> Result<Self, AeadError> {
        Ok(Self {
            engine,
            nonce_gen: SessionNonceGenerator::new(SystemEntropySource {}),
        })
    }
}

impl<E: EntropySource> Aead<E> {
    /// Key size in bytes.
    pub fn key_size(&self) -> usize {
        KEY_SIZE
    }

    /// Nonce size in bytes.
    pub fn nonce_size(&self) -> usize {
        NONCE_SIZE
    }

    /// Authentication tag size in bytes.
    pub fn tag_size(&self) -> usize {
        TAG_SIZE
    }

    /// Name of the bound engine, e.g. `"aegis128x2/vaes"`.
    pub fn backend_name(&self) -> &'static str {
        self.engine.name
    }

    /// Encrypts `data` in place and writes the tag.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidLength`] if `key`, `nonce` or `tag` do
    /// not have the fixed sizes; nothing is touched in that case.
    pub fn encrypt(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8],
    ) -> Result<(), AeadError> {
        let key = checked_ref::<KEY_SIZE>("key", key)?;
        let nonce = checked_ref::<NONCE_SIZE>("nonce", nonce)?;
        let tag = checked_mut::<TAG_SIZE>("tag", tag)?;

        self.engine.encrypt(key, nonce, aad, data, tag);
        Ok(())
    }

    /// Decrypts `data` in place after verifying the tag.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidLength`] on wrong input sizes and
    /// [`AeadError::AuthenticationFailed`] on tag mismatch; in the latter
    /// case `data` has been zeroized.
    pub fn decrypt(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), AeadError> {
        let key = checked_ref::<KEY_SIZE>("key", key)?;
        let nonce = checked_ref::<NONCE_SIZE>("nonce", nonce)?;
        let tag = checked_ref::<TAG_SIZE>("tag", tag)?;

        self.engine.decrypt(key, nonce, aad, data, tag)
    }

    /// Encrypts into a fresh buffer, returning `ciphertext || tag`.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidLength`] on wrong key or nonce sizes.
    pub fn seal(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        let mut out = Vec::with_capacity(plaintext.len() + TAG_SIZE);
        out.extend_from_slice(plaintext);
        let mut tag = [0u8; TAG_SIZE];

        self.encrypt(key, nonce, aad, &mut out, &mut tag)?;
        out.extend_from_slice(&tag);
        Ok(out)
    }

    /// Decrypts a `ciphertext || tag` buffer produced by [`Aead::seal`].
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidLength`] if the buffer is shorter than a
    /// tag or the key/nonce sizes are wrong, and
    /// [`AeadError::AuthenticationFailed`] on tag mismatch.
    pub fn open(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        sealed: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        let msg_len = sealed.len().checked_sub(TAG_SIZE).ok_or(
            AeadError::InvalidLength {
                name: "sealed",
                expected: TAG_SIZE,
                actual: sealed.len(),
            },
        )?;

        let (ciphertext, tag) = sealed.split_at(msg_len);
        let mut out = ciphertext.to_vec();
        self.decrypt(key, nonce, aad, &mut out, tag)?;
        Ok(out)
    }

    /// Generates a fresh nonce.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the entropy source
    /// fails.
    pub fn generate_nonce(&mut self) -> Result<[u8; NONCE_SIZE], EntropyError> {
        self.nonce_gen.generate_nonce()
    }
}

impl<E: EntropySource> core::fmt::Debug for Aead<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Aead {{ backend: {} }}", self.engine.name)
    }
}

fn checked_ref<'a, const N: usize>(
    name: &'static str,
    bytes: &'a [u8],
) -> Result<&'a [u8; N], AeadError> {
    bytes.try_into().map_err(|_| AeadError::InvalidLength {
        name,
        expected: N,
        actual: bytes.len(),
    })
}

fn checked_mut<'a, const N: usize>(
    name: &'static str,
    bytes: &'a mut [u8],
) -> Result<&'a mut [u8; N], AeadError> {
    let actual = bytes.len();
    bytes.try_into().map_err(|_| AeadError::InvalidLength {
        name,
        expected: N,
        actual,
    })
}
