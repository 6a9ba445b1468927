// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::{AeadError, EntropyError};

/// One-shot AEAD backend with algorithm-fixed key, nonce and tag sizes.
///
/// `data` is transformed in place: encryption overwrites plaintext with
/// ciphertext of the same length, decryption restores it. The tag is a
/// separate fixed-size output, so ciphertext never carries padding or
/// framing overhead.
///
/// Implementations are pure functions of their inputs apart from nonce
/// generation; independent instances may be driven from multiple threads
/// without coordination.
pub trait AeadBackend {
    /// Key type, e.g. `[u8; 16]`.
    type Key;
    /// Nonce type. Uniqueness per key is the caller's invariant.
    type Nonce;
    /// Authentication tag type.
    type Tag;

    /// Encrypts `data` in place and writes the authentication tag.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::UnsupportedPlatform`] if no state-update engine
    /// is usable on this CPU.
    fn encrypt(
        &mut self,
        key: &Self::Key,
        nonce: &Self::Nonce,
        aad: &[u8],
        data: &mut [u8],
        tag: &mut Self::Tag,
    ) -> Result<(), AeadError>;

    /// Decrypts `data` in place after verifying the tag.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::AuthenticationFailed`] on tag mismatch; the
    /// buffer is zeroized first, so no plaintext is ever released. Returns
    /// [`AeadError::UnsupportedPlatform`] if no engine is usable.
    fn decrypt(
        &mut self,
        key: &Self::Key,
        nonce: &Self::Nonce,
        aad: &[u8],
        data: &mut [u8],
        tag: &Self::Tag,
    ) -> Result<(), AeadError>;

    /// Generates a fresh nonce for this backend's nonce size.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the entropy source
    /// fails.
    fn generate_nonce(&mut self) -> Result<Self::Nonce, EntropyError>;
}
