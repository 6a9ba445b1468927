// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors returned by AEAD operations.
///
/// All failures are reported as values; no operation leaves partially
/// trusted data behind. In particular, on [`AeadError::AuthenticationFailed`]
/// the output buffer has been zeroized before the error is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AeadError {
    /// A key, nonce or tag buffer does not have the algorithm's fixed size.
    ///
    /// Rejected before any state mutation.
    #[error("{name} must be {expected} bytes, got {actual}")]
    InvalidLength {
        /// Which input failed validation ("key", "nonce" or "tag").
        name: &'static str,
        /// The algorithm's fixed size for this input.
        expected: usize,
        /// The size the caller supplied.
        actual: usize,
    },

    /// Tag verification failed during decryption.
    ///
    /// Deliberately carries no detail: which byte differed is not
    /// observable, and the comparison itself runs in constant time.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// No state-update engine is usable on this CPU.
    ///
    /// Only reachable when the `soft` fallback feature is disabled and the
    /// running CPU offers none of the required instruction sets. The
    /// condition is detected once and surfaced on every subsequent call.
    #[error("no usable AEAD backend for this CPU")]
    UnsupportedPlatform,
}

/// Errors from entropy sources.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The OS entropy source is unavailable or failed.
    #[error("system entropy source not available")]
    EntropyNotAvailable,
}
