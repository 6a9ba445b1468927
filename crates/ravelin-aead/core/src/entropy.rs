// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem::size_of;

use crate::error::EntropyError;

/// Trait for cryptographically secure random number generators.
///
/// Implementations must provide randomness suitable for key and nonce
/// generation. Typically backed by an OS-level CSPRNG.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the entropy source
    /// fails to produce random data.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Trait for fixed-size nonce generators.
///
/// Each generated nonce must be unique per key for the lifetime of that key;
/// uniqueness is the caller's invariant, the generator only makes collisions
/// statistically negligible within one session.
pub trait NonceGenerator<const N: usize> {
    /// Produces the next nonce.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the underlying
    /// entropy source fails.
    fn generate_nonce(&mut self) -> Result<[u8; N], EntropyError>;
}

/// OS-level CSPRNG backed by `getrandom`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}

type Counter = u32;

/// Session-scoped nonce generator: a wrapping counter prefix plus a random
/// suffix.
///
/// A collision requires both a counter wrap (2^32 nonces) and a repeat of
/// the random suffix, so the pair-collision probability after wrapping is
/// ~1/2^96 for 16-byte nonces.
///
/// The counter starts at a random value so consecutive sessions do not emit
/// predictable prefixes.
pub struct SessionNonceGenerator<E: EntropySource, const NONCE_SIZE: usize> {
    entropy: E,
    counter: Counter,
    initialized: bool,
}

impl<E: EntropySource, const NONCE_SIZE: usize> SessionNonceGenerator<E, NONCE_SIZE> {
    /// Creates a new generator over the given entropy source.
    ///
    /// The counter is lazily seeded on first use.
    pub fn new(entropy: E) -> Self {
        Self {
            entropy,
            counter: 0,
            initialized: false,
        }
    }

    fn maybe_seed_counter(&mut self) -> Result<(), EntropyError> {
        if !self.initialized {
            let mut seed = [0u8; size_of::<Counter>()];
            self.entropy.fill_bytes(&mut seed)?;
            self.counter = Counter::from_le_bytes(seed);
            self.initialized = true;
        }

        Ok(())
    }
}

impl<E: EntropySource, const NONCE_SIZE: usize> NonceGenerator<NONCE_SIZE>
    for SessionNonceGenerator<E, NONCE_SIZE>
{
    fn generate_nonce(&mut self) -> Result<[u8; NONCE_SIZE], EntropyError> {
        const { assert!(NONCE_SIZE >= size_of::<Counter>()) };

        self.maybe_seed_counter()?;

        let mut nonce = [0u8; NONCE_SIZE];
        nonce[..size_of::<Counter>()].copy_from_slice(&self.counter.to_le_bytes());
        self.entropy.fill_bytes(&mut nonce[size_of::<Counter>()..])?;

        self.counter = self.counter.wrapping_add(1);

        Ok(nonce)
    }
}
