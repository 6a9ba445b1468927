// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEGIS-128 family front types.

#[cfg(test)]
mod state_test_support;
#[cfg(test)]
mod tests;

mod consts;
pub(crate) mod state;

pub use consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};

use ravelin_aead_core::{
    AeadBackend, AeadError, EntropyError, EntropySource, NonceGenerator, SessionNonceGenerator,
    SystemEntropySource,
};

use crate::dispatch;

/// AEGIS-128 key type.
pub type Key = [u8; KEY_SIZE];
/// AEGIS-128 nonce type.
pub type Nonce = [u8; NONCE_SIZE];
/// AEGIS-128 tag type.
pub type Tag = [u8; TAG_SIZE];

macro_rules! define_variant {
    ($(#[$doc:meta])* $name:ident, $resolver:ident) => {
        $(#[$doc])*
        pub struct $name<E: EntropySource = SystemEntropySource> {
            nonce_gen: SessionNonceGenerator<E, NONCE_SIZE>,
        }

        impl<E: EntropySource> $name<E> {
            /// Key size in bytes
            pub const KEY_SIZE: usize = KEY_SIZE;
            /// Nonce size in bytes
            pub const NONCE_SIZE: usize = NONCE_SIZE;
            /// Authentication tag size in bytes
            pub const TAG_SIZE: usize = TAG_SIZE;

            /// Creates a new instance with the provided entropy source.
            pub fn new(entropy: E) -> Self {
                Self {
                    nonce_gen: SessionNonceGenerator::new(entropy),
                }
            }

            /// Name of the engine servicing this algorithm on this CPU,
            /// e.g. `"aegis128l/aesni"`.
            pub fn backend_name(&self) -> &'static str {
                match dispatch::$resolver() {
                    Ok(engine) => engine.name,
                    Err(_) => "unavailable",
                }
            }
        }

        impl Default for $name<SystemEntropySource> {
            fn default() -> Self {
                Self::new(SystemEntropySource {})
            }
        }

        impl<E: EntropySource> core::fmt::Debug for $name<E> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!(stringify!($name), " {{ backend: {} }}"), self.backend_name())
            }
        }

        impl<E: EntropySource> AeadBackend for $name<E> {
            type Key = Key;
            type Nonce = Nonce;
            type Tag = Tag;

            #[inline]
            fn encrypt(
                &mut self,
                key: &Self::Key,
                nonce: &Self::Nonce,
                aad: &[u8],
                data: &mut [u8],
                tag: &mut Self::Tag,
            ) -> Result<(), AeadError> {
                let engine = dispatch::$resolver()?;
                engine.encrypt(key, nonce, aad, data, tag);
                Ok(())
            }

            #[inline]
            fn decrypt(
                &mut self,
                key: &Self::Key,
                nonce: &Self::Nonce,
                aad: &[u8],
                data: &mut [u8],
                tag: &Self::Tag,
            ) -> Result<(), AeadError> {
                let engine = dispatch::$resolver()?;
                engine.decrypt(key, nonce, aad, data, tag)
            }

            fn generate_nonce(&mut self) -> Result<Self::Nonce, EntropyError> {
                self.nonce_gen.generate_nonce()
            }
        }
    };
}

define_variant!(
    /// AEGIS-128L (RFC 9773): 8 × 128-bit lanes, 32-byte rate.
    Aegis128L,
    aegis128l
);

define_variant!(
    /// AEGIS-128X2 (RFC 9773): two-lane parallel variant, 64-byte rate.
    ///
    /// A distinct algorithm from AEGIS-128L; ciphertexts and tags differ.
    Aegis128X2,
    aegis128x2
);

define_variant!(
    /// AEGIS-128X4 (RFC 9773): four-lane parallel variant, 128-byte rate.
    ///
    /// A distinct algorithm from AEGIS-128L; ciphertexts and tags differ.
    Aegis128X4,
    aegis128x4
);
