// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime engine resolution.
//!
//! Each algorithm resolves its state-update engine once per process, on
//! first use, into a `OnceLock`. Probes run widest-vector-first and fall
//! through to the portable engine; with the `soft` feature disabled and no
//! hardware match, the failure itself is cached and every call surfaces
//! [`AeadError::UnsupportedPlatform`]. Resolution is idempotent and no
//! thread can observe a half-built engine.

use std::sync::OnceLock;

use ravelin_aead_core::AeadError;

use crate::aegis::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};

pub(crate) type EncryptFn =
    unsafe fn(&[u8; KEY_SIZE], &[u8; NONCE_SIZE], &[u8], &mut [u8], &mut [u8; TAG_SIZE]);
pub(crate) type DecryptFn = unsafe fn(
    &[u8; KEY_SIZE],
    &[u8; NONCE_SIZE],
    &[u8],
    &mut [u8],
    &[u8; TAG_SIZE],
) -> Result<(), AeadError>;

/// A resolved state-update engine for one algorithm.
///
/// Construction is proof of capability: every `Engine` value is built by a
/// probe that confirmed the CPU features its entry points require, which is
/// what makes the safe wrappers below sound.
#[derive(Clone, Copy)]
pub(crate) struct Engine {
    pub(crate) name: &'static str,
    encrypt: EncryptFn,
    decrypt: DecryptFn,
}

impl Engine {
    #[inline]
    pub(crate) fn encrypt(
        &self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8; TAG_SIZE],
    ) {
        unsafe { (self.encrypt)(key, nonce, aad, data, tag) }
    }

    #[inline]
    pub(crate) fn decrypt(
        &self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8; TAG_SIZE],
    ) -> Result<(), AeadError> {
        unsafe { (self.decrypt)(key, nonce, aad, data, tag) }
    }
}

/// Defines hardware entry points for one (algorithm, block type) pair. The
/// generic drivers are `#[inline(always)]` and collapse into these
/// functions, so the whole engine is compiled with the listed features.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
macro_rules! hw_entry {
    ($enc:ident, $dec:ident, $block:ty, $features:literal) => {
        #[target_feature(enable = $features)]
        pub(super) unsafe fn $enc(
            key: &[u8; KEY_SIZE],
            nonce: &[u8; NONCE_SIZE],
            aad: &[u8],
            data: &mut [u8],
            tag: &mut [u8; TAG_SIZE],
        ) {
            state::encrypt::<$block>(key, nonce, aad, data, tag)
        }

        #[target_feature(enable = $features)]
        pub(super) unsafe fn $dec(
            key: &[u8; KEY_SIZE],
            nonce: &[u8; NONCE_SIZE],
            aad: &[u8],
            data: &mut [u8],
            tag: &[u8; TAG_SIZE],
        ) -> Result<(), AeadError> {
            state::decrypt::<$block>(key, nonce, aad, data, tag)
        }
    };
}

#[cfg(target_arch = "x86_64")]
mod x86_64 {
    use super::*;
    use crate::aegis::state;
    use crate::block::Lanes;
    use crate::block::x86_64::{AesniBlock, Vaes256Block, Vaes512Block};

    cpufeatures::new!(cpuid_aes, "aes");
    cpufeatures::new!(cpuid_vaes256, "vaes", "avx2");
    cpufeatures::new!(cpuid_vaes512, "vaes", "avx512f");

    pub(super) fn has_aes() -> bool {
        cpuid_aes::get()
    }

    pub(super) fn has_vaes256() -> bool {
        cpuid_vaes256::get()
    }

    pub(super) fn has_vaes512() -> bool {
        cpuid_vaes512::get()
    }

    hw_entry!(encrypt_l_aesni, decrypt_l_aesni, AesniBlock, "aes");
    hw_entry!(encrypt_x2_vaes, decrypt_x2_vaes, Vaes256Block, "vaes,avx2");
    hw_entry!(encrypt_x2_aesni, decrypt_x2_aesni, Lanes<AesniBlock>, "aes");
    hw_entry!(
        encrypt_x4_vaes512,
        decrypt_x4_vaes512,
        Vaes512Block,
        "vaes,avx512f"
    );
    hw_entry!(
        encrypt_x4_vaes,
        decrypt_x4_vaes,
        Lanes<Vaes256Block>,
        "vaes,avx2"
    );
    hw_entry!(
        encrypt_x4_aesni,
        decrypt_x4_aesni,
        Lanes<Lanes<AesniBlock>>,
        "aes"
    );

    pub(super) const AEGIS128L_AESNI: Engine = Engine {
        name: "aegis128l/aesni",
        encrypt: encrypt_l_aesni,
        decrypt: decrypt_l_aesni,
    };
    pub(super) const AEGIS128X2_VAES: Engine = Engine {
        name: "aegis128x2/vaes",
        encrypt: encrypt_x2_vaes,
        decrypt: decrypt_x2_vaes,
    };
    pub(super) const AEGIS128X2_AESNI: Engine = Engine {
        name: "aegis128x2/aesni",
        encrypt: encrypt_x2_aesni,
        decrypt: decrypt_x2_aesni,
    };
    pub(super) const AEGIS128X4_VAES512: Engine = Engine {
        name: "aegis128x4/vaes512",
        encrypt: encrypt_x4_vaes512,
        decrypt: decrypt_x4_vaes512,
    };
    pub(super) const AEGIS128X4_VAES: Engine = Engine {
        name: "aegis128x4/vaes",
        encrypt: encrypt_x4_vaes,
        decrypt: decrypt_x4_vaes,
    };
    pub(super) const AEGIS128X4_AESNI: Engine = Engine {
        name: "aegis128x4/aesni",
        encrypt: encrypt_x4_aesni,
        decrypt: decrypt_x4_aesni,
    };
}

#[cfg(target_arch = "aarch64")]
mod aarch64 {
    use super::*;
    use crate::aegis::state;
    use crate::block::Lanes;
    use crate::block::aarch64::NeonBlock;

    cpufeatures::new!(cpuid_aes, "aes");

    pub(super) fn has_aes() -> bool {
        cpuid_aes::get()
    }

    hw_entry!(encrypt_l_neon, decrypt_l_neon, NeonBlock, "aes");
    hw_entry!(encrypt_x2_neon, decrypt_x2_neon, Lanes<NeonBlock>, "aes");
    hw_entry!(
        encrypt_x4_neon,
        decrypt_x4_neon,
        Lanes<Lanes<NeonBlock>>,
        "aes"
    );

    pub(super) const AEGIS128L_NEON: Engine = Engine {
        name: "aegis128l/neon",
        encrypt: encrypt_l_neon,
        decrypt: decrypt_l_neon,
    };
    pub(super) const AEGIS128X2_NEON: Engine = Engine {
        name: "aegis128x2/neon",
        encrypt: encrypt_x2_neon,
        decrypt: decrypt_x2_neon,
    };
    pub(super) const AEGIS128X4_NEON: Engine = Engine {
        name: "aegis128x4/neon",
        encrypt: encrypt_x4_neon,
        decrypt: decrypt_x4_neon,
    };
}

#[cfg(feature = "soft")]
mod soft {
    use super::*;
    use crate::aegis::state;
    use crate::block::Lanes;
    use crate::block::soft::SoftBlock;

    fn encrypt_l(
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8; TAG_SIZE],
    ) {
        state::encrypt::<SoftBlock>(key, nonce, aad, data, tag)
    }

    fn decrypt_l(
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8; TAG_SIZE],
    ) -> Result<(), AeadError> {
        state::decrypt::<SoftBlock>(key, nonce, aad, data, tag)
    }

    fn encrypt_x2(
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8; TAG_SIZE],
    ) {
        state::encrypt::<Lanes<SoftBlock>>(key, nonce, aad, data, tag)
    }

    fn decrypt_x2(
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8; TAG_SIZE],
    ) -> Result<(), AeadError> {
        state::decrypt::<Lanes<SoftBlock>>(key, nonce, aad, data, tag)
    }

    fn encrypt_x4(
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8; TAG_SIZE],
    ) {
        state::encrypt::<Lanes<Lanes<SoftBlock>>>(key, nonce, aad, data, tag)
    }

    fn decrypt_x4(
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8; TAG_SIZE],
    ) -> Result<(), AeadError> {
        state::decrypt::<Lanes<Lanes<SoftBlock>>>(key, nonce, aad, data, tag)
    }

    pub(super) const AEGIS128L: Engine = Engine {
        name: "aegis128l/soft",
        encrypt: encrypt_l as EncryptFn,
        decrypt: decrypt_l as DecryptFn,
    };
    pub(super) const AEGIS128X2: Engine = Engine {
        name: "aegis128x2/soft",
        encrypt: encrypt_x2 as EncryptFn,
        decrypt: decrypt_x2 as DecryptFn,
    };
    pub(super) const AEGIS128X4: Engine = Engine {
        name: "aegis128x4/soft",
        encrypt: encrypt_x4 as EncryptFn,
        decrypt: decrypt_x4 as DecryptFn,
    };
}

static AEGIS128L_ENGINE: OnceLock<Result<Engine, AeadError>> = OnceLock::new();
static AEGIS128X2_ENGINE: OnceLock<Result<Engine, AeadError>> = OnceLock::new();
static AEGIS128X4_ENGINE: OnceLock<Result<Engine, AeadError>> = OnceLock::new();

pub(crate) fn aegis128l() -> Result<Engine, AeadError> {
    *AEGIS128L_ENGINE.get_or_init(resolve_aegis128l)
}

pub(crate) fn aegis128x2() -> Result<Engine, AeadError> {
    *AEGIS128X2_ENGINE.get_or_init(resolve_aegis128x2)
}

pub(crate) fn aegis128x4() -> Result<Engine, AeadError> {
    *AEGIS128X4_ENGINE.get_or_init(resolve_aegis128x4)
}

/// The variant this CPU runs fastest: X4 on 512-bit vector AES, X2 on
/// 256-bit, otherwise AEGIS-128L.
pub(crate) fn preferred() -> Result<Engine, AeadError> {
    #[cfg(target_arch = "x86_64")]
    {
        if x86_64::has_vaes512() {
            return aegis128x4();
        }
        if x86_64::has_vaes256() {
            return aegis128x2();
        }
    }
    aegis128l()
}

#[allow(unreachable_code)]
fn resolve_aegis128l() -> Result<Engine, AeadError> {
    #[cfg(target_arch = "x86_64")]
    {
        if x86_64::has_aes() {
            return Ok(x86_64::AEGIS128L_AESNI);
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        if aarch64::has_aes() {
            return Ok(aarch64::AEGIS128L_NEON);
        }
    }
    #[cfg(feature = "soft")]
    {
        return Ok(soft::AEGIS128L);
    }
    Err(AeadError::UnsupportedPlatform)
}

#[allow(unreachable_code)]
fn resolve_aegis128x2() -> Result<Engine, AeadError> {
    #[cfg(target_arch = "x86_64")]
    {
        if x86_64::has_vaes256() {
            return Ok(x86_64::AEGIS128X2_VAES);
        }
        if x86_64::has_aes() {
            return Ok(x86_64::AEGIS128X2_AESNI);
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        if aarch64::has_aes() {
            return Ok(aarch64::AEGIS128X2_NEON);
        }
    }
    #[cfg(feature = "soft")]
    {
        return Ok(soft::AEGIS128X2);
    }
    Err(AeadError::UnsupportedPlatform)
}

#[allow(unreachable_code)]
fn resolve_aegis128x4() -> Result<Engine, AeadError> {
    #[cfg(target_arch = "x86_64")]
    {
        if x86_64::has_vaes512() {
            return Ok(x86_64::AEGIS128X4_VAES512);
        }
        if x86_64::has_vaes256() {
            return Ok(x86_64::AEGIS128X4_VAES);
        }
        if x86_64::has_aes() {
            return Ok(x86_64::AEGIS128X4_AESNI);
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        if aarch64::has_aes() {
            return Ok(aarch64::AEGIS128X4_NEON);
        }
    }
    #[cfg(feature = "soft")]
    {
        return Ok(soft::AEGIS128X4);
    }
    Err(AeadError::UnsupportedPlatform)
}

/// Every engine of each variant that can run on this CPU, for the
/// cross-engine parity tests. The portable engine is always last.
#[cfg(test)]
pub(crate) fn runnable_engines() -> [Vec<Engine>; 3] {
    let mut aegis128l = Vec::new();
    let mut aegis128x2 = Vec::new();
    let mut aegis128x4 = Vec::new();

    #[cfg(target_arch = "x86_64")]
    {
        if x86_64::has_vaes512() {
            aegis128x4.push(x86_64::AEGIS128X4_VAES512);
        }
        if x86_64::has_vaes256() {
            aegis128x2.push(x86_64::AEGIS128X2_VAES);
            aegis128x4.push(x86_64::AEGIS128X4_VAES);
        }
        if x86_64::has_aes() {
            aegis128l.push(x86_64::AEGIS128L_AESNI);
            aegis128x2.push(x86_64::AEGIS128X2_AESNI);
            aegis128x4.push(x86_64::AEGIS128X4_AESNI);
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        if aarch64::has_aes() {
            aegis128l.push(aarch64::AEGIS128L_NEON);
            aegis128x2.push(aarch64::AEGIS128X2_NEON);
            aegis128x4.push(aarch64::AEGIS128X4_NEON);
        }
    }

    #[cfg(feature = "soft")]
    {
        aegis128l.push(soft::AEGIS128L);
        aegis128x2.push(soft::AEGIS128X2);
        aegis128x4.push(soft::AEGIS128X4);
    }

    [aegis128l, aegis128x2, aegis128x4]
}
