// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Input length validation: rejected before any state mutation.

use ravelin_aead_core::AeadError;

use crate::aead::Aead;

fn invalid_length(name: &'static str, expected: usize, actual: usize) -> AeadError {
    AeadError::InvalidLength {
        name,
        expected,
        actual,
    }
}

// =============================================================================
// encrypt() - size validation errors
// =============================================================================

#[test]
fn test_encrypt_fails_with_key_too_small() {
    let mut aead = Aead::new().expect("Failed to resolve a backend");
    let mut plaintext = b"test".to_vec();
    let mut tag = [0u8; 16];

    let result = aead.encrypt(&[0u8; 15], &[0u8; 16], b"", &mut plaintext, &mut tag);
    assert_eq!(result, Err(invalid_length("key", 16, 15)));
    assert_eq!(plaintext, b"test", "buffer touched despite rejection");
}

#[test]
fn test_encrypt_fails_with_key_too_large() {
    let mut aead = Aead::new().expect("Failed to resolve a backend");
    let mut plaintext = b"test".to_vec();
    let mut tag = [0u8; 16];

    let result = aead.encrypt(&[0u8; 17], &[0u8; 16], b"", &mut plaintext, &mut tag);
    assert_eq!(result, Err(invalid_length("key", 16, 17)));
}

#[test]
fn test_encrypt_fails_with_nonce_too_small() {
    let mut aead = Aead::new().expect("Failed to resolve a backend");
    let mut plaintext = b"test".to_vec();
    let mut tag = [0u8; 16];

    let result = aead.encrypt(&[0u8; 16], &[0u8; 15], b"", &mut plaintext, &mut tag);
    assert_eq!(result, Err(invalid_length("nonce", 16, 15)));
}

#[test]
fn test_encrypt_fails_with_nonce_too_large() {
    let mut aead = Aead::new().expect("Failed to resolve a backend");
    let mut plaintext = b"test".to_vec();
    let mut tag = [0u8; 16];

    let result = aead.encrypt(&[0u8; 16], &[0u8; 17], b"", &mut plaintext, &mut tag);
    assert_eq!(result, Err(invalid_length("nonce", 16, 17)));
}

#[test]
fn test_encrypt_fails_with_tag_too_small() {
    let mut aead = Aead::new().expect("Failed to resolve a backend");
    let mut plaintext = b"test".to_vec();
    let mut tag = [0u8; 15];

    let result = aead.encrypt(&[0u8; 16], &[0u8; 16], b"", &mut plaintext, &mut tag);
    assert_eq!(result, Err(invalid_length("tag", 16, 15)));
}

#[test]
fn test_encrypt_fails_with_tag_too_large() {
    let mut aead = Aead::new().expect("Failed to resolve a backend");
    let mut plaintext = b"test".to_vec();
    let mut tag = [0u8; 17];

    let result = aead.encrypt(&[0u8; 16], &[0u8; 16], b"", &mut plaintext, &mut tag);
    assert_eq!(result, Err(invalid_length("tag", 16, 17)));
}

// =============================================================================
// decrypt() - size validation errors
// =============================================================================

#[test]
fn test_decrypt_fails_with_key_too_small() {
    let mut aead = Aead::new().expect("Failed to resolve a backend");
    let mut ciphertext = b"test".to_vec();

    let result = aead.decrypt(&[0u8; 15], &[0u8; 16], b"", &mut ciphertext, &[0u8; 16]);
    assert_eq!(result, Err(invalid_length("key", 16, 15)));
    assert_eq!(ciphertext, b"test", "buffer touched despite rejection");
}

#[test]
fn test_decrypt_fails_with_key_too_large() {
    let mut aead = Aead::new().expect("Failed to resolve a backend");
    let mut ciphertext = b"test".to_vec();

    let result = aead.decrypt(&[0u8; 17], &[0u8; 16], b"", &mut ciphertext, &[0u8; 16]);
    assert_eq!(result, Err(invalid_length("key", 16, 17)));
}

#[test]
fn test_decrypt_fails_with_nonce_too_small() {
    let mut aead = Aead::new().expect("Failed to resolve a backend");
    let mut ciphertext = b"test".to_vec();

    let result = aead.decrypt(&[0u8; 16], &[0u8; 15], b"", &mut ciphertext, &[0u8; 16]);
    assert_eq!(result, Err(invalid_length("nonce", 16, 15)));
}

#[test]
fn test_decrypt_fails_with_nonce_too_large() {
    let mut aead = Aead::new().expect("Failed to resolve a backend");
    let mut ciphertext = b"test".to_vec();

    let result = aead.decrypt(&[0u8; 16], &[0u8; 17], b"", &mut ciphertext, &[0u8; 16]);
    assert_eq!(result, Err(invalid_length("nonce", 16, 17)));
}

#[test]
fn test_decrypt_fails_with_tag_too_small() {
    let mut aead = Aead::new().expect("Failed to resolve a backend");
    let mut ciphertext = b"test".to_vec();

    let result = aead.decrypt(&[0u8; 16], &[0u8; 16], b"", &mut ciphertext, &[0u8; 15]);
    assert_eq!(result, Err(invalid_length("tag", 16, 15)));
}

#[test]
fn test_decrypt_fails_with_tag_too_large() {
    let mut aead = Aead::new().expect("Failed to resolve a backend");
    let mut ciphertext = b"test".to_vec();

    let result = aead.decrypt(&[0u8; 16], &[0u8; 16], b"", &mut ciphertext, &[0u8; 17]);
    assert_eq!(result, Err(invalid_length("tag", 16, 17)));
}
