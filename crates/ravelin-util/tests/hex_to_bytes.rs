// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod hex_to_bytes_tests {
    use ravelin_util::hex_to_bytes;

    #[test]
    fn test_empty_string() {
        assert_eq!(hex_to_bytes(""), Vec::<u8>::new());
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(hex_to_bytes("DEADBEEF"), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(hex_to_bytes("0001"), vec![0x00, 0x01]);
    }

    #[test]
    #[should_panic(expected = "odd length")]
    fn test_odd_length_panics() {
        let _ = hex_to_bytes("abc");
    }

    #[test]
    #[should_panic(expected = "non-hex digit")]
    fn test_non_hex_digit_panics() {
        let _ = hex_to_bytes("zz");
    }
}
