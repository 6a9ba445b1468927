// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test-only accessors for driving the raw state machine.

use crate::block::AesBlock;

use super::state::Aegis;

impl<B: AesBlock> Aegis<B> {
    /// Rebuilds a state from its serialized lanes (8 × `B::WIDTH` bytes).
    pub(crate) fn from_lane_bytes(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), 8 * B::WIDTH);
        let v = core::array::from_fn(|i| B::load(&bytes[i * B::WIDTH..(i + 1) * B::WIDTH]));
        Self::from_lanes(v)
    }

    /// Serializes the lanes (8 × `B::WIDTH` bytes).
    pub(crate) fn to_lane_bytes(&self, out: &mut [u8]) {
        assert_eq!(out.len(), 8 * B::WIDTH);
        for (i, lane) in self.lanes().iter().enumerate() {
            lane.store(&mut out[i * B::WIDTH..(i + 1) * B::WIDTH]);
        }
    }
}
