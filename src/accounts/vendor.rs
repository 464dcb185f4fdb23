// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Registry locked reward vendor.

use serde::Serialize;

use crate::error::Result;
use crate::layout::{Decode, Encode, FixedLayout, Reader, Writer};
use crate::types::Pubkey;

/// Holds locked rewards for one `LockedAlloc` event until they are claimed
/// or expire to `expiry_receiver`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LockedRewardVendor {
    pub initialized: bool,
    pub vault: Pubkey,
    pub nonce: u8,
    /// Pool share supply snapshot taken when the reward was dropped.
    pub pool_token_supply: u64,
    /// Logical ring index of the event that created this vendor.
    pub reward_event_queue_cursor: u32,
    pub expiry_ts: i64,
    pub expiry_receiver: Pubkey,
}

impl Encode for LockedRewardVendor {
    fn encoded_len(&self) -> usize {
        Self::SIZE
    }

    fn encode_into(&self, w: &mut Writer) {
        w.put_bool(self.initialized);
        w.put_pubkey(&self.vault);
        w.put_u8(self.nonce);
        w.put_u64(self.pool_token_supply);
        w.put_u32(self.reward_event_queue_cursor);
        w.put_i64(self.expiry_ts);
        w.put_pubkey(&self.expiry_receiver);
    }
}

impl Decode for LockedRewardVendor {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            initialized: r.read_bool("initialized")?,
            vault: r.read_pubkey()?,
            nonce: r.read_u8()?,
            pool_token_supply: r.read_u64()?,
            reward_event_queue_cursor: r.read_u32()?,
            expiry_ts: r.read_i64()?,
            expiry_receiver: r.read_pubkey()?,
        })
    }
}

impl FixedLayout for LockedRewardVendor {
    const SIZE: usize = 1 + 32 + 1 + 8 + 4 + 8 + 32; // 86 bytes
}
