// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Reward events.
//!
//! Every reward distribution the registry performs is recorded as a
//! `RewardEvent` in the reward event queue. Off-chain observers rebuild
//! reward history solely from these records.
//!
//! # Encoding
//! `[discriminant: u8][variant fields]`, discriminants in declaration order.
//! `PoolDrop::totals` is length-prefixed, so the queue slot size bounds how
//! many assets a single drop may carry.

use alloc::vec::Vec;
use serde::Serialize;

use crate::config::REWARD_EVENT_SIZE;
use crate::error::{LedgerError, Result};
use crate::layout::{Decode, Encode, Reader, Writer};
use crate::types::Pubkey;

/// Largest `totals` length that still fits one reward queue slot.
pub const MAX_POOL_DROP_ASSETS: usize = (REWARD_EVENT_SIZE - RewardEvent::POOL_DROP_BASE_LEN) / 8;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RewardEvent {
    /// Unlocked reward dropped pro-rata into a stake pool.
    PoolDrop {
        from: Pubkey,
        /// One amount per pool asset, in the pool's asset order.
        totals: Vec<u64>,
        pool: Pubkey,
    },
    /// Locked reward held by a vendor until `expiry_ts`.
    LockedAlloc {
        from: Pubkey,
        total: u64,
        expiry_ts: i64,
        expiry_receiver: Pubkey,
        pool: Pubkey,
        locked_vendor: Pubkey,
    },
}

impl RewardEvent {
    const POOL_DROP: u8 = 0;
    const LOCKED_ALLOC: u8 = 1;

    const POOL_DROP_BASE_LEN: usize = 1 + 32 + 4 + 32;
    const LOCKED_ALLOC_LEN: usize = 1 + 32 + 8 + 8 + 32 + 32 + 32;

    pub fn event_type(&self) -> &'static str {
        match self {
            RewardEvent::PoolDrop { .. } => "PoolDrop",
            RewardEvent::LockedAlloc { .. } => "LockedAlloc",
        }
    }

    pub fn pool(&self) -> &Pubkey {
        match self {
            RewardEvent::PoolDrop { pool, .. } | RewardEvent::LockedAlloc { pool, .. } => pool,
        }
    }

    pub fn from(&self) -> &Pubkey {
        match self {
            RewardEvent::PoolDrop { from, .. } | RewardEvent::LockedAlloc { from, .. } => from,
        }
    }
}

impl Encode for RewardEvent {
    fn encoded_len(&self) -> usize {
        match self {
            RewardEvent::PoolDrop { totals, .. } => Self::POOL_DROP_BASE_LEN + totals.len() * 8,
            RewardEvent::LockedAlloc { .. } => Self::LOCKED_ALLOC_LEN,
        }
    }

    fn encode_into(&self, w: &mut Writer) {
        match self {
            RewardEvent::PoolDrop { from, totals, pool } => {
                w.put_u8(Self::POOL_DROP);
                w.put_pubkey(from);
                totals.encode_into(w);
                w.put_pubkey(pool);
            }
            RewardEvent::LockedAlloc {
                from,
                total,
                expiry_ts,
                expiry_receiver,
                pool,
                locked_vendor,
            } => {
                w.put_u8(Self::LOCKED_ALLOC);
                w.put_pubkey(from);
                w.put_u64(*total);
                w.put_i64(*expiry_ts);
                w.put_pubkey(expiry_receiver);
                w.put_pubkey(pool);
                w.put_pubkey(locked_vendor);
            }
        }
    }
}

impl Decode for RewardEvent {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
        let offset = r.offset();
        match r.read_u8()? {
            Self::POOL_DROP => Ok(RewardEvent::PoolDrop {
                from: r.read_pubkey()?,
                totals: Vec::<u64>::decode_from(r)?,
                pool: r.read_pubkey()?,
            }),
            Self::LOCKED_ALLOC => Ok(RewardEvent::LockedAlloc {
                from: r.read_pubkey()?,
                total: r.read_u64()?,
                expiry_ts: r.read_i64()?,
                expiry_receiver: r.read_pubkey()?,
                pool: r.read_pubkey()?,
                locked_vendor: r.read_pubkey()?,
            }),
            discriminant => Err(LedgerError::UnknownVariant { offset, discriminant }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::decode_prefix;

    #[test]
    fn test_locked_alloc_fills_slot_exactly() {
        let event = RewardEvent::LockedAlloc {
            from: Pubkey([1; 32]),
            total: u64::MAX,
            expiry_ts: i64::MIN,
            expiry_receiver: Pubkey([2; 32]),
            pool: Pubkey([3; 32]),
            locked_vendor: Pubkey([4; 32]),
        };
        assert_eq!(event.to_bytes().len(), REWARD_EVENT_SIZE);
        assert_eq!(decode_prefix::<RewardEvent>(&event.to_bytes()).unwrap(), event);
    }

    #[test]
    fn test_max_pool_drop_fits() {
        assert_eq!(MAX_POOL_DROP_ASSETS, 9);
        let event = RewardEvent::PoolDrop {
            from: Pubkey::default(),
            totals: vec![7; MAX_POOL_DROP_ASSETS],
            pool: Pubkey::default(),
        };
        assert!(event.to_bytes().len() <= REWARD_EVENT_SIZE);
    }
}
