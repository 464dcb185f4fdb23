// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Property tests for the codecs, the ring log and basket rounding.

use crate::accounts::{LockedRewardVendor, Vesting};
use crate::basket::{basket, Rounding};
use crate::config::REWARD_EVENT_SIZE;
use crate::event::{RewardEvent, MAX_POOL_DROP_ASSETS};
use crate::layout::{decode_prefix, Encode, FixedLayout};
use crate::ring::{self, LayoutDecoder, Ring};
use crate::types::Pubkey;
use proptest::prelude::*;
use std::vec::Vec;

// ============================================================================
// Strategies
// ============================================================================

fn pubkey() -> impl Strategy<Value = Pubkey> {
    any::<[u8; 32]>().prop_map(Pubkey)
}

fn vesting() -> impl Strategy<Value = Vesting> {
    (
        (any::<bool>(), pubkey(), pubkey(), any::<bool>(), pubkey()),
        (any::<u64>(), any::<u64>(), any::<i64>(), any::<i64>(), any::<u64>()),
        (pubkey(), pubkey(), any::<u64>()),
    )
        .prop_map(
            |(
                (initialized, safe, beneficiary, claimed, grantor),
                (balance, start_balance, start_ts, end_ts, period_count),
                (locked_nft_mint, locked_nft_token, whitelist_owned),
            )| Vesting {
                initialized,
                safe,
                beneficiary,
                claimed,
                grantor,
                balance,
                start_balance,
                start_ts,
                end_ts,
                period_count,
                locked_nft_mint,
                locked_nft_token,
                whitelist_owned,
            },
        )
}

fn reward_event() -> impl Strategy<Value = RewardEvent> {
    prop_oneof![
        (pubkey(), prop::collection::vec(any::<u64>(), 0..=MAX_POOL_DROP_ASSETS), pubkey())
            .prop_map(|(from, totals, pool)| RewardEvent::PoolDrop { from, totals, pool }),
        (pubkey(), any::<u64>(), any::<i64>(), pubkey(), pubkey(), pubkey()).prop_map(
            |(from, total, expiry_ts, expiry_receiver, pool, locked_vendor)| RewardEvent::LockedAlloc {
                from,
                total,
                expiry_ts,
                expiry_receiver,
                pool,
                locked_vendor,
            }
        ),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_vesting_is_fixed_size(v in vesting()) {
        let bytes = v.encode();
        prop_assert_eq!(bytes.len(), Vesting::SIZE);
        prop_assert_eq!(Vesting::decode_exact(&bytes).unwrap(), v);
    }

    #[test]
    fn prop_vendor_is_fixed_size(
        initialized in any::<bool>(),
        vault in pubkey(),
        nonce in any::<u8>(),
        pool_token_supply in any::<u64>(),
        reward_event_queue_cursor in any::<u32>(),
        expiry_ts in any::<i64>(),
        expiry_receiver in pubkey(),
    ) {
        let vendor = LockedRewardVendor {
            initialized,
            vault,
            nonce,
            pool_token_supply,
            reward_event_queue_cursor,
            expiry_ts,
            expiry_receiver,
        };
        let bytes = vendor.encode();
        prop_assert_eq!(bytes.len(), LockedRewardVendor::SIZE);
        prop_assert_eq!(LockedRewardVendor::decode(&bytes).unwrap(), vendor);
    }

    #[test]
    fn prop_reward_event_decodes_from_padded_slot(event in reward_event()) {
        let mut slot = event.to_bytes();
        prop_assert!(slot.len() <= REWARD_EVENT_SIZE);
        slot.resize(REWARD_EVENT_SIZE, 0);
        prop_assert_eq!(decode_prefix::<RewardEvent>(&slot).unwrap(), event);
    }

    #[test]
    fn prop_ring_keeps_last_capacity_items(capacity in 1u32..16, count in 0u64..64) {
        let size = ring::buffer_size(capacity, 8).unwrap();
        let mut ring = Ring::new(vec![0u8; size], capacity, 8).unwrap();
        for i in 0..count {
            prop_assert_eq!(ring.append(&i).unwrap() as u64, i);
        }
        let items: Vec<u64> = ring
            .entries(LayoutDecoder::<u64>::new())
            .map(|e| e.unwrap())
            .collect();
        let start = count.saturating_sub(capacity as u64);
        prop_assert_eq!(items, (start..count).collect::<Vec<_>>());
    }

    #[test]
    fn prop_round_up_is_at_most_one_more(
        shares in any::<u64>(),
        balance in any::<u64>(),
        supply in 1u64..,
    ) {
        let down = basket(shares, &[balance], supply, Rounding::Down).quantities()[0];
        let up = basket(shares, &[balance], supply, Rounding::Up).quantities()[0];
        prop_assert!(down <= up);
        prop_assert!(up - down <= 1);
    }

    #[test]
    fn prop_redemptions_never_exceed_vault(
        balance in any::<u64>(),
        holdings in prop::collection::vec(1u64..1_000_000, 1..8),
    ) {
        let supply: u64 = holdings.iter().sum();
        let paid: u128 = holdings
            .iter()
            .map(|&h| basket(h, &[balance], supply, Rounding::Down).quantities()[0])
            .sum();
        prop_assert!(paid <= balance as u128);
    }
}
