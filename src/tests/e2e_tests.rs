// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Decode raw account bytes, follow a vendor's cursor into the reward queue
//! and value the pool the event was dropped into.

use crate::accounts::{AccountState, LockedRewardVendor, Mint, TokenAccount};
use crate::basket::{PoolKind, PoolValuation, Rounding};
use crate::error::Result;
use crate::event::RewardEvent;
use crate::layout::{COption, FixedLayout};
use crate::queue::RewardEventQueue;
use crate::types::Pubkey;
use std::vec::Vec;

const POOL: Pubkey = Pubkey([0x50; 32]);
const VENDOR: Pubkey = Pubkey([0x56; 32]);

fn vault(mint: u8, amount: u64) -> Vec<u8> {
    TokenAccount {
        mint: Pubkey([mint; 32]),
        owner: POOL,
        amount,
        delegate: COption::none(),
        state: AccountState::Initialized,
        is_native: COption::none(),
        delegated_amount: 0,
        close_authority: COption::none(),
    }
    .encode()
}

#[test]
fn test_vendor_cursor_to_pool_basket() {
    let mut queue = RewardEventQueue::new(vec![0u8; RewardEventQueue::account_size()]).unwrap();
    queue
        .append(&RewardEvent::PoolDrop {
            from: Pubkey([1; 32]),
            totals: vec![10, 0],
            pool: POOL,
        })
        .unwrap();
    let cursor = queue
        .append(&RewardEvent::LockedAlloc {
            from: Pubkey([1; 32]),
            total: 1_000,
            expiry_ts: 1_800_000_000,
            expiry_receiver: Pubkey([2; 32]),
            pool: POOL,
            locked_vendor: VENDOR,
        })
        .unwrap();

    let vendor_bytes = LockedRewardVendor {
        initialized: true,
        vault: Pubkey([3; 32]),
        nonce: 254,
        pool_token_supply: 2_000,
        reward_event_queue_cursor: cursor,
        expiry_ts: 1_800_000_000,
        expiry_receiver: Pubkey([2; 32]),
    }
    .encode();
    let mint_bytes = Mint {
        mint_authority: COption::some(POOL),
        supply: 2_000,
        decimals: 6,
        is_initialized: true,
        freeze_authority: COption::none(),
    }
    .encode();
    let vault_bytes = [vault(0xA0, 6_000), vault(0xA1, 3)];

    // Everything below works from raw bytes only.
    let vendor = LockedRewardVendor::decode_exact(&vendor_bytes).unwrap();
    let queue = RewardEventQueue::new(queue.into_inner()).unwrap();
    let pending: Vec<RewardEvent> = queue
        .events_since(vendor.reward_event_queue_cursor)
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(pending.len(), 1);
    let (total, pool) = match &pending[0] {
        RewardEvent::LockedAlloc {
            total,
            pool,
            locked_vendor,
            ..
        } => {
            assert_eq!(*locked_vendor, VENDOR);
            (*total, *pool)
        }
        other => panic!("Expected LockedAlloc, got {:?}", other),
    };
    assert_eq!(total, 1_000);
    assert_eq!(pool, POOL);

    let mint = Mint::decode_exact(&mint_bytes).unwrap();
    let vaults: Vec<TokenAccount> = vault_bytes
        .iter()
        .map(|b| TokenAccount::decode_exact(b))
        .collect::<Result<_>>()
        .unwrap();
    assert!(vaults.iter().all(|v| v.owner == pool && v.is_initialized()));

    let valuation = PoolValuation::from_accounts(PoolKind::Mega, &mint, &vaults).unwrap();
    assert_eq!(valuation.share_supply, vendor.pool_token_supply);

    let redeem = valuation.basket(500, Rounding::Down).to_u64s().unwrap();
    let create = valuation.basket(500, Rounding::Up).to_u64s().unwrap();
    assert_eq!(redeem, vec![1_500, 0]);
    assert_eq!(create, vec![1_500, 1]);
}
