// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::Result;
use crate::store::{append_reward_event, AccountStore, DirStore};

use stake_ledger::accounts::{AccountState, LockedRewardVendor, Mint, TokenAccount, Vesting};
use stake_ledger::layout::COption;
use stake_ledger::{FixedLayout, Pubkey, RewardEvent, RewardEventQueue};
use std::path::{Path, PathBuf};

pub struct TestAccounts {
    pub dir: PathBuf,
    pub pool: Pubkey,
    pub reward_queue: Pubkey,
    pub vendor: Pubkey,
    pub vesting: Pubkey,
    pub share_mint: Pubkey,
    pub vaults: [Pubkey; 2],
}

/// Six accounts: a mega pool's share mint and two vaults, a reward queue
/// holding two drops and one locked allocation, the vendor created by that
/// allocation and an unrelated vesting account. The pool key is only
/// referenced as vault owner and event pool; no account is stored under it.
pub fn generate_test_scenario(dir: &Path) -> Result<TestAccounts> {
    let mut store = DirStore::open(dir)?;

    let accounts = TestAccounts {
        dir: dir.to_path_buf(),
        pool: Pubkey([0x50; 32]),
        reward_queue: Pubkey([0x51; 32]),
        vendor: Pubkey([0x52; 32]),
        vesting: Pubkey([0x53; 32]),
        share_mint: Pubkey([0x54; 32]),
        vaults: [Pubkey([0x55; 32]), Pubkey([0x56; 32])],
    };

    // 1. Pool share mint and vaults
    let mint = Mint {
        mint_authority: COption::some(accounts.pool),
        supply: 2_000,
        decimals: 6,
        is_initialized: true,
        freeze_authority: COption::none(),
    };
    store.persist(&accounts.share_mint, &mint.encode())?;
    for (i, (key, amount)) in accounts.vaults.iter().zip([6_000u64, 3]).enumerate() {
        let vault = TokenAccount {
            mint: Pubkey([0xA0 + i as u8; 32]),
            owner: accounts.pool,
            amount,
            state: AccountState::Initialized,
            ..TokenAccount::default()
        };
        store.persist(key, &vault.encode())?;
    }

    // 2. Reward queue
    store.persist(&accounts.reward_queue, &vec![0u8; RewardEventQueue::account_size()])?;
    let funder = Pubkey([0x01; 32]);
    for totals in [vec![100, 1], vec![250, 0]] {
        let drop = RewardEvent::PoolDrop {
            from: funder,
            totals,
            pool: accounts.pool,
        };
        append_reward_event(&mut store, &accounts.reward_queue, &drop)?;
    }
    let locked = RewardEvent::LockedAlloc {
        from: funder,
        total: 1_000,
        expiry_ts: 1_800_000_000,
        expiry_receiver: funder,
        pool: accounts.pool,
        locked_vendor: accounts.vendor,
    };
    let cursor = append_reward_event(&mut store, &accounts.reward_queue, &locked)?;

    // 3. Vendor for the locked allocation
    let vendor = LockedRewardVendor {
        initialized: true,
        vault: Pubkey([0x57; 32]),
        nonce: 255,
        pool_token_supply: mint.supply,
        reward_event_queue_cursor: cursor,
        expiry_ts: 1_800_000_000,
        expiry_receiver: funder,
    };
    store.persist(&accounts.vendor, &vendor.encode())?;

    // 4. Vesting
    let vesting = Vesting {
        initialized: true,
        safe: Pubkey([0x58; 32]),
        beneficiary: Pubkey([0x59; 32]),
        claimed: false,
        grantor: funder,
        balance: 750,
        start_balance: 1_000,
        start_ts: 1_600_000_000,
        end_ts: 1_700_000_000,
        period_count: 4,
        locked_nft_mint: Pubkey::default(),
        locked_nft_token: Pubkey::default(),
        whitelist_owned: 0,
    };
    store.persist(&accounts.vesting, &vesting.encode())?;

    Ok(accounts)
}
