// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::accounts::{AccountState, LockedRewardVendor, Mint, TokenAccount, Vesting};
use crate::error::LedgerError;
use crate::layout::{COption, FixedLayout};
use crate::types::Pubkey;

fn sample_vesting() -> Vesting {
    Vesting {
        initialized: true,
        safe: Pubkey([1; 32]),
        beneficiary: Pubkey([2; 32]),
        claimed: false,
        grantor: Pubkey([3; 32]),
        balance: 1_000,
        start_balance: u64::MAX,
        start_ts: -1,
        end_ts: i64::MAX,
        period_count: 12,
        locked_nft_mint: Pubkey([4; 32]),
        locked_nft_token: Pubkey::default(),
        whitelist_owned: 0,
    }
}

#[test]
fn test_record_sizes() {
    assert_eq!(Vesting::SIZE, 210);
    assert_eq!(LockedRewardVendor::SIZE, 86);
    assert_eq!(Mint::SIZE, 82);
    assert_eq!(TokenAccount::SIZE, 165);
}

#[test]
fn test_default_records_encode_to_zeros() {
    assert!(Vesting::default().encode().iter().all(|b| *b == 0));
    assert!(LockedRewardVendor::default().encode().iter().all(|b| *b == 0));
    assert!(Mint::default().encode().iter().all(|b| *b == 0));
    assert!(TokenAccount::default().encode().iter().all(|b| *b == 0));
}

#[test]
fn test_vesting_roundtrip_and_offsets() {
    let vesting = sample_vesting();
    let bytes = vesting.encode();
    assert_eq!(bytes.len(), Vesting::SIZE);
    // initialized, safe, beneficiary, claimed, grantor, then balance at 98.
    assert_eq!(bytes[0], 1);
    assert_eq!(&bytes[1..33], &[1; 32]);
    assert_eq!(&bytes[98..106], &1_000u64.to_le_bytes());
    assert_eq!(Vesting::decode_exact(&bytes).unwrap(), vesting);
}

#[test]
fn test_vesting_bad_claimed_flag() {
    let mut bytes = sample_vesting().encode();
    bytes[65] = 9;
    assert_eq!(
        Vesting::decode(&bytes),
        Err(LedgerError::FieldOutOfRange {
            offset: 65,
            field: "claimed",
            value: 9
        })
    );
}

#[test]
fn test_vendor_roundtrip() {
    let vendor = LockedRewardVendor {
        initialized: true,
        vault: Pubkey([7; 32]),
        nonce: 255,
        pool_token_supply: 10_000,
        reward_event_queue_cursor: u32::MAX,
        expiry_ts: 1_700_000_000,
        expiry_receiver: Pubkey([8; 32]),
    };
    assert_eq!(LockedRewardVendor::decode_exact(&vendor.encode()).unwrap(), vendor);
}

#[test]
fn test_vendor_short_buffer() {
    assert_eq!(
        LockedRewardVendor::decode(&[0u8; 85]),
        Err(LedgerError::SizeMismatch { expected: 86, actual: 85 })
    );
}

#[test]
fn test_mint_with_and_without_authority() {
    let mint = Mint {
        mint_authority: COption::some(Pubkey([5; 32])),
        supply: 42,
        decimals: 6,
        is_initialized: true,
        freeze_authority: COption::none(),
    };
    let bytes = mint.encode();
    assert_eq!(&bytes[36..44], &42u64.to_le_bytes());
    assert_eq!(bytes[44], 6);
    assert_eq!(Mint::decode_exact(&bytes).unwrap(), mint);
}

#[test]
fn test_token_account_state() {
    let account = TokenAccount {
        mint: Pubkey([1; 32]),
        owner: Pubkey([2; 32]),
        amount: 500,
        delegate: COption::none(),
        state: AccountState::Frozen,
        is_native: COption::some(2_039_280),
        delegated_amount: 0,
        close_authority: COption::some(Pubkey([3; 32])),
    };
    let mut bytes = account.encode();
    let decoded = TokenAccount::decode_exact(&bytes).unwrap();
    assert_eq!(decoded, account);
    assert!(decoded.is_initialized());
    assert!(decoded.is_frozen());

    bytes[108] = 3;
    assert_eq!(
        TokenAccount::decode(&bytes),
        Err(LedgerError::FieldOutOfRange {
            offset: 108,
            field: "state",
            value: 3
        })
    );
}
