// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::accounts::{Mint, TokenAccount};
use crate::basket::{basket, basket_with_seed, mega_basket, stake_basket, PoolKind, PoolValuation, Rounding};
use crate::error::LedgerError;
use std::vec::Vec;

#[test]
fn test_empty_pool_seeds_first_asset() {
    let b = basket(100, &[0, 0], 0, Rounding::Down);
    assert_eq!(b.quantities(), &[100, 0]);
    let b = basket(100, &[0, 0], 0, Rounding::Up);
    assert_eq!(b.quantities(), &[100, 0]);
}

#[test]
fn test_empty_pool_with_explicit_seed() {
    let b = basket_with_seed(100, &[0, 0], 0, Rounding::Down, 1).unwrap();
    assert_eq!(b.quantities(), &[0, 100]);
    assert!(matches!(
        basket_with_seed(100, &[0, 0], 0, Rounding::Down, 2),
        Err(LedgerError::InvariantViolation { expected: 2, actual: 2, .. })
    ));
}

#[test]
fn test_proportional_basket() {
    let b = basket(100, &[1000], 1000, Rounding::Down);
    assert_eq!(b.quantities(), &[100]);
    let b = basket(1, &[1000, 3], 1000, Rounding::Down);
    assert_eq!(b.quantities(), &[1, 0]);
    let b = basket(1, &[1000, 3], 1000, Rounding::Up);
    assert_eq!(b.quantities(), &[1, 1]);
}

#[test]
fn test_proportional_small_pool() {
    assert_eq!(basket(10, &[1000], 100, Rounding::Down).quantities(), &[100]);
    assert_eq!(basket(10, &[1000], 100, Rounding::Up).quantities(), &[100]);
    // 1001 * 10 / 100 = 100.1
    assert_eq!(basket(10, &[1001], 100, Rounding::Down).quantities(), &[100]);
    assert_eq!(basket(10, &[1001], 100, Rounding::Up).quantities(), &[101]);
}

#[test]
fn test_rounding_direction() {
    // 1001 * 100 / 1000 = 100.1
    assert_eq!(basket(100, &[1001], 1000, Rounding::Down).quantities(), &[100]);
    assert_eq!(basket(100, &[1001], 1000, Rounding::Up).quantities(), &[101]);
    // Exact division is unaffected.
    assert_eq!(basket(100, &[2000], 1000, Rounding::Up).quantities(), &[200]);
    assert_eq!(Rounding::from(true), Rounding::Up);
    assert_eq!(Rounding::from(false), Rounding::Down);
}

#[test]
fn test_no_intermediate_overflow() {
    let b = basket(u64::MAX, &[u64::MAX], 1, Rounding::Up);
    let expected = u64::MAX as u128 * u64::MAX as u128;
    assert_eq!(b.quantities(), &[expected]);
    assert!(matches!(b.to_u64s(), Err(LedgerError::Overflow { .. })));

    let b = basket(u64::MAX, &[u64::MAX], u64::MAX, Rounding::Up);
    assert_eq!(b.to_u64s().unwrap(), vec![u64::MAX]);
}

#[test]
fn test_stake_and_mega_pools() {
    assert_eq!(stake_basket(100, 0, 0, Rounding::Down).quantities(), &[100]);
    assert_eq!(stake_basket(5, 50, 10, Rounding::Down).quantities(), &[25]);

    let mega = mega_basket(10, &[200, 2], 20, Rounding::Up).unwrap();
    assert_eq!(mega.quantities(), &[100, 1]);

    match mega_basket(10, &[200], 20, Rounding::Up) {
        Err(LedgerError::InvariantViolation { expected, actual, .. }) => {
            assert_eq!((expected, actual), (2, 1));
        }
        other => panic!("Expected InvariantViolation, got {:?}", other),
    }
    assert_eq!(PoolKind::Stake.asset_count(), 1);
    assert_eq!(PoolKind::Mega.asset_count(), 2);
}

#[test]
fn test_pool_valuation_from_accounts() {
    let mint = Mint {
        supply: 400,
        is_initialized: true,
        ..Mint::default()
    };
    let vaults: Vec<TokenAccount> = [1_000u64, 4]
        .iter()
        .map(|&amount| TokenAccount {
            amount,
            ..TokenAccount::default()
        })
        .collect();

    let pool = PoolValuation::from_accounts(PoolKind::Mega, &mint, &vaults).unwrap();
    assert_eq!(pool.share_supply, 400);
    assert_eq!(pool.vault_balances, vec![1_000, 4]);
    assert_eq!(pool.basket(200, Rounding::Down).to_u64s().unwrap(), vec![500, 2]);
    assert_eq!(pool.share_price().to_u64s().unwrap(), vec![3, 1]);

    assert!(PoolValuation::from_accounts(PoolKind::Stake, &mint, &vaults).is_err());
}
