// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Basket valuation.
//!
//! Converts a pool share amount into the underlying asset quantities:
//!
//! ```text
//! quantity[i] = (vault[i] * shares [+ supply - 1]) / supply
//! ```
//!
//! evaluated in `u128`, so `u64 * u64 + u64` can never overflow. When the
//! pool has no supply yet the whole share amount is attributed to the seed
//! asset: the first depositor defines the ratio.

use alloc::vec::Vec;
use serde::Serialize;

use crate::accounts::{Mint, TokenAccount};
use crate::config::SEED_ASSET_INDEX;
use crate::error::{LedgerError, Result};

/// Rounding direction applied to every asset quantity.
///
/// Redeemers are paid `Down`; minters are charged `Up`. Either way the
/// remainder stays with the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Down,
    Up,
}

impl From<bool> for Rounding {
    fn from(round_up: bool) -> Self {
        if round_up {
            Rounding::Up
        } else {
            Rounding::Down
        }
    }
}

/// Asset quantities in the pool's declared asset order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Basket {
    quantities: Vec<u128>,
}

impl Basket {
    pub fn quantities(&self) -> &[u128] {
        &self.quantities
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Narrows every quantity to `u64` token amounts.
    pub fn to_u64s(&self) -> Result<Vec<u64>> {
        self.quantities
            .iter()
            .map(|&q| u64::try_from(q).map_err(|_| LedgerError::Overflow { context: "basket quantity" }))
            .collect()
    }
}

/// Basket for `share_amount` shares, seeding asset 0 on an empty pool.
pub fn basket(share_amount: u64, vault_balances: &[u64], total_share_supply: u64, rounding: Rounding) -> Basket {
    let quantities = vault_balances
        .iter()
        .enumerate()
        .map(|(i, &balance)| quantity(i, SEED_ASSET_INDEX, balance, share_amount, total_share_supply, rounding))
        .collect();
    Basket { quantities }
}

/// Like [`basket`] with an explicit seed asset.
pub fn basket_with_seed(
    share_amount: u64,
    vault_balances: &[u64],
    total_share_supply: u64,
    rounding: Rounding,
    seed: usize,
) -> Result<Basket> {
    if seed >= vault_balances.len() {
        return Err(LedgerError::InvariantViolation {
            reason: "seed asset index out of range",
            expected: vault_balances.len(),
            actual: seed,
        });
    }
    let quantities = vault_balances
        .iter()
        .enumerate()
        .map(|(i, &balance)| quantity(i, seed, balance, share_amount, total_share_supply, rounding))
        .collect();
    Ok(Basket { quantities })
}

fn quantity(index: usize, seed: usize, balance: u64, shares: u64, supply: u64, rounding: Rounding) -> u128 {
    if supply == 0 {
        return if index == seed { shares as u128 } else { 0 };
    }
    // supply >= 1 here, so the bias cannot underflow.
    let mut numerator = balance as u128 * shares as u128;
    if rounding == Rounding::Up {
        numerator += supply as u128 - 1;
    }
    numerator / supply as u128
}

/// Single-asset stake pool.
pub fn stake_basket(share_amount: u64, vault_balance: u64, total_share_supply: u64, rounding: Rounding) -> Basket {
    basket(share_amount, &[vault_balance], total_share_supply, rounding)
}

/// Two-asset mega pool. Any other vault count is a configuration error.
pub fn mega_basket(
    share_amount: u64,
    vault_balances: &[u64],
    total_share_supply: u64,
    rounding: Rounding,
) -> Result<Basket> {
    PoolKind::Mega.check_asset_count(vault_balances.len())?;
    Ok(basket(share_amount, vault_balances, total_share_supply, rounding))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PoolKind {
    /// One asset (SRM).
    Stake,
    /// Two assets (SRM, MSRM).
    Mega,
}

impl PoolKind {
    pub fn asset_count(self) -> usize {
        match self {
            PoolKind::Stake => 1,
            PoolKind::Mega => 2,
        }
    }

    fn check_asset_count(self, actual: usize) -> Result<()> {
        let expected = self.asset_count();
        if actual != expected {
            return Err(LedgerError::InvariantViolation {
                reason: "vault count does not match pool asset count",
                expected,
                actual,
            });
        }
        Ok(())
    }
}

/// Pool state snapshot assembled from decoded mint and vault accounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PoolValuation {
    pub kind: PoolKind,
    pub share_supply: u64,
    pub vault_balances: Vec<u64>,
}

impl PoolValuation {
    pub fn new(kind: PoolKind, share_supply: u64, vault_balances: Vec<u64>) -> Result<Self> {
        kind.check_asset_count(vault_balances.len())?;
        Ok(Self {
            kind,
            share_supply,
            vault_balances,
        })
    }

    pub fn from_accounts(kind: PoolKind, share_mint: &Mint, vaults: &[TokenAccount]) -> Result<Self> {
        Self::new(kind, share_mint.supply, vaults.iter().map(|v| v.amount).collect())
    }

    pub fn basket(&self, share_amount: u64, rounding: Rounding) -> Basket {
        basket(share_amount, &self.vault_balances, self.share_supply, rounding)
    }

    /// Price of a single share, rounded up.
    pub fn share_price(&self) -> Basket {
        self.basket(1, Rounding::Up)
    }
}
