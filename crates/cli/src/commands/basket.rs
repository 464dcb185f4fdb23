// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use stake_ledger::accounts::{Mint, TokenAccount};
use stake_ledger::{Basket, PoolKind, PoolValuation, Pubkey, Rounding};
use stake_ledger_store::{load, AccountStore, DirStore};
use std::path::Path;

use crate::new_table;

pub fn compute<S: AccountStore>(
    store: &S,
    mint: &Pubkey,
    vaults: &[Pubkey],
    shares: u64,
    rounding: Rounding,
) -> anyhow::Result<(PoolValuation, Basket)> {
    let kind = match vaults.len() {
        1 => PoolKind::Stake,
        2 => PoolKind::Mega,
        n => anyhow::bail!("expected one or two vaults, got {n}"),
    };
    let share_mint: Mint = load(store, mint)?;
    let vault_accounts = vaults
        .iter()
        .map(|key| load::<TokenAccount, _>(store, key))
        .collect::<Result<Vec<_>, _>>()?;

    let valuation = PoolValuation::from_accounts(kind, &share_mint, &vault_accounts)?;
    let basket = valuation.basket(shares, rounding);
    tracing::debug!(?kind, shares, ?rounding, supply = valuation.share_supply, "computed basket");
    Ok((valuation, basket))
}

pub fn run(dir: &Path, mint: &Pubkey, vaults: &[Pubkey], shares: u64, round_up: bool) -> anyhow::Result<()> {
    let store = DirStore::open(dir)?;
    let rounding = Rounding::from(round_up);
    let (valuation, basket) = compute(&store, mint, vaults, shares, rounding)?;

    let mut summary = new_table(vec!["Property", "Value"]);
    summary.add_row(vec!["Pool", &format!("{:?}", valuation.kind)]);
    summary.add_row(vec!["Share Supply", &valuation.share_supply.to_string()]);
    summary.add_row(vec!["Shares", &shares.to_string()]);
    summary.add_row(vec!["Rounding", &format!("{:?}", rounding)]);

    let mut table = new_table(vec!["Asset", "Vault", "Vault Balance", "Quantity"]);
    for (i, ((key, balance), quantity)) in vaults
        .iter()
        .zip(&valuation.vault_balances)
        .zip(basket.quantities())
        .enumerate()
    {
        table.add_row(vec![
            i.to_string(),
            key.to_string(),
            balance.to_string(),
            quantity.to_string(),
        ]);
    }

    println!("\nBasket");
    println!("------");
    println!("{summary}\n");
    println!("{table}\n");

    Ok(())
}
