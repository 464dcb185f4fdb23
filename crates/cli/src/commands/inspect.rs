// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use comfy_table::Table;
use stake_ledger::accounts::{LockedRewardVendor, Mint, TokenAccount, Vesting};
use stake_ledger::{FixedLayout, RewardEventQueue};
use stake_ledger_store::{AccountStore, DirStore};
use std::path::Path;

use crate::{format_ts, new_table};

/// Layout an account buffer decodes as, judged by its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Vesting,
    LockedRewardVendor,
    Mint,
    TokenAccount,
    RewardEventQueue,
    Unknown,
}

impl AccountKind {
    pub fn detect(len: usize) -> Self {
        match len {
            Vesting::SIZE => AccountKind::Vesting,
            LockedRewardVendor::SIZE => AccountKind::LockedRewardVendor,
            Mint::SIZE => AccountKind::Mint,
            TokenAccount::SIZE => AccountKind::TokenAccount,
            n if n == RewardEventQueue::account_size() => AccountKind::RewardEventQueue,
            _ => AccountKind::Unknown,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AccountKind::Vesting => "Vesting",
            AccountKind::LockedRewardVendor => "LockedRewardVendor",
            AccountKind::Mint => "Mint",
            AccountKind::TokenAccount => "TokenAccount",
            AccountKind::RewardEventQueue => "RewardEventQueue",
            AccountKind::Unknown => "Unknown",
        }
    }
}

/// One-line summary of a decoded account.
pub fn describe(kind: AccountKind, data: &[u8]) -> stake_ledger::Result<String> {
    Ok(match kind {
        AccountKind::Vesting => {
            let v = Vesting::decode_exact(data)?;
            format!(
                "beneficiary {}, balance {}/{}, {} to {}",
                v.beneficiary,
                v.balance,
                v.start_balance,
                format_ts(v.start_ts),
                format_ts(v.end_ts)
            )
        }
        AccountKind::LockedRewardVendor => {
            let v = LockedRewardVendor::decode_exact(data)?;
            format!(
                "cursor {}, supply snapshot {}, expires {}",
                v.reward_event_queue_cursor,
                v.pool_token_supply,
                format_ts(v.expiry_ts)
            )
        }
        AccountKind::Mint => {
            let m = Mint::decode_exact(data)?;
            format!("supply {}, decimals {}", m.supply, m.decimals)
        }
        AccountKind::TokenAccount => {
            let t = TokenAccount::decode_exact(data)?;
            format!("mint {}, owner {}, amount {}, {:?}", t.mint, t.owner, t.amount, t.state)
        }
        AccountKind::RewardEventQueue => {
            let q = RewardEventQueue::new(data)?;
            format!("head {}, {} events retained", q.head(), q.len())
        }
        AccountKind::Unknown => String::new(),
    })
}

pub fn report<S: AccountStore>(store: &S) -> anyhow::Result<Table> {
    let mut table = new_table(vec!["Account", "Size", "Layout", "Details"]);

    for key in store.keys()? {
        let data = match store.fetch(&key) {
            Ok(data) => data,
            Err(e) => {
                table.add_row(vec![key.to_string(), "-".to_string(), "CORRUPT".to_string(), e.to_string()]);
                continue;
            }
        };
        let kind = AccountKind::detect(data.len());
        let details = describe(kind, &data).unwrap_or_else(|e| format!("decode failed: {e}"));
        table.add_row(vec![key.to_string(), data.len().to_string(), kind.name().to_string(), details]);
    }

    Ok(table)
}

pub fn run(dir: &Path) -> anyhow::Result<()> {
    anyhow::ensure!(dir.is_dir(), "account directory {} does not exist", dir.display());
    let store = DirStore::open(dir)?;
    let table = report(&store)?;

    println!("\nStored Accounts");
    println!("---------------");
    println!("{table}\n");

    Ok(())
}
