// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::Serialize;
use stake_ledger::{Pubkey, RewardEvent, RewardEventQueue};
use stake_ledger_store::{AccountStore, DirStore};
use std::path::Path;

use crate::{format_ts, new_table};

/// A queue entry with its cursor. Undecodable slots keep their cursor and
/// carry the error instead of an event.
#[derive(Debug, Serialize)]
pub struct EventRow {
    pub cursor: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<RewardEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn collect<S: AccountStore>(store: &S, queue_key: &Pubkey, since: Option<u32>) -> anyhow::Result<Vec<EventRow>> {
    let queue = RewardEventQueue::new(store.fetch(queue_key)?)?;
    let start = since.unwrap_or_else(|| queue.tail());
    let entries = match since {
        Some(cursor) => queue.events_since(cursor)?,
        None => queue.events(),
    };

    let rows = entries
        .zip(start..)
        .map(|(entry, cursor)| match entry {
            Ok(event) => EventRow {
                cursor,
                event: Some(event),
                error: None,
            },
            Err(e) => EventRow {
                cursor,
                event: None,
                error: Some(e.to_string()),
            },
        })
        .collect();
    Ok(rows)
}

fn details(event: &RewardEvent) -> String {
    match event {
        RewardEvent::PoolDrop { from, totals, .. } => format!("totals {:?} from {}", totals, from),
        RewardEvent::LockedAlloc {
            total,
            expiry_ts,
            locked_vendor,
            ..
        } => format!("total {}, expires {}, vendor {}", total, format_ts(*expiry_ts), locked_vendor),
    }
}

pub fn run(dir: &Path, queue_key: &Pubkey, since: Option<u32>, json: bool) -> anyhow::Result<()> {
    let store = DirStore::open(dir)?;
    let rows = collect(&store, queue_key, since)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut table = new_table(vec!["Cursor", "Type", "Pool", "Details"]);
    for row in &rows {
        match (&row.event, &row.error) {
            (Some(event), _) => table.add_row(vec![
                row.cursor.to_string(),
                event.event_type().to_string(),
                event.pool().to_string(),
                details(event),
            ]),
            (None, error) => table.add_row(vec![
                row.cursor.to_string(),
                "CORRUPT".to_string(),
                String::new(),
                error.clone().unwrap_or_default(),
            ]),
        };
    }

    println!("\nReward Events ({})\n", queue_key);
    println!("{table}\n");

    Ok(())
}
