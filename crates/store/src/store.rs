// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Account stores.
//!
//! The core crate never touches I/O; a store hands it raw account bytes and
//! persists whatever it writes back.

use crate::dump;
use crate::error::{Result, StoreError};
use rustc_hash::FxHashMap;
use stake_ledger::{FixedLayout, Pubkey, RewardEvent, RewardEventQueue};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub trait AccountStore {
    /// Raw bytes of `key`. A missing account is `AccountNotFound`, never an
    /// empty buffer.
    fn fetch(&self, key: &Pubkey) -> Result<Vec<u8>>;

    fn persist(&mut self, key: &Pubkey, data: &[u8]) -> Result<()>;

    /// Every stored key, sorted.
    fn keys(&self) -> Result<Vec<Pubkey>>;
}

/// One dump file per account: `<dir>/<base58 key>.acct`.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub const EXTENSION: &'static str = "acct";

    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &Pubkey) -> PathBuf {
        self.dir.join(format!("{}.{}", key, Self::EXTENSION))
    }
}

impl AccountStore for DirStore {
    fn fetch(&self, key: &Pubkey) -> Result<Vec<u8>> {
        let data = match dump::read_dump(self.path_for(key)) {
            Err(StoreError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::AccountNotFound(*key))
            }
            other => other?,
        };
        tracing::debug!(%key, len = data.len(), "fetched account");
        Ok(data)
    }

    fn persist(&mut self, key: &Pubkey, data: &[u8]) -> Result<()> {
        dump::write_to(self.path_for(key), data)?;
        tracing::debug!(%key, len = data.len(), "persisted account");
        Ok(())
    }

    fn keys(&self) -> Result<Vec<Pubkey>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(Self::EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match stem.parse::<Pubkey>() {
                Ok(key) => keys.push(key),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping dump with invalid key"),
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemStore {
    accounts: FxHashMap<Pubkey, Vec<u8>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountStore for MemStore {
    fn fetch(&self, key: &Pubkey) -> Result<Vec<u8>> {
        self.accounts
            .get(key)
            .cloned()
            .ok_or(StoreError::AccountNotFound(*key))
    }

    fn persist(&mut self, key: &Pubkey, data: &[u8]) -> Result<()> {
        self.accounts.insert(*key, data.to_vec());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<Pubkey>> {
        let mut keys: Vec<Pubkey> = self.accounts.keys().copied().collect();
        keys.sort();
        Ok(keys)
    }
}

/// Fetches and decodes a fixed-layout account.
pub fn load<T: FixedLayout, S: AccountStore + ?Sized>(store: &S, key: &Pubkey) -> Result<T> {
    let data = store.fetch(key)?;
    Ok(T::decode_exact(&data)?)
}

/// Appends `event` to the reward queue stored under `queue_key` and returns
/// its cursor. Not safe against concurrent writers of the same key.
pub fn append_reward_event<S: AccountStore + ?Sized>(
    store: &mut S,
    queue_key: &Pubkey,
    event: &RewardEvent,
) -> Result<u32> {
    let mut queue = RewardEventQueue::new(store.fetch(queue_key)?)?;
    let cursor = queue.append(event)?;
    store.persist(queue_key, &queue.into_inner())?;
    tracing::info!(queue = %queue_key, cursor, kind = event.event_type(), "reward event appended");
    Ok(cursor)
}
