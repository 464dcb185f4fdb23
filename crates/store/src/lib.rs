// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod error;
pub mod dump;
pub mod store;
pub mod fixtures;

pub use error::{Result, StoreError};
pub use store::{append_reward_event, load, AccountStore, DirStore, MemStore};
