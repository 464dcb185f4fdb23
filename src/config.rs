// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Format constants.
//!
//! Changing any of these is a breaking change to the on-chain byte layout.

/// Number of events the reward queue retains before overwriting the oldest.
pub const REWARD_QUEUE_CAPACITY: u32 = 500;

/// Bytes per reward queue slot. Sized for the largest `LockedAlloc` event.
pub const REWARD_EVENT_SIZE: usize = 145;

/// Request tag prefixing every admin-alert pool instruction.
pub const ADMIN_ALERT_INSTRUCTION_TAG: u64 = 0x31e6_45f3_c161_7878;

/// Tag stored in the first 8 bytes of an admin-alert pool's custom state.
pub const ADMIN_ALERT_POOL_TAG: u64 = 0x4a3f_bcf7_4f93_f94e;

/// Asset index credited with the full share amount when a pool has no supply.
pub const SEED_ASSET_INDEX: usize = 0;
