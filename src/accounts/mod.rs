// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-size account records.

pub mod token;
pub mod vendor;
pub mod vesting;

pub use token::{AccountState, Mint, TokenAccount};
pub use vendor::LockedRewardVendor;
pub use vesting::Vesting;
