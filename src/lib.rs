// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![no_std]

//! stake-ledger: binary account codecs, a bounded event ring and exact-integer
//! basket valuation for stake pools. no_std + alloc, no I/O.

#[cfg(test)]
#[macro_use]
extern crate std;

extern crate alloc;

pub mod config;
pub mod error;
pub mod types;
pub mod layout;
pub mod accounts;
pub mod event;
pub mod instruction;
pub mod ring;
pub mod queue;
pub mod basket;

pub use basket::{Basket, PoolKind, PoolValuation, Rounding};
pub use error::{LedgerError, Result};
pub use event::RewardEvent;
pub use instruction::{AdminRequest, Tagged};
pub use layout::{Decode, Encode, FixedLayout};
pub use queue::RewardEventQueue;
pub use ring::{ItemDecoder, LayoutDecoder, Ring};
pub use types::Pubkey;

#[cfg(test)]
pub mod tests;
