// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Registry reward event queue.

use crate::config::{REWARD_EVENT_SIZE, REWARD_QUEUE_CAPACITY};
use crate::error::Result;
use crate::event::RewardEvent;
use crate::ring::{self, Entries, LayoutDecoder, Ring, RING_HEADER_SIZE};
use crate::types::Pubkey;

pub type RewardEventDecoder = LayoutDecoder<RewardEvent>;

/// The last `REWARD_QUEUE_CAPACITY` reward events of a registrar.
#[derive(Debug)]
pub struct RewardEventQueue<B> {
    ring: Ring<B>,
}

impl RewardEventQueue<()> {
    pub const fn account_size() -> usize {
        RING_HEADER_SIZE + REWARD_QUEUE_CAPACITY as usize * REWARD_EVENT_SIZE
    }
}

impl<B: AsRef<[u8]>> RewardEventQueue<B> {
    pub fn new(data: B) -> Result<Self> {
        let ring = Ring::new(data, REWARD_QUEUE_CAPACITY, REWARD_EVENT_SIZE)?;
        Ok(Self { ring })
    }

    pub fn authority(&self) -> Pubkey {
        self.ring.authority()
    }

    pub fn head(&self) -> u32 {
        self.ring.head()
    }

    pub fn tail(&self) -> u32 {
        self.ring.tail()
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn events(&self) -> Entries<'_, RewardEventDecoder> {
        self.ring.entries(RewardEventDecoder::new())
    }

    /// Events a consumer with the given cursor has not processed yet.
    pub fn events_since(&self, cursor: u32) -> Result<Entries<'_, RewardEventDecoder>> {
        self.ring.entries_since(cursor, RewardEventDecoder::new())
    }

    pub fn into_inner(self) -> B {
        self.ring.into_inner()
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> RewardEventQueue<B> {
    /// Appends `event`, returning its cursor. Pool drops with more than
    /// [`crate::event::MAX_POOL_DROP_ASSETS`] totals do not fit a slot.
    pub fn append(&mut self, event: &RewardEvent) -> Result<u32> {
        self.ring.append(event)
    }
}

/// Checks a raw buffer against the queue's account size.
pub fn validate(data: &[u8]) -> Result<()> {
    ring::validate(data, REWARD_QUEUE_CAPACITY, REWARD_EVENT_SIZE)
}
