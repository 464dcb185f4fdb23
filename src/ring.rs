// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Bounded Ring Log.
//!
//! A fixed-capacity circular log embedded in an account buffer:
//!
//! ```text
//! [authority: 32][head: u32][slot 0][slot 1] ... [slot capacity-1]
//! ```
//!
//! `head` counts every append ever made and is never reset. The item with
//! logical index `i` lives in slot `i % capacity`; once `head > capacity` the
//! oldest `head - capacity` items have been overwritten and are gone.
//!
//! # Invariants
//! - `buffer.len() == RING_HEADER_SIZE + capacity * item_size`
//! - Readable logical indices are exactly `[tail, head)` where
//!   `tail = head - min(head, capacity)`
//!
//! The log does no locking. Callers must ensure a single writer per buffer.

use core::marker::PhantomData;

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use crate::error::{LedgerError, Result};
use crate::layout::{decode_prefix, Decode, Encode, FixedLayout, Reader, Writer};
use crate::types::Pubkey;

/// Header preceding the ring slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RingHeader {
    pub authority: Pubkey,
    pub head: u32,
}

impl RingHeader {
    const HEAD_OFFSET: usize = 32;
}

impl Encode for RingHeader {
    fn encoded_len(&self) -> usize {
        Self::SIZE
    }

    fn encode_into(&self, w: &mut Writer) {
        w.put_pubkey(&self.authority);
        w.put_u32(self.head);
    }
}

impl Decode for RingHeader {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            authority: r.read_pubkey()?,
            head: r.read_u32()?,
        })
    }
}

impl FixedLayout for RingHeader {
    const SIZE: usize = 32 + 4;
}

/// Offset of slot 0.
pub const RING_HEADER_SIZE: usize = RingHeader::SIZE;

/// Decodes one ring slot into a typed item.
pub trait ItemDecoder {
    type Item;

    fn decode(&self, slot: &[u8]) -> Result<Self::Item>;
}

/// Decodes slots with the item type's own layout. Trailing slot padding is
/// ignored.
pub struct LayoutDecoder<T>(PhantomData<fn() -> T>);

impl<T> LayoutDecoder<T> {
    pub const fn new() -> Self {
        LayoutDecoder(PhantomData)
    }
}

impl<T> Default for LayoutDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for LayoutDecoder<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: Decode> ItemDecoder for LayoutDecoder<T> {
    type Item = T;

    fn decode(&self, slot: &[u8]) -> Result<T> {
        decode_prefix(slot)
    }
}

#[derive(Debug)]
pub struct Ring<B> {
    data: B,
    capacity: u32,
    item_size: usize,
}

impl<B> Ring<B> {
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn item_size(&self) -> usize {
        self.item_size
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

/// Total byte size of a ring region with the given geometry.
pub fn buffer_size(capacity: u32, item_size: usize) -> Result<usize> {
    (capacity as usize)
        .checked_mul(item_size)
        .and_then(|slots| slots.checked_add(RING_HEADER_SIZE))
        .ok_or(LedgerError::Overflow { context: "ring buffer size" })
}

/// Checks that `buffer` is exactly the size of a ring with this geometry.
pub fn validate(buffer: &[u8], capacity: u32, item_size: usize) -> Result<()> {
    if capacity == 0 || item_size == 0 {
        return Err(LedgerError::InvariantViolation {
            reason: "ring geometry must be non-zero",
            expected: 1,
            actual: 0,
        });
    }
    let expected = buffer_size(capacity, item_size)?;
    if buffer.len() != expected {
        return Err(LedgerError::SizeMismatch {
            expected,
            actual: buffer.len(),
        });
    }
    Ok(())
}

impl<B: AsRef<[u8]>> Ring<B> {
    pub fn new(data: B, capacity: u32, item_size: usize) -> Result<Self> {
        validate(data.as_ref(), capacity, item_size)?;
        Ok(Self {
            data,
            capacity,
            item_size,
        })
    }

    pub fn header(&self) -> Result<RingHeader> {
        RingHeader::decode(self.data.as_ref())
    }

    pub fn authority(&self) -> Pubkey {
        let mut key = [0u8; 32];
        key.copy_from_slice(&self.data.as_ref()[..RingHeader::HEAD_OFFSET]);
        Pubkey(key)
    }

    /// Logical index of the next append.
    pub fn head(&self) -> u32 {
        let at = RingHeader::HEAD_OFFSET;
        LittleEndian::read_u32(&self.data.as_ref()[at..at + 4])
    }

    /// Logical index of the oldest readable item.
    pub fn tail(&self) -> u32 {
        self.head() - self.head().min(self.capacity)
    }

    pub fn len(&self) -> usize {
        self.head().min(self.capacity) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.head() == 0
    }

    fn slot_offset(&self, index: u32) -> usize {
        RING_HEADER_SIZE + (index % self.capacity) as usize * self.item_size
    }

    /// Raw bytes of the item with logical index `index`, if still readable.
    pub fn slot(&self, index: u32) -> Option<&[u8]> {
        if index < self.tail() || index >= self.head() {
            return None;
        }
        let start = self.slot_offset(index);
        Some(&self.data.as_ref()[start..start + self.item_size])
    }

    /// Every readable item, oldest first.
    pub fn entries<D: ItemDecoder>(&self, decoder: D) -> Entries<'_, D> {
        Entries {
            data: self.data.as_ref(),
            capacity: self.capacity,
            item_size: self.item_size,
            next: self.tail(),
            end: self.head(),
            decoder,
        }
    }

    /// Items with logical index `>= cursor`. Fails if `cursor` is older than
    /// `tail` (its history was overwritten) or newer than `head`.
    pub fn entries_since<D: ItemDecoder>(&self, cursor: u32, decoder: D) -> Result<Entries<'_, D>> {
        let (tail, head) = (self.tail(), self.head());
        if cursor < tail || cursor > head {
            return Err(LedgerError::InvalidCursor { cursor, tail, head });
        }
        let mut entries = self.entries(decoder);
        entries.next = cursor;
        Ok(entries)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Ring<B> {
    /// Writes `item` into the next slot, overwriting the oldest entry when
    /// full, and returns its logical index.
    pub fn append<T: Encode>(&mut self, item: &T) -> Result<u32> {
        let encoded = item.to_bytes();
        if encoded.len() > self.item_size {
            return Err(LedgerError::SizeMismatch {
                expected: self.item_size,
                actual: encoded.len(),
            });
        }
        let index = self.head();
        let next = index
            .checked_add(1)
            .ok_or(LedgerError::Overflow { context: "ring head" })?;

        let start = self.slot_offset(index);
        let slot = &mut self.data.as_mut()[start..start + self.item_size];
        slot[..encoded.len()].copy_from_slice(&encoded);
        slot[encoded.len()..].fill(0);

        let at = RingHeader::HEAD_OFFSET;
        LittleEndian::write_u32(&mut self.data.as_mut()[at..at + 4], next);

        tracing::debug!(index, slot = index % self.capacity, len = encoded.len(), "ring append");
        Ok(index)
    }
}

/// Lazy iterator over ring items. Cloning restarts from the same position.
#[derive(Clone)]
pub struct Entries<'a, D> {
    data: &'a [u8],
    capacity: u32,
    item_size: usize,
    next: u32,
    end: u32,
    decoder: D,
}

impl<'a, D: ItemDecoder> Iterator for Entries<'a, D> {
    type Item = Result<D::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let start = RING_HEADER_SIZE + (index % self.capacity) as usize * self.item_size;
        let slot = &self.data[start..start + self.item_size];
        Some(self.decoder.decode(slot).map_err(|e| {
            tracing::warn!(index, error = %e, "corrupt ring entry");
            LedgerError::CorruptEntry {
                index,
                source: alloc::boxed::Box::new(e),
            }
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl<'a, D: ItemDecoder> ExactSizeIterator for Entries<'a, D> {}
