// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed Layout Codec.
//!
//! Records are encoded field by field, little-endian, with no padding. Every
//! [`FixedLayout`] type has a constant encoded length; only variant payloads
//! (see [`crate::event`]) may carry length-prefixed sequences.

pub mod primitives;
pub mod reader;
pub mod writer;

use alloc::vec::Vec;

use crate::error::{LedgerError, Result};

pub use primitives::COption;
pub use reader::Reader;
pub use writer::Writer;

pub trait Encode {
    fn encoded_len(&self) -> usize;

    fn encode_into(&self, w: &mut Writer);

    fn to_bytes(&self) -> Vec<u8> {
        let mut w = Writer::with_capacity(self.encoded_len());
        self.encode_into(&mut w);
        w.into_inner()
    }
}

pub trait Decode: Sized {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self>;
}

/// A record whose encoding is always exactly `SIZE` bytes.
pub trait FixedLayout: Encode + Decode {
    const SIZE: usize;

    /// Decodes the first `SIZE` bytes. Longer buffers are accepted; the
    /// trailing bytes belong to whatever structure embeds this record.
    fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(LedgerError::SizeMismatch {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        let mut r = Reader::new(&bytes[..Self::SIZE]);
        Self::decode_from(&mut r)
    }

    /// Decodes a standalone record; the buffer must be exactly `SIZE` bytes.
    fn decode_exact(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(LedgerError::SizeMismatch {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        Self::decode(bytes)
    }

    fn encode(&self) -> Vec<u8> {
        let bytes = self.to_bytes();
        debug_assert_eq!(bytes.len(), Self::SIZE);
        bytes
    }
}

/// Decodes a variable-length value from the front of `bytes`. Trailing bytes
/// (e.g. zero padding inside a ring slot) are ignored.
pub fn decode_prefix<T: Decode>(bytes: &[u8]) -> Result<T> {
    let mut r = Reader::new(bytes);
    let value = T::decode_from(&mut r)?;
    tracing::trace!(consumed = r.offset(), len = bytes.len(), "decoded prefix");
    Ok(value)
}
