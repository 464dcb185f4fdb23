// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Layouts for scalar fields, identifiers, optionals and sequences.

use alloc::vec::Vec;
use serde::{Serialize, Serializer};

use super::{Decode, Encode, FixedLayout, Reader, Writer};
use crate::error::{LedgerError, Result};
use crate::types::Pubkey;

macro_rules! scalar_layout {
    ($ty:ty, $size:expr, $put:ident, $read:ident) => {
        impl Encode for $ty {
            fn encoded_len(&self) -> usize {
                $size
            }

            fn encode_into(&self, w: &mut Writer) {
                w.$put(*self);
            }
        }

        impl Decode for $ty {
            fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
                r.$read()
            }
        }

        impl FixedLayout for $ty {
            const SIZE: usize = $size;
        }
    };
}

scalar_layout!(u8, 1, put_u8, read_u8);
scalar_layout!(u32, 4, put_u32, read_u32);
scalar_layout!(u64, 8, put_u64, read_u64);
scalar_layout!(i64, 8, put_i64, read_i64);

impl Encode for bool {
    fn encoded_len(&self) -> usize {
        1
    }

    fn encode_into(&self, w: &mut Writer) {
        w.put_bool(*self);
    }
}

impl Decode for bool {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
        r.read_bool("bool")
    }
}

impl FixedLayout for bool {
    const SIZE: usize = 1;
}

impl<const N: usize> Encode for [u8; N] {
    fn encoded_len(&self) -> usize {
        N
    }

    fn encode_into(&self, w: &mut Writer) {
        w.put_bytes(self);
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
        r.read_array::<N>()
    }
}

impl<const N: usize> FixedLayout for [u8; N] {
    const SIZE: usize = N;
}

impl Encode for Pubkey {
    fn encoded_len(&self) -> usize {
        Pubkey::LEN
    }

    fn encode_into(&self, w: &mut Writer) {
        w.put_pubkey(self);
    }
}

impl Decode for Pubkey {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
        r.read_pubkey()
    }
}

impl FixedLayout for Pubkey {
    const SIZE: usize = Pubkey::LEN;
}

/// `[presence: u8][payload]`. The payload is always `T::SIZE` bytes wide and
/// zero-filled when absent, so the record keeps its fixed length.
impl<T: FixedLayout> Encode for Option<T> {
    fn encoded_len(&self) -> usize {
        1 + T::SIZE
    }

    fn encode_into(&self, w: &mut Writer) {
        match self {
            Some(value) => {
                w.put_u8(1);
                value.encode_into(w);
            }
            None => {
                w.put_u8(0);
                w.put_zeros(T::SIZE);
            }
        }
    }
}

impl<T: FixedLayout> Decode for Option<T> {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
        let offset = r.offset();
        match r.read_u8()? {
            0 => {
                // Whatever sits in an absent payload is not part of the value.
                r.skip(T::SIZE)?;
                Ok(None)
            }
            1 => T::decode_from(r).map(Some),
            v => Err(LedgerError::FieldOutOfRange {
                offset,
                field: "option",
                value: v as u32,
            }),
        }
    }
}

impl<T: FixedLayout> FixedLayout for Option<T> {
    const SIZE: usize = 1 + T::SIZE;
}

/// SPL-style optional with a 4-byte presence word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct COption<T>(pub Option<T>);

impl<T> COption<T> {
    pub const fn none() -> Self {
        COption(None)
    }

    pub const fn some(value: T) -> Self {
        COption(Some(value))
    }

    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }

    pub fn as_ref(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for COption<T> {
    fn default() -> Self {
        COption(None)
    }
}

impl<T> From<Option<T>> for COption<T> {
    fn from(value: Option<T>) -> Self {
        COption(value)
    }
}

impl<T: Serialize> Serialize for COption<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<T: FixedLayout> Encode for COption<T> {
    fn encoded_len(&self) -> usize {
        4 + T::SIZE
    }

    fn encode_into(&self, w: &mut Writer) {
        match &self.0 {
            Some(value) => {
                w.put_u32(1);
                value.encode_into(w);
            }
            None => {
                w.put_u32(0);
                w.put_zeros(T::SIZE);
            }
        }
    }
}

impl<T: FixedLayout> Decode for COption<T> {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
        let offset = r.offset();
        match r.read_u32()? {
            0 => {
                r.skip(T::SIZE)?;
                Ok(COption(None))
            }
            1 => T::decode_from(r).map(|v| COption(Some(v))),
            v => Err(LedgerError::FieldOutOfRange {
                offset,
                field: "coption",
                value: v,
            }),
        }
    }
}

impl<T: FixedLayout> FixedLayout for COption<T> {
    const SIZE: usize = 4 + T::SIZE;
}

/// `[len: u32][items]`. Only used inside variant payloads.
impl<T: FixedLayout> Encode for Vec<T> {
    fn encoded_len(&self) -> usize {
        4 + self.len() * T::SIZE
    }

    fn encode_into(&self, w: &mut Writer) {
        w.put_len(self.len());
        for item in self {
            item.encode_into(w);
        }
    }
}

impl<T: FixedLayout> Decode for Vec<T> {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
        let len = r.read_u32()? as usize;
        // Reject oversized counts before allocating.
        let needed = len
            .checked_mul(T::SIZE)
            .ok_or(LedgerError::Overflow { context: "sequence length" })?;
        if needed > r.remaining() {
            return Err(LedgerError::SizeMismatch {
                expected: r.offset() + needed,
                actual: r.offset() + r.remaining(),
            });
        }
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(T::decode_from(r)?);
        }
        Ok(items)
    }
}
