// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Bounds-checked little-endian reader.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{LedgerError, Result};
use crate::types::Pubkey;

pub struct Reader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or(LedgerError::Overflow { context: "reader offset" })?;
        if end > self.buf.len() {
            return Err(LedgerError::SizeMismatch {
                expected: end,
                actual: self.buf.len(),
            });
        }
        let bytes = &self.buf[self.offset..end];
        self.offset = end;
        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_bool(&mut self, field: &'static str) -> Result<bool> {
        let offset = self.offset;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            v => Err(LedgerError::FieldOutOfRange {
                offset,
                field,
                value: v as u32,
            }),
        }
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(LittleEndian::read_i64(self.take(8)?))
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_pubkey(&mut self) -> Result<Pubkey> {
        self.read_array::<32>().map(Pubkey)
    }
}
