// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Little-endian writer backing every `Encode` impl.

use alloc::vec::Vec;
use byteorder::{ByteOrder, LittleEndian};

use crate::types::Pubkey;

#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    fn grow(&mut self, len: usize) -> &mut [u8] {
        let start = self.buf.len();
        self.buf.resize(start + len, 0);
        &mut self.buf[start..]
    }

    pub fn put_u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    pub fn put_bool(&mut self, val: bool) {
        self.put_u8(val as u8);
    }

    pub fn put_u32(&mut self, val: u32) {
        LittleEndian::write_u32(self.grow(4), val);
    }

    /// Writes a `u32` sequence length. Sequences only appear in ring slot
    /// payloads, which are far below `u32::MAX` items; a longer one is a bug.
    pub fn put_len(&mut self, len: usize) {
        let prefix = u32::try_from(len);
        debug_assert!(prefix.is_ok(), "sequence length {len} exceeds u32");
        self.put_u32(prefix.unwrap_or(u32::MAX));
    }

    pub fn put_u64(&mut self, val: u64) {
        LittleEndian::write_u64(self.grow(8), val);
    }

    pub fn put_i64(&mut self, val: i64) {
        LittleEndian::write_i64(self.grow(8), val);
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn put_pubkey(&mut self, key: &Pubkey) {
        self.put_bytes(&key.0);
    }

    /// Zero-filled placeholder, used for absent optional payloads.
    pub fn put_zeros(&mut self, len: usize) {
        self.grow(len);
    }
}
