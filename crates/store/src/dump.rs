// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Account dump files.
//!
//! `[magic "SLAD"][version u32][data_len u32][crc64 u64][account bytes]`,
//! all little-endian. The checksum covers the account bytes only.

use crate::error::{Result, StoreError};
use crc64fast::Digest;
use memmap2::Mmap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpHeader {
    pub magic: [u8; 4],
    pub version: u32,
    pub data_len: u32,
    pub checksum: u64,
}

impl DumpHeader {
    pub const SIZE: usize = 4 + 4 + 4 + 8; // 20 bytes
    pub const MAGIC: [u8; 4] = *b"SLAD";
    pub const VERSION: u32 = 1;

    pub fn for_body(body: &[u8]) -> Result<Self> {
        let data_len = u32::try_from(body.len()).map_err(|_| StoreError::Truncated {
            declared: u32::MAX as usize,
            found: body.len(),
        })?;
        Ok(Self {
            magic: Self::MAGIC,
            version: Self::VERSION,
            data_len,
            checksum: checksum(body),
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..4].copy_from_slice(&self.magic);
        buf[4..8].copy_from_slice(&self.version.to_le_bytes());
        buf[8..12].copy_from_slice(&self.data_len.to_le_bytes());
        buf[12..20].copy_from_slice(&self.checksum.to_le_bytes());
        buf
    }

    pub fn parse(buf: &[u8; Self::SIZE]) -> Result<Self> {
        let [m0, m1, m2, m3, v0, v1, v2, v3, l0, l1, l2, l3, c @ ..] = *buf;
        let magic = [m0, m1, m2, m3];
        if magic != Self::MAGIC {
            return Err(StoreError::InvalidMagic);
        }
        let version = u32::from_le_bytes([v0, v1, v2, v3]);
        if version != Self::VERSION {
            return Err(StoreError::UnsupportedVersion(version));
        }
        Ok(Self {
            magic,
            version,
            data_len: u32::from_le_bytes([l0, l1, l2, l3]),
            checksum: u64::from_le_bytes(c),
        })
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut buf = [0u8; Self::SIZE];
        reader.read_exact(&mut buf)?;
        Self::parse(&buf)
    }

    /// Checks `body` against the declared length and checksum.
    pub fn verify(&self, body: &[u8]) -> Result<()> {
        if body.len() != self.data_len as usize {
            return Err(StoreError::Truncated {
                declared: self.data_len as usize,
                found: body.len(),
            });
        }
        let found = checksum(body);
        if found != self.checksum {
            return Err(StoreError::ChecksumMismatch {
                expected: self.checksum,
                found,
            });
        }
        Ok(())
    }
}

pub fn checksum(body: &[u8]) -> u64 {
    let mut digest = Digest::new();
    digest.write(body);
    digest.sum64()
}

pub fn write_to(path: impl AsRef<Path>, body: &[u8]) -> Result<()> {
    let header = DumpHeader::for_body(body)?;
    let mut file = File::create(path)?;
    file.write_all(&header.to_bytes())?;
    file.write_all(body)?;
    file.sync_data()?;
    Ok(())
}

pub fn read_header(path: impl AsRef<Path>) -> Result<DumpHeader> {
    let file = File::open(path)?;
    DumpHeader::read_from(file)
}

/// Maps the dump and returns the verified account bytes.
pub fn read_dump(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file)? };
    let Some((head, body)) = mmap.split_first_chunk::<{ DumpHeader::SIZE }>() else {
        return Err(StoreError::Truncated {
            declared: DumpHeader::SIZE,
            found: mmap.len(),
        });
    };
    let header = DumpHeader::parse(head)?;
    header.verify(body)?;
    Ok(body.to_vec())
}
