// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! 32-byte public identifiers.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use serde::{Serialize, Serializer};

/// Raw 32-byte account address. Stored and compared verbatim; base58 is only
/// a presentation format.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Pubkey(pub [u8; 32]);

impl Pubkey {
    pub const LEN: usize = 32;

    pub const fn new_from_array(bytes: [u8; 32]) -> Self {
        Pubkey(bytes)
    }

    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Pubkey {
    fn from(bytes: [u8; 32]) -> Self {
        Pubkey(bytes)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self.to_base58())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePubkeyError {
    InvalidBase58,
    TooLong,
    WrongLength(usize),
}

impl fmt::Display for ParsePubkeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePubkeyError::InvalidBase58 => f.write_str("invalid base58 public key"),
            ParsePubkeyError::TooLong => f.write_str("public key longer than 32 bytes"),
            ParsePubkeyError::WrongLength(len) => {
                write!(f, "public key decodes to {len} bytes, expected 32")
            }
        }
    }
}

impl core::error::Error for ParsePubkeyError {}

impl FromStr for Pubkey {
    type Err = ParsePubkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        let len = bs58::decode(s).onto(&mut bytes).map_err(|e| match e {
            bs58::decode::Error::BufferTooSmall => ParsePubkeyError::TooLong,
            _ => ParsePubkeyError::InvalidBase58,
        })?;
        if len != Self::LEN {
            return Err(ParsePubkeyError::WrongLength(len));
        }
        Ok(Pubkey(bytes))
    }
}

impl Serialize for Pubkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
