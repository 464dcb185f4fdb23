// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use stake_ledger::{LedgerError, Pubkey};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),
    #[error("Invalid magic bytes in account dump")]
    InvalidMagic,
    #[error("Unsupported dump version {0}")]
    UnsupportedVersion(u32),
    #[error("Truncated dump: header declares {declared} bytes, found {found}")]
    Truncated {
        declared: usize,
        found: usize,
    },
    #[error("Checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch {
        expected: u64,
        found: u64,
    },
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Layout error: {0}")]
    Layout(#[from] LedgerError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
