// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Core value types shared by every layout.

pub mod pubkey;

pub use pubkey::{ParsePubkeyError, Pubkey};
