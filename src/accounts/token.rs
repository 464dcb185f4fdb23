// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! SPL token program accounts. Pool vaults and share mints are read through
//! these to feed basket valuation.

use serde::Serialize;

use crate::error::{LedgerError, Result};
use crate::layout::{COption, Decode, Encode, FixedLayout, Reader, Writer};
use crate::types::Pubkey;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Mint {
    pub mint_authority: COption<Pubkey>,
    pub supply: u64,
    pub decimals: u8,
    pub is_initialized: bool,
    pub freeze_authority: COption<Pubkey>,
}

impl Encode for Mint {
    fn encoded_len(&self) -> usize {
        Self::SIZE
    }

    fn encode_into(&self, w: &mut Writer) {
        self.mint_authority.encode_into(w);
        w.put_u64(self.supply);
        w.put_u8(self.decimals);
        w.put_bool(self.is_initialized);
        self.freeze_authority.encode_into(w);
    }
}

impl Decode for Mint {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            mint_authority: COption::decode_from(r)?,
            supply: r.read_u64()?,
            decimals: r.read_u8()?,
            is_initialized: r.read_bool("is_initialized")?,
            freeze_authority: COption::decode_from(r)?,
        })
    }
}

impl FixedLayout for Mint {
    const SIZE: usize = 36 + 8 + 1 + 1 + 36; // 82 bytes
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum AccountState {
    #[default]
    Uninitialized = 0,
    Initialized = 1,
    Frozen = 2,
}

impl AccountState {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(AccountState::Uninitialized),
            1 => Some(AccountState::Initialized),
            2 => Some(AccountState::Frozen),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TokenAccount {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub delegate: COption<Pubkey>,
    pub state: AccountState,
    /// Rent-exempt reserve for wrapped SOL accounts.
    pub is_native: COption<u64>,
    pub delegated_amount: u64,
    pub close_authority: COption<Pubkey>,
}

impl TokenAccount {
    pub fn is_initialized(&self) -> bool {
        self.state != AccountState::Uninitialized
    }

    pub fn is_frozen(&self) -> bool {
        self.state == AccountState::Frozen
    }
}

impl Encode for TokenAccount {
    fn encoded_len(&self) -> usize {
        Self::SIZE
    }

    fn encode_into(&self, w: &mut Writer) {
        w.put_pubkey(&self.mint);
        w.put_pubkey(&self.owner);
        w.put_u64(self.amount);
        self.delegate.encode_into(w);
        w.put_u8(self.state as u8);
        self.is_native.encode_into(w);
        w.put_u64(self.delegated_amount);
        self.close_authority.encode_into(w);
    }
}

impl Decode for TokenAccount {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
        let mint = r.read_pubkey()?;
        let owner = r.read_pubkey()?;
        let amount = r.read_u64()?;
        let delegate = COption::decode_from(r)?;
        let state_offset = r.offset();
        let raw_state = r.read_u8()?;
        let state = AccountState::from_u8(raw_state).ok_or(LedgerError::FieldOutOfRange {
            offset: state_offset,
            field: "state",
            value: raw_state as u32,
        })?;
        Ok(Self {
            mint,
            owner,
            amount,
            delegate,
            state,
            is_native: COption::decode_from(r)?,
            delegated_amount: r.read_u64()?,
            close_authority: COption::decode_from(r)?,
        })
    }
}

impl FixedLayout for TokenAccount {
    const SIZE: usize = 32 + 32 + 8 + 36 + 1 + 12 + 8 + 36; // 165 bytes
}
