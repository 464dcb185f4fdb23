// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Lockup vesting account.

use serde::Serialize;

use crate::error::Result;
use crate::layout::{Decode, Encode, FixedLayout, Reader, Writer};
use crate::types::Pubkey;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Vesting {
    pub initialized: bool,
    /// Safe instance this vesting belongs to.
    pub safe: Pubkey,
    pub beneficiary: Pubkey,
    /// Set once the locked NFT has been claimed.
    pub claimed: bool,
    pub grantor: Pubkey,
    /// Amount still locked or unwithdrawn.
    pub balance: u64,
    pub start_balance: u64,
    pub start_ts: i64,
    pub end_ts: i64,
    pub period_count: u64,
    pub locked_nft_mint: Pubkey,
    pub locked_nft_token: Pubkey,
    /// Amount currently transferred out to whitelisted programs.
    pub whitelist_owned: u64,
}

impl Encode for Vesting {
    fn encoded_len(&self) -> usize {
        Self::SIZE
    }

    fn encode_into(&self, w: &mut Writer) {
        w.put_bool(self.initialized);
        w.put_pubkey(&self.safe);
        w.put_pubkey(&self.beneficiary);
        w.put_bool(self.claimed);
        w.put_pubkey(&self.grantor);
        w.put_u64(self.balance);
        w.put_u64(self.start_balance);
        w.put_i64(self.start_ts);
        w.put_i64(self.end_ts);
        w.put_u64(self.period_count);
        w.put_pubkey(&self.locked_nft_mint);
        w.put_pubkey(&self.locked_nft_token);
        w.put_u64(self.whitelist_owned);
    }
}

impl Decode for Vesting {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            initialized: r.read_bool("initialized")?,
            safe: r.read_pubkey()?,
            beneficiary: r.read_pubkey()?,
            claimed: r.read_bool("claimed")?,
            grantor: r.read_pubkey()?,
            balance: r.read_u64()?,
            start_balance: r.read_u64()?,
            start_ts: r.read_i64()?,
            end_ts: r.read_i64()?,
            period_count: r.read_u64()?,
            locked_nft_mint: r.read_pubkey()?,
            locked_nft_token: r.read_pubkey()?,
            whitelist_owned: r.read_u64()?,
        })
    }
}

impl FixedLayout for Vesting {
    const SIZE: usize = 1 + 32 + 32 + 1 + 32 + 8 + 8 + 8 + 8 + 8 + 32 + 32 + 8; // 210 bytes
}
