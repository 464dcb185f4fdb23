// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Tagged request payloads.
//!
//! A request is `[tag: u64 LE][discriminant: u8][fields]`. The tag selects the
//! request family, the discriminant the variant within it.

use crate::config::{ADMIN_ALERT_INSTRUCTION_TAG, ADMIN_ALERT_POOL_TAG};
use crate::error::{LedgerError, Result};
use crate::layout::{Decode, Encode, Reader, Writer};

/// A request family identified by a fixed 8-byte tag.
pub trait Tagged: Encode + Decode {
    const TAG: u64;

    fn encode_tagged(&self) -> alloc::vec::Vec<u8> {
        let mut w = Writer::with_capacity(8 + self.encoded_len());
        w.put_u64(Self::TAG);
        self.encode_into(&mut w);
        w.into_inner()
    }

    fn decode_tagged(bytes: &[u8]) -> Result<Self> {
        let mut r = Reader::new(bytes);
        let tag = r.read_u64()?;
        if tag != Self::TAG {
            return Err(LedgerError::UnknownTag { tag });
        }
        Self::decode_from(&mut r)
    }
}

pub const SERUM_CREATE_ORDER_V3_LEN: usize = 284;
pub const SERUM_CANCEL_ORDER_V2_LEN: usize = 132;

/// Requests understood by the admin-controlled pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdminRequest {
    /// Pauses creations and redemptions.
    Pause,
    /// Resumes creations and redemptions. Pool assets must have no delegates.
    Unpause,
    AddAsset,
    /// The pool must hold none of the asset being removed.
    RemoveAsset,
    UpdateFee { fee_rate: u32 },
    UpdateAdmin,
    /// Raw DEX instruction data forwarded by the pool.
    SerumCreateOrderV3 { data: [u8; SERUM_CREATE_ORDER_V3_LEN] },
    SerumCancelOrderV2 { data: [u8; SERUM_CANCEL_ORDER_V2_LEN] },
}

impl AdminRequest {
    fn discriminant(&self) -> u8 {
        match self {
            AdminRequest::Pause => 0,
            AdminRequest::Unpause => 1,
            AdminRequest::AddAsset => 2,
            AdminRequest::RemoveAsset => 3,
            AdminRequest::UpdateFee { .. } => 4,
            AdminRequest::UpdateAdmin => 5,
            AdminRequest::SerumCreateOrderV3 { .. } => 6,
            AdminRequest::SerumCancelOrderV2 { .. } => 7,
        }
    }
}

impl Encode for AdminRequest {
    fn encoded_len(&self) -> usize {
        1 + match self {
            AdminRequest::UpdateFee { .. } => 4,
            AdminRequest::SerumCreateOrderV3 { .. } => SERUM_CREATE_ORDER_V3_LEN,
            AdminRequest::SerumCancelOrderV2 { .. } => SERUM_CANCEL_ORDER_V2_LEN,
            _ => 0,
        }
    }

    fn encode_into(&self, w: &mut Writer) {
        w.put_u8(self.discriminant());
        match self {
            AdminRequest::UpdateFee { fee_rate } => w.put_u32(*fee_rate),
            AdminRequest::SerumCreateOrderV3 { data } => w.put_bytes(data),
            AdminRequest::SerumCancelOrderV2 { data } => w.put_bytes(data),
            _ => {}
        }
    }
}

impl Decode for AdminRequest {
    fn decode_from(r: &mut Reader<'_>) -> Result<Self> {
        let offset = r.offset();
        Ok(match r.read_u8()? {
            0 => AdminRequest::Pause,
            1 => AdminRequest::Unpause,
            2 => AdminRequest::AddAsset,
            3 => AdminRequest::RemoveAsset,
            4 => AdminRequest::UpdateFee {
                fee_rate: r.read_u32()?,
            },
            5 => AdminRequest::UpdateAdmin,
            6 => AdminRequest::SerumCreateOrderV3 {
                data: r.read_array()?,
            },
            7 => AdminRequest::SerumCancelOrderV2 {
                data: r.read_array()?,
            },
            discriminant => return Err(LedgerError::UnknownVariant { offset, discriminant }),
        })
    }
}

impl Tagged for AdminRequest {
    const TAG: u64 = ADMIN_ALERT_INSTRUCTION_TAG;
}

/// True when the pool's custom state starts with the admin-alert pool tag.
pub fn is_admin_alert_pool(custom_state: &[u8]) -> bool {
    custom_state.len() >= 8 && custom_state[..8] == ADMIN_ALERT_POOL_TAG.to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_bytes_are_little_endian() {
        let bytes = AdminRequest::Pause.encode_tagged();
        assert_eq!(&bytes[..8], &[0x78, 0x78, 0x61, 0xc1, 0xf3, 0x45, 0xe6, 0x31]);
        assert_eq!(bytes[8], 0);
        assert_eq!(bytes.len(), 9);
    }

    #[test]
    fn test_admin_alert_pool_detection() {
        let mut state = ADMIN_ALERT_POOL_TAG.to_le_bytes().to_vec();
        state.extend_from_slice(&[0xAA; 24]);
        assert!(is_admin_alert_pool(&state));
        assert!(!is_admin_alert_pool(&state[..7]));
        state[0] ^= 1;
        assert!(!is_admin_alert_pool(&state));
    }
}
