// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use alloc::boxed::Box;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Buffer length disagrees with the declared layout size.
    SizeMismatch { expected: usize, actual: usize },
    /// A field holds a value outside its domain (e.g. a bool byte of 7).
    FieldOutOfRange {
        offset: usize,
        field: &'static str,
        value: u32,
    },
    /// The 8-byte request tag matched no known request family.
    UnknownTag { tag: u64 },
    /// Enum discriminant not recognized for this variant family.
    UnknownVariant { offset: usize, discriminant: u8 },
    /// A ring-log slot failed to decode.
    CorruptEntry {
        index: u32,
        source: Box<LedgerError>,
    },
    /// Cursor outside the readable window `[tail, head]`.
    InvalidCursor { cursor: u32, tail: u32, head: u32 },
    /// Caller-side configuration error, e.g. a vault list of the wrong length.
    InvariantViolation {
        reason: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Arithmetic result does not fit its target width.
    Overflow { context: &'static str },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} bytes, got {actual}")
            }
            LedgerError::FieldOutOfRange { offset, field, value } => {
                write!(f, "field `{field}` at offset {offset} out of range: {value}")
            }
            LedgerError::UnknownTag { tag } => write!(f, "unknown request tag {tag:#018x}"),
            LedgerError::UnknownVariant { offset, discriminant } => {
                write!(f, "unknown variant {discriminant} at offset {offset}")
            }
            LedgerError::CorruptEntry { index, source } => {
                write!(f, "corrupt ring entry {index}: {source}")
            }
            LedgerError::InvalidCursor { cursor, tail, head } => {
                write!(f, "cursor {cursor} outside readable window [{tail}, {head}]")
            }
            LedgerError::InvariantViolation { reason, expected, actual } => {
                write!(f, "invariant violation: {reason} (expected {expected}, got {actual})")
            }
            LedgerError::Overflow { context } => write!(f, "arithmetic overflow in {context}"),
        }
    }
}

impl core::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            LedgerError::CorruptEntry { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type LedgerResult<T> = core::result::Result<T, LedgerError>;
pub type Result<T> = LedgerResult<T>;
