//! Error types shared by the SS58 crates.

use thiserror::Error;

/// Errors produced while building, encoding or decoding SS58 addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Ss58Error {
    /// The input string is not a well-formed SS58 address.
    #[error("invalid ss58 address {input:?}: {reason}")]
    InvalidAddress {
        input: String,
        reason: InvalidReason,
    },

    #[error("ss58 prefix out of range: {0} (must be below 16384)")]
    PrefixOutOfRange(u16),
}

impl Ss58Error {
    /// Build an `InvalidAddress` error for the given input.
    pub fn invalid(input: impl Into<String>, reason: InvalidReason) -> Self {
        Self::InvalidAddress {
            input: input.into(),
            reason,
        }
    }

    /// Why decoding failed, if this is a decode error.
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            Self::InvalidAddress { reason, .. } => Some(*reason),
            Self::PrefixOutOfRange(_) => None,
        }
    }
}

/// The structural check a rejected address failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("not valid base58")]
    InvalidBase58,

    #[error("decoded length {len} is too short")]
    TooShort { len: usize },

    /// Leading byte is 128 or above; only the one- and two-byte tiers exist.
    #[error("unsupported prefix tier (leading byte {0:#04x})")]
    UnsupportedPrefixTier(u8),

    #[error("checksum mismatch")]
    ChecksumMismatch,
}
