//! Decoded SS58 address.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Ss58Error;
use crate::network::NetworkPrefix;

/// A decoded SS58 address: network prefix plus raw payload bytes.
///
/// The prefix must be below [`Address::PREFIX_LIMIT`]. Fields are public, so
/// the encoder re-checks the range before serializing.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAddress")]
pub struct Address {
    /// Address type / network identifier.
    pub prefix: u16,
    /// Raw address bytes (typically a 32-byte public key).
    pub bytes: Vec<u8>,
}

impl Address {
    /// Exclusive upper bound for prefixes (14 bits).
    pub const PREFIX_LIMIT: u16 = 16384;

    /// Create an address from a prefix and payload.
    ///
    /// # Panics
    /// Panics if `prefix` is not below [`Address::PREFIX_LIMIT`].
    pub fn new(prefix: u16, bytes: impl Into<Vec<u8>>) -> Self {
        assert!(prefix < Self::PREFIX_LIMIT, "invalid prefix: {prefix}");
        Self {
            prefix,
            bytes: bytes.into(),
        }
    }

    /// Fallible counterpart of [`Address::new`].
    pub fn try_new(prefix: u16, bytes: impl Into<Vec<u8>>) -> Result<Self, Ss58Error> {
        if prefix >= Self::PREFIX_LIMIT {
            return Err(Ss58Error::PrefixOutOfRange(prefix));
        }
        Ok(Self {
            prefix,
            bytes: bytes.into(),
        })
    }

    pub fn has_valid_prefix(&self) -> bool {
        self.prefix < Self::PREFIX_LIMIT
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Well-known network for this prefix, if it is one we name.
    pub fn network(&self) -> Option<NetworkPrefix> {
        NetworkPrefix::from_prefix(self.prefix)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({}, 0x{})", self.prefix, hex::encode(&self.bytes))
    }
}

#[derive(Deserialize)]
struct RawAddress {
    prefix: u16,
    bytes: Vec<u8>,
}

impl TryFrom<RawAddress> for Address {
    type Error = Ss58Error;

    fn try_from(raw: RawAddress) -> Result<Self, Self::Error> {
        Self::try_new(raw.prefix, raw.bytes)
    }
}

// Inline hex encoding to avoid adding the `hex` crate as a dependency of types.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
