//! Well-known SS58 network prefixes.

use serde::{Deserialize, Serialize};

/// A handful of registered SS58 prefixes.
///
/// Informational only: any prefix below 16384 is a valid address prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkPrefix {
    /// Polkadot relay chain.
    Polkadot,
    /// Kusama relay chain.
    Kusama,
    /// Generic Substrate, used by development chains.
    Substrate,
}

impl NetworkPrefix {
    /// Numeric prefix carried in the address.
    pub fn prefix(&self) -> u16 {
        match self {
            Self::Polkadot => 0,
            Self::Kusama => 2,
            Self::Substrate => 42,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Polkadot => "polkadot",
            Self::Kusama => "kusama",
            Self::Substrate => "substrate",
        }
    }

    pub fn from_prefix(prefix: u16) -> Option<Self> {
        match prefix {
            0 => Some(Self::Polkadot),
            2 => Some(Self::Kusama),
            42 => Some(Self::Substrate),
            _ => None,
        }
    }
}

impl From<NetworkPrefix> for u16 {
    fn from(network: NetworkPrefix) -> Self {
        network.prefix()
    }
}
