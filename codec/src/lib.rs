//! SS58 address codec.
//!
//! - **Prefix codec**: 14-bit network identifier packed into one or two bytes
//! - **Checksum**: first two bytes of Blake2b-512 over `SS58PRE` and the body
//! - **Encode / decode** between [`Address`] and its base58 string
//!
//! Every call is self-contained: no shared buffers, safe to use from any thread.

pub mod address;
pub mod checksum;
pub mod prefix;

pub use address::{decode, encode, try_encode, MIN_ENCODED_LEN};
pub use checksum::{checksum, ss58_hash, CHECKSUM_LEN, HASH_CONTEXT};
pub use prefix::{pack_prefix, unpack_prefix, SIMPLE_PREFIX_LIMIT};
pub use ss58_types::{Address, InvalidReason, NetworkPrefix, Ss58Error};
