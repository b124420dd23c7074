//! SS58 address encoding and decoding.
//!
//! Wire format: `base58(prefix(1|2) || payload(N) || checksum(2))`, where the
//! checksum is the first two bytes of Blake2b-512(`SS58PRE` || prefix || payload).

use ss58_types::{Address, InvalidReason, Ss58Error};

use crate::checksum::{checksum, CHECKSUM_LEN};
use crate::prefix::{pack_prefix, unpack_prefix};

/// Shortest decodable buffer: 1 prefix byte, empty payload, checksum.
pub const MIN_ENCODED_LEN: usize = 1 + CHECKSUM_LEN;

/// Decode an SS58 address string.
///
/// Fails when the string is not base58, decodes to fewer than three bytes,
/// starts with an unassigned prefix tier, or carries a wrong checksum.
pub fn decode(input: &str) -> Result<Address, Ss58Error> {
    let buf = bs58::decode(input)
        .into_vec()
        .map_err(|_| reject(input, InvalidReason::InvalidBase58))?;

    if buf.len() < MIN_ENCODED_LEN {
        return Err(reject(input, InvalidReason::TooShort { len: buf.len() }));
    }

    let (prefix, offset) = unpack_prefix(&buf).map_err(|reason| reject(input, reason))?;

    let body_len = buf.len() - CHECKSUM_LEN;
    // A two-byte prefix in a three-byte buffer would overlap the checksum.
    if offset > body_len {
        return Err(reject(input, InvalidReason::TooShort { len: buf.len() }));
    }

    let (body, stored) = buf.split_at(body_len);
    if checksum(body) != stored {
        return Err(reject(input, InvalidReason::ChecksumMismatch));
    }

    tracing::trace!(prefix, len = body_len - offset, "decoded ss58 address");
    Ok(Address {
        prefix,
        bytes: body[offset..].to_vec(),
    })
}

/// Encode an address into its canonical SS58 string.
///
/// # Panics
/// Panics if `address.prefix` is not below [`Address::PREFIX_LIMIT`].
pub fn encode(address: &Address) -> String {
    let (prefix_bytes, offset) = pack_prefix(address.prefix);

    let total = offset + address.bytes.len() + CHECKSUM_LEN;
    let mut buf = Vec::with_capacity(total);
    buf.extend_from_slice(&prefix_bytes[..offset]);
    buf.extend_from_slice(&address.bytes);
    let sum = checksum(&buf);
    buf.extend_from_slice(&sum);

    bs58::encode(buf).into_string()
}

/// Encode an address, returning an error instead of panicking on a bad prefix.
pub fn try_encode(address: &Address) -> Result<String, Ss58Error> {
    if !address.has_valid_prefix() {
        return Err(Ss58Error::PrefixOutOfRange(address.prefix));
    }
    Ok(encode(address))
}

fn reject(input: &str, reason: InvalidReason) -> Ss58Error {
    tracing::debug!(%reason, "rejected ss58 address");
    Ss58Error::invalid(input, reason)
}
