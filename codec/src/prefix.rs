//! Network prefix packing.
//!
//! Prefixes below 64 occupy a single byte. Prefixes in `64..16384` take two
//! bytes: the first is tagged `0b01` in its top bits and carries bits 2..8 of
//! the prefix, the second carries bits 8..14 in its low six bits and bits 0..2
//! in its top two. Leading bytes of 128 and above are not assigned.

use ss58_types::{Address, InvalidReason};

/// Largest prefix that fits the single-byte form.
pub const SIMPLE_PREFIX_LIMIT: u16 = 64;

/// Leading bytes at or above this value belong to no defined tier.
const RESERVED_TIER: u8 = 0b1000_0000;

/// Pack `prefix` into its leading bytes.
///
/// Returns the bytes and how many of them are used (1 or 2).
///
/// # Panics
/// Panics if `prefix` is not below [`Address::PREFIX_LIMIT`].
pub fn pack_prefix(prefix: u16) -> ([u8; 2], usize) {
    assert!(prefix < Address::PREFIX_LIMIT, "invalid prefix: {prefix}");
    if prefix < SIMPLE_PREFIX_LIMIT {
        return ([prefix as u8, 0], 1);
    }
    let first = (((prefix & 0b1111_1100) >> 2) as u8) | 0b0100_0000;
    let second = ((prefix >> 8) as u8) | (((prefix & 0b11) as u8) << 6);
    ([first, second], 2)
}

/// Unpack the prefix at the start of `buf`.
///
/// Returns the prefix and the offset of the first payload byte.
pub fn unpack_prefix(buf: &[u8]) -> Result<(u16, usize), InvalidReason> {
    let first = *buf.first().ok_or(InvalidReason::TooShort { len: 0 })?;
    if first < SIMPLE_PREFIX_LIMIT as u8 {
        return Ok((first as u16, 1));
    }
    if first >= RESERVED_TIER {
        return Err(InvalidReason::UnsupportedPrefixTier(first));
    }
    let second = *buf.get(1).ok_or(InvalidReason::TooShort { len: buf.len() })?;
    let lower = ((first << 2) | (second >> 6)) as u16;
    let upper = (second & 0b0011_1111) as u16;
    Ok((lower | (upper << 8), 2))
}
