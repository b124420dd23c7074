//! Blake2b-512 checksum over the `SS58PRE` context.

use blake2::{Blake2b512, Digest};

/// Context bytes hashed ahead of the address body.
pub const HASH_CONTEXT: &[u8; 7] = b"SS58PRE";

/// Number of digest bytes stored at the end of an address.
pub const CHECKSUM_LEN: usize = 2;

/// Compute Blake2b-512(`SS58PRE` || body).
///
/// A fresh hasher is used per call and the digest is returned by value.
pub fn ss58_hash(body: &[u8]) -> [u8; 64] {
    let mut hasher = Blake2b512::new();
    hasher.update(HASH_CONTEXT);
    hasher.update(body);
    let result = hasher.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

/// Checksum for an address body (prefix and payload, without the checksum).
pub fn checksum(body: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = ss58_hash(body);
    [hash[0], hash[1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(ss58_hash(b"\x2a\x01\x02"), ss58_hash(b"\x2a\x01\x02"));
    }

    #[test]
    fn context_is_part_of_the_hash() {
        let plain = {
            let mut hasher = Blake2b512::new();
            hasher.update([42u8; 33]);
            hasher.finalize()
        };
        assert_ne!(ss58_hash(&[42u8; 33])[..], plain[..]);
    }

    #[test]
    fn incremental_feed_matches_concatenation() {
        let mut joined = HASH_CONTEXT.to_vec();
        joined.extend_from_slice(b"body bytes");
        let oneshot = Blake2b512::digest(&joined);
        assert_eq!(ss58_hash(b"body bytes")[..], oneshot[..]);
    }

    #[test]
    fn checksum_is_digest_prefix() {
        let body = [0u8, 1, 2, 3];
        let hash = ss58_hash(&body);
        assert_eq!(checksum(&body), [hash[0], hash[1]]);
    }

    #[test]
    fn empty_body_hashes() {
        assert_ne!(ss58_hash(b""), [0u8; 64]);
    }
}
