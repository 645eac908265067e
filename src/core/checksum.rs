//! Double SHA-256 and the 4-byte wire checksum derived from it.
//!
//! The checksum is the first four bytes of SHA-256(SHA-256(data)) read
//! little-endian. It detects corruption on the wire; it is not a secret-key
//! authenticator.

use sha2::{Digest, Sha256};

/// SHA-256 applied twice, the protocol's standard identity hash.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// First four bytes of the double SHA-256 of `data`, interpreted
/// little-endian.
///
/// # Examples
/// ```
/// use bitcoin_wire::core::checksum::checksum;
///
/// // Empty payload, as carried by a verack message.
/// assert_eq!(checksum(&[]), 0xE2E0_F65D);
/// ```
pub fn checksum(data: &[u8]) -> u32 {
    let digest = double_sha256(data);
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_known_value() {
        // The canonical verack checksum bytes are 5D F6 E0 E2 on the wire.
        assert_eq!(checksum(&[]), 0xE2E0_F65D);
        assert_eq!(checksum(&[]).to_le_bytes(), [0x5D, 0xF6, 0xE0, 0xE2]);
    }

    #[test]
    fn deterministic() {
        let data = b"framing layer";
        assert_eq!(checksum(data), checksum(data));
        assert_eq!(double_sha256(data), double_sha256(data));
    }

    #[test]
    fn single_bit_flip_changes_checksum() {
        let data = vec![0x42u8; 128];
        let original = checksum(&data);

        for index in [0usize, 17, 127] {
            for bit in 0..8 {
                let mut corrupted = data.clone();
                corrupted[index] ^= 1 << bit;
                assert_ne!(checksum(&corrupted), original, "byte {index} bit {bit}");
            }
        }
    }

    #[test]
    fn checksum_matches_digest_prefix() {
        let data = b"prefix check";
        let digest = double_sha256(data);
        let expected = u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]);

        assert_eq!(checksum(data), expected);
    }
}
