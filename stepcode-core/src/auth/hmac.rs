//! HMAC-SHA1 (RFC 2104) over the `sha1` digest
//!
//! Block size: 64 bytes for SHA-1
//! Inner pad (ipad): 0x36
//! Outer pad (opad): 0x5C

use sha1::{Digest, Sha1};

/// Length of a SHA-1 digest in bytes
pub const DIGEST_LEN: usize = 20;

const BLOCK_SIZE: usize = 64;
const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// Compute HMAC-SHA1(key, message)
///
/// Keys longer than the block size are hashed first; shorter keys are
/// zero-padded to the block size.
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; DIGEST_LEN] {
    let mut key_block = [0u8; BLOCK_SIZE];
    if key.len() > BLOCK_SIZE {
        key_block[..DIGEST_LEN].copy_from_slice(&Sha1::digest(key));
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    let ipad_key = key_block.map(|b| b ^ IPAD);
    let opad_key = key_block.map(|b| b ^ OPAD);

    let inner_hash = Sha1::new()
        .chain_update(ipad_key)
        .chain_update(message)
        .finalize();

    let outer_hash = Sha1::new()
        .chain_update(opad_key)
        .chain_update(inner_hash)
        .finalize();

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&outer_hash);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_sha1_rfc2202_test_case_1() {
        // key = 0x0b * 20, data = "Hi There"
        let result = hmac_sha1(&[0x0b; 20], b"Hi There");

        let expected = [
            0xb6, 0x17, 0x31, 0x86, 0x55, 0x05, 0x72, 0x64,
            0xe2, 0x8b, 0xc0, 0xb6, 0xfb, 0x37, 0x8c, 0x8e,
            0xf1, 0x46, 0xbe, 0x00,
        ];

        assert_eq!(result, expected);
    }

    #[test]
    fn test_hmac_sha1_rfc2202_test_case_2() {
        let result = hmac_sha1(b"Jefe", b"what do ya want for nothing?");

        let expected = [
            0xef, 0xfc, 0xdf, 0x6a, 0xe5, 0xeb, 0x2f, 0xa2,
            0xd2, 0x74, 0x16, 0xd5, 0xf1, 0x84, 0xdf, 0x9c,
            0x25, 0x9a, 0x7c, 0x79,
        ];

        assert_eq!(result, expected);
    }

    #[test]
    fn test_hmac_sha1_long_key() {
        // RFC 2202 test case 6: 80-byte key is hashed before use
        let result = hmac_sha1(
            &[0xaa; 80],
            b"Test Using Larger Than Block-Size Key - Hash Key First",
        );

        let expected = [
            0xaa, 0x4a, 0xe5, 0xe1, 0x52, 0x72, 0xd0, 0x0e,
            0x95, 0x70, 0x56, 0x37, 0xce, 0x8a, 0x3b, 0x55,
            0xed, 0x40, 0x21, 0x12,
        ];

        assert_eq!(result, expected);
    }

    #[test]
    fn test_hmac_sha1_rfc4226_counter_zero() {
        // RFC 4226 Appendix D, count = 0
        let result = hmac_sha1(b"12345678901234567890", &0u64.to_be_bytes());

        let expected = [
            0xcc, 0x93, 0xcf, 0x18, 0x50, 0x8d, 0x94, 0x93,
            0x4c, 0x64, 0xb6, 0x5d, 0x8b, 0xa7, 0x66, 0x7f,
            0xb7, 0xcd, 0xe4, 0xb0,
        ];

        assert_eq!(result, expected);
    }
}
