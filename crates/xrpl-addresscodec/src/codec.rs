//! Classic address encoding (base58-Ripple with checksum).
//!
//! A classic address is a 20-byte account id wrapped with a type prefix and a
//! 4-byte double-SHA-256 checksum, then base58-encoded with the Ripple
//! alphabet. Account ids always encode to a string starting with 'r'.

use sha2::{Digest, Sha256};

use crate::error::AddressError;

// Type prefix for account ids ('r' prefix when encoded)
const PREFIX_ACCOUNT_ID: u8 = 0x00;

/// Length of a raw account id in bytes.
pub const ACCOUNT_ID_LEN: usize = 20;

const CHECKSUM_LEN: usize = 4;

/// Encode an account id as a classic address (r...).
pub fn encode_account_id(account_id: &[u8; ACCOUNT_ID_LEN]) -> String {
    encode_check(PREFIX_ACCOUNT_ID, account_id)
}

/// Decode a classic address (r...) into the raw account id.
pub fn decode_account_id(s: &str) -> Result<[u8; ACCOUNT_ID_LEN], AddressError> {
    decode_check(PREFIX_ACCOUNT_ID, s)
}

/// Whether a string is a well-formed classic address.
pub fn is_valid_classic_address(s: &str) -> bool {
    decode_account_id(s).is_ok()
}

fn encode_check(prefix: u8, data: &[u8]) -> String {
    let mut payload = vec![prefix];
    payload.extend_from_slice(data);

    let checksum = double_sha256_checksum(&payload);
    payload.extend_from_slice(&checksum);

    bs58::encode(payload)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .into_string()
}

fn decode_check(
    expected_prefix: u8,
    s: &str,
) -> Result<[u8; ACCOUNT_ID_LEN], AddressError> {
    let decoded = bs58::decode(s)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .into_vec()?;

    // 1 prefix byte + 20 data bytes + 4 checksum bytes
    let expected_len = 1 + ACCOUNT_ID_LEN + CHECKSUM_LEN;
    if decoded.len() != expected_len {
        return Err(AddressError::InvalidLength {
            len: decoded.len(),
            expected: expected_len,
        });
    }

    let prefix = decoded[0];
    if prefix != expected_prefix {
        return Err(AddressError::InvalidPrefix {
            prefix,
            expected: expected_prefix,
        });
    }

    let checksum_pos = decoded.len() - CHECKSUM_LEN;
    let computed = double_sha256_checksum(&decoded[..checksum_pos]);
    if decoded[checksum_pos..] != computed {
        return Err(AddressError::ChecksumMismatch);
    }

    let mut account_id = [0u8; ACCOUNT_ID_LEN];
    account_id.copy_from_slice(&decoded[1..1 + ACCOUNT_ID_LEN]);
    Ok(account_id)
}

/// First four bytes of SHA-256(SHA-256(payload)).
fn double_sha256_checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = Sha256::digest(payload);
    let second = Sha256::digest(first);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&second[..CHECKSUM_LEN]);
    checksum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_roundtrip() {
        let account_id = [42u8; ACCOUNT_ID_LEN];
        let encoded = encode_account_id(&account_id);
        assert!(encoded.starts_with('r'));
        let decoded = decode_account_id(&encoded).unwrap();
        assert_eq!(account_id, decoded);
    }

    #[test]
    fn test_zero_account_id() {
        // ACCOUNT_ZERO is a well-known address
        let encoded = encode_account_id(&[0u8; ACCOUNT_ID_LEN]);
        assert_eq!(encoded, "rrrrrrrrrrrrrrrrrrrrrhoLvTp");
        let decoded = decode_account_id(&encoded).unwrap();
        assert_eq!(decoded, [0u8; ACCOUNT_ID_LEN]);
    }

    #[test]
    fn test_known_addresses_validate() {
        // Real mainnet addresses
        let addresses = [
            "r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgQ",
            "rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW",
            "rUpy3eEg8rqjqfUoLeBnZkscbKbFsKXC3v",
            "raKEEVSGnKSD9Zyvxu4z6Pqpm4ABH8FS6n",
            "ra5nK24KXen9AHvsdFTKHSANinZseWnPcX",
            "rWYkbWkCeg8dP6rXALnjgZSjjLyih5NXm",
            "rPT1Sjq2YGrBMTttX4GZHjKu9dyfzbpAYe",
            "rsUiUMpnrgxQp24dJYZDhmV4bE3aBtQyt8",
            "rEhxGqkqPPSxQ3P25J66ft5TwpzV14k2de",
            "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn",
        ];
        for addr in addresses {
            assert!(is_valid_classic_address(addr), "{addr} should validate");
        }
    }

    #[test]
    fn test_invalid_checksum() {
        let encoded = encode_account_id(&[7u8; ACCOUNT_ID_LEN]);
        // Corrupt the last character
        let mut chars: Vec<char> = encoded.chars().collect();
        let last = chars.len() - 1;
        chars[last] = if chars[last] == 'r' { 'p' } else { 'r' };
        let corrupted: String = chars.into_iter().collect();
        assert!(decode_account_id(&corrupted).is_err());
        assert!(!is_valid_classic_address(&corrupted));
    }

    #[test]
    fn test_truncated_input() {
        let encoded = encode_account_id(&[7u8; ACCOUNT_ID_LEN]);
        let truncated = &encoded[..encoded.len() - 4];
        assert!(matches!(
            decode_account_id(truncated),
            Err(AddressError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_excluded_characters() {
        // '0', 'O', 'I' and 'l' are not in the Ripple alphabet
        for c in ['0', 'O', 'I', 'l'] {
            let bad = format!("r9LqNeG6qHxjeUocjvVki2XR35weJ9mZg{c}");
            assert!(!is_valid_classic_address(&bad));
        }
    }

    #[test]
    fn test_wrong_prefix() {
        // Re-encode an account id under a non-account type prefix
        let encoded = encode_check(0x21, &[7u8; ACCOUNT_ID_LEN]);
        assert!(matches!(
            decode_account_id(&encoded),
            Err(AddressError::InvalidPrefix { .. })
        ));
    }

    #[test]
    fn test_not_base58() {
        assert!(!is_valid_classic_address(""));
        assert!(!is_valid_classic_address("not an address"));
    }
}
