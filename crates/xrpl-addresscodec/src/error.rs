//! Error types for address encoding and decoding.

use thiserror::Error;

/// Errors from decoding a classic address string.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The string is not valid base58 in the Ripple alphabet.
    #[error("invalid base58: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),

    /// The decoded payload has the wrong length.
    #[error("decoded length {len} != {expected}")]
    InvalidLength { len: usize, expected: usize },

    /// The decoded payload carries the wrong type prefix.
    #[error("type prefix {prefix:#04x} != {expected:#04x}")]
    InvalidPrefix { prefix: u8, expected: u8 },

    /// The trailing checksum does not match the payload.
    #[error("checksum mismatch")]
    ChecksumMismatch,
}
