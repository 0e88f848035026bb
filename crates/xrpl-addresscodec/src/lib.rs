//! Classic address codec for rs-xrpl.
//!
//! Encodes and decodes the string form of XRP Ledger account ids: base58 with
//! the Ripple alphabet over a type-prefixed payload, protected by a 4-byte
//! double-SHA-256 checksum. The transaction model crates use
//! [`is_valid_classic_address`] as their address-format predicate.

mod codec;
mod error;

pub use codec::{
    decode_account_id, encode_account_id, is_valid_classic_address, ACCOUNT_ID_LEN,
};
pub use error::AddressError;
