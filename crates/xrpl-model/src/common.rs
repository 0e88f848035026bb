//! Common fields shared by every transaction type.
//!
//! These are the base fields (`Account`, `Fee`, `Sequence`, plus optional
//! signing metadata) that every transaction carries. The generic checks here
//! run before any type-specific rule and contribute to the same aggregate
//! failure.

use serde_json::{Map, Value};
use xrpl_addresscodec::is_valid_classic_address;

use crate::error::ValidationError;

/// The generic transaction base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonFields {
    /// The account submitting the transaction.
    pub account: String,
    /// Transaction fee as a decimal drops string.
    pub fee: String,
    /// Account sequence number.
    pub sequence: u32,
    /// Transaction flags.
    pub flags: Option<u32>,
    /// Last ledger sequence at which the transaction is valid.
    pub last_ledger_sequence: Option<u32>,
    /// Hex public key of the signer.
    pub signing_pub_key: Option<String>,
    /// Hex signature over the transaction.
    pub txn_signature: Option<String>,
}

impl CommonFields {
    /// Create common fields with the three required values.
    pub fn new(account: impl Into<String>, fee: impl Into<String>, sequence: u32) -> Self {
        Self {
            account: account.into(),
            fee: fee.into(),
            sequence,
            flags: None,
            last_ledger_sequence: None,
            signing_pub_key: None,
            txn_signature: None,
        }
    }

    /// Generic checks on already-typed fields.
    pub(crate) fn check(&self, errors: &mut Vec<ValidationError>) {
        if !is_valid_classic_address(&self.account) {
            errors.push(ValidationError::InvalidAccount {
                account: self.account.clone(),
            });
        }
        if !is_valid_fee(&self.fee) {
            errors.push(ValidationError::InvalidFee {
                fee: self.fee.clone(),
            });
        }
    }

    /// Decode the common fields from a wire mapping.
    ///
    /// Defects are pushed onto `errors`; missing or mistyped fields leave a
    /// placeholder so decoding can continue and the aggregate stays maximal.
    /// The caller never exposes the value when `errors` is non-empty.
    pub(crate) fn from_value(map: &Map<String, Value>, errors: &mut Vec<ValidationError>) -> Self {
        let account = match map.get("Account") {
            Some(Value::String(s)) => {
                if !is_valid_classic_address(s) {
                    errors.push(ValidationError::InvalidAccount { account: s.clone() });
                }
                s.clone()
            }
            Some(_) => {
                errors.push(ValidationError::InvalidFieldType {
                    field: "Account".to_string(),
                    expected: "a string",
                });
                String::new()
            }
            None => {
                errors.push(ValidationError::MissingRequiredField {
                    field: "Account".to_string(),
                });
                String::new()
            }
        };

        let fee = match map.get("Fee") {
            Some(Value::String(s)) => {
                if !is_valid_fee(s) {
                    errors.push(ValidationError::InvalidFee { fee: s.clone() });
                }
                s.clone()
            }
            Some(_) => {
                errors.push(ValidationError::InvalidFieldType {
                    field: "Fee".to_string(),
                    expected: "a string",
                });
                String::new()
            }
            None => {
                errors.push(ValidationError::MissingRequiredField {
                    field: "Fee".to_string(),
                });
                String::new()
            }
        };

        let sequence = match map.get("Sequence") {
            Some(v) => match v.as_u64().filter(|&n| n <= u32::MAX as u64) {
                Some(n) => n as u32,
                None => {
                    errors.push(ValidationError::InvalidFieldType {
                        field: "Sequence".to_string(),
                        expected: "an unsigned 32-bit integer",
                    });
                    0
                }
            },
            None => {
                errors.push(ValidationError::MissingRequiredField {
                    field: "Sequence".to_string(),
                });
                0
            }
        };

        Self {
            account,
            fee,
            sequence,
            flags: optional_u32(map, "Flags", errors),
            last_ledger_sequence: optional_u32(map, "LastLedgerSequence", errors),
            signing_pub_key: optional_string(map, "SigningPubKey", errors),
            txn_signature: optional_string(map, "TxnSignature", errors),
        }
    }

    /// Write the common fields into a wire mapping.
    pub(crate) fn write_value(&self, map: &mut Map<String, Value>) {
        map.insert("Account".to_string(), Value::from(self.account.clone()));
        map.insert("Fee".to_string(), Value::from(self.fee.clone()));
        map.insert("Sequence".to_string(), Value::from(self.sequence));
        if let Some(flags) = self.flags {
            map.insert("Flags".to_string(), Value::from(flags));
        }
        if let Some(lls) = self.last_ledger_sequence {
            map.insert("LastLedgerSequence".to_string(), Value::from(lls));
        }
        if let Some(ref key) = self.signing_pub_key {
            map.insert("SigningPubKey".to_string(), Value::from(key.clone()));
        }
        if let Some(ref sig) = self.txn_signature {
            map.insert("TxnSignature".to_string(), Value::from(sig.clone()));
        }
    }
}

fn optional_u32(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<u32> {
    match map.get(field) {
        None => None,
        Some(v) => match v.as_u64().filter(|&n| n <= u32::MAX as u64) {
            Some(n) => Some(n as u32),
            None => {
                errors.push(ValidationError::InvalidFieldType {
                    field: field.to_string(),
                    expected: "an unsigned 32-bit integer",
                });
                None
            }
        },
    }
}

fn optional_string(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match map.get(field) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(ValidationError::InvalidFieldType {
                field: field.to_string(),
                expected: "a string",
            });
            None
        }
    }
}

/// Whether a fee string is a well-formed non-negative decimal.
///
/// At least one digit, at most one decimal point, nothing else.
fn is_valid_fee(fee: &str) -> bool {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for c in fee.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}
