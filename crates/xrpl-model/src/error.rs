//! Validation errors for transaction models.
//!
//! Every rule a candidate transaction can violate has its own
//! [`ValidationError`] kind. Construction collects all violations found in
//! one pass and surfaces them together as a single
//! [`ModelValidationError`], so a caller can fix several problems from one
//! failed attempt.

use std::fmt;

/// One defect found while checking the shape of a raw signer entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDefect {
    /// The entry is not a JSON object.
    NotAnObject,
    /// The wrapper key is not exactly `SignerEntry` (casing matters).
    WrongWrapperKey { key: String },
    /// The wrapper object does not have exactly one key.
    WrapperKeyCount { count: usize },
    /// The value under `SignerEntry` is not a JSON object.
    InnerNotAnObject,
    /// A required inner field is missing.
    MissingField { field: String },
    /// An inner field other than `Account` and `SignerWeight` is present.
    UnexpectedField { field: String },
    /// `Account` is not a JSON string.
    AccountNotAString,
    /// `Account` is not a well-formed classic address.
    InvalidAccount { account: String },
    /// `SignerWeight` is not a JSON integer.
    WeightNotAnInteger,
    /// `SignerWeight` is outside 1..=65535.
    WeightOutOfRange { weight: i64 },
}

impl fmt::Display for EntryDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "entry is not an object"),
            Self::WrongWrapperKey { key } => {
                write!(f, "wrapper key {:?} != \"SignerEntry\"", key)
            }
            Self::WrapperKeyCount { count } => {
                write!(f, "wrapper has {} keys, expected exactly 1", count)
            }
            Self::InnerNotAnObject => write!(f, "SignerEntry value is not an object"),
            Self::MissingField { field } => write!(f, "missing field {:?}", field),
            Self::UnexpectedField { field } => write!(f, "unexpected field {:?}", field),
            Self::AccountNotAString => write!(f, "Account is not a string"),
            Self::InvalidAccount { account } => {
                write!(f, "invalid account address {:?}", account)
            }
            Self::WeightNotAnInteger => write!(f, "SignerWeight is not an integer"),
            Self::WeightOutOfRange { weight } => {
                write!(f, "SignerWeight {} outside 1..=65535", weight)
            }
        }
    }
}

/// One violated validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Quorum is negative, not an integer, or above the u32 range.
    InvalidQuorumRange { value: String },
    /// Quorum is zero (delete mode) but signer entries were supplied.
    DeleteModeHasEntries { count: usize },
    /// Quorum is non-zero but signer entries are absent or empty.
    MissingSignerEntries,
    /// More signer entries than the protocol allows.
    TooManySignerEntries { count: usize, max: usize },
    /// A signer entry failed the shape check.
    MalformedEntry { index: usize, defect: EntryDefect },
    /// Two or more entries name the same account.
    DuplicateSignerAccount { account: String },
    /// An entry names the account that owns the signer list.
    SelfReferencingSigner { account: String },
    /// Quorum can never be met by the supplied weights.
    QuorumExceedsWeightSum { quorum: u32, weight_sum: u64 },
    /// A required wire field is missing.
    MissingRequiredField { field: String },
    /// A wire field has the wrong JSON type.
    InvalidFieldType { field: String, expected: &'static str },
    /// The transaction's own account is not a well-formed classic address.
    InvalidAccount { account: String },
    /// The fee is not a well-formed non-negative decimal string.
    InvalidFee { fee: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuorumRange { value } => {
                write!(f, "SignerQuorum {} outside 0..=4294967295", value)
            }
            Self::DeleteModeHasEntries { count } => {
                write!(f, "SignerQuorum is 0 (delete) but {} signer entries supplied", count)
            }
            Self::MissingSignerEntries => {
                write!(f, "SignerQuorum is non-zero but no signer entries supplied")
            }
            Self::TooManySignerEntries { count, max } => {
                write!(f, "{} signer entries supplied, at most {} allowed", count, max)
            }
            Self::MalformedEntry { index, defect } => {
                write!(f, "malformed signer entry at index {}: {}", index, defect)
            }
            Self::DuplicateSignerAccount { account } => {
                write!(f, "duplicate signer account {}", account)
            }
            Self::SelfReferencingSigner { account } => {
                write!(f, "signer entry names the owning account {}", account)
            }
            Self::QuorumExceedsWeightSum { quorum, weight_sum } => {
                write!(f, "SignerQuorum {} exceeds total signer weight {}", quorum, weight_sum)
            }
            Self::MissingRequiredField { field } => {
                write!(f, "missing required field {:?}", field)
            }
            Self::InvalidFieldType { field, expected } => {
                write!(f, "field {:?} is not {}", field, expected)
            }
            Self::InvalidAccount { account } => {
                write!(f, "invalid account address {:?}", account)
            }
            Self::InvalidFee { fee } => write!(f, "invalid fee {:?}", fee),
        }
    }
}

/// Aggregate failure from constructing or re-validating a transaction model.
///
/// Carries every violation found in one validation pass. A candidate that
/// produces this error never exists as a usable model value.
#[derive(Debug, Clone)]
pub struct ModelValidationError {
    violations: Vec<ValidationError>,
}

impl ModelValidationError {
    pub(crate) fn new(violations: Vec<ValidationError>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// The violations, in the order the checks found them.
    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<ValidationError> {
        self.violations
    }
}

impl fmt::Display for ModelValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transaction validation failed ({} violations): ", self.violations.len())?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ModelValidationError {}
