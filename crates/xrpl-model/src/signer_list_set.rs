//! The SignerListSet transaction model.
//!
//! A SignerListSet transaction reconfigures an account's multi-signing
//! authorization: it either installs a list of up to eight weighted signers
//! together with an approval quorum, or deletes the signer list entirely
//! (quorum zero, no entries). The ledger rejects a malformed transaction
//! deterministically, so every protocol rule is mirrored here and enforced
//! at construction; a candidate that violates any rule never exists as a
//! usable value.

use std::collections::HashSet;

use serde_json::{Map, Value};
use xrpl_addresscodec::is_valid_classic_address;

use crate::common::CommonFields;
use crate::error::{EntryDefect, ModelValidationError, ValidationError};
use crate::limits::ProtocolLimits;

/// One designated signer: an account and its signing weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerEntry {
    account: String,
    weight: u16,
}

impl SignerEntry {
    /// Create a signer entry.
    ///
    /// Account validity and the non-zero weight bound are enforced when the
    /// entry is placed into a [`SignerListSet`].
    pub fn new(account: impl Into<String>, weight: u16) -> Self {
        Self {
            account: account.into(),
            weight,
        }
    }

    /// The signer's account address.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// The signer's weight toward quorum satisfaction.
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// Shape-check one raw element of the `SignerEntries` array.
    ///
    /// The element must be a one-key mapping wrapped under exactly
    /// `SignerEntry`, containing exactly `Account` and `SignerWeight`
    /// (case-sensitive, no extras). Every defect of the entry is reported,
    /// each as its own `MalformedEntry` with the entry's index.
    fn from_value(index: usize, raw: &Value, errors: &mut Vec<ValidationError>) -> Option<Self> {
        let mut defects = Vec::new();

        let inner_val = match raw.as_object() {
            None => {
                errors.push(ValidationError::MalformedEntry {
                    index,
                    defect: EntryDefect::NotAnObject,
                });
                return None;
            }
            Some(wrapper) => {
                if wrapper.len() == 1 {
                    match wrapper.iter().next() {
                        Some((key, value)) if key == "SignerEntry" => Some(value),
                        Some((key, _)) => {
                            defects.push(EntryDefect::WrongWrapperKey { key: key.clone() });
                            None
                        }
                        None => None,
                    }
                } else {
                    defects.push(EntryDefect::WrapperKeyCount {
                        count: wrapper.len(),
                    });
                    // still inspect the inner mapping if it is present
                    wrapper.get("SignerEntry")
                }
            }
        };

        let mut account = None;
        let mut weight = None;

        if let Some(inner_val) = inner_val {
            match inner_val.as_object() {
                None => defects.push(EntryDefect::InnerNotAnObject),
                Some(inner) => {
                    for key in inner.keys() {
                        if key != "Account" && key != "SignerWeight" {
                            defects.push(EntryDefect::UnexpectedField { field: key.clone() });
                        }
                    }
                    match inner.get("Account") {
                        None => defects.push(EntryDefect::MissingField {
                            field: "Account".to_string(),
                        }),
                        Some(Value::String(s)) => {
                            if is_valid_classic_address(s) {
                                account = Some(s.clone());
                            } else {
                                defects.push(EntryDefect::InvalidAccount { account: s.clone() });
                            }
                        }
                        Some(_) => defects.push(EntryDefect::AccountNotAString),
                    }
                    match inner.get("SignerWeight") {
                        None => defects.push(EntryDefect::MissingField {
                            field: "SignerWeight".to_string(),
                        }),
                        Some(v) => match v.as_i64() {
                            Some(w) if (1..=i64::from(u16::MAX)).contains(&w) => {
                                weight = Some(w as u16);
                            }
                            Some(w) => defects.push(EntryDefect::WeightOutOfRange { weight: w }),
                            None => defects.push(EntryDefect::WeightNotAnInteger),
                        },
                    }
                }
            }
        }

        if defects.is_empty() {
            // no defects implies both fields parsed
            match (account, weight) {
                (Some(account), Some(weight)) => Some(Self { account, weight }),
                _ => None,
            }
        } else {
            for defect in defects {
                errors.push(ValidationError::MalformedEntry { index, defect });
            }
            None
        }
    }

    /// The canonical wire mapping for this entry.
    fn to_value(&self) -> Value {
        let mut inner = Map::new();
        inner.insert("Account".to_string(), Value::from(self.account.clone()));
        inner.insert("SignerWeight".to_string(), Value::from(self.weight));
        let mut wrapper = Map::new();
        wrapper.insert("SignerEntry".to_string(), Value::Object(inner));
        Value::Object(wrapper)
    }
}

/// A validated SignerListSet transaction.
///
/// Constructed through [`SignerListSet::new`] (typed fields) or
/// [`SignerListSet::from_value`] (wire mapping); both run the full rule set
/// and fail atomically with every violation found. The value is immutable —
/// a field change means building a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerListSet {
    common: CommonFields,
    signer_quorum: u32,
    // normalized: None or non-empty
    signer_entries: Option<Vec<SignerEntry>>,
}

impl SignerListSet {
    /// Wire value of the `TransactionType` field.
    pub const TRANSACTION_TYPE: &'static str = "SignerListSet";

    /// Build from typed fields under the default protocol limits.
    pub fn new(
        common: CommonFields,
        signer_quorum: u32,
        signer_entries: Option<Vec<SignerEntry>>,
    ) -> Result<Self, ModelValidationError> {
        Self::new_with_limits(common, signer_quorum, signer_entries, &ProtocolLimits::default())
    }

    /// Build from typed fields under explicit protocol limits.
    ///
    /// The quorum range and the entry wrapper shape hold by type here;
    /// account validity and the weight bound are still enforced, reported as
    /// `MalformedEntry` with the entry's index.
    pub fn new_with_limits(
        common: CommonFields,
        signer_quorum: u32,
        signer_entries: Option<Vec<SignerEntry>>,
        limits: &ProtocolLimits,
    ) -> Result<Self, ModelValidationError> {
        // empty and absent are the same semantic state
        let signer_entries = signer_entries.filter(|entries| !entries.is_empty());

        let mut errors = Vec::new();
        common.check(&mut errors);

        let entries = signer_entries.as_deref().unwrap_or(&[]);
        check_signer_list(
            &common.account,
            Some(signer_quorum),
            entries,
            entries.len(),
            check_typed_entries(entries),
            limits,
            &mut errors,
        );

        if errors.is_empty() {
            Ok(Self {
                common,
                signer_quorum,
                signer_entries,
            })
        } else {
            Err(ModelValidationError::new(errors))
        }
    }

    /// Build from a wire mapping under the default protocol limits.
    pub fn from_value(value: &Value) -> Result<Self, ModelValidationError> {
        Self::from_value_with_limits(value, &ProtocolLimits::default())
    }

    /// Build from a wire mapping under explicit protocol limits.
    ///
    /// This is the full untyped path: the generic field checks, the quorum
    /// range check, and the per-entry shape checks all run here, and every
    /// violation found lands in one aggregate failure.
    pub fn from_value_with_limits(
        value: &Value,
        limits: &ProtocolLimits,
    ) -> Result<Self, ModelValidationError> {
        let Some(map) = value.as_object() else {
            return Err(ModelValidationError::new(vec![
                ValidationError::InvalidFieldType {
                    field: "transaction".to_string(),
                    expected: "an object",
                },
            ]));
        };

        let mut errors = Vec::new();

        if let Some(tt) = map.get("TransactionType") {
            if tt.as_str() != Some(Self::TRANSACTION_TYPE) {
                errors.push(ValidationError::InvalidFieldType {
                    field: "TransactionType".to_string(),
                    expected: "\"SignerListSet\"",
                });
            }
        }

        let common = CommonFields::from_value(map, &mut errors);

        // Quorum must be an integer within u32. When the range check fails
        // the quorum-dependent rules are skipped, but the structural entry
        // checks below still run so the aggregate stays maximal.
        let signer_quorum = match map.get("SignerQuorum") {
            None => {
                errors.push(ValidationError::MissingRequiredField {
                    field: "SignerQuorum".to_string(),
                });
                None
            }
            Some(v) => match v.as_u64().filter(|&q| q <= u64::from(u32::MAX)) {
                Some(q) => Some(q as u32),
                None => {
                    errors.push(ValidationError::InvalidQuorumRange {
                        value: v.to_string(),
                    });
                    None
                }
            },
        };

        let mut entry_errors = Vec::new();
        let mut entries = Vec::new();
        let raw_count = match map.get("SignerEntries") {
            None => 0,
            Some(Value::Array(raw)) => {
                for (index, item) in raw.iter().enumerate() {
                    if let Some(entry) = SignerEntry::from_value(index, item, &mut entry_errors) {
                        entries.push(entry);
                    }
                }
                raw.len()
            }
            Some(_) => {
                errors.push(ValidationError::InvalidFieldType {
                    field: "SignerEntries".to_string(),
                    expected: "an array",
                });
                0
            }
        };

        check_signer_list(
            &common.account,
            signer_quorum,
            &entries,
            raw_count,
            entry_errors,
            limits,
            &mut errors,
        );

        match signer_quorum {
            Some(signer_quorum) if errors.is_empty() => Ok(Self {
                common,
                signer_quorum,
                signer_entries: (!entries.is_empty()).then_some(entries),
            }),
            _ => Err(ModelValidationError::new(errors)),
        }
    }

    /// Re-run the full rule set on this value.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        self.validate_with_limits(&ProtocolLimits::default())
    }

    /// Re-run the full rule set under explicit protocol limits.
    pub fn validate_with_limits(&self, limits: &ProtocolLimits) -> Result<(), ModelValidationError> {
        let mut errors = Vec::new();
        self.common.check(&mut errors);
        let entries = self.signer_entries.as_deref().unwrap_or(&[]);
        check_signer_list(
            &self.common.account,
            Some(self.signer_quorum),
            entries,
            entries.len(),
            check_typed_entries(entries),
            limits,
            &mut errors,
        );
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ModelValidationError::new(errors))
        }
    }

    /// Whether the value still satisfies every rule.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// The common transaction fields.
    pub fn common(&self) -> &CommonFields {
        &self.common
    }

    /// The account whose signer list is being configured.
    pub fn account(&self) -> &str {
        &self.common.account
    }

    /// The approval quorum.
    pub fn signer_quorum(&self) -> u32 {
        self.signer_quorum
    }

    /// The signer entries, if the transaction installs a list.
    pub fn signer_entries(&self) -> Option<&[SignerEntry]> {
        self.signer_entries.as_deref()
    }

    /// Whether this transaction deletes the signer list.
    pub fn is_delete(&self) -> bool {
        self.signer_quorum == 0
    }

    /// Sum of all entry weights.
    pub fn total_weight(&self) -> u64 {
        self.signer_entries
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|e| u64::from(e.weight))
            .sum()
    }

    /// The canonical wire mapping, ready for signing and serialization.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "TransactionType".to_string(),
            Value::from(Self::TRANSACTION_TYPE),
        );
        self.common.write_value(&mut map);
        map.insert("SignerQuorum".to_string(), Value::from(self.signer_quorum));
        if let Some(ref entries) = self.signer_entries {
            map.insert(
                "SignerEntries".to_string(),
                Value::Array(entries.iter().map(SignerEntry::to_value).collect()),
            );
        }
        Value::Object(map)
    }
}

/// Semantic checks on entries that are already well-typed.
///
/// Mirrors the shape check's account and weight bounds for the typed
/// construction path, so both paths enforce one rule set.
fn check_typed_entries(entries: &[SignerEntry]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.weight == 0 {
            errors.push(ValidationError::MalformedEntry {
                index,
                defect: EntryDefect::WeightOutOfRange { weight: 0 },
            });
        }
        if !is_valid_classic_address(&entry.account) {
            errors.push(ValidationError::MalformedEntry {
                index,
                defect: EntryDefect::InvalidAccount {
                    account: entry.account.clone(),
                },
            });
        }
    }
    errors
}

/// The whole-transaction signer list rules.
///
/// `quorum` is `None` when the untyped range check already failed; the
/// quorum-dependent rules are then skipped while the structural ones still
/// run. `raw_count` is the length of the raw `SignerEntries` array, which
/// may exceed `entries.len()` when some elements were malformed.
/// Malformed entries short-circuit the duplicate, self-reference, and
/// weight-sum rules, since those dereference fields only a well-shaped
/// entry has.
fn check_signer_list(
    owner: &str,
    quorum: Option<u32>,
    entries: &[SignerEntry],
    raw_count: usize,
    entry_errors: Vec<ValidationError>,
    limits: &ProtocolLimits,
    errors: &mut Vec<ValidationError>,
) {
    match quorum {
        // delete mode: the list must be absent
        Some(0) => {
            if raw_count > 0 {
                errors.push(ValidationError::DeleteModeHasEntries { count: raw_count });
            }
        }
        Some(quorum) => {
            if raw_count == 0 {
                errors.push(ValidationError::MissingSignerEntries);
                return;
            }
            if raw_count > limits.max_signer_entries {
                errors.push(ValidationError::TooManySignerEntries {
                    count: raw_count,
                    max: limits.max_signer_entries,
                });
            }
            if !entry_errors.is_empty() {
                errors.extend(entry_errors);
                return;
            }
            check_accounts(owner, entries, errors);
            let weight_sum: u64 = entries.iter().map(|e| u64::from(e.weight)).sum();
            if u64::from(quorum) > weight_sum {
                errors.push(ValidationError::QuorumExceedsWeightSum { quorum, weight_sum });
            }
        }
        // quorum unparseable: mode unknown, run the structural rules only
        None => {
            if raw_count > limits.max_signer_entries {
                errors.push(ValidationError::TooManySignerEntries {
                    count: raw_count,
                    max: limits.max_signer_entries,
                });
            }
            if !entry_errors.is_empty() {
                errors.extend(entry_errors);
                return;
            }
            check_accounts(owner, entries, errors);
        }
    }
}

/// Uniqueness and self-reference rules over well-shaped entries.
fn check_accounts(owner: &str, entries: &[SignerEntry], errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.account.as_str()) && reported.insert(entry.account.as_str()) {
            errors.push(ValidationError::DuplicateSignerAccount {
                account: entry.account.clone(),
            });
        }
    }
    if entries.iter().any(|e| e.account == owner) {
        errors.push(ValidationError::SelfReferencingSigner {
            account: owner.to_string(),
        });
    }
}
