//! SignerListSet validation scenarios.
//!
//! Each case builds a candidate through the wire path and asserts the
//! specific violation it must produce, or that a valid candidate
//! constructs and round-trips.

use serde_json::{json, Value};
use xrpl_model::{
    CommonFields, ModelValidationError, ProtocolLimits, SignerEntry, SignerListSet,
    ValidationError,
};

const ACCOUNT: &str = "r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgQ";
const FEE: &str = "0.00001";
const SEQUENCE: u32 = 19048;

fn valid_entries() -> Value {
    json!([
        { "SignerEntry": { "Account": "rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW", "SignerWeight": 2 } },
        { "SignerEntry": { "Account": "rUpy3eEg8rqjqfUoLeBnZkscbKbFsKXC3v", "SignerWeight": 1 } },
        { "SignerEntry": { "Account": "raKEEVSGnKSD9Zyvxu4z6Pqpm4ABH8FS6n", "SignerWeight": 1 } },
    ])
}

fn tx_value(quorum: Value, entries: Option<Value>) -> Value {
    let mut map = json!({
        "TransactionType": "SignerListSet",
        "Account": ACCOUNT,
        "Fee": FEE,
        "Sequence": SEQUENCE,
        "SignerQuorum": quorum,
    });
    if let Some(entries) = entries {
        map.as_object_mut()
            .unwrap()
            .insert("SignerEntries".to_string(), entries);
    }
    map
}

fn expect_violation(
    err: &ModelValidationError,
    pred: impl Fn(&ValidationError) -> bool,
) {
    assert!(
        err.violations().iter().any(pred),
        "missing expected violation in {err}"
    );
}

#[test]
fn delete_with_signer_entries_fails() {
    let err = SignerListSet::from_value(&tx_value(json!(0), Some(valid_entries()))).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::DeleteModeHasEntries { count: 3 })
    });
}

#[test]
fn nonzero_quorum_without_entries_fails() {
    let err = SignerListSet::from_value(&tx_value(json!(5), None)).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::MissingSignerEntries)
    });
}

#[test]
fn negative_quorum_fails() {
    let err = SignerListSet::from_value(&tx_value(json!(-7), Some(valid_entries()))).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::InvalidQuorumRange { .. })
    });
}

#[test]
fn quorum_above_u32_fails() {
    let err = SignerListSet::from_value(&tx_value(json!(4294967296u64), Some(valid_entries())))
        .unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::InvalidQuorumRange { .. })
    });
}

#[test]
fn empty_entry_list_fails() {
    let err = SignerListSet::from_value(&tx_value(json!(1), Some(json!([])))).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::MissingSignerEntries)
    });
}

#[test]
fn ten_entries_fail() {
    let accounts = [
        "rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW",
        "rUpy3eEg8rqjqfUoLeBnZkscbKbFsKXC3v",
        "raKEEVSGnKSD9Zyvxu4z6Pqpm4ABH8FS6n",
        "ra5nK24KXen9AHvsdFTKHSANinZseWnPcX",
        "rWYkbWkCeg8dP6rXALnjgZSjjLyih5NXm",
        "rPT1Sjq2YGrBMTttX4GZHjKu9dyfzbpAYe",
        "rsUiUMpnrgxQp24dJYZDhmV4bE3aBtQyt8",
        "rEhxGqkqPPSxQ3P25J66ft5TwpzV14k2de",
        "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn",
        "rrrrrrrrrrrrrrrrrrrrrhoLvTp",
    ];
    let entries: Vec<Value> = accounts
        .iter()
        .map(|a| json!({ "SignerEntry": { "Account": a, "SignerWeight": 1 } }))
        .collect();
    let err =
        SignerListSet::from_value(&tx_value(json!(5), Some(Value::Array(entries)))).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::TooManySignerEntries { count: 10, max: 8 })
    });
}

#[test]
fn nine_entries_fail_under_default_limits() {
    let entries: Vec<Value> = (0u8..9)
        .map(|i| {
            let mut id = [0u8; 20];
            id[19] = i + 1;
            json!({
                "SignerEntry": {
                    "Account": xrpl_addresscodec::encode_account_id(&id),
                    "SignerWeight": 1,
                }
            })
        })
        .collect();
    let value = tx_value(json!(5), Some(Value::Array(entries)));
    let err = SignerListSet::from_value(&value).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::TooManySignerEntries { count: 9, max: 8 })
    });

    // a raised entry cap admits the same nine entries
    let limits = ProtocolLimits {
        max_signer_entries: 9,
    };
    let tx = SignerListSet::from_value_with_limits(&value, &limits).unwrap();
    assert_eq!(tx.signer_entries().map(<[_]>::len), Some(9));
}

#[test]
fn self_referencing_entry_fails() {
    let entries = json!([
        { "SignerEntry": { "Account": ACCOUNT, "SignerWeight": 5 } },
    ]);
    let err = SignerListSet::from_value(&tx_value(json!(3), Some(entries))).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::SelfReferencingSigner { account } if account == ACCOUNT)
    });
}

#[test]
fn wrong_wrapper_key_fails() {
    let entries = json!([
        { "signer_entry": { "Account": "rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW", "SignerWeight": 5 } },
    ]);
    let err = SignerListSet::from_value(&tx_value(json!(3), Some(entries))).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::MalformedEntry { index: 0, .. })
    });
}

#[test]
fn lowercase_account_key_fails() {
    let entries = json!([
        { "SignerEntry": { "account": "rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW", "SignerWeight": 5 } },
    ]);
    let err = SignerListSet::from_value(&tx_value(json!(3), Some(entries))).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::MalformedEntry { index: 0, .. })
    });
}

#[test]
fn lowercase_weight_key_fails() {
    let entries = json!([
        { "SignerEntry": { "Account": "rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW", "signer_weight": 5 } },
    ]);
    let err = SignerListSet::from_value(&tx_value(json!(3), Some(entries))).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::MalformedEntry { index: 0, .. })
    });
}

#[test]
fn repeated_account_fails() {
    let entries = json!([
        { "SignerEntry": { "Account": "rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW", "SignerWeight": 5 } },
        { "SignerEntry": { "Account": "rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW", "SignerWeight": 3 } },
    ]);
    let err = SignerListSet::from_value(&tx_value(json!(7), Some(entries))).unwrap_err();
    expect_violation(&err, |e| {
        matches!(
            e,
            ValidationError::DuplicateSignerAccount { account }
                if account == "rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW"
        )
    });
}

#[test]
fn quorum_above_weight_sum_fails() {
    let err = SignerListSet::from_value(&tx_value(json!(57), Some(valid_entries()))).unwrap_err();
    expect_violation(&err, |e| {
        matches!(
            e,
            ValidationError::QuorumExceedsWeightSum {
                quorum: 57,
                weight_sum: 4,
            }
        )
    });
}

#[test]
fn quorum_one_above_weight_sum_fails() {
    let err = SignerListSet::from_value(&tx_value(json!(5), Some(valid_entries()))).unwrap_err();
    expect_violation(&err, |e| {
        matches!(
            e,
            ValidationError::QuorumExceedsWeightSum {
                quorum: 5,
                weight_sum: 4,
            }
        )
    });
}

#[test]
fn quorum_equal_to_weight_sum_is_valid() {
    let tx = SignerListSet::from_value(&tx_value(json!(4), Some(valid_entries()))).unwrap();
    assert!(tx.is_valid());
    assert_eq!(tx.total_weight(), 4);
}

#[test]
fn quorum_below_weight_sum_is_valid() {
    let tx = SignerListSet::from_value(&tx_value(json!(2), Some(valid_entries()))).unwrap();
    assert!(tx.is_valid());
}

#[test]
fn delete_mode_is_valid() {
    let tx = SignerListSet::from_value(&tx_value(json!(0), None)).unwrap();
    assert!(tx.is_valid());
    assert!(tx.is_delete());
    assert_eq!(tx.signer_entries(), None);
}

#[test]
fn several_violations_report_together() {
    // self-reference, duplicate, and infeasible quorum at once
    let entries = json!([
        { "SignerEntry": { "Account": ACCOUNT, "SignerWeight": 1 } },
        { "SignerEntry": { "Account": "rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW", "SignerWeight": 1 } },
        { "SignerEntry": { "Account": "rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW", "SignerWeight": 1 } },
    ]);
    let err = SignerListSet::from_value(&tx_value(json!(100), Some(entries))).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::SelfReferencingSigner { .. })
    });
    expect_violation(&err, |e| {
        matches!(e, ValidationError::DuplicateSignerAccount { .. })
    });
    expect_violation(&err, |e| {
        matches!(e, ValidationError::QuorumExceedsWeightSum { .. })
    });
    assert_eq!(err.violations().len(), 3);
}

#[test]
fn bad_common_fields_join_the_aggregate() {
    let value = json!({
        "Account": "not-an-address",
        "Fee": "lots",
        "SignerQuorum": 5,
    });
    let err = SignerListSet::from_value(&value).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::InvalidAccount { .. })
    });
    expect_violation(&err, |e| matches!(e, ValidationError::InvalidFee { .. }));
    expect_violation(&err, |e| {
        matches!(e, ValidationError::MissingRequiredField { field } if field == "Sequence")
    });
    expect_violation(&err, |e| {
        matches!(e, ValidationError::MissingSignerEntries)
    });
}

#[test]
fn missing_quorum_is_a_missing_field() {
    let value = json!({
        "Account": ACCOUNT,
        "Fee": FEE,
        "Sequence": SEQUENCE,
    });
    let err = SignerListSet::from_value(&value).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::MissingRequiredField { field } if field == "SignerQuorum")
    });
}

#[test]
fn wrong_transaction_type_fails() {
    let mut value = tx_value(json!(4), Some(valid_entries()));
    value
        .as_object_mut()
        .unwrap()
        .insert("TransactionType".to_string(), json!("Payment"));
    let err = SignerListSet::from_value(&value).unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::InvalidFieldType { field, .. } if field == "TransactionType")
    });
}

#[test]
fn wire_round_trip() {
    let original = tx_value(json!(4), Some(valid_entries()));
    let tx = SignerListSet::from_value(&original).unwrap();
    let encoded = tx.to_value();
    assert_eq!(encoded["TransactionType"], json!("SignerListSet"));
    assert_eq!(encoded, original);
    let again = SignerListSet::from_value(&encoded).unwrap();
    assert_eq!(again, tx);
}

#[test]
fn typed_and_wire_paths_agree() {
    let typed = SignerListSet::new(
        CommonFields::new(ACCOUNT, FEE, SEQUENCE),
        4,
        Some(vec![
            SignerEntry::new("rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW", 2),
            SignerEntry::new("rUpy3eEg8rqjqfUoLeBnZkscbKbFsKXC3v", 1),
            SignerEntry::new("raKEEVSGnKSD9Zyvxu4z6Pqpm4ABH8FS6n", 1),
        ]),
    )
    .unwrap();
    let wire = SignerListSet::from_value(&tx_value(json!(4), Some(valid_entries()))).unwrap();
    assert_eq!(typed.to_value(), wire.to_value());
}

#[test]
fn typed_delete_mode_with_entries_fails() {
    let err = SignerListSet::new(
        CommonFields::new(ACCOUNT, FEE, SEQUENCE),
        0,
        Some(vec![SignerEntry::new(
            "rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW",
            1,
        )]),
    )
    .unwrap_err();
    expect_violation(&err, |e| {
        matches!(e, ValidationError::DeleteModeHasEntries { count: 1 })
    });
}
