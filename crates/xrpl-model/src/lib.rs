//! Transaction models for rs-xrpl.
//!
//! This crate holds the client-side transaction models and their validation.
//! A model value is built once from caller-supplied fields — either typed
//! values or a wire-shaped `serde_json::Value` mapping — and the full rule
//! set runs synchronously at construction. A candidate that violates any
//! rule fails atomically with an aggregate error naming every violation;
//! a value that constructs is immutable and ready for signing and
//! canonical serialization.
//!
//! Validation is pure and stateless: it reads only its own input, performs
//! no I/O, and is safe to run concurrently on independent candidates.
//!
//! ## Example
//!
//! ```
//! use xrpl_model::{CommonFields, SignerEntry, SignerListSet};
//!
//! let tx = SignerListSet::new(
//!     CommonFields::new("r9LqNeG6qHxjeUocjvVki2XR35weJ9mZgQ", "12", 5),
//!     2,
//!     Some(vec![
//!         SignerEntry::new("rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW", 2),
//!         SignerEntry::new("rUpy3eEg8rqjqfUoLeBnZkscbKbFsKXC3v", 1),
//!     ]),
//! )
//! .unwrap();
//! assert!(tx.is_valid());
//! ```

mod common;
mod error;
mod limits;
mod signer_list_set;

pub use common::CommonFields;
pub use error::{EntryDefect, ModelValidationError, ValidationError};
pub use limits::{ProtocolLimits, MAX_SIGNER_ENTRIES};
pub use signer_list_set::{SignerEntry, SignerListSet};
