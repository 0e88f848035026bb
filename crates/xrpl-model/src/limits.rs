//! Protocol constants mirrored by the validator.

use serde::{Deserialize, Serialize};

/// Maximum number of entries in a signer list (current protocol revision).
pub const MAX_SIGNER_ENTRIES: usize = 8;

/// Protocol-revision constants carried into validation.
///
/// Defaults pin the revision this crate was written against. A newer
/// revision that raises the entry cap can override it through configuration
/// instead of a code change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolLimits {
    /// Maximum number of signer entries in a signer list.
    #[serde(default = "default_max_signer_entries")]
    pub max_signer_entries: usize,
}

impl Default for ProtocolLimits {
    fn default() -> Self {
        Self {
            max_signer_entries: default_max_signer_entries(),
        }
    }
}

fn default_max_signer_entries() -> usize {
    MAX_SIGNER_ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        assert_eq!(ProtocolLimits::default().max_signer_entries, 8);
    }

    #[test]
    fn test_deserialize_empty_uses_default() {
        let limits: ProtocolLimits = serde_json::from_str("{}").unwrap();
        assert_eq!(limits, ProtocolLimits::default());
    }
}
