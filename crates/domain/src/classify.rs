//! Best-effort mapping of remote failure messages to user-facing sentences.
//!
//! The contracts only report failures as revert strings, so classification
//! is substring matching against a fixed table. The table is a versioned
//! contract with the deployed contracts: bump
//! [`REMOTE_ERROR_TABLE_VERSION`] whenever an entry changes.

/// Version of [`KNOWN_REMOTE_ERRORS`].
pub const REMOTE_ERROR_TABLE_VERSION: u32 = 1;

/// Lower-case substring and the sentence shown for it, checked in order.
pub const KNOWN_REMOTE_ERRORS: &[(&str, &str)] = &[
    ("paused", "The contract is currently paused. Please try again later."),
    ("missing role", "You do not have permission to perform this action."),
    ("already claimed", "You have already claimed this distribution."),
    ("nothing to claim", "There is nothing to claim for this snapshot."),
    ("insufficient balance", "Insufficient balance to complete this transaction."),
];

/// Sentence used when a failure carries no usable message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Classifies a remote failure message.
///
/// Matching is case-insensitive. Unmatched messages are returned as-is;
/// a missing or blank message yields [`UNKNOWN_ERROR_MESSAGE`].
pub fn classify_remote_error(message: Option<&str>) -> String {
    let Some(message) = message.map(str::trim).filter(|m| !m.is_empty()) else {
        return UNKNOWN_ERROR_MESSAGE.to_string();
    };

    let lowered = message.to_lowercase();
    KNOWN_REMOTE_ERRORS
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map_or_else(|| message.to_string(), |(_, sentence)| sentence.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_messages() {
        assert_eq!(
            classify_remote_error(Some("Pausable: paused")),
            "The contract is currently paused. Please try again later."
        );
        assert_eq!(
            classify_remote_error(Some(
                "AccessControl: account 0xabc is missing role 0x65d7"
            )),
            "You do not have permission to perform this action."
        );
        assert_eq!(
            classify_remote_error(Some("execution reverted: Already claimed")),
            "You have already claimed this distribution."
        );
        assert_eq!(
            classify_remote_error(Some("Distributor: nothing to claim")),
            "There is nothing to claim for this snapshot."
        );
        assert_eq!(
            classify_remote_error(Some("ERC20: INSUFFICIENT BALANCE")),
            "Insufficient balance to complete this transaction."
        );
    }

    #[test]
    fn test_unknown_messages_pass_through() {
        assert_eq!(
            classify_remote_error(Some("nonce too low")),
            "nonce too low"
        );
    }

    #[test]
    fn test_absent_messages() {
        assert_eq!(classify_remote_error(None), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(classify_remote_error(Some("")), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(classify_remote_error(Some("   ")), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_table_entries_are_lowercase() {
        for (needle, _) in KNOWN_REMOTE_ERRORS {
            assert_eq!(*needle, needle.to_lowercase());
        }
    }
}
