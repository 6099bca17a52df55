//! Error taxonomy shared by every crate in the workspace.

use crate::classify::classify_remote_error;
use crate::enums::ContractKind;
use crate::value_objects::amount::Amount;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable machine-readable error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidAmountFormat,
    InvalidSnapshotId,
    InsufficientBalance,
    RemoteCallFailure,
    InvalidAddress,
    UnexpectedResponse,
    NotConfigured,
    InvalidConfig,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidAmountFormat => "INVALID_AMOUNT_FORMAT",
            ErrorKind::InvalidSnapshotId => "INVALID_SNAPSHOT_ID",
            ErrorKind::InsufficientBalance => "INSUFFICIENT_BALANCE",
            ErrorKind::RemoteCallFailure => "REMOTE_CALL_FAILURE",
            ErrorKind::InvalidAddress => "INVALID_ADDRESS",
            ErrorKind::UnexpectedResponse => "UNEXPECTED_RESPONSE",
            ErrorKind::NotConfigured => "NOT_CONFIGURED",
            ErrorKind::InvalidConfig => "INVALID_CONFIG",
        }
    }
}

/// Errors raised by the codec, the validators and the contract adapters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    /// Text handed to the amount codec is not a non-negative decimal numeral.
    #[error("invalid amount format {input:?}: {reason}")]
    InvalidAmountFormat {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Snapshot identifier is not strictly positive.
    #[error("invalid snapshot id {value}: snapshot ids start at 1")]
    InvalidSnapshotId {
        /// The rejected identifier.
        value: String,
    },

    /// A caller-side pre-check found less than the operation needs.
    #[error("insufficient {asset} balance: required {required}, available {available}")]
    InsufficientBalance {
        /// Asset symbol.
        asset: String,
        /// Amount the operation needs.
        required: Amount,
        /// Amount the account holds.
        available: Amount,
    },

    /// The transport reported a failure for a contract call.
    #[error(
        "{operation} on {contract} failed: {}",
        .message.as_deref().unwrap_or("no error message")
    )]
    RemoteCallFailure {
        /// Contract the call targeted.
        contract: ContractKind,
        /// Logical operation, e.g. `claim`.
        operation: String,
        /// Raw message from the transport, if any.
        message: Option<String>,
    },

    /// Address text is not `0x` followed by 40 hex digits.
    #[error("invalid address {value:?}")]
    InvalidAddress {
        /// The rejected address.
        value: String,
    },

    /// The transport answered with a value of the wrong shape.
    #[error("unexpected response from {contract} {operation}: {reason}")]
    UnexpectedResponse {
        /// Contract the call targeted.
        contract: ContractKind,
        /// Logical operation.
        operation: String,
        /// Shape mismatch description.
        reason: String,
    },

    /// An optional contract was used without a deployed address.
    #[error("no {contract} contract is configured")]
    NotConfigured {
        /// The missing contract.
        contract: ContractKind,
    },

    /// A calculator setting is outside its domain.
    #[error("invalid configuration {field}: {reason}")]
    InvalidConfig {
        /// Offending setting.
        field: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl DistributionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DistributionError::InvalidAmountFormat { .. } => ErrorKind::InvalidAmountFormat,
            DistributionError::InvalidSnapshotId { .. } => ErrorKind::InvalidSnapshotId,
            DistributionError::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
            DistributionError::RemoteCallFailure { .. } => ErrorKind::RemoteCallFailure,
            DistributionError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            DistributionError::UnexpectedResponse { .. } => ErrorKind::UnexpectedResponse,
            DistributionError::NotConfigured { .. } => ErrorKind::NotConfigured,
            DistributionError::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }

    /// Sentence suitable for showing to an end user.
    ///
    /// Remote failures go through [`classify_remote_error`]; everything else
    /// uses the `Display` text.
    pub fn user_message(&self) -> String {
        match self {
            DistributionError::RemoteCallFailure { message, .. } => {
                classify_remote_error(message.as_deref())
            }
            other => other.to_string(),
        }
    }

    pub(crate) fn invalid_amount(input: &str, reason: impl Into<String>) -> Self {
        DistributionError::InvalidAmountFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience result type for distribution operations.
pub type Result<T> = std::result::Result<T, DistributionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::ScaledAmount;

    #[test]
    fn test_kinds_are_stable() {
        let err = DistributionError::invalid_amount("abc", "not a number");
        assert_eq!(err.kind().as_str(), "INVALID_AMOUNT_FORMAT");

        let err = DistributionError::InvalidSnapshotId {
            value: "0".to_string(),
        };
        assert_eq!(err.kind().as_str(), "INVALID_SNAPSHOT_ID");

        let err = DistributionError::NotConfigured {
            contract: ContractKind::Sale,
        };
        assert_eq!(err.kind().as_str(), "NOT_CONFIGURED");
        assert_eq!(err.to_string(), "no sale contract is configured");
    }

    #[test]
    fn test_insufficient_balance_message() {
        let err = DistributionError::InsufficientBalance {
            asset: "USDC".to_string(),
            required: Amount::new(ScaledAmount::from(1_500_000u64), 6),
            available: Amount::new(ScaledAmount::from(250_000u64), 6),
        };
        assert_eq!(
            err.to_string(),
            "insufficient USDC balance: required 1.5, available 0.25"
        );
        assert_eq!(err.kind(), ErrorKind::InsufficientBalance);
    }

    #[test]
    fn test_remote_failure_user_message() {
        let err = DistributionError::RemoteCallFailure {
            contract: ContractKind::Distributor,
            operation: "claim".to_string(),
            message: Some("execution reverted: Pausable: paused".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "claim on distributor failed: execution reverted: Pausable: paused"
        );
        assert_eq!(
            err.user_message(),
            "The contract is currently paused. Please try again later."
        );

        let silent = DistributionError::RemoteCallFailure {
            contract: ContractKind::Token,
            operation: "snapshot".to_string(),
            message: None,
        };
        assert_eq!(silent.to_string(), "snapshot on token failed: no error message");
        assert_eq!(silent.user_message(), "An unknown error occurred.");
    }
}
