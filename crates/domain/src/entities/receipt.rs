use crate::snapshot::SnapshotId;
use crate::token::ScaledAmount;
use serde::{Deserialize, Serialize};

/// Outcome of a submitted transaction as reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    /// Transaction hash, `0x` + 64 hex digits.
    pub tx_hash: String,
    /// Block the transaction was included in.
    pub block_number: Option<u64>,
    /// Whether execution succeeded.
    pub success: bool,
}

impl TxReceipt {
    /// Creates a successful receipt.
    #[must_use]
    pub fn success(tx_hash: impl Into<String>, block_number: u64) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            block_number: Some(block_number),
            success: true,
        }
    }

    /// Creates a failed receipt.
    #[must_use]
    pub fn failure(tx_hash: impl Into<String>) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            block_number: None,
            success: false,
        }
    }
}

/// A successful claim within a single or batch claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimResult {
    pub snapshot_id: SnapshotId,
    /// Claimable amount read just before the claim was sent.
    pub amount: ScaledAmount,
    pub receipt: TxReceipt,
}
