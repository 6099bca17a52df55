use crate::math::distribution::calculate_share;
use crate::math::fixed_point::format_percentage;
use crate::snapshot::SnapshotId;
use crate::token::ScaledAmount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One distribution as recorded by the distributor contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub snapshot_id: SnapshotId,
    /// Settlement amount allocated to the snapshot.
    pub total_amount: ScaledAmount,
    /// Token supply counted toward the pro-rata split.
    pub eligible_supply: ScaledAmount,
    pub claimed_amount: ScaledAmount,
    pub created_at: DateTime<Utc>,
    pub claim_deadline: DateTime<Utc>,
}

impl Distribution {
    /// Amount not yet claimed.
    pub fn remaining(&self) -> ScaledAmount {
        self.total_amount.saturating_sub(self.claimed_amount)
    }

    /// The deadline itself is still inside the window.
    pub fn is_claim_open(&self, now: DateTime<Utc>) -> bool {
        now <= self.claim_deadline
    }

    pub fn share_for(&self, holder_balance: ScaledAmount) -> ScaledAmount {
        calculate_share(holder_balance, self.total_amount, self.eligible_supply)
    }

    pub fn claimed_percentage(&self, precision_digits: u8) -> String {
        format_percentage(self.claimed_amount, self.total_amount, precision_digits)
    }
}
