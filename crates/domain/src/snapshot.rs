use crate::error::{DistributionError, Result};
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a historical balance/supply checkpoint on the token.
///
/// Only ids greater than zero refer to a snapshot; [`SnapshotId::new`]
/// rejects zero so a constructed id is always usable in a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "U256", into = "U256")]
pub struct SnapshotId(U256);

impl SnapshotId {
    pub fn new(id: impl Into<U256>) -> Result<Self> {
        let id = id.into();
        if id.is_zero() {
            return Err(DistributionError::InvalidSnapshotId {
                value: id.to_string(),
            });
        }
        Ok(Self(id))
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }

    /// Returns the id that follows this one.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(U256::one()).map(Self)
    }
}

impl TryFrom<U256> for SnapshotId {
    type Error = DistributionError;

    fn try_from(v: U256) -> Result<Self> {
        Self::new(v)
    }
}

impl From<SnapshotId> for U256 {
    fn from(id: SnapshotId) -> Self {
        id.0
    }
}

impl TryFrom<u64> for SnapshotId {
    type Error = DistributionError;

    fn try_from(v: u64) -> Result<Self> {
        Self::new(v)
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
