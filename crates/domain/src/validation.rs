//! Input predicates checked before a remote call is issued.

use crate::error::{DistributionError, Result};
use crate::snapshot::SnapshotId;
use crate::token::ScaledAmount;
use primitive_types::U256;

const HEX_PREFIX: &str = "0x";
const ADDRESS_HEX_DIGITS: usize = 40;
const HASH_HEX_DIGITS: usize = 64;

pub fn is_valid_snapshot_id(id: U256) -> bool {
    !id.is_zero()
}

pub fn is_valid_positive_amount(amount: ScaledAmount) -> bool {
    !amount.is_zero()
}

/// `0x` followed by exactly 40 hex digits, either case.
pub fn is_well_formed_address(text: &str) -> bool {
    is_prefixed_hex(text, ADDRESS_HEX_DIGITS)
}

/// `0x` followed by exactly 64 hex digits, either case.
pub fn is_well_formed_hash(text: &str) -> bool {
    is_prefixed_hex(text, HASH_HEX_DIGITS)
}

pub fn require_snapshot_id(id: U256) -> Result<SnapshotId> {
    SnapshotId::new(id)
}

pub fn require_address(text: &str) -> Result<()> {
    if is_well_formed_address(text) {
        Ok(())
    } else {
        Err(DistributionError::InvalidAddress {
            value: text.to_string(),
        })
    }
}

pub fn require_positive_amount(text: &str, amount: ScaledAmount) -> Result<()> {
    if is_valid_positive_amount(amount) {
        Ok(())
    } else {
        Err(DistributionError::invalid_amount(text, "amount must be greater than zero"))
    }
}

fn is_prefixed_hex(text: &str, digits: usize) -> bool {
    text.strip_prefix(HEX_PREFIX)
        .is_some_and(|hex| hex.len() == digits && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}
