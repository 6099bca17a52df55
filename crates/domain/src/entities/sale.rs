use crate::math::fixed_point::{narrow, pow10};
use crate::token::ScaledAmount;
use primitive_types::U512;
use serde::{Deserialize, Serialize};

/// State of the optional primary sale contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleInfo {
    /// Settlement units charged per whole token.
    pub price_per_token: ScaledAmount,
    pub tokens_sold: ScaledAmount,
    pub sale_cap: ScaledAmount,
    pub active: bool,
}

impl SaleInfo {
    pub fn remaining_cap(&self) -> ScaledAmount {
        self.sale_cap.saturating_sub(self.tokens_sold)
    }

    /// Settlement cost of `token_amount`, rounded down as the contract does.
    ///
    /// Returns `None` when the cost does not fit in 256 bits or the token
    /// exponent is above 77.
    pub fn cost_of(&self, token_amount: ScaledAmount, token_decimals: u8) -> Option<ScaledAmount> {
        let scale = pow10(token_decimals)?;
        let cost = token_amount.0.full_mul(self.price_per_token.0) / U512::from(scale);
        narrow(cost).map(ScaledAmount)
    }
}
