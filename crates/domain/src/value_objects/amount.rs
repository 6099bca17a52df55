use crate::error::Result;
use crate::math::fixed_point;
use crate::token::ScaledAmount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scaled amount paired with the decimal exponent of its asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount {
    pub raw: ScaledAmount,
    pub decimals: u8,
}

impl Amount {
    pub fn new(raw: ScaledAmount, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    pub fn zero(decimals: u8) -> Self {
        Self::new(ScaledAmount::zero(), decimals)
    }

    /// Parses a human decimal string such as `"1250.5"`.
    pub fn parse(text: &str, decimals: u8) -> Result<Self> {
        let raw = fixed_point::parse_from_display_string(text, decimals)?;
        Ok(Self { raw, decimals })
    }

    pub fn to_display_string(&self) -> String {
        fixed_point::to_display_string(self.raw, self.decimals)
    }

    /// Exact decimal value, `None` when it exceeds `Decimal`'s 96-bit range.
    pub fn to_decimal(&self) -> Option<Decimal> {
        fixed_point::to_decimal(self.raw, self.decimals)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
