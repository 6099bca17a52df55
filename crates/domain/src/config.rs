//! Typed configuration for the amount codec and the yield calculator.

use crate::error::{DistributionError, Result};
use crate::math::fixed_point::MAX_U256_EXPONENT;
use crate::token::Asset;
use serde::{Deserialize, Serialize};

/// Default number of distribution periods per year (monthly payouts).
pub const DEFAULT_PERIODS_PER_YEAR: u32 = 12;

/// Default USD price of one whole primary token.
pub const DEFAULT_REFERENCE_PRICE: f64 = 1.0;

/// Options recognised by the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Snapshotting token; its `decimals` scale holder balances and supplies.
    pub primary_asset: Asset,
    /// Settlement asset; its `decimals` scale pools and shares.
    pub settlement_asset: Asset,
    /// Periods used to annualize one period's yield.
    pub periods_per_year: u32,
    /// USD value of one whole primary token, used to value a holding.
    pub reference_price: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            primary_asset: Asset::primary(),
            settlement_asset: Asset::settlement(),
            periods_per_year: DEFAULT_PERIODS_PER_YEAR,
            reference_price: DEFAULT_REFERENCE_PRICE,
        }
    }
}

impl CalculatorConfig {
    pub fn with_reference_price(mut self, reference_price: f64) -> Self {
        self.reference_price = reference_price;
        self
    }

    pub fn with_periods_per_year(mut self, periods_per_year: u32) -> Self {
        self.periods_per_year = periods_per_year;
        self
    }

    /// Checks every setting is inside its domain.
    ///
    /// # Errors
    ///
    /// - [`DistributionError::InvalidConfig`] naming the first bad setting:
    ///   a decimal exponent above 77, zero periods per year, or a reference
    ///   price that is not a finite positive number
    pub fn validate(&self) -> Result<()> {
        for (field, asset) in [
            ("primary_asset.decimals", &self.primary_asset),
            ("settlement_asset.decimals", &self.settlement_asset),
        ] {
            if asset.decimals > MAX_U256_EXPONENT {
                return Err(invalid(
                    field,
                    format!("{} exceeds {MAX_U256_EXPONENT}", asset.decimals),
                ));
            }
        }

        if self.periods_per_year == 0 {
            return Err(invalid("periods_per_year", "must be at least 1"));
        }

        if !(self.reference_price.is_finite() && self.reference_price > 0.0) {
            return Err(invalid(
                "reference_price",
                format!("must be a finite positive number, got {}", self.reference_price),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> DistributionError {
    DistributionError::InvalidConfig {
        field: field.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let config = CalculatorConfig::default();
        assert_eq!(config.primary_asset.decimals, 18);
        assert_eq!(config.settlement_asset.decimals, 6);
        assert_eq!(config.periods_per_year, 12);
        assert_eq!(config.reference_price, 1.0);
    }

    #[test]
    fn test_validate() {
        assert!(CalculatorConfig::default().validate().is_ok());

        let err = CalculatorConfig::default()
            .with_periods_per_year(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(err.to_string().contains("periods_per_year"));

        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = CalculatorConfig::default()
                .with_reference_price(price)
                .validate()
                .unwrap_err();
            assert!(err.to_string().contains("reference_price"), "price {price}");
        }

        let mut config = CalculatorConfig::default();
        config.settlement_asset.decimals = 78;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("settlement_asset.decimals"));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: CalculatorConfig =
            serde_json::from_str(r#"{"periods_per_year": 4, "reference_price": 1.25}"#).unwrap();
        assert_eq!(config.periods_per_year, 4);
        assert_eq!(config.reference_price, 1.25);
        assert_eq!(config.settlement_asset, Asset::settlement());
    }
}
