use crate::config::CalculatorConfig;
use crate::math::distribution::{calculate_annualized_yield, calculate_share};
use crate::math::fixed_point::format_percentage;
use crate::token::ScaledAmount;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

/// A holder's share of one distribution pool, with the inputs it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionShare {
    pub holder_balance: ScaledAmount,
    pub pool_total: ScaledAmount,
    pub eligible_supply: ScaledAmount,
    /// Settlement-scale amount owed to the holder.
    pub amount: ScaledAmount,
}

impl DistributionShare {
    pub fn compute(
        holder_balance: ScaledAmount,
        pool_total: ScaledAmount,
        eligible_supply: ScaledAmount,
    ) -> Self {
        Self {
            holder_balance,
            pool_total,
            eligible_supply,
            amount: calculate_share(holder_balance, pool_total, eligible_supply),
        }
    }

    /// Holder's fraction of the eligible supply, e.g. `"3.17%"`.
    pub fn ownership_percentage(&self, precision_digits: u8) -> String {
        format_percentage(self.holder_balance, self.eligible_supply, precision_digits)
    }
}

/// Annualized yield estimate, linear extrapolation of one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldEstimate {
    pub annualized_percent: f64,
    pub periods_per_year: u32,
    pub reference_price: f64,
}

impl YieldEstimate {
    pub fn compute(share: &DistributionShare, config: &CalculatorConfig) -> Self {
        Self {
            annualized_percent: calculate_annualized_yield(
                share.pool_total,
                share.holder_balance,
                share.eligible_supply,
                config,
            ),
            periods_per_year: config.periods_per_year,
            reference_price: config.reference_price,
        }
    }

    /// Percentage rounded to `dp` places for display, `None` when it is
    /// outside `Decimal`'s range.
    pub fn rounded(&self, dp: u32) -> Option<Decimal> {
        Decimal::from_f64(self.annualized_percent).map(|d| d.round_dp(dp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitive_types::U256;
    use rust_decimal_macros::dec;

    fn tokens(whole: u64) -> ScaledAmount {
        ScaledAmount(U256::from(whole) * U256::exp10(18))
    }

    #[test]
    fn test_share_and_yield() {
        let share = DistributionShare::compute(
            tokens(10_000),
            ScaledAmount::from(15_000_000_000u64),
            tokens(315_000),
        );
        assert_eq!(share.amount, ScaledAmount::from(476_190_476u64));
        assert_eq!(share.ownership_percentage(2), "3.17%");

        let estimate = YieldEstimate::compute(&share, &CalculatorConfig::default());
        assert_eq!(estimate.periods_per_year, 12);
        assert_eq!(estimate.rounded(2), Some(dec!(57.14)));
    }

    #[test]
    fn test_yield_beyond_decimal_range_has_no_rounded_form() {
        let share = DistributionShare::compute(
            tokens(10_000),
            ScaledAmount::from(15_000_000_000u64),
            tokens(315_000),
        );
        let config = CalculatorConfig::default().with_reference_price(1e-30);

        let estimate = YieldEstimate::compute(&share, &config);
        assert!(estimate.annualized_percent > 1e31);
        assert_eq!(estimate.rounded(2), None);
    }

    #[test]
    fn test_empty_supply() {
        let share =
            DistributionShare::compute(tokens(1), ScaledAmount::from(100u64), ScaledAmount::zero());
        assert_eq!(share.amount, ScaledAmount::zero());
        assert_eq!(share.ownership_percentage(2), "0%");
        assert_eq!(
            YieldEstimate::compute(&share, &CalculatorConfig::default()).rounded(2),
            Some(Decimal::ZERO)
        );
    }
}
