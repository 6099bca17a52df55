use crate::config::CalculatorConfig;
use crate::math::fixed_point::{narrow, to_f64};
use crate::token::ScaledAmount;
use primitive_types::{U256, U512};

/// Calculates a holder's pro-rata share of a distribution pool.
///
/// formula: floor(pool_total * holder_balance / eligible_supply)
///
/// The product is taken in 512 bits before dividing, so no precision is
/// lost to an early division and no 256-bit input can overflow.
///
/// # Arguments
///
/// * `holder_balance` - Holder's token balance at the snapshot (primary scale)
/// * `pool_total` - Settlement amount allocated to the snapshot
/// * `eligible_supply` - Token supply counted toward the distribution
///
/// # Returns
///
/// * `ScaledAmount` - Settlement-scale share; zero when `eligible_supply` is zero
pub fn calculate_share(
    holder_balance: ScaledAmount,
    pool_total: ScaledAmount,
    eligible_supply: ScaledAmount,
) -> ScaledAmount {
    if eligible_supply.is_zero() {
        return ScaledAmount::zero();
    }

    let product = pool_total.0.full_mul(holder_balance.0);
    let share = product / U512::from(eligible_supply.0);
    ScaledAmount(narrow(share).unwrap_or(U256::MAX))
}

/// Estimates the annualized yield, in percent, of holding `holder_balance`
/// through distributions of `periodic_distribution` per period.
///
/// The share of one period is valued in USD (settlement asset at par), the
/// holding at `config.reference_price` per whole token, and the ratio is
/// extrapolated linearly over `config.periods_per_year` with no
/// compounding. It is an estimate, not a promised rate.
///
/// Returns 0 when the holder has no balance, the eligible supply is zero,
/// or the holding is worth nothing at the reference price.
pub fn calculate_annualized_yield(
    periodic_distribution: ScaledAmount,
    holder_balance: ScaledAmount,
    eligible_supply: ScaledAmount,
    config: &CalculatorConfig,
) -> f64 {
    if eligible_supply.is_zero() || holder_balance.is_zero() {
        return 0.0;
    }

    let share = calculate_share(holder_balance, periodic_distribution, eligible_supply);
    let share_usd = to_f64(share, config.settlement_asset.decimals);
    let holder_value_usd =
        to_f64(holder_balance, config.primary_asset.decimals) * config.reference_price;

    if holder_value_usd.is_nan() || holder_value_usd <= 0.0 {
        return 0.0;
    }

    share_usd / holder_value_usd * f64::from(config.periods_per_year) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(whole: u64) -> ScaledAmount {
        ScaledAmount(U256::from(whole) * U256::exp10(18))
    }

    fn usdc(whole: u64) -> ScaledAmount {
        ScaledAmount(U256::from(whole) * U256::exp10(6))
    }

    #[test]
    fn test_calculate_share_reference_scenario() {
        // 10,000 of 315,000 eligible tokens against a 15,000 USDC pool
        let share = calculate_share(tokens(10_000), usdc(15_000), tokens(315_000));
        assert_eq!(share, ScaledAmount::from(476_190_476u64));
    }

    #[test]
    fn test_calculate_share_zero_guards() {
        assert_eq!(
            calculate_share(tokens(5), usdc(100), ScaledAmount::zero()),
            ScaledAmount::zero()
        );
        assert_eq!(
            calculate_share(ScaledAmount::zero(), usdc(100), tokens(1_000)),
            ScaledAmount::zero()
        );
        assert_eq!(
            calculate_share(tokens(5), ScaledAmount::zero(), tokens(1_000)),
            ScaledAmount::zero()
        );
    }

    #[test]
    fn test_calculate_share_never_exceeds_pool() {
        let pool = usdc(15_000);
        let supply = tokens(315_000);
        assert_eq!(calculate_share(supply, pool, supply), pool);

        let max = ScaledAmount(U256::MAX);
        assert_eq!(calculate_share(max, max, max), max);
        assert!(calculate_share(tokens(1), max, tokens(2)) <= max);
    }

    #[test]
    fn test_calculate_share_is_monotonic_in_balance() {
        let pool = ScaledAmount::from(1_000_003u64);
        let supply = ScaledAmount::from(977u64);

        let mut previous = ScaledAmount::zero();
        for balance in 0..=977u64 {
            let share = calculate_share(ScaledAmount::from(balance), pool, supply);
            assert!(share >= previous, "share decreased at balance {balance}");
            previous = share;
        }
        assert_eq!(previous, pool);
    }

    #[test]
    fn test_calculate_share_saturates_on_overflow() {
        let max = ScaledAmount(U256::MAX);
        let share = calculate_share(max, max, ScaledAmount::from(1u64));
        assert_eq!(share, max);
    }

    #[test]
    fn test_annualized_yield_zero_guards() {
        let config = CalculatorConfig::default();
        assert_eq!(
            calculate_annualized_yield(usdc(15_000), ScaledAmount::zero(), tokens(1), &config),
            0.0
        );
        assert_eq!(
            calculate_annualized_yield(usdc(15_000), tokens(1), ScaledAmount::zero(), &config),
            0.0
        );

        let worthless = CalculatorConfig::default().with_reference_price(0.0);
        assert_eq!(
            calculate_annualized_yield(usdc(15_000), tokens(10), tokens(100), &worthless),
            0.0
        );
        let nan = CalculatorConfig::default().with_reference_price(f64::NAN);
        assert_eq!(
            calculate_annualized_yield(usdc(15_000), tokens(10), tokens(100), &nan),
            0.0
        );
    }

    #[test]
    fn test_annualized_yield_reference_scenario() {
        // share 476.190476 USDC on 10,000 tokens priced at 1 USD, monthly
        let config = CalculatorConfig::default();
        let apy =
            calculate_annualized_yield(usdc(15_000), tokens(10_000), tokens(315_000), &config);
        let expected = 476.190476 / 10_000.0 * 12.0 * 100.0;
        assert!((apy - expected).abs() < 1e-9, "apy {apy}");
    }

    #[test]
    fn test_annualized_yield_scales_with_price_and_periods() {
        let base = CalculatorConfig::default();
        let apy = calculate_annualized_yield(usdc(100), tokens(100), tokens(1_000), &base);
        // 10 USDC on 100 USD, twelve periods
        assert!((apy - 120.0).abs() < 1e-9);

        let pricier = CalculatorConfig::default().with_reference_price(2.0);
        let apy = calculate_annualized_yield(usdc(100), tokens(100), tokens(1_000), &pricier);
        assert!((apy - 60.0).abs() < 1e-9);

        let quarterly = CalculatorConfig {
            periods_per_year: 4,
            ..CalculatorConfig::default()
        };
        let apy = calculate_annualized_yield(usdc(100), tokens(100), tokens(1_000), &quarterly);
        assert!((apy - 40.0).abs() < 1e-9);
    }
}
