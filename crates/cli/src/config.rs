//! Calculator settings read from `.env` and the process environment.

use anyhow::{Context, Result};
use rwa_profit_domain::CalculatorConfig;
use std::env;
use std::str::FromStr;

pub const PRIMARY_DECIMALS_VAR: &str = "RWA_PRIMARY_DECIMALS";
pub const SETTLEMENT_DECIMALS_VAR: &str = "RWA_SETTLEMENT_DECIMALS";
pub const PERIODS_PER_YEAR_VAR: &str = "RWA_PERIODS_PER_YEAR";
pub const REFERENCE_PRICE_VAR: &str = "RWA_REFERENCE_PRICE";

/// Builds the calculator config from the process environment.
pub fn from_env() -> Result<CalculatorConfig> {
    from_lookup(|key| env::var(key).ok())
}

/// Builds the calculator config from `lookup`, starting from the defaults.
/// Unset or blank variables keep their default. Ranges are not checked here
/// since flags may still override a value.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<CalculatorConfig> {
    let mut config = CalculatorConfig::default();

    if let Some(v) = read(&lookup, PRIMARY_DECIMALS_VAR)? {
        config.primary_asset.decimals = v;
    }
    if let Some(v) = read(&lookup, SETTLEMENT_DECIMALS_VAR)? {
        config.settlement_asset.decimals = v;
    }
    if let Some(v) = read(&lookup, PERIODS_PER_YEAR_VAR)? {
        config.periods_per_year = v;
    }
    if let Some(v) = read(&lookup, REFERENCE_PRICE_VAR)? {
        config.reference_price = v;
    }

    Ok(config)
}

fn read<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("invalid {key}={raw:?}")),
        _ => Ok(None),
    }
}
