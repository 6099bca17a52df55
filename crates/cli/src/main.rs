//! Command Line Interface for the profit distribution calculator.
mod config;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use primitive_types::U256;
use rwa_profit_domain::math::{format_percentage, parse_from_display_string, to_display_string};
use rwa_profit_domain::metrics::{DistributionShare, YieldEstimate};
use rwa_profit_domain::validation::{
    is_valid_positive_amount, is_valid_snapshot_id, is_well_formed_address, is_well_formed_hash,
};
use rwa_profit_domain::{CalculatorConfig, ScaledAmount, classify_remote_error};
use serde_json::{Value, json};
use tracing::debug;

#[derive(Parser)]
#[command(name = "rwa-profit")]
#[command(about = "Offline calculator for RWA profit distributions", long_about = None)]
struct Cli {
    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Flags taking precedence over the `RWA_*` environment variables.
#[derive(Args, Debug, Default)]
struct ConfigOverrides {
    /// Decimals of the share token
    #[arg(long, global = true)]
    primary_decimals: Option<u8>,

    /// Decimals of the settlement asset
    #[arg(long, global = true)]
    settlement_decimals: Option<u8>,

    /// Distribution periods per year
    #[arg(long, global = true)]
    periods_per_year: Option<u32>,

    /// USD price of one whole share token
    #[arg(long, global = true)]
    reference_price: Option<f64>,
}

impl ConfigOverrides {
    /// Applies the flags on top of `base` and checks the result.
    fn resolve(&self, base: CalculatorConfig) -> Result<CalculatorConfig> {
        let config = self.apply(base);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, mut config: CalculatorConfig) -> CalculatorConfig {
        if let Some(d) = self.primary_decimals {
            config.primary_asset.decimals = d;
        }
        if let Some(d) = self.settlement_decimals {
            config.settlement_asset.decimals = d;
        }
        if let Some(p) = self.periods_per_year {
            config.periods_per_year = p;
        }
        if let Some(p) = self.reference_price {
            config.reference_price = p;
        }
        config
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AssetArg {
    /// The snapshotting share token
    Primary,
    /// The settlement asset distributions are paid in
    Settlement,
}

impl AssetArg {
    fn decimals(self, config: &CalculatorConfig) -> u8 {
        match self {
            AssetArg::Primary => config.primary_asset.decimals,
            AssetArg::Settlement => config.settlement_asset.decimals,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ValidateKind {
    SnapshotId,
    Amount,
    Address,
    Hash,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a raw integer amount as a decimal string
    Format {
        /// Amount in smallest units (e.g., 1500000000000000000)
        raw: String,

        /// Asset whose decimals apply
        #[arg(short, long, value_enum, default_value = "primary")]
        asset: AssetArg,
    },
    /// Convert a decimal string into a raw integer amount
    Parse {
        /// Human amount (e.g., 1.5)
        text: String,

        /// Asset whose decimals apply
        #[arg(short, long, value_enum, default_value = "primary")]
        asset: AssetArg,
    },
    /// Format numerator / denominator as a percentage
    Percent {
        numerator: String,
        denominator: String,

        /// Fractional digits to keep
        #[arg(short, long, default_value_t = 2)]
        precision: u8,
    },
    /// Compute a holder's share of a distribution pool
    Share {
        /// Holder balance in share tokens (e.g., 10000)
        #[arg(long)]
        balance: String,

        /// Pool size in settlement units (e.g., 15000)
        #[arg(long)]
        pool: String,

        /// Eligible supply in share tokens (e.g., 315000)
        #[arg(long)]
        supply: String,
    },
    /// Estimate the annualized yield of a holding
    Apy {
        /// Distribution per period in settlement units
        #[arg(long)]
        distribution: String,

        /// Holder balance in share tokens
        #[arg(long)]
        balance: String,

        /// Eligible supply in share tokens
        #[arg(long)]
        supply: String,
    },
    /// Check a value against one of the input validators
    Validate {
        #[arg(value_enum)]
        kind: ValidateKind,
        value: String,
    },
    /// Show the user-facing sentence for a remote failure message
    ExplainError {
        /// Raw failure message; omit for a failure without one
        message: Option<String>,
    },
}

/// Result of one command, rendered as text or JSON.
struct Output {
    text: String,
    json: Value,
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = cli.overrides.resolve(config::from_env()?)?;
    debug!(?config, "Calculator configuration loaded");

    let output = run(&cli.command, &config)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output.json)?);
    } else {
        println!("{}", output.text);
    }
    Ok(())
}

fn run(command: &Commands, config: &CalculatorConfig) -> Result<Output> {
    match command {
        Commands::Format { raw, asset } => {
            let amount = parse_raw(raw)?;
            let decimals = asset.decimals(config);
            let display = to_display_string(amount, decimals);
            Ok(Output {
                text: display.clone(),
                json: json!({
                    "raw": amount.to_string(),
                    "decimals": decimals,
                    "display": display,
                }),
            })
        }
        Commands::Parse { text, asset } => {
            let decimals = asset.decimals(config);
            let amount = parse_from_display_string(text, decimals)?;
            Ok(Output {
                text: amount.to_string(),
                json: json!({ "input": text, "decimals": decimals, "raw": amount.to_string() }),
            })
        }
        Commands::Percent {
            numerator,
            denominator,
            precision,
        } => {
            let numerator = parse_raw(numerator)?;
            let denominator = parse_raw(denominator)?;
            let percent = format_percentage(numerator, denominator, *precision);
            Ok(Output {
                text: percent.clone(),
                json: json!({ "percentage": percent }),
            })
        }
        Commands::Share {
            balance,
            pool,
            supply,
        } => {
            let share = DistributionShare::compute(
                parse_from_display_string(balance, config.primary_asset.decimals)?,
                parse_from_display_string(pool, config.settlement_asset.decimals)?,
                parse_from_display_string(supply, config.primary_asset.decimals)?,
            );
            let display = to_display_string(share.amount, config.settlement_asset.decimals);
            let ownership = share.ownership_percentage(2);
            Ok(Output {
                text: format!(
                    "💰 Share: {} {} ({} of eligible supply)",
                    display, config.settlement_asset.symbol, ownership
                ),
                json: json!({
                    "share": display,
                    "share_raw": share.amount.to_string(),
                    "asset": config.settlement_asset.symbol,
                    "ownership": ownership,
                }),
            })
        }
        Commands::Apy {
            distribution,
            balance,
            supply,
        } => {
            let settlement_decimals = config.settlement_asset.decimals;
            let periodic = parse_from_display_string(distribution, settlement_decimals)?;
            let balance = parse_from_display_string(balance, config.primary_asset.decimals)?;
            let supply = parse_from_display_string(supply, config.primary_asset.decimals)?;

            let share = DistributionShare::compute(balance, periodic, supply);
            let estimate = YieldEstimate::compute(&share, config);
            // Beyond the decimal range the float is shown unrounded.
            let apy = estimate
                .rounded(2)
                .map_or_else(|| estimate.annualized_percent.to_string(), |d| d.to_string());
            Ok(Output {
                text: format!(
                    "📈 Estimated APY: {}% ({} periods/year at ${} per token)",
                    apy, estimate.periods_per_year, estimate.reference_price
                ),
                json: json!({
                    "apy_percent": estimate.annualized_percent,
                    "apy_rounded": apy,
                    "periods_per_year": estimate.periods_per_year,
                    "reference_price": estimate.reference_price,
                }),
            })
        }
        Commands::Validate { kind, value } => {
            let valid = validate(*kind, value, config);
            Ok(Output {
                text: if valid { "✅ valid" } else { "❌ invalid" }.to_string(),
                json: json!({ "kind": format!("{kind:?}"), "value": value, "valid": valid }),
            })
        }
        Commands::ExplainError { message } => {
            let sentence = classify_remote_error(message.as_deref());
            Ok(Output {
                text: sentence.clone(),
                json: json!({ "message": message, "explanation": sentence }),
            })
        }
    }
}

fn validate(kind: ValidateKind, value: &str, config: &CalculatorConfig) -> bool {
    match kind {
        ValidateKind::SnapshotId => U256::from_dec_str(value.trim())
            .map(is_valid_snapshot_id)
            .unwrap_or(false),
        ValidateKind::Amount => parse_from_display_string(value, config.primary_asset.decimals)
            .map(is_valid_positive_amount)
            .unwrap_or(false),
        ValidateKind::Address => is_well_formed_address(value),
        ValidateKind::Hash => is_well_formed_hash(value),
    }
}

fn parse_raw(text: &str) -> Result<ScaledAmount> {
    ScaledAmount::from_dec_str(text.trim())
        .ok_or_else(|| anyhow!("{text:?} is not a base-10 integer below 2^256"))
}
