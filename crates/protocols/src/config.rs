//! Deployed contract addresses.

use rwa_profit_domain::Result;
use rwa_profit_domain::validation::require_address;
use serde::{Deserialize, Serialize};

/// Addresses of one deployment of the distribution contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddresses {
    /// Snapshotting share token.
    pub token: String,
    /// Stable asset the vault and distributor pay out in.
    pub settlement_token: String,
    /// Vault collecting revenue before distribution.
    pub revenue_vault: String,
    /// Distributor holding per-snapshot claim accounting.
    pub distributor: String,
    /// Primary sale contract, when the deployment has one.
    #[serde(default)]
    pub sale: Option<String>,
}

impl ContractAddresses {
    /// Checks every configured address is `0x` + 40 hex digits.
    ///
    /// # Errors
    ///
    /// - [`rwa_profit_domain::DistributionError::InvalidAddress`] naming the
    ///   first malformed address
    pub fn validate(&self) -> Result<()> {
        require_address(&self.token)?;
        require_address(&self.settlement_token)?;
        require_address(&self.revenue_vault)?;
        require_address(&self.distributor)?;
        if let Some(sale) = &self.sale {
            require_address(sale)?;
        }
        Ok(())
    }
}
