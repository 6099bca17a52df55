//! High-level facade over the deployed contracts.

use crate::config::ContractAddresses;
use crate::contracts::{
    DistributorContract, Erc20Contract, RevenueVaultContract, SaleContract, SnapshotTokenContract,
};
use crate::transport::ContractTransport;
use chrono::Utc;
use rwa_profit_domain::entities::{ClaimResult, Distribution, TxReceipt};
use rwa_profit_domain::enums::ContractKind;
use rwa_profit_domain::metrics::{DistributionShare, YieldEstimate};
use rwa_profit_domain::validation::{require_address, require_positive_amount};
use rwa_profit_domain::value_objects::Amount;
use rwa_profit_domain::{CalculatorConfig, DistributionError, Result, ScaledAmount, SnapshotId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Everything a holder needs to know about one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolderOverview {
    pub holder: String,
    pub snapshot_id: SnapshotId,
    /// Holder balance when the snapshot was taken.
    pub balance: Amount,
    pub distribution: Distribution,
    pub share: DistributionShare,
    /// Settlement amount owed for the snapshot.
    pub share_amount: Amount,
    pub claimed: bool,
    pub claim_open: bool,
    pub yield_estimate: YieldEstimate,
}

/// Transactions sent by [`ProfitDistributionClient::deposit_revenue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositResult {
    /// Present when the vault allowance had to be raised first.
    pub approval: Option<TxReceipt>,
    pub deposit: TxReceipt,
}

/// Transactions sent by [`ProfitDistributionClient::buy_tokens`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseResult {
    /// Settlement cost charged by the sale.
    pub cost: Amount,
    pub approval: Option<TxReceipt>,
    pub purchase: TxReceipt,
}

/// Typed access to one deployment of the distribution contracts.
pub struct ProfitDistributionClient {
    config: CalculatorConfig,
    token: SnapshotTokenContract,
    settlement: Erc20Contract,
    vault: RevenueVaultContract,
    distributor: DistributorContract,
    sale: Option<SaleContract>,
}

impl ProfitDistributionClient {
    /// Binds every configured contract to `transport`.
    ///
    /// # Errors
    /// - `InvalidConfig` if a calculator setting is out of range
    /// - `InvalidAddress` if any configured address is malformed
    pub fn new(
        addresses: &ContractAddresses,
        config: CalculatorConfig,
        transport: Arc<dyn ContractTransport>,
    ) -> Result<Self> {
        config.validate()?;

        let sale = match &addresses.sale {
            Some(address) => Some(SaleContract::new(transport.clone(), address)?),
            None => None,
        };

        info!(
            token = %addresses.token,
            distributor = %addresses.distributor,
            has_sale = sale.is_some(),
            "Profit distribution client ready"
        );

        Ok(Self {
            token: SnapshotTokenContract::new(transport.clone(), &addresses.token)?,
            settlement: Erc20Contract::new(transport.clone(), &addresses.settlement_token)?,
            vault: RevenueVaultContract::new(transport.clone(), &addresses.revenue_vault)?,
            distributor: DistributorContract::new(transport, &addresses.distributor)?,
            sale,
            config,
        })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn token(&self) -> &SnapshotTokenContract {
        &self.token
    }

    pub fn settlement(&self) -> &Erc20Contract {
        &self.settlement
    }

    pub fn vault(&self) -> &RevenueVaultContract {
        &self.vault
    }

    pub fn distributor(&self) -> &DistributorContract {
        &self.distributor
    }

    /// The sale adapter.
    ///
    /// # Errors
    /// Returns `NotConfigured` when the deployment has no sale.
    pub fn sale(&self) -> Result<&SaleContract> {
        self.sale.as_ref().ok_or(DistributionError::NotConfigured {
            contract: ContractKind::Sale,
        })
    }

    /// Reads the holder's snapshot balance and the distribution, then
    /// derives the share and the annualized yield locally.
    pub async fn holder_overview(
        &self,
        holder: &str,
        snapshot: SnapshotId,
    ) -> Result<HolderOverview> {
        let balance = self.token.balance_of_at(holder, snapshot).await?;
        let distribution = self.distributor.get_distribution(snapshot).await?;
        let claimed = self.distributor.has_claimed(snapshot, holder).await?;

        let share = DistributionShare::compute(
            balance,
            distribution.total_amount,
            distribution.eligible_supply,
        );
        let yield_estimate = YieldEstimate::compute(&share, &self.config);

        Ok(HolderOverview {
            holder: holder.to_string(),
            snapshot_id: snapshot,
            balance: Amount::new(balance, self.config.primary_asset.decimals),
            share_amount: Amount::new(share.amount, self.config.settlement_asset.decimals),
            claim_open: distribution.is_claim_open(Utc::now()),
            distribution,
            share,
            claimed,
            yield_estimate,
        })
    }

    /// Claims `holder`'s share of `snapshot`.
    ///
    /// The claimable amount is read first and reported in the result; the
    /// contract decides whether the claim is allowed.
    pub async fn claim(&self, snapshot: SnapshotId, holder: &str) -> Result<ClaimResult> {
        let amount = self.distributor.claimable_amount(snapshot, holder).await?;
        let receipt = self.distributor.claim(snapshot).await?;

        info!(
            snapshot = %snapshot,
            amount = %Amount::new(amount, self.config.settlement_asset.decimals),
            tx_hash = %receipt.tx_hash,
            "Claimed distribution"
        );

        Ok(ClaimResult {
            snapshot_id: snapshot,
            amount,
            receipt,
        })
    }

    /// Claims several snapshots one after another.
    ///
    /// Failed claims are logged and skipped; only successful claims are
    /// returned, in input order.
    pub async fn claim_multiple(&self, snapshots: &[SnapshotId], holder: &str) -> Vec<ClaimResult> {
        let mut claimed = Vec::with_capacity(snapshots.len());

        for &snapshot in snapshots {
            match self.claim(snapshot, holder).await {
                Ok(result) => claimed.push(result),
                Err(e) => warn!(
                    snapshot = %snapshot,
                    error = %e,
                    reason = %e.user_message(),
                    "Skipping failed claim"
                ),
            }
        }

        if claimed.len() < snapshots.len() {
            warn!(
                requested = snapshots.len(),
                succeeded = claimed.len(),
                "Batch claim partially failed"
            );
        }
        claimed
    }

    /// Deposits `amount` of the settlement asset into the revenue vault,
    /// raising the vault allowance first when needed.
    ///
    /// # Errors
    /// Returns `InsufficientBalance` before sending anything when the
    /// depositor holds less than `amount`.
    pub async fn deposit_revenue(
        &self,
        depositor: &str,
        amount: ScaledAmount,
    ) -> Result<DepositResult> {
        require_address(depositor)?;
        require_positive_amount(&amount.to_string(), amount)?;

        self.ensure_settlement_balance(depositor, amount).await?;
        let approval = self
            .ensure_allowance(depositor, self.vault.address(), amount)
            .await?;
        let deposit = self.vault.deposit(amount).await?;

        Ok(DepositResult { approval, deposit })
    }

    /// Buys `token_amount` share tokens from the sale.
    ///
    /// # Errors
    /// - `NotConfigured` when the deployment has no sale
    /// - `UnexpectedResponse` when the sale price makes the cost overflow
    /// - `InsufficientBalance` when the buyer cannot cover the cost
    pub async fn buy_tokens(
        &self,
        buyer: &str,
        token_amount: ScaledAmount,
    ) -> Result<PurchaseResult> {
        let sale = self.sale()?;
        require_address(buyer)?;
        require_positive_amount(&token_amount.to_string(), token_amount)?;

        let info = sale.sale_info().await?;
        let cost = info
            .cost_of(token_amount, self.config.primary_asset.decimals)
            .ok_or_else(|| DistributionError::UnexpectedResponse {
                contract: ContractKind::Sale,
                operation: "buy".to_string(),
                reason: format!(
                    "cost of {token_amount} at price {} exceeds 256 bits",
                    info.price_per_token
                ),
            })?;

        self.ensure_settlement_balance(buyer, cost).await?;
        let approval = self.ensure_allowance(buyer, sale.address(), cost).await?;
        let purchase = sale.buy(token_amount).await?;

        Ok(PurchaseResult {
            cost: Amount::new(cost, self.config.settlement_asset.decimals),
            approval,
            purchase,
        })
    }

    /// Takes a token snapshot. Requires the snapshot role.
    pub async fn take_snapshot(&self) -> Result<TxReceipt> {
        self.token.snapshot().await
    }

    /// Creates a distribution of `amount` for a fresh snapshot. Requires
    /// the distributor role.
    pub async fn create_distribution(&self, amount: ScaledAmount) -> Result<TxReceipt> {
        self.distributor.create_distribution(amount).await
    }

    async fn ensure_settlement_balance(&self, account: &str, required: ScaledAmount) -> Result<()> {
        let available = self.settlement.balance_of(account).await?;
        if available < required {
            let decimals = self.config.settlement_asset.decimals;
            return Err(DistributionError::InsufficientBalance {
                asset: self.config.settlement_asset.symbol.clone(),
                required: Amount::new(required, decimals),
                available: Amount::new(available, decimals),
            });
        }
        Ok(())
    }

    async fn ensure_allowance(
        &self,
        owner: &str,
        spender: &str,
        amount: ScaledAmount,
    ) -> Result<Option<TxReceipt>> {
        let allowance = self.settlement.allowance(owner, spender).await?;
        if allowance >= amount {
            return Ok(None);
        }
        self.settlement.approve(spender, amount).await.map(Some)
    }
}
