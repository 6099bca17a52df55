use super::ContractHandle;
use crate::call::CallArg;
use crate::transport::ContractTransport;
use rwa_profit_domain::entities::TxReceipt;
use rwa_profit_domain::enums::ContractKind;
use rwa_profit_domain::validation::require_positive_amount;
use rwa_profit_domain::{Result, ScaledAmount};
use std::sync::Arc;

/// Adapter for the revenue vault that collects settlement-asset revenue
/// before it is released to the distributor.
#[derive(Clone)]
pub struct RevenueVaultContract {
    handle: ContractHandle,
}

impl RevenueVaultContract {
    pub fn new(transport: Arc<dyn ContractTransport>, address: &str) -> Result<Self> {
        Ok(Self {
            handle: ContractHandle::new(transport, ContractKind::RevenueVault, address)?,
        })
    }

    pub fn address(&self) -> &str {
        self.handle.address()
    }

    /// Settlement balance currently held by the vault.
    pub async fn balance(&self) -> Result<ScaledAmount> {
        let call = self.handle.call("vaultBalance");
        self.handle
            .read("balance", call, |v| v.into_uint().map(ScaledAmount))
            .await
    }

    /// Revenue deposited over the vault's lifetime.
    pub async fn total_deposited(&self) -> Result<ScaledAmount> {
        let call = self.handle.call("totalDeposited");
        self.handle
            .read("total_deposited", call, |v| v.into_uint().map(ScaledAmount))
            .await
    }

    /// Address the vault releases funds to.
    pub async fn distributor(&self) -> Result<String> {
        let call = self.handle.call("distributor");
        self.handle
            .read("distributor", call, |v| v.into_address())
            .await
    }

    /// Pulls `amount` of the settlement asset from the signer; requires a
    /// prior allowance.
    pub async fn deposit(&self, amount: ScaledAmount) -> Result<TxReceipt> {
        require_positive_amount(&amount.to_string(), amount)?;
        let call = self
            .handle
            .call("depositRevenue")
            .arg(CallArg::Uint(amount.0));
        self.handle.write("deposit", call).await
    }

    /// Moves `amount` to the distributor. Role-gated on chain.
    pub async fn release_to_distributor(&self, amount: ScaledAmount) -> Result<TxReceipt> {
        require_positive_amount(&amount.to_string(), amount)?;
        let call = self
            .handle
            .call("releaseToDistributor")
            .arg(CallArg::Uint(amount.0));
        self.handle.write("release_to_distributor", call).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::CallValue;
    use crate::mock::MockTransport;
    use primitive_types::U256;
    use rwa_profit_domain::ErrorKind;

    const VAULT: &str = "0x3000000000000000000000000000000000000003";
    const DISTRIBUTOR: &str = "0x4000000000000000000000000000000000000004";

    #[tokio::test]
    async fn test_reads() {
        let transport = Arc::new(MockTransport::new());
        transport.respond("revenue vault.vaultBalance()", CallValue::Uint(U256::from(7)));
        transport.respond(
            "revenue vault.totalDeposited()",
            CallValue::Uint(U256::from(45_000_000_000u64)),
        );
        transport.respond(
            "revenue vault.distributor()",
            CallValue::Address(DISTRIBUTOR.to_string()),
        );
        let vault = RevenueVaultContract::new(transport, VAULT).unwrap();

        assert_eq!(vault.balance().await.unwrap(), ScaledAmount::from(7u64));
        assert_eq!(
            vault.total_deposited().await.unwrap(),
            ScaledAmount::from(45_000_000_000u64)
        );
        assert_eq!(vault.distributor().await.unwrap(), DISTRIBUTOR);
    }

    #[tokio::test]
    async fn test_reverted_deposit() {
        let transport = Arc::new(MockTransport::new());
        transport.receipt(
            "revenue vault.depositRevenue(5)",
            TxReceipt::failure(format!("0x{}", "e".repeat(64))),
        );
        let vault = RevenueVaultContract::new(transport, VAULT).unwrap();

        let err = vault.deposit(ScaledAmount::from(5u64)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RemoteCallFailure);
        assert!(err.to_string().contains("reverted"));
    }

    #[tokio::test]
    async fn test_malformed_receipt_hash() {
        let transport = Arc::new(MockTransport::new());
        transport.receipt(
            "revenue vault.releaseToDistributor(5)",
            TxReceipt::success("0xabc", 1),
        );
        let vault = RevenueVaultContract::new(transport, VAULT).unwrap();

        let err = vault
            .release_to_distributor(ScaledAmount::from(5u64))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedResponse);
    }
}
