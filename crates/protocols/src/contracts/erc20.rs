use super::ContractHandle;
use crate::call::CallArg;
use crate::transport::ContractTransport;
use rwa_profit_domain::entities::TxReceipt;
use rwa_profit_domain::enums::ContractKind;
use rwa_profit_domain::validation::{require_address, require_positive_amount};
use rwa_profit_domain::{Result, ScaledAmount};
use std::sync::Arc;

/// Plain ERC-20 adapter, used for the settlement asset.
#[derive(Clone)]
pub struct Erc20Contract {
    handle: ContractHandle,
}

impl Erc20Contract {
    /// Binds the settlement asset at `address`.
    ///
    /// # Errors
    /// Returns `InvalidAddress` if `address` is malformed.
    pub fn new(transport: Arc<dyn ContractTransport>, address: &str) -> Result<Self> {
        Self::with_kind(transport, ContractKind::SettlementToken, address)
    }

    pub(crate) fn with_kind(
        transport: Arc<dyn ContractTransport>,
        kind: ContractKind,
        address: &str,
    ) -> Result<Self> {
        Ok(Self {
            handle: ContractHandle::new(transport, kind, address)?,
        })
    }

    /// Deployed address.
    pub fn address(&self) -> &str {
        self.handle.address()
    }

    pub(crate) fn handle(&self) -> &ContractHandle {
        &self.handle
    }

    /// Balance of `account` in smallest units.
    pub async fn balance_of(&self, account: &str) -> Result<ScaledAmount> {
        require_address(account)?;
        let call = self
            .handle
            .call("balanceOf")
            .arg(CallArg::Address(account.to_string()));
        self.handle
            .read("balance_of", call, |v| v.into_uint().map(ScaledAmount))
            .await
    }

    /// Remaining amount `spender` may move on behalf of `owner`.
    pub async fn allowance(&self, owner: &str, spender: &str) -> Result<ScaledAmount> {
        require_address(owner)?;
        require_address(spender)?;
        let call = self
            .handle
            .call("allowance")
            .arg(CallArg::Address(owner.to_string()))
            .arg(CallArg::Address(spender.to_string()));
        self.handle
            .read("allowance", call, |v| v.into_uint().map(ScaledAmount))
            .await
    }

    pub async fn total_supply(&self) -> Result<ScaledAmount> {
        let call = self.handle.call("totalSupply");
        self.handle
            .read("total_supply", call, |v| v.into_uint().map(ScaledAmount))
            .await
    }

    /// Allows `spender` to move up to `amount` from the signer.
    pub async fn approve(&self, spender: &str, amount: ScaledAmount) -> Result<TxReceipt> {
        require_address(spender)?;
        let call = self
            .handle
            .call("approve")
            .arg(CallArg::Address(spender.to_string()))
            .arg(CallArg::Uint(amount.0));
        self.handle.write("approve", call).await
    }

    /// Moves `amount` from the signer to `to`.
    pub async fn transfer(&self, to: &str, amount: ScaledAmount) -> Result<TxReceipt> {
        require_address(to)?;
        require_positive_amount(&amount.to_string(), amount)?;
        let call = self
            .handle
            .call("transfer")
            .arg(CallArg::Address(to.to_string()))
            .arg(CallArg::Uint(amount.0));
        self.handle.write("transfer", call).await
    }
}
