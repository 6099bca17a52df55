use super::{ContractHandle, Erc20Contract};
use crate::call::CallArg;
use crate::transport::ContractTransport;
use primitive_types::U256;
use rwa_profit_domain::entities::TxReceipt;
use rwa_profit_domain::enums::{ContractKind, Role};
use rwa_profit_domain::validation::require_address;
use rwa_profit_domain::{Result, ScaledAmount, SnapshotId};
use std::sync::Arc;

/// Adapter for the snapshotting share token.
///
/// Balances and total supply can be read as of any past snapshot; taking a
/// snapshot is gated by [`Role::Snapshot`] on chain.
#[derive(Clone)]
pub struct SnapshotTokenContract {
    erc20: Erc20Contract,
}

impl SnapshotTokenContract {
    /// Binds the share token at `address`.
    pub fn new(transport: Arc<dyn ContractTransport>, address: &str) -> Result<Self> {
        Ok(Self {
            erc20: Erc20Contract::with_kind(transport, ContractKind::Token, address)?,
        })
    }

    pub fn address(&self) -> &str {
        self.erc20.address()
    }

    fn handle(&self) -> &ContractHandle {
        self.erc20.handle()
    }

    /// Plain ERC-20 view of the token.
    pub fn as_erc20(&self) -> &Erc20Contract {
        &self.erc20
    }

    pub async fn balance_of(&self, account: &str) -> Result<ScaledAmount> {
        self.erc20.balance_of(account).await
    }

    pub async fn total_supply(&self) -> Result<ScaledAmount> {
        self.erc20.total_supply().await
    }

    /// Balance of `account` when `snapshot` was taken.
    pub async fn balance_of_at(&self, account: &str, snapshot: SnapshotId) -> Result<ScaledAmount> {
        require_address(account)?;
        let call = self
            .handle()
            .call("balanceOfAt")
            .arg(CallArg::Address(account.to_string()))
            .arg(CallArg::Uint(snapshot.as_u256()));
        self.handle()
            .read("balance_of_at", call, |v| v.into_uint().map(ScaledAmount))
            .await
    }

    /// Total supply when `snapshot` was taken.
    pub async fn total_supply_at(&self, snapshot: SnapshotId) -> Result<ScaledAmount> {
        let call = self
            .handle()
            .call("totalSupplyAt")
            .arg(CallArg::Uint(snapshot.as_u256()));
        self.handle()
            .read("total_supply_at", call, |v| v.into_uint().map(ScaledAmount))
            .await
    }

    /// Latest snapshot id, `None` before the first snapshot.
    pub async fn current_snapshot_id(&self) -> Result<Option<SnapshotId>> {
        let call = self.handle().call("getCurrentSnapshotId");
        let id: U256 = self
            .handle()
            .read("current_snapshot_id", call, |v| v.into_uint())
            .await?;
        Ok(SnapshotId::new(id).ok())
    }

    pub async fn paused(&self) -> Result<bool> {
        let call = self.handle().call("paused");
        self.handle().read("paused", call, |v| v.into_bool()).await
    }

    pub async fn has_role(&self, role: Role, account: &str) -> Result<bool> {
        require_address(account)?;
        let call = self
            .handle()
            .call("hasRole")
            .arg(CallArg::Role(role))
            .arg(CallArg::Address(account.to_string()));
        self.handle().read("has_role", call, |v| v.into_bool()).await
    }

    /// Records a new balance checkpoint.
    pub async fn snapshot(&self) -> Result<TxReceipt> {
        let call = self.handle().call("snapshot");
        self.handle().write("snapshot", call).await
    }

    pub async fn transfer(&self, to: &str, amount: ScaledAmount) -> Result<TxReceipt> {
        self.erc20.transfer(to, amount).await
    }
}
