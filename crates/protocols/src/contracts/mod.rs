//! Typed adapters for the deployed distribution contracts.
//!
//! Each adapter validates its inputs, builds a [`ContractCall`], hands it to
//! the transport and decodes the answer:
//! - Settlement asset (plain ERC-20)
//! - Snapshotting share token
//! - Revenue vault
//! - Distributor
//! - Primary sale

/// Distributor adapter.
pub mod distributor;
/// Settlement asset adapter.
pub mod erc20;
/// Sale adapter.
pub mod sale;
/// Share token adapter.
pub mod token;
/// Revenue vault adapter.
pub mod vault;

pub use distributor::DistributorContract;
pub use erc20::Erc20Contract;
pub use sale::SaleContract;
pub use token::SnapshotTokenContract;
pub use vault::RevenueVaultContract;

use crate::call::{CallValue, ContractCall, ShapeError};
use crate::transport::ContractTransport;
use rwa_profit_domain::entities::TxReceipt;
use rwa_profit_domain::enums::ContractKind;
use rwa_profit_domain::validation::{is_well_formed_hash, require_address};
use rwa_profit_domain::{DistributionError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A contract address bound to a transport.
#[derive(Clone)]
pub(crate) struct ContractHandle {
    transport: Arc<dyn ContractTransport>,
    kind: ContractKind,
    address: String,
}

impl ContractHandle {
    pub(crate) fn new(
        transport: Arc<dyn ContractTransport>,
        kind: ContractKind,
        address: &str,
    ) -> Result<Self> {
        require_address(address)?;
        Ok(Self {
            transport,
            kind,
            address: address.to_string(),
        })
    }

    pub(crate) fn address(&self) -> &str {
        &self.address
    }

    pub(crate) fn call(&self, method: &'static str) -> ContractCall {
        ContractCall::new(self.kind, &self.address, method)
    }

    /// Executes a read call and decodes the result with `decode`.
    pub(crate) async fn read<T>(
        &self,
        operation: &str,
        call: ContractCall,
        decode: impl FnOnce(CallValue) -> std::result::Result<T, ShapeError>,
    ) -> Result<T> {
        debug!(call = %call, "Reading contract state");

        let value = self
            .transport
            .call(&call)
            .await
            .map_err(|e| self.remote_failure(operation, e.message))?;

        decode(value).map_err(|e| DistributionError::UnexpectedResponse {
            contract: self.kind,
            operation: operation.to_string(),
            reason: e.to_string(),
        })
    }

    /// Submits a write call; a reverted receipt is reported as a failure.
    pub(crate) async fn write(&self, operation: &str, call: ContractCall) -> Result<TxReceipt> {
        info!(call = %call, "Sending transaction");

        let receipt = self
            .transport
            .send(&call)
            .await
            .map_err(|e| self.remote_failure(operation, e.message))?;

        if !is_well_formed_hash(&receipt.tx_hash) {
            return Err(DistributionError::UnexpectedResponse {
                contract: self.kind,
                operation: operation.to_string(),
                reason: format!("malformed transaction hash {:?}", receipt.tx_hash),
            });
        }

        if !receipt.success {
            warn!(tx_hash = %receipt.tx_hash, call = %call, "Transaction reverted");
            return Err(self.remote_failure(
                operation,
                Some(format!("transaction {} reverted", receipt.tx_hash)),
            ));
        }

        info!(
            tx_hash = %receipt.tx_hash,
            block = receipt.block_number,
            "Transaction confirmed"
        );
        Ok(receipt)
    }

    fn remote_failure(&self, operation: &str, message: Option<String>) -> DistributionError {
        debug!(
            contract = %self.kind,
            operation,
            message = message.as_deref().unwrap_or_default(),
            "Remote call failed"
        );
        DistributionError::RemoteCallFailure {
            contract: self.kind,
            operation: operation.to_string(),
            message,
        }
    }
}
