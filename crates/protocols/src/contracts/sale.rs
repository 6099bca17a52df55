use super::ContractHandle;
use crate::call::{CallArg, CallValue, ShapeError};
use crate::transport::ContractTransport;
use rwa_profit_domain::entities::{SaleInfo, TxReceipt};
use rwa_profit_domain::enums::ContractKind;
use rwa_profit_domain::validation::require_positive_amount;
use rwa_profit_domain::{Result, ScaledAmount};
use std::sync::Arc;

/// Adapter for the primary sale selling share tokens for the settlement
/// asset.
#[derive(Clone)]
pub struct SaleContract {
    handle: ContractHandle,
}

impl SaleContract {
    pub fn new(transport: Arc<dyn ContractTransport>, address: &str) -> Result<Self> {
        Ok(Self {
            handle: ContractHandle::new(transport, ContractKind::Sale, address)?,
        })
    }

    pub fn address(&self) -> &str {
        self.handle.address()
    }

    /// `(pricePerToken, tokensSold, saleCap, active)`.
    pub async fn sale_info(&self) -> Result<SaleInfo> {
        let call = self.handle.call("saleInfo");
        self.handle.read("sale_info", call, decode_sale_info).await
    }

    /// Buys `token_amount` share tokens; the sale pulls the cost from the
    /// signer, so an allowance must be in place.
    pub async fn buy(&self, token_amount: ScaledAmount) -> Result<TxReceipt> {
        require_positive_amount(&token_amount.to_string(), token_amount)?;
        let call = self
            .handle
            .call("buyTokens")
            .arg(CallArg::Uint(token_amount.0));
        self.handle.write("buy", call).await
    }
}

fn decode_sale_info(value: CallValue) -> std::result::Result<SaleInfo, ShapeError> {
    let mut fields = value.into_tuple(4)?.into_iter();
    let mut next = || fields.next().unwrap_or(CallValue::Bool(false));

    Ok(SaleInfo {
        price_per_token: ScaledAmount(next().into_uint()?),
        tokens_sold: ScaledAmount(next().into_uint()?),
        sale_cap: ScaledAmount(next().into_uint()?),
        active: next().into_bool()?,
    })
}
