//! Seam to the remote contract transport.
//!
//! Implementations own everything network-facing: ABI encoding, signing,
//! JSON-RPC, timeouts and retries. The adapters in this crate only see
//! typed calls going out and typed values or opaque failures coming back.

use crate::call::{CallValue, ContractCall};
use async_trait::async_trait;
use rwa_profit_domain::entities::TxReceipt;
use thiserror::Error;

/// Opaque failure reported by a transport.
///
/// Only the message is inspected, and only by the remote error classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or("transport error"))]
pub struct TransportError {
    pub message: Option<String>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// A failure that carries no message at all.
    pub fn silent() -> Self {
        Self { message: None }
    }
}

/// Performs calls against deployed contracts.
#[async_trait]
pub trait ContractTransport: Send + Sync {
    /// Executes a read-only call and returns its decoded result.
    async fn call(&self, call: &ContractCall) -> Result<CallValue, TransportError>;

    /// Signs, submits and waits for a state-changing call.
    async fn send(&self, call: &ContractCall) -> Result<TxReceipt, TransportError>;
}
