//! Scripted in-memory transport for adapter and client tests.

use crate::call::{CallValue, ContractCall};
use crate::transport::{ContractTransport, TransportError};
use async_trait::async_trait;
use rwa_profit_domain::entities::TxReceipt;
use std::collections::HashMap;
use std::sync::Mutex;

/// Answers calls by `contract.method(args)` key and records everything sent.
#[derive(Default)]
pub(crate) struct MockTransport {
    reads: Mutex<HashMap<String, Result<CallValue, TransportError>>>,
    writes: Mutex<HashMap<String, Result<TxReceipt, TransportError>>>,
    sent: Mutex<Vec<String>>,
    read_log: Mutex<Vec<String>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, key: &str, value: CallValue) {
        self.reads
            .lock()
            .unwrap()
            .insert(key.to_string(), Ok(value));
    }

    pub(crate) fn fail_read(&self, key: &str, error: TransportError) {
        self.reads
            .lock()
            .unwrap()
            .insert(key.to_string(), Err(error));
    }

    pub(crate) fn receipt(&self, key: &str, receipt: TxReceipt) {
        self.writes
            .lock()
            .unwrap()
            .insert(key.to_string(), Ok(receipt));
    }

    pub(crate) fn fail_write(&self, key: &str, error: TransportError) {
        self.writes
            .lock()
            .unwrap()
            .insert(key.to_string(), Err(error));
    }

    /// Keys of every write, in submission order.
    pub(crate) fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    /// Keys of every read, in call order.
    pub(crate) fn reads(&self) -> Vec<String> {
        self.read_log.lock().unwrap().clone()
    }

    /// Hash that a default receipt for the `n`-th write carries.
    pub(crate) fn tx_hash(n: usize) -> String {
        format!("0x{n:064x}")
    }
}

#[async_trait]
impl ContractTransport for MockTransport {
    async fn call(&self, call: &ContractCall) -> Result<CallValue, TransportError> {
        let key = call.to_string();
        self.read_log.lock().unwrap().push(key.clone());
        self.reads
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::new(format!("no response for {key}"))))
    }

    async fn send(&self, call: &ContractCall) -> Result<TxReceipt, TransportError> {
        let key = call.to_string();
        let n = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(key.clone());
            sent.len()
        };
        self.writes
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(TxReceipt::success(Self::tx_hash(n), 100 + n as u64)))
    }
}
