//! Typed contract call objects and decoded return values.
//!
//! ABI encoding is the transport's job: a [`ContractCall`] names the
//! method and carries typed arguments, and the transport hands back a
//! [`CallValue`] tree that adapters decode with the shape-checked
//! accessors below.

use chrono::{DateTime, Utc};
use primitive_types::U256;
use rwa_profit_domain::enums::{ContractKind, Role};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single argument of a contract call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallArg {
    /// `uint256`.
    Uint(U256),
    /// `address`, already validated.
    Address(String),
    /// `bytes32` role id, given by canonical name.
    Role(Role),
}

impl fmt::Display for CallArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallArg::Uint(v) => write!(f, "{v}"),
            CallArg::Address(a) => f.write_str(a),
            CallArg::Role(r) => f.write_str(r.name()),
        }
    }
}

/// A read or write against one deployed contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    /// Which contract the call targets.
    pub contract: ContractKind,
    /// Deployed address of that contract.
    pub address: String,
    /// Solidity method name.
    pub method: &'static str,
    /// Positional arguments.
    pub args: Vec<CallArg>,
}

impl ContractCall {
    pub fn new(contract: ContractKind, address: &str, method: &'static str) -> Self {
        Self {
            contract,
            address: address.to_string(),
            method,
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: CallArg) -> Self {
        self.args.push(arg);
        self
    }

    /// `method(arg, ...)`, used for logging and by test transports.
    pub fn signature(&self) -> String {
        let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
        format!("{}({})", self.method, args.join(","))
    }
}

impl fmt::Display for ContractCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.contract, self.signature())
    }
}

/// A value returned by a read call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallValue {
    Uint(U256),
    Bool(bool),
    Address(String),
    Tuple(Vec<CallValue>),
}

/// The returned value did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, got {found}")]
pub struct ShapeError {
    pub expected: String,
    pub found: String,
}

impl ShapeError {
    fn new(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl CallValue {
    pub fn type_name(&self) -> String {
        match self {
            CallValue::Uint(_) => "uint256".to_string(),
            CallValue::Bool(_) => "bool".to_string(),
            CallValue::Address(_) => "address".to_string(),
            CallValue::Tuple(items) => format!("tuple of {}", items.len()),
        }
    }

    pub fn into_uint(self) -> Result<U256, ShapeError> {
        match self {
            CallValue::Uint(v) => Ok(v),
            other => Err(ShapeError::new("uint256", other.type_name())),
        }
    }

    pub fn into_bool(self) -> Result<bool, ShapeError> {
        match self {
            CallValue::Bool(b) => Ok(b),
            other => Err(ShapeError::new("bool", other.type_name())),
        }
    }

    pub fn into_address(self) -> Result<String, ShapeError> {
        match self {
            CallValue::Address(a) => Ok(a),
            other => Err(ShapeError::new("address", other.type_name())),
        }
    }

    /// Unpacks a tuple of exactly `len` elements.
    pub fn into_tuple(self, len: usize) -> Result<Vec<CallValue>, ShapeError> {
        match self {
            CallValue::Tuple(items) if items.len() == len => Ok(items),
            other => Err(ShapeError::new(format!("tuple of {len}"), other.type_name())),
        }
    }

    /// Decodes a `uint256` holding Unix seconds.
    pub fn into_timestamp(self) -> Result<DateTime<Utc>, ShapeError> {
        let secs = self.into_uint()?;
        if secs > U256::from(i64::MAX as u64) {
            return Err(ShapeError::new("unix timestamp", format!("{secs}")));
        }
        DateTime::from_timestamp(secs.low_u64() as i64, 0)
            .ok_or_else(|| ShapeError::new("unix timestamp", format!("{secs}")))
    }
}
