//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use rwa_profit_protocols::prelude::*;
//! ```

// Calls
pub use crate::call::{CallArg, CallValue, ContractCall, ShapeError};

// Client
pub use crate::client::{DepositResult, HolderOverview, ProfitDistributionClient, PurchaseResult};

// Config
pub use crate::config::ContractAddresses;

// Contracts
pub use crate::contracts::{
    DistributorContract, Erc20Contract, RevenueVaultContract, SaleContract, SnapshotTokenContract,
};

// Transport
pub use crate::transport::{ContractTransport, TransportError};
