//! Typed access to the deployed profit distribution contracts.
//!
//! This crate provides:
//! - Typed contract call objects and decoded return values
//! - The transport seam every remote call goes through
//! - One adapter per deployed contract
//! - A client facade combining reads with the domain calculator

/// Prelude module for convenient imports.
pub mod prelude;

/// Contract call objects.
pub mod call;
/// Client facade.
pub mod client;
/// Deployment addresses.
pub mod config;
/// Contract adapters.
pub mod contracts;
/// Remote transport seam.
pub mod transport;

#[cfg(test)]
mod mock;
