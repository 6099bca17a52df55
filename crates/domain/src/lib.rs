//! Domain model for the tokenized-asset profit distribution client.
//!
//! Everything in this crate is pure: fixed-point amount conversion,
//! pro-rata share and yield arithmetic, input validation, the error
//! taxonomy and the remote error classifier. Nothing here performs I/O.

pub mod classify;
pub mod config;
pub mod entities;
pub mod enums;
pub mod error;
pub mod math;
pub mod metrics;
pub mod snapshot;
pub mod token;
pub mod validation;
pub mod value_objects;

pub use classify::classify_remote_error;
pub use config::CalculatorConfig;
pub use error::{DistributionError, ErrorKind, Result};
pub use snapshot::SnapshotId;
pub use token::{Asset, ScaledAmount};
