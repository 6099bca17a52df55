pub mod distribution;
pub mod receipt;
pub mod sale;

pub use distribution::Distribution;
pub use receipt::{ClaimResult, TxReceipt};
pub use sale::SaleInfo;
