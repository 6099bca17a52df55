use serde::{Deserialize, Serialize};
use std::fmt;

/// The deployed contracts the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractKind {
    /// Snapshotting share token.
    Token,
    /// Stable settlement asset (plain ERC-20).
    SettlementToken,
    RevenueVault,
    Distributor,
    Sale,
}

impl ContractKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContractKind::Token => "token",
            ContractKind::SettlementToken => "settlement token",
            ContractKind::RevenueVault => "revenue vault",
            ContractKind::Distributor => "distributor",
            ContractKind::Sale => "sale",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Access-control roles checked by the contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    DefaultAdmin,
    Snapshot,
    Distributor,
    Pauser,
}

impl Role {
    /// Canonical role name; the transport hashes it to the on-chain id.
    pub fn name(&self) -> &'static str {
        match self {
            Role::DefaultAdmin => "DEFAULT_ADMIN_ROLE",
            Role::Snapshot => "SNAPSHOT_ROLE",
            Role::Distributor => "DISTRIBUTOR_ROLE",
            Role::Pauser => "PAUSER_ROLE",
        }
    }
}
