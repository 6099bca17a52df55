use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal exponent of the primary (snapshotting) token.
pub const PRIMARY_DECIMALS: u8 = 18;

/// Decimal exponent of the stable settlement asset.
pub const SETTLEMENT_DECIMALS: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub address: Option<String>,
}

impl Asset {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            decimals,
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// The snapshotting share token, 18 decimals.
    pub fn primary() -> Self {
        Self::new("RWA", "Revenue Share Token", PRIMARY_DECIMALS)
    }

    /// The stable settlement asset profits are paid in, 6 decimals.
    pub fn settlement() -> Self {
        Self::new("USDC", "USD Coin", SETTLEMENT_DECIMALS)
    }
}

/// Quantity of an asset in its smallest indivisible unit.
///
/// The decimal exponent is not carried here: amounts of different assets
/// share this type, and only the codec and calculator combine them with an
/// explicit exponent.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ScaledAmount(pub U256);

impl ScaledAmount {
    pub fn new(amount: impl Into<U256>) -> Self {
        Self(amount.into())
    }

    pub fn zero() -> Self {
        Self(U256::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Parses a plain base-10 integer (already scaled) such as an RPC result.
    pub fn from_dec_str(text: &str) -> Option<Self> {
        U256::from_dec_str(text).ok().map(Self)
    }
}

impl From<u64> for ScaledAmount {
    fn from(v: u64) -> Self {
        Self(U256::from(v))
    }
}

impl From<u128> for ScaledAmount {
    fn from(v: u128) -> Self {
        Self(U256::from(v))
    }
}

impl From<U256> for ScaledAmount {
    fn from(v: U256) -> Self {
        Self(v)
    }
}

impl fmt::Display for ScaledAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
