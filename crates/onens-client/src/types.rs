//! Ledger-side primitive types.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LedgerError;

/// A 20-byte account or contract address, rendered as 0x-prefixed hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The all-zero address, used by the registry to mean "unset".
    pub const ZERO: Address = Address([0u8; 20]);

    /// Parse a 0x-prefixed, 40-hex-digit address.
    pub fn from_hex(s: &str) -> Result<Self, LedgerError> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| LedgerError::Config(format!("address {s:?} missing 0x prefix")))?;
        if digits.len() != 40 {
            return Err(LedgerError::Config(format!(
                "address {s:?} must be 40 hex digits"
            )));
        }
        let raw = hex::decode(digits)
            .map_err(|e| LedgerError::Config(format!("address {s:?}: {e}")))?;
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&raw);
        Ok(Self(bytes))
    }

    /// Render as 0x-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Access the raw 20 bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// True for the all-zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Address {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(D::Error::custom)
    }
}
