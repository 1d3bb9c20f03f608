//! Account balance in raw units.
//!
//! Balances are fixed-point integers (u128) to avoid floating-point errors.
//! The network's entire supply fits in 128 bits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An account balance in raw units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Balance(u128);

impl Balance {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    /// The canonical 16-byte big-endian wire encoding.
    pub fn to_be_bytes(&self) -> [u8; 16] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
