//! Account address type with `xrb_` prefix.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, XrbError};

/// Account-encoding alphabet: 32 symbols, excludes `0`, `2`, `l` and `v`.
pub const ACCOUNT_ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

/// An account address: `xrb_` + 52 symbols of public key + 8 symbols of checksum.
///
/// Holding an `Address` guarantees the format only. The checksum is verified
/// when the address is resolved to a public key by `xrb_crypto::to_public_key`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Address(String);

impl Address {
    /// The prefix shared by all addresses.
    pub const PREFIX: &'static str = "xrb_";
    /// Symbols encoding the public key (260 bits / 5).
    pub const KEY_SYMBOLS: usize = 52;
    /// Symbols encoding the checksum (40 bits / 5).
    pub const CHECKSUM_SYMBOLS: usize = 8;
    /// Total address length.
    pub const LEN: usize = 4 + Self::KEY_SYMBOLS + Self::CHECKSUM_SYMBOLS;

    /// Wrap an address produced by the encoder.
    ///
    /// # Panics
    /// Panics in debug builds if the string is not well-formed. Use
    /// [`Address::parse`] for untrusted input.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        debug_assert!(Self::is_well_formed(&s), "malformed address {s}");
        Self(s)
    }

    /// Check the format `^xrb_[13456789abcdefghijkmnopqrstuwxyz]{60}$`.
    pub fn parse(raw: &str) -> Result<Self> {
        if !Self::is_well_formed(raw) {
            return Err(XrbError::InvalidArgument(format!("Invalid address {raw}")));
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn is_well_formed(s: &str) -> bool {
        s.len() == Self::LEN
            && s.starts_with(Self::PREFIX)
            && s.as_bytes()[Self::PREFIX.len()..]
                .iter()
                .all(|b| ACCOUNT_ALPHABET.contains(b))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 52 symbols encoding the public key.
    pub fn encoded_key(&self) -> &str {
        &self.0[Self::PREFIX.len()..Self::PREFIX.len() + Self::KEY_SYMBOLS]
    }

    /// The trailing 8 symbols encoding the checksum.
    pub fn encoded_checksum(&self) -> &str {
        &self.0[Self::PREFIX.len() + Self::KEY_SYMBOLS..]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = XrbError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
