//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for key derivation, address coding and block hashing.
///
/// Every message carries the offending value so callers can report it back
/// verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum XrbError {
    /// Malformed seed, index, address, public key or hash, or a checksum
    /// mismatch. Always raised before any partial computation.
    #[error("{0}")]
    InvalidArgument(String),

    /// The platform offers no cryptographically secure random source.
    #[error("{0}")]
    PlatformUnsupported(String),
}

impl XrbError {
    /// Whether the caller can recover by supplying different input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, XrbError>;
