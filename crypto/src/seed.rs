//! Secure random seed generation.

use xrb_types::{Result, Seed, XrbError};

/// A source of cryptographically secure random bytes.
///
/// Swappable so tests can supply deterministic bytes (see `xrb-nullables`).
pub trait EntropySource {
    /// Fill `buf` entirely, or fail with `PlatformUnsupported`.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;

    fn name(&self) -> &str;
}

/// The operating system's secure random source.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        getrandom::getrandom(buf).map_err(|e| {
            XrbError::PlatformUnsupported(format!("Seed generation not supported: {e}"))
        })
    }

    fn name(&self) -> &str {
        "os"
    }
}

/// Generate a fresh random seed from the operating system's secure source.
pub fn generate_seed() -> Result<Seed> {
    generate_seed_with(&OsEntropy)
}

/// Generate a seed from the given entropy source.
pub fn generate_seed_with<E: EntropySource + ?Sized>(source: &E) -> Result<Seed> {
    let mut bytes = [0u8; 32];
    if let Err(e) = source.fill(&mut bytes) {
        tracing::warn!(source = source.name(), error = %e, "seed generation failed");
        return Err(e);
    }
    let seed = Seed::new(bytes);
    zeroize::Zeroize::zeroize(&mut bytes);
    tracing::debug!(source = source.name(), "generated seed");
    Ok(seed)
}
