//! Nullable entropy — deterministic seed material.

use std::sync::atomic::{AtomicUsize, Ordering};

use xrb_crypto::EntropySource;
use xrb_types::{Result, XrbError};

/// A deterministic entropy source for testing.
///
/// Returns pre-configured 32-byte values in order, cycling when exhausted.
/// An empty sequence behaves like a platform with no secure generator.
pub struct NullEntropy {
    outputs: Vec<[u8; 32]>,
    index: AtomicUsize,
}

impl NullEntropy {
    /// Create with a sequence of deterministic values.
    pub fn new(outputs: Vec<[u8; 32]>) -> Self {
        Self {
            outputs,
            index: AtomicUsize::new(0),
        }
    }

    /// Create with a single value that will be returned for every call.
    pub fn constant(value: [u8; 32]) -> Self {
        Self::new(vec![value])
    }

    /// A source that always fails with `PlatformUnsupported`.
    pub fn unavailable() -> Self {
        Self::new(Vec::new())
    }

    /// Number of fills served so far.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

impl EntropySource for NullEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        if self.outputs.is_empty() {
            return Err(XrbError::PlatformUnsupported(
                "Seed generation not supported".into(),
            ));
        }
        let current = self.index.fetch_add(1, Ordering::SeqCst) % self.outputs.len();
        let value = &self.outputs[current];
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = value[i % value.len()];
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "null-entropy"
    }
}
