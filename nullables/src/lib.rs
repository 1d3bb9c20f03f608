//! Nullable infrastructure for deterministic testing.
//!
//! The only external dependency of the xrb core is the platform's secure
//! random source. This crate provides a test-friendly implementation that:
//! - Returns deterministic values
//! - Can simulate a platform without secure randomness
//!
//! Usage: pass a nullable wherever an `EntropySource` is accepted.

pub mod entropy;

pub use entropy::NullEntropy;
