//! Deterministic account key derivation.
//!
//! `private = Blake2b-256(seed || index as 4 big-endian bytes)`, and the public
//! key is Ed25519 scalar multiplication with Blake2b-512 (not SHA-512) as the
//! expansion hash, matching the network's reference implementation.

use ed25519_dalek::hazmat::ExpandedSecretKey;
use ed25519_dalek::VerifyingKey;
use xrb_types::{KeyPair, PrivateKey, PublicKey, Seed};
use zeroize::Zeroize;

use crate::hash::{blake2b_256_multi, blake2b_512};

/// Derive the private key at `index` of `seed`.
///
/// Same seed and index always yield the same key, which is what makes wallet
/// recovery from a seed possible.
pub fn derive_private_key(seed: &Seed, index: u32) -> PrivateKey {
    PrivateKey(blake2b_256_multi(&[seed.as_bytes(), &index.to_be_bytes()]))
}

/// Derive the public key from a private key.
pub fn derive_public_key(private: &PrivateKey) -> PublicKey {
    let mut expanded = blake2b_512(private.as_bytes());
    let secret = ExpandedSecretKey::from_bytes(&expanded);
    expanded.zeroize();
    let verifying_key = VerifyingKey::from(&secret);
    PublicKey(verifying_key.to_bytes())
}

/// Derive the full key pair at `index` of `seed`.
pub fn derive_keypair(seed: &Seed, index: u32) -> KeyPair {
    let private = derive_private_key(seed, index);
    let public = derive_public_key(&private);
    tracing::debug!(index, public_key = %public, "derived account key pair");
    KeyPair { public, private }
}
