//! Cryptographic core for xrb accounts.
//!
//! - **Blake2b** for private key derivation, address checksums and block hashes
//! - **Ed25519 with Blake2b-512** for public key generation (the network's scheme)
//! - Address coding with the `xrb_` prefix and the 32-symbol account alphabet
//! - Canonical hashing of open, send, receive and change blocks
//! - Secure random seed generation
//!
//! Every function here is stateless and safe to call from any thread.

pub mod address;
pub mod binary;
pub mod block;
pub mod hash;
pub mod keys;
pub mod seed;

pub use address::{
    create_address, create_address_str, encoded_checksum, to_address, to_address_bytes,
    to_public_key, validate_address,
};
pub use block::{
    hash_block, hash_change_block, hash_open_block, hash_receive_block, hash_send_block,
    BalanceEncoding, BlockHasher,
};
pub use hash::{blake2b_256, blake2b_256_multi, blake2b_512, blake2b_digest};
pub use keys::{derive_keypair, derive_private_key, derive_public_key};
pub use seed::{generate_seed, generate_seed_with, EntropySource, OsEntropy};
