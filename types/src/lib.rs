//! Value types for the xrb account/block model.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! seeds, key pairs, addresses, block hashes, balances and the four classic
//! block kinds. It performs format checks only; checksums, derivation and
//! hashing live in `xrb-crypto`.

pub mod address;
pub mod amount;
pub mod block;
pub mod error;
pub mod hash;
pub mod keys;

pub use address::Address;
pub use amount::Balance;
pub use block::{Block, BlockType, ChangeBlock, OpenBlock, ReceiveBlock, SendBlock};
pub use error::{Result, XrbError};
pub use hash::BlockHash;
pub use keys::{KeyPair, PrivateKey, PublicKey, Seed};
