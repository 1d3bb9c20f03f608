//! Canonical block hashing.
//!
//! Each block kind hashes a fixed, ordered concatenation of its fields with
//! Blake2b-256:
//!
//! | Kind    | Fields                                          |
//! |---------|-------------------------------------------------|
//! | open    | source, representative key, account key        |
//! | send    | previous, destination key, balance             |
//! | receive | previous, source                               |
//! | change  | previous, representative key                   |
//!
//! Address fields are resolved to public keys first, so a bad checksum fails
//! the hash with `InvalidArgument`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use xrb_types::{
    Balance, Block, BlockHash, BlockType, ChangeBlock, OpenBlock, ReceiveBlock, Result,
    SendBlock, XrbError,
};

use crate::address::to_public_key;
use crate::hash::blake2b_256_multi;

/// How a send block's balance is rendered to bytes before hashing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceEncoding {
    /// 16 big-endian bytes, the network's wire width.
    #[default]
    Fixed16,
    /// The balance in hex, left-padded to an even digit count, as bytes.
    /// Zero encodes as a single `0x00`.
    Minimal,
}

impl BalanceEncoding {
    pub fn encode(self, balance: Balance) -> Vec<u8> {
        let bytes = balance.to_be_bytes();
        match self {
            Self::Fixed16 => bytes.to_vec(),
            Self::Minimal => {
                let first = bytes
                    .iter()
                    .position(|&b| b != 0)
                    .unwrap_or(bytes.len() - 1);
                bytes[first..].to_vec()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed16 => "fixed16",
            Self::Minimal => "minimal",
        }
    }
}

impl fmt::Display for BalanceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BalanceEncoding {
    type Err = XrbError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fixed16" => Ok(Self::Fixed16),
            "minimal" => Ok(Self::Minimal),
            _ => Err(XrbError::InvalidArgument(format!(
                "Invalid balance encoding {s}"
            ))),
        }
    }
}

/// Computes block hashes under a chosen balance encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockHasher {
    balance_encoding: BalanceEncoding,
}

impl BlockHasher {
    pub fn new(balance_encoding: BalanceEncoding) -> Self {
        Self { balance_encoding }
    }

    pub fn balance_encoding(&self) -> BalanceEncoding {
        self.balance_encoding
    }

    pub fn hash_open(&self, block: &OpenBlock) -> Result<BlockHash> {
        let representative = to_public_key(block.representative.as_str())?;
        let account = to_public_key(block.account.as_str())?;
        Ok(digest(
            BlockType::Open,
            &[
                block.source.as_bytes(),
                representative.as_bytes(),
                account.as_bytes(),
            ],
        ))
    }

    pub fn hash_send(&self, block: &SendBlock) -> Result<BlockHash> {
        let destination = to_public_key(block.destination.as_str())?;
        let balance = self.balance_encoding.encode(block.balance);
        Ok(digest(
            BlockType::Send,
            &[block.previous.as_bytes(), destination.as_bytes(), balance.as_slice()],
        ))
    }

    pub fn hash_receive(&self, block: &ReceiveBlock) -> Result<BlockHash> {
        Ok(digest(
            BlockType::Receive,
            &[block.previous.as_bytes(), block.source.as_bytes()],
        ))
    }

    pub fn hash_change(&self, block: &ChangeBlock) -> Result<BlockHash> {
        let representative = to_public_key(block.representative.as_str())?;
        Ok(digest(
            BlockType::Change,
            &[block.previous.as_bytes(), representative.as_bytes()],
        ))
    }

    pub fn hash(&self, block: &Block) -> Result<BlockHash> {
        match block {
            Block::Open(b) => self.hash_open(b),
            Block::Send(b) => self.hash_send(b),
            Block::Receive(b) => self.hash_receive(b),
            Block::Change(b) => self.hash_change(b),
        }
    }
}

fn digest(block_type: BlockType, parts: &[&[u8]]) -> BlockHash {
    let hash = BlockHash::new(blake2b_256_multi(parts));
    tracing::debug!(block_type = block_type.as_str(), %hash, "hashed block");
    hash
}

/// Hash a block with the default balance encoding.
pub fn hash_block(block: &Block) -> Result<BlockHash> {
    BlockHasher::default().hash(block)
}

/// Hash an open block given the source hash in hex and two addresses.
pub fn hash_open_block(source: &str, representative: &str, account: &str) -> Result<BlockHash> {
    let source = BlockHash::from_hex(source)?;
    let representative = to_public_key(representative)?;
    let account = to_public_key(account)?;
    Ok(digest(
        BlockType::Open,
        &[
            source.as_bytes(),
            representative.as_bytes(),
            account.as_bytes(),
        ],
    ))
}

/// Hash a send block with the default balance encoding.
pub fn hash_send_block(previous: &str, destination: &str, balance: u128) -> Result<BlockHash> {
    let previous = BlockHash::from_hex(previous)?;
    let destination = to_public_key(destination)?;
    let balance = BalanceEncoding::default().encode(Balance::new(balance));
    Ok(digest(
        BlockType::Send,
        &[previous.as_bytes(), destination.as_bytes(), balance.as_slice()],
    ))
}

pub fn hash_receive_block(previous: &str, source: &str) -> Result<BlockHash> {
    let previous = BlockHash::from_hex(previous)?;
    let source = BlockHash::from_hex(source)?;
    Ok(digest(
        BlockType::Receive,
        &[previous.as_bytes(), source.as_bytes()],
    ))
}

pub fn hash_change_block(previous: &str, representative: &str) -> Result<BlockHash> {
    let previous = BlockHash::from_hex(previous)?;
    let representative = to_public_key(representative)?;
    Ok(digest(
        BlockType::Change,
        &[previous.as_bytes(), representative.as_bytes()],
    ))
}
