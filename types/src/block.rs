//! The four classic block kinds of an account chain.
//!
//! Each block carries only the fields that feed its canonical hash. Address
//! fields are resolved to public keys (with checksum verification) when the
//! block is hashed.

use serde::{Deserialize, Serialize};

use crate::{Address, Balance, BlockHash};

/// The type of operation a block represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    /// Account opening block (first block in the chain).
    Open,
    /// Value transfer out of the account.
    Send,
    /// Value transfer into the account.
    Receive,
    /// Change of consensus representative.
    Change,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Send => "send",
            Self::Receive => "receive",
            Self::Change => "change",
        }
    }
}

/// Opens an account by receiving its first `source` send.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenBlock {
    pub source: BlockHash,
    pub representative: Address,
    pub account: Address,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendBlock {
    pub previous: BlockHash,
    pub destination: Address,
    /// Balance remaining after the send.
    pub balance: Balance,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveBlock {
    pub previous: BlockHash,
    /// Hash of the send block being received.
    pub source: BlockHash,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeBlock {
    pub previous: BlockHash,
    pub representative: Address,
}

/// Any of the four block kinds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Open(OpenBlock),
    Send(SendBlock),
    Receive(ReceiveBlock),
    Change(ChangeBlock),
}

impl Block {
    pub fn block_type(&self) -> BlockType {
        match self {
            Self::Open(_) => BlockType::Open,
            Self::Send(_) => BlockType::Send,
            Self::Receive(_) => BlockType::Receive,
            Self::Change(_) => BlockType::Change,
        }
    }
}
