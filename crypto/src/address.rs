//! Account address coding.
//!
//! Address format: `xrb_` + 52 symbols of public key + 8 symbols of checksum.
//!
//! The 256-bit public key is left-padded with 4 zero bits to 260 bits and split
//! into 52 groups of 5 bits, each mapped through the account alphabet
//! `13456789abcdefghijkmnopqrstuwxyz`. The checksum is the 5-byte Blake2b digest
//! of the public key with its byte order reversed, encoded the same way into 8
//! symbols. Both the padding and the reversed byte order must be reproduced
//! exactly to interoperate with existing addresses.

use xrb_types::address::ACCOUNT_ALPHABET;
use xrb_types::{Address, PublicKey, Result, Seed, XrbError};

use crate::binary::{binary_to_bytes, bytes_to_binary, left_pad};
use crate::hash::blake2b_40;
use crate::keys::derive_keypair;

const SYMBOL_BITS: usize = 5;
/// 52 symbols * 5 bits.
const KEY_BITS: usize = 260;
/// Leading zero bits added to the 256-bit key.
const PADDING_BITS: usize = KEY_BITS - 256;
const CHECKSUM_BITS: usize = 40;

const INVALID_SYMBOL: u8 = 0xFF;

/// Reverse lookup table: ASCII byte -> 5-bit value.
const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID_SYMBOL; 128];
    let mut i = 0;
    while i < 32 {
        table[ACCOUNT_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encode a bit string through the account alphabet, 5 bits per symbol.
///
/// The length must be a multiple of 5 and every character `'0'` or `'1'`.
pub fn encode_bits(bits: &str) -> Result<String> {
    if bits.len() % SYMBOL_BITS != 0 || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(XrbError::InvalidArgument(format!("Invalid bit string {bits}")));
    }
    Ok(encode_groups(bits))
}

fn encode_groups(bits: &str) -> String {
    bits.as_bytes()
        .chunks(SYMBOL_BITS)
        .map(|group| {
            let idx = group
                .iter()
                .fold(0usize, |acc, &b| (acc << 1) | usize::from(b == b'1'));
            ACCOUNT_ALPHABET[idx] as char
        })
        .collect()
}

/// Decode account-alphabet symbols into a bit string, 5 bits per symbol.
pub fn decode_bits(symbols: &str) -> Result<String> {
    let mut bits = String::with_capacity(symbols.len() * SYMBOL_BITS);
    for b in symbols.bytes() {
        let value = DECODE_TABLE
            .get(usize::from(b))
            .copied()
            .unwrap_or(INVALID_SYMBOL);
        if value == INVALID_SYMBOL {
            return Err(XrbError::InvalidArgument(format!("Invalid symbols {symbols}")));
        }
        for shift in (0..SYMBOL_BITS).rev() {
            bits.push(if (value >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }
    Ok(bits)
}

/// The 8-symbol checksum for a public key.
pub fn encoded_checksum(public_key: &PublicKey) -> String {
    let mut checksum = blake2b_40(public_key.as_bytes());
    checksum.reverse();
    let bits = left_pad(&bytes_to_binary(&checksum), CHECKSUM_BITS, '0');
    encode_groups(&bits)
}

/// Encode a public key as an `xrb_` address.
pub fn to_address(public_key: &PublicKey) -> Address {
    let bits = left_pad(&bytes_to_binary(public_key.as_bytes()), KEY_BITS, '0');
    let mut address = String::with_capacity(Address::LEN);
    address.push_str(Address::PREFIX);
    address.push_str(&encode_groups(&bits));
    address.push_str(&encoded_checksum(public_key));
    Address::new(address)
}

/// Encode raw public key bytes, which must be exactly 32 bytes long.
pub fn to_address_bytes(public_key: &[u8]) -> Result<Address> {
    Ok(to_address(&PublicKey::from_slice(public_key)?))
}

/// Recover the public key embedded in an address, verifying its checksum.
pub fn to_public_key(address: &str) -> Result<PublicKey> {
    let address = Address::parse(address).inspect_err(|_| {
        tracing::debug!(address, "rejected malformed address");
    })?;

    let bits = decode_bits(address.encoded_key())?;
    let (padding, key_bits) = bits.split_at(PADDING_BITS);
    if padding.contains('1') {
        tracing::debug!(%address, "rejected address with non-zero padding bits");
        return Err(XrbError::InvalidArgument(format!("Invalid address {address}")));
    }
    let public_key = PublicKey::from_slice(&binary_to_bytes(key_bits)?)?;

    let expected = address.encoded_checksum();
    if encoded_checksum(&public_key) != expected {
        tracing::debug!(%address, "rejected address with bad checksum");
        return Err(XrbError::InvalidArgument(format!("Invalid checksum {expected}")));
    }
    Ok(public_key)
}

/// Validate that an address string is well-formed and its checksum is correct.
pub fn validate_address(address: &str) -> bool {
    to_public_key(address).is_ok()
}

/// Deterministically derive the address at `index` of `seed`.
pub fn create_address(seed: &Seed, index: u32) -> Address {
    let keypair = derive_keypair(seed, index);
    to_address(&keypair.public)
}

/// String-facing form of [`create_address`].
///
/// Fails with `InvalidArgument` if the seed does not match `^[A-Z0-9]{64}$` or
/// the index is negative or does not fit in 32 bits.
pub fn create_address_str(seed: &str, index: i64) -> Result<Address> {
    let seed = Seed::from_hex(seed)?;
    let index = u32::try_from(index)
        .map_err(|_| XrbError::InvalidArgument(format!("Invalid index {index}")))?;
    Ok(create_address(&seed, index))
}
