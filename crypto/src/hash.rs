//! Blake2b hashing for key derivation, checksums and blocks.

use blake2::digest::consts::{U32, U5};
use blake2::digest::{Update, VariableOutput};
use blake2::{Blake2b, Blake2b512, Blake2bVar, Digest};
use xrb_types::{Result, XrbError};

type Blake2b256 = Blake2b<U32>;
type Blake2b40 = Blake2b<U5>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    blake2b_256_multi(&[data])
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        Digest::update(&mut hasher, part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute a 512-bit Blake2b hash, used to expand Ed25519 private keys.
pub fn blake2b_512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Blake2b512::new();
    Digest::update(&mut hasher, data);
    let result = hasher.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

/// Compute an `n`-byte Blake2b digest (1..=64).
///
/// The output length is a Blake2b parameter, so a 5-byte digest is not a prefix
/// of the 32-byte one.
pub fn blake2b_digest(n: usize, data: &[u8]) -> Result<Vec<u8>> {
    // Blake2bVar::new rejects lengths above 64 but accepts zero.
    if n == 0 {
        return Err(XrbError::InvalidArgument(format!("Invalid digest length {n}")));
    }
    let mut hasher = Blake2bVar::new(n)
        .map_err(|_| XrbError::InvalidArgument(format!("Invalid digest length {n}")))?;
    hasher.update(data);
    let mut out = vec![0u8; n];
    hasher
        .finalize_variable(&mut out)
        .map_err(|_| XrbError::InvalidArgument(format!("Invalid digest length {n}")))?;
    Ok(out)
}

/// 5-byte Blake2b digest used for address checksums.
pub(crate) fn blake2b_40(data: &[u8]) -> [u8; 5] {
    let mut hasher = Blake2b40::new();
    Digest::update(&mut hasher, data);
    let result = hasher.finalize();
    let mut output = [0u8; 5];
    output.copy_from_slice(&result);
    output
}
