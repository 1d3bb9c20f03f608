//! Conversions between hex strings, byte arrays and `'0'`/`'1'` bit strings.
//!
//! Bit strings are most-significant bit first. Hex output is uppercase; hex
//! input is accepted in either case.

use xrb_types::{Result, XrbError};

/// Render bytes as uppercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Parse an even-length hex string into bytes.
pub fn to_byte_array(hex: &str) -> Result<Vec<u8>> {
    hex::decode(hex).map_err(|_| XrbError::InvalidArgument(format!("Invalid hex {hex}")))
}

/// Render bytes as a bit string, 8 bits per byte.
pub fn bytes_to_binary(bytes: &[u8]) -> String {
    let mut bits = String::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for shift in (0..8).rev() {
            bits.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }
    bits
}

/// Render a hex string as a bit string, exactly 4 bits per hex digit.
pub fn to_binary(hex: &str) -> Result<String> {
    let mut bits = String::with_capacity(hex.len() * 4);
    for c in hex.chars() {
        let nibble = c
            .to_digit(16)
            .ok_or_else(|| XrbError::InvalidArgument(format!("Invalid hex {hex}")))?;
        for shift in (0..4).rev() {
            bits.push(if (nibble >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }
    Ok(bits)
}

/// Pack a bit string whose length is a multiple of 8 into bytes.
pub fn binary_to_bytes(bits: &str) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(XrbError::InvalidArgument(format!("Invalid bit string {bits}")));
    }
    bits.as_bytes()
        .chunks(8)
        .map(|chunk| {
            chunk.iter().try_fold(0u8, |acc, &b| match b {
                b'0' => Ok(acc << 1),
                b'1' => Ok((acc << 1) | 1),
                _ => Err(XrbError::InvalidArgument(format!("Invalid bit string {bits}"))),
            })
        })
        .collect()
}

/// Pack a bit string whose length is a multiple of 4 into uppercase hex.
pub fn binary_to_hex(bits: &str) -> Result<String> {
    if bits.len() % 4 != 0 {
        return Err(XrbError::InvalidArgument(format!("Invalid bit string {bits}")));
    }
    bits.as_bytes()
        .chunks(4)
        .map(|chunk| {
            let nibble = chunk.iter().try_fold(0u32, |acc, &b| match b {
                b'0' => Ok(acc << 1),
                b'1' => Ok((acc << 1) | 1),
                _ => Err(XrbError::InvalidArgument(format!("Invalid bit string {bits}"))),
            })?;
            char::from_digit(nibble, 16)
                .map(|c| c.to_ascii_uppercase())
                .ok_or_else(|| XrbError::InvalidArgument(format!("Invalid bit string {bits}")))
        })
        .collect()
}

/// Prepend `pad` until `s` is `width` characters long.
///
/// Never truncates: input already at or beyond `width` is returned unchanged.
pub fn left_pad(s: &str, width: usize, pad: char) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_owned();
    }
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat(pad).take(width - len));
    out.push_str(s);
    out
}
