//! Printable hex form
//!
//! Each byte becomes two lowercase characters, most significant nibble
//! first. Decoding also accepts uppercase digits.

use mysensors_core::{MessageError, MessageResult};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Map the low nibble of `n` to its hex character
#[inline]
pub fn nibble_to_hex(n: u8) -> char {
    DIGITS[(n & 0x0F) as usize] as char
}

/// Map a hex character back to its nibble value
#[inline]
pub fn hex_to_nibble(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Append the hex form of `bytes` to `out`
pub fn encode_into(bytes: &[u8], out: &mut String) {
    out.reserve(bytes.len() * 2);
    for &b in bytes {
        out.push(nibble_to_hex(b >> 4));
        out.push(nibble_to_hex(b));
    }
}

pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    encode_into(bytes, &mut out);
    out
}

/// Rebuild bytes from pairs of hex characters
pub fn decode(text: &str) -> MessageResult<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() / 2);
    let mut high: Option<u8> = None;
    let mut digits = 0usize;

    for (position, found) in text.char_indices() {
        let nibble =
            hex_to_nibble(found).ok_or(MessageError::InvalidHexDigit { position, found })?;
        digits += 1;
        match high.take() {
            Some(h) => out.push((h << 4) | nibble),
            None => high = Some(nibble),
        }
    }

    if high.is_some() {
        return Err(MessageError::OddHexLength(digits));
    }

    Ok(out)
}
