//! WKD lookup token derivation.
//!
//! The server-side filename for a key is the zbase32 encoding of the SHA-1
//! digest of the lowercased local part. zbase32 uses its own alphabet
//! ordering and is not RFC 4648 base32.

use sha1::{Digest, Sha1};

const ALPHABET: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

/// Encode bytes as zbase32, MSB-first in 5-bit groups.
///
/// A trailing partial byte block is right-padded with zero bits only as far
/// as needed to complete the last 5-bit group; no extra symbols are emitted.
/// A 20-byte SHA-1 digest therefore encodes to exactly 32 symbols.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 8 / 5 + 1);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}

/// Derive the WKD lookup token for a local part.
///
/// Total over all UTF-8 input; lowercases before hashing so `ME` and `me`
/// map to the same token.
pub fn lookup_token(local: &str) -> String {
    let digest = Sha1::digest(local.to_lowercase().as_bytes());
    encode(&digest)
}
