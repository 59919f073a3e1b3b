//! # Token Decoder
//!
//! Splits the raw header string into its structural fields.
//!
//! The wire format is an 82-byte tail appended to an otherwise opaque
//! string. Extraction is byte-oriented and clamping: a shorter input yields
//! a shorter tail without error, and a failure only surfaces at the hex
//! stage when a fixed-size window cannot be filled. The version window is
//! not hex and carries no checks, so it clamps all the way down to empty:
//! only the first 80 tail bytes are required.
//!
//! Layout of the tail (offsets in bytes):
//!
//! | Offset | Len | Field        | Encoding                         |
//! |--------|-----|--------------|----------------------------------|
//! | 0      | 40  | client_data  | raw bytes                        |
//! | 0      | 32  | client_hash  | hex -> 16 bytes                  |
//! | 32     | 8   | client_time  | hex -> 4 bytes, little-endian u32 |
//! | 40     | 40  | expected_mac | hex -> 20 bytes                  |
//! | 80     | 0-2 | version      | raw, clamped, unused             |

use crate::domain::entities::DecodedToken;
use crate::domain::errors::TokenError;

/// Number of trailing bytes carrying the token structure.
pub const TOKEN_TAIL_LEN: usize = 82;

/// Extract and decode the structural fields from a raw token string.
///
/// # Errors
///
/// Returns [`TokenError::MalformedToken`] when any checked window is short
/// or its hex content does not decode. The raw `hex` error type never
/// escapes. The trailing version window is exempt: it takes whatever bytes
/// exist past offset 80, including none.
pub fn split_token(raw: &str) -> Result<DecodedToken, TokenError> {
    let bytes = raw.as_bytes();
    let tail = &bytes[bytes.len().saturating_sub(TOKEN_TAIL_LEN)..];

    Ok(DecodedToken {
        client_data: raw_window(tail, 0, 40)?,
        client_hash: hex_window(tail, 0, 32)?,
        client_time: u32::from_le_bytes(hex_window(tail, 32, 8)?),
        expected_mac: hex_window(tail, 40, 40)?,
        version: tail.get(80..).unwrap_or_default().to_vec(),
    })
}

/// Copy a raw window of the tail into a fixed array.
fn raw_window<const N: usize>(
    tail: &[u8],
    offset: usize,
    len: usize,
) -> Result<[u8; N], TokenError> {
    debug_assert_eq!(N, len);
    tail.get(offset..offset + len)
        .and_then(|window| window.try_into().ok())
        .ok_or(TokenError::MalformedToken)
}

/// Hex-decode a window of the tail into a fixed array of half its length.
fn hex_window<const N: usize>(
    tail: &[u8],
    offset: usize,
    len: usize,
) -> Result<[u8; N], TokenError> {
    debug_assert_eq!(N * 2, len);
    let window = tail
        .get(offset..offset + len)
        .ok_or(TokenError::MalformedToken)?;
    let decoded = hex::decode(window).map_err(|_| TokenError::MalformedToken)?;
    decoded.try_into().map_err(|_| TokenError::MalformedToken)
}
