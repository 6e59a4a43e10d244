//! Base58 codec for key material
//!
//! Key text is plain base58btc. Decoding is length-checked per key kind so
//! wrong-kind or truncated material is rejected before it reaches the curve
//! library.

use std::fmt;

use thiserror::Error;

/// Compressed SEC1 point: parity prefix + x-coordinate.
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// Curve-order scalar, leading zeros preserved.
pub const PRIVATE_KEY_LENGTH: usize = 32;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid base58 text: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),

    #[error("Expected {expected} bytes of {kind} key material, got {actual}")]
    InvalidLength {
        kind: KeyKind,
        expected: usize,
        actual: usize,
    },
}

/// Which kind of key material a caller expects to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Public,
    Private,
}

impl KeyKind {
    /// Exact raw byte length this kind must decode to.
    pub const fn expected_length(self) -> usize {
        match self {
            KeyKind::Public => PUBLIC_KEY_LENGTH,
            KeyKind::Private => PRIVATE_KEY_LENGTH,
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Public => write!(f, "public"),
            KeyKind::Private => write!(f, "private"),
        }
    }
}

/// Decode base58 key text into raw bytes, enforcing the length for `kind`.
pub fn decode(text: &str, kind: KeyKind) -> Result<Vec<u8>, DecodeError> {
    let bytes = bs58::decode(text).into_vec()?;
    let expected = kind.expected_length();
    if bytes.len() != expected {
        return Err(DecodeError::InvalidLength {
            kind,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Encode raw key bytes as base58 text.
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}
