//! Multibase key fingerprints
//!
//! A fingerprint is the base58btc multibase text (`z` prefix) of the
//! multicodec-tagged compressed public key. The `secp256k1-pub` multicodec
//! entry is `0xe7`, which varint-encodes to the two bytes `0xe7 0x01`.

use thiserror::Error;

use crate::encoding::{self, DecodeError, KeyKind};

/// Varint-encoded multicodec tag for a compressed secp256k1 public key.
pub const MULTICODEC_SECP256K1_PUB: [u8; 2] = [0xe7, 0x01];

/// Multibase prefix marking base58btc text.
pub const MULTIBASE_BASE58_BTC: char = 'z';

#[derive(Error, Debug)]
pub enum FingerprintError {
    #[error("key pair has no public key")]
    MissingPublicKey,

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Outcome of a fingerprint check. Callers branch on `valid` instead of
/// handling errors; `error` carries the reason when the check fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintVerification {
    pub valid: bool,
    pub error: Option<String>,
}

impl FingerprintVerification {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn fail(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(reason.into()),
        }
    }
}

/// Derive the fingerprint for a base58 public key encoding.
pub fn from_public_key(public_key_base58: &str) -> Result<String, DecodeError> {
    let raw = encoding::decode(public_key_base58, KeyKind::Public)?;

    let mut tagged = Vec::with_capacity(MULTICODEC_SECP256K1_PUB.len() + raw.len());
    tagged.extend_from_slice(&MULTICODEC_SECP256K1_PUB);
    tagged.extend_from_slice(&raw);

    Ok(format!(
        "{}{}",
        MULTIBASE_BASE58_BTC,
        encoding::encode(&tagged)
    ))
}

/// Check `fingerprint` against a stored public key encoding.
pub fn verify(public_key_base58: Option<&str>, fingerprint: &str) -> FingerprintVerification {
    let Some(public_key) = public_key_base58 else {
        return FingerprintVerification::fail("key pair has no public key");
    };

    let Some(tagged_text) = fingerprint.strip_prefix(MULTIBASE_BASE58_BTC) else {
        return FingerprintVerification::fail("fingerprint must be multibase base58btc ('z')");
    };

    let tagged = match bs58::decode(tagged_text).into_vec() {
        Ok(bytes) => bytes,
        Err(err) => {
            return FingerprintVerification::fail(format!("fingerprint is not valid base58: {err}"))
        }
    };

    if tagged.len() < MULTICODEC_SECP256K1_PUB.len()
        || tagged[..MULTICODEC_SECP256K1_PUB.len()] != MULTICODEC_SECP256K1_PUB
    {
        return FingerprintVerification::fail("fingerprint has the wrong multicodec tag");
    }

    let raw = match encoding::decode(public_key, KeyKind::Public) {
        Ok(bytes) => bytes,
        Err(err) => return FingerprintVerification::fail(err.to_string()),
    };

    if tagged[MULTICODEC_SECP256K1_PUB.len()..] != raw[..] {
        return FingerprintVerification::fail("fingerprint does not match the public key");
    }

    FingerprintVerification::ok()
}
