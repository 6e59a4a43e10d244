//! ECDSA signer bound to a key pair's private key

use std::fmt;

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature, SigningKey};

use crate::encoding::{self, KeyKind};
use crate::keypair::Secp256k1KeyPair;

use super::{message_digest, Signer, SigningError};

// Missing-key pairs still yield a signer; the failure surfaces on the first
// sign call. Malformed keys fail construction instead.
enum KeyState {
    Ready(SigningKey),
    Missing,
}

/// Stateless ECDSA (secp256k1) signer.
///
/// Each `sign` call digests the message with SHA-256 and signs the digest
/// deterministically (RFC 6979), producing DER signature bytes. No state
/// persists between calls.
pub struct Secp256k1Signer {
    state: KeyState,
}

impl Secp256k1Signer {
    /// Bind a signer to `key_pair`'s private key.
    ///
    /// A pair without a private key yields an unusable signer whose every
    /// `sign` call fails with [`SigningError::NoPrivateKey`], so
    /// verifier-only pairs can pass through code paths that unconditionally
    /// request a signer. A private key that fails to decode, or is not a
    /// valid curve scalar, is an immediate error.
    pub fn new(key_pair: &Secp256k1KeyPair) -> Result<Self, SigningError> {
        let Some(encoded) = key_pair.private_key_base58() else {
            return Ok(Self {
                state: KeyState::Missing,
            });
        };

        let raw = encoding::decode(encoded, KeyKind::Private)?;
        let signing_key =
            SigningKey::from_slice(&raw).map_err(|_| SigningError::InvalidScalar)?;

        Ok(Self {
            state: KeyState::Ready(signing_key),
        })
    }
}

impl Signer for Secp256k1Signer {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SigningError> {
        let KeyState::Ready(signing_key) = &self.state else {
            return Err(SigningError::NoPrivateKey);
        };

        let digest = message_digest(message);
        let signature: Signature = signing_key.sign_prehash(&digest)?;

        Ok(signature.to_der().as_bytes().to_vec())
    }
}

// Debug must not leak the private scalar
impl fmt::Debug for Secp256k1Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1Signer")
            .field("ready", &matches!(self.state, KeyState::Ready(_)))
            .finish_non_exhaustive()
    }
}
