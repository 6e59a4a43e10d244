//! ECDSA verifier bound to a key pair's public key

use std::fmt;

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature, VerifyingKey};

use crate::encoding::{self, KeyKind};
use crate::keypair::Secp256k1KeyPair;

use super::{message_digest, VerificationSetupError, Verifier};

/// Stateless ECDSA (secp256k1) verifier.
///
/// `verify` is total: malformed signature bytes, a cryptographic mismatch,
/// or any internal failure all come back as `false`, never as an error.
#[derive(Clone)]
pub struct Secp256k1Verifier {
    verifying_key: VerifyingKey,
}

impl Secp256k1Verifier {
    /// Bind a verifier to `key_pair`'s public key.
    ///
    /// Unlike the signer there is no deferred-failure mode: a verifier
    /// without a public key is meaningless, so an absent or malformed key
    /// fails construction.
    pub fn new(key_pair: &Secp256k1KeyPair) -> Result<Self, VerificationSetupError> {
        let encoded = key_pair
            .public_key_base58()
            .ok_or(VerificationSetupError::MissingPublicKey)?;

        let raw = encoding::decode(encoded, KeyKind::Public)?;
        let verifying_key = VerifyingKey::from_sec1_bytes(&raw)
            .map_err(|_| VerificationSetupError::InvalidPoint)?;

        Ok(Self { verifying_key })
    }
}

impl Verifier for Secp256k1Verifier {
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let signature = match Signature::from_der(signature) {
            Ok(signature) => signature,
            Err(err) => {
                tracing::debug!("rejecting signature that is not valid DER: {err}");
                return false;
            }
        };

        // accept both s forms; k256 only verifies low-s signatures
        let signature = signature.normalize_s().unwrap_or(signature);

        let digest = message_digest(message);
        match self.verifying_key.verify_prehash(&digest, &signature) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!("signature verification failed: {err}");
                false
            }
        }
    }
}

impl fmt::Debug for Secp256k1Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Secp256k1Verifier({})",
            hex::encode(self.verifying_key.to_encoded_point(true).as_bytes())
        )
    }
}
