//! Signing and verification capabilities
//!
//! Signers and verifiers close over decoded key objects, hold no mutable
//! state, and are safe to use concurrently. Messages are digested with
//! SHA-256 before the ECDSA operation; signatures travel as DER bytes.

mod signer;
mod verifier;

pub use signer::Secp256k1Signer;
pub use verifier::Secp256k1Verifier;

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::encoding::DecodeError;

#[derive(Error, Debug)]
pub enum SigningError {
    /// Deferred failure: the signer was built from a pair with no private
    /// key and was then asked to sign.
    #[error("key pair has no private key")]
    NoPrivateKey,

    #[error("private key is malformed: {0}")]
    MalformedPrivateKey(#[from] DecodeError),

    #[error("private key is not a valid secp256k1 scalar")]
    InvalidScalar,

    #[error("ECDSA signing failed: {0}")]
    Signature(#[from] k256::ecdsa::Error),
}

#[derive(Error, Debug)]
pub enum VerificationSetupError {
    #[error("key pair has no public key")]
    MissingPublicKey,

    #[error("public key is malformed: {0}")]
    MalformedPublicKey(#[from] DecodeError),

    #[error("public key is not a valid secp256k1 point")]
    InvalidPoint,
}

/// Capability to sign byte payloads.
pub trait Signer: Send + Sync {
    /// Produce a DER-encoded ECDSA signature over `message`.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SigningError>;
}

/// Capability to verify byte payloads against signatures.
///
/// Verification is total: any malformed or mismatching input is a `false`
/// answer, never an error.
pub trait Verifier: Send + Sync {
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool;
}

/// SHA-256 digest of the message, shared by signing and verification.
pub(crate) fn message_digest(message: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(message);
    hasher.finalize().into()
}
