//! secp256k1 key pairs for linked-data signatures
//!
//! This crate provides the key-pair side of the
//! `EcdsaSecp256k1VerificationKey2019` suite: key generation, base58 key
//! encoding, ECDSA (SHA-256, DER) signing and verification, export of a
//! verification-method descriptor, and multibase key fingerprints. The
//! linked-data proof framework that consumes signers and verifiers lives
//! outside this crate.

pub mod encoding;
pub mod keypair;
pub mod signing;

use thiserror::Error;

pub use encoding::{DecodeError, KeyKind};
pub use keypair::fingerprint::{FingerprintError, FingerprintVerification};
pub use keypair::{KeyPairOptions, Secp256k1KeyPair, VerificationMethod, SUITE_ID};
pub use signing::{
    Secp256k1Signer, Secp256k1Verifier, Signer, SigningError, VerificationSetupError, Verifier,
};

/// Main error type for key pair operations
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Encoding error: {0}")]
    Decode(#[from] encoding::DecodeError),

    #[error("Signing error: {0}")]
    Signing(#[from] signing::SigningError),

    #[error("Verifier setup error: {0}")]
    VerificationSetup(#[from] signing::VerificationSetupError),

    #[error("Fingerprint error: {0}")]
    Fingerprint(#[from] keypair::fingerprint::FingerprintError),
}

pub type Result<T> = std::result::Result<T, KeyError>;
