//! Key pair entity for the `EcdsaSecp256k1VerificationKey2019` suite
//!
//! A [`Secp256k1KeyPair`] holds identity metadata and base58-encoded key
//! material. Construction is lenient: key text is stored verbatim and only
//! validated when a signer or verifier is built from it ("accept now, fail
//! on use"). Fresh pairs come from [`Secp256k1KeyPair::generate`].

pub mod fingerprint;

use std::fmt;

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use serde::{Deserialize, Serialize};

use crate::encoding;
use crate::signing::{Secp256k1Signer, Secp256k1Verifier, SigningError, VerificationSetupError};
use fingerprint::{FingerprintError, FingerprintVerification};

/// Fixed suite identifier; never derived from caller input.
pub const SUITE_ID: &str = "EcdsaSecp256k1VerificationKey2019";

/// Construction input for a key pair, e.g. as loaded from storage.
///
/// A `type` field in the input is accepted for compatibility but ignored;
/// the suite type is always [`SUITE_ID`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyPairOptions {
    pub id: Option<String>,
    pub controller: Option<String>,
    #[serde(rename = "type")]
    pub key_type: Option<String>,
    pub public_key_base58: Option<String>,
    pub private_key_base58: Option<String>,
}

/// A secp256k1 key pair with optional identity metadata.
///
/// Either key field may be absent: a verifier-only pair has no private key,
/// and a pair with neither key is legal but can produce no signer and no
/// verifier.
#[derive(Clone)]
pub struct Secp256k1KeyPair {
    /// Opaque identifier, e.g. a DID URL fragment. Not validated here.
    pub id: Option<String>,

    /// Opaque identifier of the controlling entity.
    pub controller: Option<String>,

    public_key_base58: Option<String>,
    private_key_base58: Option<String>,
}

/// Public-key descriptor for embedding in an external linked-data document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type")]
    pub key_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_base58: Option<String>,
}

impl Secp256k1KeyPair {
    /// Store the given fields verbatim. Malformed key text does not fail
    /// here; it surfaces when a signer or verifier is constructed.
    pub fn new(options: KeyPairOptions) -> Self {
        Self {
            id: options.id,
            controller: options.controller,
            public_key_base58: options.public_key_base58,
            private_key_base58: options.private_key_base58,
        }
    }

    /// Factory alias for [`Secp256k1KeyPair::new`], matching loading call
    /// sites that construct pairs from stored options.
    pub fn from_options(options: KeyPairOptions) -> Self {
        Self::new(options)
    }

    /// Generate a fresh key pair from the system CSPRNG.
    ///
    /// The random scalar is drawn per call; `id` and `controller` are taken
    /// from `options`, any key material in `options` is ignored.
    pub fn generate(options: KeyPairOptions) -> Self {
        let secret = SecretKey::random(&mut rand::thread_rng());
        let public = secret.public_key();
        let compressed = public.to_encoded_point(true);

        tracing::debug!("generated fresh secp256k1 key pair");

        Self {
            id: options.id,
            controller: options.controller,
            public_key_base58: Some(encoding::encode(compressed.as_bytes())),
            private_key_base58: Some(encoding::encode(secret.to_bytes().as_slice())),
        }
    }

    /// The fixed suite type of this key pair.
    pub fn key_type(&self) -> &'static str {
        SUITE_ID
    }

    /// Stored base58 public key encoding, if any.
    pub fn public_key_base58(&self) -> Option<&str> {
        self.public_key_base58.as_deref()
    }

    /// Stored base58 private key encoding, if any.
    pub fn private_key_base58(&self) -> Option<&str> {
        self.private_key_base58.as_deref()
    }

    /// Build an ECDSA signer over this pair's private key.
    ///
    /// Succeeds even when no private key is present; that signer fails with
    /// [`SigningError::NoPrivateKey`] on every `sign` call.
    pub fn signer(&self) -> Result<Secp256k1Signer, SigningError> {
        Secp256k1Signer::new(self)
    }

    /// Build an ECDSA verifier over this pair's public key. Fails
    /// immediately when the public key is absent or malformed.
    pub fn verifier(&self) -> Result<Secp256k1Verifier, VerificationSetupError> {
        Secp256k1Verifier::new(self)
    }

    /// Export the public-key descriptor for this pair.
    ///
    /// `controller_override` takes precedence over the stored controller;
    /// the field is only included when the winning value is non-empty.
    pub fn export_public_node(&self, controller_override: Option<&str>) -> VerificationMethod {
        let controller = controller_override
            .map(str::to_owned)
            .or_else(|| self.controller.clone())
            .filter(|c| !c.is_empty());

        VerificationMethod {
            id: self.id.clone(),
            key_type: SUITE_ID.to_owned(),
            controller,
            public_key_base58: self.public_key_base58.clone(),
        }
    }

    /// Multibase fingerprint of this pair's public key. Deterministic: the
    /// same public key always yields the same text.
    pub fn fingerprint(&self) -> Result<String, FingerprintError> {
        let public_key = self
            .public_key_base58
            .as_deref()
            .ok_or(FingerprintError::MissingPublicKey)?;
        Ok(fingerprint::from_public_key(public_key)?)
    }

    /// Fingerprint for a bare public key encoding, without an entity.
    pub fn fingerprint_from_public_key(
        public_key_base58: &str,
    ) -> Result<String, FingerprintError> {
        Ok(fingerprint::from_public_key(public_key_base58)?)
    }

    /// Check a fingerprint against this pair's public key. Never fails;
    /// callers branch on the returned [`FingerprintVerification`].
    pub fn verify_fingerprint(&self, text: &str) -> FingerprintVerification {
        fingerprint::verify(self.public_key_base58.as_deref(), text)
    }
}

// Private key material stays out of Debug output
impl fmt::Debug for Secp256k1KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1KeyPair")
            .field("id", &self.id)
            .field("controller", &self.controller)
            .field("public_key_base58", &self.public_key_base58)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_populates_both_keys() {
        let key_pair = Secp256k1KeyPair::generate(KeyPairOptions::default());

        let public = key_pair.public_key_base58().unwrap();
        let private = key_pair.private_key_base58().unwrap();

        assert_eq!(
            encoding::decode(public, encoding::KeyKind::Public)
                .unwrap()
                .len(),
            33
        );
        assert_eq!(
            encoding::decode(private, encoding::KeyKind::Private)
                .unwrap()
                .len(),
            32
        );
    }

    #[test]
    fn test_generate_produces_unique_pairs() {
        let a = Secp256k1KeyPair::generate(KeyPairOptions::default());
        let b = Secp256k1KeyPair::generate(KeyPairOptions::default());

        assert_ne!(a.public_key_base58(), b.public_key_base58());
        assert_ne!(a.private_key_base58(), b.private_key_base58());
    }

    #[test]
    fn test_generate_merges_identity_overrides() {
        let key_pair = Secp256k1KeyPair::generate(KeyPairOptions {
            id: Some("did:example:alice#keys-1".to_owned()),
            controller: Some("did:example:alice".to_owned()),
            ..Default::default()
        });

        assert_eq!(key_pair.id.as_deref(), Some("did:example:alice#keys-1"));
        assert_eq!(key_pair.controller.as_deref(), Some("did:example:alice"));
    }

    #[test]
    fn test_construction_accepts_malformed_key_text() {
        // Validation is deferred to signer/verifier construction
        let key_pair = Secp256k1KeyPair::from_options(KeyPairOptions {
            public_key_base58: Some("not base58 0OIl".to_owned()),
            private_key_base58: Some("also bad".to_owned()),
            ..Default::default()
        });

        assert_eq!(key_pair.public_key_base58(), Some("not base58 0OIl"));
        assert_eq!(key_pair.private_key_base58(), Some("also bad"));
    }

    #[test]
    fn test_type_is_fixed_regardless_of_input() {
        let key_pair = Secp256k1KeyPair::new(KeyPairOptions {
            key_type: Some("Ed25519VerificationKey2018".to_owned()),
            ..Default::default()
        });

        assert_eq!(key_pair.key_type(), SUITE_ID);
        assert_eq!(key_pair.export_public_node(None).key_type, SUITE_ID);
    }

    #[test]
    fn test_export_public_node_shape() {
        let key_pair = Secp256k1KeyPair::generate(KeyPairOptions {
            id: Some("did:example:bob#keys-1".to_owned()),
            controller: Some("did:example:bob".to_owned()),
            ..Default::default()
        });

        let node = key_pair.export_public_node(None);
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["id"], "did:example:bob#keys-1");
        assert_eq!(json["type"], SUITE_ID);
        assert_eq!(json["controller"], "did:example:bob");
        assert_eq!(
            json["publicKeyBase58"].as_str(),
            key_pair.public_key_base58()
        );
        // no private key field, ever
        assert!(json.get("privateKeyBase58").is_none());
    }

    #[test]
    fn test_export_controller_override_wins() {
        let key_pair = Secp256k1KeyPair::generate(KeyPairOptions {
            controller: Some("did:example:bob".to_owned()),
            ..Default::default()
        });

        let node = key_pair.export_public_node(Some("did:example:carol"));
        assert_eq!(node.controller.as_deref(), Some("did:example:carol"));
    }

    #[test]
    fn test_export_omits_empty_controller() {
        let key_pair = Secp256k1KeyPair::generate(KeyPairOptions::default());

        let node = key_pair.export_public_node(Some(""));
        assert_eq!(node.controller, None);

        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("controller").is_none());
    }

    #[test]
    fn test_options_deserialize_camel_case() {
        let options: KeyPairOptions = serde_json::from_str(
            r#"{
                "id": "did:example:dan#keys-1",
                "type": "EcdsaSecp256k1VerificationKey2019",
                "publicKeyBase58": "231cRx1fhyNzrdj9i3UseKm1ApgMwyDLbKtJJH5AacEwL"
            }"#,
        )
        .unwrap();

        assert_eq!(options.id.as_deref(), Some("did:example:dan#keys-1"));
        assert_eq!(
            options.public_key_base58.as_deref(),
            Some("231cRx1fhyNzrdj9i3UseKm1ApgMwyDLbKtJJH5AacEwL")
        );
        assert_eq!(options.private_key_base58, None);
    }

    #[test]
    fn test_debug_does_not_expose_private_key() {
        let key_pair = Secp256k1KeyPair::generate(KeyPairOptions::default());
        let debug_output = format!("{key_pair:?}");

        assert!(debug_output.contains("public_key_base58"));
        assert!(!debug_output.contains(key_pair.private_key_base58().unwrap()));
    }
}
