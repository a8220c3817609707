//! Cryptographic provider abstraction
//!
//! All curve arithmetic and signature math is delegated to a trusted,
//! already-implemented provider; nothing in this crate reimplements a
//! primitive. [`DalekProvider`] is the sole production implementation,
//! binding the audited `x25519-dalek` and `ed25519-dalek` crates.

use crate::entropy::SecureRandom;
use crate::error::{VectorError, VectorResult};
use crate::record::{KeyPair, KEY_LEN, SIGNATURE_LEN};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret as X25519StaticSecret};

/// Capability interface over the trusted cryptographic backend.
///
/// The trait is the seam that keeps the pipeline portable: tests can inject
/// a deliberately broken provider to exercise the fatal self-check paths.
pub trait CryptoProvider {
    /// Generate a fresh Curve25519 exchange keypair from `rng`.
    fn generate_exchange_keypair(&self, rng: &mut dyn SecureRandom) -> VectorResult<KeyPair>;

    /// Derive the Diffie-Hellman shared secret from one party's private key
    /// and the other party's public key.
    fn compute_exchange(
        &self,
        private: &[u8; KEY_LEN],
        public: &[u8; KEY_LEN],
    ) -> [u8; KEY_LEN];

    /// Generate a fresh Ed25519 signing keypair from `rng`.
    fn generate_signing_keypair(&self, rng: &mut dyn SecureRandom) -> VectorResult<KeyPair>;

    /// Sign a 32-byte message under the signing private key.
    ///
    /// Deterministic for a fixed (key, message) pair; no randomness is
    /// consumed at signing time.
    fn sign(
        &self,
        signing_private: &[u8; KEY_LEN],
        message: &[u8; KEY_LEN],
    ) -> [u8; SIGNATURE_LEN];

    /// Verify a signature against the signing public key and message.
    fn verify(
        &self,
        signing_public: &[u8; KEY_LEN],
        message: &[u8; KEY_LEN],
        signature: &[u8; SIGNATURE_LEN],
    ) -> VectorResult<()>;
}

/// Production provider backed by `x25519-dalek` and `ed25519-dalek`.
///
/// Private keys are the raw 32-byte seeds drawn from the randomness source;
/// X25519 clamping happens inside the primitive at use time.
#[derive(Debug, Default, Clone, Copy)]
pub struct DalekProvider;

impl CryptoProvider for DalekProvider {
    fn generate_exchange_keypair(&self, rng: &mut dyn SecureRandom) -> VectorResult<KeyPair> {
        let mut seed = [0u8; KEY_LEN];
        rng.fill(&mut seed)?;
        let secret = X25519StaticSecret::from(seed);
        let public = X25519PublicKey::from(&secret);
        Ok(KeyPair {
            private: seed,
            public: public.to_bytes(),
        })
    }

    fn compute_exchange(
        &self,
        private: &[u8; KEY_LEN],
        public: &[u8; KEY_LEN],
    ) -> [u8; KEY_LEN] {
        let secret = X25519StaticSecret::from(*private);
        let their_public = X25519PublicKey::from(*public);
        secret.diffie_hellman(&their_public).to_bytes()
    }

    fn generate_signing_keypair(&self, rng: &mut dyn SecureRandom) -> VectorResult<KeyPair> {
        let mut seed = [0u8; KEY_LEN];
        rng.fill(&mut seed)?;
        let signing_key = SigningKey::from_bytes(&seed);
        Ok(KeyPair {
            private: seed,
            public: signing_key.verifying_key().to_bytes(),
        })
    }

    fn sign(
        &self,
        signing_private: &[u8; KEY_LEN],
        message: &[u8; KEY_LEN],
    ) -> [u8; SIGNATURE_LEN] {
        let signing_key = SigningKey::from_bytes(signing_private);
        signing_key.sign(message).to_bytes()
    }

    fn verify(
        &self,
        signing_public: &[u8; KEY_LEN],
        message: &[u8; KEY_LEN],
        signature: &[u8; SIGNATURE_LEN],
    ) -> VectorResult<()> {
        let verifying_key = VerifyingKey::from_bytes(signing_public)
            .map_err(|e| VectorError::SignatureInvalid(format!("Bad signing public key: {}", e)))?;
        let signature = Signature::from_bytes(signature);
        verifying_key
            .verify(message, &signature)
            .map_err(|e| VectorError::SignatureInvalid(format!("Verification failed: {}", e)))
    }
}
