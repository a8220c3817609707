//! One-record generation pipeline
//!
//! `KeyPairGenerator → ExchangeComputer → Signer → RecordSerializer`, with
//! the two mandatory self-checks: the shared secret is computed from both
//! sides and must agree, and each freshly produced signature must verify.
//! Either check failing signals a broken provider and is fatal.

use crate::entropy::SecureRandom;
use crate::error::{VectorError, VectorResult};
use crate::provider::CryptoProvider;
use crate::record::ReferenceRecord;
use tracing::debug;

/// Composes a [`CryptoProvider`] with a [`SecureRandom`] source to produce
/// independent reference records.
pub struct VectorGenerator<P, R> {
    provider: P,
    rng: R,
}

impl<P: CryptoProvider, R: SecureRandom> VectorGenerator<P, R> {
    /// Create a generator over the given provider and randomness source.
    pub fn new(provider: P, rng: R) -> Self {
        Self { provider, rng }
    }

    /// Generate one reference record from fresh random key material.
    ///
    /// Records are fully independent: no state carries over between calls
    /// apart from the randomness stream itself.
    pub fn generate_record(&mut self) -> VectorResult<ReferenceRecord> {
        let exchange_a = self.provider.generate_exchange_keypair(&mut self.rng)?;
        let exchange_b = self.provider.generate_exchange_keypair(&mut self.rng)?;

        let shared_secret = self
            .provider
            .compute_exchange(&exchange_a.private, &exchange_b.public);
        let shared_other = self
            .provider
            .compute_exchange(&exchange_b.private, &exchange_a.public);
        if shared_secret != shared_other {
            return Err(VectorError::ExchangeMismatch);
        }

        let signing = self.provider.generate_signing_keypair(&mut self.rng)?;
        let signature_a = self.provider.sign(&signing.private, &exchange_a.public);
        let signature_b = self.provider.sign(&signing.private, &exchange_b.public);
        self.provider
            .verify(&signing.public, &exchange_a.public, &signature_a)?;
        self.provider
            .verify(&signing.public, &exchange_b.public, &signature_b)?;

        debug!(
            exchange_a = %hex::encode(exchange_a.public),
            exchange_b = %hex::encode(exchange_b.public),
            signing = %hex::encode(signing.public),
            "generated reference record"
        );

        Ok(ReferenceRecord {
            exchange_a,
            exchange_b,
            shared_secret,
            signing,
            signature_a,
            signature_b,
        })
    }
}
