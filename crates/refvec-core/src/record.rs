//! Reference record data model and fixed binary layout
//!
//! A reference file is a sequence of fixed-size records with no header,
//! delimiters, or trailer. Each record is the concatenation of nine byte
//! fields in the order given by the offset constants below.
//!
//! ## Record layout (352 bytes)
//!
//! | offset | length | field |
//! |--------|--------|-------|
//! | 0      | 32     | exchange-keypair-A private |
//! | 32     | 32     | exchange-keypair-A public |
//! | 64     | 32     | exchange-keypair-B private |
//! | 96     | 32     | exchange-keypair-B public |
//! | 128    | 32     | shared secret |
//! | 160    | 32     | signing-keypair private |
//! | 192    | 32     | signing-keypair public |
//! | 224    | 64     | signature over A public |
//! | 288    | 64     | signature over B public |

use crate::error::{VectorError, VectorResult};

/// Length of every key and of the shared secret (32 bytes)
pub const KEY_LEN: usize = 32;

/// Length of an Ed25519 signature (64 bytes)
pub const SIGNATURE_LEN: usize = 64;

/// Length of one serialized record: seven keys plus two signatures
pub const RECORD_LEN: usize = 7 * KEY_LEN + 2 * SIGNATURE_LEN;

/// Number of records in a default reference file
pub const DEFAULT_RECORD_COUNT: usize = 16;

/// Offset of exchange-keypair-A's private key
pub const EXCHANGE_A_PRIVATE: usize = 0;
/// Offset of exchange-keypair-A's public key
pub const EXCHANGE_A_PUBLIC: usize = KEY_LEN;
/// Offset of exchange-keypair-B's private key
pub const EXCHANGE_B_PRIVATE: usize = 2 * KEY_LEN;
/// Offset of exchange-keypair-B's public key
pub const EXCHANGE_B_PUBLIC: usize = 3 * KEY_LEN;
/// Offset of the shared secret
pub const SHARED_SECRET: usize = 4 * KEY_LEN;
/// Offset of the signing keypair's private key
pub const SIGNING_PRIVATE: usize = 5 * KEY_LEN;
/// Offset of the signing keypair's public key
pub const SIGNING_PUBLIC: usize = 6 * KEY_LEN;
/// Offset of the signature over exchange-keypair-A's public key
pub const SIGNATURE_A: usize = 7 * KEY_LEN;
/// Offset of the signature over exchange-keypair-B's public key
pub const SIGNATURE_B: usize = 7 * KEY_LEN + SIGNATURE_LEN;

/// A 32/32-byte private/public keypair.
///
/// Exchange keypairs (X25519) and signing keypairs (Ed25519) share this
/// shape; they are semantically distinct and never interchangeable.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    /// Raw private key bytes (the generation seed)
    pub private: [u8; KEY_LEN],
    /// Public key derived from the private key by the curve primitive
    pub public: [u8; KEY_LEN],
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &hex::encode(self.public))
            .finish_non_exhaustive()
    }
}

/// One fully generated reference vector.
///
/// All fields are produced within a single generation cycle and never
/// mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
    /// First party's exchange keypair
    pub exchange_a: KeyPair,
    /// Second party's exchange keypair
    pub exchange_b: KeyPair,
    /// Diffie-Hellman shared secret agreed by both parties
    pub shared_secret: [u8; KEY_LEN],
    /// Signing keypair used for both signatures
    pub signing: KeyPair,
    /// Signature over `exchange_a.public`
    pub signature_a: [u8; SIGNATURE_LEN],
    /// Signature over `exchange_b.public`
    pub signature_b: [u8; SIGNATURE_LEN],
}

impl ReferenceRecord {
    /// Serialize into the fixed 352-byte layout.
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut buf = [0u8; RECORD_LEN];
        buf[EXCHANGE_A_PRIVATE..EXCHANGE_A_PUBLIC].copy_from_slice(&self.exchange_a.private);
        buf[EXCHANGE_A_PUBLIC..EXCHANGE_B_PRIVATE].copy_from_slice(&self.exchange_a.public);
        buf[EXCHANGE_B_PRIVATE..EXCHANGE_B_PUBLIC].copy_from_slice(&self.exchange_b.private);
        buf[EXCHANGE_B_PUBLIC..SHARED_SECRET].copy_from_slice(&self.exchange_b.public);
        buf[SHARED_SECRET..SIGNING_PRIVATE].copy_from_slice(&self.shared_secret);
        buf[SIGNING_PRIVATE..SIGNING_PUBLIC].copy_from_slice(&self.signing.private);
        buf[SIGNING_PUBLIC..SIGNATURE_A].copy_from_slice(&self.signing.public);
        buf[SIGNATURE_A..SIGNATURE_B].copy_from_slice(&self.signature_a);
        buf[SIGNATURE_B..RECORD_LEN].copy_from_slice(&self.signature_b);
        buf
    }

    /// Parse one record from exactly [`RECORD_LEN`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> VectorResult<Self> {
        if bytes.len() != RECORD_LEN {
            return Err(VectorError::RecordLength(bytes.len()));
        }

        let key = |offset: usize| -> [u8; KEY_LEN] {
            let mut out = [0u8; KEY_LEN];
            out.copy_from_slice(&bytes[offset..offset + KEY_LEN]);
            out
        };
        let sig = |offset: usize| -> [u8; SIGNATURE_LEN] {
            let mut out = [0u8; SIGNATURE_LEN];
            out.copy_from_slice(&bytes[offset..offset + SIGNATURE_LEN]);
            out
        };

        Ok(Self {
            exchange_a: KeyPair {
                private: key(EXCHANGE_A_PRIVATE),
                public: key(EXCHANGE_A_PUBLIC),
            },
            exchange_b: KeyPair {
                private: key(EXCHANGE_B_PRIVATE),
                public: key(EXCHANGE_B_PUBLIC),
            },
            shared_secret: key(SHARED_SECRET),
            signing: KeyPair {
                private: key(SIGNING_PRIVATE),
                public: key(SIGNING_PUBLIC),
            },
            signature_a: sig(SIGNATURE_A),
            signature_b: sig(SIGNATURE_B),
        })
    }
}

impl std::fmt::Debug for ReferenceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceRecord")
            .field("exchange_a", &self.exchange_a)
            .field("exchange_b", &self.exchange_b)
            .field("signing", &self.signing)
            .field("signature_a", &hex::encode(self.signature_a))
            .field("signature_b", &hex::encode(self.signature_b))
            .finish_non_exhaustive()
    }
}

/// Parse a whole reference file into its records.
///
/// The input must be a whole number of records; an empty input yields an
/// empty vector.
pub fn split_records(bytes: &[u8]) -> VectorResult<Vec<ReferenceRecord>> {
    if bytes.len() % RECORD_LEN != 0 {
        return Err(VectorError::FileLength(bytes.len()));
    }
    bytes.chunks_exact(RECORD_LEN).map(ReferenceRecord::from_bytes).collect()
}
