//! Reference Vector Core Library
//!
//! Generates fixed-layout binary reference vectors for X25519 key exchange
//! and Ed25519 signatures, so an independent implementation of those
//! primitives can be validated against known-good outputs.
//!
//! ## Pipeline
//!
//! Each 352-byte record runs through a single linear pipeline: generate two
//! fresh exchange keypairs, derive the shared secret from both sides (they
//! must agree), generate a signing keypair, sign both exchange public keys
//! and re-verify the signatures, then pack everything into the fixed field
//! order. A reference file is 16 such records back to back, 5632 bytes, no
//! header or trailer.
//!
//! ## Quick Start
//!
//! ```
//! use refvec_core::{DalekProvider, OsRandom, VectorGenerator, write_reference_file};
//!
//! # fn main() -> refvec_core::VectorResult<()> {
//! let dir = tempfile::tempdir()?;
//! let mut generator = VectorGenerator::new(DalekProvider, OsRandom);
//! let bytes = write_reference_file(&mut generator, &dir.path().join("out.bin"), 16)?;
//! assert_eq!(bytes, 5632);
//! # Ok(())
//! # }
//! ```

pub mod entropy;
pub mod error;
pub mod generator;
pub mod provider;
pub mod record;
pub mod writer;

// Re-exports
pub use entropy::{OsRandom, SecureRandom, SeededRandom};
pub use error::{VectorError, VectorResult};
pub use generator::VectorGenerator;
pub use provider::{CryptoProvider, DalekProvider};
pub use record::{
    split_records, KeyPair, ReferenceRecord, DEFAULT_RECORD_COUNT, KEY_LEN, RECORD_LEN,
    SIGNATURE_LEN,
};
pub use writer::write_reference_file;
