//! End-to-end reference file tests
//!
//! These cross-check a generated file with the dalek crates directly,
//! independent of the `CryptoProvider` abstraction: every embedded shared
//! secret is recomputed from the raw private/public fields, and every
//! embedded signature is re-verified, exactly as a downstream consumer of
//! the file would do.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use refvec_core::{
    record, split_records, write_reference_file, DalekProvider, OsRandom, VectorGenerator,
    DEFAULT_RECORD_COUNT, RECORD_LEN,
};
use tempfile::TempDir;
use x25519_dalek::{PublicKey, StaticSecret};

fn generate_file(record_count: usize) -> Vec<u8> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reference.bin");
    let mut generator = VectorGenerator::new(DalekProvider, OsRandom);
    write_reference_file(&mut generator, &path, record_count).unwrap();
    std::fs::read(&path).unwrap()
}

#[test]
fn default_file_has_exact_length() {
    let bytes = generate_file(DEFAULT_RECORD_COUNT);
    assert_eq!(bytes.len(), DEFAULT_RECORD_COUNT * RECORD_LEN);
    assert_eq!(bytes.len(), 5632);
}

#[test]
fn no_two_records_are_identical() {
    let bytes = generate_file(DEFAULT_RECORD_COUNT);
    let records: Vec<&[u8]> = bytes.chunks_exact(RECORD_LEN).collect();
    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            assert_ne!(records[i], records[j], "records {} and {} collide", i, j);
        }
    }
}

#[test]
fn embedded_public_keys_match_their_private_keys() {
    let bytes = generate_file(4);
    for record in split_records(&bytes).unwrap() {
        let derived_a = PublicKey::from(&StaticSecret::from(record.exchange_a.private));
        let derived_b = PublicKey::from(&StaticSecret::from(record.exchange_b.private));
        assert_eq!(record.exchange_a.public, derived_a.to_bytes());
        assert_eq!(record.exchange_b.public, derived_b.to_bytes());

        let signing_key = ed25519_dalek::SigningKey::from_bytes(&record.signing.private);
        assert_eq!(record.signing.public, signing_key.verifying_key().to_bytes());
    }
}

// Scenario C: the embedded shared secret is recomputable from either side.
#[test]
fn shared_secret_recomputes_from_both_sides() {
    let bytes = generate_file(4);
    for record in split_records(&bytes).unwrap() {
        let from_a = StaticSecret::from(record.exchange_a.private)
            .diffie_hellman(&PublicKey::from(record.exchange_b.public));
        let from_b = StaticSecret::from(record.exchange_b.private)
            .diffie_hellman(&PublicKey::from(record.exchange_a.public));
        assert_eq!(record.shared_secret, from_a.to_bytes());
        assert_eq!(record.shared_secret, from_b.to_bytes());
    }
}

// Scenario D: both embedded signatures verify against the embedded keys.
#[test]
fn embedded_signatures_verify() {
    let bytes = generate_file(4);
    for record in split_records(&bytes).unwrap() {
        let verifying_key = VerifyingKey::from_bytes(&record.signing.public).unwrap();
        verifying_key
            .verify(
                &record.exchange_a.public,
                &Signature::from_bytes(&record.signature_a),
            )
            .unwrap();
        verifying_key
            .verify(
                &record.exchange_b.public,
                &Signature::from_bytes(&record.signature_b),
            )
            .unwrap();
    }
}

#[test]
fn file_offsets_match_record_fields() {
    let bytes = generate_file(2);
    let records = split_records(&bytes).unwrap();
    for (i, parsed) in records.iter().enumerate() {
        let raw = &bytes[i * RECORD_LEN..(i + 1) * RECORD_LEN];
        assert_eq!(
            &raw[record::EXCHANGE_A_PRIVATE..record::EXCHANGE_A_PUBLIC],
            &parsed.exchange_a.private
        );
        assert_eq!(
            &raw[record::SHARED_SECRET..record::SIGNING_PRIVATE],
            &parsed.shared_secret
        );
        assert_eq!(
            &raw[record::SIGNATURE_A..record::SIGNATURE_B],
            &parsed.signature_a
        );
        assert_eq!(&raw[record::SIGNATURE_B..RECORD_LEN], &parsed.signature_b);
        // re-serializing reproduces the raw bytes exactly
        assert_eq!(parsed.to_bytes().as_slice(), raw);
    }
}
