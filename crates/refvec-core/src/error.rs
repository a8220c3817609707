//! Error types for reference vector generation

use thiserror::Error;

/// Main error type for reference vector operations
#[derive(Error, Debug)]
pub enum VectorError {
    /// Secure randomness source unavailable or exhausted
    #[error("Randomness failure: {0}")]
    Randomness(String),

    /// The two-sided Diffie-Hellman computation disagreed
    #[error("Exchange mismatch: shared secrets computed from each side differ")]
    ExchangeMismatch,

    /// A freshly produced signature failed self-verification
    #[error("Signature invalid: {0}")]
    SignatureInvalid(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A record buffer has the wrong length
    #[error("Record length {0} does not match expected {expected}", expected = crate::record::RECORD_LEN)]
    RecordLength(usize),

    /// A reference file is not a whole number of records
    #[error("File length {0} is not a multiple of the record length {record_len}", record_len = crate::record::RECORD_LEN)]
    FileLength(usize),
}

/// Result type alias using VectorError
pub type VectorResult<T> = Result<T, VectorError>;
