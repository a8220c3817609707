//! Reference file driver loop
//!
//! Opens the destination for binary writing (truncating pre-existing
//! content), generates the requested number of independent records, and
//! appends each one in generation order. The file handle is the only held
//! resource; RAII closes it on every exit path. Partial files from a failed
//! run are left in place for the caller to inspect or remove.

use crate::entropy::SecureRandom;
use crate::error::VectorResult;
use crate::generator::VectorGenerator;
use crate::provider::CryptoProvider;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write `record_count` freshly generated records to `path`.
///
/// Returns the total number of bytes written.
pub fn write_reference_file<P: CryptoProvider, R: SecureRandom>(
    generator: &mut VectorGenerator<P, R>,
    path: &Path,
    record_count: usize,
) -> VectorResult<usize> {
    let mut file = File::create(path)?;

    let mut bytes = 0;
    for _ in 0..record_count {
        let record = generator.generate_record()?;
        let encoded = record.to_bytes();
        file.write_all(&encoded)?;
        bytes += encoded.len();
    }
    file.flush()?;

    info!(
        records = record_count,
        bytes,
        path = %path.display(),
        "wrote reference file"
    );
    Ok(bytes)
}
