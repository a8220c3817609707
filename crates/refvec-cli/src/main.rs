//! Reference vector generator CLI
//!
//! Thin wrapper around refvec-core: generates the default 16-record
//! reference file at the given path.
//!
//! ## Usage
//!
//! ```bash
//! # Write 16 reference records (5632 bytes) to out.bin
//! refvec out.bin
//! ```
//!
//! `RUST_LOG` tunes diagnostic verbosity only; it never changes the
//! generated bytes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use refvec_core::{
    write_reference_file, DalekProvider, OsRandom, VectorGenerator, DEFAULT_RECORD_COUNT,
};

/// Generate X25519/Ed25519 reference vectors
#[derive(Parser)]
#[command(name = "refvec")]
#[command(version = "0.1.0")]
#[command(about = "Generate X25519/Ed25519 reference vectors")]
#[command(
    long_about = "Writes a fixed-layout binary file of 16 reference records (5632 bytes), \
each containing two X25519 exchange keypairs, their shared secret, an Ed25519 signing \
keypair, and signatures over both exchange public keys."
)]
struct Cli {
    /// Destination file for the reference vectors (truncated if it exists)
    output: PathBuf,
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging();

    let mut generator = VectorGenerator::new(DalekProvider, OsRandom);
    let bytes = write_reference_file(&mut generator, &cli.output, DEFAULT_RECORD_COUNT)
        .with_context(|| format!("Failed to write reference file {}", cli.output.display()))?;

    println!(
        "Wrote {} reference records ({} bytes) to {}",
        DEFAULT_RECORD_COUNT,
        bytes,
        cli.output.display()
    );

    Ok(())
}
