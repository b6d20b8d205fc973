//! # Chordgen - Chord Database Generator
//!
//! Builds the chord lookup table for one chromatic octave of roots and
//! persists it as a JSON document. The run is a single linear pass with no
//! partial-success mode: any error aborts before the file is written.
//!
//! Usage:
//!   chordgen-cli [output.json]     (default: chord_note_db.json)

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use chordgen_core::{DEFAULT_ROOT_RANGE, build_database};

/// Default output path for the emitted database.
const DEFAULT_OUTPUT: &str = "chord_note_db.json";

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    println!(
        "Building chord database for root ids {}..={}...",
        DEFAULT_ROOT_RANGE.start(),
        DEFAULT_ROOT_RANGE.end()
    );
    let database = build_database(DEFAULT_ROOT_RANGE)?;
    println!("{}", database.chords.len());

    let file = File::create(&output_path)
        .with_context(|| format!("failed to create '{}'", output_path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &database)
        .context("failed to serialize chord database")?;

    println!("Chord database generated and saved to {}.", output_path);
    Ok(())
}
