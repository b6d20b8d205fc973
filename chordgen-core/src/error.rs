//! Error types for chord construction.

use thiserror::Error;

/// Errors that can occur while building chords or the chord database.
///
/// All errors are fatal to the run: the database is built all-or-nothing,
/// with no partial-success mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChordError {
    /// The requested quality name is not in the fixed quality table.
    #[error("unknown chord quality '{name}'")]
    InvalidQuality { name: String },
    /// A note identifier fell outside the 88-key table's domain.
    #[error("note id {note_id} is outside the 88-key table")]
    UnknownNote { note_id: u8 },
}
