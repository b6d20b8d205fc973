//! # Chord Database Builder
//!
//! Assembles the full chord database: for every root identifier in a range
//! and every quality in the fixed table, a [`ChordRecord`] keyed by chord
//! identifier. The document serializes to the `{"chords": {...}}` shape the
//! downstream consumers read.
//!
//! Chord identifiers depend only on the root's pitch class, not its octave.
//! Roots are processed in increasing identifier order and insertion
//! overwrites, so when a range spans more than one octave the stored record
//! for each pitch class is the one computed from the highest root id sharing
//! that pitch class. A full-octave range has 12 distinct pitch classes and
//! yields exactly 12 x 13 = 156 entries.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::chord::build_chord;
use crate::error::ChordError;
use crate::notes;
use crate::quality::QUALITIES;

/// Default root range: identifiers 20..=31, one full chromatic octave.
pub const DEFAULT_ROOT_RANGE: RangeInclusive<u8> = 20..=31;

/// A single chord entry in the emitted database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordRecord {
    /// Chord identifier: root pitch class plus the quality's suffix
    /// (e.g. "Cm", "F#maj7").
    pub id: String,
    /// Display name: root pitch class, space, quality name (e.g. "C Minor").
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Quality name (e.g. "Minor").
    #[serde(rename = "type")]
    pub chord_type: String,
    /// Constituent pitch classes, one per interval, in interval order.
    pub notes: Vec<String>,
}

/// The complete chord database document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordDatabase {
    /// Chord records keyed by chord identifier.
    pub chords: BTreeMap<String, ChordRecord>,
}

/// Builds the chord database over a range of root note identifiers.
///
/// # Arguments
/// * `roots` - Inclusive range of root identifiers, each within 1..=88
///
/// # Returns
/// * `Ok(database)` - One record per distinct (pitch class, quality) pair
/// * `Err(e)` - A root identifier fell outside the note table
pub fn build_database(roots: RangeInclusive<u8>) -> Result<ChordDatabase, ChordError> {
    let mut database = ChordDatabase::default();

    for root_id in roots {
        let root = notes::note(root_id).ok_or(ChordError::UnknownNote { note_id: root_id })?;
        for quality in &QUALITIES {
            let pitches = build_chord(root_id, quality.name)?;
            let id = format!("{}{}", root.pitch, quality.suffix);
            let record = ChordRecord {
                id: id.clone(),
                display_name: format!("{} {}", root.pitch, quality.name),
                chord_type: quality.name.to_string(),
                notes: pitches.iter().map(|p| p.to_string()).collect(),
            };
            // Later roots overwrite earlier ones with the same pitch class.
            database.chords.insert(id, record);
        }
    }
    Ok(database)
}
