//! # Note Table Module
//!
//! This module builds the fixed note table for a standard 88-key piano.
//! It provides note name, octave, and frequency lookups keyed by a 1-based
//! note identifier, computed once at startup and read-only thereafter.
//!
//! ## Features
//! - 88-key note mapping starting at "A1" = 27.5 Hz
//! - Equal temperament frequency calculations (one semitone = 2^(1/12))
//! - Identifier to note metadata lookups
//!
//! Octave numbering is 1-based and increments every 12 keys from "A" — it is
//! intentionally not scientific pitch notation, so "A5" here is 440 Hz.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// The 12 pitch-class names in chromatic order, starting at "A".
pub const NOTE_NAMES: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// Number of keys on a standard piano.
pub const NOTE_COUNT: u8 = 88;

/// Frequency of the lowest key ("A1") in Hz.
pub const REFERENCE_HZ: f64 = 27.5;

/// Represents a single key of the 88-key note table.
#[derive(Debug, Clone)]
pub struct Note {
    /// 1-based identifier (1..=88), totally ordered by pitch.
    pub note_id: u8,
    /// Pitch-class name, one of [`NOTE_NAMES`].
    pub pitch: &'static str,
    /// Octave number (1-based).
    pub octave: u8,
    /// Equal-temperament frequency in Hz, rounded to 3 decimals.
    pub hz: f64,
    /// Display name: pitch class plus octave (e.g. "A1", "C#4").
    pub name: String,
}

/// Statically computed notes for a standard 88-key piano.
///
/// This lazy static maps each 1-based note identifier to its metadata.
/// Frequencies are derived geometrically from the 27.5 Hz reference: the
/// note with identifier `i + 1` has frequency `27.5 * 2^(i/12)`, rounded
/// to 3 decimal digits. The table is computed once at first use.
pub static NOTES: Lazy<BTreeMap<u8, Note>> = Lazy::new(|| {
    let mut notes = BTreeMap::new();

    for i in 0..NOTE_COUNT as u32 {
        let pitch = NOTE_NAMES[(i % 12) as usize];
        // The octave changes every 12 keys, counting from 1.
        let octave = (i / 12 + 1) as u8;
        let hz = round_hz(REFERENCE_HZ * 2.0_f64.powf(i as f64 / 12.0));

        notes.insert(
            (i + 1) as u8,
            Note {
                note_id: (i + 1) as u8,
                pitch,
                octave,
                hz,
                name: format!("{}{}", pitch, octave),
            },
        );
    }
    notes
});

/// Looks up a note by its 1-based identifier.
///
/// # Arguments
/// * `note_id` - Note identifier (1..=88)
///
/// # Returns
/// * `Some(note)` - The note's metadata
/// * `None` - Identifier outside the table's domain
pub fn note(note_id: u8) -> Option<&'static Note> {
    NOTES.get(&note_id)
}

fn round_hz(hz: f64) -> f64 {
    (hz * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_has_88_entries() {
        assert_eq!(NOTES.len(), 88);
        assert_eq!(NOTES.keys().copied().collect::<Vec<_>>(), (1u8..=88).collect::<Vec<_>>());
    }

    #[test]
    fn lowest_key_is_the_reference() {
        let a1 = note(1).unwrap();
        assert_eq!(a1.pitch, "A");
        assert_eq!(a1.octave, 1);
        assert_eq!(a1.name, "A1");
        assert_eq!(a1.hz, 27.5);
    }

    #[test]
    fn one_octave_up_doubles_the_frequency() {
        let a2 = note(13).unwrap();
        assert_eq!(a2.name, "A2");
        assert!((a2.hz - 55.0).abs() < 0.001);
    }

    #[test]
    fn concert_pitch_lands_on_key_49() {
        // 48 semitones above 27.5 Hz is 440 Hz; the table's octave
        // numbering calls that key "A5".
        let a = note(49).unwrap();
        assert_eq!(a.name, "A5");
        assert_eq!(a.hz, 440.0);
    }

    #[test]
    fn frequency_strictly_increases_with_identifier() {
        let mut prev = 0.0;
        for id in 1..=NOTE_COUNT {
            let n = note(id).unwrap();
            assert!(n.hz > prev, "hz not increasing at id {}", id);
            prev = n.hz;
        }
    }

    #[test]
    fn sharps_and_octave_boundaries_are_named_correctly() {
        assert_eq!(note(2).unwrap().name, "A#1");
        assert_eq!(note(12).unwrap().name, "G#1");
        assert_eq!(note(14).unwrap().name, "A#2");
        assert_eq!(note(88).unwrap().name, "C8");
    }
}
