//! # Chord Builder
//!
//! Maps a (root note, chord quality) pair to the ordered sequence of pitch
//! classes that compose the chord, via modular arithmetic over semitone
//! intervals in the 88-slot note identifier space.

use crate::error::ChordError;
use crate::notes::{self, NOTE_COUNT};
use crate::quality;

/// Computes the constituent pitch classes of a chord.
///
/// For each interval `iv` in the quality's pattern, the target identifier is
/// `((root_id - 1 + iv) mod 88) + 1` and its pitch class is appended to the
/// result. The output length always equals the interval count; duplicate
/// pitch classes are kept.
///
/// The wrap-around is over the note-table identifier space, not 12-tone
/// pitch-class space: for roots near the top of the table the wrapped note
/// can land on a pitch class a plain semitone transposition would not
/// produce. Emitted databases depend on this, so it is kept as-is.
///
/// # Arguments
/// * `root_id` - Root note identifier (1..=88)
/// * `quality_name` - Name of a quality in the fixed table
///
/// # Returns
/// * `Ok(pitches)` - Pitch-class names, one per interval, in interval order
/// * `Err(ChordError::InvalidQuality)` - Quality name not in the table
/// * `Err(ChordError::UnknownNote)` - Root identifier outside 1..=88
pub fn build_chord(root_id: u8, quality_name: &str) -> Result<Vec<&'static str>, ChordError> {
    let quality = quality::find_quality(quality_name).ok_or_else(|| {
        ChordError::InvalidQuality { name: quality_name.to_string() }
    })?;

    if notes::note(root_id).is_none() {
        return Err(ChordError::UnknownNote { note_id: root_id });
    }

    let mut pitches = Vec::with_capacity(quality.intervals.len());
    for &interval in quality.intervals {
        let target = ((root_id as u16 - 1 + interval as u16) % NOTE_COUNT as u16 + 1) as u8;
        let note = notes::note(target).ok_or(ChordError::UnknownNote { note_id: target })?;
        pitches.push(note.pitch);
    }
    Ok(pitches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::NOTE_NAMES;
    use crate::quality::QUALITIES;
    use pretty_assertions::assert_eq;

    #[test]
    fn c_major_triad() {
        // Identifier 28 is C3.
        assert_eq!(build_chord(28, "Major").unwrap(), vec!["C", "E", "G"]);
    }

    #[test]
    fn c_minor_seventh() {
        assert_eq!(build_chord(28, "Minor 7th").unwrap(), vec!["C", "D#", "G", "A#"]);
    }

    #[test]
    fn a_dominant_ninth() {
        // Identifier 1 is A1; 14 semitones up wraps the pitch classes, not
        // the table.
        assert_eq!(build_chord(1, "Dominant 9th").unwrap(), vec!["A", "C#", "E", "G", "B"]);
    }

    #[test]
    fn length_equals_interval_count_for_every_root() {
        for quality in &QUALITIES {
            for root_id in 1..=88u8 {
                let pitches = build_chord(root_id, quality.name).unwrap();
                assert_eq!(pitches.len(), quality.intervals.len());
                for pitch in &pitches {
                    assert!(NOTE_NAMES.contains(pitch), "unexpected pitch {}", pitch);
                }
            }
        }
    }

    #[test]
    fn wrap_around_follows_the_identifier_space() {
        // Root 88 is C8. Intervals 4 and 7 wrap past the table top to
        // identifiers 4 ("C") and 7 ("D#") instead of transposing within
        // the pitch-class circle.
        assert_eq!(build_chord(88, "Major").unwrap(), vec!["C", "C", "D#"]);
    }

    #[test]
    fn unknown_quality_is_rejected() {
        let err = build_chord(28, "Power").unwrap_err();
        assert_eq!(err, ChordError::InvalidQuality { name: "Power".to_string() });
    }

    #[test]
    fn out_of_range_roots_are_rejected() {
        assert_eq!(build_chord(0, "Major").unwrap_err(), ChordError::UnknownNote { note_id: 0 });
        assert_eq!(build_chord(89, "Major").unwrap_err(), ChordError::UnknownNote { note_id: 89 });
    }
}
