//! # Chord Quality Table
//!
//! The fixed enumeration of chord qualities: each quality pairs a name with
//! an ordered semitone interval pattern and a short notation suffix. This is
//! static configuration, not computed logic; the table's order is also the
//! order the database builder processes qualities in.

/// A named interval pattern defining a chord's structure.
#[derive(Debug, Clone, Copy)]
pub struct ChordQuality {
    /// Human-readable name (e.g. "Minor 7th").
    pub name: &'static str,
    /// Semitone offsets from the root. The first is always 0 and the
    /// sequence is strictly increasing.
    pub intervals: &'static [u8],
    /// Short notation suffix appended to the root pitch class to form the
    /// chord identifier (e.g. "min7"; empty for Major).
    pub suffix: &'static str,
}

/// The 13 supported chord qualities, in fixed enumeration order.
pub const QUALITIES: [ChordQuality; 13] = [
    ChordQuality { name: "Major", intervals: &[0, 4, 7], suffix: "" },
    ChordQuality { name: "Minor", intervals: &[0, 3, 7], suffix: "m" },
    ChordQuality { name: "Diminished", intervals: &[0, 3, 6], suffix: "dim" },
    ChordQuality { name: "Augmented", intervals: &[0, 4, 8], suffix: "aug" },
    ChordQuality { name: "Major 7th", intervals: &[0, 4, 7, 11], suffix: "maj7" },
    ChordQuality { name: "Minor 7th", intervals: &[0, 3, 7, 10], suffix: "min7" },
    ChordQuality { name: "Dominant 7th", intervals: &[0, 4, 7, 10], suffix: "7" },
    ChordQuality { name: "Sus2", intervals: &[0, 2, 7], suffix: "sus2" },
    ChordQuality { name: "Sus4", intervals: &[0, 5, 7], suffix: "sus4" },
    ChordQuality { name: "Diminished 7th", intervals: &[0, 3, 6, 9], suffix: "dim7" },
    ChordQuality { name: "Major 9th", intervals: &[0, 4, 7, 11, 14], suffix: "maj9" },
    ChordQuality { name: "Minor 9th", intervals: &[0, 3, 7, 10, 13], suffix: "min9" },
    ChordQuality { name: "Dominant 9th", intervals: &[0, 4, 7, 10, 14], suffix: "9" },
];

/// Finds a quality by its name.
///
/// # Arguments
/// * `name` - Quality name (e.g. "Major", "Dominant 7th")
///
/// # Returns
/// * `Some(quality)` - The matching table entry
/// * `None` - Name not in the fixed table
pub fn find_quality(name: &str) -> Option<&'static ChordQuality> {
    QUALITIES.iter().find(|q| q.name == name)
}
