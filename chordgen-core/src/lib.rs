// chordgen-core/src/lib.rs

//! The core logic for the chord database generator.
//! This crate is responsible for the 88-key note table, the fixed chord
//! quality table, and the chord/database builders. It is completely
//! headless and performs no I/O.

pub mod chord;
pub mod database;
pub mod error;
pub mod notes;
pub mod quality;

pub use chord::build_chord;
pub use database::{ChordDatabase, ChordRecord, DEFAULT_ROOT_RANGE, build_database};
pub use error::ChordError;
