//! Key distance and chord transposition
//!
//! - Shortest signed semitone distance between two keys
//! - Key, note and chord-sheet transposition with a spelling preference
//!
//! Nothing in this module fails: unknown keys and malformed chord symbols
//! degrade to a no-op.

pub mod chords;
pub mod interval;

pub use chords::{is_chord_line, scan_chords, transpose_chords, transpose_chords_by, ChordToken};
pub use interval::{
    calculate_semitones, compare_notes, fold_semitones, format_key, semitones_between,
    transpose_key, transpose_note,
};
