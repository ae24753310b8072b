//! Key distance and note transposition
//!
//! Semitone arithmetic between keys and scientific-pitch notes.

use std::cmp::Ordering;

use crate::analysis::result::{letter_pitch, KeyRef, PitchClass, Spelling};

/// Fold a raw semitone difference onto the shortest signed path
///
/// The result lies in `-5..=6`: a tritone is always `+6`, whichever direction
/// the raw difference came from.
pub fn fold_semitones(raw: i32) -> i32 {
    let wrapped = raw.rem_euclid(12);
    if wrapped > 6 {
        wrapped - 12
    } else {
        wrapped
    }
}

/// Semitones from `original` to `target`, or `None` if either key is unknown
///
/// Mode is ignored: only the tonic letters are compared.
pub fn semitones_between(original: &KeyRef, target: &KeyRef) -> Option<i32> {
    let from = original.key()?.tonic();
    let to = target.key()?.tonic();
    Some(fold_semitones(to.index() as i32 - from.index() as i32))
}

/// Semitones from `original` to `target`, with unknown keys treated as 0
///
/// A 0 here does not confirm the keys match: use [`semitones_between`] when
/// "cannot compute" has to be told apart from unison.
///
/// # Example
///
/// ```
/// use setlist_dsp::harmony::calculate_semitones;
/// use setlist_dsp::KeyRef;
///
/// assert_eq!(calculate_semitones(&KeyRef::parse("C"), &KeyRef::parse("G")), -5);
/// assert_eq!(calculate_semitones(&KeyRef::parse("TBC"), &KeyRef::parse("G")), 0);
/// ```
pub fn calculate_semitones(original: &KeyRef, target: &KeyRef) -> i32 {
    semitones_between(original, target).unwrap_or(0)
}

/// Shift a key by `semitones`, keeping its mode; unknown stays unknown
pub fn transpose_key(key: &KeyRef, semitones: i32) -> KeyRef {
    match key {
        KeyRef::Known(k) => KeyRef::Known(k.transpose(semitones)),
        KeyRef::Unknown => KeyRef::Unknown,
    }
}

/// Parse and re-render a stored key string under `spelling`
///
/// `"D Major"` becomes `"D"`, `"bb minor"` becomes `"A#m"` (sharps) or `"Bbm"`
/// (flats); anything unparseable becomes `"TBC"`.
pub fn format_key(text: &str, spelling: Spelling) -> String {
    KeyRef::parse(text).name(spelling)
}

/// A note with octave, e.g. `G5`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Note {
    /// Letter plus accidental, not wrapped: `Cb` is -1, `B#` is 12
    semitone: i32,
    /// Octave as written
    octave: i32,
}

impl Note {
    /// Parse `<A-G>[#|b]<octave 0-8>`
    fn parse(text: &str) -> Option<Self> {
        let (letter, accidental, octave) = match *text.as_bytes() {
            [letter, octave @ b'0'..=b'8'] => (letter, 0, octave),
            [letter, b'#', octave @ b'0'..=b'8'] => (letter, 1, octave),
            [letter, b'b', octave @ b'0'..=b'8'] => (letter, -1, octave),
            _ => return None,
        };
        if !(b'A'..=b'G').contains(&letter) {
            return None;
        }
        Some(Self {
            semitone: letter_pitch(letter as char)? + accidental,
            octave: (octave - b'0') as i32,
        })
    }

    /// Absolute semitone number: `C4` is 48, `Cb4` is 47, `B#3` is 48
    fn ordinal(self) -> i32 {
        self.octave * 12 + self.semitone
    }
}

/// Shift a scientific-pitch note (e.g. `"G5"`) by `semitones`
///
/// The octave follows the carry out of the pitch class and is clamped to 0-8.
/// Accidentals that cross a letter boundary carry too, so `Cb4` is `B3`.
/// Input that is not `<A-G>[#|b]<0-8>` is returned unchanged.
///
/// ```
/// use setlist_dsp::harmony::transpose_note;
/// use setlist_dsp::Spelling;
///
/// assert_eq!(transpose_note("G5", 2, Spelling::Sharps), "A5");
/// assert_eq!(transpose_note("B4", 1, Spelling::Sharps), "C5");
/// assert_eq!(transpose_note("C4", -1, Spelling::Flats), "B3");
/// ```
pub fn transpose_note(text: &str, semitones: i32, spelling: Spelling) -> String {
    let Some(note) = Note::parse(text) else {
        return text.to_string();
    };
    let total = note.ordinal() + semitones;
    let pitch = PitchClass::new(total);
    let octave = total.div_euclid(12).clamp(0, 8);
    format!("{}{}", pitch.name(spelling), octave)
}

/// Order two scientific-pitch notes by octave, then pitch class
///
/// Malformed notes compare as `C4`.
pub fn compare_notes(a: &str, b: &str) -> Ordering {
    let middle_c = Note {
        semitone: 0,
        octave: 4,
    };
    let a = Note::parse(a).unwrap_or(middle_c);
    let b = Note::parse(b).unwrap_or(middle_c);
    a.ordinal().cmp(&b.ordinal())
}
