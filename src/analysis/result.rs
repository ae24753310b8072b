//! Shared music vocabulary types
//!
//! Pitch classes, keys and enharmonic spelling preferences used by the key
//! detector and the transposer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical sharp spelling, indexed by pitch class
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Canonical flat spelling, indexed by pitch class
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Enharmonic spelling preference for rendering pitch classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    /// C#, D#, F#, G#, A#
    #[default]
    Sharps,
    /// Db, Eb, Gb, Ab, Bb
    Flats,
    /// No stated preference; renders as sharps
    Neutral,
}

impl Spelling {
    /// Spelling table for this preference
    pub fn names(self) -> &'static [&'static str; 12] {
        match self {
            Spelling::Flats => &FLAT_NAMES,
            Spelling::Sharps | Spelling::Neutral => &SHARP_NAMES,
        }
    }
}

/// Chromatic position (C = 0 ... B = 11), always reduced modulo 12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct PitchClass(u8);

impl From<i32> for PitchClass {
    fn from(value: i32) -> Self {
        PitchClass::new(value)
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> Self {
        pc.0
    }
}

impl PitchClass {
    /// Build a pitch class from any integer, wrapping into 0-11
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(12) as u8)
    }

    /// Position in 0-11
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Shift by a signed number of semitones
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }

    /// Name under the given spelling preference
    ///
    /// ```
    /// use setlist_dsp::{PitchClass, Spelling};
    ///
    /// assert_eq!(PitchClass::new(10).name(Spelling::Flats), "Bb");
    /// assert_eq!(PitchClass::new(10).name(Spelling::Sharps), "A#");
    /// ```
    pub fn name(self, spelling: Spelling) -> &'static str {
        spelling.names()[self.index()]
    }

    /// Parse a note name: letter A-G (either case) plus an optional accidental
    ///
    /// Accepts `#`, `b`, `♯` and `♭`. Returns `None` for anything else, including
    /// trailing characters.
    pub fn from_name(name: &str) -> Option<Self> {
        let (pc, rest) = parse_note_prefix(name)?;
        rest.is_empty().then_some(pc)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Spelling::Sharps))
    }
}

/// Natural (unaltered) pitch class of a note letter
pub(crate) fn letter_pitch(letter: char) -> Option<i32> {
    match letter.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Parse a leading note name and return it with the unparsed remainder
fn parse_note_prefix(text: &str) -> Option<(PitchClass, &str)> {
    let mut chars = text.chars();
    let base = letter_pitch(chars.next()?)?;
    let rest = chars.as_str();
    let (offset, rest) = match rest.chars().next() {
        Some(c @ ('#' | '♯')) => (1, &rest[c.len_utf8()..]),
        Some(c @ ('b' | '♭')) => (-1, &rest[c.len_utf8()..]),
        _ => (0, rest),
    };
    Some((PitchClass::new(base + offset), rest))
}

/// Musical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Major key on the given tonic
    Major(PitchClass),
    /// Minor key on the given tonic
    Minor(PitchClass),
}

impl Key {
    /// Tonic pitch class, ignoring mode
    pub fn tonic(&self) -> PitchClass {
        match self {
            Key::Major(pc) | Key::Minor(pc) => *pc,
        }
    }

    /// True for minor keys
    pub fn is_minor(&self) -> bool {
        matches!(self, Key::Minor(_))
    }

    /// Same mode, tonic shifted by `semitones`
    pub fn transpose(&self, semitones: i32) -> Self {
        match self {
            Key::Major(pc) => Key::Major(pc.transpose(semitones)),
            Key::Minor(pc) => Key::Minor(pc.transpose(semitones)),
        }
    }

    /// Key name in shorthand notation (e.g., "C", "Am", "Bb", "F#m")
    ///
    /// # Example
    ///
    /// ```
    /// use setlist_dsp::{Key, PitchClass, Spelling};
    ///
    /// assert_eq!(Key::Major(PitchClass::new(0)).name(Spelling::Sharps), "C");
    /// assert_eq!(Key::Minor(PitchClass::new(9)).name(Spelling::Sharps), "Am");
    /// assert_eq!(Key::Major(PitchClass::new(3)).name(Spelling::Flats), "Eb");
    /// ```
    pub fn name(&self, spelling: Spelling) -> String {
        match self {
            Key::Major(pc) => pc.name(spelling).to_string(),
            Key::Minor(pc) => format!("{}m", pc.name(spelling)),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name(Spelling::Sharps))
    }
}

/// A key that may not have been confirmed yet
///
/// Stored keys use `"TBC"` for "to be confirmed". Keeping that case as its own
/// variant lets callers tell "no transposition needed" apart from "cannot
/// compute".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyRef {
    /// Sentinel `"TBC"`, empty, or unparseable
    Unknown,
    /// A concrete key
    Known(Key),
}

impl KeyRef {
    /// Parse a stored key string
    ///
    /// Accepts shorthand (`"D"`, `"Dm"`, `"Bbm"`, `"Amin"`, `"Cmaj"`) and long
    /// form (`"D Major"`, `"C minor"`), case-insensitively. Empty strings,
    /// `"TBC"`, strings starting with a digit, and anything else that does not
    /// parse become `Unknown`.
    ///
    /// ```
    /// use setlist_dsp::{Key, KeyRef, PitchClass};
    ///
    /// assert_eq!(KeyRef::parse("C Minor"), KeyRef::Known(Key::Minor(PitchClass::new(0))));
    /// assert_eq!(KeyRef::parse("TBC"), KeyRef::Unknown);
    /// ```
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("TBC")
            || trimmed.starts_with(|c: char| c.is_ascii_digit())
        {
            return KeyRef::Unknown;
        }

        let lower = trimmed.to_lowercase();
        let first_word = trimmed.split_whitespace().next().unwrap_or(trimmed);
        let (root_text, long_form_minor) = if lower.contains("minor") {
            (first_word, Some(true))
        } else if lower.contains("major") {
            (first_word, Some(false))
        } else {
            (trimmed, None)
        };

        // Uppercase letter, lowercase remainder: "bb" reads as B flat, "CM" as C minor.
        let mut chars = root_text.chars();
        let Some(letter) = chars.next() else {
            return KeyRef::Unknown;
        };
        let normalized = format!(
            "{}{}",
            letter.to_ascii_uppercase(),
            chars.as_str().to_lowercase()
        );

        let Some((tonic, suffix)) = parse_note_prefix(&normalized) else {
            return KeyRef::Unknown;
        };

        let minor = match (long_form_minor, suffix) {
            (Some(minor), "") => minor,
            (None, "" | "maj") => false,
            (None, "m" | "min") => true,
            _ => return KeyRef::Unknown,
        };

        KeyRef::Known(if minor {
            Key::Minor(tonic)
        } else {
            Key::Major(tonic)
        })
    }

    /// The key, if known
    pub fn key(&self) -> Option<Key> {
        match self {
            KeyRef::Known(key) => Some(*key),
            KeyRef::Unknown => None,
        }
    }

    /// Render with a spelling preference; unknown keys render as `"TBC"`
    pub fn name(&self, spelling: Spelling) -> String {
        match self {
            KeyRef::Known(key) => key.name(spelling),
            KeyRef::Unknown => "TBC".to_string(),
        }
    }
}

impl From<Key> for KeyRef {
    fn from(key: Key) -> Self {
        KeyRef::Known(key)
    }
}

impl fmt::Display for KeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name(Spelling::Sharps))
    }
}

/// One ranked key hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCandidate {
    /// Hypothesised key
    pub key: Key,

    /// Pearson correlation scaled by 100 and rounded
    ///
    /// Not a probability: lies roughly in [-100, 100] and may be negative.
    pub confidence: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_wraps() {
        assert_eq!(PitchClass::new(12).index(), 0);
        assert_eq!(PitchClass::new(-1).index(), 11);
        assert_eq!(PitchClass::new(25).index(), 1);
        assert_eq!(PitchClass::new(11).transpose(2).index(), 1);
        assert_eq!(PitchClass::new(0).transpose(-13).index(), 11);
    }

    #[test]
    fn test_pitch_class_from_name() {
        assert_eq!(PitchClass::from_name("C"), Some(PitchClass::new(0)));
        assert_eq!(PitchClass::from_name("Bb"), Some(PitchClass::new(10)));
        assert_eq!(PitchClass::from_name("A#"), Some(PitchClass::new(10)));
        assert_eq!(PitchClass::from_name("Cb"), Some(PitchClass::new(11)));
        assert_eq!(PitchClass::from_name("E#"), Some(PitchClass::new(5)));
        assert_eq!(PitchClass::from_name("F♯"), Some(PitchClass::new(6)));
        assert_eq!(PitchClass::from_name("H"), None);
        assert_eq!(PitchClass::from_name("Cm"), None);
        assert_eq!(PitchClass::from_name(""), None);
    }

    #[test]
    fn test_spelling_tables() {
        let flats: Vec<&str> = (0..12).map(|i| PitchClass::new(i).name(Spelling::Flats)).collect();
        assert_eq!(
            flats,
            ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"]
        );
        assert_eq!(PitchClass::new(6).name(Spelling::Neutral), "F#");
    }

    #[test]
    fn test_key_parse_shorthand() {
        assert_eq!(KeyRef::parse("C"), KeyRef::Known(Key::Major(PitchClass::new(0))));
        assert_eq!(KeyRef::parse("Am"), KeyRef::Known(Key::Minor(PitchClass::new(9))));
        assert_eq!(KeyRef::parse("bbm"), KeyRef::Known(Key::Minor(PitchClass::new(10))));
        assert_eq!(KeyRef::parse("F#"), KeyRef::Known(Key::Major(PitchClass::new(6))));
        assert_eq!(KeyRef::parse("Emin"), KeyRef::Known(Key::Minor(PitchClass::new(4))));
        assert_eq!(KeyRef::parse(" g "), KeyRef::Known(Key::Major(PitchClass::new(7))));
    }

    #[test]
    fn test_key_parse_long_form() {
        assert_eq!(
            KeyRef::parse("D Major"),
            KeyRef::Known(Key::Major(PitchClass::new(2)))
        );
        assert_eq!(
            KeyRef::parse("c minor"),
            KeyRef::Known(Key::Minor(PitchClass::new(0)))
        );
        assert_eq!(
            KeyRef::parse("Eb Minor"),
            KeyRef::Known(Key::Minor(PitchClass::new(3)))
        );
    }

    #[test]
    fn test_key_parse_unknown() {
        assert_eq!(KeyRef::parse("TBC"), KeyRef::Unknown);
        assert_eq!(KeyRef::parse("tbc"), KeyRef::Unknown);
        assert_eq!(KeyRef::parse(""), KeyRef::Unknown);
        assert_eq!(KeyRef::parse("8A"), KeyRef::Unknown);
        assert_eq!(KeyRef::parse("Xm"), KeyRef::Unknown);
        assert_eq!(KeyRef::parse("C dorian"), KeyRef::Unknown);
    }

    #[test]
    fn test_key_name_and_display() {
        let key = Key::Minor(PitchClass::new(1));
        assert_eq!(key.name(Spelling::Sharps), "C#m");
        assert_eq!(key.name(Spelling::Flats), "Dbm");
        assert_eq!(key.to_string(), "C#m");
        assert_eq!(KeyRef::Unknown.to_string(), "TBC");
    }

    #[test]
    fn test_key_transpose_keeps_mode() {
        let key = Key::Minor(PitchClass::new(9)).transpose(3);
        assert_eq!(key, Key::Minor(PitchClass::new(0)));
    }

    #[test]
    fn test_spelling_serde_names() {
        assert_eq!(serde_json::to_string(&Spelling::Flats).unwrap(), "\"flats\"");
        let parsed: Spelling = serde_json::from_str("\"sharps\"").unwrap();
        assert_eq!(parsed, Spelling::Sharps);
    }
}
