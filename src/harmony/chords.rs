//! Chord symbol scanning and transposition
//!
//! An explicit scanner finds chord tokens in free-form chord sheets and
//! reports their exact byte spans, so rewriting touches nothing but the
//! tokens themselves.
//!
//! # Grammar
//!
//! ```text
//! chord   := note quality* ("/" note)?
//! note    := [A-G] ("#" | "b")?
//! quality := "maj" | "min" | "dim" | "aug" | "sus" | "add"
//!          | "11" | "13" | "m" | "2" | "4" | "5" | "6" | "7" | "9"
//! ```
//!
//! A token must stand on its own: the characters immediately before and after
//! it may not be alphanumeric or `#`. So `Am7` and `(C/G)` are chords, while
//! `Amazing`, `Cm7b5` and `Bbq` are left alone.

use crate::analysis::result::{letter_pitch, KeyRef, PitchClass, Spelling};
use crate::harmony::interval::calculate_semitones;

/// Quality suffix vocabulary, longest alternatives first
const QUALITIES: [&str; 15] = [
    "maj", "min", "dim", "aug", "sus", "add", "11", "13", "m", "2", "4", "5", "6", "7", "9",
];

/// A chord symbol located in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordToken<'a> {
    /// Byte offset of the root letter
    pub start: usize,
    /// Byte offset one past the token
    pub end: usize,
    /// Root pitch class
    pub root: PitchClass,
    /// Quality suffix exactly as written (may be empty)
    pub quality: &'a str,
    /// Bass pitch class of a slash chord
    pub bass: Option<PitchClass>,
}

impl ChordToken<'_> {
    /// Render shifted by `semitones` under `spelling`, quality unchanged
    pub fn transposed(&self, semitones: i32, spelling: Spelling) -> String {
        let mut out = String::with_capacity(self.end - self.start + 1);
        out.push_str(self.root.transpose(semitones).name(spelling));
        out.push_str(self.quality);
        if let Some(bass) = self.bass {
            out.push('/');
            out.push_str(bass.transpose(semitones).name(spelling));
        }
        out
    }
}

/// Characters that glue a candidate onto surrounding text
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '#'
}

/// True if a token may end at `pos`
fn ends_token(text: &str, pos: usize) -> bool {
    text[pos..].chars().next().map_or(true, |c| !is_word_char(c))
}

/// Parse `[A-G][#|b]?` at `pos`, returning the pitch class and the byte after it
fn parse_note(bytes: &[u8], pos: usize) -> Option<(PitchClass, usize)> {
    let letter = *bytes.get(pos)?;
    if !(b'A'..=b'G').contains(&letter) {
        return None;
    }
    let base = letter_pitch(letter as char)?;
    match bytes.get(pos + 1) {
        Some(b'#') => Some((PitchClass::new(base + 1), pos + 2)),
        Some(b'b') => Some((PitchClass::new(base - 1), pos + 2)),
        _ => Some((PitchClass::new(base), pos + 1)),
    }
}

/// Try to read a full chord token starting at `start`
fn match_chord(text: &str, start: usize) -> Option<ChordToken<'_>> {
    let bytes = text.as_bytes();
    let (root, mut pos) = parse_note(bytes, start)?;

    let quality_start = pos;
    'suffix: loop {
        for q in QUALITIES {
            if bytes[pos..].starts_with(q.as_bytes()) {
                pos += q.len();
                continue 'suffix;
            }
        }
        break;
    }
    let quality = &text[quality_start..pos];

    if bytes.get(pos) == Some(&b'/') {
        if let Some((bass, end)) = parse_note(bytes, pos + 1) {
            // "C/Gx" is not a chord; "C/ " is a chord followed by a slash
            return ends_token(text, end).then_some(ChordToken {
                start,
                end,
                root,
                quality,
                bass: Some(bass),
            });
        }
    }

    ends_token(text, pos).then_some(ChordToken {
        start,
        end: pos,
        root,
        quality,
        bass: None,
    })
}

/// Find every chord token in `text`, in order
///
/// Spans never overlap and `start` strictly increases.
///
/// # Example
///
/// ```
/// use setlist_dsp::harmony::scan_chords;
///
/// let tokens = scan_chords("Am7   D/F#\nHello there");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!((tokens[0].start, tokens[0].end), (0, 3));
/// assert_eq!(tokens[1].quality, "");
/// ```
pub fn scan_chords(text: &str) -> Vec<ChordToken<'_>> {
    let mut tokens = Vec::new();
    let mut prev: Option<char> = None;
    let mut pos = 0;

    while let Some(c) = text[pos..].chars().next() {
        let at_boundary = prev.map_or(true, |p| !is_word_char(p));
        if at_boundary && ('A'..='G').contains(&c) {
            if let Some(token) = match_chord(text, pos) {
                pos = token.end;
                prev = text[..pos].chars().next_back();
                tokens.push(token);
                continue;
            }
        }
        prev = Some(c);
        pos += c.len_utf8();
    }

    tokens
}

/// Shift every chord token in `text` by `semitones`
///
/// Text outside tokens is copied unchanged. A shift of 0 returns the text as-is
/// without re-spelling.
pub fn transpose_chords_by(text: &str, semitones: i32, spelling: Spelling) -> String {
    if semitones.rem_euclid(12) == 0 {
        return text.to_string();
    }

    let tokens = scan_chords(text);
    let mut out = String::with_capacity(text.len() + tokens.len());
    let mut last = 0;
    for token in &tokens {
        out.push_str(&text[last..token.start]);
        out.push_str(&token.transposed(semitones, spelling));
        last = token.end;
    }
    out.push_str(&text[last..]);

    log::debug!(
        "Transposed {} chord tokens by {} semitones ({:?})",
        tokens.len(),
        semitones,
        spelling
    );

    out
}

/// Rewrite the chords of a sheet written in `from` so it sounds in `to`
///
/// Unknown keys on either side leave the text untouched. Never fails.
///
/// # Example
///
/// ```
/// use setlist_dsp::harmony::transpose_chords;
/// use setlist_dsp::{KeyRef, Spelling};
///
/// let (from, to) = (KeyRef::parse("C"), KeyRef::parse("D"));
/// let out = transpose_chords("C G Am F", &from, &to, Spelling::Sharps);
/// assert_eq!(out, "D A Bm G");
/// ```
pub fn transpose_chords(text: &str, from: &KeyRef, to: &KeyRef, spelling: Spelling) -> String {
    let delta = calculate_semitones(from, to);
    transpose_chords_by(text, delta, spelling)
}

/// True if any whitespace-separated word is a chord symbol
///
/// Surrounding brackets and bar lines are ignored, so `"| Am | (G) |"` counts
/// while `"Amazing grace"` does not.
pub fn is_chord_line(line: &str) -> bool {
    line.split_whitespace().any(|word| {
        let word =
            word.trim_matches(|c: char| matches!(c, '(' | ')' | '[' | ']' | '|' | ',' | '.'));
        !word.is_empty() && match_chord(word, 0).is_some_and(|t| t.end == word.len())
    })
}
