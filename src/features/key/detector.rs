//! Key detection by profile correlation
//!
//! Correlates an averaged chroma vector against all 24 rotated key profiles and
//! ranks the hypotheses.
//!
//! # Reference
//!
//! Krumhansl, C. L. (1990). *Cognitive Foundations of Musical Pitch*. Oxford
//! University Press. (Krumhansl-Schmuckler key-finding algorithm)

use super::templates::KeyTemplates;
use crate::analysis::result::{Key, KeyCandidate, PitchClass};
use crate::features::chroma::ChromaVector;

/// Pearson correlation coefficient of two 12-element vectors
///
/// Returns 0.0 when either vector has zero variance.
pub fn pearson(a: &[f32; 12], b: &[f32; 12]) -> f32 {
    let n = 12.0f64;
    let mean_a = a.iter().map(|&x| x as f64).sum::<f64>() / n;
    let mean_b = b.iter().map(|&x| x as f64).sum::<f64>() / n;

    let mut num = 0.0f64;
    let mut den_a = 0.0f64;
    let mut den_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let da = x as f64 - mean_a;
        let db = y as f64 - mean_b;
        num += da * db;
        den_a += da * da;
        den_b += db * db;
    }

    let den = (den_a * den_b).sqrt();
    if den == 0.0 {
        0.0
    } else {
        (num / den) as f32
    }
}

/// Score all 24 keys against `chroma`, highest first
///
/// Hypotheses are generated root by root (major before minor for each root)
/// and sorted stably, so equal scores keep that order.
///
/// # Example
///
/// ```
/// use setlist_dsp::features::key::{score_keys, KeyTemplates};
/// use setlist_dsp::{Key, PitchClass};
///
/// // C major triad
/// let mut chroma = [0.0f32; 12];
/// chroma[0] = 1.0;
/// chroma[4] = 1.0;
/// chroma[7] = 1.0;
/// let scores = score_keys(&chroma, &KeyTemplates::new());
/// assert_eq!(scores.len(), 24);
/// assert_eq!(scores[0].0, Key::Major(PitchClass::new(0)));
/// ```
pub fn score_keys(chroma: &ChromaVector, templates: &KeyTemplates) -> Vec<(Key, f32)> {
    let mut scores = Vec::with_capacity(24);
    for root in 0..12 {
        let tonic = PitchClass::new(root as i32);
        scores.push((
            Key::Major(tonic),
            pearson(chroma, templates.get_major_template(root)),
        ));
        scores.push((
            Key::Minor(tonic),
            pearson(chroma, templates.get_minor_template(root)),
        ));
    }

    scores.sort_by(|a, b| b.1.total_cmp(&a.1));

    log::debug!(
        "Key scores: best={:?} ({:.4}), runner-up={:?} ({:.4})",
        scores[0].0,
        scores[0].1,
        scores[1].0,
        scores[1].1
    );

    scores
}

/// Take the first `top_n` ranked scores as candidates
///
/// `confidence = round(score * 100)`.
pub fn rank_candidates(scores: &[(Key, f32)], top_n: usize) -> Vec<KeyCandidate> {
    scores
        .iter()
        .take(top_n)
        .map(|&(key, score)| KeyCandidate {
            key,
            confidence: (score * 100.0).round() as i32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::key::templates::{rotate, MAJOR_PROFILE, MINOR_PROFILE};

    fn triad(pcs: [usize; 3]) -> ChromaVector {
        let mut chroma = [0.0f32; 12];
        for pc in pcs {
            chroma[pc] = 1.0;
        }
        chroma
    }

    #[test]
    fn test_pearson_identical_is_one() {
        assert!((pearson(&MAJOR_PROFILE, &MAJOR_PROFILE) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pearson_flat_vector_is_zero() {
        assert_eq!(pearson(&[1.0; 12], &MAJOR_PROFILE), 0.0);
        assert_eq!(pearson(&[0.0; 12], &MINOR_PROFILE), 0.0);
    }

    #[test]
    fn test_pearson_negated_is_minus_one() {
        let neg: Vec<f32> = MAJOR_PROFILE.iter().map(|x| -x).collect();
        let neg: [f32; 12] = neg.try_into().unwrap();
        assert!((pearson(&MAJOR_PROFILE, &neg) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotated_profile_scores_its_own_key_first() {
        let templates = KeyTemplates::new();
        for root in 0..12 {
            let major = rotate(&MAJOR_PROFILE, root);
            let scores = score_keys(&major, &templates);
            assert_eq!(scores[0].0, Key::Major(PitchClass::new(root as i32)));
            assert!((scores[0].1 - 1.0).abs() < 1e-5);

            let minor = rotate(&MINOR_PROFILE, root);
            let scores = score_keys(&minor, &templates);
            assert_eq!(scores[0].0, Key::Minor(PitchClass::new(root as i32)));
        }
    }

    #[test]
    fn test_triads() {
        let templates = KeyTemplates::new();
        // C-E-G
        let scores = score_keys(&triad([0, 4, 7]), &templates);
        assert_eq!(scores[0].0, Key::Major(PitchClass::new(0)));
        // A-C-E
        let scores = score_keys(&triad([9, 0, 4]), &templates);
        assert_eq!(scores[0].0, Key::Minor(PitchClass::new(9)));
    }

    #[test]
    fn test_scores_sorted_descending() {
        let scores = score_keys(&triad([2, 6, 9]), &KeyTemplates::new());
        for pair in scores.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_flat_chroma_keeps_generation_order() {
        // All correlations are 0; the stable sort keeps C major, C minor, C# major...
        let scores = score_keys(&[0.5; 12], &KeyTemplates::new());
        assert_eq!(scores[0].0, Key::Major(PitchClass::new(0)));
        assert_eq!(scores[1].0, Key::Minor(PitchClass::new(0)));
        assert_eq!(scores[2].0, Key::Major(PitchClass::new(1)));
    }

    #[test]
    fn test_rank_candidates_rounds_confidence() {
        let c = PitchClass::new(0);
        let scores = vec![
            (Key::Major(c), 0.876),
            (Key::Minor(c), 0.5),
            (Key::Major(PitchClass::new(7)), -0.234),
            (Key::Minor(PitchClass::new(9)), -0.9),
        ];
        let candidates = rank_candidates(&scores, 3);
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].confidence, 88);
        assert_eq!(candidates[1].confidence, 50);
        assert_eq!(candidates[2].confidence, -23);
    }
}
