//! Key detection modules
//!
//! Detect musical key using:
//! - Temperley profiles (24 keys)
//! - Pearson correlation against the averaged chroma
//! - Ranked top-N candidates

pub mod detector;
pub mod templates;

pub use detector::{pearson, rank_candidates, score_keys};
pub use templates::KeyTemplates;

use serde::{Deserialize, Serialize};

use crate::analysis::result::{Key, KeyCandidate};
use crate::features::chroma::ChromaVector;
use crate::preprocessing::segment::AnalysisSegment;

/// Full key analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyAnalysis {
    /// Top candidates (default: 3), non-increasing confidence
    pub candidates: Vec<KeyCandidate>,

    /// All 24 key scores (ranked, highest first)
    pub all_scores: Vec<(Key, f32)>,

    /// Averaged, per-frame-normalized chroma of the analysed segment
    pub chroma: ChromaVector,

    /// Usable frames that went into the average
    pub frame_count: usize,

    /// Sample range that was analysed
    pub segment: AnalysisSegment,
}

impl KeyAnalysis {
    /// Best candidate
    pub fn best(&self) -> Option<&KeyCandidate> {
        self.candidates.first()
    }
}
