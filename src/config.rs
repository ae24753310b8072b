//! Configuration parameters for key analysis

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Key analysis configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    // Analysis region
    /// Seconds before the track midpoint where the analysed segment starts (default: 30.0)
    pub segment_lead_seconds: f32,

    /// Maximum length of the analysed segment in seconds (default: 60.0)
    /// Keeps intros and long fades out of the chroma average
    pub segment_length_seconds: f32,

    // Framing
    /// Samples per analysis frame; frames do not overlap (default: 8192)
    pub frame_size: usize,

    // Chroma extraction
    /// Reference tuning for A4 in Hz (default: 440.0)
    pub tuning_hz: f32,

    /// Lowest spectral bin frequency folded into chroma (default: 55.0 Hz, A1)
    pub min_frequency: f32,

    /// Highest spectral bin frequency folded into chroma (default: 5000.0 Hz)
    pub max_frequency: f32,

    /// Floor for per-frame max normalization (default: 1e-4)
    pub chroma_epsilon: f32,

    // Ranking
    /// Number of key candidates returned (default: 3)
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            segment_lead_seconds: 30.0,
            segment_length_seconds: 60.0,
            frame_size: 8192,
            tuning_hz: 440.0,
            min_frequency: 55.0,
            max_frequency: 5000.0,
            chroma_epsilon: 1e-4,
            top_n: 3,
        }
    }
}

impl AnalysisConfig {
    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.frame_size < 2 {
            return Err(AnalysisError::InvalidInput(format!(
                "frame_size must be >= 2, got {}",
                self.frame_size
            )));
        }
        if !self.segment_lead_seconds.is_finite() || self.segment_lead_seconds < 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "segment_lead_seconds must be finite and >= 0, got {}",
                self.segment_lead_seconds
            )));
        }
        if !self.segment_length_seconds.is_finite() || self.segment_length_seconds <= 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "segment_length_seconds must be finite and > 0, got {}",
                self.segment_length_seconds
            )));
        }
        if !self.tuning_hz.is_finite() || self.tuning_hz <= 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "tuning_hz must be > 0, got {}",
                self.tuning_hz
            )));
        }
        if !(self.min_frequency > 0.0 && self.max_frequency > self.min_frequency) {
            return Err(AnalysisError::InvalidInput(format!(
                "Invalid frequency band: min={}, max={}",
                self.min_frequency, self.max_frequency
            )));
        }
        if !self.chroma_epsilon.is_finite() || self.chroma_epsilon <= 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "chroma_epsilon must be > 0, got {}",
                self.chroma_epsilon
            )));
        }
        if self.top_n == 0 || self.top_n > 24 {
            return Err(AnalysisError::InvalidInput(format!(
                "top_n must be within 1..=24, got {}",
                self.top_n
            )));
        }
        Ok(())
    }
}
