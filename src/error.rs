//! Error types for the music analysis engine

use std::fmt;

/// Errors that can occur during key analysis
///
/// Chord transposition and setlist sequencing never fail; only the audio path
/// produces errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Invalid input parameters (zero sample rate, non-finite duration, bad config)
    InvalidInput(String),

    /// The analysis segment did not yield a single usable frame
    NoFrames {
        /// Frame size the segment was partitioned into
        frame_size: usize,
        /// Samples available inside the analysis segment
        available_samples: usize,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::NoFrames {
                frame_size,
                available_samples,
            } => write!(
                f,
                "Analysis failed: no usable frames ({} samples in segment, frame size {})",
                available_samples, frame_size
            ),
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_no_frames() {
        let err = AnalysisError::NoFrames {
            frame_size: 8192,
            available_samples: 100,
        };
        let msg = err.to_string();
        assert!(msg.contains("no usable frames"));
        assert!(msg.contains("100"));
        assert!(msg.contains("8192"));
    }

    #[test]
    fn test_display_invalid_input() {
        let err = AnalysisError::InvalidInput("Sample rate must be > 0".to_string());
        assert_eq!(err.to_string(), "Invalid input: Sample rate must be > 0");
    }
}
