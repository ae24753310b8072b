//! Analysis region selection
//!
//! Picks a bounded segment around the middle of a track so intro silence and
//! long fades do not dilute the chroma average.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

/// Sample range selected for analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSegment {
    /// First sample index (inclusive)
    pub start: usize,

    /// Last sample index (exclusive), never beyond the buffer length
    pub end: usize,
}

impl AnalysisSegment {
    /// Number of samples in the segment
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the segment holds no samples
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Number of whole, non-overlapping frames that fit
    pub fn frame_count(&self, frame_size: usize) -> usize {
        if frame_size == 0 {
            return 0;
        }
        self.len() / frame_size
    }
}

/// Select the central analysis segment
///
/// Starts `segment_lead_seconds` before the midpoint (never before 0) and runs
/// for at most `segment_length_seconds` (never past `duration`). Times are
/// converted to sample offsets by flooring, then clamped to `buffer_len`.
///
/// # Arguments
///
/// * `buffer_len` - Number of decoded samples available
/// * `sample_rate` - Sample rate in Hz
/// * `duration` - Track duration in seconds as reported by the decoder
/// * `config` - Analysis configuration
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for a zero sample rate or a negative
/// or non-finite duration.
///
/// # Example
///
/// ```
/// use setlist_dsp::config::AnalysisConfig;
/// use setlist_dsp::preprocessing::segment::select_segment;
///
/// // 4 minute track: analyse 1:30 to 2:30
/// let seg = select_segment(44100 * 240, 44100, 240.0, &AnalysisConfig::default())?;
/// assert_eq!(seg.start, 44100 * 90);
/// assert_eq!(seg.end, 44100 * 150);
/// # Ok::<(), setlist_dsp::AnalysisError>(())
/// ```
pub fn select_segment(
    buffer_len: usize,
    sample_rate: u32,
    duration: f32,
    config: &AnalysisConfig,
) -> Result<AnalysisSegment, AnalysisError> {
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Sample rate must be > 0".to_string(),
        ));
    }

    if !duration.is_finite() || duration < 0.0 {
        return Err(AnalysisError::InvalidInput(format!(
            "Duration must be finite and >= 0, got {}",
            duration
        )));
    }

    let duration = duration as f64;
    let start_time = (duration / 2.0 - config.segment_lead_seconds as f64).max(0.0);
    let end_time = duration.min(start_time + config.segment_length_seconds as f64);

    let rate = sample_rate as f64;
    let end = ((end_time * rate).floor() as usize).min(buffer_len);
    let start = ((start_time * rate).floor() as usize).min(end);

    log::debug!(
        "Analysis segment: {:.2}s-{:.2}s -> samples {}..{} of {}",
        start_time,
        end_time,
        start,
        end,
        buffer_len
    );

    Ok(AnalysisSegment { start, end })
}
