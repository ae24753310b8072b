//! # Setlist DSP
//!
//! The music analysis engine behind a setlist and repertoire manager: estimate
//! the key of a recording, move chord sheets between keys, and sequence a set
//! by energy.
//!
//! ## Features
//!
//! - **Key Detection**: Chroma correlation against Temperley key profiles over
//!   the central minute of a track, returning the top 3 key candidates
//! - **Transposition**: Shortest-path semitone distance between keys and a
//!   chord-sheet rewriter that leaves lyrics and layout untouched
//! - **Set Sequencing**: Energy-zone flow strategies, energy curve and fatigue
//!   detection
//!
//! ## Quick Start
//!
//! ```no_run
//! use setlist_dsp::detect_key;
//! use setlist_dsp::Spelling;
//!
//! // Decoded mono samples from your audio layer
//! let samples: Vec<f32> = vec![]; // Your audio data
//! let sample_rate = 44100;
//! let duration = samples.len() as f32 / sample_rate as f32;
//!
//! for candidate in detect_key(&samples, sample_rate, duration)? {
//!     println!("{} ({})", candidate.key.name(Spelling::Sharps), candidate.confidence);
//! }
//! # Ok::<(), setlist_dsp::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! Three independent, stateless components:
//!
//! ```text
//! Samples → Segment → Frames → Chroma → Profile correlation → Key candidates
//! Chord sheet + (from, to) keys → Chord scanner → Transposed sheet
//! Songs + FlowStrategy → Ordered set, energy curve, fatigue runs
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod harmony;
pub mod preprocessing;
pub mod setlist;

// Re-export main types
pub use analysis::result::{Key, KeyCandidate, KeyRef, PitchClass, Spelling};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use features::key::KeyAnalysis;
pub use harmony::{calculate_semitones, semitones_between, transpose_chords};
pub use setlist::{
    analyze_energy_fatigue, calculate_energy_curve, sort_songs_by_strategy, EnergyTagged,
    EnergyZone, FlowStrategy,
};

use features::chroma::{ChromaAccumulator, ChromaExtractor};
use features::key::{rank_candidates, score_keys, KeyTemplates};
use preprocessing::{select_segment, windowing::frames};

/// Detect the key of a decoded recording
///
/// Analyses the central segment of the track with the default configuration
/// and returns the 3 best key hypotheses, sorted by non-increasing confidence.
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `sample_rate` - Sample rate in Hz (typically 44100 or 48000)
/// * `duration` - Track duration in seconds
///
/// # Errors
///
/// Returns `AnalysisError::NoFrames` if the analysed segment is shorter than one
/// frame or entirely silent, and `AnalysisError::InvalidInput` for a zero sample
/// rate or invalid duration.
///
/// # Example
///
/// ```no_run
/// use setlist_dsp::detect_key;
///
/// // 30 seconds of A440
/// let samples: Vec<f32> = (0..44100 * 30)
///     .map(|i| (i as f32 * 440.0 * 2.0 * std::f32::consts::PI / 44100.0).sin())
///     .collect();
/// let candidates = detect_key(&samples, 44100, 30.0)?;
/// assert_eq!(candidates.len(), 3);
/// # Ok::<(), setlist_dsp::AnalysisError>(())
/// ```
pub fn detect_key(
    samples: &[f32],
    sample_rate: u32,
    duration: f32,
) -> Result<Vec<KeyCandidate>, AnalysisError> {
    detect_key_with_config(samples, sample_rate, duration, &AnalysisConfig::default())
}

/// [`detect_key`] with a custom configuration
pub fn detect_key_with_config(
    samples: &[f32],
    sample_rate: u32,
    duration: f32,
    config: &AnalysisConfig,
) -> Result<Vec<KeyCandidate>, AnalysisError> {
    Ok(analyze_key(samples, sample_rate, duration, config)?.candidates)
}

/// Run the full key analysis and keep the intermediate results
///
/// Same pipeline as [`detect_key`], also returning all 24 scores, the averaged
/// chroma, the frame count and the analysed sample range.
///
/// # Errors
///
/// See [`detect_key`]; an invalid `config` is reported as `InvalidInput`.
pub fn analyze_key(
    samples: &[f32],
    sample_rate: u32,
    duration: f32,
    config: &AnalysisConfig,
) -> Result<KeyAnalysis, AnalysisError> {
    log::debug!(
        "Starting key analysis: {} samples at {} Hz, {:.2}s",
        samples.len(),
        sample_rate,
        duration
    );

    // Validates the config and sample rate
    let mut extractor = ChromaExtractor::new(sample_rate, config)?;
    let segment = select_segment(samples.len(), sample_rate, duration, config)?;

    let mut accumulator = ChromaAccumulator::new();
    for frame in frames(samples, segment, config.frame_size) {
        let chroma = extractor.extract(frame)?;
        accumulator.push(&chroma, config.chroma_epsilon);
    }

    let chroma = accumulator.mean().ok_or(AnalysisError::NoFrames {
        frame_size: config.frame_size,
        available_samples: segment.len(),
    })?;
    let frame_count = accumulator.frame_count();

    log::debug!(
        "Averaged chroma over {} of {} frames",
        frame_count,
        segment.frame_count(config.frame_size)
    );

    let all_scores = score_keys(&chroma, &KeyTemplates::new());
    let candidates = rank_candidates(&all_scores, config.top_n);

    Ok(KeyAnalysis {
        candidates,
        all_scores,
        chroma,
        frame_count,
        segment,
    })
}
