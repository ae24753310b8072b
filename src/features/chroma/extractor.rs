//! Chroma vector extraction
//!
//! Converts Hann-tapered frames into 12-element chroma vectors by folding the
//! FFT magnitude spectrum onto pitch classes.
//!
//! # Algorithm
//!
//! 1. Taper the frame with a Hann window
//! 2. FFT, keep bins 1..=N/2 (DC is never pitched)
//! 3. For each bin with centre frequency in `[min_frequency, max_frequency]`:
//!    `pitch_class = round(12 * log2(f / tuning) + 69) mod 12`
//! 4. Sum magnitudes per pitch class

use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::preprocessing::windowing::{apply_window, hann_window};

/// 12-bin pitch-class energy vector (C = 0 ... B = 11)
pub type ChromaVector = [f32; 12];

/// Reusable per-call chroma extractor
///
/// Plans the FFT and precomputes the bin-to-pitch-class map once, then
/// processes any number of frames of the configured size.
pub struct ChromaExtractor {
    frame_size: usize,
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    /// Pitch class of each spectral bin, `None` outside the analysed band
    bin_pitch: Vec<Option<usize>>,
    tapered: Vec<f32>,
    spectrum: Vec<Complex<f32>>,
}

impl ChromaExtractor {
    /// Build an extractor for `sample_rate` using `config`'s frame size and band
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` for a zero sample rate or an invalid
    /// configuration.
    pub fn new(sample_rate: u32, config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        if sample_rate == 0 {
            return Err(AnalysisError::InvalidInput(
                "Sample rate must be > 0".to_string(),
            ));
        }

        let frame_size = config.frame_size;
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(frame_size);

        let bin_hz = sample_rate as f32 / frame_size as f32;
        let bin_pitch = (0..=frame_size / 2)
            .map(|bin| {
                let freq = bin as f32 * bin_hz;
                if bin == 0 || freq < config.min_frequency || freq > config.max_frequency {
                    None
                } else {
                    Some(frequency_to_pitch_class(freq, config.tuning_hz))
                }
            })
            .collect();

        log::debug!(
            "Chroma extractor: frame_size={}, bin resolution={:.2} Hz, band=[{:.1}, {:.1}] Hz",
            frame_size,
            bin_hz,
            config.min_frequency,
            config.max_frequency
        );

        Ok(Self {
            frame_size,
            fft,
            window: hann_window(frame_size),
            bin_pitch,
            tapered: vec![0.0; frame_size],
            spectrum: vec![Complex::new(0.0, 0.0); frame_size],
        })
    }

    /// Frame size this extractor was planned for
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Raw (unnormalized) chroma of one frame
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `frame` is not exactly
    /// `frame_size` samples.
    pub fn extract(&mut self, frame: &[f32]) -> Result<ChromaVector, AnalysisError> {
        if frame.len() != self.frame_size {
            return Err(AnalysisError::InvalidInput(format!(
                "Frame has {} samples, expected {}",
                frame.len(),
                self.frame_size
            )));
        }

        apply_window(frame, &self.window, &mut self.tapered);
        for (c, &x) in self.spectrum.iter_mut().zip(&self.tapered) {
            *c = Complex::new(x, 0.0);
        }
        self.fft.process(&mut self.spectrum);

        let mut chroma = [0.0f32; 12];
        for (bin, pitch) in self.bin_pitch.iter().enumerate() {
            if let Some(pc) = pitch {
                chroma[*pc] += self.spectrum[bin].norm();
            }
        }
        Ok(chroma)
    }
}

/// Map a frequency to its nearest equal-tempered pitch class
///
/// MIDI 69 is A at `tuning_hz`, so 440 Hz maps to 9 (A) and 261.63 Hz to 0 (C).
pub fn frequency_to_pitch_class(freq: f32, tuning_hz: f32) -> usize {
    let midi = 12.0 * (freq / tuning_hz).log2() + 69.0;
    (midi.round() as i64).rem_euclid(12) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, sample_rate: u32, n: usize) -> Vec<f32> {
        (0..n)
            .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    fn argmax(chroma: &ChromaVector) -> usize {
        chroma
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    #[test]
    fn test_frequency_to_pitch_class() {
        assert_eq!(frequency_to_pitch_class(440.0, 440.0), 9);
        assert_eq!(frequency_to_pitch_class(261.63, 440.0), 0);
        assert_eq!(frequency_to_pitch_class(523.25, 440.0), 0);
        assert_eq!(frequency_to_pitch_class(392.0, 440.0), 7);
        assert_eq!(frequency_to_pitch_class(55.0, 440.0), 9);
        assert_eq!(frequency_to_pitch_class(466.16, 440.0), 10);
    }

    #[test]
    fn test_sine_lands_on_its_pitch_class() {
        let config = AnalysisConfig::default();
        let mut extractor = ChromaExtractor::new(44100, &config).unwrap();

        for (freq, expected) in [(440.0, 9), (261.63, 0), (329.63, 4), (196.0, 7)] {
            let frame = sine(freq, 44100, config.frame_size);
            let chroma = extractor.extract(&frame).unwrap();
            assert_eq!(argmax(&chroma), expected, "{} Hz", freq);
        }
    }

    #[test]
    fn test_chroma_is_linear_in_amplitude() {
        let config = AnalysisConfig::default();
        let mut extractor = ChromaExtractor::new(44100, &config).unwrap();
        assert_eq!(extractor.frame_size(), 8192);

        let full = sine(440.0, 44100, config.frame_size);
        let half: Vec<f32> = full.iter().map(|x| x * 0.5).collect();
        let loud = extractor.extract(&full).unwrap();
        let quiet = extractor.extract(&half).unwrap();

        // Magnitudes, not power: halving the amplitude halves the chroma
        let ratio = loud[9] / quiet[9];
        assert!((ratio - 2.0).abs() < 1e-3, "ratio {}", ratio);
    }

    #[test]
    fn test_silent_frame_is_zero() {
        let config = AnalysisConfig::default();
        let mut extractor = ChromaExtractor::new(44100, &config).unwrap();
        let chroma = extractor.extract(&vec![0.0; config.frame_size]).unwrap();
        assert!(chroma.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_wrong_frame_length() {
        let config = AnalysisConfig::default();
        let mut extractor = ChromaExtractor::new(44100, &config).unwrap();
        assert!(extractor.extract(&[0.0; 100]).is_err());
    }

    #[test]
    fn test_zero_sample_rate() {
        assert!(ChromaExtractor::new(0, &AnalysisConfig::default()).is_err());
    }
}
