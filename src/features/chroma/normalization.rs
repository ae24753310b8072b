//! Chroma normalization and aggregation
//!
//! Each frame is scaled by its own maximum so loud and quiet passages weigh
//! the same, then frames are averaged into one segment-level vector.

use super::extractor::ChromaVector;

/// Scale `chroma` so its largest entry is 1.0
///
/// The divisor is floored at `epsilon`, so near-silent frames are not blown
/// up and an all-zero frame stays all-zero.
pub fn normalize_by_max(chroma: &ChromaVector, epsilon: f32) -> ChromaVector {
    let max = chroma.iter().copied().fold(epsilon, f32::max);
    let mut out = [0.0f32; 12];
    for (o, &x) in out.iter_mut().zip(chroma) {
        *o = x / max;
    }
    out
}

/// True if a frame carries any pitched energy and no NaN/inf
pub fn is_usable(chroma: &ChromaVector) -> bool {
    chroma.iter().all(|x| x.is_finite()) && chroma.iter().any(|&x| x > 0.0)
}

/// Running mean of per-frame normalized chroma vectors
#[derive(Debug, Clone, Default)]
pub struct ChromaAccumulator {
    sum: [f64; 12],
    frames: usize,
}

impl ChromaAccumulator {
    /// Empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one raw frame; skipped (returns false) if the frame is not usable
    pub fn push(&mut self, chroma: &ChromaVector, epsilon: f32) -> bool {
        if !is_usable(chroma) {
            return false;
        }
        let normalized = normalize_by_max(chroma, epsilon);
        for (s, &x) in self.sum.iter_mut().zip(&normalized) {
            *s += x as f64;
        }
        self.frames += 1;
        true
    }

    /// Number of frames accumulated so far
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// Averaged chroma, or `None` before the first usable frame
    pub fn mean(&self) -> Option<ChromaVector> {
        if self.frames == 0 {
            return None;
        }
        let mut out = [0.0f32; 12];
        for (o, &s) in out.iter_mut().zip(&self.sum) {
            *o = (s / self.frames as f64) as f32;
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_by_max() {
        let mut chroma = [0.0f32; 12];
        chroma[0] = 4.0;
        chroma[7] = 2.0;
        let n = normalize_by_max(&chroma, 1e-4);
        assert_eq!(n[0], 1.0);
        assert_eq!(n[7], 0.5);
        assert_eq!(n[1], 0.0);
    }

    #[test]
    fn test_normalize_floors_tiny_max() {
        let mut chroma = [0.0f32; 12];
        chroma[3] = 1e-6;
        let n = normalize_by_max(&chroma, 1e-4);
        assert!((n[3] - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_accumulator_mean_weighs_frames_equally() {
        let mut acc = ChromaAccumulator::new();
        let mut loud = [0.0f32; 12];
        loud[0] = 100.0;
        let mut quiet = [0.0f32; 12];
        quiet[9] = 0.5;

        assert!(acc.push(&loud, 1e-4));
        assert!(acc.push(&quiet, 1e-4));
        let mean = acc.mean().unwrap();
        assert_eq!(acc.frame_count(), 2);
        assert!((mean[0] - 0.5).abs() < 1e-6);
        assert!((mean[9] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_accumulator_skips_silent_and_nan() {
        let mut acc = ChromaAccumulator::new();
        assert!(!acc.push(&[0.0; 12], 1e-4));
        let mut bad = [1.0f32; 12];
        bad[2] = f32::NAN;
        assert!(!acc.push(&bad, 1e-4));
        assert_eq!(acc.frame_count(), 0);
        assert!(acc.mean().is_none());
    }
}
