//! Framing and tapering
//!
//! Splits an analysis segment into non-overlapping frames and applies a Hann
//! taper to suppress edge artifacts before spectral analysis.

use super::segment::AnalysisSegment;

/// Hann (raised-cosine) window of length `n`
///
/// `w[j] = 0.5 * (1 - cos(2πj / (n - 1)))`. A length-1 window is `[1.0]`.
pub fn hann_window(n: usize) -> Vec<f32> {
    if n == 1 {
        return vec![1.0];
    }
    let denom = (n - 1) as f32;
    (0..n)
        .map(|j| {
            let t = 2.0 * std::f32::consts::PI * j as f32 / denom;
            0.5 * (1.0 - t.cos())
        })
        .collect()
}

/// Iterate whole frames of `frame_size` samples inside `segment`
///
/// A trailing partial frame is dropped.
pub fn frames<'a>(
    samples: &'a [f32],
    segment: AnalysisSegment,
    frame_size: usize,
) -> impl Iterator<Item = &'a [f32]> + 'a {
    let end = segment.end.min(samples.len());
    let start = segment.start.min(end);
    samples[start..end].chunks_exact(frame_size.max(1))
}

/// Multiply `frame` by `window` into `out`
///
/// All three slices must have the same length.
pub fn apply_window(frame: &[f32], window: &[f32], out: &mut [f32]) {
    debug_assert_eq!(frame.len(), window.len());
    debug_assert_eq!(frame.len(), out.len());
    for ((o, &x), &w) in out.iter_mut().zip(frame).zip(window) {
        *o = x * w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hann_endpoints_and_peak() {
        let w = hann_window(9);
        assert!(w[0].abs() < 1e-6);
        assert!(w[8].abs() < 1e-6);
        assert!((w[4] - 1.0).abs() < 1e-6);
        // Symmetric
        for j in 0..9 {
            assert!((w[j] - w[8 - j]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_hann_single_sample() {
        assert_eq!(hann_window(1), vec![1.0]);
        assert!(hann_window(0).is_empty());
    }

    #[test]
    fn test_frames_drop_partial_tail() {
        let samples: Vec<f32> = (0..25).map(|i| i as f32).collect();
        let seg = AnalysisSegment { start: 2, end: 25 };
        let collected: Vec<&[f32]> = frames(&samples, seg, 10).collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0][0], 2.0);
        assert_eq!(collected[1][0], 12.0);
        assert_eq!(collected[1].len(), 10);
    }

    #[test]
    fn test_frames_empty_segment() {
        let samples = vec![0.0f32; 5];
        let seg = AnalysisSegment { start: 0, end: 5 };
        assert_eq!(frames(&samples, seg, 10).count(), 0);
    }

    #[test]
    fn test_apply_window() {
        let frame = [2.0f32, 2.0, 2.0];
        let window = [0.0f32, 1.0, 0.5];
        let mut out = [0.0f32; 3];
        apply_window(&frame, &window, &mut out);
        assert_eq!(out, [0.0, 2.0, 1.0]);
    }
}
