//! Example: Detect the key of a synthetic chord progression
//!
//! Renders a I-IV-V-I progression in the key given on the command line
//! (default "A") and prints the key candidates.

use setlist_dsp::{analyze_key, AnalysisConfig, KeyRef, Spelling};

const SAMPLE_RATE: u32 = 44100;

fn midi_to_hz(midi: i32) -> f32 {
    440.0 * 2f32.powf((midi - 69) as f32 / 12.0)
}

/// Four seconds per chord, root position triads built on `tonic_midi`
fn render_progression(tonic_midi: i32, minor: bool) -> Vec<f32> {
    let third = if minor { 3 } else { 4 };
    let mut samples = Vec::new();
    for degree in [0, 5, 7, 0] {
        let root = tonic_midi + degree;
        let freqs = [midi_to_hz(root), midi_to_hz(root + third), midi_to_hz(root + 7)];
        let n = SAMPLE_RATE as usize * 4;
        samples.extend((0..n).map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            freqs
                .iter()
                .map(|f| (2.0 * std::f32::consts::PI * f * t).sin())
                .sum::<f32>()
                * 0.25
        }));
    }
    samples
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let requested = std::env::args().nth(1).unwrap_or_else(|| "A".to_string());
    let key = match KeyRef::parse(&requested) {
        KeyRef::Known(key) => key,
        KeyRef::Unknown => return Err(format!("Unrecognized key: {}", requested).into()),
    };
    let samples = render_progression(60 + key.tonic().index() as i32, key.is_minor());
    let duration = samples.len() as f32 / SAMPLE_RATE as f32;

    let analysis = analyze_key(&samples, SAMPLE_RATE, duration, &AnalysisConfig::default())?;

    println!("Rendered: {} ({:.1}s)", key.name(Spelling::Sharps), duration);
    println!("Analysed {} frames", analysis.frame_count);
    if let Some(best) = analysis.best() {
        println!("Best match: {}", best.key.name(Spelling::Sharps));
    }
    println!("Key candidates:");
    for candidate in &analysis.candidates {
        println!(
            "  {:<4} confidence: {}",
            candidate.key.name(Spelling::Sharps),
            candidate.confidence
        );
    }

    Ok(())
}
