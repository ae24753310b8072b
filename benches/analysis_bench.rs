//! Performance benchmarks for key detection, transposition and sequencing

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use setlist_dsp::{
    detect_key, sort_songs_by_strategy, transpose_chords, EnergyZone, FlowStrategy, KeyRef,
    Spelling,
};

fn bench_detect_key(c: &mut Criterion) {
    // Generate synthetic audio (30 seconds at 44.1kHz)
    let samples: Vec<f32> = (0..44100 * 30)
        .map(|i| (i as f32 * 440.0 * 2.0 * std::f32::consts::PI / 44100.0).sin() * 0.5)
        .collect();

    c.bench_function("detect_key_30s", |b| {
        b.iter(|| {
            let _ = detect_key(black_box(&samples), black_box(44100), black_box(30.0));
        });
    });
}

fn bench_transpose_chords(c: &mut Criterion) {
    let verse = "\
Em              C
I walked across an empty land
G                      D/F#
I knew the pathway like the back of my hand
";
    let sheet = verse.repeat(50);
    let from = KeyRef::parse("Em");
    let to = KeyRef::parse("Gm");

    c.bench_function("transpose_chords_200_lines", |b| {
        b.iter(|| transpose_chords(black_box(&sheet), &from, &to, Spelling::Flats));
    });
}

fn bench_sequencing(c: &mut Criterion) {
    let zones = [
        EnergyZone::Pulse,
        EnergyZone::Peak,
        EnergyZone::Ambient,
        EnergyZone::Groove,
    ];
    let set: Vec<EnergyZone> = zones.iter().cycle().take(200).copied().collect();

    c.bench_function("zig_zag_200_songs", |b| {
        b.iter(|| sort_songs_by_strategy(black_box(&set), FlowStrategy::ZigZag));
    });
}

criterion_group!(benches, bench_detect_key, bench_transpose_chords, bench_sequencing);
criterion_main!(benches);
