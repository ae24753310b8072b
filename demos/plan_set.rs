//! Example: Sequence a set and move a chart to the singer's key
//!
//! Orders a small repertoire with every flow strategy, prints the energy curve
//! and fatigue warnings, then transposes a chord sheet.

use setlist_dsp::{
    analyze_energy_fatigue, calculate_energy_curve, calculate_semitones, sort_songs_by_strategy,
    transpose_chords, EnergyTagged, EnergyZone, FlowStrategy, KeyRef, Spelling,
};

#[derive(Debug, Clone)]
struct Song {
    title: &'static str,
    energy: Option<EnergyZone>,
}

impl EnergyTagged for Song {
    fn energy_zone(&self) -> Option<EnergyZone> {
        self.energy
    }
}

const CHART: &str = "\
[Chorus]
G          D/F#     Em7
Hold on to the light
C          G        D
Till the morning comes
";

fn main() {
    // Initialize logger
    env_logger::init();

    let repertoire = vec![
        Song {
            title: "First Dance",
            energy: Some(EnergyZone::Ambient),
        },
        Song {
            title: "Shout",
            energy: Some(EnergyZone::Peak),
        },
        Song {
            title: "Brown Eyed Girl",
            energy: Some(EnergyZone::Groove),
        },
        Song {
            title: "September",
            energy: Some(EnergyZone::Peak),
        },
        Song {
            title: "New Tune",
            energy: None,
        },
        Song {
            title: "Mr. Brightside",
            energy: Some(EnergyZone::Peak),
        },
    ];

    for strategy in FlowStrategy::ALL {
        if strategy.is_pass_through() && strategy != FlowStrategy::None {
            continue;
        }
        let set = sort_songs_by_strategy(&repertoire, strategy);
        let titles: Vec<&str> = set.iter().map(|s| s.title).collect();
        println!("{}:", strategy);
        println!("  order:   {}", titles.join(" | "));
        println!("  curve:   {:?}", calculate_energy_curve(&set));
        let fatigue = analyze_energy_fatigue(&set);
        if !fatigue.is_empty() {
            println!("  fatigue: three Peaks in a row starting at {:?}", fatigue);
        }
    }

    let original = KeyRef::parse("G");
    let preferred = KeyRef::parse("Bb");
    println!(
        "\nChart in {} -> {} ({:+} semitones):",
        original.name(Spelling::Flats),
        preferred.name(Spelling::Flats),
        calculate_semitones(&original, &preferred)
    );
    print!("{}", transpose_chords(CHART, &original, &preferred, Spelling::Flats));
}
