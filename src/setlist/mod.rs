//! Setlist sequencing
//!
//! Orders a set by energy zone and reports pacing problems:
//! - Flow strategies (energy ramps, zig-zag)
//! - Energy curve for visualization
//! - Fatigue runs of consecutive Peak songs
//!
//! Songs are any caller type implementing [`EnergyTagged`].

pub mod energy;
pub mod strategy;

pub use energy::{analyze_energy_fatigue, calculate_energy_curve, EnergyTagged, EnergyZone};
pub use strategy::{sort_songs_by_strategy, FlowStrategy, UnknownStrategy};
