//! Energy zones, energy curve and fatigue detection

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse performance intensity of a song
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EnergyZone {
    /// Rank 1
    Ambient = 1,
    /// Rank 2 (default for untagged songs)
    #[default]
    Pulse = 2,
    /// Rank 3
    Groove = 3,
    /// Rank 4
    Peak = 4,
}

impl EnergyZone {
    /// Highest rank, used to scale the energy curve
    pub const MAX_RANK: u8 = 4;

    /// Rank in 1-4
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Parse a zone name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ambient" => Some(EnergyZone::Ambient),
            "pulse" => Some(EnergyZone::Pulse),
            "groove" => Some(EnergyZone::Groove),
            "peak" => Some(EnergyZone::Peak),
            _ => None,
        }
    }
}

impl fmt::Display for EnergyZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EnergyZone::Ambient => "Ambient",
            EnergyZone::Pulse => "Pulse",
            EnergyZone::Groove => "Groove",
            EnergyZone::Peak => "Peak",
        };
        f.write_str(name)
    }
}

/// Anything the sequencer can order: a song exposing an optional energy zone
pub trait EnergyTagged {
    /// Tagged zone, `None` when the song has not been tagged
    fn energy_zone(&self) -> Option<EnergyZone>;

    /// Effective zone, untagged songs count as `Pulse`
    fn effective_zone(&self) -> EnergyZone {
        self.energy_zone().unwrap_or_default()
    }

    /// Effective rank in 1-4
    fn energy_rank(&self) -> u8 {
        self.effective_zone().rank()
    }
}

impl EnergyTagged for EnergyZone {
    fn energy_zone(&self) -> Option<EnergyZone> {
        Some(*self)
    }
}

impl EnergyTagged for Option<EnergyZone> {
    fn energy_zone(&self) -> Option<EnergyZone> {
        *self
    }
}

impl<T: EnergyTagged + ?Sized> EnergyTagged for &T {
    fn energy_zone(&self) -> Option<EnergyZone> {
        (**self).energy_zone()
    }
}

/// Energy of each song scaled to 0-100, same order as the input
///
/// Each entry is `round(rank / 4 * 100)`.
///
/// ```
/// use setlist_dsp::setlist::{calculate_energy_curve, EnergyZone::*};
///
/// assert_eq!(calculate_energy_curve(&[Ambient, Pulse, Groove, Peak]), vec![25, 50, 75, 100]);
/// ```
pub fn calculate_energy_curve<T: EnergyTagged>(songs: &[T]) -> Vec<u8> {
    songs
        .iter()
        .map(|song| {
            let scaled = song.energy_rank() as f32 / EnergyZone::MAX_RANK as f32 * 100.0;
            scaled.round() as u8
        })
        .collect()
}

/// Start indices of every run of three consecutive Peak songs
///
/// Overlapping runs each report their own start, so four Peaks in a row give
/// two indices.
pub fn analyze_energy_fatigue<T: EnergyTagged>(songs: &[T]) -> Vec<usize> {
    let fatigue: Vec<usize> = songs
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w.iter().all(|s| s.effective_zone() == EnergyZone::Peak))
        .map(|(i, _)| i)
        .collect();

    if !fatigue.is_empty() {
        log::debug!("Energy fatigue runs start at {:?}", fatigue);
    }

    fatigue
}
