//! Flow strategies for ordering a set
//!
//! Pure, stable reorderings by energy rank. Pass-through strategies leave
//! ordering to the caller.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::energy::EnergyTagged;

/// Sequencing policy for a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowStrategy {
    /// Keep caller order
    #[default]
    None,
    /// Keep caller order (hand-arranged)
    Manual,
    /// Keep caller order (ordered by readiness upstream)
    Ready,
    /// Keep caller order (ordered by work status upstream)
    Work,
    /// Calm to intense
    EnergyAsc,
    /// Intense to calm
    EnergyDesc,
    /// Monotonic climb from calm to peak, same as `EnergyAsc`
    WeddingRamp,
    /// Alternate high and low energy, starting from the most intense song
    ZigZag,
}

impl FlowStrategy {
    /// Every strategy, in declaration order
    pub const ALL: [FlowStrategy; 8] = [
        FlowStrategy::None,
        FlowStrategy::Manual,
        FlowStrategy::Ready,
        FlowStrategy::Work,
        FlowStrategy::EnergyAsc,
        FlowStrategy::EnergyDesc,
        FlowStrategy::WeddingRamp,
        FlowStrategy::ZigZag,
    ];

    /// Wire name, e.g. `"zig-zag"`
    pub fn as_str(self) -> &'static str {
        match self {
            FlowStrategy::None => "none",
            FlowStrategy::Manual => "manual",
            FlowStrategy::Ready => "ready",
            FlowStrategy::Work => "work",
            FlowStrategy::EnergyAsc => "energy-asc",
            FlowStrategy::EnergyDesc => "energy-desc",
            FlowStrategy::WeddingRamp => "wedding-ramp",
            FlowStrategy::ZigZag => "zig-zag",
        }
    }

    /// Parse a wire name; unrecognized names fall back to `None` (identity)
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// True for strategies that leave the order to the caller
    pub fn is_pass_through(self) -> bool {
        matches!(
            self,
            FlowStrategy::None | FlowStrategy::Manual | FlowStrategy::Ready | FlowStrategy::Work
        )
    }
}

impl fmt::Display for FlowStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized strategy name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown flow strategy: {}", self.0)
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for FlowStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Reorder `songs` according to `strategy`
///
/// Never mutates the input. All sorts are stable: songs of equal rank keep
/// their relative input order.
///
/// # Example
///
/// ```
/// use setlist_dsp::setlist::{sort_songs_by_strategy, EnergyZone::*, FlowStrategy};
///
/// let set = [Pulse, Peak, Ambient, Groove];
/// let ordered = sort_songs_by_strategy(&set, FlowStrategy::ZigZag);
/// assert_eq!(ordered, vec![Peak, Ambient, Groove, Pulse]);
/// ```
pub fn sort_songs_by_strategy<T: EnergyTagged + Clone>(
    songs: &[T],
    strategy: FlowStrategy,
) -> Vec<T> {
    log::debug!("Sequencing {} songs with strategy {}", songs.len(), strategy);

    let mut sorted = songs.to_vec();
    match strategy {
        FlowStrategy::None | FlowStrategy::Manual | FlowStrategy::Ready | FlowStrategy::Work => {}
        FlowStrategy::EnergyAsc | FlowStrategy::WeddingRamp => {
            sorted.sort_by_key(|song| song.energy_rank());
        }
        FlowStrategy::EnergyDesc => {
            sorted.sort_by_key(|song| Reverse(song.energy_rank()));
        }
        FlowStrategy::ZigZag => {
            sorted.sort_by_key(|song| song.energy_rank());
            sorted = zig_zag(sorted);
        }
    }
    sorted
}

/// Interleave an ascending list: highest of the high half, lowest of the low half, ...
///
/// "Low" is rank <= 2 (Ambient, Pulse), "high" is rank > 2 (Groove, Peak).
/// Once one side runs out the rest of the other follows in the same direction.
fn zig_zag<T: EnergyTagged>(ascending: Vec<T>) -> Vec<T> {
    let total = ascending.len();
    let (low, high): (Vec<T>, Vec<T>) = ascending
        .into_iter()
        .partition(|song| song.energy_rank() <= 2);

    let mut high = high.into_iter().rev();
    let mut low = low.into_iter();
    let mut result = Vec::with_capacity(total);
    loop {
        let h = high.next();
        let l = low.next();
        if h.is_none() && l.is_none() {
            break;
        }
        result.extend(h);
        result.extend(l);
    }
    result
}
