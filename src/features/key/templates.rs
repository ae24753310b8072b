//! Temperley key profiles
//!
//! Defines tonal profiles for 24 keys (12 major + 12 minor).
//!
//! # Reference
//!
//! Temperley, D. (1999). What's Key for Key? The Krumhansl-Schmuckler
//! Key-Finding Algorithm Reconsidered. *Music Perception*, 17(1), 65-100.

/// Major profile, index 0 = tonic
pub const MAJOR_PROFILE: [f32; 12] = [5.0, 2.0, 3.5, 2.0, 4.5, 4.0, 2.0, 4.5, 2.0, 3.5, 1.5, 4.0];

/// Minor profile, index 0 = tonic
pub const MINOR_PROFILE: [f32; 12] = [5.0, 2.0, 3.5, 4.5, 2.0, 4.0, 2.0, 4.5, 3.5, 2.0, 1.5, 4.0];

/// Key templates for all 24 keys
#[derive(Debug, Clone)]
pub struct KeyTemplates {
    /// Major key templates (12 keys: C, C#, D, ..., B)
    pub major: [[f32; 12]; 12],

    /// Minor key templates (12 keys: C, C#, D, ..., B)
    pub minor: [[f32; 12]; 12],
}

impl KeyTemplates {
    /// Build all 24 templates by rotating the Temperley profiles
    pub fn new() -> Self {
        Self::from_profiles(&MAJOR_PROFILE, &MINOR_PROFILE)
    }

    /// Build templates from arbitrary tonic-first profiles
    pub fn from_profiles(major: &[f32; 12], minor: &[f32; 12]) -> Self {
        let mut templates = Self {
            major: [[0.0; 12]; 12],
            minor: [[0.0; 12]; 12],
        };
        for root in 0..12 {
            templates.major[root] = rotate(major, root);
            templates.minor[root] = rotate(minor, root);
        }
        templates
    }

    /// Major template with tonic at `root` (0-11, wraps)
    pub fn get_major_template(&self, root: usize) -> &[f32; 12] {
        &self.major[root % 12]
    }

    /// Minor template with tonic at `root` (0-11, wraps)
    pub fn get_minor_template(&self, root: usize) -> &[f32; 12] {
        &self.minor[root % 12]
    }
}

impl Default for KeyTemplates {
    fn default() -> Self {
        Self::new()
    }
}

/// Circularly shift `profile` so its index 0 lands on `root`
pub fn rotate(profile: &[f32; 12], root: usize) -> [f32; 12] {
    let mut out = [0.0f32; 12];
    for (i, &v) in profile.iter().enumerate() {
        out[(i + root) % 12] = v;
    }
    out
}
