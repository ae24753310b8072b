//! Shared analysis types
//!
//! Pitch classes, keys, spelling preferences and ranked key candidates.

pub mod result;
