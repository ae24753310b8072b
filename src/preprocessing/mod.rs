//! Audio preprocessing modules
//!
//! Prepares a decoded mono buffer for chroma analysis:
//! - Central analysis segment selection
//! - Framing and Hann tapering

pub mod segment;
pub mod windowing;

pub use segment::{select_segment, AnalysisSegment};
