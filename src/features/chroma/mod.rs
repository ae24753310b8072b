//! Chroma extraction modules
//!
//! Extract pitch-class distribution (12 semitones) from audio:
//! - Chroma vector computation
//! - Per-frame normalization and segment averaging

pub mod extractor;
pub mod normalization;

pub use extractor::{ChromaExtractor, ChromaVector};
pub use normalization::ChromaAccumulator;
