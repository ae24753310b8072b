//! Feature extraction modules
//!
//! This module contains the key detection pipeline stages:
//! - Chroma extraction
//! - Key detection

pub mod chroma;
pub mod key;
