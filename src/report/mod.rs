//! Report renderers for license scores and URL classifications.
//!
//! - [`terminal`] — plain line output and colored tables.
//! - [`json`] — machine-readable output.

pub mod json;
pub mod terminal;
