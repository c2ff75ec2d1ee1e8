//! License detection and compatibility scoring.
//!
//! - [`spdx`] — allow-listed identifiers and per-file `SPDX-License-Identifier` tag lookup.
//! - [`readme`] — README discovery and License-section extraction.
//! - [`scanner`] — tree walk combining both into a [`LicenseFinding`](crate::models::LicenseFinding).
//! - [`scorer`] — maps findings to a score in {0.0, 0.5, 1.0}.

pub mod readme;
pub mod scanner;
pub mod scorer;
pub mod spdx;
