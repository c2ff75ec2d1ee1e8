//! URL categorisation.
//!
//! - [`classifier`] — labels a single URL by prefix.
//! - [`parser`] — reads a comma-delimited URL file into one [`UrlLine`](crate::models::UrlLine) per line.

pub mod classifier;
pub mod parser;
