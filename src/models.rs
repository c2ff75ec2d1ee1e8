use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// License identifiers discovered in a source tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LicenseFinding {
    /// Unique allow-listed identifiers from `SPDX-License-Identifier` tags.
    pub spdx_licenses: Vec<String>,
    /// At most one identifier taken from the README license section.
    pub readme_license: Vec<String>,
}

/// Outcome of scoring a [`LicenseFinding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Compatibility {
    Compatible,
    NonCompatible,
    Ambiguous,
    Missing,
}

impl Compatibility {
    pub fn score(self) -> f64 {
        match self {
            Compatibility::Compatible => 1.0,
            Compatibility::Ambiguous => 0.5,
            Compatibility::NonCompatible | Compatibility::Missing => 0.0,
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compatibility::Compatible => write!(f, "Compatible"),
            Compatibility::NonCompatible => write!(f, "Non-compatible"),
            Compatibility::Ambiguous => write!(f, "Ambiguous"),
            Compatibility::Missing => write!(f, "No license found"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrlCategory {
    Dataset,
    Model,
    Code,
    Empty,
    Unknown,
}

impl fmt::Display for UrlCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlCategory::Dataset => write!(f, "DATASET"),
            UrlCategory::Model => write!(f, "MODEL"),
            UrlCategory::Code => write!(f, "CODE"),
            UrlCategory::Empty => write!(f, "EMPTY"),
            UrlCategory::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Classified URLs from one input line, in first-seen order.
///
/// Keys are unique: inserting a URL that is already present replaces its
/// category but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlLine {
    entries: Vec<(String, UrlCategory)>,
}

impl UrlLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: String, category: UrlCategory) {
        match self.entries.iter_mut().find(|(u, _)| *u == url) {
            Some(entry) => entry.1 = category,
            None => self.entries.push((url, category)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, url: &str) -> Option<UrlCategory> {
        self.entries
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, UrlCategory)> {
        self.entries.iter().map(|(u, c)| (u.as_str(), *c))
    }
}

impl fmt::Display for UrlLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (url, category)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: \"{}\"", url, category)?;
        }
        write!(f, "}}")
    }
}

impl Serialize for UrlLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (url, category) in &self.entries {
            map.serialize_entry(url, category)?;
        }
        map.end()
    }
}
