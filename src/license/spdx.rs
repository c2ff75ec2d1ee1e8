use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Result;
use regex::Regex;

use crate::error::SourceReadError;

/// SPDX identifiers recognised in tags and README sections, in lookup order.
pub const SPDX_LICENSES: [&str; 9] = [
    "MIT",
    "Apache-2.0",
    "GPL-3.0",
    "BSD-3-Clause",
    "BSD-2-Clause",
    "LGPL-2.1",
    "LGPL-3.0",
    "MPL-2.0",
    "AGPL-3.0",
];

/// File-name suffixes of source files scanned for tags.
pub const SOURCE_EXTENSIONS: [&str; 5] = [".py", ".js", ".cpp", ".c", ".h"];

pub fn is_known_license(id: &str) -> bool {
    SPDX_LICENSES.contains(&id)
}

pub fn is_source_file(name: &str) -> bool {
    SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Regex matching an `SPDX-License-Identifier:` tag and capturing its token.
pub fn tag_regex() -> Result<Regex> {
    Ok(Regex::new(r"SPDX-License-Identifier:\s*([A-Za-z0-9.\-]+)")?)
}

/// Return the allow-listed identifier from the first SPDX tag in `path`.
///
/// Only the first tag line counts: an unrecognised token there means the
/// file has no usable tag even if later lines carry a known one.
pub fn check_spdx_in_file(path: &Path, re: &Regex) -> Result<Option<String>, SourceReadError> {
    let file = File::open(path).map_err(|e| SourceReadError::from_io(path.to_path_buf(), e))?;

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| SourceReadError::from_io(path.to_path_buf(), e))?;
        if let Some(caps) = re.captures(&line) {
            let id = &caps[1];
            return Ok(is_known_license(id).then(|| id.to_string()));
        }
    }

    Ok(None)
}
