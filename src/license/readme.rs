use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use super::spdx::SPDX_LICENSES;

/// Find the first regular file in `dir` whose name starts with `readme`,
/// ignoring case. Only immediate entries are considered.
pub fn find_readme(dir: &Path) -> Result<Option<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if !name.starts_with("readme") {
            continue;
        }
        if entry.path().is_file() {
            return Ok(Some(entry.path()));
        }
    }

    Ok(None)
}

/// Read the README at `path` and return the license named in its License section.
pub fn check_readme_license_section(path: &Path) -> Result<Option<&'static str>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let section = match extract_license_section(&content)? {
        Some(section) => section,
        None => {
            debug!(readme = %path.display(), "no license section");
            return Ok(None);
        }
    };
    Ok(match_license(&section))
}

/// Capture the body of the first `# License` section.
///
/// The body starts on the line after the heading and runs up to the next
/// line beginning with `#`, or end of input.
pub fn extract_license_section(content: &str) -> Result<Option<String>> {
    let heading = Regex::new(r"(?i)^#+\s*license\s*$")?;

    let mut section: Option<String> = None;
    for line in content.lines() {
        match section.as_mut() {
            None => {
                if heading.is_match(line) {
                    section = Some(String::new());
                }
            }
            Some(body) => {
                if line.starts_with('#') {
                    break;
                }
                body.push_str(line);
                body.push('\n');
            }
        }
    }

    Ok(section)
}

/// First allow-listed identifier, in allow-list order, mentioned anywhere in
/// `section`. Matching is a case-insensitive substring test.
pub fn match_license(section: &str) -> Option<&'static str> {
    let lower = section.to_lowercase();
    SPDX_LICENSES
        .iter()
        .copied()
        .find(|lic| lower.contains(&lic.to_lowercase()))
}
