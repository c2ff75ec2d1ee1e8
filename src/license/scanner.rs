use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::Result;
use regex::Regex;
use tracing::debug;

use super::readme::{check_readme_license_section, find_readme};
use super::spdx::{check_spdx_in_file, is_source_file, tag_regex};
use crate::config::ScanConfig;
use crate::models::LicenseFinding;

/// Search source files and the README under `root` for license information.
pub fn find_license_metadata(root: &Path, config: &ScanConfig) -> Result<LicenseFinding> {
    let re = tag_regex()?;
    let mut found = BTreeSet::new();
    let mut scanned = 0usize;
    walk(root, config, &re, &mut found, &mut scanned);
    debug!(root = %root.display(), scanned, tagged = found.len(), "SPDX scan finished");

    let mut readme_license = Vec::new();
    if let Some(readme) = find_readme(root)? {
        debug!(readme = %readme.display(), "checking README license section");
        if let Some(lic) = check_readme_license_section(&readme)? {
            readme_license.push(lic.to_string());
        }
    }

    Ok(LicenseFinding {
        spdx_licenses: found.into_iter().collect(),
        readme_license,
    })
}

/// Recursively collect allow-listed SPDX tags. Unreadable directories and
/// files are skipped.
fn walk(
    dir: &Path,
    config: &ScanConfig,
    re: &Regex,
    found: &mut BTreeSet<String>,
    scanned: &mut usize,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "skipping unreadable directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        // Symlinked directories are not followed.
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if is_dir {
            if config.is_excluded(&name) {
                debug!(dir = %path.display(), "excluded by config");
                continue;
            }
            walk(&path, config, re, found, scanned);
            continue;
        }

        if !is_source_file(&name) {
            continue;
        }

        *scanned += 1;
        match check_spdx_in_file(&path, re) {
            Ok(Some(id)) => {
                found.insert(id);
            }
            Ok(None) => {}
            Err(e) => debug!(error = %e, "skipping unreadable source file"),
        }
    }
}
