use crate::models::Compatibility;

/// Lower-case labels that make a project compatible.
///
/// `bsd` is matched exactly, so `bsd-3-clause` and `bsd-2-clause` fall
/// through to [`Compatibility::Ambiguous`].
pub const COMPATIBLE_LICENSES: [&str; 4] = ["mit", "bsd", "apache-2.0", "lgpl-2.1"];

/// Lower-case labels that make a project non-compatible.
pub const NON_COMPATIBLE_LICENSES: [&str; 4] = ["gpl", "gpl-3.0", "agpl", "cc-by-nc"];

/// Classify the combined findings. Entries are checked in order, tag
/// findings first, and the first entry in either set decides.
pub fn assess(licenses: &[String], readme_license: &[String]) -> Compatibility {
    let all: Vec<String> = licenses
        .iter()
        .chain(readme_license)
        .map(|l| l.to_lowercase())
        .collect();

    if all.is_empty() {
        return Compatibility::Missing;
    }

    for lic in &all {
        if COMPATIBLE_LICENSES.contains(&lic.as_str()) {
            return Compatibility::Compatible;
        }
        if NON_COMPATIBLE_LICENSES.contains(&lic.as_str()) {
            return Compatibility::NonCompatible;
        }
    }

    Compatibility::Ambiguous
}

/// Convert license findings into a score in {0.0, 0.5, 1.0}.
pub fn calculate_license_score(licenses: &[String], readme_license: &[String]) -> f64 {
    assess(licenses, readme_license).score()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(calculate_license_score(&[], &[]), 0.0);
        assert_eq!(assess(&[], &[]), Compatibility::Missing);
    }

    #[test]
    fn test_compatible() {
        assert_eq!(calculate_license_score(&ids(&["MIT"]), &[]), 1.0);
        assert_eq!(calculate_license_score(&[], &ids(&["Apache-2.0"])), 1.0);
        assert_eq!(calculate_license_score(&ids(&["LGPL-2.1"]), &[]), 1.0);
    }

    #[test]
    fn test_non_compatible() {
        assert_eq!(calculate_license_score(&ids(&["GPL-3.0"]), &[]), 0.0);
        assert_eq!(calculate_license_score(&ids(&["cc-by-nc"]), &[]), 0.0);
        assert_eq!(
            assess(&ids(&["MPL-2.0", "GPL"]), &[]),
            Compatibility::NonCompatible
        );
    }

    #[test]
    fn test_first_decisive_entry_wins() {
        assert_eq!(calculate_license_score(&ids(&["GPL-3.0", "MIT"]), &[]), 0.0);
        assert_eq!(calculate_license_score(&ids(&["MIT"]), &ids(&["GPL-3.0"])), 1.0);
        assert_eq!(calculate_license_score(&ids(&["MPL-2.0"]), &ids(&["MIT"])), 1.0);
    }

    #[test]
    fn test_ambiguous() {
        assert_eq!(calculate_license_score(&ids(&["MPL-2.0", "LGPL-3.0"]), &[]), 0.5);
        // AGPL-3.0 is not the bare "agpl" label.
        assert_eq!(calculate_license_score(&ids(&["AGPL-3.0"]), &[]), 0.5);
    }

    #[test]
    fn test_bsd_clause_variants_are_ambiguous() {
        assert_eq!(calculate_license_score(&ids(&["BSD-3-Clause"]), &[]), 0.5);
        assert_eq!(calculate_license_score(&[], &ids(&["BSD-2-Clause"])), 0.5);
        assert_eq!(calculate_license_score(&ids(&["BSD"]), &[]), 1.0);
    }
}
