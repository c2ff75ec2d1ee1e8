use anyhow::Result;
use serde::Serialize;

use crate::models::{Compatibility, LicenseFinding, UrlLine};

#[derive(Debug, Serialize)]
pub struct LicenseReport<'a> {
    #[serde(flatten)]
    pub finding: &'a LicenseFinding,
    pub score: f64,
    pub compatibility: Compatibility,
}

pub fn license_report(finding: &LicenseFinding, compatibility: Compatibility) -> Result<String> {
    let report = LicenseReport {
        finding,
        score: compatibility.score(),
        compatibility,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn url_report(lines: &[UrlLine]) -> Result<String> {
    Ok(serde_json::to_string_pretty(lines)?)
}
