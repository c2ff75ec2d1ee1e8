use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{Compatibility, LicenseFinding, UrlCategory, UrlLine};

/// Print the three-line license summary.
pub fn render_license_plain(finding: &LicenseFinding, score: f64) {
    println!("SPDX Licenses found: {:?}", finding.spdx_licenses);
    println!("README License section: {:?}", finding.readme_license);
    println!("License Metric Score: {:.1}", score);
}

/// Print a colored table of license findings with the resulting score.
pub fn render_license_table(finding: &LicenseFinding, compatibility: Compatibility, path: &Path) {
    println!(
        "\n {} v{}",
        "repo-scorer".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Scanning: {}\n", path.display());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
        ]);

    for lic in &finding.spdx_licenses {
        table.add_row(vec![Cell::new(lic), Cell::new("SPDX tag")]);
    }
    for lic in &finding.readme_license {
        table.add_row(vec![Cell::new(lic), Cell::new("README")]);
    }

    if finding.spdx_licenses.is_empty() && finding.readme_license.is_empty() {
        println!(" {} No license information found\n", "[WARN]".yellow().bold());
    } else {
        println!("{}\n", table);
    }

    let verdict = match compatibility {
        Compatibility::Compatible => compatibility.to_string().green(),
        Compatibility::Ambiguous => compatibility.to_string().yellow(),
        Compatibility::NonCompatible | Compatibility::Missing => compatibility.to_string().red(),
    };
    println!(
        " Score: {}  ({})",
        format!("{:.1}", compatibility.score()).bold(),
        verdict
    );
}

/// Print one mapping per input line.
pub fn render_urls_plain(lines: &[UrlLine]) {
    for line in lines {
        println!("{}", line);
    }
}

/// Print every classified URL as a table row, numbered by input line.
pub fn render_urls_table(lines: &[UrlLine]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Line").add_attribute(Attribute::Bold),
            Cell::new("URL").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
        ]);

    for (i, line) in lines.iter().enumerate() {
        for (url, category) in line.iter() {
            let color = match category {
                UrlCategory::Dataset => Color::Cyan,
                UrlCategory::Model => Color::Magenta,
                UrlCategory::Code => Color::Green,
                UrlCategory::Empty => Color::DarkGrey,
                UrlCategory::Unknown => Color::Yellow,
            };
            table.add_row(vec![
                Cell::new(i + 1).set_alignment(CellAlignment::Right),
                Cell::new(url),
                Cell::new(category.to_string()).fg(color),
            ]);
        }
    }

    println!("{}", table);
}
