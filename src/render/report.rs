//! Findings report, text and JSON.

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::analysis::findings::ValidationFinding;
use crate::error::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    findings: &'a [ValidationFinding],
    changes_needed: bool,
}

/// Machine-readable report for `--format json`.
pub fn to_json(findings: &[ValidationFinding], changes_needed: bool) -> Result<String> {
    let report = JsonReport {
        findings,
        changes_needed,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Prints the grouped text report to stdout.
pub fn print_report(findings: &[ValidationFinding], changes_needed: bool) {
    if findings.is_empty() {
        println!("{}", "No layering issues found".green());
        return;
    }

    print_group(
        "Circular imports",
        findings,
        |f| matches!(f, ValidationFinding::Cycle { .. }),
    );
    print_group(
        "Unused components",
        findings,
        |f| matches!(f, ValidationFinding::Unused { .. }),
    );
    print_group(
        "Should move deeper",
        findings,
        |f| matches!(f, ValidationFinding::ShouldMoveDeeper { .. }),
    );
    print_group(
        "Importer nested deeper than dependency",
        findings,
        |f| matches!(f, ValidationFinding::ParentDeeperThanDependency { .. }),
    );
    print_group(
        "Importer in different subdirectory",
        findings,
        |f| matches!(f, ValidationFinding::ParentInDifferentSubdirectory { .. }),
    );
    print_group(
        "Pages using non-top-level components",
        findings,
        |f| matches!(f, ValidationFinding::PageUsesNonTopLevelComponent { .. }),
    );

    let actionable = findings.iter().filter(|f| f.is_actionable()).count();
    println!();
    if changes_needed {
        println!(
            "{} ({} of {} findings need changes)",
            "Layering changes needed".red().bold(),
            actionable,
            findings.len()
        );
    } else {
        println!(
            "{} ({} informational findings)",
            "No changes needed".green(),
            findings.len()
        );
    }
}

fn print_group(title: &str, findings: &[ValidationFinding], select: fn(&&ValidationFinding) -> bool) {
    let selected: Vec<_> = findings.iter().filter(select).collect();
    if selected.is_empty() {
        return;
    }

    println!("{} ({}):", title.yellow().bold(), selected.len());
    for finding in selected {
        println!("  {}", finding.describe());
    }
    println!();
}
