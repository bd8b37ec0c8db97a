//! Line-oriented scanning of import declarations.
//!
//! Declarations are matched per line, which covers the single-line
//! `import`/`export ... from` forms produced by conventional formatting.
//! Multi-line declarations and dynamic `import()` calls are out of scope.

use once_cell::sync::Lazy;
use regex::Regex;

static IMPORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*import\b[^'"]*['"]([^'"]+)['"]"#).unwrap());

static EXPORT_FROM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*export\b[^'"]*\bfrom\s*['"]([^'"]+)['"]"#).unwrap());

/// Extracts import specifiers from source text, in declaration order.
/// Duplicates are kept; the graph builder deduplicates per resolved target.
pub fn extract_specifiers(source: &str) -> Vec<String> {
    let mut specifiers = Vec::new();

    for line in source.lines() {
        if let Some(captures) = IMPORT_RE.captures(line) {
            specifiers.push(captures[1].to_string());
            continue;
        }
        if let Some(captures) = EXPORT_FROM_RE.captures(line) {
            specifiers.push(captures[1].to_string());
        }
    }

    specifiers
}
