//! Project layout and rule configuration.
//!
//! Configuration is optional: with no `layerlint.json` at the project root
//! every knob falls back to the conventional Next.js-style layout
//! (`pages/` + `components/`, `@/` alias, `.tsx`-first extension order).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LintError, Result};

/// Name of the optional configuration file looked up at the project root.
pub const CONFIG_FILENAME: &str = "layerlint.json";

/// Layout and rule configuration for a single lint run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LintConfig {
    /// Directory under the project root holding page entry points.
    pub pages_dir: String,
    /// Directory under the project root holding components.
    pub components_dir: String,
    /// Recognized source extensions, in resolution probe order.
    pub extensions: Vec<String>,
    /// Base name of directory index files (`index` in `index.tsx`).
    pub index_basename: String,
    /// Alias prefix on import specifiers that maps to the project root.
    pub alias_prefix: String,
    /// First path segments the alias prefix is allowed to resolve into.
    pub alias_namespaces: Vec<String>,
    /// Extensions of stylesheet imports, which never become graph edges.
    pub stylesheet_extensions: Vec<String>,
    /// Path substrings excluded from file discovery.
    pub ignore_substrings: Vec<String>,
    /// File name patterns identifying test files.
    pub test_patterns: Vec<String>,
    /// Top-level component directories exempt from placement and usage rules.
    pub exempt_segments: Vec<String>,
    /// Hard ceiling on traversal depth.
    pub max_traversal_depth: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            pages_dir: "pages".to_string(),
            components_dir: "components".to_string(),
            extensions: string_vec(&["tsx", "ts", "jsx", "js"]),
            index_basename: "index".to_string(),
            alias_prefix: "@/".to_string(),
            alias_namespaces: string_vec(&["components", "shared"]),
            stylesheet_extensions: string_vec(&["css", "scss", "sass", "less"]),
            ignore_substrings: string_vec(&["node_modules", ".next", "dist", "build"]),
            test_patterns: string_vec(&[".test.", ".spec.", "__tests__", "__mocks__"]),
            exempt_segments: string_vec(&["shared"]),
            max_traversal_depth: 50,
        }
    }
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl LintConfig {
    /// Loads configuration for a project root.
    ///
    /// An explicit path must exist and parse; otherwise `layerlint.json`
    /// is used when present, and defaults apply when it is not.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default = root.join(CONFIG_FILENAME);
                default.is_file().then_some(default)
            }
        };

        match path {
            Some(path) => {
                let content = fs::read_to_string(&path)?;
                Self::from_json(&content)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parses configuration from a JSON document. Unknown keys are rejected,
    /// omitted keys keep their defaults.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| LintError::Config(format!("invalid {CONFIG_FILENAME}: {e}")))
    }

    /// Whether a path carries one of the recognized source extensions.
    pub fn has_source_extension(&self, path: &Path) -> bool {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self.extensions.iter().any(|e| e == ext),
            None => false,
        }
    }

    /// Whether an import specifier points at a stylesheet resource.
    pub fn is_stylesheet_specifier(&self, specifier: &str) -> bool {
        self.stylesheet_extensions
            .iter()
            .any(|ext| specifier.ends_with(&format!(".{ext}")))
    }

    /// Whether a path matches one of the test file patterns.
    pub fn is_test_file(&self, path: &Path) -> bool {
        let display = path.to_string_lossy();
        self.test_patterns
            .iter()
            .any(|pattern| display.contains(pattern.as_str()))
    }

    /// Whether a path contains one of the ignored substrings.
    pub fn is_ignored_path(&self, path: &Path) -> bool {
        let display = path.to_string_lossy();
        self.ignore_substrings
            .iter()
            .any(|fragment| display.contains(fragment.as_str()))
    }

    /// Whether a top-level component segment is exempt from placement
    /// and unused-component reporting.
    pub fn is_exempt_segment(&self, segment: &str) -> bool {
        self.exempt_segments.iter().any(|s| s == segment)
    }
}

/// Resolved absolute locations of the directories a run operates on.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Canonicalized project root.
    pub root: PathBuf,
    /// Absolute path of the pages directory.
    pub pages_root: PathBuf,
    /// Absolute path of the components directory.
    pub components_root: PathBuf,
}

impl ProjectLayout {
    /// Locates the pages and components directories under a project root.
    pub fn locate(root: &Path, config: &LintConfig) -> Result<Self> {
        let root = root.canonicalize()?;

        let pages_root = root.join(&config.pages_dir);
        if !pages_root.is_dir() {
            return Err(LintError::MissingDirectory(pages_root));
        }

        let components_root = root.join(&config.components_dir);
        if !components_root.is_dir() {
            return Err(LintError::MissingDirectory(components_root));
        }

        Ok(Self {
            root,
            pages_root,
            components_root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LintConfig::default();
        assert_eq!(config.pages_dir, "pages");
        assert_eq!(config.components_dir, "components");
        assert_eq!(config.extensions, vec!["tsx", "ts", "jsx", "js"]);
        assert_eq!(config.alias_prefix, "@/");
        assert_eq!(config.max_traversal_depth, 50);
    }

    #[test]
    fn test_from_json_partial_overrides() {
        let config = LintConfig::from_json(r#"{"pagesDir": "app", "aliasPrefix": "~/"}"#)
            .expect("partial config should parse");
        assert_eq!(config.pages_dir, "app");
        assert_eq!(config.alias_prefix, "~/");
        // Untouched keys keep defaults
        assert_eq!(config.components_dir, "components");
        assert_eq!(config.index_basename, "index");
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let result = LintConfig::from_json(r#"{"pagesDir": "app", "pageDir": "oops"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let result = LintConfig::from_json("{not json");
        assert!(matches!(result, Err(LintError::Config(_))));
    }

    #[test]
    fn test_stylesheet_specifier() {
        let config = LintConfig::default();
        assert!(config.is_stylesheet_specifier("./styles.css"));
        assert!(config.is_stylesheet_specifier("@/components/theme.scss"));
        assert!(!config.is_stylesheet_specifier("./button"));
        assert!(!config.is_stylesheet_specifier("./cssify"));
    }

    #[test]
    fn test_source_extension() {
        let config = LintConfig::default();
        assert!(config.has_source_extension(Path::new("a/button.tsx")));
        assert!(config.has_source_extension(Path::new("a/util.js")));
        assert!(!config.has_source_extension(Path::new("a/theme.css")));
        assert!(!config.has_source_extension(Path::new("a/Makefile")));
    }

    #[test]
    fn test_test_file_patterns() {
        let config = LintConfig::default();
        assert!(config.is_test_file(Path::new("components/button.test.tsx")));
        assert!(config.is_test_file(Path::new("components/__tests__/button.tsx")));
        assert!(!config.is_test_file(Path::new("components/button.tsx")));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let config = LintConfig::load(temp.path(), None).unwrap();
        assert_eq!(config.pages_dir, "pages");
    }

    #[test]
    fn test_load_reads_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"componentsDir": "widgets"}"#,
        )
        .unwrap();
        let config = LintConfig::load(temp.path(), None).unwrap();
        assert_eq!(config.components_dir, "widgets");
    }

    #[test]
    fn test_locate_requires_both_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("pages")).unwrap();
        let config = LintConfig::default();

        let result = ProjectLayout::locate(temp.path(), &config);
        assert!(matches!(result, Err(LintError::MissingDirectory(_))));

        fs::create_dir(temp.path().join("components")).unwrap();
        let layout = ProjectLayout::locate(temp.path(), &config).unwrap();
        assert!(layout.pages_root.ends_with("pages"));
        assert!(layout.components_root.ends_with("components"));
    }
}
