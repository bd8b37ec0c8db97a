use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::LintConfig;
use crate::error::Result;

/// Collects candidate source files from a directory tree.
///
/// Candidates are files with a recognized source extension that do not
/// match the configured ignore substrings or test patterns.
pub struct FileWalker {
    config: LintConfig,
}

impl FileWalker {
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    /// Walks a root directory and returns candidate files in sorted order.
    /// Walk failures are fatal.
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkBuilder::new(root)
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && self.is_candidate(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    pub fn is_candidate(&self, path: &Path) -> bool {
        self.config.has_source_extension(path)
            && !self.config.is_ignored_path(path)
            && !self.config.is_test_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn create_walker() -> FileWalker {
        FileWalker::new(LintConfig::default())
    }

    fn create_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut file = File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_walk_finds_component_files() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "button.tsx", "export const Button = () => null;");
        create_file(temp_dir.path(), "util.ts", "export const x = 1;");
        create_file(temp_dir.path(), "legacy.jsx", "export const L = () => null;");
        create_file(temp_dir.path(), "helper.js", "module.exports = {};");

        let walker = create_walker();
        let files = walker.walk(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_walk_recursive() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "index.tsx", "");
        create_file(temp_dir.path(), "forms/input.tsx", "");
        create_file(temp_dir.path(), "forms/fields/date.tsx", "");

        let walker = create_walker();
        let files = walker.walk(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_walk_returns_sorted_paths() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "zebra.tsx", "");
        create_file(temp_dir.path(), "apple.tsx", "");
        create_file(temp_dir.path(), "mango.tsx", "");

        let walker = create_walker();
        let files = walker.walk(temp_dir.path()).unwrap();

        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_walk_skips_non_source_files() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "button.tsx", "");
        create_file(temp_dir.path(), "theme.css", "");
        create_file(temp_dir.path(), "README.md", "# Readme");
        create_file(temp_dir.path(), "logo.svg", "<svg/>");

        let walker = create_walker();
        let files = walker.walk(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("button.tsx"));
    }

    #[test]
    fn test_walk_skips_test_files() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "button.tsx", "");
        create_file(temp_dir.path(), "button.test.tsx", "");
        create_file(temp_dir.path(), "button.spec.ts", "");
        create_file(temp_dir.path(), "__tests__/helpers.tsx", "");
        create_file(temp_dir.path(), "__mocks__/button.tsx", "");

        let walker = create_walker();
        let files = walker.walk(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("button.tsx"));
    }

    #[test]
    fn test_walk_skips_ignored_directories() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "app.tsx", "");
        create_file(temp_dir.path(), "node_modules/react/index.js", "");
        create_file(temp_dir.path(), "dist/app.js", "");
        create_file(temp_dir.path(), "build/app.js", "");

        let walker = create_walker();
        let files = walker.walk(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.tsx"));
    }

    #[test]
    fn test_walk_skips_hidden_files() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "visible.tsx", "");
        create_file(temp_dir.path(), ".hidden.tsx", "");

        let walker = create_walker();
        let files = walker.walk(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("visible.tsx"));
    }

    #[test]
    fn test_walk_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let walker = create_walker();
        let files = walker.walk(temp_dir.path()).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_is_candidate() {
        let walker = create_walker();
        assert!(walker.is_candidate(Path::new("components/button.tsx")));
        assert!(walker.is_candidate(Path::new("pages/home.jsx")));
        assert!(!walker.is_candidate(Path::new("components/button.test.tsx")));
        assert!(!walker.is_candidate(Path::new("node_modules/react/index.js")));
        assert!(!walker.is_candidate(Path::new("components/theme.css")));
    }

    #[test]
    fn test_custom_extensions() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "page.vue", "");
        create_file(temp_dir.path(), "page.tsx", "");

        let config = LintConfig {
            extensions: vec!["vue".to_string()],
            ..LintConfig::default()
        };
        let walker = FileWalker::new(config);
        let files = walker.walk(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("page.vue"));
    }
}
