//! Import specifier resolution.
//!
//! Turns the specifier text of an import declaration into the absolute
//! path of a project file, or `None` for anything the graph does not
//! track: stylesheets, bare package names, and aliases outside the
//! allowed namespaces. Resolution misses are silent. A specifier that
//! looks internal but matches no file on disk simply produces no edge.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::config::LintConfig;

pub struct ImportResolver {
    config: LintConfig,
    project_root: PathBuf,
}

impl ImportResolver {
    pub fn new(config: LintConfig, project_root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            project_root: project_root.into(),
        }
    }

    /// Resolves a specifier found in `source_path` to an absolute file path.
    pub fn resolve(&self, source_path: &Path, specifier: &str) -> Option<PathBuf> {
        if self.config.is_stylesheet_specifier(specifier) {
            return None;
        }

        let candidate = if specifier.starts_with('.') {
            source_path.parent()?.join(specifier)
        } else if let Some(rest) = specifier.strip_prefix(&self.config.alias_prefix) {
            let namespace = rest.split('/').next()?;
            if !self.config.alias_namespaces.iter().any(|ns| ns == namespace) {
                return None;
            }
            self.project_root.join(rest)
        } else {
            // Bare specifiers are package imports
            return None;
        };

        self.probe(candidate.clean())
    }

    /// Probes a candidate path: exact file first, then each recognized
    /// extension appended, then directory index files.
    fn probe(&self, candidate: PathBuf) -> Option<PathBuf> {
        if candidate.is_file() {
            return Some(candidate);
        }

        for ext in &self.config.extensions {
            let with_ext = append_extension(&candidate, ext);
            if with_ext.is_file() {
                return Some(with_ext);
            }
        }

        if candidate.is_dir() {
            for ext in &self.config.extensions {
                let index = candidate.join(format!("{}.{}", self.config.index_basename, ext));
                if index.is_file() {
                    return Some(index);
                }
            }
        }

        None
    }
}

/// Appends an extension without touching any existing one, so
/// `button.stories` probes as `button.stories.tsx`.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".");
    os.push(ext);
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn create_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut file = File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    fn create_resolver(root: &Path) -> ImportResolver {
        ImportResolver::new(LintConfig::default(), root)
    }

    #[test]
    fn test_relative_with_extension_probe() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        create_file(&root, "components/forms/login.tsx", "");
        create_file(&root, "components/forms/button.tsx", "");

        let resolver = create_resolver(&root);
        let source = root.join("components/forms/login.tsx");

        let resolved = resolver.resolve(&source, "./button").unwrap();
        assert_eq!(resolved, root.join("components/forms/button.tsx"));
    }

    #[test]
    fn test_extension_probe_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        create_file(&root, "components/a.tsx", "");
        // Both .tsx and .ts exist; .tsx wins
        create_file(&root, "components/util.tsx", "");
        create_file(&root, "components/util.ts", "");

        let resolver = create_resolver(&root);
        let source = root.join("components/a.tsx");

        let resolved = resolver.resolve(&source, "./util").unwrap();
        assert_eq!(resolved, root.join("components/util.tsx"));
    }

    #[test]
    fn test_exact_path_with_extension() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        create_file(&root, "components/a.tsx", "");
        create_file(&root, "components/button.tsx", "");

        let resolver = create_resolver(&root);
        let source = root.join("components/a.tsx");

        let resolved = resolver.resolve(&source, "./button.tsx").unwrap();
        assert_eq!(resolved, root.join("components/button.tsx"));
    }

    #[test]
    fn test_parent_relative_specifier() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        create_file(&root, "components/forms/fields/date.tsx", "");
        create_file(&root, "components/forms/shared-label.tsx", "");

        let resolver = create_resolver(&root);
        let source = root.join("components/forms/fields/date.tsx");

        let resolved = resolver.resolve(&source, "../shared-label").unwrap();
        assert_eq!(resolved, root.join("components/forms/shared-label.tsx"));
    }

    #[test]
    fn test_directory_index_fallback() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        create_file(&root, "components/nav.tsx", "");
        create_file(&root, "components/menu/index.tsx", "");

        let resolver = create_resolver(&root);
        let source = root.join("components/nav.tsx");

        let resolved = resolver.resolve(&source, "./menu").unwrap();
        assert_eq!(resolved, root.join("components/menu/index.tsx"));
    }

    #[test]
    fn test_alias_into_components() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        create_file(&root, "pages/home.tsx", "");
        create_file(&root, "components/header.tsx", "");

        let resolver = create_resolver(&root);
        let source = root.join("pages/home.tsx");

        let resolved = resolver.resolve(&source, "@/components/header").unwrap();
        assert_eq!(resolved, root.join("components/header.tsx"));
    }

    #[test]
    fn test_alias_into_shared() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        create_file(&root, "components/form.tsx", "");
        create_file(&root, "shared/validation.ts", "");

        let resolver = create_resolver(&root);
        let source = root.join("components/form.tsx");

        let resolved = resolver.resolve(&source, "@/shared/validation").unwrap();
        assert_eq!(resolved, root.join("shared/validation.ts"));
    }

    #[test]
    fn test_alias_outside_namespaces_rejected() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        create_file(&root, "pages/home.tsx", "");
        create_file(&root, "lib/api.ts", "");

        let resolver = create_resolver(&root);
        let source = root.join("pages/home.tsx");

        assert_eq!(resolver.resolve(&source, "@/lib/api"), None);
        assert_eq!(resolver.resolve(&source, "@/"), None);
    }

    #[test]
    fn test_bare_package_specifier_rejected() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        create_file(&root, "pages/home.tsx", "");

        let resolver = create_resolver(&root);
        let source = root.join("pages/home.tsx");

        assert_eq!(resolver.resolve(&source, "react"), None);
        assert_eq!(resolver.resolve(&source, "date-fns/format"), None);
    }

    #[test]
    fn test_stylesheet_specifiers_rejected() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        create_file(&root, "pages/home.tsx", "");
        create_file(&root, "pages/home.css", "");

        let resolver = create_resolver(&root);
        let source = root.join("pages/home.tsx");

        assert_eq!(resolver.resolve(&source, "./home.css"), None);
        assert_eq!(resolver.resolve(&source, "./theme.scss"), None);
    }

    #[test]
    fn test_missing_target_is_silent() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        create_file(&root, "pages/home.tsx", "");

        let resolver = create_resolver(&root);
        let source = root.join("pages/home.tsx");

        assert_eq!(resolver.resolve(&source, "./does-not-exist"), None);
        assert_eq!(resolver.resolve(&source, "@/components/ghost"), None);
    }

    #[test]
    fn test_dotted_basename_keeps_suffix() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        create_file(&root, "components/a.tsx", "");
        create_file(&root, "components/button.stories.tsx", "");

        let resolver = create_resolver(&root);
        let source = root.join("components/a.tsx");

        let resolved = resolver.resolve(&source, "./button.stories").unwrap();
        assert_eq!(resolved, root.join("components/button.stories.tsx"));
    }

    #[test]
    fn test_resolved_paths_are_normalized() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        create_file(&root, "components/forms/fields/date.tsx", "");
        create_file(&root, "components/button.tsx", "");

        let resolver = create_resolver(&root);
        let source = root.join("components/forms/fields/date.tsx");

        let resolved = resolver.resolve(&source, "../../button").unwrap();
        // No `..` segments survive normalization
        assert_eq!(resolved, root.join("components/button.tsx"));
    }
}
