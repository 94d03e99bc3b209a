//! Candidate file discovery.
//!
//! Every `*.go` file one level below the scan root is a candidate. The
//! owning subdirectory is the package key. Files are dropped when:
//!
//! 1. the package is in the hidden set,
//! 2. the file is a test file (`_test.go`),
//! 3. the file is scoped to a single OS (`_windows.go`).
//!
//! Glob order is preserved.

use crate::model::SourceFile;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Test file suffix.
const TEST_SUFFIX: &str = "_test.go";

/// Suffixes of files that only build on one platform.
const PLATFORM_SUFFIXES: &[&str] = &["_windows.go"];

/// Glob pattern for all Go files one level under `root`.
pub fn source_pattern(root: &Path) -> String {
    let root = glob::Pattern::escape(&root.to_string_lossy());
    format!("{}/*/*.go", root.trim_end_matches('/'))
}

/// Expand the package glob under `root` and apply the exclusion rules.
pub fn discover(root: &Path, hidden: &[String]) -> Result<Vec<SourceFile>> {
    let pattern = source_pattern(root);
    debug!("scan source files by pattern {}", pattern);

    let mut paths = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("invalid glob pattern: {}", pattern))? {
        let path = entry.context("failed to read glob entry")?;
        if path.is_file() {
            paths.push(path);
        }
    }

    let files = filter_candidates(paths, root, hidden);
    if files.is_empty() {
        warn!("no source files matched: {}", pattern);
    }
    Ok(files)
}

/// Apply the hidden/test/platform rules to already-expanded paths.
pub fn filter_candidates(paths: Vec<PathBuf>, root: &Path, hidden: &[String]) -> Vec<SourceFile> {
    paths
        .into_iter()
        .filter_map(|path| {
            let package = package_of(&path)?;
            if hidden.iter().any(|h| *h == package) {
                return None;
            }

            let name = path.file_name()?.to_string_lossy();
            if name.ends_with(TEST_SUFFIX) {
                return None;
            }
            if PLATFORM_SUFFIXES.iter().any(|s| name.ends_with(s)) {
                return None;
            }

            let rel_path = relative_path(&path, root);
            Some(SourceFile {
                path,
                rel_path,
                package,
            })
        })
        .collect()
}

/// "arrutil/arrutil.go" → "arrutil"
fn package_of(path: &Path) -> Option<String> {
    path.parent()?
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
}

/// Path relative to the scan root, always '/'-separated.
fn relative_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn hidden() -> Vec<String> {
        vec!["netutil".to_string(), "internal".to_string()]
    }

    fn paths(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(|p| Path::new("root").join(p)).collect()
    }

    #[test]
    fn filters_hidden_test_and_platform_files() {
        let input = paths(&[
            "arrutil/arrutil.go",
            "arrutil/arrutil_test.go",
            "netutil/netutil.go",
            "sysutil/sysutil.go",
            "sysutil/sysutil_windows.go",
            "sysutil/sysutil_linux.go",
            "internal/gendoc.go",
        ]);

        let files = filter_candidates(input, Path::new("root"), &hidden());
        let rels: Vec<_> = files.iter().map(|f| f.rel_path.as_str()).collect();
        assert_eq!(
            rels,
            vec!["arrutil/arrutil.go", "sysutil/sysutil.go", "sysutil/sysutil_linux.go"]
        );
        assert_eq!(files[0].package, "arrutil");
        assert_eq!(files[1].package, "sysutil");
    }

    #[test]
    fn hidden_match_is_exact() {
        let input = paths(&["netutilx/a.go"]);
        let files = filter_candidates(input, Path::new("root"), &hidden());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].package, "netutilx");
    }

    #[test]
    fn preserves_input_order() {
        let input = paths(&["strutil/b.go", "arrutil/a.go", "strutil/a.go"]);
        let files = filter_candidates(input, Path::new("root"), &[]);
        let rels: Vec<_> = files.iter().map(|f| f.rel_path.as_str()).collect();
        assert_eq!(rels, vec!["strutil/b.go", "arrutil/a.go", "strutil/a.go"]);
    }

    #[test]
    fn pattern_escapes_root() {
        assert_eq!(source_pattern(Path::new("src/")), "src/*/*.go");
        assert_eq!(source_pattern(Path::new("a[1]")), "a[[]1[]]/*/*.go");
    }

    #[test]
    fn discover_walks_one_level_only() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("strutil/nested")).unwrap();
        fs::create_dir_all(dir.path().join("arrutil")).unwrap();
        fs::write(dir.path().join("strutil/str.go"), "package strutil").unwrap();
        fs::write(dir.path().join("strutil/nested/deep.go"), "package nested").unwrap();
        fs::write(dir.path().join("arrutil/arr.go"), "package arrutil").unwrap();
        fs::write(dir.path().join("top.go"), "package main").unwrap();

        let files = discover(dir.path(), &[]).unwrap();
        let rels: Vec<_> = files.iter().map(|f| f.rel_path.as_str()).collect();
        assert_eq!(rels, vec!["arrutil/arr.go", "strutil/str.go"]);
    }

    #[test]
    fn discover_empty_root_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(discover(dir.path(), &[]).unwrap().is_empty());
    }
}
