//! Exported function collection, grouped into package sections.
//!
//! Signatures are found textually, never parsed: a declaration counts when
//! it starts with `func ` followed by an upper-case name, and everything up
//! to the end of the line is kept (minus the trailing body brace).
//!
//! Grouping is a two-state machine over the discovery order:
//!
//! - `Idle` → `Open(pkg)` on the first file;
//! - `Open(a)` → `Open(b)` when the package key changes, closing `a`;
//! - `Open(a)` → `Idle` at end of input, closing `a`.
//!
//! Both closing transitions go through [`Collector::close`].

use crate::model::{FunctionSignature, PackageName, PackageSection, SourceFile, SourceGroup};
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::sync::LazyLock;
use tracing::{debug, info};

static RE_EXPORTED_FUNC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"func [A-Z][0-9A-Za-z_]+\(.*\).*").unwrap());

/// Extract exported function signatures from Go source text.
pub fn extract_signatures(text: &str) -> Vec<FunctionSignature> {
    RE_EXPORTED_FUNC
        .find_iter(text)
        .map(|m| FunctionSignature {
            text: m.as_str().trim_end_matches(['{', ' ']).to_string(),
        })
        .collect()
}

/// Result of a collection run.
#[derive(Debug, Default)]
pub struct Collection {
    /// Sections in discovery order.
    pub sections: Vec<PackageSection>,
    /// Every package seen: short name → full package path.
    pub packages: BTreeMap<String, String>,
}

#[derive(Debug)]
enum SectionState {
    Idle,
    Open(PackageSection),
}

/// Incremental section builder.
#[derive(Debug)]
pub struct Collector {
    base_pkg: String,
    state: SectionState,
    done: Collection,
}

impl Collector {
    pub fn new(base_pkg: &str) -> Self {
        Collector {
            base_pkg: base_pkg.trim_end_matches('/').to_string(),
            state: SectionState::Idle,
            done: Collection::default(),
        }
    }

    /// Feed one file's text.
    pub fn add_file(&mut self, file: &SourceFile, text: &str) {
        let same_package = matches!(
            &self.state,
            SectionState::Open(section) if section.name.raw == file.package
        );
        if !same_package {
            self.close();
            self.open(&file.package);
        }

        let signatures = extract_signatures(text);
        debug!("{}: {} exported functions", file.rel_path, signatures.len());
        if signatures.is_empty() {
            return;
        }

        if let SectionState::Open(section) = &mut self.state {
            section.groups.push(SourceGroup {
                rel_path: file.rel_path.clone(),
                signatures,
            });
        }
    }

    /// Close any open section and return everything collected.
    pub fn finish(mut self) -> Collection {
        self.close();
        self.done
    }

    fn open(&mut self, package: &str) {
        let pkg_path = format!("{}/{}", self.base_pkg, package);
        self.done
            .packages
            .insert(package.to_string(), pkg_path.clone());

        self.state = SectionState::Open(PackageSection {
            name: PackageName::from_dir(package),
            pkg_path,
            groups: Vec::new(),
        });
    }

    fn close(&mut self) {
        if let SectionState::Open(section) = std::mem::replace(&mut self.state, SectionState::Idle) {
            self.done.sections.push(section);
        }
    }
}

/// Read every file in order and group its signatures into sections.
pub fn collect(files: &[SourceFile], base_pkg: &str) -> Result<Collection> {
    info!("find and collect exported functions...");

    let mut collector = Collector::new(base_pkg);
    for file in files {
        let bytes = fs::read(&file.path)
            .with_context(|| format!("failed to read {}", file.path.display()))?;
        collector.add_file(file, &String::from_utf8_lossy(&bytes));
    }
    Ok(collector.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(package: &str, name: &str) -> SourceFile {
        let rel_path = format!("{}/{}", package, name);
        SourceFile {
            path: PathBuf::from(&rel_path),
            rel_path,
            package: package.to_string(),
        }
    }

    #[test]
    fn extracts_only_exported_functions() {
        let text = "package x\n\nfunc Foo(a int) string {\n\treturn \"\"\n}\n\nfunc bar(a int) {\n}\n";
        let sigs = extract_signatures(text);
        assert_eq!(sigs.len(), 1);
        assert_eq!(sigs[0].text, "func Foo(a int) string");
    }

    #[test]
    fn skips_methods_and_single_letter_names() {
        let text = "func (t *TimeX) Format(layout string) string {\nfunc X() {\nfunc Ok() {}\n";
        let sigs: Vec<_> = extract_signatures(text).into_iter().map(|s| s.text).collect();
        assert_eq!(sigs, vec!["func Ok() {}"]);
    }

    #[test]
    fn keeps_multi_return_and_trims_brace() {
        let text = "func ToTime(s string, layouts ...string) (t time.Time, err error) { \n";
        let sigs = extract_signatures(text);
        assert_eq!(sigs[0].text, "func ToTime(s string, layouts ...string) (t time.Time, err error)");
    }

    #[test]
    fn multi_line_signatures_are_not_matched() {
        let text = "func Long(\n\ta int,\n) error {\n";
        assert!(extract_signatures(text).is_empty());
    }

    #[test]
    fn reappearing_package_opens_new_section() {
        let mut c = Collector::new("github.com/gookit/goutil");
        c.add_file(&file("arrutil", "a.go"), "func A1() {");
        c.add_file(&file("arrutil", "b.go"), "func A2() {");
        c.add_file(&file("strutil", "a.go"), "func S1() {");
        c.add_file(&file("strutil", "b.go"), "func S2() {");
        c.add_file(&file("arrutil", "c.go"), "func A3() {");
        let out = c.finish();

        let keys: Vec<_> = out.sections.iter().map(|s| s.name.raw.as_str()).collect();
        assert_eq!(keys, vec!["arrutil", "strutil", "arrutil"]);
        assert_eq!(out.sections[0].groups.len(), 2);
        assert_eq!(out.sections[2].groups[0].rel_path, "arrutil/c.go");
        assert_eq!(out.packages.len(), 2);
        assert_eq!(out.packages["strutil"], "github.com/gookit/goutil/strutil");
    }

    #[test]
    fn files_without_matches_still_open_sections() {
        let mut c = Collector::new("example.com/base/");
        c.add_file(&file("errorx", "doc.go"), "package errorx\n");
        c.add_file(&file("maputil", "map.go"), "func Keys(m any) []string {");
        let out = c.finish();

        assert_eq!(out.sections.len(), 2);
        assert!(out.sections[0].groups.is_empty());
        assert_eq!(out.sections[0].pkg_path, "example.com/base/errorx");
        assert_eq!(out.sections[1].groups[0].signatures[0].text, "func Keys(m any) []string");
    }

    #[test]
    fn empty_input_yields_no_sections() {
        let out = Collector::new("x").finish();
        assert!(out.sections.is_empty());
        assert!(out.packages.is_empty());
    }
}
