//! Per-package doc fragments injected around collected signatures.
//!
//! Fragment files live in the template dir and are named after the package
//! display name: `part-<name>-s<lang>.md` before the code block and
//! `part-<name><lang>.md` after it. A missing fragment is never an error.

use crate::config::Lang;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Start,
    End,
}

impl FragmentKind {
    /// File name for a package and language suffix ("" or ".zh-CN").
    pub fn filename(self, name: &str, lang_suffix: &str) -> String {
        match self {
            FragmentKind::Start => format!("part-{}-s{}.md", name, lang_suffix),
            FragmentKind::End => format!("part-{}{}.md", name, lang_suffix),
        }
    }
}

/// Loads fragments with default-language fallback.
#[derive(Debug, Clone)]
pub struct FragmentLoader {
    dir: Option<PathBuf>,
    lang: Lang,
}

impl FragmentLoader {
    pub fn new(dir: Option<&Path>, lang: Lang) -> Self {
        FragmentLoader {
            dir: dir.map(Path::to_path_buf),
            lang,
        }
    }

    /// Fragment text for a package, or `None` when no file provides one.
    pub fn load(&self, kind: FragmentKind, name: &str) -> Option<String> {
        let dir = self.dir.as_deref()?;

        let filename = kind.filename(name, &self.lang.suffix());
        if let Some(body) = read_fragment(dir, &filename) {
            return Some(body);
        }

        if self.lang.is_default() {
            return None;
        }
        read_fragment(dir, &kind.filename(name, ""))
    }
}

/// Empty and unreadable files both count as absent.
fn read_fragment(dir: &Path, filename: &str) -> Option<String> {
    let path = dir.join(filename);
    match fs::read(&path) {
        Ok(body) if !body.is_empty() => {
            info!("find and inject sub-package doc: {}", filename);
            Some(String::from_utf8_lossy(&body).into_owned())
        }
        Ok(_) => None,
        Err(e) => {
            debug!("no fragment {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn loader(dir: &TempDir, lang: &str) -> FragmentLoader {
        FragmentLoader::new(Some(dir.path()), Lang::new(lang))
    }

    #[test]
    fn filenames() {
        assert_eq!(FragmentKind::Start.filename("string", ""), "part-string-s.md");
        assert_eq!(FragmentKind::End.filename("string", ".zh-CN"), "part-string.zh-CN.md");
    }

    #[test]
    fn prefers_language_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("part-string-s.md"), "default").unwrap();
        fs::write(dir.path().join("part-string-s.zh-CN.md"), "localized").unwrap();

        let got = loader(&dir, "zh-CN").load(FragmentKind::Start, "string");
        assert_eq!(got.as_deref(), Some("localized"));
    }

    #[test]
    fn falls_back_to_default_language() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("part-string.md"), "default end").unwrap();

        let got = loader(&dir, "zh-CN").load(FragmentKind::End, "string");
        assert_eq!(got.as_deref(), Some("default end"));
    }

    #[test]
    fn unknown_language_falls_back() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("part-map-s.md"), "map intro").unwrap();

        let got = loader(&dir, "fr").load(FragmentKind::Start, "map");
        assert_eq!(got.as_deref(), Some("map intro"));
    }

    #[test]
    fn empty_file_counts_as_missing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("part-map-s.zh-CN.md"), "").unwrap();
        fs::write(dir.path().join("part-map-s.md"), "fallback").unwrap();

        let got = loader(&dir, "zh-CN").load(FragmentKind::Start, "map");
        assert_eq!(got.as_deref(), Some("fallback"));
    }

    #[test]
    fn missing_everywhere_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(loader(&dir, "zh-CN").load(FragmentKind::Start, "map"), None);
        assert_eq!(loader(&dir, "en").load(FragmentKind::End, "map"), None);
    }

    #[test]
    fn no_template_dir_loads_nothing() {
        let loader = FragmentLoader::new(None, Lang::default());
        assert_eq!(loader.load(FragmentKind::Start, "map"), None);
    }
}
