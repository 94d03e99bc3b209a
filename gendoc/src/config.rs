//! Generator options resolved from the command line.

use std::fmt;
use std::path::{Path, PathBuf};

/// Sentinel output value meaning "print to standard output".
pub const STDOUT_SENTINEL: &str = "stdout";

/// Documentation language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lang(String);

impl Lang {
    pub const DEFAULT: &'static str = "en";

    /// Languages with bundled fragments. Others are accepted and fall back.
    pub const KNOWN: &'static [&'static str] = &["en", "zh-CN"];

    pub fn new(tag: &str) -> Self {
        Lang(tag.to_string())
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }

    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }

    /// Filename suffix: "" for the default language, ".zh-CN" otherwise.
    pub fn suffix(&self) -> String {
        if self.is_default() {
            String::new()
        } else {
            format!(".{}", self.0)
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::new(Self::DEFAULT)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the generated document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    pub fn parse(value: &str) -> Self {
        if value == STDOUT_SENTINEL {
            Output::Stdout
        } else {
            Output::File(PathBuf::from(value))
        }
    }
}

/// Everything one generator run needs.
#[derive(Debug, Clone)]
pub struct GenOptions {
    pub lang: Lang,
    pub output: Output,
    /// `None` disables the README template and all fragments.
    pub tpl_dir: Option<PathBuf>,
    pub root: PathBuf,
    pub base_pkg: String,
    pub hidden: Vec<String>,
}

impl GenOptions {
    /// "README.md.tpl" for the default language, "README.<lang>.md.tpl" otherwise.
    pub fn tpl_filename(&self) -> String {
        if self.lang.is_default() {
            "README.md.tpl".to_string()
        } else {
            format!("README.{}.md.tpl", self.lang)
        }
    }

    /// Full path of the README template, when a template dir is set.
    pub fn tpl_filepath(&self) -> Option<PathBuf> {
        self.tpl_dir.as_deref().map(|dir| dir.join(self.tpl_filename()))
    }

    pub fn tpl_dir(&self) -> Option<&Path> {
        self.tpl_dir.as_deref()
    }
}
