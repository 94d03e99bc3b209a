//! Terminal color-support detection from environment variables.
//!
//! Supported: linux, mac, or windows's ConEmu, Cmder, putty, git-bash.exe.
//! Not supported: windows cmd.exe, powerShell.exe.
//!
//! Tiers are cumulative: true-color implies 256-color implies basic color.

/// Terms that support color without advertising `xterm` or `256color`.
const SPECIAL_COLOR_TERMS: &[&str] = &["alacritty"];

/// Highest color tier a terminal supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColorLevel {
    None,
    Basic,
    Ansi256,
    TrueColor,
}

/// Color probe over an injectable env lookup.
pub struct ColorProbe<F> {
    lookup: F,
}

impl ColorProbe<fn(&str) -> Option<String>> {
    /// Probe reading the process environment.
    pub fn from_env() -> Self {
        Self::new(env_var)
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl<F> ColorProbe<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn new(lookup: F) -> Self {
        ColorProbe { lookup }
    }

    fn var(&self, key: &str) -> String {
        (self.lookup)(key).unwrap_or_default()
    }

    /// Current console supports at least basic color.
    pub fn supports_color(&self) -> bool {
        let term = self.var("TERM");
        if term.contains("xterm") || SPECIAL_COLOR_TERMS.contains(&term.as_str()) {
            return true;
        }

        // ConEmu, e.g. "ConEmuANSI=ON"
        if self.var("ConEmuANSI") == "ON" {
            return true;
        }

        // ANSICON, e.g. "ANSICON=189x2000 (189x43)"
        if !self.var("ANSICON").is_empty() {
            return true;
        }

        self.supports_256_color()
    }

    /// e.g. TERM=xterm-256color, screen-256color, tmux-256color
    pub fn supports_256_color(&self) -> bool {
        self.var("TERM").contains("256color") || self.supports_true_color()
    }

    /// COLORTERM=truecolor
    pub fn supports_true_color(&self) -> bool {
        self.var("COLORTERM").contains("truecolor")
    }

    pub fn level(&self) -> ColorLevel {
        if self.supports_true_color() {
            ColorLevel::TrueColor
        } else if self.supports_256_color() {
            ColorLevel::Ansi256
        } else if self.supports_color() {
            ColorLevel::Basic
        } else {
            ColorLevel::None
        }
    }
}

pub fn supports_color() -> bool {
    ColorProbe::from_env().supports_color()
}

pub fn supports_256_color() -> bool {
    ColorProbe::from_env().supports_256_color()
}

pub fn supports_true_color() -> bool {
    ColorProbe::from_env().supports_true_color()
}

pub fn color_level() -> ColorLevel {
    ColorProbe::from_env().level()
}
