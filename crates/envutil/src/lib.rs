//! Platform, WSL, terminal and color-support probes.
//!
//! Every probe is a cheap property query. The WSL probe is the only one with
//! state: it reads its pseudo-file once and caches the contents in a
//! [`WslProbe`] that tests can build with injected contents or reset.

mod color;
mod wsl;

pub use color::{
    color_level, supports_256_color, supports_color, supports_true_color, ColorLevel, ColorProbe,
};
pub use wsl::{is_wsl, WslProbe};

use std::io::IsTerminal;

/// Windows system. Platforms: linux windows macos
pub fn is_windows() -> bool {
    std::env::consts::OS == "windows"
}

/// Alias of [`is_windows`].
pub fn is_win() -> bool {
    is_windows()
}

pub fn is_mac() -> bool {
    std::env::consts::OS == "macos"
}

pub fn is_linux() -> bool {
    std::env::consts::OS == "linux"
}

/// MSYS / MINGW shell env, e.g. git-bash on Windows.
pub fn is_msys() -> bool {
    std::env::var("MSYSTEM").is_ok_and(|v| v.starts_with("MINGW"))
}

/// isatty check for any stream, e.g. `is_terminal(&std::io::stdout())`.
pub fn is_terminal(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

/// Stdout is a terminal.
pub fn stdout_is_terminal() -> bool {
    is_terminal(&std::io::stdout())
}

/// The `SHELL` in use contains `shell`, e.g. `has_shell_env("bash")`.
pub fn has_shell_env(shell: &str) -> bool {
    std::env::var("SHELL").is_ok_and(|v| v.contains(shell))
}
