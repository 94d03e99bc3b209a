//! WSL detection over a cached `/proc/version` read.
//!
//! See https://github.com/Microsoft/WSL/issues/423#issuecomment-221627364

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::sync::{LazyLock, OnceLock};
use tracing::debug;

const PROC_VERSION: &str = "/proc/version";

/// Only the head of the file is inspected.
const READ_LIMIT: u64 = 1024;

/// Vendor marker present in the kernel version string under WSL.
const WSL_MARKER: &str = "Microsoft";

static DEFAULT_PROBE: LazyLock<WslProbe> = LazyLock::new(WslProbe::default);

/// Running under the Windows Subsystem for Linux.
///
/// The first call reads `/proc/version`; later calls reuse the result.
pub fn is_wsl() -> bool {
    DEFAULT_PROBE.is_wsl()
}

/// Lazily-initialised cache of the pseudo-file contents.
#[derive(Debug)]
pub struct WslProbe {
    path: PathBuf,
    contents: OnceLock<String>,
}

impl Default for WslProbe {
    fn default() -> Self {
        WslProbe::new(PROC_VERSION)
    }
}

impl WslProbe {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        WslProbe {
            path: path.into(),
            contents: OnceLock::new(),
        }
    }

    /// A probe whose cache is already filled; the file is never read.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let probe = WslProbe::default();
        let _ = probe.contents.set(contents.into());
        probe
    }

    pub fn is_wsl(&self) -> bool {
        self.contents().contains(WSL_MARKER)
    }

    /// Cached contents, reading the file on first use. Unreadable → "".
    pub fn contents(&self) -> &str {
        self.contents.get_or_init(|| self.read())
    }

    /// Forget the cached contents so the next query reads again.
    pub fn reset(&mut self) {
        self.contents.take();
    }

    fn read(&self) -> String {
        let mut buf = Vec::new();
        let res = File::open(&self.path)
            .and_then(|f| f.take(READ_LIMIT).read_to_end(&mut buf));
        if let Err(e) = res {
            debug!("cannot read {}: {}", self.path.display(), e);
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}
