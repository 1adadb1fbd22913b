//! Locating the engine's runtime data directory.
//!
//! `PXLSLYR_DATA_DIR` wins when it names a directory. Otherwise the first
//! existing `data` directory is used, looking in the working directory and
//! then beside the executable and one level up from it.
use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{info, warn};

/// Environment variable that overrides data root detection.
pub const DATA_DIR_ENV: &str = "PXLSLYR_DATA_DIR";

const ENGINE_DATA: &str = "pxlslyr_engine/data";
const FLAT_DATA: &str = "data";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(|| {
    let cwd = env::current_dir().unwrap_or_default();
    let root = resolve_data_root(
        env::var_os(DATA_DIR_ENV).map(PathBuf::from),
        &cwd,
        env::current_exe().ok(),
    );
    info!("data root: '{}'", root.display());
    root
});

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Pick the data root from an optional override, the working directory and the executable's location.
pub fn resolve_data_root(override_dir: Option<PathBuf>, cwd: &Path, exe_path: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        if dir.is_dir() {
            return dir;
        }
        warn!("{DATA_DIR_ENV}='{}' is not a directory; searching defaults", dir.display());
    }

    let mut bases = vec![cwd.to_path_buf()];
    if let Some(exe_dir) = exe_path.as_deref().and_then(Path::parent) {
        bases.extend(exe_dir.ancestors().take(2).map(Path::to_path_buf));
    }

    bases
        .iter()
        .flat_map(|base| [base.join(ENGINE_DATA), base.join(FLAT_DATA)])
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| cwd.join(ENGINE_DATA))
}
