//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

// === Artifact Files ===
pub const CATALOG_FILE: &str = "catalog.msgpack";
pub const ELIGIBLE_FILE: &str = "eligible.msgpack";
pub const VECTORIZER_FILE: &str = "vectorizer.msgpack";
pub const SCALERS_FILE: &str = "scalers.msgpack";
pub const MATRIX_FILE: &str = "matrix.msgpack";
pub const MANIFEST_FILE: &str = "manifest.msgpack";

// === Recommendation Defaults ===
pub const DEFAULT_LIMIT: usize = 5;

// === Display ===
pub const DESCRIPTION_EXCERPT: usize = 160;

pub fn set_data_dir(path: PathBuf) {
    let _ = CUSTOM_DATA_DIR.set(path);
}

/// Data directory resolution order: --data-dir flag, CURATOR_DATA_DIR env
/// var, then a data/ directory next to the executable.
pub fn data_dir() -> Option<PathBuf> {
    if let Some(custom) = CUSTOM_DATA_DIR.get() {
        crate::ui::debug(&format!("Using custom data dir: {}", custom.display()));
        return Some(custom.clone());
    }

    if let Ok(env_path) = std::env::var("CURATOR_DATA_DIR") {
        let path = PathBuf::from(&env_path);
        if path.is_dir() {
            crate::ui::debug(&format!("Using CURATOR_DATA_DIR: {}", env_path));
            return Some(path);
        }
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let data = dir.join("data");
            if data.is_dir() {
                crate::ui::debug(&format!("Found data at: {}", data.display()));
                return Some(data);
            }
        }
    }

    None
}
