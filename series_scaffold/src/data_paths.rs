use std::env;
use std::path::{Path, PathBuf};

/// Location of the series documents, relative to the project root.
pub const DATA_DIR: &str = "docs/data";

/// Resolve the most likely location of the series data directory.
///
/// Falls back to [`DATA_DIR`] under the current directory when no candidate exists yet.
pub fn detect_data_root() -> PathBuf {
    let exe_path = env::current_exe().ok();
    candidate_roots(exe_path.as_deref())
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from(DATA_DIR))
}

/// Candidate data directories in search order.
fn candidate_roots(exe_path: Option<&Path>) -> Vec<PathBuf> {
    // Project root as the working directory is the common layout.
    let mut candidates = vec![PathBuf::from(DATA_DIR)];

    if let Some(exe_path) = exe_path
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join(DATA_DIR));
        if let Some(parent) = dir.parent() {
            candidates.push(parent.join(DATA_DIR));
        }
    }

    candidates
}
