// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::PathBuf;

const APP_DIR: &str = "tally";

/// Return the application data directory, creating it if needed.
///
/// Only the settings file lives here.
pub fn data_dir() -> PathBuf {
    let dir = resolve(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    );
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "could not create data directory");
    }
    dir
}

/// `$XDG_DATA_HOME/tally`, else `$HOME/.local/share/tally`, else a temp dir.
fn resolve(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    let base = xdg_data_home
        .filter(|p| p.is_absolute())
        .or_else(|| home.map(|h| h.join(".local").join("share")))
        .unwrap_or_else(std::env::temp_dir);
    base.join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_xdg_data_home() {
        let dir = resolve(Some("/data".into()), Some("/home/ana".into()));
        assert_eq!(dir, PathBuf::from("/data/tally"));
    }

    #[test]
    fn falls_back_to_home_local_share() {
        let dir = resolve(None, Some("/home/ana".into()));
        assert_eq!(dir, PathBuf::from("/home/ana/.local/share/tally"));
    }

    #[test]
    fn ignores_relative_xdg_data_home() {
        let dir = resolve(Some("relative".into()), Some("/home/ana".into()));
        assert_eq!(dir, PathBuf::from("/home/ana/.local/share/tally"));
    }
}
