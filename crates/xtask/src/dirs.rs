//! Platform-specific directory utilities
//!
//! Mirrors the locations the client writes to, so cleanup targets the same
//! paths on every operating system.

use std::path::PathBuf;

/// Get the platform-specific log directory for Dungeon
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/dungeon/logs`
/// - Linux: `~/.cache/dungeon/logs` (or `$XDG_CACHE_HOME/dungeon/logs`)
/// - Windows: `%LOCALAPPDATA%\dungeon\cache\logs`
/// - Fallback: `<temp dir>/dungeon/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "dungeon")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("dungeon"))
        .join("logs")
}

/// Save slot the client would use with the current environment.
pub fn save_path() -> PathBuf {
    runtime::RuntimeConfig::from_env().save_path
}
