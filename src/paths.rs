use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::warn;

/// `$HOME`, or `None` when it is unset or empty
pub static PATH_HOME: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    let home = env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from);
    if home.is_none() {
        warn!("HOME is not set; settings and per-user Steam locations are unavailable");
    }
    home
});

pub static PATH_SHELF: LazyLock<Option<PathBuf>> =
    LazyLock::new(|| shelf_dir(env::var_os("XDG_DATA_HOME"), PATH_HOME.as_deref()));

/// Data directory from `XDG_DATA_HOME`, else `~/.local/share`; never relative
pub fn shelf_dir(xdg_data_home: Option<OsString>, home: Option<&Path>) -> Option<PathBuf> {
    if let Some(xdg_data_home) = xdg_data_home.map(PathBuf::from)
        && xdg_data_home.is_absolute()
    {
        return Some(xdg_data_home.join("steamshelf"));
    }
    home.map(|home| home.join(".local/share/steamshelf"))
}

/// Places Steam usually lives, most likely first
pub fn steam_root_candidates() -> Vec<PathBuf> {
    if cfg!(target_os = "windows") {
        return vec![PathBuf::from(r"C:\Program Files (x86)\Steam")];
    }

    let Some(home) = PATH_HOME.as_ref() else {
        return Vec::new();
    };

    if cfg!(target_os = "macos") {
        vec![home.join("Library/Application Support/Steam")]
    } else {
        vec![
            // Native install
            home.join(".local/share/Steam"),
            // Symlink kept by older Steam packages
            home.join(".steam/steam"),
            // Flatpak
            home.join(".var/app/com.valvesoftware.Steam/.local/share/Steam"),
        ]
    }
}

/// First existing candidate, or the first candidate if none exist
///
/// Empty when there is nowhere sensible to look; scanning it finds nothing.
pub fn fallback_steam_root() -> PathBuf {
    let candidates = steam_root_candidates();
    candidates
        .iter()
        .find(|candidate| candidate.exists())
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_default()
}
