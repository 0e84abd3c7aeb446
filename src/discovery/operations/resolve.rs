// Default Steam root resolution

use crate::paths::fallback_steam_root;
use std::path::PathBuf;
use tracing::debug;

/// Best guess at the Steam installation directory on this machine
///
/// Asks steamlocate first (Windows registry, per-OS well-known paths), then
/// falls back to hard-coded candidates. The result is not checked for
/// existence; scanning a missing root simply finds nothing.
pub fn default_steam_root() -> PathBuf {
    match steamlocate::SteamDir::locate() {
        Ok(steam_dir) => {
            debug!("steamlocate found Steam at {}", steam_dir.path().display());
            steam_dir.path().to_path_buf()
        }
        Err(e) => {
            let fallback = fallback_steam_root();
            debug!(
                "steamlocate failed ({}), falling back to {}",
                e,
                fallback.display()
            );
            fallback
        }
    }
}
