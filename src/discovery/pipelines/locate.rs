// Install path lookup for a single app

use super::discover::scan_per_library;
use crate::discovery::operations::default_steam_root;
use crate::discovery::types::Result;
use std::path::{Path, PathBuf};

/// Find the validated install directory of `app_id` across all libraries
///
/// Returns `None` when the app is not installed or its manifest declares no
/// install directory anywhere.
pub fn find_game_path(app_id: u32, root: Option<&Path>) -> Result<Option<PathBuf>> {
    let root = root.map(Path::to_path_buf).unwrap_or_else(default_steam_root);

    let path = scan_per_library(&root, &[])?
        .into_iter()
        .flatten()
        .filter(|game| game.app_id == app_id)
        .find_map(|game| game.install_path);

    Ok(path)
}
