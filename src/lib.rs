//! steamshelf - find which Steam games are installed on disk
//!
//! Reads Steam's library registry and per-app manifests directly, so it works
//! with Steam closed and with libraries spread over several drives.

pub mod config;
pub mod discovery;
pub mod paths;

pub use discovery::{
    AppManifest, DiscoveryError, InstalledGame, LibraryFolderEntry, LibraryRoot,
    default_steam_root, discover_games_in, discover_installed_apps, discover_installed_games,
    find_game_path,
};
