//! Installed Steam game discovery
//!
//! Works out which Steam apps are really installed without asking the Steam
//! client. The base library and every folder declared in
//! `steamapps/libraryfolders.vdf` are scanned for `appmanifest_*.acf` files,
//! and each manifest is only trusted once its `installdir` is found under that
//! library's `steamapps/common`.
//!
//! ## Module Structure
//! - `types.rs`: LibraryRoot, LibraryFolderEntry, AppManifest, InstalledGame, DiscoveryError
//! - `pure/`: VDF token matching, registry and manifest parsing, acceptance policy
//! - `operations/`: Root resolution, registry read, library scan, disk validation
//! - `pipelines/`: discover_installed_apps and friends

pub mod operations;
pub mod pipelines;
pub mod pure;
#[cfg(test)]
mod tests;
mod types;

// Re-export types
pub use types::{
    AppManifest, COMMON_DIR, DiscoveryError, InstalledGame, LIBRARY_FOLDERS_FILE,
    LibraryFolderEntry, LibraryRoot, Result, STEAMAPPS_DIR,
};

// Re-export entry points
pub use operations::default_steam_root;
pub use pipelines::{
    discover_games_in, discover_installed_apps, discover_installed_games, find_game_path,
    library_roots, scan_libraries,
};
