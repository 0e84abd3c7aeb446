// Installed app discovery across every Steam library

use crate::discovery::operations::{
    default_steam_root, read_library_folders, scan_library, validate_manifest,
};
use crate::discovery::pure::{Verdict, merge_app_ids, merge_games};
use crate::discovery::types::{
    DiscoveryError, InstalledGame, LibraryFolderEntry, LibraryRoot, Result,
};
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Confirm the root is usable
///
/// `Ok(false)` means it does not exist, which is not an error.
fn check_root(root: &Path) -> Result<bool> {
    match fs::read_dir(root) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::NotADirectory => {
            Err(DiscoveryError::RootNotDirectory(root.to_path_buf()))
        }
        Err(source) => Err(DiscoveryError::RootInaccessible {
            path: root.to_path_buf(),
            source,
        }),
    }
}

fn dedup_roots(roots: impl IntoIterator<Item = LibraryRoot>) -> Vec<LibraryRoot> {
    let mut seen = HashSet::new();
    roots
        .into_iter()
        .filter(|library| seen.insert(library.path.clone()))
        .collect()
}

/// Every library to scan for a Steam root: the root itself, then each folder
/// declared in its `libraryfolders.vdf`, without duplicates
pub fn library_roots(root: &Path) -> Vec<LibraryRoot> {
    let base = LibraryRoot::new(root);
    let declared = read_library_folders(&base.library_folders_file());
    dedup_roots(std::iter::once(base).chain(declared.iter().map(LibraryFolderEntry::to_root)))
}

/// Games accepted in a single library, in directory order
pub fn installed_in_library(library: &LibraryRoot) -> io::Result<Vec<InstalledGame>> {
    let games = scan_library(library)?
        .into_iter()
        .filter_map(|manifest| {
            let verdict = validate_manifest(library, &manifest);
            if !verdict.is_accepted() {
                return None;
            }
            let install_path = match verdict {
                Verdict::Installed(path) => Some(path),
                Verdict::Unverified | Verdict::Stale(_) => None,
            };
            Some(InstalledGame {
                app_id: manifest.app_id,
                name: manifest.name,
                library: library.path.clone(),
                install_path,
            })
        })
        .collect();
    Ok(games)
}

/// Scan libraries independently; unreadable ones are logged and contribute nothing
pub fn scan_libraries(libraries: &[LibraryRoot]) -> Vec<Vec<InstalledGame>> {
    libraries
        .iter()
        .map(|library| {
            installed_in_library(library).unwrap_or_else(|e| {
                warn!("Skipping library {}: {}", library.path.display(), e);
                Vec::new()
            })
        })
        .collect()
}

/// Per-library results for `root` plus any caller-supplied extra libraries
///
/// The base root is strict: if it exists but cannot be listed, that is an
/// error. Every other library is best effort.
pub(crate) fn scan_per_library(
    root: &Path,
    extra_libraries: &[PathBuf],
) -> Result<Vec<Vec<InstalledGame>>> {
    let extras = extra_libraries.iter().map(LibraryRoot::new);

    if !check_root(root)? {
        info!("Steam root {} does not exist", root.display());
        return Ok(scan_libraries(&dedup_roots(extras)));
    }

    let base = LibraryRoot::new(root);
    let base_games =
        installed_in_library(&base).map_err(|source| DiscoveryError::RootInaccessible {
            path: base.steamapps(),
            source,
        })?;

    let others: Vec<LibraryRoot> = dedup_roots(library_roots(root).into_iter().chain(extras))
        .into_iter()
        .filter(|library| *library != base)
        .collect();

    let mut per_library = vec![base_games];
    per_library.extend(scan_libraries(&others));
    Ok(per_library)
}

/// Installed games under `root` and `extra_libraries`, one per app id, sorted by id
pub fn discover_games_in(root: &Path, extra_libraries: &[PathBuf]) -> Result<Vec<InstalledGame>> {
    let games = merge_games(scan_per_library(root, extra_libraries)?);
    info!("Total installed detected: {}", games.len());
    Ok(games)
}

/// Installed games with their names and locations
///
/// `root` overrides the detected Steam installation.
pub fn discover_installed_games(root: Option<&Path>) -> Result<Vec<InstalledGame>> {
    let root = root.map(Path::to_path_buf).unwrap_or_else(default_steam_root);
    discover_games_in(&root, &[])
}

/// App ids of every Steam game present on disk
///
/// `root` overrides the detected Steam installation. A root that does not
/// exist yields an empty set; only an unusable root is an error.
pub fn discover_installed_apps(root: Option<&Path>) -> Result<BTreeSet<u32>> {
    let root = root.map(Path::to_path_buf).unwrap_or_else(default_steam_root);
    let per_library = scan_per_library(&root, &[])?;

    let installed = merge_app_ids(
        per_library
            .iter()
            .map(|games| games.iter().map(|game| game.app_id).collect::<BTreeSet<u32>>()),
    );
    info!("Total installed detected: {}", installed.len());
    Ok(installed)
}
