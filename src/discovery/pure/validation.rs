// Pure install-acceptance policy (no I/O)
//
// The disk check itself lives in operations::validate; this decides what a
// check result means and how per-library results combine.

use crate::discovery::types::{AppManifest, InstalledGame, LibraryRoot};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Outcome of checking one manifest against one library
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Install directory exists as a directory
    Installed(PathBuf),
    /// No install directory declared; accepted without a disk check
    Unverified,
    /// Declared install directory is missing or not a directory
    Stale(PathBuf),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Verdict::Stale(_))
    }
}

/// `<library>/steamapps/common/<installdir>`, if the manifest declares one
pub fn expected_install_path(library: &LibraryRoot, manifest: &AppManifest) -> Option<PathBuf> {
    manifest
        .install_dir
        .as_ref()
        .map(|dir| library.common().join(dir))
}

/// Decide a manifest's fate given whether its expected path is a directory
///
/// `is_dir` is only consulted when the manifest declares an install dir.
pub fn judge<F>(library: &LibraryRoot, manifest: &AppManifest, is_dir: F) -> Verdict
where
    F: FnOnce(&PathBuf) -> bool,
{
    match expected_install_path(library, manifest) {
        Some(path) if is_dir(&path) => Verdict::Installed(path),
        Some(path) => Verdict::Stale(path),
        None => Verdict::Unverified,
    }
}

/// Union of per-library id sets
pub fn merge_app_ids<I>(per_library: I) -> BTreeSet<u32>
where
    I: IntoIterator<Item = BTreeSet<u32>>,
{
    per_library.into_iter().flatten().collect()
}

/// Collapse per-library games to one entry per app id
///
/// Earlier entries win, so pass libraries in scan order. Output is sorted by id.
pub fn merge_games<I>(per_library: I) -> Vec<InstalledGame>
where
    I: IntoIterator<Item = Vec<InstalledGame>>,
{
    let mut seen = BTreeSet::new();
    let mut out: Vec<InstalledGame> = per_library
        .into_iter()
        .flatten()
        .filter(|game| seen.insert(game.app_id))
        .collect();
    out.sort_by_key(|game| game.app_id);
    out
}
