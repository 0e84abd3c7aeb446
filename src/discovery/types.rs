//! Discovery data types
//!
//! Everything here is scan-scoped: built while walking the libraries and
//! dropped once the caller has its result.

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Folder inside a library holding app manifests
pub const STEAMAPPS_DIR: &str = "steamapps";

/// Folder under `steamapps` holding one directory per installed app
pub const COMMON_DIR: &str = "common";

/// Registry of extra library folders, found under the base root's `steamapps`
pub const LIBRARY_FOLDERS_FILE: &str = "libraryfolders.vdf";

/// A directory tree that can host installed Steam apps
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LibraryRoot {
    pub path: PathBuf,
}

impl LibraryRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<root>/steamapps`
    pub fn steamapps(&self) -> PathBuf {
        self.path.join(STEAMAPPS_DIR)
    }

    /// `<root>/steamapps/common`
    pub fn common(&self) -> PathBuf {
        self.steamapps().join(COMMON_DIR)
    }

    /// `<root>/steamapps/libraryfolders.vdf`
    pub fn library_folders_file(&self) -> PathBuf {
        self.steamapps().join(LIBRARY_FOLDERS_FILE)
    }
}

/// One extra library location as declared in `libraryfolders.vdf`
///
/// The path is kept exactly as written (already unescaped), with whatever
/// separators the OS that wrote it uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryFolderEntry {
    pub path: String,
}

impl LibraryFolderEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn to_root(&self) -> LibraryRoot {
        LibraryRoot::new(PathBuf::from(&self.path))
    }
}

/// Fields pulled out of one `appmanifest_<id>.acf`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppManifest {
    pub app_id: u32,
    /// Directory name under `steamapps/common`, if declared
    pub install_dir: Option<String>,
    /// Display name, best effort
    pub name: Option<String>,
}

/// An app confirmed to be present on disk
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InstalledGame {
    pub app_id: u32,
    pub name: Option<String>,
    /// Library root the accepting manifest was found in
    pub library: PathBuf,
    /// Validated install directory; `None` when the manifest declared none
    pub install_path: Option<PathBuf>,
}

/// Failures that make a scan impossible
///
/// Missing files, missing folders and corrupt manifests are never reported
/// here. An empty result means no installed games were found.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Steam root {} is not a directory", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("Steam root {} cannot be read: {source}", .path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
