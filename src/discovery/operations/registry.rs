// Reading libraryfolders.vdf from disk

use crate::discovery::pure::parse_library_folders;
use crate::discovery::types::LibraryFolderEntry;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Extra library folders declared in the registry file at `path`
///
/// A missing file is normal for a fresh install and yields nothing. Invalid
/// UTF-8 is replaced rather than rejected.
pub fn read_library_folders(path: &Path) -> Vec<LibraryFolderEntry> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No library registry at {}", path.display());
            return Vec::new();
        }
        Err(e) => {
            warn!("Cannot read library registry {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let entries = parse_library_folders(&String::from_utf8_lossy(&bytes));
    debug!(
        "Library registry {} declares {} folder(s)",
        path.display(),
        entries.len()
    );
    entries
}
