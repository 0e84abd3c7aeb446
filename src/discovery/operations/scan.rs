// Manifest enumeration for one library (I/O: directory listing, file reads)

use crate::discovery::pure::{is_manifest_file_name, parse_manifest};
use crate::discovery::types::{AppManifest, LibraryRoot};
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Parse one manifest file, or `None` if it is unreadable or has no usable appid
pub fn read_manifest(path: &Path) -> Option<AppManifest> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Skipping unreadable manifest {}: {}", path.display(), e);
            return None;
        }
    };

    let manifest = parse_manifest(&String::from_utf8_lossy(&bytes));
    if manifest.is_none() {
        warn!("Skipping manifest without a numeric appid: {}", path.display());
    }
    manifest
}

/// Read every `appmanifest_*.acf` in `<library>/steamapps`
///
/// A missing `steamapps` (or one that is not a directory) contributes nothing.
/// Any other failure to list it is returned; failures on individual files are
/// logged and skipped.
pub fn scan_library(library: &LibraryRoot) -> io::Result<Vec<AppManifest>> {
    let steamapps = library.steamapps();
    let entries = match fs::read_dir(&steamapps) {
        Ok(entries) => entries,
        Err(e)
            if matches!(
                e.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let mut out = Vec::new();
    for entry_result in entries {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping entry in {}: {}", steamapps.display(), e);
                continue;
            }
        };

        let file_name = entry.file_name();
        if let Some(file_name) = file_name.to_str()
            && is_manifest_file_name(file_name)
            && let Some(manifest) = read_manifest(&entry.path())
        {
            out.push(manifest);
        }
    }

    Ok(out)
}
