// Pure parsing of libraryfolders.vdf contents (no I/O)
//
// Modern layout:
//   "libraryfolders" { "0" { "path" "D:\\SteamLibrary" "label" "" ... } }
// Legacy layout:
//   "LibraryFolders" { "TimeNextStatsReport" "..." "1" "D:\\SteamLibrary" }

use super::kv;
use crate::discovery::types::LibraryFolderEntry;

/// Library entries are numeric keys at the top level or inside the wrapper block
fn is_library_key(key: &str, depth: usize) -> bool {
    depth <= 1 && !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

/// Extract every declared library path, in file order
///
/// Blocks without a `path`, or with an empty one, are skipped. Unknown keys
/// and key order inside a block do not matter.
pub fn parse_library_folders(text: &str) -> Vec<LibraryFolderEntry> {
    let mut paths = kv::values_in_blocks(text, "path", is_library_key);
    if paths.is_empty() {
        paths = kv::values_of_keys(text, is_library_key);
    }

    paths
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .map(LibraryFolderEntry::new)
        .collect()
}
