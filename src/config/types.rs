use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User settings for library scanning
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShelfConfig {
    /// Steam installation to scan; empty means auto-detect
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub steam_root: String,
    /// Libraries to scan in addition to those Steam declares
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_libraries: Vec<String>,
}

impl ShelfConfig {
    pub fn steam_root(&self) -> Option<PathBuf> {
        let root = self.steam_root.trim();
        (!root.is_empty()).then(|| PathBuf::from(root))
    }

    pub fn extra_libraries(&self) -> Vec<PathBuf> {
        self.extra_libraries
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .collect()
    }
}
