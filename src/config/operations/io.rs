use crate::config::types::ShelfConfig;
use crate::paths::PATH_SHELF;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::warn;

/// `settings.json` in the data directory, if one can be determined
pub fn settings_path() -> Option<PathBuf> {
    PATH_SHELF.as_ref().map(|dir| dir.join("settings.json"))
}

pub fn load_cfg() -> ShelfConfig {
    match settings_path() {
        Some(path) => load_cfg_from(&path),
        None => {
            warn!("No data directory (HOME and XDG_DATA_HOME unset); using default settings");
            ShelfConfig::default()
        }
    }
}

/// Load settings, falling back to defaults if the file is missing or broken
pub fn load_cfg_from(path: &Path) -> ShelfConfig {
    let Ok(file) = File::open(path) else {
        return ShelfConfig::default();
    };

    match serde_json::from_reader::<_, ShelfConfig>(BufReader::new(file)) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring invalid settings {}: {}", path.display(), e);
            ShelfConfig::default()
        }
    }
}

pub fn save_cfg(config: &ShelfConfig) -> Result<(), Box<dyn Error>> {
    let path = settings_path().ok_or("No data directory (HOME and XDG_DATA_HOME unset)")?;
    save_cfg_to(config, &path)
}

pub fn save_cfg_to(config: &ShelfConfig, path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}
