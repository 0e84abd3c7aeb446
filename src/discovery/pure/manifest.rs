// Pure appmanifest_*.acf handling (no I/O)
//
// Only three fields are needed, so they are pulled out with patterns rather
// than by parsing the whole AppState tree.

use super::kv::unescape;
use crate::discovery::types::AppManifest;
use regex::Regex;
use std::sync::LazyLock;

pub const MANIFEST_PREFIX: &str = "appmanifest_";
pub const MANIFEST_SUFFIX: &str = ".acf";

static APPID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)"appid"\s*"(\d+)""#).expect("valid appid regex"));
static INSTALLDIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)"installdir"\s*"((?:[^"\\]|\\.)+)""#).expect("valid installdir regex")
});
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)"name"\s*"((?:[^"\\]|\\.)*)""#).expect("valid name regex")
});

/// Whether a `steamapps` entry looks like an app manifest
pub fn is_manifest_file_name(file_name: &str) -> bool {
    file_name.starts_with(MANIFEST_PREFIX)
        && file_name.ends_with(MANIFEST_SUFFIX)
        && file_name.len() > MANIFEST_PREFIX.len() + MANIFEST_SUFFIX.len()
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| unescape(m.as_str()))
}

/// Parse manifest contents
///
/// Returns `None` when no numeric `appid` fits in a u32; such a file is not a
/// usable manifest. An empty `installdir` counts as not declared.
pub fn parse_manifest(text: &str) -> Option<AppManifest> {
    let app_id = APPID_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())?;

    let install_dir = capture(&INSTALLDIR_RE, text).filter(|d| !d.is_empty());
    let name = capture(&NAME_RE, text).filter(|n| !n.is_empty());

    Some(AppManifest {
        app_id,
        install_dir,
        name,
    })
}
